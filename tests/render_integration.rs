use std::path::Path;

use iconmark::prelude::*;

fn fixture() -> PageStore {
    PageStore::load(Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site.json"))
        .expect("fixture loads")
}

#[test]
fn test_fixture_page_renders_all_outcomes() {
    let store = fixture();
    let page = store.get("getting-started").unwrap();
    let html = render_page(page, RenderMode::View, &BuiltinCatalog);

    assert!(html.contains(IconId::LayoutDashboard.path_data()));
    assert!(html.contains(IconId::DownloadCloud.path_data()));
    assert!(html.contains("Legacy badge: [Rocket]"));
    assert!(html.contains("Placeholder: [icon]"));
    assert!(!html.contains("data-icon"));
}

#[test]
fn test_page_without_icon_has_no_header_svg() {
    let store = fixture();
    let page = store.get("security").unwrap();
    let html = render_page(page, RenderMode::View, &BuiltinCatalog);
    assert!(!html.contains(r#"width="32""#));
    assert!(html.contains(IconId::Key.path_data()));
}

#[test]
fn test_edit_mode_is_explicit() {
    let store = fixture();
    let page = store.get("security").unwrap();
    let view = render_page(page, RenderMode::View, &BuiltinCatalog);
    let edit = render_page(page, RenderMode::Edit, &BuiltinCatalog);
    assert!(!view.contains("Page Information"));
    assert!(edit.contains("Page Information"));
    assert!(edit.contains(r#"href="/admin/pages/2/edit""#));
    assert!(edit.len() > view.len());
}

#[test]
fn test_missing_slug_is_an_error() {
    let store = fixture();
    assert!(store.get("nowhere").is_err());
}
