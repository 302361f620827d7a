//! Page rendering.
//!
//! Produces the HTML body for one documentation page, with icon fragments
//! in its content hydrated to inline SVG. Edit-only chrome (the edit link
//! and the metadata panel) is controlled by an explicit [`RenderMode`].

use std::fmt::Write;

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use crate::icon::{self, IconCatalog};
use crate::store::Page;

/// Pixel size of the icon shown next to a page title.
pub const PAGE_ICON_SIZE: &str = "32";

/// Whether the page is shown to readers or to editors.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    View,
    Edit,
}

impl RenderMode {
    pub const fn is_edit(self) -> bool {
        matches!(self, Self::Edit)
    }

    /// Parse a mode name, as used in config files and `ICONMARK_MODE`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "view" => Some(Self::View),
            "edit" => Some(Self::Edit),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
        }
    }
}

/// Hydrate icon fragments in a page body.
pub fn render_content(content: &str, catalog: &dyn IconCatalog) -> String {
    let _scope = crate::perf::scope("render.content");
    if crate::perf::is_debug_log_enabled() {
        crate::perf::log_event(
            "render.content",
            format!("fragments={} bytes={}", icon::fragments(content).count(), content.len()),
        );
    }
    icon::decode_with(content, catalog)
}

/// Render a whole page as an `<article>` fragment.
pub fn render_page(page: &Page, mode: RenderMode, catalog: &dyn IconCatalog) -> String {
    let _scope = crate::perf::scope("render.page");
    crate::perf::log_event("render.page", format!("slug={} mode={}", page.slug, mode.as_str()));

    let mut out = String::with_capacity(page.content.len() + 2048);
    let _ = writeln!(out, r#"<article class="doc-page" data-slug="{}">"#, attr(&page.slug));
    render_header(&mut out, page, mode, catalog);

    out.push_str("<section class=\"doc-content prose\">\n");
    out.push_str(&render_content(&page.content, catalog));
    out.push_str("\n</section>\n");

    if mode.is_edit() {
        render_info(&mut out, page);
    }
    out.push_str("</article>\n");
    out
}

fn render_header(out: &mut String, page: &Page, mode: RenderMode, catalog: &dyn IconCatalog) {
    out.push_str("<header class=\"doc-header\">\n<div class=\"doc-title\">");
    if let Some(path) = page.icon.as_deref().and_then(|name| catalog.resolve(name)) {
        out.push_str(&icon::render_svg(path, page.icon_color.as_deref(), PAGE_ICON_SIZE));
    }
    let _ = writeln!(out, "<h1>{}</h1></div>", text(&page.title));
    if mode.is_edit() {
        let _ = writeln!(
            out,
            r#"<a class="edit-link" href="/admin/pages/{}/edit">Edit</a>"#,
            attr(&page.id)
        );
    }
    let _ = writeln!(out, "<p class=\"description\">{}</p>", text(&page.description));
    let _ = writeln!(
        out,
        "<p class=\"meta\"><span>Updated {}</span> <span>Category: {}</span></p>",
        format_date(&page.updated_at),
        text(&page.category)
    );
    push_tags(out, &page.tags);
    out.push_str("</header>\n");
}

fn render_info(out: &mut String, page: &Page) {
    out.push_str("<section class=\"page-info\">\n<h2>Page Information</h2>\n<dl>\n");
    let rows = [
        ("Title", text(&page.title).into_owned()),
        ("Slug", text(&page.slug).into_owned()),
        ("Description", text(&page.description).into_owned()),
        ("Category", text(&page.category).into_owned()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "<dt>{label}</dt><dd>{value}</dd>");
    }
    out.push_str("<dt>Tags</dt><dd>");
    push_tags(out, &page.tags);
    out.push_str("</dd>\n");
    let _ = writeln!(out, "<dt>Created</dt><dd>{}</dd>", format_timestamp(&page.created_at));
    let _ = writeln!(out, "<dt>Updated</dt><dd>{}</dd>", format_timestamp(&page.updated_at));
    out.push_str("</dl>\n</section>\n");
}

fn push_tags(out: &mut String, tags: &[String]) {
    if tags.is_empty() {
        return;
    }
    out.push_str("<ul class=\"tags\">");
    for tag in tags {
        let _ = write!(out, "<li class=\"badge\">{}</li>", text(tag));
    }
    out.push_str("</ul>");
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}

fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
