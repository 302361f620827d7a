//! Encoding icon references into persisted markup and hydrating that
//! markup back into inline SVG.
//!
//! The persisted form is what the editor writes into page content:
//!
//! ```text
//! <span data-icon="Star" data-color="#ef4444" data-size="20" class="inline-icon">[Star]</span>
//! ```
//!
//! Decoding never fails. Fragments naming no icon become `[icon]`, names
//! the catalog does not know become `[Name]`, and anything that does not
//! match the fragment shape is copied through untouched.
//!
//! A placeholder that sits directly between an unmatched `<span ...>` and
//! its `</span>` has its brackets written as `&#91;`/`&#93;`, so decoded
//! output never forms a new fragment.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::catalog::{BuiltinCatalog, IconCatalog};
use super::reference::{IconName, IconReference};
use super::svg;

/// Matches one persisted fragment. Attributes must appear in the order the
/// encoder writes them; `data-color` and `data-size` may be missing.
static FRAGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"<span\b[^>]*?\bdata-icon="(?P<name>[^"]*)""#,
        r#"(?:[^>]*?\bdata-color="(?P<color>[^"]*)")?"#,
        r#"(?:[^>]*?\bdata-size="(?P<size>[^"]*)")?"#,
        r#"[^>]*>\[(?P<label>[^\]]*)\]</span>"#,
    ))
    .unwrap_or_else(|err| unreachable!("fragment pattern is valid: {err}"))
});

/// A fragment located in document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFragment {
    /// Byte range of the whole `<span>...</span>` in the source.
    pub range: Range<usize>,
    /// The reference with attribute entities decoded.
    pub reference: IconReference,
}

/// Serialize a reference into its persisted `<span data-icon>` form.
///
/// Attribute values are escaped, and brackets in the label are written as
/// character references so the fragment stays matchable by [`decode`].
pub fn encode(reference: &IconReference) -> String {
    let name = reference.name().map_or("", IconName::as_str);
    let color = reference.color().unwrap_or("");
    let size = reference.size_or_default();
    let label = reference.name().map_or("icon", IconName::as_str);
    format!(
        r#"<span data-icon="{}" data-color="{}" data-size="{}" class="inline-icon">[{}]</span>"#,
        html_escape::encode_double_quoted_attribute(name),
        html_escape::encode_double_quoted_attribute(color),
        html_escape::encode_double_quoted_attribute(size),
        escape_label(label),
    )
}

/// Replace every icon fragment in `content` using the built-in catalog.
pub fn decode(content: &str) -> String {
    decode_with(content, &BuiltinCatalog)
}

/// Replace every icon fragment in `content`, resolving names in `catalog`.
pub fn decode_with(content: &str, catalog: &dyn IconCatalog) -> String {
    let mut replaced = 0usize;
    let out = FRAGMENT_RE.replace_all(content, |caps: &Captures<'_>| {
        replaced += 1;
        let rendered = render_fragment(&reference_from(caps), catalog);
        match caps.get(0) {
            Some(whole) if is_span_body(content, whole.range()) => shield_brackets(rendered),
            _ => rendered,
        }
    });
    if replaced > 0 {
        tracing::debug!(fragments = replaced, bytes = content.len(), "hydrated icon fragments");
    }
    out.into_owned()
}

/// Locate every icon fragment in `content`, in document order.
pub fn fragments(content: &str) -> impl Iterator<Item = IconFragment> + '_ {
    FRAGMENT_RE.captures_iter(content).filter_map(|caps| {
        let whole = caps.get(0)?;
        Some(IconFragment {
            range: whole.range(),
            reference: reference_from(&caps),
        })
    })
}

/// Render the replacement for one decoded reference.
pub fn render_fragment(reference: &IconReference, catalog: &dyn IconCatalog) -> String {
    let Some(name) = reference.name() else {
        tracing::debug!("icon fragment without a name");
        return "[icon]".to_string();
    };
    match catalog.resolve(name.as_str()) {
        Some(path) => svg::render_inline(path, reference.color(), reference.size()),
        None => {
            tracing::debug!(name = name.as_str(), "icon not in catalog");
            format!("[{}]", html_escape::encode_text(name.as_str()))
        }
    }
}

fn reference_from(caps: &Captures<'_>) -> IconReference {
    let attr = |group: &str| caps.name(group).map(|m| unescape(m.as_str()));
    let name = attr("name").unwrap_or_default();
    let color = attr("color");
    let size = attr("size");
    IconReference::from_attributes(&name, color.as_deref(), size.as_deref())
}

fn unescape(value: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(value)
}

/// True when `range` is the whole body of an enclosing `<span ...>`.
fn is_span_body(content: &str, range: Range<usize>) -> bool {
    content[..range.start].ends_with('>') && content[range.end..].starts_with("</span>")
}

fn shield_brackets(rendered: String) -> String {
    if rendered.starts_with('[') {
        rendered.replace('[', "&#91;").replace(']', "&#93;")
    } else {
        rendered
    }
}

fn escape_label(label: &str) -> String {
    html_escape::encode_text(label)
        .replace('[', "&#91;")
        .replace(']', "&#93;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::catalog::IconId;

    struct TinyCatalog;

    impl IconCatalog for TinyCatalog {
        fn resolve(&self, name: &str) -> Option<&'static str> {
            (name == "Dot").then_some("<circle r=\"1\"/>")
        }

        fn list(&self) -> Vec<&'static str> {
            vec!["Dot"]
        }
    }

    #[test]
    fn test_encode_matches_persisted_shape() {
        let reference = IconReference::new(IconId::Star)
            .with_color("#ef4444")
            .with_size("20");
        assert_eq!(
            encode(&reference),
            r##"<span data-icon="Star" data-color="#ef4444" data-size="20" class="inline-icon">[Star]</span>"##
        );
    }

    #[test]
    fn test_encode_defaults_for_empty_reference() {
        assert_eq!(
            encode(&IconReference::unnamed()),
            r#"<span data-icon="" data-color="" data-size="16" class="inline-icon">[icon]</span>"#
        );
    }

    #[test]
    fn test_encode_escapes_hostile_name() {
        let reference = IconReference::from_attributes(r#"x"><script>alert(1)</script>"#, None, None);
        let encoded = encode(&reference);
        assert!(!encoded.contains("<script>"));
        assert_eq!(fragments(&encoded).count(), 1);
        let decoded = decode(&encoded);
        assert!(!decoded.contains("<script>"), "decoded: {decoded}");
        assert!(decoded.starts_with("[x"));
        assert!(decoded.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_encode_escapes_brackets_in_label() {
        let reference = IconReference::from_attributes("a]b[c", None, Some("16"));
        let encoded = encode(&reference);
        assert!(encoded.contains("[a&#93;b&#91;c]</span>"));
        let found: Vec<_> = fragments(&encoded).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].reference, reference);
    }

    #[test]
    fn test_decode_known_icon_renders_svg() {
        let html = decode(r##"<span data-icon="Moon" data-color="#3b82f6" data-size="18">[Moon]</span>"##);
        assert!(html.contains("color: #3b82f6"));
        assert!(html.contains(r#"width="18" height="18""#));
        assert!(html.contains(IconId::Moon.path_data()));
    }

    #[test]
    fn test_decode_tolerates_extra_attributes() {
        let html = decode(
            r#"<span style="color: red" data-icon="Key" class="x" data-color="" data-size="" contenteditable="false">[Key]</span>"#,
        );
        assert!(html.contains(IconId::Key.path_data()));
        assert!(html.contains("color: currentColor"));
    }

    #[test]
    fn test_decode_leaves_malformed_markup() {
        let content = r#"<span data-icon="Star">Star</span> and <span data-icon="Star">[Star]"#;
        assert_eq!(decode(content), content);
    }

    #[test]
    fn test_placeholder_inside_unmatched_span_stays_inert() {
        let content = r#"<span data-icon="Q"><span data-icon="Zz" data-color="" data-size="">[Zz]</span></span>"#;
        let once = decode(content);
        assert_eq!(once, r#"<span data-icon="Q">&#91;Zz&#93;</span>"#);
        assert_eq!(decode(&once), once);

        let unnamed = r#"<span data-icon="Q"><span data-icon="" data-color="" data-size="">[icon]</span></span>"#;
        let once = decode(unnamed);
        assert_eq!(once, r#"<span data-icon="Q">&#91;icon&#93;</span>"#);
        assert_eq!(decode(&once), once);
    }

    #[test]
    fn test_svg_inside_unmatched_span_is_unchanged() {
        let content = r#"<span data-icon="Q"><span data-icon="Sun" data-color="" data-size="">[Sun]</span></span>"#;
        let once = decode(content);
        assert!(once.contains(IconId::Sun.path_data()));
        assert!(once.ends_with("</svg></span></span>"));
        assert_eq!(decode(&once), once);
    }

    #[test]
    fn test_decode_with_custom_catalog() {
        let content = r#"<span data-icon="Dot" data-color="" data-size="">[Dot]</span><span data-icon="Star" data-color="" data-size="">[Star]</span>"#;
        let html = decode_with(content, &TinyCatalog);
        assert!(html.contains("<circle r=\"1\"/>"));
        assert!(html.ends_with("[Star]"));
    }

    #[test]
    fn test_fragments_report_ranges() {
        let first = encode(&IconReference::new(IconId::Sun));
        let content = format!("a {first} b");
        let found: Vec<_> = fragments(&content).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].range, 2..2 + first.len());
        assert_eq!(found[0].reference.name().and_then(|n| n.id()), Some(IconId::Sun));
        assert_eq!(found[0].reference.size(), Some("16"));
    }

    #[test]
    fn test_decoded_attribute_entities_resolve() {
        let html = decode(r#"<span data-icon="Star" data-color="rgb(1,&#32;2,&#32;3)" data-size="">[Star]</span>"#);
        assert!(html.contains("color: rgb(1, 2, 3)"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn encoded_fragment_always_matches(name in ".{0,40}", color in "[ -~]{0,20}") {
                let reference = IconReference::from_attributes(&name, Some(color.as_str()), Some("16"));
                let encoded = encode(&reference);
                let found: Vec<_> = fragments(&encoded).collect();
                prop_assert_eq!(found.len(), 1);
                prop_assert_eq!(&found[0].reference, &reference);
            }

            #[test]
            fn decode_is_idempotent(name in "[A-Za-z0-9<>\"&]{0,24}", size in "[0-9]{0,3}") {
                let encoded = encode(&IconReference::from_attributes(&name, None, Some(size.as_str())));
                let once = decode(&format!("before {encoded} after"));
                prop_assert_eq!(decode(&once), once.clone());
                prop_assert!(!once.contains("data-icon"));
            }

            #[test]
            fn decode_is_idempotent_inside_unmatched_span(
                outer in "[A-Za-z]{0,8}",
                name in "[A-Za-z0-9]{0,12}",
            ) {
                let encoded = encode(&IconReference::from_attributes(&name, None, None));
                let content = format!(r#"<p><span data-icon="{outer}">{encoded}</span></p>"#);
                let once = decode(&content);
                prop_assert_eq!(decode(&once), once.clone());
            }

            #[test]
            fn decode_never_emits_name_markup(name in "[a-z<>/ ]{1,24}") {
                let encoded = encode(&IconReference::from_attributes(&name, None, None));
                let decoded = decode(&encoded);
                prop_assert!(!decoded.contains('<'));
            }
        }
    }
}
