//! Inline SVG output for resolved icons.

use std::fmt::Write;

use super::reference::DEFAULT_SIZE;

/// Color used when a reference has none, or an unusable one.
pub const INHERIT_COLOR: &str = "currentColor";

const WRAPPER_STYLE: &str = "display: inline-flex; align-items: center; margin: 0 2px; vertical-align: middle;";

const MAX_SIZE_DIGITS: usize = 4;

const COLOR_FUNCTIONS: [&str; 4] = ["rgb", "rgba", "hsl", "hsla"];

/// Return `color` if it is safe to place inside a `style` attribute.
///
/// Accepted: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, bare color keywords
/// (`red`, `currentColor`), and `rgb()`/`rgba()`/`hsl()`/`hsla()` with
/// numeric arguments. Everything else falls back to [`INHERIT_COLOR`].
pub fn sanitize_color(color: Option<&str>) -> &str {
    let Some(color) = color.map(str::trim).filter(|c| !c.is_empty()) else {
        return INHERIT_COLOR;
    };
    if is_hex_color(color) || is_color_keyword(color) || is_color_function(color) {
        color
    } else {
        tracing::warn!(color, "rejecting icon color");
        INHERIT_COLOR
    }
}

fn is_hex_color(color: &str) -> bool {
    color.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
    })
}

fn is_color_keyword(color: &str) -> bool {
    color.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_color_function(color: &str) -> bool {
    let Some((func, rest)) = color.split_once('(') else {
        return false;
    };
    let Some(args) = rest.strip_suffix(')') else {
        return false;
    };
    COLOR_FUNCTIONS.iter().any(|f| func.eq_ignore_ascii_case(f))
        && !args.trim().is_empty()
        && args
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ',' | '.' | '%' | '/' | ' ' | '-' | '+'))
}

/// Return `size` if it is a positive pixel count, else the default.
pub fn sanitize_size(size: Option<&str>) -> &str {
    let Some(size) = size.map(str::trim).filter(|s| !s.is_empty()) else {
        return DEFAULT_SIZE;
    };
    let valid = size.len() <= MAX_SIZE_DIGITS
        && size.bytes().all(|b| b.is_ascii_digit())
        && size.bytes().any(|b| b != b'0');
    if valid {
        size
    } else {
        tracing::warn!(size, "rejecting icon size");
        DEFAULT_SIZE
    }
}

/// Render the inline wrapper and `<svg>` element for one icon.
///
/// `path_data` is trusted catalog markup and is emitted verbatim.
pub fn render_inline(path_data: &str, color: Option<&str>, size: Option<&str>) -> String {
    let color = sanitize_color(color);
    let size = sanitize_size(size);
    let mut out = String::with_capacity(path_data.len() + 384);
    let _ = write!(
        out,
        r#"<span class="inline-icon" style="color: {color}; {WRAPPER_STYLE}">"#
    );
    push_svg(&mut out, path_data, size, Some("margin-right: 0.25em;"));
    out.push_str("</span>");
    out
}

/// Render a bare `<svg>` element, used for page header icons.
pub fn render_svg(path_data: &str, color: Option<&str>, size: &str) -> String {
    let color = sanitize_color(color);
    let size = sanitize_size(Some(size));
    let mut out = String::with_capacity(path_data.len() + 256);
    let style = format!("color: {color};");
    push_svg(&mut out, path_data, size, Some(style.as_str()));
    out
}

fn push_svg(out: &mut String, path_data: &str, size: &str, style: Option<&str>) {
    let _ = write!(
        out,
        r#"<svg width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#
    );
    if let Some(style) = style {
        let _ = write!(out, r#" style="{style}""#);
    }
    out.push('>');
    out.push_str(path_data);
    out.push_str("</svg>");
}
