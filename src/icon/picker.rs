//! Helpers behind the editor's icon picker.

use super::catalog::IconId;
use super::reference::{DEFAULT_SIZE, IconReference};

/// A named swatch offered next to the icon grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub value: &'static str,
}

pub const COLOR_PRESETS: &[ColorPreset] = &[
    ColorPreset { name: "Purple", value: "#8b5cf6" },
    ColorPreset { name: "Red", value: "#ef4444" },
    ColorPreset { name: "Green", value: "#22c55e" },
    ColorPreset { name: "Blue", value: "#3b82f6" },
    ColorPreset { name: "Yellow", value: "#eab308" },
];

/// Split a camel-case icon name into words: `ShieldCheck` -> `Shield Check`.
pub fn display_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            label.push(' ');
        }
        label.push(ch);
    }
    label.trim().to_string()
}

/// Filter the catalog by a free-text query.
///
/// Matching is case-insensitive against both the raw name and its display
/// label, so `"shield c"` finds `ShieldCheck`. A blank query returns every
/// icon in catalog order.
pub fn search(query: &str) -> Vec<IconId> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return IconId::ALL.to_vec();
    }
    IconId::ALL
        .iter()
        .copied()
        .filter(|id| {
            id.name().to_lowercase().contains(&query)
                || display_label(id.name()).to_lowercase().contains(&query)
        })
        .collect()
}

/// Look up a preset by its swatch name, ignoring case.
pub fn preset(name: &str) -> Option<&'static ColorPreset> {
    COLOR_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Reference inserted when the user clicks an icon in the picker.
///
/// No selected color means the icon inherits the surrounding text color.
pub fn reference_for(icon: IconId, color: Option<&str>) -> IconReference {
    let reference = IconReference::new(icon).with_size(DEFAULT_SIZE);
    match color.filter(|c| !c.is_empty()) {
        Some(color) => reference.with_color(color),
        None => reference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_splits_camel_case() {
        assert_eq!(display_label("ShieldCheck"), "Shield Check");
        assert_eq!(display_label("BarChart2"), "Bar Chart2");
        assert_eq!(display_label("Eye"), "Eye");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_blank_query_returns_everything() {
        assert_eq!(search("").len(), IconId::ALL.len());
        assert_eq!(search("   ").len(), IconId::ALL.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let found = search("CLOUD");
        assert_eq!(found, vec![IconId::DownloadCloud, IconId::UploadCloud]);
    }

    #[test]
    fn test_search_matches_display_label_with_spaces() {
        assert_eq!(search("shield c"), vec![IconId::ShieldCheck]);
        assert_eq!(search("layout dash"), vec![IconId::LayoutDashboard]);
    }

    #[test]
    fn test_search_without_matches_is_empty() {
        assert!(search("rocket").is_empty());
    }

    #[test]
    fn test_reference_for_without_color_inherits() {
        let reference = reference_for(IconId::Star, None);
        assert_eq!(reference.color(), None);
        assert_eq!(reference.size(), Some("16"));

        let red = reference_for(IconId::Star, Some(COLOR_PRESETS[1].value));
        assert_eq!(red.color(), Some("#ef4444"));
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(preset("green").map(|p| p.value), Some("#22c55e"));
        assert!(preset("Magenta").is_none());
    }
}
