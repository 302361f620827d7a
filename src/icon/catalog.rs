//! The canonical icon catalog.
//!
//! Every icon the picker can insert is also renderable at display time:
//! both read the same `IconId` table.

use std::fmt;
use std::str::FromStr;

macro_rules! icon_catalog {
    ($($variant:ident => $name:literal, $path:literal;)+) => {
        /// Closed set of supported icon identifiers.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconId {
            $($variant,)+
        }

        impl IconId {
            /// All icons, in picker order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The persisted name of this icon (the `data-icon` value).
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// SVG body drawn inside a `0 0 24 24` viewBox.
            pub const fn path_data(self) -> &'static str {
                match self {
                    $(Self::$variant => $path,)+
                }
            }

            /// Exact, case-sensitive lookup by persisted name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

icon_catalog! {
    BarChart2 => "BarChart2",
        r#"<line x1="18" y1="20" x2="18" y2="10"/><line x1="12" y1="20" x2="12" y2="4"/><line x1="6" y1="20" x2="6" y2="14"/>"#;
    Code => "Code",
        r#"<polyline points="16,18 22,12 16,6"/><polyline points="8,6 2,12 8,18"/>"#;
    Code2 => "Code2",
        r#"<path d="m18 16 4-4-4-4"/><path d="m6 8-4 4 4 4"/><path d="m14.5 4-5 16"/>"#;
    DownloadCloud => "DownloadCloud",
        r#"<path d="M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242"/><path d="M12 12v9"/><path d="m8 17 4 4 4-4"/>"#;
    Eye => "Eye",
        r#"<path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/><circle cx="12" cy="12" r="3"/>"#;
    FileVideo => "FileVideo",
        r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="m10 15.5 4-2.5-4-2.5v5z"/>"#;
    FileDown => "FileDown",
        r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z"/><path d="M14 2v4a2 2 0 0 0 2 2h4"/><path d="M12 18v-6"/><path d="m9 15 3 3 3-3"/>"#;
    FlaskConical => "FlaskConical",
        r#"<path d="M10 2v7.527a2 2 0 0 1-.211.896L4.72 20.55a1 1 0 0 0 .9 1.45h12.76a1 1 0 0 0 .9-1.45l-5.069-10.127A2 2 0 0 1 14 9.527V2"/><path d="M8.5 2h7"/><path d="M7 16h10"/>"#;
    Hexagon => "Hexagon",
        r#"<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/>"#;
    Key => "Key",
        r#"<path d="m15.5 7.5 2.3 2.3a1 1 0 0 0 1.4 0l2.1-2.1a1 1 0 0 0 0-1.4L19 4"/><path d="m21 2-9.6 9.6"/><circle cx="7.5" cy="15.5" r="5.5"/>"#;
    Layers => "Layers",
        r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/><path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/><path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#;
    LayoutDashboard => "LayoutDashboard",
        r#"<rect width="7" height="9" x="3" y="3" rx="1"/><rect width="7" height="5" x="14" y="3" rx="1"/><rect width="7" height="9" x="14" y="12" rx="1"/><rect width="7" height="5" x="3" y="16" rx="1"/>"#;
    BarChartHorizontalBig => "LucideBarChartHorizontalBig",
        r#"<rect width="6" height="14" x="2" y="5" rx="2"/><rect width="6" height="10" x="12" y="7" rx="2"/><rect width="6" height="6" x="22" y="9" rx="2"/>"#;
    Maximize => "Maximize",
        r#"<path d="M8 3H5a2 2 0 0 0-2 2v3"/><path d="M21 8V5a2 2 0 0 0-2-2h-3"/><path d="M3 16v3a2 2 0 0 0 2 2h3"/><path d="M16 21h3a2 2 0 0 0 2-2v-3"/>"#;
    Minimize => "Minimize",
        r#"<path d="M8 3v3a2 2 0 0 1-2 2H3"/><path d="M21 8h-3a2 2 0 0 1-2-2V3"/><path d="M3 16h3a2 2 0 0 1 2 2v3"/><path d="M16 21v-3a2 2 0 0 1 2-2h3"/>"#;
    Moon => "Moon",
        r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#;
    Settings => "Settings",
        r#"<circle cx="12" cy="12" r="3"/><path d="M12 1v6m0 6v6m11-7h-6m-6 0H1m17-4a4 4 0 0 1-8 0 4 4 0 0 1 8 0ZM7 12a4 4 0 0 1-8 0 4 4 0 0 1 8 0Z"/>"#;
    Sun => "Sun",
        r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#;
    Package => "Package",
        r#"<path d="m7.5 4.27 9 5.15"/><path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"/><path d="m3.3 7 8.7 5 8.7-5"/><path d="M12 22V12"/>"#;
    Pencil => "Pencil",
        r#"<path d="M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z"/><path d="m15 5 4 4"/>"#;
    PieChart => "PieChart",
        r#"<path d="M21.21 15.89A10 10 0 1 1 8 2.83"/><path d="m22 12A10 10 0 0 0 12 2v10z"/>"#;
    Power => "Power",
        r#"<path d="M12 2v10"/><path d="M18.4 6.6a9 9 0 1 1-12.77.04"/>"#;
    Puzzle => "Puzzle",
        r#"<path d="M19.439 7.85c-.049.322-.059.648-.026.975.056.506.194.958.5 1.335.34.389.85.594 1.348.594.492 0 .98-.218 1.294-.687.154-.23.239-.497.239-.776 0-.408-.155-.796-.43-1.084-.275-.29-.634-.459-1.018-.459-.369 0-.714.178-.934.467-.16.211-.252.469-.252.735 0 .199.044.393.117.573"/><path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"/><path d="M5.04 14.147c-.892.991-1.787 2.047-2.014 3.325-.2 1.127.164 2.292 1.09 3.218.926.926 2.091 1.29 3.218 1.09 1.278-.227 2.334-1.122 3.325-2.014.991-.892 2.047-1.787 3.325-2.014 1.127-.2 2.292.164 3.218 1.09.926.926 1.29 2.091 1.09 3.218-.227 1.278-1.122 2.334-2.014 3.325-.892.991-1.787 2.047-2.014 3.325-.2 1.127.164 2.292 1.09 3.218.926.926 2.091 1.29 3.218 1.09 1.278-.227 2.334-1.122 3.325-2.014"/>"#;
    ShieldCheck => "ShieldCheck",
        r#"<path d="M20 13c0 5-3.5 7.5-8 7.5S4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#;
    ShipWheel => "ShipWheel",
        r#"<circle cx="12" cy="12" r="8"/><path d="m12 2 3 10-3-1-3 1Z"/><path d="M12 22V12"/><path d="m17 20.5-5-8 5-3 5 8Z"/><path d="M2 12h10"/><path d="M22 12h-10"/><path d="m7 3.5 5 8-5 3-5-8Z"/>"#;
    Star => "Star",
        r#"<polygon points="12,2 15.09,8.26 22,9.27 17,14.14 18.18,21.02 12,17.77 5.82,21.02 7,14.14 2,9.27 8.91,8.26"/>"#;
    Scroll => "Scroll",
        r#"<path d="M8 21h12a2 2 0 0 0 2-2v-2H10v2a2 2 0 1 1-4 0V5a2 2 0 1 0-4 0v11a2 2 0 0 0 2 2z"/><path d="M19 17V5a2 2 0 0 0-2-2H4"/>"#;
    Trash => "Trash",
        r#"<polyline points="3,6 5,6 21,6"/><path d="m19,6v14a2,2 0 0,1 -2,2H7a2,2 0 0,1 -2,-2V6m3,0V4a2,2 0 0,1 2,-2h4a2,2 0 0,1 2,2v2"/>"#;
    UploadCloud => "UploadCloud",
        r#"<path d="M4 14.899A7 7 0 1 1 15.71 8h1.79a4.5 4.5 0 0 1 2.5 8.242"/><path d="M12 12v9"/><path d="m16 16-4-4-4 4"/>"#;
    Users => "Users",
        r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="m22 21-3.5-3.5a4 4 0 0 0-7 0L8 21"/>"#;
    Plus => "Plus",
        r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#;
    Search => "Search",
        r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.35-4.35"/>"#;
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon: {0}")]
pub struct UnknownIcon(pub String);

impl FromStr for IconId {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

/// Source of icon vector data for rendering.
///
/// Implementations must be immutable after construction; decode relies on
/// the same name always resolving to the same path data.
pub trait IconCatalog: Send + Sync {
    /// Path data for `name`, or `None` when the catalog has no such icon.
    fn resolve(&self, name: &str) -> Option<&'static str>;

    /// Names of every icon this catalog can render.
    fn list(&self) -> Vec<&'static str>;

    fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }
}

/// The catalog compiled into the crate, backed by [`IconId`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinCatalog;

impl IconCatalog for BuiltinCatalog {
    fn resolve(&self, name: &str) -> Option<&'static str> {
        IconId::from_name(name).map(IconId::path_data)
    }

    fn list(&self) -> Vec<&'static str> {
        IconId::ALL.iter().map(|id| id.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_has_every_picker_and_display_icon() {
        assert_eq!(IconId::ALL.len(), 32);
        for name in ["Star", "Plus", "Search", "LucideBarChartHorizontalBig", "Users"] {
            assert!(BuiltinCatalog.contains(name), "missing {name}");
        }
    }

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for id in IconId::ALL {
            assert!(seen.insert(id.name()), "duplicate name {}", id.name());
            assert_eq!(IconId::from_name(id.name()), Some(*id));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(IconId::from_name("Star"), Some(IconId::Star));
        assert_eq!(IconId::from_name("star"), None);
        assert_eq!(IconId::from_name("STAR"), None);
        assert_eq!(IconId::from_name("Sta"), None);
    }

    #[test]
    fn test_from_str_reports_unknown_name() {
        let err = "Rocket".parse::<IconId>().unwrap_err();
        assert_eq!(err, UnknownIcon("Rocket".to_string()));
        assert_eq!(err.to_string(), "unknown icon: Rocket");
    }

    #[test]
    fn test_every_path_is_self_closing_markup() {
        for id in IconId::ALL {
            let path = id.path_data();
            assert!(path.starts_with('<'), "{id} path should be markup");
            assert!(path.ends_with("/>"), "{id} path should close its element");
        }
    }

    #[test]
    fn test_list_preserves_catalog_order() {
        let names = BuiltinCatalog.list();
        assert_eq!(names.first(), Some(&"BarChart2"));
        assert_eq!(names.len(), IconId::ALL.len());
    }
}
