//! Icon references as authored in page content.

use std::fmt;

use super::catalog::IconId;

/// Default rendered size in pixels when a reference carries none.
pub const DEFAULT_SIZE: &str = "16";

/// Name of a referenced icon.
///
/// Names outside the catalog are kept verbatim so a page that references a
/// retired icon still round-trips and renders its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconName {
    Known(IconId),
    Unknown(String),
}

impl IconName {
    /// Parse a persisted `data-icon` value.
    ///
    /// Returns `None` for the empty string and for the literal `"null"`,
    /// both of which the editor writes when no icon was chosen.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw == "null" {
            return None;
        }
        Some(IconId::from_name(raw).map_or_else(|| Self::Unknown(raw.to_string()), Self::Known))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(id) => id.name(),
            Self::Unknown(name) => name,
        }
    }

    pub const fn id(&self) -> Option<IconId> {
        match self {
            Self::Known(id) => Some(*id),
            Self::Unknown(_) => None,
        }
    }
}

impl From<IconId> for IconName {
    fn from(id: IconId) -> Self {
        Self::Known(id)
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inline icon placed in a document: name, color, and size.
///
/// References are immutable. The `with_*` methods return an edited copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IconReference {
    name: Option<IconName>,
    color: Option<String>,
    size: Option<String>,
}

impl IconReference {
    pub fn new(name: impl Into<IconName>) -> Self {
        Self {
            name: Some(name.into()),
            color: None,
            size: None,
        }
    }

    /// A reference with no icon chosen. Renders as `[icon]`.
    pub fn unnamed() -> Self {
        Self::default()
    }

    /// Build a reference from raw persisted attribute values.
    ///
    /// Empty strings are treated as absent for every field.
    pub fn from_attributes(name: &str, color: Option<&str>, size: Option<&str>) -> Self {
        Self {
            name: IconName::parse(name),
            color: non_empty(color),
            size: non_empty(size),
        }
    }

    #[must_use]
    pub fn with_color(&self, color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()).filter(|c: &String| !c.is_empty()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_size(&self, size: impl Into<String>) -> Self {
        Self {
            size: Some(size.into()).filter(|s: &String| !s.is_empty()),
            ..self.clone()
        }
    }

    pub const fn name(&self) -> Option<&IconName> {
        self.name.as_ref()
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Size to render at, falling back to [`DEFAULT_SIZE`].
    pub fn size_or_default(&self) -> &str {
        self.size().unwrap_or(DEFAULT_SIZE)
    }

    /// Human-readable fallback text, e.g. `[Star]` or `[icon]`.
    pub fn label(&self) -> String {
        format!("[{}]", self.name.as_ref().map_or("icon", IconName::as_str))
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(ToOwned::to_owned)
}
