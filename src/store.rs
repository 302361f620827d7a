//! Page records loaded from the site's JSON data file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors raised while loading or querying the page store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read page data {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid page data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("no page with slug `{0}`")]
    PageNotFound(String),
}

/// A single documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    /// Editor HTML; may contain icon fragments.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub icon_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Deserialize)]
struct SiteData {
    #[serde(default)]
    pages: Vec<Page>,
}

/// Read-only collection of pages.
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages: Vec<Page>,
}

impl PageStore {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Load a `{ "pages": [...] }` data file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid page data.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let _scope = crate::perf::scope("store.load");
        let raw = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&raw)?;
        tracing::debug!(path = %path.display(), pages = store.pages.len(), "loaded page data");
        Ok(store)
    }

    /// Parse page data from a JSON string.
    ///
    /// # Errors
    /// Returns an error if the JSON does not describe a page collection.
    pub fn from_json(raw: &str) -> Result<Self, StoreError> {
        let data: SiteData = serde_json::from_str(raw)?;
        Ok(Self::new(data.pages))
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Find a page by exact slug.
    pub fn find(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.slug == slug)
    }

    /// Like [`find`](Self::find), but a missing slug is an error.
    ///
    /// # Errors
    /// Returns [`StoreError::PageNotFound`] when no page has `slug`.
    pub fn get(&self, slug: &str) -> Result<&Page, StoreError> {
        self.find(slug)
            .ok_or_else(|| StoreError::PageNotFound(slug.to_string()))
    }
}
