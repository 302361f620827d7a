// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. icon::IconId)
    clippy::module_name_repetitions
)]

//! # Iconmark
//!
//! Inline icons for documentation pages.
//!
//! The page editor stores a chosen icon as a small, self-describing
//! fragment inside the page HTML:
//!
//! ```text
//! <span data-icon="Star" data-color="#ef4444" data-size="20" class="inline-icon">[Star]</span>
//! ```
//!
//! Iconmark writes those fragments and, at display time, swaps them for
//! inline SVG drawn from one built-in catalog.
//!
//! ```
//! use iconmark::icon::{IconId, IconReference, decode, encode};
//!
//! let star = IconReference::new(IconId::Star).with_size("20");
//! let html = decode(&encode(&star));
//! assert!(html.contains(r#"width="20" height="20""#));
//! ```
//!
//! ## Modules
//!
//! - [`icon`]: Catalog, references, and the fragment codec
//! - [`store`]: Page records from the site data file
//! - [`render`]: Page HTML with icons hydrated
//! - [`config`]: Saved command-line defaults
//! - [`watcher`]: Data file watching for live re-render
//! - [`perf`]: Timing scopes and the render debug log

pub mod config;
pub mod icon;
pub mod perf;
pub mod render;
pub mod store;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::icon::{BuiltinCatalog, IconCatalog, IconId, IconName, IconReference};
    pub use crate::render::{RenderMode, render_page};
    pub use crate::store::{Page, PageStore};
}
