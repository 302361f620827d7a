//! Inline icons in page content.
//!
//! This module handles:
//! - The canonical icon catalog shared by the picker and the renderer
//! - Immutable icon references
//! - Encoding references as `<span data-icon>` fragments and hydrating
//!   those fragments into inline SVG

mod catalog;
mod codec;
pub mod picker;
mod reference;
mod svg;

pub use catalog::{BuiltinCatalog, IconCatalog, IconId, UnknownIcon};
pub use codec::{IconFragment, decode, decode_with, encode, fragments, render_fragment};
pub use reference::{DEFAULT_SIZE, IconName, IconReference};
pub use svg::{INHERIT_COLOR, render_inline, render_svg, sanitize_color, sanitize_size};
