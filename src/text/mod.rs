//! Layer 0: Text Model
//!
//! Pure text-with-styles functionality, with no knowledge of notes or tabs.
//!
//! ## Modules
//!
//! - `cursor`: Offsets, ranges and selections
//! - `style`: Style facets (bold, italic, font size)
//! - `annotations`: Style range layer with overlap, split and remap
//! - `diff`: Single-point edit detection
//! - `utf16`: Translation to and from host UTF-16 offsets
//! - `value`: Text + styles + selection as one value

pub mod annotations;
pub mod cursor;
pub mod diff;
pub mod style;
pub mod utf16;
pub mod value;

// Re-exports for convenience
pub use annotations::{StyleLayer, StyleRange};
pub use cursor::{Selection, TextRange};
pub use diff::TextChange;
pub use style::{Facet, FontSize, FontStyle, FontWeight, SpanStyle};
pub use utf16::Utf16Index;
pub use value::TextValue;
