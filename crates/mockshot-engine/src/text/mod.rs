//! Text measurement and line breaking.
//!
//! Layout only ever needs a width per line, so everything here is driven by
//! the [`FontProvider`] capability. Glyph drawing lives in `render`.

mod font_system;
mod measure;
mod wrap;

pub use font_system::{FontSystem, FontUnavailable};
pub use measure::{FixedWidthMeasurer, FontProvider, PlacedGlyph};
pub use wrap::{wrap_paragraphs, wrap_text, LineSequence, TextBlock};
