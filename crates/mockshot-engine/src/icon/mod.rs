//! Multi-resolution icons.
//!
//! A design is written once at a 1024 px reference. Every target size gets
//! its own canvas and every length is scaled by `width / 1024` and rounded,
//! so small icons are drawn natively instead of downsampled.

mod design;
mod generator;
mod scale;

pub use design::{IconDesign, IconElement, Offset};
pub use generator::{icon_file_name, IconConfig, IconGenerator, IconSizeSet, ParseSizeError};
pub use scale::{IconScale, Len};
