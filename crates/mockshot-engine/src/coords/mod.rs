//! Coordinate and geometry types shared by the raster, shape and scene layers.
//!
//! Canonical space:
//! - integer pixel coordinates, origin top-left
//! - +X right, +Y down
//! - a pixel's center sits on its integer coordinate
//!
//! Bounding boxes are inclusive on both corners, so `[x1, x2]` spans
//! `x2 - x1 + 1` pixels.

mod point;
mod rect;

pub use point::{Point, Vec2};
pub use rect::PixelRect;
