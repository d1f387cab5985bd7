//! Composite shape primitives drawn directly onto a [`Canvas`](crate::raster::Canvas).
//!
//! Each shape is built into a [`Coverage`](crate::raster::Coverage) mask from
//! simpler parts (rectangles, ellipses, arcs, segments) and blended once.

mod circle;
mod rounded_rect;

pub use circle::{circle, circle_marker, Circle};
pub use rounded_rect::{rounded_rect, RoundedRect};

use crate::paint::Color;

/// Outline drawn on the inside edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Stroke {
    pub color: Color,
    /// Thickness in pixels. Zero is treated as one.
    pub width: u32,
}

impl Stroke {
    #[inline]
    pub const fn new(color: Color, width: u32) -> Self {
        Self { color, width }
    }

    #[inline]
    pub fn effective_width(self) -> u32 {
        self.width.max(1)
    }
}
