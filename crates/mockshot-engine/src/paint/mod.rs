//! Paint model shared between scenes, icons and the renderer.
//!
//! Scope:
//! - 8-bit RGB colors and translucent fills
//! - linear and radial two-color gradients
//! - the named palette that scenes resolve colors against
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod palette;

pub use color::{Color, Fill};
pub use gradient::{
    fill_linear, fill_radial, linear_gradient, radial_gradient, GradientAxis, GradientSpec,
    LinearAxis,
};
pub use palette::{ColorRef, Palette};

use crate::coords::PixelRect;
use crate::error::Result;
use crate::raster::Canvas;

/// Paint source for backgrounds and filled regions.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Fill),
    Gradient(GradientSpec),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(Fill::solid(color))
    }

    /// Paints `region` (whole canvas when `None`).
    pub fn apply(&self, canvas: &mut Canvas, region: Option<PixelRect>) -> Result<()> {
        match self {
            Paint::Solid(fill) => {
                let region = region.unwrap_or_else(|| canvas.bounds());
                canvas.fill_rect(region, *fill);
                Ok(())
            }
            Paint::Gradient(spec) => spec.paint(canvas, region),
        }
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::solid(c)
    }
}

impl From<GradientSpec> for Paint {
    #[inline]
    fn from(g: GradientSpec) -> Self {
        Paint::Gradient(g)
    }
}
