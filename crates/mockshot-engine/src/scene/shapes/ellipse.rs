use crate::coords::PixelRect;
use crate::paint::Fill;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled ellipse inscribed in `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub bounds: PixelRect,
    pub fill: Fill,
}

/// Stroked part of the ellipse inscribed in `bounds`.
///
/// Angles follow [`Coverage::add_arc`](crate::raster::Coverage::add_arc).
#[derive(Debug, Clone, PartialEq)]
pub struct ArcCmd {
    pub bounds: PixelRect,
    pub start_deg: f64,
    pub end_deg: f64,
    pub width: u32,
    pub fill: Fill,
}

impl DrawList {
    #[inline]
    pub fn push_ellipse(&mut self, z: ZIndex, bounds: PixelRect, fill: Fill) {
        self.push(z, DrawCmd::Ellipse(EllipseCmd { bounds, fill }));
    }

    #[inline]
    pub fn push_arc(&mut self, z: ZIndex, bounds: PixelRect, start_deg: f64, end_deg: f64, width: u32, fill: Fill) {
        self.push(z, DrawCmd::Arc(ArcCmd { bounds, start_deg, end_deg, width, fill }));
    }
}
