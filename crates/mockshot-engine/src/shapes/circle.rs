use crate::coords::{PixelRect, Point};
use crate::error::{RenderError, Result};
use crate::paint::Fill;
use crate::raster::{Canvas, Coverage};

use super::Stroke;

/// Filled and/or outlined disk of side `2 * radius + 1` pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub fill: Option<Fill>,
    pub outline: Option<Stroke>,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, radius, fill: None, outline: None }
    }

    #[inline]
    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[inline]
    pub fn with_outline(mut self, outline: Stroke) -> Self {
        self.outline = Some(outline);
        self
    }

    #[inline]
    pub fn bounds(&self) -> PixelRect {
        PixelRect::around(self.center, self.radius)
    }

    pub fn paint(&self, canvas: &mut Canvas) -> Result<()> {
        if self.radius < 0 {
            return Err(RenderError::geometry(format!("negative circle radius {}", self.radius)));
        }
        let bbox = self.bounds();
        if let Some(fill) = self.fill {
            canvas.fill_ellipse(bbox, fill);
        }
        if let Some(stroke) = self.outline {
            let mut cov = Coverage::new(bbox, canvas.bounds());
            cov.add_arc(bbox, 0.0, 360.0, stroke.effective_width());
            canvas.composite(&cov, Fill::solid(stroke.color));
        }
        Ok(())
    }
}

/// Filled circle highlight (avatars, status dots, icon nodes).
pub fn circle_marker(canvas: &mut Canvas, center: Point, radius: i32, fill: Fill) -> Result<()> {
    Circle::new(center, radius).with_fill(fill).paint(canvas)
}

/// Circle with optional fill and optional inset outline.
pub fn circle(
    canvas: &mut Canvas,
    center: Point,
    radius: i32,
    fill: Option<Fill>,
    outline: Option<Stroke>,
) -> Result<()> {
    Circle { center, radius, fill, outline }.paint(canvas)
}
