use crate::coords::PixelRect;
use crate::error::{RenderError, Result};
use crate::paint::{Color, Fill};
use crate::raster::{Canvas, Coverage};

use super::Stroke;

/// Rounded rectangle over an inclusive pixel box.
///
/// Composition:
/// - fill: two cross rectangles plus a disk of diameter `2r` in each corner
/// - outline: four quarter arcs plus four straight edges, all inset
///
/// Nothing is ever painted outside `bounds`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RoundedRect {
    pub bounds: PixelRect,
    pub radius: i32,
    pub fill: Option<Fill>,
    pub outline: Option<Stroke>,
}

impl RoundedRect {
    #[inline]
    pub fn new(bounds: PixelRect, radius: i32) -> Self {
        Self { bounds, radius, fill: None, outline: None }
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

    /// Checks the box and radius, returning the radius clamped to
    /// `min(x2 - x1, y2 - y1) / 2`.
    pub fn clamped_radius(&self) -> Result<i32> {
        let b = self.bounds;
        if b.x2 <= b.x1 || b.y2 <= b.y1 {
            return Err(RenderError::geometry(format!(
                "rounded rect needs x2 > x1 and y2 > y1, got {b:?}"
            )));
        }
        if self.radius < 0 {
            return Err(RenderError::geometry(format!("negative corner radius {}", self.radius)));
        }
        Ok(self.radius.min((b.x2 - b.x1).min(b.y2 - b.y1) / 2))
    }

    pub fn paint(&self, canvas: &mut Canvas) -> Result<()> {
        let r = self.clamped_radius()?;
        let b = self.bounds;

        if let Some(fill) = self.fill {
            let mut cov = Coverage::new(b, canvas.bounds());
            cov.add_rect(PixelRect::new(b.x1 + r, b.y1, b.x2 - r, b.y2));
            cov.add_rect(PixelRect::new(b.x1, b.y1 + r, b.x2, b.y2 - r));
            for corner in corner_boxes(b, r) {
                cov.add_ellipse(corner.bbox);
            }
            canvas.composite(&cov, fill);
        }

        if let Some(stroke) = self.outline {
            let w = stroke.effective_width() as i32;
            let mut cov = Coverage::new(b, canvas.bounds());
            for corner in corner_boxes(b, r) {
                cov.add_arc(corner.bbox, corner.start_deg, corner.start_deg + 90.0, w as u32);
            }
            cov.add_rect(PixelRect::new(b.x1 + r, b.y1, b.x2 - r, b.y1 + w - 1));
            cov.add_rect(PixelRect::new(b.x1 + r, b.y2 - w + 1, b.x2 - r, b.y2));
            cov.add_rect(PixelRect::new(b.x1, b.y1 + r, b.x1 + w - 1, b.y2 - r));
            cov.add_rect(PixelRect::new(b.x2 - w + 1, b.y1 + r, b.x2, b.y2 - r));
            canvas.composite(&cov, Fill::solid(stroke.color));
        }
        Ok(())
    }
}

struct Corner {
    bbox: PixelRect,
    start_deg: f64,
}

fn corner_boxes(b: PixelRect, r: i32) -> [Corner; 4] {
    let d = 2 * r;
    [
        Corner { bbox: PixelRect::new(b.x1, b.y1, b.x1 + d, b.y1 + d), start_deg: 180.0 },
        Corner { bbox: PixelRect::new(b.x2 - d, b.y1, b.x2, b.y1 + d), start_deg: 270.0 },
        Corner { bbox: PixelRect::new(b.x1, b.y2 - d, b.x1 + d, b.y2), start_deg: 90.0 },
        Corner { bbox: PixelRect::new(b.x2 - d, b.y2 - d, b.x2, b.y2), start_deg: 0.0 },
    ]
}

/// Draws a rounded rectangle with optional fill and outline.
///
/// `x2 > x1`, `y2 > y1` and `radius >= 0` are required; the radius is then
/// clamped to half the shorter side, and `radius == 0` yields a plain
/// rectangle. `stroke_width` applies to the outline only and is raised to 1.
#[allow(clippy::too_many_arguments)]
pub fn rounded_rect(
    canvas: &mut Canvas,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    radius: i32,
    fill: Option<Fill>,
    outline: Option<Color>,
    stroke_width: u32,
) -> Result<()> {
    RoundedRect {
        bounds: PixelRect::new(x1, y1, x2, y2),
        radius,
        fill,
        outline: outline.map(|c| Stroke::new(c, stroke_width)),
    }
    .paint(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::rgb(10, 10, 10);
    const INK: Color = Color::rgb(0, 122, 255);

    fn blank() -> Canvas { Canvas::filled(120, 80, BG).unwrap() }

    fn painted(c: &Canvas) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..c.height() as i32 {
            for x in 0..c.width() as i32 {
                if c.pixel(x, y) != Some(BG) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    // ── validation ────────────────────────────────────────────────────────

    #[test]
    fn degenerate_box_is_invalid_geometry() {
        let mut c = blank();
        let err = rounded_rect(&mut c, 10, 10, 10, 40, 2, Some(INK.into()), None, 1);
        assert!(matches!(err, Err(RenderError::InvalidGeometry(_))));
        let err = rounded_rect(&mut c, 10, 40, 50, 20, 2, Some(INK.into()), None, 1);
        assert!(matches!(err, Err(RenderError::InvalidGeometry(_))));
    }

    #[test]
    fn negative_radius_is_invalid_geometry() {
        let mut c = blank();
        let err = rounded_rect(&mut c, 0, 0, 10, 10, -1, Some(INK.into()), None, 1);
        assert!(matches!(err, Err(RenderError::InvalidGeometry(_))));
        assert!(painted(&c).is_empty());
    }

    // ── fill ──────────────────────────────────────────────────────────────

    #[test]
    fn zero_radius_is_plain_rect() {
        let mut c = blank();
        rounded_rect(&mut c, 5, 6, 24, 15, 0, Some(INK.into()), None, 1).unwrap();
        let px = painted(&c);
        assert_eq!(px.len(), 20 * 10);
        assert!(px.iter().all(|&(x, y)| (5..=24).contains(&x) && (6..=15).contains(&y)));
    }

    #[test]
    fn rounded_corners_leave_box_corners_unpainted() {
        let mut c = blank();
        rounded_rect(&mut c, 10, 10, 70, 50, 12, Some(INK.into()), None, 1).unwrap();
        assert_eq!(c.pixel(10, 10), Some(BG));
        assert_eq!(c.pixel(70, 50), Some(BG));
        assert_eq!(c.pixel(40, 10), Some(INK));
        assert_eq!(c.pixel(10, 30), Some(INK));
        assert_eq!(c.pixel(40, 30), Some(INK));
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let (x1, y1, x2, y2) = (20, 10, 90, 40);
        let fill = Some(Fill::translucent(INK, 180));
        let mut huge = blank();
        rounded_rect(&mut huge, x1, y1, x2, y2, 500, fill, Some(Color::WHITE), 3).unwrap();
        let mut clamped = blank();
        rounded_rect(&mut clamped, x1, y1, x2, y2, (y2 - y1) / 2, fill, Some(Color::WHITE), 3)
            .unwrap();

        assert_eq!(huge, clamped);
        let bbox = PixelRect::new(x1, y1, x2, y2);
        assert!(painted(&huge).into_iter().all(|(x, y)| bbox.contains(x, y)));
    }

    #[test]
    fn translucent_fill_blends_once_where_parts_overlap() {
        let mut c = blank();
        let fill = Fill::translucent(Color::WHITE, 200);
        rounded_rect(&mut c, 0, 0, 60, 40, 10, Some(fill), None, 1).unwrap();
        let once = BG.blend(Color::WHITE, 200);
        // (30, 20) lies in both cross rectangles; (12, 12) in both plus a corner disk.
        assert_eq!(c.pixel(30, 20), Some(once));
        assert_eq!(c.pixel(12, 12), Some(once));
    }

    #[test]
    fn offscreen_parts_are_cropped() {
        let mut c = blank();
        rounded_rect(&mut c, -30, -30, 30, 30, 8, Some(INK.into()), None, 1).unwrap();
        assert_eq!(c.pixel(0, 0), Some(INK));
        assert_eq!(c.pixel(31, 0), Some(BG));
    }

    // ── outline ───────────────────────────────────────────────────────────

    #[test]
    fn outline_only_paints_the_border() {
        let mut c = blank();
        rounded_rect(&mut c, 10, 10, 60, 50, 8, None, Some(Color::WHITE), 2).unwrap();
        assert_eq!(c.pixel(35, 10), Some(Color::WHITE));
        assert_eq!(c.pixel(35, 11), Some(Color::WHITE));
        assert_eq!(c.pixel(35, 12), Some(BG));
        assert_eq!(c.pixel(60, 30), Some(Color::WHITE));
        assert_eq!(c.pixel(35, 30), Some(BG));
        assert_eq!(c.pixel(10, 10), Some(BG));
        let bbox = PixelRect::new(10, 10, 60, 50);
        assert!(painted(&c).into_iter().all(|(x, y)| bbox.contains(x, y)));
    }

    #[test]
    fn outline_corners_are_connected() {
        let mut c = blank();
        rounded_rect(&mut c, 0, 0, 40, 40, 10, None, Some(Color::WHITE), 1).unwrap();
        // The arc meets the top edge at x = x1 + r.
        assert_eq!(c.pixel(10, 0), Some(Color::WHITE));
        assert_eq!(c.pixel(0, 10), Some(Color::WHITE));
    }

    #[test]
    fn fill_and_outline_layer_in_order() {
        let mut c = blank();
        rounded_rect(&mut c, 0, 0, 40, 30, 6, Some(INK.into()), Some(Color::WHITE), 1).unwrap();
        assert_eq!(c.pixel(20, 0), Some(Color::WHITE));
        assert_eq!(c.pixel(20, 15), Some(INK));
    }
}
