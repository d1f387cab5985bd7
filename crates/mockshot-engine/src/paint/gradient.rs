use crate::coords::{PixelRect, Vec2};
use crate::error::{RenderError, Result};
use crate::raster::Canvas;

use super::Color;

/// Direction of a linear ramp.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LinearAxis {
    /// One color per row, `start` at the top.
    Vertical,
    /// One color per column, `start` at the left.
    Horizontal,
}

/// Gradient geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GradientAxis {
    Linear(LinearAxis),
    /// Distance-based ramp. `None` center means the middle of the painted
    /// region; `None` radius means the distance from that center to the
    /// region's corner.
    Radial {
        center: Option<Vec2>,
        max_radius: Option<f32>,
    },
}

impl GradientAxis {
    pub const VERTICAL: GradientAxis = GradientAxis::Linear(LinearAxis::Vertical);
    pub const HORIZONTAL: GradientAxis = GradientAxis::Linear(LinearAxis::Horizontal);
    pub const RADIAL: GradientAxis = GradientAxis::Radial { center: None, max_radius: None };
}

/// Two-color gradient definition.
///
/// Immutable value object; painting never mutates it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientSpec {
    pub start: Color,
    pub end: Color,
    pub axis: GradientAxis,
}

impl GradientSpec {
    #[inline]
    pub const fn new(start: Color, end: Color, axis: GradientAxis) -> Self {
        Self { start, end, axis }
    }

    #[inline]
    pub const fn vertical(start: Color, end: Color) -> Self {
        Self::new(start, end, GradientAxis::VERTICAL)
    }

    #[inline]
    pub const fn horizontal(start: Color, end: Color) -> Self {
        Self::new(start, end, GradientAxis::HORIZONTAL)
    }

    /// Radial ramp from `center_color` to `edge_color`, centered on the region.
    #[inline]
    pub const fn radial(center_color: Color, edge_color: Color) -> Self {
        Self::new(center_color, edge_color, GradientAxis::RADIAL)
    }

    /// Paints the gradient over `region`, or the whole canvas when `None`.
    ///
    /// Ratios are computed against the region's own extent; pixels outside
    /// the canvas are cropped.
    pub fn paint(&self, canvas: &mut Canvas, region: Option<PixelRect>) -> Result<()> {
        let region = region.unwrap_or_else(|| canvas.bounds());
        match self.axis {
            GradientAxis::Linear(axis) => fill_linear(canvas, region, self.start, self.end, axis),
            GradientAxis::Radial { center, max_radius } => {
                let center = center.unwrap_or_else(|| region_center(region));
                let max_radius = max_radius.unwrap_or_else(|| corner_distance(region, center));
                fill_radial(canvas, region, center, max_radius, self.start, self.end)
            }
        }
    }
}

/// Creates a `width × height` canvas filled with a linear ramp.
///
/// For index `i` in `[0, extent)`, the ratio is `i / extent`, so the first row
/// (or column) equals `start` exactly and the last one stops one step short of
/// `end`.
pub fn linear_gradient(
    width: u32,
    height: u32,
    start: Color,
    end: Color,
    axis: LinearAxis,
) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height)?;
    let bounds = canvas.bounds();
    fill_linear(&mut canvas, bounds, start, end, axis)?;
    Ok(canvas)
}

/// Creates a `width × height` canvas filled with a radial ramp.
///
/// Cost is one distance evaluation per pixel; avoid repeating this on large
/// canvases.
pub fn radial_gradient(
    width: u32,
    height: u32,
    center: Vec2,
    max_radius: f32,
    center_color: Color,
    edge_color: Color,
) -> Result<Canvas> {
    let mut canvas = Canvas::new(width, height)?;
    let bounds = canvas.bounds();
    fill_radial(&mut canvas, bounds, center, max_radius, center_color, edge_color)?;
    Ok(canvas)
}

/// Paints a linear ramp over `region` of an existing canvas.
pub fn fill_linear(
    canvas: &mut Canvas,
    region: PixelRect,
    start: Color,
    end: Color,
    axis: LinearAxis,
) -> Result<()> {
    if region.is_empty() {
        return Err(RenderError::dimension(format!("empty gradient region {region:?}")));
    }
    let extent = match axis {
        LinearAxis::Vertical => region.height(),
        LinearAxis::Horizontal => region.width(),
    } as f64;

    match axis {
        LinearAxis::Vertical => {
            for i in 0..region.height() {
                let color = start.lerp(end, i as f64 / extent);
                canvas.fill_span(region.y1 + i, region.x1, region.x2, color);
            }
        }
        LinearAxis::Horizontal => {
            for i in 0..region.width() {
                let color = start.lerp(end, i as f64 / extent);
                for y in region.y1..=region.y2 {
                    canvas.set_pixel(region.x1 + i, y, color);
                }
            }
        }
    }
    Ok(())
}

/// Paints a radial ramp over `region` of an existing canvas.
///
/// `ratio = min(distance / max_radius, 1.0)`, so everything beyond
/// `max_radius` takes `edge_color`.
pub fn fill_radial(
    canvas: &mut Canvas,
    region: PixelRect,
    center: Vec2,
    max_radius: f32,
    center_color: Color,
    edge_color: Color,
) -> Result<()> {
    if region.is_empty() {
        return Err(RenderError::dimension(format!("empty gradient region {region:?}")));
    }
    if !(max_radius.is_finite() && max_radius > 0.0) || !center.is_finite() {
        return Err(RenderError::dimension(format!(
            "radial gradient needs a positive radius, got {max_radius}"
        )));
    }
    let Some(visible) = region.intersect(canvas.bounds()) else {
        return Ok(());
    };

    let max_radius = max_radius as f64;
    for y in visible.y1..=visible.y2 {
        for x in visible.x1..=visible.x2 {
            let ratio = (center.distance_to(x as f64, y as f64) / max_radius).min(1.0);
            canvas.set_pixel(x, y, center_color.lerp(edge_color, ratio));
        }
    }
    Ok(())
}

fn region_center(region: PixelRect) -> Vec2 {
    Vec2::new(
        (region.x1 + region.width() / 2) as f32,
        (region.y1 + region.height() / 2) as f32,
    )
}

fn corner_distance(region: PixelRect, center: Vec2) -> f32 {
    let dx = (center.x - region.x1 as f32).max(region.x2 as f32 - center.x);
    let dy = (center.y - region.y1 as f32).max(region.y2 as f32 - center.y);
    (dx * dx + dy * dy).sqrt().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels(c: Color) -> [u8; 3] { c.to_array() }

    // ── linear ────────────────────────────────────────────────────────────

    #[test]
    fn vertical_endpoints_match_reference_ramp() {
        let start = Color::rgb(0, 0, 0);
        let end = Color::rgb(100, 200, 50);
        let c = linear_gradient(1, 100, start, end, LinearAxis::Vertical).unwrap();
        assert_eq!(c.pixel(0, 0), Some(start));
        assert_eq!(c.pixel(0, 99), Some(Color::rgb(99, 198, 49)));
    }

    #[test]
    fn last_row_is_within_one_of_end() {
        // Once the extent exceeds the channel delta, one ramp step is under a
        // unit, so truncation is the only remaining error.
        let start = Color::rgb(65, 105, 225);
        let end = Color::rgb(100, 200, 255);
        for extent in [256u32, 300, 1024, 2796] {
            let c = linear_gradient(3, extent, start, end, LinearAxis::Vertical).unwrap();
            let last = c.pixel(1, extent as i32 - 1).unwrap();
            for (got, want) in channels(last).into_iter().zip(channels(end)) {
                assert!((want as i32 - got as i32).abs() <= 1, "extent={extent}");
            }
        }
    }

    #[test]
    fn long_ramp_reaches_end_within_one() {
        let start = Color::rgb(15, 25, 45);
        let end = Color::rgb(5, 10, 25);
        let c = linear_gradient(1, 852, start, end, LinearAxis::Vertical).unwrap();
        let last = channels(c.pixel(0, 851).unwrap());
        for (got, want) in last.into_iter().zip(channels(end)) {
            assert!((got as i32 - want as i32).abs() <= 1);
        }
    }

    /// Asserts every channel of `ramp` moves one way from its first value to
    /// its last and never leaves that range.
    fn assert_monotonic(ramp: &[Color], what: &str) {
        let (Some(&first), Some(&last)) = (ramp.first(), ramp.last()) else { return };
        let (first, last) = (channels(first), channels(last));
        for pair in ramp.windows(2) {
            let (prev, cur) = (channels(pair[0]), channels(pair[1]));
            for ch in 0..3 {
                let (lo, hi) = (first[ch].min(last[ch]), first[ch].max(last[ch]));
                assert!(cur[ch] >= lo && cur[ch] <= hi, "{what} ch={ch}");
                if first[ch] <= last[ch] {
                    assert!(cur[ch] >= prev[ch], "{what} ch={ch}");
                } else {
                    assert!(cur[ch] <= prev[ch], "{what} ch={ch}");
                }
            }
        }
    }

    const PAIRS: [(Color, Color); 4] = [
        (Color::rgb(10, 240, 128), Color::rgb(250, 5, 128)),
        (Color::rgb(15, 25, 45), Color::rgb(5, 10, 25)),
        (Color::BLACK, Color::WHITE),
        (Color::rgb(106, 90, 255), Color::rgb(72, 219, 251)),
    ];

    #[test]
    fn ramp_is_monotonic_between_endpoints() {
        for (start, end) in PAIRS {
            for extent in [1u32, 2, 3, 17, 40, 255, 256, 300, 1024] {
                let v = linear_gradient(1, extent, start, end, LinearAxis::Vertical).unwrap();
                let column: Vec<Color> = (0..extent as i32).filter_map(|y| v.pixel(0, y)).collect();
                assert_monotonic(&column, &format!("vertical extent={extent}"));
                assert_eq!(column[0], start);

                let h = linear_gradient(extent, 1, start, end, LinearAxis::Horizontal).unwrap();
                let row: Vec<Color> = (0..extent as i32).filter_map(|x| h.pixel(x, 0)).collect();
                assert_monotonic(&row, &format!("horizontal extent={extent}"));
                assert_eq!(row, column);
            }
        }
    }

    #[test]
    fn horizontal_columns_are_uniform() {
        let c = linear_gradient(8, 5, Color::BLACK, Color::WHITE, LinearAxis::Horizontal).unwrap();
        for x in 0..8 {
            let top = c.pixel(x, 0);
            assert!((0..5).all(|y| c.pixel(x, y) == top));
        }
    }

    #[test]
    fn zero_extent_is_invalid_dimension() {
        let err = linear_gradient(10, 0, Color::BLACK, Color::WHITE, LinearAxis::Vertical);
        assert!(matches!(err, Err(RenderError::InvalidDimension(_))));
        let err = linear_gradient(0, 10, Color::BLACK, Color::WHITE, LinearAxis::Horizontal);
        assert!(matches!(err, Err(RenderError::InvalidDimension(_))));
    }

    #[test]
    fn sub_region_uses_its_own_extent() {
        let mut c = Canvas::new(20, 20).unwrap();
        let region = PixelRect::new(5, 10, 9, 13);
        fill_linear(&mut c, region, Color::WHITE, Color::BLACK, LinearAxis::Vertical).unwrap();
        assert_eq!(c.pixel(5, 10), Some(Color::WHITE));
        assert_eq!(c.pixel(9, 11), Some(Color::WHITE.lerp(Color::BLACK, 0.25)));
        assert_eq!(c.pixel(4, 10), Some(Color::BLACK));
    }

    // ── radial ────────────────────────────────────────────────────────────

    #[test]
    fn radial_center_and_far_corner() {
        let center_color = Color::rgb(106, 90, 255);
        let edge_color = Color::rgb(72, 219, 251);
        let c = radial_gradient(11, 11, Vec2::new(5.0, 5.0), 5.0, center_color, edge_color).unwrap();
        assert_eq!(c.pixel(5, 5), Some(center_color));
        assert_eq!(c.pixel(0, 0), Some(edge_color));
        assert_eq!(c.pixel(10, 5), Some(edge_color));
    }

    #[test]
    fn radial_is_symmetric() {
        let c = radial_gradient(9, 9, Vec2::new(4.0, 4.0), 6.0, Color::WHITE, Color::BLACK).unwrap();
        assert_eq!(c.pixel(1, 2), c.pixel(7, 6));
        assert_eq!(c.pixel(4, 0), c.pixel(0, 4));
    }

    #[test]
    fn radial_rejects_non_positive_radius() {
        let err = radial_gradient(4, 4, Vec2::new(2.0, 2.0), 0.0, Color::WHITE, Color::BLACK);
        assert!(matches!(err, Err(RenderError::InvalidDimension(_))));
    }

    #[test]
    fn radial_is_monotonic_outward() {
        for (center_color, edge_color) in PAIRS {
            for radius in [1.0f32, 4.5, 10.0, 40.0] {
                let c = radial_gradient(41, 1, Vec2::new(0.0, 0.0), radius, center_color, edge_color).unwrap();
                let ray: Vec<Color> = (0..41).filter_map(|x| c.pixel(x, 0)).collect();
                assert_monotonic(&ray, &format!("radius={radius}"));
                assert_eq!(ray[0], center_color);
                assert_eq!(ray[40], edge_color);
            }
        }
    }

    #[test]
    fn default_radial_reaches_edge_color_at_the_far_corner() {
        let center_color = Color::rgb(200, 150, 100);
        let edge_color = Color::rgb(10, 20, 30);
        for (w, h) in [(20u32, 10u32), (7, 7), (33, 5), (2, 9), (1290, 40)] {
            let mut c = Canvas::new(w, h).unwrap();
            GradientSpec::radial(center_color, edge_color).paint(&mut c, None).unwrap();
            assert_eq!(c.pixel(w as i32 / 2, h as i32 / 2), Some(center_color), "{w}x{h}");
            assert_eq!(c.pixel(0, 0), Some(edge_color), "{w}x{h}");
        }
    }

    #[test]
    fn default_radial_covers_whole_canvas() {
        let mut c = Canvas::new(20, 10).unwrap();
        GradientSpec::radial(Color::WHITE, Color::BLACK).paint(&mut c, None).unwrap();
        assert_eq!(c.pixel(10, 5), Some(Color::WHITE));
        let corner = c.pixel(0, 0).unwrap();
        assert!(corner.r < 10, "corner should be close to the edge color, got {corner:?}");
    }
}
