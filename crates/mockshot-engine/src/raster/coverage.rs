use crate::coords::{PixelRect, Point};

/// Binary pixel mask used to compose a shape before painting it.
///
/// Primitives are unioned into the mask first and the result is blended onto
/// the canvas exactly once, so overlapping parts of a composed shape (the
/// rectangles and corner disks of a rounded rect, say) never double-blend a
/// translucent fill.
///
/// The mask only covers `area`, which callers pass already clipped to the
/// canvas; anything outside is dropped on insertion.
#[derive(Debug, Clone, Default)]
pub struct Coverage {
    area: Option<PixelRect>,
    mask: Vec<bool>,
}

impl Coverage {
    /// Mask over `shape_bounds ∩ clip`. Empty when they do not overlap.
    pub fn new(shape_bounds: PixelRect, clip: PixelRect) -> Self {
        match shape_bounds.normalized().intersect(clip) {
            Some(area) => {
                let len = area.width() as usize * area.height() as usize;
                Self { area: Some(area), mask: vec![false; len] }
            }
            None => Self::default(),
        }
    }

    #[inline]
    pub fn area(&self) -> Option<PixelRect> {
        self.area
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let area = self.area?;
        if !area.contains(x, y) {
            return None;
        }
        Some((y - area.y1) as usize * area.width() as usize + (x - area.x1) as usize)
    }

    #[inline]
    pub fn mark(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.mask[i] = true;
        }
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.mask[i])
    }

    /// Number of covered pixels.
    pub fn count(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }

    /// Covered pixels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x1, y1, w) = match self.area {
            Some(a) => (a.x1, a.y1, a.width()),
            None => (0, 0, 1),
        };
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(i, _)| (x1 + i as i32 % w, y1 + i as i32 / w))
    }

    /// Candidate pixels of `bounds` that also fall inside the mask area.
    fn scan(&self, bounds: PixelRect) -> Option<PixelRect> {
        bounds.normalized().intersect(self.area?)
    }

    pub fn add_rect(&mut self, rect: PixelRect) {
        if rect.is_empty() {
            return;
        }
        let Some(r) = self.scan(rect) else { return };
        for y in r.y1..=r.y2 {
            for x in r.x1..=r.x2 {
                self.mark(x, y);
            }
        }
    }

    /// Ellipse inscribed in the inclusive box `bbox`.
    pub fn add_ellipse(&mut self, bbox: PixelRect) {
        let e = Ellipse::inscribed(bbox);
        let Some(r) = self.scan(bbox) else { return };
        for y in r.y1..=r.y2 {
            for x in r.x1..=r.x2 {
                if e.norm(x, y, 0.0) <= 1.0 {
                    self.mark(x, y);
                }
            }
        }
    }

    /// Stroke of `width` pixels along the inner edge of the ellipse inscribed
    /// in `bbox`, between `start_deg` and `end_deg`.
    ///
    /// Angles are measured clockwise from +X in screen space, so 90 points
    /// down. A range with `start_deg > end_deg` wraps through 0.
    pub fn add_arc(&mut self, bbox: PixelRect, start_deg: f64, end_deg: f64, width: u32) {
        let e = Ellipse::inscribed(bbox);
        let w = width.max(1) as f64;
        let Some(r) = self.scan(bbox) else { return };
        for y in r.y1..=r.y2 {
            for x in r.x1..=r.x2 {
                if e.norm(x, y, 0.0) > 1.0 {
                    continue;
                }
                if e.rx > w && e.ry > w && e.norm(x, y, w) < 1.0 {
                    continue;
                }
                if angle_in_range(e.angle(x, y), start_deg, end_deg) {
                    self.mark(x, y);
                }
            }
        }
    }

    /// Straight stroke from `from` to `to`.
    ///
    /// Axis-aligned strokes cover exactly `width` rows (or columns); other
    /// directions cover every pixel center within `width / 2` of the segment.
    pub fn add_segment(&mut self, from: Point, to: Point, width: u32) {
        let w = width.max(1) as i32;
        let lo = -(w / 2);
        let hi = lo + w - 1;

        if from.y == to.y {
            let (x1, x2) = (from.x.min(to.x), from.x.max(to.x));
            self.add_rect(PixelRect::new(x1, from.y + lo, x2, from.y + hi));
            return;
        }
        if from.x == to.x {
            let (y1, y2) = (from.y.min(to.y), from.y.max(to.y));
            self.add_rect(PixelRect::new(from.x + lo, y1, from.x + hi, y2));
            return;
        }

        let half = (w as f64 / 2.0).max(0.5);
        let pad = half.ceil() as i32;
        let bounds = PixelRect::new(from.x, from.y, to.x, to.y).normalized().inflate(pad);
        let Some(r) = self.scan(bounds) else { return };
        for y in r.y1..=r.y2 {
            for x in r.x1..=r.x2 {
                if segment_distance(from, to, x, y) <= half {
                    self.mark(x, y);
                }
            }
        }
    }
}

/// Ellipse inscribed in an inclusive pixel box.
///
/// The radii extend half a pixel past the extreme pixel centers so the
/// boundary pixels of the box are covered and nothing outside it is.
#[derive(Debug, Copy, Clone)]
struct Ellipse {
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    fn inscribed(bbox: PixelRect) -> Self {
        let b = bbox.normalized();
        Self {
            cx: (b.x1 + b.x2) as f64 / 2.0,
            cy: (b.y1 + b.y2) as f64 / 2.0,
            rx: (b.x2 - b.x1) as f64 / 2.0 + 0.5,
            ry: (b.y2 - b.y1) as f64 / 2.0 + 0.5,
        }
    }

    /// Normalized squared distance of `(x, y)` against radii shrunk by `inset`.
    #[inline]
    fn norm(&self, x: i32, y: i32, inset: f64) -> f64 {
        let dx = (x as f64 - self.cx) / (self.rx - inset);
        let dy = (y as f64 - self.cy) / (self.ry - inset);
        dx * dx + dy * dy
    }

    /// Angle of `(x, y)` around the center in degrees, `[0, 360)`.
    #[inline]
    fn angle(&self, x: i32, y: i32) -> f64 {
        let a = (y as f64 - self.cy).atan2(x as f64 - self.cx).to_degrees();
        if a < 0.0 { a + 360.0 } else { a }
    }
}

#[inline]
fn angle_in_range(angle: f64, start: f64, end: f64) -> bool {
    let start = start.rem_euclid(360.0);
    let end = if end >= 360.0 { 360.0 } else { end.rem_euclid(360.0) };
    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

fn segment_distance(a: Point, b: Point, x: i32, y: i32) -> f64 {
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (dx, dy) = (b.x as f64 - ax, b.y as f64 - ay);
    let (px, py) = (x as f64 - ax, y as f64 - ay);
    let len2 = dx * dx + dy * dy;
    let t = if len2 == 0.0 { 0.0 } else { ((px * dx + py * dy) / len2).clamp(0.0, 1.0) };
    let (ex, ey) = (px - t * dx, py - t * dy);
    (ex * ex + ey * ey).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip() -> PixelRect { PixelRect::new(0, 0, 99, 99) }

    fn all_inside(c: &Coverage, b: PixelRect) -> bool {
        c.iter().all(|(x, y)| b.contains(x, y))
    }

    // ── rect / clipping ───────────────────────────────────────────────────

    #[test]
    fn rect_is_inclusive() {
        let mut c = Coverage::new(clip(), clip());
        c.add_rect(PixelRect::new(2, 3, 4, 3));
        assert_eq!(c.count(), 3);
        assert!(c.contains(2, 3) && c.contains(4, 3));
    }

    #[test]
    fn marks_outside_area_are_dropped() {
        let mut c = Coverage::new(PixelRect::new(-10, -10, 5, 5), clip());
        c.add_rect(PixelRect::new(-10, -10, 5, 5));
        assert_eq!(c.area(), Some(PixelRect::new(0, 0, 5, 5)));
        assert_eq!(c.count(), 36);
    }

    #[test]
    fn disjoint_area_is_empty() {
        let mut c = Coverage::new(PixelRect::new(200, 200, 210, 210), clip());
        c.add_ellipse(PixelRect::new(200, 200, 210, 210));
        assert_eq!(c.area(), None);
        assert_eq!(c.count(), 0);
    }

    // ── ellipse ───────────────────────────────────────────────────────────

    #[test]
    fn ellipse_touches_but_stays_within_its_box() {
        let b = PixelRect::new(10, 10, 30, 30);
        let mut c = Coverage::new(b, clip());
        c.add_ellipse(b);
        assert!(all_inside(&c, b));
        assert!(c.contains(10, 20) && c.contains(30, 20));
        assert!(c.contains(20, 10) && c.contains(20, 30));
        assert!(!c.contains(10, 10));
    }

    #[test]
    fn single_pixel_ellipse() {
        let b = PixelRect::new(5, 5, 5, 5);
        let mut c = Coverage::new(b, clip());
        c.add_ellipse(b);
        assert_eq!(c.count(), 1);
    }

    // ── arc ───────────────────────────────────────────────────────────────

    #[test]
    fn top_left_arc_stays_in_its_quadrant() {
        let b = PixelRect::new(0, 0, 40, 40);
        let mut c = Coverage::new(b, clip());
        c.add_arc(b, 180.0, 270.0, 2);
        assert!(c.count() > 0);
        assert!(c.iter().all(|(x, y)| x <= 20 && y <= 20));
        assert!(!c.contains(20, 20), "arc must be hollow");
    }

    #[test]
    fn full_arc_is_a_ring() {
        let b = PixelRect::new(0, 0, 20, 20);
        let mut c = Coverage::new(b, clip());
        c.add_arc(b, 0.0, 360.0, 3);
        assert!(c.contains(0, 10) && c.contains(20, 10));
        assert!(c.contains(10, 0) && c.contains(10, 20));
        assert!(!c.contains(10, 10));
    }

    #[test]
    fn wrapping_angle_range() {
        assert!(angle_in_range(350.0, 300.0, 30.0));
        assert!(angle_in_range(10.0, 300.0, 30.0));
        assert!(!angle_in_range(100.0, 300.0, 30.0));
        assert!(angle_in_range(0.0, 270.0, 360.0) || angle_in_range(0.0, 0.0, 90.0));
    }

    // ── segment ───────────────────────────────────────────────────────────

    #[test]
    fn thick_horizontal_segment_covers_exact_rows() {
        let mut c = Coverage::new(clip(), clip());
        c.add_segment(Point::new(10, 50), Point::new(20, 50), 4);
        assert_eq!(c.count(), 11 * 4);
        assert!(c.contains(10, 48) && c.contains(20, 51));
        assert!(!c.contains(15, 47) && !c.contains(15, 52));
    }

    #[test]
    fn thin_vertical_segment_is_one_column() {
        let mut c = Coverage::new(clip(), clip());
        c.add_segment(Point::new(7, 30), Point::new(7, 20), 1);
        assert_eq!(c.count(), 11);
        assert!(c.iter().all(|(x, _)| x == 7));
    }

    #[test]
    fn diagonal_segment_passes_through_endpoints() {
        let mut c = Coverage::new(clip(), clip());
        c.add_segment(Point::new(0, 0), Point::new(30, 30), 2);
        assert!(c.contains(0, 0) && c.contains(15, 15) && c.contains(30, 30));
        assert!(!c.contains(30, 0));
    }
}
