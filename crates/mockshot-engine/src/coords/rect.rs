use super::Point;

/// Axis-aligned pixel box with inclusive corners.
///
/// `x1 <= x2` and `y1 <= y2` after [`normalized`](Self::normalized); a box
/// built from a single pixel has width and height 1.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box of `width × height` pixels with its top-left pixel at `(x, y)`.
    ///
    /// Zero-sized requests produce an inverted box that [`is_empty`](Self::is_empty)
    /// reports as empty.
    #[inline]
    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self::new(x, y, x + width as i32 - 1, y + height as i32 - 1)
    }

    /// Box of side `2 * radius + 1` centered on `center`.
    #[inline]
    pub fn around(center: Point, radius: i32) -> Self {
        Self::new(center.x - radius, center.y - radius, center.x + radius, center.y + radius)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.x2 - self.x1 + 1
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.y2 - self.y1 + 1
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x2 < self.x1 || self.y2 < self.y1
    }

    /// Swaps corners so `x1 <= x2` and `y1 <= y2`.
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }

    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    #[inline]
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let r = PixelRect::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        );
        if r.is_empty() { None } else { Some(r) }
    }

    /// Grows the box by `d` pixels on every side.
    #[inline]
    pub fn inflate(self, d: i32) -> Self {
        Self::new(self.x1 - d, self.y1 - d, self.x2 + d, self.y2 + d)
    }
}
