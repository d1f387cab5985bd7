use core::ops::{Add, Sub};

/// Integer pixel position.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Sub-pixel position, used for gradient centers.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `(x, y)`, computed in `f64`.
    #[inline]
    pub fn distance_to(self, x: f64, y: f64) -> f64 {
        let dx = x - self.x as f64;
        let dy = y - self.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Point> for Vec2 {
    #[inline]
    fn from(p: Point) -> Vec2 {
        p.to_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        assert_eq!(Point::new(3, 4) + Point::new(1, -2), Point::new(4, 2));
        assert_eq!(Point::new(3, 4) - Point::new(1, -2), Point::new(2, 6));
    }

    #[test]
    fn distance_is_euclidean() {
        let c = Vec2::new(0.0, 0.0);
        assert_eq!(c.distance_to(3.0, 4.0), 5.0);
    }
}
