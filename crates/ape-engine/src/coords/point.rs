use bytemuck::{Pod, Zeroable};

use super::Size;

/// Integer 2D coordinate (screen or grid position).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);
    pub const ONE: Point = Point::new(1, 1);
    pub const UP: Point = Point::new(0, 1);
    pub const DOWN: Point = Point::new(0, -1);
    pub const LEFT: Point = Point::new(-1, 0);
    pub const RIGHT: Point = Point::new(1, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Both coordinates set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(a: Point, b: Point) -> f64 {
        let dx = b.x as f64 - a.x as f64;
        let dy = b.y as f64 - a.y as f64;
        dx.hypot(dy)
    }
}

impl_int_pair_ops!(Point, x, y);

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Size> for Point {
    #[inline]
    fn from(s: Size) -> Self {
        Point::new(s.width, s.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_with_points() {
        let a = Point::new(3, -2);
        let b = Point::new(1, 5);
        assert_eq!(a + b, Point::new(4, 3));
        assert_eq!(a - b, Point::new(2, -7));
        assert_eq!(a * b, Point::new(3, -10));
    }

    #[test]
    fn arithmetic_with_scalars() {
        let p = Point::new(2, 4);
        assert_eq!(p + 1, Point::new(3, 5));
        assert_eq!(10 - p, Point::new(8, 6));
        assert_eq!(3 * p, Point::new(6, 12));
    }

    #[test]
    fn assign_ops() {
        let mut p = Point::ONE;
        p += Point::RIGHT;
        p *= 3;
        p -= 1;
        assert_eq!(p, Point::new(5, 2));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Point::distance(Point::ZERO, Point::new(3, 4)), 5.0);
        assert_eq!(Point::distance(Point::new(3, 4), Point::ZERO), 5.0);
    }
}
