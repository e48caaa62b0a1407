use bytemuck::{Pod, Zeroable};

use super::Point;

/// Integer 2D extent.
///
/// Components may be negative; a negative extent points left/up from its
/// anchor. [`area`](Size::area) and [`ratio`](Size::ratio) work on absolute
/// values.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);
    pub const ONE: Size = Size::new(1, 1);
    pub const UP: Size = Size::new(0, 1);
    pub const DOWN: Size = Size::new(0, -1);
    pub const LEFT: Size = Size::new(-1, 0);
    pub const RIGHT: Size = Size::new(1, 0);

    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { width: v, height: v }
    }

    /// Component-wise absolute value; `i32::MIN` saturates to `i32::MAX`.
    #[inline]
    pub const fn absolute(self) -> Self {
        Self::new(self.width.saturating_abs(), self.height.saturating_abs())
    }

    /// `|width| / |height|`. Infinite or NaN when height is zero.
    #[inline]
    pub fn ratio(self) -> f64 {
        (self.width as f64).abs() / (self.height as f64).abs()
    }

    #[inline]
    pub const fn is_empty_area(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn area(self) -> i64 {
        (self.width as i64).abs() * (self.height as i64).abs()
    }

    /// Size with the given aspect ratio and height. Both results are
    /// non-negative; the width is truncated.
    #[inline]
    pub fn from_ratio(ratio: f64, height: i32) -> Self {
        Self::new((ratio * height as f64).abs() as i32, height.saturating_abs())
    }

    /// Size with the given aspect ratio and width. Both results are
    /// non-negative; the height is truncated.
    #[inline]
    pub fn from_ratio_with_width(ratio: f64, width: i32) -> Self {
        Self::new(width.saturating_abs(), (width as f64 / ratio).abs() as i32)
    }
}

impl_int_pair_ops!(Size, width, height);

impl From<(i32, i32)> for Size {
    #[inline]
    fn from((width, height): (i32, i32)) -> Self {
        Size::new(width, height)
    }
}

impl From<Point> for Size {
    #[inline]
    fn from(p: Point) -> Self {
        Size::new(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_saturates_at_min() {
        assert_eq!(Size::new(i32::MIN, -5).absolute(), Size::new(i32::MAX, 5));
        assert_eq!(Size::new(i32::MIN, 1).area(), (i32::MAX as i64) + 1);
    }

    #[test]
    fn area_uses_absolute_values() {
        assert_eq!(Size::new(-4, 5).area(), 20);
        assert_eq!(Size::new(-4, -5).area(), 20);
        assert_eq!(Size::new(i32::MAX, i32::MAX).area(), (i32::MAX as i64) * (i32::MAX as i64));
    }

    #[test]
    fn empty_when_any_component_zero() {
        assert!(Size::new(0, 7).is_empty_area());
        assert!(Size::new(7, 0).is_empty_area());
        assert!(!Size::new(-1, 1).is_empty_area());
    }

    #[test]
    fn ratio_and_from_ratio() {
        let s = Size::new(-1600, 900);
        assert!((s.ratio() - 16.0 / 9.0).abs() < 1e-12);
        assert_eq!(Size::from_ratio(2.0, -300), Size::new(600, 300));
        assert_eq!(Size::from_ratio_with_width(2.0, -640), Size::new(640, 320));
    }

    #[test]
    fn converts_to_and_from_point() {
        let s = Size::new(3, -8);
        let p: Point = s.into();
        assert_eq!(p, Point::new(3, -8));
        assert_eq!(Size::from(p), s);
    }

    #[test]
    fn scalar_ops() {
        assert_eq!(Size::new(2, 3) * 2 + 1, Size::new(5, 7));
    }
}
