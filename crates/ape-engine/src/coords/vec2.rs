use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use super::Vector3;

/// 2D vector in `f64` (vertex positions, texture coordinates).
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const ONE: Vector2 = Vector2::new(1.0, 1.0);
    pub const LEFT: Vector2 = Vector2::new(-1.0, 0.0);
    pub const RIGHT: Vector2 = Vector2::new(1.0, 0.0);
    pub const UP: Vector2 = Vector2::new(0.0, 1.0);
    pub const DOWN: Vector2 = Vector2::new(0.0, -1.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(a: Vector2, b: Vector2) -> f64 {
        a.x * b.x + a.y * b.y
    }

    /// 2D cross product lifted to 3D: only `z` is populated.
    #[inline]
    pub fn cross(a: Vector2, b: Vector2) -> Vector3 {
        Vector3::new(0.0, 0.0, a.x * b.y - a.y * b.x)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: f64) -> Vector2 {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vector2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// Cross product, see [`Vector2::cross`].
impl Mul for Vector2 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector2) -> Vector3 {
        Vector2::cross(self, rhs)
    }
}

impl From<Vector3> for Vector2 {
    /// Drops `z`.
    #[inline]
    fn from(v: Vector3) -> Self {
        Vector2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn componentwise_ops() {
        let a = Vector2::new(1.5, -2.0);
        let b = Vector2::new(0.5, 4.0);
        assert_eq!(a + b, Vector2::new(2.0, 2.0));
        assert_eq!(a - b, Vector2::new(1.0, -6.0));
        assert_eq!(a * 2.0, Vector2::new(3.0, -4.0));

        let mut c = a;
        c += b;
        c -= Vector2::ONE;
        c *= 0.5;
        assert_eq!(c, Vector2::new(0.5, 0.5));
    }

    #[test]
    fn dot_of_orthogonal_axes_is_zero() {
        assert_eq!(Vector2::dot(Vector2::UP, Vector2::RIGHT), 0.0);
        assert_eq!(Vector2::dot(Vector2::new(2.0, 3.0), Vector2::new(4.0, 5.0)), 23.0);
    }

    #[test]
    fn cross_populates_z_only() {
        let c = Vector2::UP * Vector2::RIGHT;
        assert_eq!(c, Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(Vector2::RIGHT * Vector2::UP, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(Vector2::ONE * Vector2::ONE, Vector3::ZERO);
    }
}
