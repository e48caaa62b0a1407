use core::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use super::Vector2;

/// 3D vector in `f64`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const ONE: Vector3 = Vector3::new(1.0, 1.0, 1.0);
    pub const LEFT: Vector3 = Vector3::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    pub const DOWN: Vector3 = Vector3::new(0.0, -1.0, 0.0);
    pub const FORWARD: Vector3 = Vector3::new(0.0, 0.0, 1.0);
    pub const BACKWARD: Vector3 = Vector3::new(0.0, 0.0, -1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn from_vector2(v: Vector2, z: f64) -> Self {
        Self::new(v.x, v.y, z)
    }

    #[inline]
    pub fn dot(a: Vector3, b: Vector3) -> f64 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    #[inline]
    pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
        Vector3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f64> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

/// Cross product.
impl Mul for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        Vector3::cross(self, rhs)
    }
}

impl MulAssign for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector3) {
        *self = Vector3::cross(*self, rhs);
    }
}

impl From<Vector2> for Vector3 {
    #[inline]
    fn from(v: Vector2) -> Self {
        Vector3::from_vector2(v, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vector3::RIGHT * Vector3::UP, Vector3::FORWARD);
        assert_eq!(Vector3::UP * Vector3::RIGHT, Vector3::BACKWARD);

        let mut v = Vector3::UP;
        v *= Vector3::FORWARD;
        assert_eq!(v, Vector3::RIGHT);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-4.0, 0.5, 2.0);
        let c = a * b;
        assert_eq!(Vector3::dot(c, a), 0.0);
        assert_eq!(Vector3::dot(c, b), 0.0);
    }

    #[test]
    fn dot_and_scalar_ops() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Vector3::dot(a, Vector3::ONE), 6.0);
        assert_eq!(a * 2.0 - a, a);
        assert_eq!(a + Vector3::BACKWARD * 3.0, Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn converts_to_and_from_vector2() {
        let v = Vector3::from(Vector2::new(5.0, 6.0));
        assert_eq!(v, Vector3::new(5.0, 6.0, 0.0));
        assert_eq!(Vector2::from(Vector3::new(1.0, 2.0, 9.0)), Vector2::new(1.0, 2.0));
    }
}
