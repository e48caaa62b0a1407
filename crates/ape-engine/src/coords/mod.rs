//! Coordinate and geometry types shared by windows, renderers and callers.
//!
//! Canonical space:
//! - Integer pixels for [`Point`], [`Size`] and [`Rectangle`]
//! - Origin top-left, +X right, +Y down
//! - Rectangles are inclusive pixel ranges (both edges belong to the region)
//!
//! [`Vector2`] / [`Vector3`] are `f64` spatial vectors used for vertex data.

/// Component-wise `+ - *` (and assign forms) against `Self` and a scalar `i32`
/// applied to both components.
macro_rules! impl_int_pair_ops {
    ($ty:ident, $a:ident, $b:ident) => {
        impl_int_pair_ops!(@op $ty, $a, $b, Add, add, AddAssign, add_assign, +);
        impl_int_pair_ops!(@op $ty, $a, $b, Sub, sub, SubAssign, sub_assign, -);
        impl_int_pair_ops!(@op $ty, $a, $b, Mul, mul, MulAssign, mul_assign, *);
    };
    (@op $ty:ident, $a:ident, $b:ident, $Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl core::ops::$Op for $ty {
            type Output = $ty;
            #[inline]
            fn $op(self, rhs: $ty) -> $ty {
                $ty::new(self.$a $sym rhs.$a, self.$b $sym rhs.$b)
            }
        }

        impl core::ops::$Op<i32> for $ty {
            type Output = $ty;
            #[inline]
            fn $op(self, rhs: i32) -> $ty {
                $ty::new(self.$a $sym rhs, self.$b $sym rhs)
            }
        }

        impl core::ops::$Op<$ty> for i32 {
            type Output = $ty;
            #[inline]
            fn $op(self, rhs: $ty) -> $ty {
                $ty::new(self $sym rhs.$a, self $sym rhs.$b)
            }
        }

        impl core::ops::$OpAssign for $ty {
            #[inline]
            fn $op_assign(&mut self, rhs: $ty) {
                *self = *self $sym rhs;
            }
        }

        impl core::ops::$OpAssign<i32> for $ty {
            #[inline]
            fn $op_assign(&mut self, rhs: i32) {
                *self = *self $sym rhs;
            }
        }
    };
}

mod point;
mod rect;
mod size;
mod vec2;
mod vec3;

pub use point::Point;
pub use rect::{Rectangle, RectangleAlignment};
pub use size::Size;
pub use vec2::Vector2;
pub use vec3::Vector3;
