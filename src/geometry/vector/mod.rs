use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::FloatComparator;

use super::Shape;

/// Implements component-wise arithmetic for a vector struct.
///
/// Every binary operator is available with a same-arity vector (component-wise)
/// and with an `f64` (broadcast to every component).
macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl_vector_ops!(@binop $ty, Add, add, +, $($field),+);
        impl_vector_ops!(@binop $ty, Sub, sub, -, $($field),+);
        impl_vector_ops!(@binop $ty, Mul, mul, *, $($field),+);
        impl_vector_ops!(@binop $ty, Div, div, /, $($field),+);

        impl std::ops::Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl approx::AbsDiffEq for $ty {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                crate::math::DEFAULT_TOLERANCE
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                true $(&& approx::AbsDiffEq::abs_diff_eq(&self.$field, &other.$field, epsilon))+
            }
        }
    };
    (@binop $ty:ident, $trait:ident, $method:ident, $op:tt, $($field:ident),+) => {
        impl std::ops::$trait for $ty {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self { $($field: self.$field $op rhs.$field),+ }
            }
        }

        impl std::ops::$trait<f64> for $ty {
            type Output = Self;

            fn $method(self, rhs: f64) -> Self {
                Self { $($field: self.$field $op rhs),+ }
            }
        }
    };
}

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Algebra shared by [`Vector2`], [`Vector3`] and [`Vector4`].
///
/// Arithmetic comes from the operator traits: `v + w` is component-wise,
/// `v + 2.0` broadcasts the scalar.
pub trait Vector:
    Shape
    + Copy
    + Add<Output = Self>
    + Add<f64, Output = Self>
    + Sub<Output = Self>
    + Sub<f64, Output = Self>
    + Mul<Output = Self>
    + Mul<f64, Output = Self>
    + Div<Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
{
    /// Number of components.
    const DIMENSION: usize;

    const ZERO: Self;

    /// Result of [`Vector::cross`]: a signed area in 2D, a vector otherwise.
    type Cross;

    fn dot(&self, other: &Self) -> f64;

    fn cross(&self, other: &Self) -> Self::Cross;

    fn equal_to_with(&self, other: &Self, cmp: &FloatComparator) -> bool;

    /// Component-wise equality within the default tolerance.
    fn equal_to(&self, other: &Self) -> bool {
        self.equal_to_with(other, &FloatComparator::DEFAULT)
    }

    fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or [`Vector::ZERO`] when the
    /// length is zero within the default tolerance.
    fn normalize(&self) -> Self {
        self.normalize_with(&FloatComparator::DEFAULT)
    }

    fn normalize_with(&self, cmp: &FloatComparator) -> Self {
        let length = self.length();
        if cmp.equals_zero(length) {
            Self::ZERO
        } else {
            *self / length
        }
    }

    fn distance_squared(&self, other: &Self) -> f64 {
        let delta = *self - *other;
        delta.dot(&delta)
    }

    fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Negates every component.
    fn invert(&self) -> Self {
        -*self
    }

    /// Copies every component of `other` into `self`.
    fn replace(&mut self, other: &Self) {
        *self = *other;
    }
}
