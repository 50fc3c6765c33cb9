//! Vector values (displacements, velocities, forces)
//!
//! Arithmetic between vectors is component-wise. A vector cannot absorb a
//! bare scalar offset, which is what makes offset units such as degrees
//! Celsius unusable with vector quantities.

use glam::{DVec2, DVec3, DVec4};

use super::Numeric;

macro_rules! impl_vector_numeric {
    ($($ty:ty),*) => {$(
        impl Numeric for $ty {
            fn from_scalar(value: f64) -> Self {
                <$ty>::splat(value)
            }

            fn add(&self, rhs: &Self) -> Self {
                *self + *rhs
            }

            fn sub(&self, rhs: &Self) -> Self {
                *self - *rhs
            }

            fn mul(&self, rhs: &Self) -> Self {
                *self * *rhs
            }

            fn div(&self, rhs: &Self) -> Self {
                *self / *rhs
            }

            fn add_scalar(&self, _rhs: f64) -> Option<Self> {
                None
            }

            fn mul_scalar(&self, rhs: f64) -> Self {
                *self * rhs
            }

            fn div_scalar(&self, rhs: f64) -> Self {
                *self / rhs
            }

            fn neg(&self) -> Self {
                -*self
            }

            fn powi(&self, exp: i32) -> Self {
                <$ty>::from_array(self.to_array().map(|c| c.powi(exp)))
            }

            fn sqrt(&self) -> Self {
                <$ty>::from_array(self.to_array().map(f64::sqrt))
            }

            fn min(&self, rhs: &Self) -> Self {
                <$ty>::min(*self, *rhs)
            }

            fn max(&self, rhs: &Self) -> Self {
                <$ty>::max(*self, *rhs)
            }

            fn is_zero(&self) -> bool {
                *self == <$ty>::ZERO
            }

            fn magnitude(&self) -> f64 {
                self.length()
            }
        }
    )*};
}

impl_vector_numeric!(DVec2, DVec3, DVec4);
