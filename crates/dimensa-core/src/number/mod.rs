//! Arithmetic contract for quantity values
//!
//! The algebra is written once against [`Numeric`]. Any representation that
//! implements it (plain reals, decimals, vectors, values with uncertainty)
//! can be carried by a [`Quantity`](crate::Quantity).

mod decimal;
mod uncertain;
mod vector;

pub use uncertain::Uncertain;

use std::fmt;

/// Arithmetic a value type must provide to plug into the algebra.
///
/// Scalars passed as `f64` come from the catalog (multipliers, offsets,
/// prefix factors) and are always finite.
pub trait Numeric: Clone + PartialEq + fmt::Debug {
    /// Lift a catalog scalar into this representation
    fn from_scalar(value: f64) -> Self;

    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    fn div(&self, rhs: &Self) -> Self;

    /// Add a bare scalar. Returns `None` when the representation has no
    /// meaningful scalar addition (vectors).
    fn add_scalar(&self, rhs: f64) -> Option<Self>;

    fn sub_scalar(&self, rhs: f64) -> Option<Self> {
        self.add_scalar(-rhs)
    }

    fn mul_scalar(&self, rhs: f64) -> Self;
    fn div_scalar(&self, rhs: f64) -> Self;
    fn neg(&self) -> Self;
    fn powi(&self, exp: i32) -> Self;
    fn sqrt(&self) -> Self;
    fn min(&self, rhs: &Self) -> Self;
    fn max(&self, rhs: &Self) -> Self;
    fn is_zero(&self) -> bool;

    /// Non-negative size of the value, used to rate prefixes
    fn magnitude(&self) -> f64;
}

impl Numeric for f64 {
    fn from_scalar(value: f64) -> Self {
        value
    }

    fn add(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div(&self, rhs: &Self) -> Self {
        self / rhs
    }

    fn add_scalar(&self, rhs: f64) -> Option<Self> {
        Some(self + rhs)
    }

    fn mul_scalar(&self, rhs: f64) -> Self {
        self * rhs
    }

    fn div_scalar(&self, rhs: f64) -> Self {
        self / rhs
    }

    fn neg(&self) -> Self {
        -self
    }

    fn powi(&self, exp: i32) -> Self {
        f64::powi(*self, exp)
    }

    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }

    fn min(&self, rhs: &Self) -> Self {
        f64::min(*self, *rhs)
    }

    fn max(&self, rhs: &Self) -> Self {
        f64::max(*self, *rhs)
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn magnitude(&self) -> f64 {
        self.abs()
    }
}
