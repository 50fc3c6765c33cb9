//! Exact decimal values
//!
//! Arithmetic saturates instead of panicking on overflow, and so do catalog
//! scalars beyond the decimal range (quetta, ronna). Division by zero and
//! the square root of a negative number yield zero; the quantity facade
//! rejects zero divisors before they get here.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};

use super::Numeric;

fn scalar(value: f64) -> Decimal {
    match Decimal::from_f64(value) {
        Some(decimal) => decimal,
        None if value.is_nan() => Decimal::ZERO,
        None if value > 0.0 => Decimal::MAX,
        None => Decimal::MIN,
    }
}

impl Numeric for Decimal {
    fn from_scalar(value: f64) -> Self {
        scalar(value)
    }

    fn add(&self, rhs: &Self) -> Self {
        self.saturating_add(*rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        self.saturating_sub(*rhs)
    }

    fn mul(&self, rhs: &Self) -> Self {
        self.saturating_mul(*rhs)
    }

    fn div(&self, rhs: &Self) -> Self {
        self.checked_div(*rhs).unwrap_or(Decimal::ZERO)
    }

    fn add_scalar(&self, rhs: f64) -> Option<Self> {
        Some(self.saturating_add(scalar(rhs)))
    }

    fn mul_scalar(&self, rhs: f64) -> Self {
        self.saturating_mul(scalar(rhs))
    }

    fn div_scalar(&self, rhs: f64) -> Self {
        Numeric::div(self, &scalar(rhs))
    }

    fn neg(&self) -> Self {
        -*self
    }

    fn powi(&self, exp: i32) -> Self {
        self.checked_powi(i64::from(exp)).unwrap_or(Decimal::ZERO)
    }

    fn sqrt(&self) -> Self {
        MathematicalOps::sqrt(self).unwrap_or(Decimal::ZERO)
    }

    fn min(&self, rhs: &Self) -> Self {
        if self <= rhs {
            *self
        } else {
            *rhs
        }
    }

    fn max(&self, rhs: &Self) -> Self {
        if self >= rhs {
            *self
        } else {
            *rhs
        }
    }

    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }

    fn magnitude(&self) -> f64 {
        self.abs().to_f64().unwrap_or(f64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_decimal_is_exact() {
        let sum = Numeric::add(&d("0.1"), &d("0.2"));
        assert_eq!(sum, d("0.3"));
        let scaled = d("2").mul_scalar(0.0254);
        assert!((scaled - d("0.0508")).abs() < d("0.000000001"));
    }

    #[test]
    fn test_decimal_division_by_zero_is_zero() {
        assert_eq!(Numeric::div(&d("1"), &Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_out_of_range_scalars_saturate() {
        assert_eq!(scalar(1e30), Decimal::MAX);
        assert_eq!(scalar(-1e30), Decimal::MIN);
        assert_eq!(scalar(f64::INFINITY), Decimal::MAX);
        assert_eq!(scalar(f64::NAN), Decimal::ZERO);
        assert_eq!(d("5").mul_scalar(1e30), Decimal::MAX);
    }

    #[test]
    fn test_decimal_sqrt() {
        assert_eq!(Numeric::sqrt(&d("16")), d("4"));
        assert_eq!(Numeric::sqrt(&d("-4")), Decimal::ZERO);
    }
}
