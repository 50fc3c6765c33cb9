//! Values with a standard uncertainty
//!
//! Uncertainty is propagated to first order for uncorrelated operands: each
//! operand's uncertainty is scaled by the partial derivative of the result
//! and the contributions add in quadrature.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Numeric;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uncertain {
    pub value: f64,
    /// Standard uncertainty, always non-negative
    pub uncertainty: f64,
}

impl Uncertain {
    pub fn new(value: f64, uncertainty: f64) -> Self {
        Self {
            value,
            uncertainty: uncertainty.abs(),
        }
    }

    /// Exact value with zero uncertainty
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    pub fn relative(&self) -> f64 {
        if self.value == 0.0 {
            0.0
        } else {
            self.uncertainty / self.value.abs()
        }
    }
}

impl fmt::Display for Uncertain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ± {}", self.value, self.uncertainty)
    }
}

impl Numeric for Uncertain {
    fn from_scalar(value: f64) -> Self {
        Self::exact(value)
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::new(
            self.value + rhs.value,
            self.uncertainty.hypot(rhs.uncertainty),
        )
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::new(
            self.value - rhs.value,
            self.uncertainty.hypot(rhs.uncertainty),
        )
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::new(
            self.value * rhs.value,
            (rhs.value * self.uncertainty).hypot(self.value * rhs.uncertainty),
        )
    }

    fn div(&self, rhs: &Self) -> Self {
        let quotient = self.value / rhs.value;
        Self::new(
            quotient,
            (self.uncertainty / rhs.value).hypot(quotient * rhs.uncertainty / rhs.value),
        )
    }

    fn add_scalar(&self, rhs: f64) -> Option<Self> {
        Some(Self::new(self.value + rhs, self.uncertainty))
    }

    fn mul_scalar(&self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.uncertainty * rhs)
    }

    fn div_scalar(&self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.uncertainty / rhs)
    }

    fn neg(&self) -> Self {
        Self::new(-self.value, self.uncertainty)
    }

    fn powi(&self, exp: i32) -> Self {
        if exp == 0 {
            return Self::exact(1.0);
        }
        let slope = f64::from(exp) * self.value.powi(exp - 1);
        Self::new(self.value.powi(exp), slope * self.uncertainty)
    }

    fn sqrt(&self) -> Self {
        let root = self.value.sqrt();
        Self::new(root, self.uncertainty / (2.0 * root))
    }

    fn min(&self, rhs: &Self) -> Self {
        if self.value <= rhs.value {
            *self
        } else {
            *rhs
        }
    }

    fn max(&self, rhs: &Self) -> Self {
        if self.value >= rhs.value {
            *self
        } else {
            *rhs
        }
    }

    fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    fn magnitude(&self) -> f64 {
        self.value.abs()
    }
}
