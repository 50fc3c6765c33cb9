//! The atomic algebra value: unit × integer power × optional prefix
//!
//! Every conversion routes through the definition's base unit, so a
//! catalog only needs one factor per unit instead of a table of pairs.
//! Operations return fresh `Dimension`s; nothing is modified in place.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, DefinitionId, PrefixId, UnitId};
use crate::error::{ConversionError, Result};
use crate::number::Numeric;

/// Offsets smaller than this are treated as zero
pub const OFFSET_EPSILON: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimension {
    pub unit: UnitId,
    pub power: i32,
    pub prefix: Option<PrefixId>,
}

impl Dimension {
    pub fn new(unit: UnitId) -> Self {
        Self::with_power(unit, 1)
    }

    pub fn with_power(unit: UnitId, power: i32) -> Self {
        Self {
            unit,
            power,
            prefix: None,
        }
    }

    pub fn with_prefix(self, prefix: Option<PrefixId>) -> Self {
        Self { prefix, ..self }
    }

    pub fn powered(self, power: i32) -> Self {
        Self { power, ..self }
    }

    /// Same unit and prefix, negated power
    pub fn invert(self) -> Self {
        Self {
            power: -self.power,
            ..self
        }
    }

    pub fn definition(&self, catalog: &Catalog) -> DefinitionId {
        catalog.definition_of(self.unit)
    }

    /// Base unit of its definition, without prefix
    pub fn is_base(&self, catalog: &Catalog) -> bool {
        self.prefix.is_none() && catalog.is_base_unit(self.unit)
    }

    /// Express `value` in this dimension's base unit.
    pub fn to_base<T: Numeric>(&self, catalog: &Catalog, value: &T) -> Result<(Dimension, T)> {
        if self.is_base(catalog) {
            return Ok((*self, value.clone()));
        }

        let unit = catalog.unit(self.unit);
        let prefix = self.prefix.map(|p| catalog.prefix(p).multiplier());
        let mut value = value.clone();
        for _ in 0..self.power.unsigned_abs() {
            if self.power > 0 {
                if let Some(m) = prefix {
                    value = value.mul_scalar(m);
                }
                value = shift(&value.mul_scalar(unit.multiplier), unit.offset, &unit.key)?;
            } else {
                if let Some(m) = prefix {
                    value = value.div_scalar(m);
                }
                value = shift(&value, -unit.offset, &unit.key)?.div_scalar(unit.multiplier);
            }
        }

        let base = Dimension::with_power(catalog.base_unit(unit.definition), self.power);
        Ok((base, value))
    }

    /// Express `value`, currently in this (base) dimension, in `unit` with
    /// `prefix`. Fails unless `self` is a base dimension of the same
    /// definition as `unit`.
    pub fn from_base<T: Numeric>(
        &self,
        catalog: &Catalog,
        value: &T,
        unit: UnitId,
        prefix: Option<PrefixId>,
    ) -> Result<(Dimension, T)> {
        if !self.is_base(catalog) {
            return Err(ConversionError::NotBaseDimension {
                unit: catalog.unit(self.unit).key.clone(),
            }
            .into());
        }
        ensure_same_definition(catalog, self.unit, unit)?;

        let target = Dimension {
            unit,
            power: self.power,
            prefix,
        };
        if target.is_base(catalog) {
            return Ok((target, value.clone()));
        }

        let record = catalog.unit(unit);
        let prefix = prefix.map(|p| catalog.prefix(p).multiplier());
        let mut value = value.clone();
        for _ in 0..self.power.unsigned_abs() {
            if self.power > 0 {
                value = shift(&value, -record.offset, &record.key)?.div_scalar(record.multiplier);
                if let Some(m) = prefix {
                    value = value.div_scalar(m);
                }
            } else {
                value = shift(&value.mul_scalar(record.multiplier), record.offset, &record.key)?;
                if let Some(m) = prefix {
                    value = value.mul_scalar(m);
                }
            }
        }
        Ok((target, value))
    }

    /// Convert to `unit`/`prefix` of the same definition, through the base unit
    pub fn convert<T: Numeric>(
        &self,
        catalog: &Catalog,
        value: &T,
        unit: UnitId,
        prefix: Option<PrefixId>,
    ) -> Result<(Dimension, T)> {
        let (base, value) = self.to_base(catalog, value)?;
        base.from_base(catalog, &value, unit, prefix)
    }

    /// Merge `other` into this dimension.
    ///
    /// `other` is first converted into this unit and prefix, then the powers
    /// are summed. The result may have power zero.
    pub fn combine<T: Numeric>(
        &self,
        catalog: &Catalog,
        value: &T,
        other: &Dimension,
    ) -> Result<(Dimension, T)> {
        ensure_same_definition(catalog, self.unit, other.unit)?;

        let (other, value) = if other.unit == self.unit && other.prefix == self.prefix {
            (*other, value.clone())
        } else {
            other.convert(catalog, value, self.unit, self.prefix)?
        };
        Ok((self.powered(self.power + other.power), value))
    }

    /// Plain-text form such as `km^2`
    pub fn render(&self, catalog: &Catalog) -> String {
        let unit = catalog.unit(self.unit);
        let prefix = self
            .prefix
            .map(|p| catalog.prefix(p).symbol.as_str())
            .unwrap_or("");
        let symbol = if unit.symbol.is_empty() {
            unit.key.as_str()
        } else {
            unit.symbol.as_str()
        };
        if self.power == 1 {
            format!("{prefix}{symbol}")
        } else {
            format!("{prefix}{symbol}^{}", self.power)
        }
    }
}

/// Render a dimension list, `·`-separated
pub fn render_dimensions(catalog: &Catalog, dimensions: &[Dimension]) -> String {
    dimensions
        .iter()
        .map(|d| d.render(catalog))
        .collect::<Vec<_>>()
        .join("·")
}

/// Add `offset`, skipping negligible offsets. Values that cannot absorb a
/// scalar fail on a real offset.
fn shift<T: Numeric>(value: &T, offset: f64, unit: &str) -> Result<T> {
    if offset.abs() < OFFSET_EPSILON {
        return Ok(value.clone());
    }
    value.add_scalar(offset).ok_or_else(|| {
        ConversionError::UnsupportedOffset {
            unit: unit.to_string(),
            offset,
        }
        .into()
    })
}

fn ensure_same_definition(catalog: &Catalog, left: UnitId, right: UnitId) -> Result<()> {
    if catalog.definition_of(left) == catalog.definition_of(right) {
        return Ok(());
    }
    Err(ConversionError::DefinitionMismatch {
        left: catalog.unit(left).key.clone(),
        right: catalog.unit(right).key.clone(),
    }
    .into())
}
