//! A value paired with a dimension list

use std::fmt;

use crate::algebra::{self, render_dimensions, Dimension};
use crate::catalog::{Catalog, DefinitionId};
use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::number::Numeric;

/// `value × Π dimensions`.
///
/// Operations never modify the receiver; each returns a new quantity. The
/// dimension list is kept as given until an operation simplifies it.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<T> {
    value: T,
    dimensions: Vec<Dimension>,
}

impl<T: Numeric> Quantity<T> {
    pub fn new(value: T, dimensions: Vec<Dimension>) -> Self {
        Self { value, dimensions }
    }

    pub fn dimensionless(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn into_parts(self) -> (T, Vec<Dimension>) {
        (self.value, self.dimensions)
    }

    /// Carries no dimensions at all
    pub fn is_dimensionless(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Express this quantity in `target` dimensions
    pub fn convert(&self, engine: &Engine, target: &[Dimension]) -> Result<Self> {
        ensure_commensurable(engine, &self.dimensions, target)?;
        self.convert_unchecked(engine.catalog(), target)
    }

    /// Convert to a single unit given by name (`"second"`, `"kilogram"`)
    pub fn convert_to_unit(&self, engine: &Engine, name: &str) -> Result<Self> {
        self.convert(engine, &[engine.dimension_by_name(name, 1)?])
    }

    /// Convert into the dimensions carried by `other`
    pub fn convert_to(&self, engine: &Engine, other: &Self) -> Result<Self> {
        self.convert(engine, &other.dimensions)
    }

    /// Every dimension replaced by its definition's base unit, unmerged
    pub fn convert_to_base(&self, engine: &Engine) -> Result<Self> {
        let catalog = engine.catalog();
        let mut value = self.value.clone();
        let mut dimensions = Vec::with_capacity(self.dimensions.len());
        for dimension in &self.dimensions {
            let (base, converted) = dimension.to_base(catalog, &value)?;
            value = converted;
            dimensions.push(base);
        }
        Ok(Self::new(value, dimensions))
    }

    /// Expressed in fundamental base units only
    pub fn to_base_systems(&self, engine: &Engine) -> Result<Self> {
        let (dimensions, value) =
            algebra::to_base_systems(engine.catalog(), &self.dimensions, &self.value)?;
        Ok(Self::new(value, dimensions))
    }

    pub fn simple_simplify(&self, engine: &Engine) -> Result<Self> {
        let (dimensions, value) =
            algebra::simple_simplify(engine.catalog(), &self.dimensions, &self.value)?;
        Ok(Self::new(value, dimensions))
    }

    pub fn simplify(&self, engine: &Engine) -> Result<Self> {
        let (dimensions, value) = algebra::simplify(
            engine.catalog(),
            engine.settings(),
            &self.dimensions,
            &self.value,
        )?;
        Ok(Self::new(value, dimensions))
    }

    pub fn is_commensurable(&self, engine: &Engine, other: &Self) -> Result<bool> {
        commensurable(engine, &self.dimensions, &other.dimensions)
    }

    /// Sum in the receiver's dimensions
    pub fn add(&self, engine: &Engine, other: &Self) -> Result<Self> {
        let other = self.align(engine, other)?;
        Ok(Self::new(self.value.add(&other), self.dimensions.clone()))
    }

    /// Difference in the receiver's dimensions
    pub fn sub(&self, engine: &Engine, other: &Self) -> Result<Self> {
        let other = self.align(engine, other)?;
        Ok(Self::new(self.value.sub(&other), self.dimensions.clone()))
    }

    pub fn mul(&self, engine: &Engine, other: &Self) -> Result<Self> {
        let mut dimensions = self.dimensions.clone();
        dimensions.extend_from_slice(&other.dimensions);
        Self::new(self.value.mul(&other.value), dimensions).simplify(engine)
    }

    pub fn div(&self, engine: &Engine, other: &Self) -> Result<Self> {
        if other.value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let mut dimensions = self.dimensions.clone();
        dimensions.extend(other.dimensions.iter().map(|d| d.invert()));
        Self::new(self.value.div(&other.value), dimensions).simplify(engine)
    }

    /// Multiply by a dimensionless scalar
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.value.mul_scalar(factor), self.dimensions.clone())
    }

    pub fn mul_value(&self, rhs: &T) -> Self {
        Self::new(self.value.mul(rhs), self.dimensions.clone())
    }

    pub fn div_value(&self, rhs: &T) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(self.value.div(rhs), self.dimensions.clone()))
    }

    pub fn neg(&self) -> Self {
        Self::new(self.value.neg(), self.dimensions.clone())
    }

    /// `1 / self`
    pub fn invert(&self) -> Result<Self> {
        if self.value.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::new(
            T::from_scalar(1.0).div(&self.value),
            self.dimensions.iter().map(|d| d.invert()).collect(),
        ))
    }

    pub fn powi(&self, exp: i32) -> Result<Self> {
        let dimensions = self
            .dimensions
            .iter()
            .filter(|_| exp != 0)
            .map(|d| {
                d.power
                    .checked_mul(exp)
                    .map(|power| d.powered(power))
                    .ok_or(Error::PowerOverflow {
                        power: d.power,
                        exponent: exp,
                    })
            })
            .collect::<Result<_>>()?;
        Ok(Self::new(self.value.powi(exp), dimensions))
    }

    /// Square root; every power must be even
    pub fn sqrt(&self) -> Result<Self> {
        if let Some(odd) = self.dimensions.iter().find(|d| d.power % 2 != 0) {
            return Err(Error::OddPower {
                operation: "square root",
                power: odd.power,
            });
        }
        Ok(Self::new(
            self.value.sqrt(),
            self.dimensions
                .iter()
                .map(|d| d.powered(d.power / 2))
                .collect(),
        ))
    }

    /// Smaller of the two, in the receiver's dimensions
    pub fn min(&self, engine: &Engine, other: &Self) -> Result<Self> {
        let other = self.align(engine, other)?;
        Ok(Self::new(self.value.min(&other), self.dimensions.clone()))
    }

    /// Larger of the two, in the receiver's dimensions
    pub fn max(&self, engine: &Engine, other: &Self) -> Result<Self> {
        let other = self.align(engine, other)?;
        Ok(Self::new(self.value.max(&other), self.dimensions.clone()))
    }

    /// Plain-text rendering, `value prefixsymbol^power·...`
    pub fn display<'a>(&'a self, engine: &'a Engine) -> QuantityDisplay<'a, T> {
        QuantityDisplay {
            quantity: self,
            catalog: engine.catalog(),
        }
    }

    /// `other`'s value expressed in the receiver's dimensions
    fn align(&self, engine: &Engine, other: &Self) -> Result<T> {
        ensure_commensurable(engine, &self.dimensions, &other.dimensions)?;
        Ok(other
            .convert_unchecked(engine.catalog(), &self.dimensions)?
            .value)
    }

    fn convert_unchecked(&self, catalog: &Catalog, target: &[Dimension]) -> Result<Self> {
        let (source, value) = algebra::simple_simplify(catalog, &self.dimensions, &self.value)?;

        if let Some(pairs) = pair_up(catalog, &source, target) {
            let mut value = value;
            for (from, to) in pairs {
                (_, value) = from.convert(catalog, &value, to.unit, to.prefix)?;
            }
            return Ok(Self::new(value, target.to_vec()));
        }

        let (_, value) = algebra::to_base_systems(catalog, &source, &value)?;
        let (_, unit) = algebra::to_base_systems(catalog, target, &T::from_scalar(1.0))?;
        Ok(Self::new(value.div(&unit), target.to_vec()))
    }
}

pub struct QuantityDisplay<'a, T> {
    quantity: &'a Quantity<T>,
    catalog: &'a Catalog,
}

impl<T: Numeric + fmt::Display> fmt::Display for QuantityDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.quantity.value)?;
        if !self.quantity.dimensions.is_empty() {
            write!(
                f,
                " {}",
                render_dimensions(self.catalog, &self.quantity.dimensions)
            )?;
        }
        Ok(())
    }
}

/// Match each source dimension with a distinct target of the same
/// definition and power
fn pair_up(
    catalog: &Catalog,
    source: &[Dimension],
    target: &[Dimension],
) -> Option<Vec<(Dimension, Dimension)>> {
    if source.len() != target.len() {
        return None;
    }
    let mut used = vec![false; target.len()];
    let mut pairs = Vec::with_capacity(source.len());
    for from in source {
        let j = (0..target.len()).find(|&j| {
            !used[j]
                && target[j].power == from.power
                && target[j].definition(catalog) == from.definition(catalog)
        })?;
        used[j] = true;
        pairs.push((*from, target[j]));
    }
    Some(pairs)
}

fn structure(catalog: &Catalog, dimensions: &[Dimension]) -> Vec<(DefinitionId, i32)> {
    let mut shape: Vec<_> = dimensions
        .iter()
        .map(|d| (d.definition(catalog), d.power))
        .collect();
    shape.sort_unstable();
    shape
}

/// Same shape after simplification, or the same fundamental expansion
fn commensurable(engine: &Engine, left: &[Dimension], right: &[Dimension]) -> Result<bool> {
    let catalog = engine.catalog();
    let settings = engine.settings();

    let (simple_left, _) = algebra::simplify(catalog, settings, left, &1.0)?;
    let (simple_right, _) = algebra::simplify(catalog, settings, right, &1.0)?;
    if structure(catalog, &simple_left) == structure(catalog, &simple_right) {
        return Ok(true);
    }

    let (base_left, _) = algebra::to_base_systems(catalog, left, &1.0)?;
    let (base_right, _) = algebra::to_base_systems(catalog, right, &1.0)?;
    Ok(structure(catalog, &base_left) == structure(catalog, &base_right))
}

fn ensure_commensurable(engine: &Engine, left: &[Dimension], right: &[Dimension]) -> Result<()> {
    if commensurable(engine, left, right)? {
        return Ok(());
    }
    let catalog = engine.catalog();
    Err(Error::Incommensurable {
        left: render_dimensions(catalog, left),
        right: render_dimensions(catalog, right),
    })
}
