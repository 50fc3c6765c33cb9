//! Unit catalog: measurement systems, dimension definitions, units and prefixes
//!
//! The catalog is an arena. Records refer to each other through the typed
//! indices below, never through pointers, and nothing is mutated once
//! [`CatalogBuilder::build`] has validated the data.

mod builder;
mod standard;

pub use builder::{CatalogBuilder, DefinitionSpec, PrefixSpec, SystemSpec, UnitSpec};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

macro_rules! catalog_id {
    ($($(#[$meta:meta])* $name:ident),*) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub(crate) usize);

        impl $name {
            pub fn index(self) -> usize {
                self.0
            }
        }
    )*};
}

catalog_id!(
    /// Index of a [`MeasurementSystem`]
    SystemId,
    /// Index of a [`DimensionDefinition`]
    DefinitionId,
    /// Index of a [`Unit`]
    UnitId,
    /// Index of a [`Prefix`]
    PrefixId
);

/// A family of units (SI, US customary, ...). Systems form a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSystem {
    pub key: String,
    pub name: String,
    pub historical: bool,
    pub parent: Option<SystemId>,
}

/// A product of other definitions:
/// one base unit of the owner equals `factor` times the product of the
/// terms' base units raised to their powers.
#[derive(Debug, Clone, PartialEq)]
pub struct Derivation {
    pub terms: Vec<(DefinitionId, i32)>,
    pub factor: f64,
}

/// A measurable physical kind such as length or speed
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionDefinition {
    pub key: String,
    pub name: String,
    pub symbol: String,
    pub aliases: Vec<String>,
    pub vector: bool,
    pub dimensionless: bool,
    /// Units in catalog order
    pub units: Vec<UnitId>,
    pub base_unit: UnitId,
    pub derived: Option<Derivation>,
}

impl DimensionDefinition {
    pub fn is_derived(&self) -> bool {
        self.derived.as_ref().is_some_and(|d| !d.terms.is_empty())
    }
}

/// Governs which prefixes a unit accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    Si,
    Customary,
    Binary,
    Fractional,
    Whole,
    Range,
}

/// A concrete scale within a dimension definition.
///
/// `base value = value × multiplier + offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub key: String,
    pub name: String,
    pub plural: String,
    pub symbol: String,
    pub aliases: Vec<String>,
    pub definition: DefinitionId,
    pub multiplier: f64,
    pub offset: f64,
    pub rare: bool,
    pub estimated: bool,
    pub kind: UnitKind,
    /// Prefix this unit is normally displayed with (kilo for the gram)
    pub default_prefix: Option<PrefixId>,
    /// Rare prefixes accepted for this unit regardless of settings
    pub extra_prefixes: Vec<PrefixId>,
    pub system: Option<SystemId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixKind {
    Si,
    SiBinary,
    SiUnofficial,
}

/// A scale multiplier, `base ^ power`
#[derive(Debug, Clone, PartialEq)]
pub struct Prefix {
    pub key: String,
    pub symbol: String,
    pub kind: PrefixKind,
    pub rare: bool,
    pub base: f64,
    pub power: i32,
}

impl Prefix {
    pub fn multiplier(&self) -> f64 {
        self.base.powi(self.power)
    }
}

/// Validated, read-only unit catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) systems: Vec<MeasurementSystem>,
    pub(crate) definitions: Vec<DimensionDefinition>,
    pub(crate) units: Vec<Unit>,
    pub(crate) prefixes: Vec<Prefix>,
    /// Per definition: its decomposition into fundamental definitions
    pub(crate) fundamentals: Vec<Derivation>,
    pub(crate) system_keys: HashMap<String, SystemId>,
    pub(crate) definition_keys: HashMap<String, DefinitionId>,
    pub(crate) unit_keys: HashMap<String, UnitId>,
    pub(crate) prefix_keys: HashMap<String, PrefixId>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn system(&self, id: SystemId) -> &MeasurementSystem {
        &self.systems[id.0]
    }

    pub fn definition(&self, id: DefinitionId) -> &DimensionDefinition {
        &self.definitions[id.0]
    }

    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.0]
    }

    pub fn prefix(&self, id: PrefixId) -> &Prefix {
        &self.prefixes[id.0]
    }

    pub fn system_id(&self, key: &str) -> Result<SystemId> {
        self.system_keys
            .get(key)
            .copied()
            .ok_or_else(|| Error::unknown("measurement system", key))
    }

    pub fn definition_id(&self, key: &str) -> Result<DefinitionId> {
        self.definition_keys
            .get(key)
            .copied()
            .ok_or_else(|| Error::unknown("dimension definition", key))
    }

    pub fn unit_id(&self, key: &str) -> Result<UnitId> {
        self.unit_keys
            .get(key)
            .copied()
            .ok_or_else(|| Error::unknown("unit", key))
    }

    pub fn prefix_id(&self, key: &str) -> Result<PrefixId> {
        self.prefix_keys
            .get(key)
            .copied()
            .ok_or_else(|| Error::unknown("prefix", key))
    }

    pub fn systems(&self) -> impl Iterator<Item = (SystemId, &MeasurementSystem)> {
        self.systems.iter().enumerate().map(|(i, s)| (SystemId(i), s))
    }

    /// Definitions in catalog order
    pub fn definitions(&self) -> impl Iterator<Item = (DefinitionId, &DimensionDefinition)> {
        self.definitions
            .iter()
            .enumerate()
            .map(|(i, d)| (DefinitionId(i), d))
    }

    pub fn units(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units.iter().enumerate().map(|(i, u)| (UnitId(i), u))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = (PrefixId, &Prefix)> {
        self.prefixes.iter().enumerate().map(|(i, p)| (PrefixId(i), p))
    }

    /// Definition owning `unit`
    pub fn definition_of(&self, unit: UnitId) -> DefinitionId {
        self.unit(unit).definition
    }

    pub fn base_unit(&self, definition: DefinitionId) -> UnitId {
        self.definition(definition).base_unit
    }

    pub fn is_base_unit(&self, unit: UnitId) -> bool {
        self.base_unit(self.definition_of(unit)) == unit
    }

    /// Decomposition of `definition` into fundamental definitions.
    ///
    /// A fundamental definition decomposes into itself, a dimensionless one
    /// into nothing.
    pub fn fundamental_terms(&self, definition: DefinitionId) -> &Derivation {
        &self.fundamentals[definition.0]
    }

    /// `system` followed by its ancestors, nearest first
    pub fn lineage(&self, system: SystemId) -> Vec<SystemId> {
        let mut chain = vec![system];
        let mut current = self.system(system).parent;
        while let Some(parent) = current {
            if chain.contains(&parent) {
                break;
            }
            chain.push(parent);
            current = self.system(parent).parent;
        }
        chain
    }

    /// Units eligible within `system`: those of the system or any ancestor
    pub fn units_in_system(&self, system: SystemId) -> Vec<UnitId> {
        let lineage = self.lineage(system);
        self.units()
            .filter(|(_, u)| u.system.is_some_and(|s| lineage.contains(&s)))
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_builds() {
        let catalog = Catalog::standard().unwrap();
        for (id, def) in catalog.definitions() {
            let base = catalog.base_unit(id);
            assert!(def.units.contains(&base), "{} base unit not owned", def.key);
            assert!(catalog.is_base_unit(base));
        }
    }

    #[test]
    fn test_fundamental_terms() {
        let catalog = Catalog::standard().unwrap();
        let force = catalog.definition_id("force").unwrap();
        let mass = catalog.definition_id("mass").unwrap();
        let time = catalog.definition_id("time").unwrap();

        let expansion = catalog.fundamental_terms(force);
        assert_eq!(expansion.factor, 1000.0);
        assert!(expansion.terms.contains(&(mass, 1)));
        assert!(expansion.terms.contains(&(time, -2)));

        assert_eq!(catalog.fundamental_terms(mass).terms, vec![(mass, 1)]);

        let ratio = catalog.definition_id("ratio").unwrap();
        assert!(catalog.fundamental_terms(ratio).terms.is_empty());
    }

    #[test]
    fn test_lineage_and_system_units() {
        let catalog = Catalog::standard().unwrap();
        let imperial = catalog.system_id("imperial").unwrap();
        let customary = catalog.system_id("customary").unwrap();
        assert_eq!(catalog.lineage(imperial), vec![imperial, customary]);

        let units = catalog.units_in_system(imperial);
        let stone = catalog.unit_id("stone").unwrap();
        let foot = catalog.unit_id("foot").unwrap();
        let meter = catalog.unit_id("meter").unwrap();
        assert!(units.contains(&stone));
        assert!(units.contains(&foot));
        assert!(!units.contains(&meter));

        let us = catalog.system_id("us").unwrap();
        assert!(!catalog.units_in_system(us).contains(&stone));
    }

    #[test]
    fn test_prefix_multiplier() {
        let catalog = Catalog::standard().unwrap();
        let kilo = catalog.prefix(catalog.prefix_id("kilo").unwrap());
        assert_eq!(kilo.multiplier(), 1000.0);
        let kibi = catalog.prefix(catalog.prefix_id("kibi").unwrap());
        assert_eq!(kibi.multiplier(), 1024.0);
    }

    #[test]
    fn test_unknown_key() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(
            catalog.unit_id("furlong"),
            Err(Error::unknown("unit", "furlong"))
        );
    }
}
