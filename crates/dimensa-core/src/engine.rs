//! Entry point bundling a catalog with the settings the algebra runs under

use crate::algebra::Dimension;
use crate::catalog::{Catalog, DefinitionId, DimensionDefinition, PrefixId, UnitId};
use crate::error::{Error, Result};
use crate::number::Numeric;
use crate::quantity::Quantity;
use crate::settings::Settings;

/// A validated catalog plus settings.
///
/// ```
/// use dimensa_core::Engine;
///
/// let engine = Engine::standard().unwrap();
/// let q = engine.quantity(5.0, "minute").unwrap();
/// let s = q.convert_to_unit(&engine, "second").unwrap();
/// assert!((s.value() - 300.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    settings: Settings,
}

impl Engine {
    pub fn new(catalog: Catalog, settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { catalog, settings })
    }

    /// Built-in catalog with default settings
    pub fn standard() -> Result<Self> {
        Self::new(Catalog::standard()?, Settings::default())
    }

    pub fn with_settings(self, settings: Settings) -> Result<Self> {
        Self::new(self.catalog, settings)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Unit by exact key. Vector units are hidden unless vector dimensions
    /// are allowed.
    pub fn unit(&self, key: &str) -> Result<UnitId> {
        let id = self.catalog.unit_id(key)?;
        if self.visible(self.catalog.definition(self.catalog.definition_of(id))) {
            Ok(id)
        } else {
            Err(Error::unknown("unit", key))
        }
    }

    pub fn prefix(&self, key: &str) -> Result<PrefixId> {
        self.catalog.prefix_id(key)
    }

    pub fn dimension(&self, key: &str, power: i32) -> Result<Dimension> {
        Ok(Dimension::with_power(self.unit(key)?, power))
    }

    /// Resolve `name` as a unit key, or as a prefix key followed by a unit
    /// key (`kilometer`, `mebibyte`).
    pub fn dimension_by_name(&self, name: &str, power: i32) -> Result<Dimension> {
        if let Ok(dimension) = self.dimension(name, power) {
            return Ok(dimension);
        }
        for (id, prefix) in self.catalog.prefixes() {
            let Some(rest) = name.strip_prefix(prefix.key.as_str()) else {
                continue;
            };
            if let Ok(dimension) = self.dimension(rest, power) {
                return Ok(dimension.with_prefix(Some(id)));
            }
        }
        Err(Error::unknown("unit", name))
    }

    /// `value` in a single unit given by name
    pub fn quantity<T: Numeric>(&self, value: T, name: &str) -> Result<Quantity<T>> {
        Ok(Quantity::new(value, vec![self.dimension_by_name(name, 1)?]))
    }

    /// Definitions visible under the current settings, in catalog order
    pub fn definitions(&self) -> impl Iterator<Item = (DefinitionId, &DimensionDefinition)> {
        self.catalog
            .definitions()
            .filter(move |(_, d)| self.visible(d))
    }

    pub fn derived_definitions(&self) -> Vec<DefinitionId> {
        self.definitions()
            .filter(|(_, d)| d.is_derived())
            .map(|(id, _)| id)
            .collect()
    }

    fn visible(&self, definition: &DimensionDefinition) -> bool {
        self.settings.allow_vector_dimensions || !definition.vector
    }
}
