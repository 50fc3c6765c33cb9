//! JSON output shapes

use dimensa_core::{Engine, Numeric, Quantity, UnitId};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct DimensionReport {
    pub unit: String,
    pub prefix: Option<String>,
    pub power: i32,
}

#[derive(Debug, Serialize)]
pub struct QuantityReport<T> {
    pub value: T,
    pub dimensions: Vec<DimensionReport>,
    pub display: String,
}

impl<T: Numeric + fmt::Display + Serialize> QuantityReport<T> {
    pub fn new(engine: &Engine, quantity: &Quantity<T>) -> Self {
        let catalog = engine.catalog();
        Self {
            value: quantity.value().clone(),
            dimensions: quantity
                .dimensions()
                .iter()
                .map(|d| DimensionReport {
                    unit: catalog.unit(d.unit).key.clone(),
                    prefix: d.prefix.map(|p| catalog.prefix(p).key.clone()),
                    power: d.power,
                })
                .collect(),
            display: quantity.display(engine).to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UnitReport {
    pub key: String,
    pub name: String,
    pub symbol: String,
    pub definition: String,
    pub system: Option<String>,
}

impl UnitReport {
    pub fn new(engine: &Engine, id: UnitId) -> Self {
        let catalog = engine.catalog();
        let unit = catalog.unit(id);
        Self {
            key: unit.key.clone(),
            name: unit.name.clone(),
            symbol: unit.symbol.clone(),
            definition: catalog.definition(unit.definition).key.clone(),
            system: unit.system.map(|s| catalog.system(s).key.clone()),
        }
    }
}
