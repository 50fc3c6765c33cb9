//! Catalog construction and integrity checks
//!
//! A loader describes records by key; [`CatalogBuilder::build`] resolves the
//! keys into indices and rejects inconsistent data.

use std::collections::HashMap;

use super::{
    Catalog, DefinitionId, Derivation, DimensionDefinition, MeasurementSystem, Prefix,
    PrefixId, PrefixKind, SystemId, Unit, UnitId, UnitKind,
};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct SystemSpec {
    key: String,
    name: String,
    historical: bool,
    parent: Option<String>,
}

impl SystemSpec {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            historical: false,
            parent: None,
        }
    }

    pub fn historical(mut self) -> Self {
        self.historical = true;
        self
    }

    pub fn parent(mut self, key: impl Into<String>) -> Self {
        self.parent = Some(key.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct DefinitionSpec {
    key: String,
    name: String,
    symbol: String,
    aliases: Vec<String>,
    vector: bool,
    dimensionless: bool,
}

impl DefinitionSpec {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            symbol: String::new(),
            aliases: Vec::new(),
            vector: false,
            dimensionless: false,
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn vector(mut self) -> Self {
        self.vector = true;
        self
    }

    pub fn dimensionless(mut self) -> Self {
        self.dimensionless = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct UnitSpec {
    key: String,
    definition: String,
    name: Option<String>,
    plural: Option<String>,
    symbol: String,
    aliases: Vec<String>,
    multiplier: f64,
    offset: f64,
    rare: bool,
    estimated: bool,
    kind: UnitKind,
    base: bool,
    default_prefix: Option<String>,
    extra_prefixes: Vec<String>,
    system: Option<String>,
}

impl UnitSpec {
    pub fn new(key: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            definition: definition.into(),
            name: None,
            plural: None,
            symbol: String::new(),
            aliases: Vec::new(),
            multiplier: 1.0,
            offset: 0.0,
            rare: false,
            estimated: false,
            kind: UnitKind::Si,
            base: false,
            default_prefix: None,
            extra_prefixes: Vec::new(),
            system: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn plural(mut self, plural: impl Into<String>) -> Self {
        self.plural = Some(plural.into());
        self
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn rare(mut self) -> Self {
        self.rare = true;
        self
    }

    pub fn estimated(mut self) -> Self {
        self.estimated = true;
        self
    }

    pub fn kind(mut self, kind: UnitKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark as the base unit of its definition
    pub fn base(mut self) -> Self {
        self.base = true;
        self
    }

    pub fn default_prefix(mut self, key: impl Into<String>) -> Self {
        self.default_prefix = Some(key.into());
        self
    }

    pub fn allow_prefix(mut self, key: impl Into<String>) -> Self {
        self.extra_prefixes.push(key.into());
        self
    }

    pub fn system(mut self, key: impl Into<String>) -> Self {
        self.system = Some(key.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct PrefixSpec {
    key: String,
    symbol: String,
    kind: PrefixKind,
    rare: bool,
    base: f64,
    power: i32,
}

impl PrefixSpec {
    pub fn new(
        key: impl Into<String>,
        symbol: impl Into<String>,
        kind: PrefixKind,
        base: f64,
        power: i32,
    ) -> Self {
        Self {
            key: key.into(),
            symbol: symbol.into(),
            kind,
            rare: false,
            base,
            power,
        }
    }

    /// Decimal SI prefix, `10^power`
    pub fn si(key: impl Into<String>, symbol: impl Into<String>, power: i32) -> Self {
        Self::new(key, symbol, PrefixKind::Si, 10.0, power)
    }

    /// Binary prefix, `2^power`
    pub fn binary(key: impl Into<String>, symbol: impl Into<String>, power: i32) -> Self {
        Self::new(key, symbol, PrefixKind::SiBinary, 2.0, power)
    }

    pub fn unofficial(key: impl Into<String>, symbol: impl Into<String>, power: i32) -> Self {
        Self::new(key, symbol, PrefixKind::SiUnofficial, 10.0, power)
    }

    pub fn rare(mut self) -> Self {
        self.rare = true;
        self
    }
}

#[derive(Debug, Clone)]
enum DerivationSpec {
    Terms(Vec<(String, i32)>),
    /// Definition keys alternating with `*` or `/`
    Tokens(Vec<String>),
}

/// Collects catalog records by key and validates them into a [`Catalog`]
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    systems: Vec<SystemSpec>,
    definitions: Vec<DefinitionSpec>,
    units: Vec<UnitSpec>,
    prefixes: Vec<PrefixSpec>,
    derivations: Vec<(String, DerivationSpec, f64)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn system(&mut self, spec: SystemSpec) -> &mut Self {
        self.systems.push(spec);
        self
    }

    pub fn definition(&mut self, spec: DefinitionSpec) -> &mut Self {
        self.definitions.push(spec);
        self
    }

    pub fn unit(&mut self, spec: UnitSpec) -> &mut Self {
        self.units.push(spec);
        self
    }

    pub fn prefix(&mut self, spec: PrefixSpec) -> &mut Self {
        self.prefixes.push(spec);
        self
    }

    /// Declare `definition` as the product of `terms`
    pub fn derive(&mut self, definition: &str, terms: &[(&str, i32)]) -> &mut Self {
        self.derive_scaled(definition, terms, 1.0)
    }

    /// Like [`derive`](Self::derive), with one base unit of `definition`
    /// worth `factor` times the product of the terms' base units
    pub fn derive_scaled(
        &mut self,
        definition: &str,
        terms: &[(&str, i32)],
        factor: f64,
    ) -> &mut Self {
        let terms = terms.iter().map(|(k, p)| (k.to_string(), *p)).collect();
        self.derivations
            .push((definition.to_string(), DerivationSpec::Terms(terms), factor));
        self
    }

    /// Declare a derivation from tokens such as `["length", "/", "time"]`
    pub fn derive_tokens(&mut self, definition: &str, tokens: &[&str]) -> &mut Self {
        let tokens = tokens.iter().map(|t| t.to_string()).collect();
        self.derivations
            .push((definition.to_string(), DerivationSpec::Tokens(tokens), 1.0));
        self
    }

    pub fn build(&self) -> Result<Catalog> {
        let system_keys = index_keys("measurement system", self.systems.iter().map(|s| &s.key))?;
        let prefix_keys = index_keys("prefix", self.prefixes.iter().map(|p| &p.key))?;
        let definition_keys =
            index_keys("dimension definition", self.definitions.iter().map(|d| &d.key))?;
        let unit_keys = index_keys("unit", self.units.iter().map(|u| &u.key))?;

        let mut systems = Vec::with_capacity(self.systems.len());
        for spec in &self.systems {
            let parent = match &spec.parent {
                Some(key) => Some(SystemId(lookup(&system_keys, "system", key, &spec.key)?)),
                None => None,
            };
            systems.push(MeasurementSystem {
                key: spec.key.clone(),
                name: spec.name.clone(),
                historical: spec.historical,
                parent,
            });
        }

        let mut prefixes = Vec::with_capacity(self.prefixes.len());
        for spec in &self.prefixes {
            let prefix = Prefix {
                key: spec.key.clone(),
                symbol: spec.symbol.clone(),
                kind: spec.kind,
                rare: spec.rare,
                base: spec.base,
                power: spec.power,
            };
            let multiplier = prefix.multiplier();
            if !multiplier.is_finite() || multiplier == 0.0 {
                return Err(Error::integrity(format!(
                    "prefix '{}' has invalid multiplier {multiplier}",
                    spec.key
                )));
            }
            prefixes.push(prefix);
        }

        let mut units = Vec::with_capacity(self.units.len());
        let mut owned: Vec<Vec<UnitId>> = vec![Vec::new(); self.definitions.len()];
        let mut bases: Vec<Option<UnitId>> = vec![None; self.definitions.len()];
        for (index, spec) in self.units.iter().enumerate() {
            let definition = lookup(&definition_keys, "definition", &spec.definition, &spec.key)?;
            if !spec.multiplier.is_finite() || spec.multiplier == 0.0 {
                return Err(Error::integrity(format!(
                    "unit '{}' has invalid multiplier {}",
                    spec.key, spec.multiplier
                )));
            }
            if !spec.offset.is_finite() {
                return Err(Error::integrity(format!(
                    "unit '{}' has invalid offset {}",
                    spec.key, spec.offset
                )));
            }
            if spec.base {
                if spec.multiplier != 1.0 || spec.offset != 0.0 {
                    return Err(Error::integrity(format!(
                        "base unit '{}' must have multiplier 1 and offset 0",
                        spec.key
                    )));
                }
                if let Some(existing) = bases[definition] {
                    return Err(Error::integrity(format!(
                        "definition '{}' has two base units: '{}' and '{}'",
                        spec.definition, self.units[existing.0].key, spec.key
                    )));
                }
                bases[definition] = Some(UnitId(index));
            }

            let default_prefix = match &spec.default_prefix {
                Some(key) => Some(PrefixId(lookup(&prefix_keys, "prefix", key, &spec.key)?)),
                None => None,
            };
            let extra_prefixes = spec
                .extra_prefixes
                .iter()
                .map(|key| lookup(&prefix_keys, "prefix", key, &spec.key).map(PrefixId))
                .collect::<Result<Vec<_>>>()?;
            let system = match &spec.system {
                Some(key) => Some(SystemId(lookup(&system_keys, "system", key, &spec.key)?)),
                None => None,
            };

            owned[definition].push(UnitId(index));
            units.push(Unit {
                key: spec.key.clone(),
                name: spec.name.clone().unwrap_or_else(|| spec.key.clone()),
                plural: spec
                    .plural
                    .clone()
                    .or_else(|| spec.name.as_ref().map(|n| format!("{n}s")))
                    .unwrap_or_else(|| format!("{}s", spec.key)),
                symbol: spec.symbol.clone(),
                aliases: spec.aliases.clone(),
                definition: DefinitionId(definition),
                multiplier: spec.multiplier,
                offset: spec.offset,
                rare: spec.rare,
                estimated: spec.estimated,
                kind: spec.kind,
                default_prefix,
                extra_prefixes,
                system,
            });
        }

        let mut derived: Vec<Option<Derivation>> = vec![None; self.definitions.len()];
        for (key, spec, factor) in &self.derivations {
            let definition = lookup(&definition_keys, "definition", key, "derivation")?;
            if derived[definition].is_some() {
                return Err(Error::integrity(format!(
                    "definition '{key}' is derived twice"
                )));
            }
            if !factor.is_finite() || *factor == 0.0 {
                return Err(Error::integrity(format!(
                    "derivation of '{key}' has invalid factor {factor}"
                )));
            }
            let terms = match spec {
                DerivationSpec::Terms(terms) => terms.clone(),
                DerivationSpec::Tokens(tokens) => parse_tokens(key, tokens)?,
            };
            let mut resolved: Vec<(DefinitionId, i32)> = Vec::new();
            for (term, power) in terms {
                let id = DefinitionId(lookup(&definition_keys, "definition", &term, key)?);
                accumulate(&mut resolved, id, power);
            }
            if resolved.is_empty() {
                return Err(Error::integrity(format!(
                    "derivation of '{key}' has no terms"
                )));
            }
            derived[definition] = Some(Derivation {
                terms: resolved,
                factor: *factor,
            });
        }

        let mut definitions = Vec::with_capacity(self.definitions.len());
        for (index, spec) in self.definitions.iter().enumerate() {
            let base_unit = bases[index].ok_or_else(|| {
                Error::integrity(format!("definition '{}' has no base unit", spec.key))
            })?;
            definitions.push(DimensionDefinition {
                key: spec.key.clone(),
                name: spec.name.clone(),
                symbol: spec.symbol.clone(),
                aliases: spec.aliases.clone(),
                vector: spec.vector,
                dimensionless: spec.dimensionless,
                units: std::mem::take(&mut owned[index]),
                base_unit,
                derived: derived[index].take(),
            });
        }

        let fundamentals = expand_fundamentals(&definitions)?;

        Ok(Catalog {
            systems,
            definitions,
            units,
            prefixes,
            fundamentals,
            system_keys: typed(system_keys, SystemId),
            definition_keys: typed(definition_keys, DefinitionId),
            unit_keys: typed(unit_keys, UnitId),
            prefix_keys: typed(prefix_keys, PrefixId),
        })
    }
}

fn index_keys<'a>(
    kind: &str,
    keys: impl Iterator<Item = &'a String>,
) -> Result<HashMap<String, usize>> {
    let mut map = HashMap::new();
    for (index, key) in keys.enumerate() {
        if map.insert(key.clone(), index).is_some() {
            return Err(Error::integrity(format!("duplicate {kind} key '{key}'")));
        }
    }
    Ok(map)
}

fn lookup(map: &HashMap<String, usize>, kind: &str, key: &str, owner: &str) -> Result<usize> {
    map.get(key)
        .copied()
        .ok_or_else(|| Error::integrity(format!("{owner} references unknown {kind} '{key}'")))
}

fn typed<T>(map: HashMap<String, usize>, wrap: fn(usize) -> T) -> HashMap<String, T> {
    map.into_iter().map(|(k, v)| (k, wrap(v))).collect()
}

fn accumulate(terms: &mut Vec<(DefinitionId, i32)>, id: DefinitionId, power: i32) {
    match terms.iter().position(|(d, _)| *d == id) {
        Some(i) => {
            terms[i].1 += power;
            if terms[i].1 == 0 {
                terms.remove(i);
            }
        }
        None if power != 0 => terms.push((id, power)),
        None => {}
    }
}

fn parse_tokens(definition: &str, tokens: &[String]) -> Result<Vec<(String, i32)>> {
    let mut terms = Vec::new();
    let mut iter = tokens.iter();
    let Some(first) = iter.next() else {
        return Ok(terms);
    };
    terms.push((first.clone(), 1));
    while let Some(divider) = iter.next() {
        let power = match divider.as_str() {
            "*" => 1,
            "/" => -1,
            other => {
                return Err(Error::integrity(format!(
                    "derivation of '{definition}' has divider '{other}', expected '*' or '/'"
                )))
            }
        };
        let term = iter.next().ok_or_else(|| {
            Error::integrity(format!(
                "derivation of '{definition}' ends with divider '{divider}'"
            ))
        })?;
        terms.push((term.clone(), power));
    }
    Ok(terms)
}

/// Resolve every definition into fundamental terms, rejecting cycles
fn expand_fundamentals(definitions: &[DimensionDefinition]) -> Result<Vec<Derivation>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        Visiting,
        Done,
    }

    fn visit(
        index: usize,
        definitions: &[DimensionDefinition],
        marks: &mut [Mark],
        done: &mut [Option<Derivation>],
    ) -> Result<()> {
        match marks[index] {
            Mark::Done => return Ok(()),
            Mark::Visiting => {
                return Err(Error::integrity(format!(
                    "derivation of '{}' is circular",
                    definitions[index].key
                )))
            }
            Mark::Unvisited => {}
        }
        marks[index] = Mark::Visiting;

        let def = &definitions[index];
        let expansion = if def.dimensionless {
            Derivation {
                terms: Vec::new(),
                factor: 1.0,
            }
        } else {
            match &def.derived {
                Some(derivation) => {
                    let mut terms = Vec::new();
                    let mut factor = derivation.factor;
                    for &(term, power) in &derivation.terms {
                        visit(term.0, definitions, marks, done)?;
                        if let Some(inner) = &done[term.0] {
                            factor *= inner.factor.powi(power);
                            for &(fundamental, p) in &inner.terms {
                                accumulate(&mut terms, fundamental, p * power);
                            }
                        }
                    }
                    Derivation { terms, factor }
                }
                None => Derivation {
                    terms: vec![(DefinitionId(index), 1)],
                    factor: 1.0,
                },
            }
        };

        done[index] = Some(expansion);
        marks[index] = Mark::Done;
        Ok(())
    }

    let mut marks = vec![Mark::Unvisited; definitions.len()];
    let mut done: Vec<Option<Derivation>> = vec![None; definitions.len()];
    for index in 0..definitions.len() {
        visit(index, definitions, &mut marks, &mut done)?;
    }
    Ok(done.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> CatalogBuilder {
        let mut b = CatalogBuilder::new();
        b.definition(DefinitionSpec::new("length", "Length"))
            .definition(DefinitionSpec::new("time", "Time"))
            .definition(DefinitionSpec::new("speed", "Speed"))
            .unit(UnitSpec::new("meter", "length").symbol("m").base())
            .unit(UnitSpec::new("second", "time").symbol("s").base())
            .unit(UnitSpec::new("meterPerSecond", "speed").symbol("m/s").base());
        b
    }

    #[test]
    fn test_derive_tokens() {
        let mut b = base_builder();
        b.derive_tokens("speed", &["length", "/", "time"]);
        let catalog = b.build().unwrap();

        let speed = catalog.definition_id("speed").unwrap();
        let length = catalog.definition_id("length").unwrap();
        let time = catalog.definition_id("time").unwrap();
        let derivation = catalog.definition(speed).derived.as_ref().unwrap();
        assert_eq!(derivation.terms, vec![(length, 1), (time, -1)]);
        assert!(catalog.definition(speed).is_derived());
    }

    #[test]
    fn test_invalid_divider() {
        let mut b = base_builder();
        b.derive_tokens("speed", &["length", "%", "time"]);
        assert!(matches!(b.build(), Err(Error::CatalogIntegrity(_))));
    }

    #[test]
    fn test_missing_base_unit() {
        let mut b = base_builder();
        b.definition(DefinitionSpec::new("mass", "Mass"))
            .unit(UnitSpec::new("pound", "mass").multiplier(453.59237));
        let err = b.build().unwrap_err();
        assert_eq!(
            err,
            Error::CatalogIntegrity("definition 'mass' has no base unit".to_string())
        );
    }

    #[test]
    fn test_unknown_derivation_term() {
        let mut b = base_builder();
        b.derive("speed", &[("length", 1), ("duration", -1)]);
        assert!(matches!(b.build(), Err(Error::CatalogIntegrity(_))));
    }

    #[test]
    fn test_base_unit_must_be_identity() {
        let mut b = CatalogBuilder::new();
        b.definition(DefinitionSpec::new("length", "Length"))
            .unit(UnitSpec::new("foot", "length").multiplier(0.3048).base());
        assert!(matches!(b.build(), Err(Error::CatalogIntegrity(_))));
    }

    #[test]
    fn test_circular_derivation() {
        let mut b = base_builder();
        b.derive("speed", &[("time", 1)]).derive("time", &[("speed", 1)]);
        assert!(matches!(b.build(), Err(Error::CatalogIntegrity(_))));
    }

    #[test]
    fn test_derived_of_derived_expands_transitively() {
        let mut b = base_builder();
        b.definition(DefinitionSpec::new("acceleration", "Acceleration"))
            .unit(UnitSpec::new("meterPerSecondSquared", "acceleration").base())
            .derive("speed", &[("length", 1), ("time", -1)])
            .derive("acceleration", &[("speed", 1), ("time", -1)]);
        let catalog = b.build().unwrap();

        let acceleration = catalog.definition_id("acceleration").unwrap();
        let length = catalog.definition_id("length").unwrap();
        let time = catalog.definition_id("time").unwrap();
        assert_eq!(
            catalog.fundamental_terms(acceleration).terms,
            vec![(length, 1), (time, -2)]
        );
    }

    #[test]
    fn test_duplicate_keys() {
        let mut b = base_builder();
        b.unit(UnitSpec::new("meter", "length"));
        assert!(matches!(b.build(), Err(Error::CatalogIntegrity(_))));
    }
}
