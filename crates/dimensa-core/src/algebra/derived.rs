//! Derived-dimension search
//!
//! Starting from a list of fundamental base dimensions, repeatedly replace a
//! subset that matches a derived definition's expansion with one dimension
//! of that definition. Each successful replacement is a candidate for the
//! simplifier to score. The walk is a depth-first search over an explicit
//! stack, deduplicated on the resulting dimension multiset.

use std::collections::HashSet;

use log::trace;

use crate::catalog::{Catalog, DefinitionId};
use crate::error::Result;
use crate::number::Numeric;
use crate::settings::Settings;

use super::simplify::simple_simplify;
use super::{render_dimensions, Dimension};

/// Maximum number of nested replacements explored from one starting list
pub const MAX_DERIVED_DEPTH: usize = 8;

struct Frame<T> {
    dimensions: Vec<Dimension>,
    value: T,
    next: usize,
}

/// All distinct lists reachable by replacing fundamental dimensions with
/// derived ones, in discovery order. The starting list is not included.
///
/// `dimensions` should come from
/// [`to_base_systems`](super::to_base_systems): only base units
/// without prefix can be absorbed into a derived dimension.
pub fn derived_candidates<T: Numeric>(
    catalog: &Catalog,
    settings: &Settings,
    dimensions: &[Dimension],
    value: &T,
) -> Result<Vec<(Vec<Dimension>, T)>> {
    let derived: Vec<DefinitionId> = catalog
        .definitions()
        .filter(|(_, d)| d.is_derived() && (settings.allow_vector_dimensions || !d.vector))
        .map(|(id, _)| id)
        .collect();

    let mut seen = HashSet::new();
    seen.insert(signature(dimensions));
    let mut candidates = Vec::new();
    let mut stack = vec![Frame {
        dimensions: dimensions.to_vec(),
        value: value.clone(),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(&definition) = derived.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let expansion = catalog.fundamental_terms(definition);
        let Some(mut reduced) = absorb(catalog, &frame.dimensions, &expansion.terms) else {
            continue;
        };
        reduced.push(Dimension::new(catalog.base_unit(definition)));
        let value = frame.value.div_scalar(expansion.factor);
        let (reduced, value) = simple_simplify(catalog, &reduced, &value)?;

        if !seen.insert(signature(&reduced)) {
            continue;
        }
        trace!(
            "derived {}: [{}]",
            catalog.definition(definition).key,
            render_dimensions(catalog, &reduced)
        );
        candidates.push((reduced.clone(), value.clone()));

        if stack.len() <= MAX_DERIVED_DEPTH {
            stack.push(Frame {
                dimensions: reduced,
                value,
                next: 0,
            });
        }
    }

    Ok(candidates)
}

/// Remove `needs` from `dimensions`, or `None` if they are not all present.
///
/// Scanning stops at the first derived dimension, so fundamentals listed
/// after one are never absorbed.
fn absorb(
    catalog: &Catalog,
    dimensions: &[Dimension],
    needs: &[(DefinitionId, i32)],
) -> Option<Vec<Dimension>> {
    if needs.is_empty() {
        return None;
    }

    let mut pending = needs.to_vec();
    let mut powers: Vec<i32> = dimensions.iter().map(|d| d.power).collect();
    for (i, dimension) in dimensions.iter().enumerate() {
        let definition = dimension.definition(catalog);
        if catalog.definition(definition).is_derived() {
            break;
        }
        if !dimension.is_base(catalog) {
            continue;
        }
        if let Some(k) = pending.iter().position(|&(d, p)| {
            d == definition
                && p.signum() == dimension.power.signum()
                && dimension.power.abs() >= p.abs()
        }) {
            powers[i] -= pending.swap_remove(k).1;
        }
    }

    if !pending.is_empty() {
        return None;
    }
    Some(
        dimensions
            .iter()
            .zip(powers)
            .filter(|(_, p)| *p != 0)
            .map(|(d, p)| d.powered(p))
            .collect(),
    )
}

fn signature(dimensions: &[Dimension]) -> Vec<(usize, i32, Option<usize>)> {
    let mut key: Vec<_> = dimensions
        .iter()
        .map(|d| (d.unit.index(), d.power, d.prefix.map(|p| p.index())))
        .collect();
    key.sort_unstable();
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(catalog: &Catalog, spec: &[(&str, i32)]) -> Vec<Dimension> {
        spec.iter()
            .map(|(key, power)| Dimension::with_power(catalog.unit_id(key).unwrap(), *power))
            .collect()
    }

    fn keys(catalog: &Catalog, dimensions: &[Dimension]) -> Vec<String> {
        dimensions
            .iter()
            .map(|d| catalog.unit(d.unit).key.clone())
            .collect()
    }

    #[test]
    fn test_speed_found() {
        let c = Catalog::standard().unwrap();
        let s = Settings::default();
        let start = dims(&c, &[("meter", 1), ("second", -1)]);
        let candidates = derived_candidates(&c, &s, &start, &3.0).unwrap();
        let speed: Vec<_> = candidates
            .iter()
            .filter(|(d, _)| keys(&c, d) == ["meterPerSecond"])
            .collect();
        assert_eq!(speed.len(), 1);
        assert_eq!(speed[0].1, 3.0);
    }

    #[test]
    fn test_vector_definitions_gated() {
        let c = Catalog::standard().unwrap();
        let start = dims(&c, &[("meter", 1), ("second", -1)]);
        let is_velocity = |(d, _): &(Vec<Dimension>, f64)| keys(&c, d) == ["velocityMeterPerSecond"];

        let scalar = derived_candidates(&c, &Settings::default(), &start, &1.0).unwrap();
        assert!(!scalar.iter().any(is_velocity));

        let vectors = Settings {
            allow_vector_dimensions: true,
            ..Settings::default()
        };
        let with_vectors = derived_candidates(&c, &vectors, &start, &1.0).unwrap();
        assert!(with_vectors.iter().any(is_velocity));
    }

    #[test]
    fn test_force_factor() {
        let c = Catalog::standard().unwrap();
        let start = dims(&c, &[("gram", 1), ("meter", 1), ("second", -2)]);
        let candidates = derived_candidates(&c, &Settings::default(), &start, &5000.0).unwrap();
        let (_, value) = candidates
            .iter()
            .find(|(d, _)| keys(&c, d) == ["newton"])
            .unwrap();
        assert!((value - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_scan_stops_at_derived_dimension() {
        let c = Catalog::standard().unwrap();
        let s = Settings::default();
        // meter sits behind a derived dimension and cannot be absorbed
        let blocked = dims(&c, &[("second", -1), ("newton", 1), ("meter", 1)]);
        let candidates = derived_candidates(&c, &s, &blocked, &1.0).unwrap();
        assert!(candidates
            .iter()
            .all(|(d, _)| !keys(&c, d).contains(&"meterPerSecond".to_string())));

        let open = dims(&c, &[("second", -1), ("meter", 1), ("newton", 1)]);
        let candidates = derived_candidates(&c, &s, &open, &1.0).unwrap();
        assert!(candidates
            .iter()
            .any(|(d, _)| keys(&c, d).contains(&"meterPerSecond".to_string())));
    }

    #[test]
    fn test_no_match_without_all_terms() {
        let c = Catalog::standard().unwrap();
        let start = dims(&c, &[("ampere", 1)]);
        assert!(derived_candidates(&c, &Settings::default(), &start, &1.0)
            .unwrap()
            .is_empty());
    }
}
