//! Simplification pipeline
//!
//! 1. merge dimensions sharing a definition ([`simple_simplify`])
//! 2. expand everything to fundamental base units ([`to_base_systems`])
//! 3. search derived replacements ([`derived_candidates`])
//! 4. keep the best-scoring candidate, then pick a prefix

use log::{debug, log_enabled, Level};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::number::Numeric;
use crate::settings::Settings;

use super::derived::derived_candidates;
use super::prefix::prefix_best;
use super::{render_dimensions, Dimension};

pub const BASE_SCORE: i32 = 1000;
pub const DIMENSION_PENALTY: i32 = 10;
pub const POWER_PENALTY: i32 = 5;
pub const DERIVED_PENALTY: i32 = 5;
pub const NEGATIVE_PENALTY: i32 = 3;

/// Merge dimensions of the same definition into the first occurrence.
/// Zero-power results are dropped, their conversion kept in the value.
pub fn simple_simplify<T: Numeric>(
    catalog: &Catalog,
    dimensions: &[Dimension],
    value: &T,
) -> Result<(Vec<Dimension>, T)> {
    let mut merged = vec![false; dimensions.len()];
    let mut value = value.clone();
    let mut result = Vec::with_capacity(dimensions.len());

    for i in 0..dimensions.len() {
        if merged[i] {
            continue;
        }
        let mut current = dimensions[i];
        let definition = current.definition(catalog);
        for j in (i + 1)..dimensions.len() {
            if !merged[j] && dimensions[j].definition(catalog) == definition {
                (current, value) = current.combine(catalog, &value, &dimensions[j])?;
                merged[j] = true;
            }
        }
        if current.power != 0 {
            result.push(current);
        }
    }
    Ok((result, value))
}

/// Replace every dimension with fundamental base dimensions and merge.
/// Dimensionless definitions vanish.
pub fn to_base_systems<T: Numeric>(
    catalog: &Catalog,
    dimensions: &[Dimension],
    value: &T,
) -> Result<(Vec<Dimension>, T)> {
    let mut value = value.clone();
    let mut expanded = Vec::new();

    for dimension in dimensions {
        let (base, converted) = dimension.to_base(catalog, &value)?;
        value = converted;

        let definition = dimension.definition(catalog);
        let expansion = catalog.fundamental_terms(definition);
        if expansion.terms == [(definition, 1)] {
            expanded.push(base);
            continue;
        }
        value = value.mul_scalar(expansion.factor.powi(dimension.power));
        for &(term, power) in &expansion.terms {
            expanded.push(Dimension::with_power(
                catalog.base_unit(term),
                power * dimension.power,
            ));
        }
    }

    simple_simplify(catalog, &expanded, &value)
}

/// Heuristic simplicity, higher is simpler. Each dimension costs
/// `DIMENSION_PENALTY` plus `POWER_PENALTY` per unit of `|power|`; derived
/// and negative-power dimensions cost extra.
pub fn score(catalog: &Catalog, dimensions: &[Dimension]) -> i32 {
    let mut score = BASE_SCORE - DIMENSION_PENALTY * dimensions.len() as i32;
    for dimension in dimensions {
        score -= POWER_PENALTY * dimension.power.abs();
        if catalog.definition(dimension.definition(catalog)).is_derived() {
            score -= DERIVED_PENALTY;
        }
        if dimension.power < 0 {
            score -= NEGATIVE_PENALTY;
        }
    }
    score
}

/// Full simplification: the best of the merged list, its fundamental
/// expansion and every derived rewrite, with a prefix chosen at the end.
/// Ties keep the earlier candidate.
pub fn simplify<T: Numeric>(
    catalog: &Catalog,
    settings: &Settings,
    dimensions: &[Dimension],
    value: &T,
) -> Result<(Vec<Dimension>, T)> {
    let (mut best, mut best_value) = simple_simplify(catalog, dimensions, value)?;
    let mut best_score = score(catalog, &best);

    if settings.allow_derived_dimensions {
        let (base, base_value) = to_base_systems(catalog, &best, &best_value)?;
        let mut candidates = derived_candidates(catalog, settings, &base, &base_value)?;
        candidates.insert(0, (base, base_value));

        for (candidate, candidate_value) in candidates {
            let (candidate, candidate_value) =
                simple_simplify(catalog, &candidate, &candidate_value)?;
            let candidate_score = score(catalog, &candidate);
            if candidate_score > best_score {
                best = candidate;
                best_value = candidate_value;
                best_score = candidate_score;
            }
        }
    }

    if log_enabled!(Level::Debug) {
        debug!(
            "simplified [{}] -> [{}] (score {best_score})",
            render_dimensions(catalog, dimensions),
            render_dimensions(catalog, &best)
        );
    }

    prefix_best(catalog, settings, best, best_value)
}
