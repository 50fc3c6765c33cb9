//! Dimension algebra over a [`Catalog`](crate::Catalog)

mod derived;
mod dimension;
mod prefix;
mod simplify;

pub use derived::{derived_candidates, MAX_DERIVED_DEPTH};
pub use dimension::{render_dimensions, Dimension, OFFSET_EPSILON};
pub use prefix::{apply_prefix, compatible_prefixes, find_prefix, rating, remove_prefix};
pub use simplify::{
    score, simple_simplify, simplify, to_base_systems, BASE_SCORE, DERIVED_PENALTY,
    DIMENSION_PENALTY, NEGATIVE_PENALTY, POWER_PENALTY,
};
