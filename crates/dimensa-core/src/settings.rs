//! Algebra configuration
//!
//! Field names serialize in camelCase so a settings file reads
//! `{"allowDerivedDimensions": false, "upperPrefixValue": 10000}`.
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Search for derived dimensions (speed, force, ...) while simplifying
    pub allow_derived_dimensions: bool,
    /// Include vector definitions in lookups and derived matching
    pub allow_vector_dimensions: bool,
    pub use_rare_prefixes: bool,
    pub use_unofficial_prefixes: bool,
    /// Use kibi/mebi/... rather than kilo/mega/... for binary units
    pub prefer_binary_prefixes: bool,
    /// Upper end of the readable window for prefixed values
    pub upper_prefix_value: f64,
    /// Lower end of the readable window for prefixed values
    pub lower_prefix_value: f64,
    /// Rating penalty for any prefix
    pub having_prefix_score_offset: f64,
    /// Allow a prefixed dimension to move to the front after simplification
    pub allow_reordering_dimensions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_derived_dimensions: true,
            allow_vector_dimensions: false,
            use_rare_prefixes: false,
            use_unofficial_prefixes: false,
            prefer_binary_prefixes: true,
            upper_prefix_value: 1000.0,
            lower_prefix_value: 1.0,
            having_prefix_score_offset: 1.0,
            allow_reordering_dimensions: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| Error::Configuration(format!("invalid settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.upper_prefix_value <= self.lower_prefix_value {
            return Err(Error::Configuration(format!(
                "upperPrefixValue ({}) must be greater than lowerPrefixValue ({})",
                self.upper_prefix_value, self.lower_prefix_value
            )));
        }
        Ok(())
    }
}
