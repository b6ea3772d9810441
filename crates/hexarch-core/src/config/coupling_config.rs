//! Coupling analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTLIER_MULTIPLIER;

/// Configuration for the coupling analyzer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CouplingConfig {
    /// Ce must exceed `multiplier × median Ce` to be an outlier. Default: 2.0.
    pub outlier_multiplier: Option<f64>,
}

impl CouplingConfig {
    /// Returns the effective outlier multiplier, defaulting to 2.0.
    pub fn effective_outlier_multiplier(&self) -> f64 {
        self.outlier_multiplier.unwrap_or(DEFAULT_OUTLIER_MULTIPLIER)
    }
}
