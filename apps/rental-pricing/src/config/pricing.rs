//! Pricing configuration for the quote use case.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::DEFAULT_DEPRECIATION_PERCENT;

/// Pricing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Depreciation used when the form leaves it blank.
    #[serde(default = "default_depreciation_percent")]
    pub default_depreciation_percent: f64,
    /// Currency code shown with every amount.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_depreciation_percent: default_depreciation_percent(),
            currency: default_currency(),
        }
    }
}

const fn default_depreciation_percent() -> f64 {
    DEFAULT_DEPRECIATION_PERCENT
}

fn default_currency() -> String {
    "AED".to_string()
}
