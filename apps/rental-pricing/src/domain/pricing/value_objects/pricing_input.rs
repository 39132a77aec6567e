//! Validated device inputs for the checked pricing path.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::errors::PricingError;

/// Depreciation assumed when the calculator form leaves it blank (20%).
pub const DEFAULT_DEPRECIATION_PERCENT: f64 = 20.0;

/// A device's retail price and expected 12-month depreciation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInput {
    rrp: f64,
    depreciation_percent: f64,
}

impl PricingInput {
    /// Create a validated input.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` if `rrp` is not a finite number
    /// greater than zero, or `depreciation_percent` is outside `[0, 100]`.
    pub fn new(rrp: f64, depreciation_percent: f64) -> Result<Self, PricingError> {
        if !rrp.is_finite() || rrp <= 0.0 {
            return Err(PricingError::input(
                "rrp",
                format!("must be a number greater than zero, got {rrp}"),
            ));
        }
        if !(0.0..=100.0).contains(&depreciation_percent) {
            return Err(PricingError::input(
                "depreciation_percent",
                format!("must be between 0 and 100, got {depreciation_percent}"),
            ));
        }
        Ok(Self {
            rrp,
            depreciation_percent,
        })
    }

    /// Parse the text fields of the calculator form.
    ///
    /// A blank, unparsable or zero depreciation falls back to
    /// `default_depreciation`, matching how the dashboard form behaves.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidInput` if the RRP does not parse as a
    /// positive number or the resulting depreciation is out of range.
    pub fn parse(
        rrp: &str,
        depreciation_percent: Option<&str>,
        default_depreciation: f64,
    ) -> Result<Self, PricingError> {
        let rrp_value = rrp.trim().parse::<f64>().map_err(|_| {
            PricingError::input("rrp", format!("please enter a valid RRP, got '{rrp}'"))
        })?;

        let depreciation = depreciation_percent
            .and_then(|text| text.trim().parse::<f64>().ok())
            .filter(|value| *value != 0.0 && !value.is_nan())
            .unwrap_or(default_depreciation);

        Self::new(rrp_value, depreciation)
    }

    /// Device retail price.
    #[must_use]
    pub const fn rrp(&self) -> f64 {
        self.rrp
    }

    /// Expected value loss over 12 months, 0-100.
    #[must_use]
    pub const fn depreciation_percent(&self) -> f64 {
        self.depreciation_percent
    }
}
