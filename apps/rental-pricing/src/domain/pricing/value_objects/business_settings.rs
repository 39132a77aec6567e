//! Business settings consumed by the pricing calculator.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::errors::PricingError;

/// Default investor profit rate (15%).
pub const DEFAULT_INVESTOR_RATE: f64 = 0.15;
/// Default risk provision (5%).
pub const DEFAULT_RISK_PROVISION: f64 = 0.05;
/// Default payment gateway fee (2.5%).
pub const DEFAULT_GATEWAY_FEE: f64 = 0.025;
/// Default target margin (30%).
pub const DEFAULT_TARGET_MARGIN: f64 = 0.30;
/// Default logistics buffer in AED per month.
pub const DEFAULT_LOGISTICS_BUFFER: f64 = 500.0;

/// The five business parameters the pricing calculator reads.
///
/// Rates are fractions (0.15 = 15%). `logistics_buffer` is a flat monthly
/// currency amount. Instances are plain immutable values: load them once per
/// calculation and pass them by value or reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessSettings {
    /// Profit rate required by the capital provider, applied twice over the
    /// 24-month financing horizon.
    pub investor_rate: f64,
    /// Margin reserved against default and damage risk.
    pub risk_provision: f64,
    /// Payment-processing cost fraction.
    pub gateway_fee: f64,
    /// Desired operating margin.
    pub target_margin: f64,
    /// Flat per-month delivery and handling add-on.
    pub logistics_buffer: f64,
}

impl Default for BusinessSettings {
    fn default() -> Self {
        Self {
            investor_rate: DEFAULT_INVESTOR_RATE,
            risk_provision: DEFAULT_RISK_PROVISION,
            gateway_fee: DEFAULT_GATEWAY_FEE,
            target_margin: DEFAULT_TARGET_MARGIN,
            logistics_buffer: DEFAULT_LOGISTICS_BUFFER,
        }
    }
}

impl BusinessSettings {
    /// Sum of the fractions deducted from the eventual price.
    #[must_use]
    pub fn deduction_fraction(&self) -> f64 {
        self.risk_provision + self.gateway_fee + self.target_margin
    }

    /// Check the invariants the anchor derivation relies on.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidSettings` if a rate lies outside
    /// `[0, 1]`, the logistics buffer is negative or non-finite, or the
    /// deduction fractions sum to 1 or more.
    pub fn validate(&self) -> Result<(), PricingError> {
        let rates = [
            ("investor_rate", self.investor_rate),
            ("risk_provision", self.risk_provision),
            ("gateway_fee", self.gateway_fee),
            ("target_margin", self.target_margin),
        ];
        for (field, rate) in rates {
            if !(0.0..=1.0).contains(&rate) {
                return Err(PricingError::settings(
                    field,
                    format!("must be between 0 and 1, got {rate}"),
                ));
            }
        }

        if !self.logistics_buffer.is_finite() || self.logistics_buffer < 0.0 {
            return Err(PricingError::settings(
                "logistics_buffer",
                format!("must be a non-negative amount, got {}", self.logistics_buffer),
            ));
        }

        let deductions = self.deduction_fraction();
        if deductions >= 1.0 {
            return Err(PricingError::settings(
                "deduction_fraction",
                format!(
                    "risk_provision + gateway_fee + target_margin must be below 1, got {deductions}"
                ),
            ));
        }

        Ok(())
    }
}
