//! Money value object for currency amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A monetary amount in the dashboard's currency (AED).
///
/// The pricing engine computes in `f64`. Figures become `Money` only when
/// they leave the engine for display, where two decimal places are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Convert a computed figure to Money, rounded half away from zero to
    /// two decimal places.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotRepresentable` for NaN, infinities, and
    /// magnitudes outside the Decimal range.
    pub fn try_from_f64(figure: &str, value: f64) -> Result<Self, DomainError> {
        let amount = Decimal::try_from(value).map_err(|_| DomainError::NotRepresentable {
            figure: figure.to_string(),
            value: value.to_string(),
        })?;
        Ok(Self(amount).round())
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Format with a leading currency code, e.g. `AED 1689.00`.
    #[must_use]
    pub fn display_in(&self, currency: &str) -> String {
        format!("{currency} {self}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}
