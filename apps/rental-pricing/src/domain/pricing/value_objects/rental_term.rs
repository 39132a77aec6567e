//! Rental terms offered on the price ladder.

use serde::{Deserialize, Serialize};

/// A rental commitment length.
///
/// Shorter commitments cost more per month and longer ones less, all
/// derived from the 12-month anchor price by a fixed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalTerm {
    /// 3-month commitment.
    ThreeMonths,
    /// 6-month commitment.
    SixMonths,
    /// 12-month commitment (the anchor).
    TwelveMonths,
    /// 24-month commitment, clamped at the hard floor.
    TwentyFourMonths,
}

impl RentalTerm {
    /// All terms in display order.
    pub const ALL: [Self; 4] = [
        Self::ThreeMonths,
        Self::SixMonths,
        Self::TwelveMonths,
        Self::TwentyFourMonths,
    ];

    /// Commitment length in months.
    #[must_use]
    pub const fn months(&self) -> u32 {
        match self {
            Self::ThreeMonths => 3,
            Self::SixMonths => 6,
            Self::TwelveMonths => 12,
            Self::TwentyFourMonths => 24,
        }
    }

    /// Multiplier applied to the anchor price.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::ThreeMonths => 1.5,
            Self::SixMonths => 1.3,
            Self::TwelveMonths => 1.0,
            Self::TwentyFourMonths => 0.85,
        }
    }

    /// Short label shown under the price.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ThreeMonths => "×1.50",
            Self::SixMonths => "×1.30",
            Self::TwelveMonths => "Anchor",
            Self::TwentyFourMonths => "×0.85",
        }
    }
}

impl std::fmt::Display for RentalTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Months", self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terms_are_in_ascending_length() {
        let months: Vec<u32> = RentalTerm::ALL.iter().map(|t| t.months()).collect();
        assert_eq!(months, vec![3, 6, 12, 24]);
    }

    #[test]
    fn multipliers_decrease_with_length() {
        let multipliers: Vec<f64> = RentalTerm::ALL.iter().map(|t| t.multiplier()).collect();
        assert!(multipliers.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn anchor_label() {
        assert_eq!(RentalTerm::TwelveMonths.label(), "Anchor");
        assert_eq!(RentalTerm::TwentyFourMonths.label(), "×0.85");
    }

    #[test]
    fn display_and_serde() {
        assert_eq!(RentalTerm::SixMonths.to_string(), "6 Months");
        let json = serde_json::to_string(&RentalTerm::TwentyFourMonths).unwrap();
        assert_eq!(json, "\"twenty_four_months\"");
    }
}
