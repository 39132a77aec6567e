//! Computed pricing snapshot.

use serde::{Deserialize, Serialize};

use super::RentalTerm;

/// Output of one pricing calculation.
///
/// Intermediates are kept alongside the final prices so the dashboard can
/// show how the ladder was reached. Prices (`anchor_price`, `price_*`) end
/// in 9; the other figures are unrounded currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Minimum monthly charge that recovers financing plus logistics.
    pub hard_floor: f64,
    /// 12-month price all other terms derive from.
    pub anchor_price: f64,
    /// Monthly price for a 3-month term.
    pub price_3_month: f64,
    /// Monthly price for a 6-month term.
    pub price_6_month: f64,
    /// Monthly price for a 12-month term.
    pub price_12_month: f64,
    /// Monthly price for a 24-month term.
    pub price_24_month: f64,
    /// Straight-line monthly value loss.
    pub monthly_depreciation: f64,
    /// Device cost grossed up by the investor's profit, counted twice.
    pub total_loan_cost: f64,
    /// `total_loan_cost` spread over 24 months.
    pub min_monthly_loan_repayment: f64,
    /// Higher of depreciation or repayment, plus the logistics buffer.
    pub base_cost: f64,
}

impl PricingResult {
    /// Monthly price for a term.
    #[must_use]
    pub const fn price_for(&self, term: RentalTerm) -> f64 {
        match term {
            RentalTerm::ThreeMonths => self.price_3_month,
            RentalTerm::SixMonths => self.price_6_month,
            RentalTerm::TwelveMonths => self.price_12_month,
            RentalTerm::TwentyFourMonths => self.price_24_month,
        }
    }

    /// `(term, price)` pairs in display order.
    pub fn ladder(&self) -> impl Iterator<Item = (RentalTerm, f64)> + '_ {
        RentalTerm::ALL
            .into_iter()
            .map(move |term| (term, self.price_for(term)))
    }

    /// Whether the 24-month price was lifted to the hard floor instead of
    /// following its multiplier.
    #[must_use]
    pub fn is_floor_clamped(&self) -> bool {
        self.anchor_price * RentalTerm::TwentyFourMonths.multiplier() < self.hard_floor
    }
}
