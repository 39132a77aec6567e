//! Rental Pricing Calculator
//!
//! Derives the monthly price ladder for a device in three steps:
//!
//! 1. **Cash floor**: the device cost grossed up by the investor's profit
//!    (counted twice over the 24-month financing horizon), repaid monthly,
//!    plus the logistics buffer.
//! 2. **Anchor**: the higher of monthly depreciation or monthly repayment,
//!    plus the buffer, grossed up so that risk, gateway and margin can be
//!    deducted from the price and the cost is still covered.
//! 3. **Ladder**: fixed multipliers off the anchor. The 24-month price is
//!    never below the hard floor.
//!
//! All arithmetic is `f64`.

use crate::domain::pricing::errors::PricingError;
use crate::domain::pricing::rounding::round_up_to_nearest_9;
use crate::domain::pricing::value_objects::{
    BusinessSettings, PricingInput, PricingResult, RentalTerm,
};

/// Months over which the device purchase is financed.
const FINANCING_MONTHS: f64 = 24.0;

/// Reference horizon for the depreciation percentage.
const DEPRECIATION_MONTHS: f64 = 12.0;

/// Calculate rental pricing for a device.
///
/// This is the raw entry point: inputs are not validated. A non-positive
/// `rrp`, a depreciation outside `0..=100`, or settings whose deductions
/// reach 1 produce negative, infinite or NaN figures instead of an error.
/// Use [`RentalPricingCalculator::validated`] with a [`PricingInput`] for
/// the checked path.
#[must_use]
pub fn calculate_rental_pricing(
    rrp: f64,
    depreciation_percent: f64,
    settings: &BusinessSettings,
) -> PricingResult {
    let BusinessSettings {
        investor_rate,
        logistics_buffer,
        ..
    } = *settings;

    let residual_value_fraction = (100.0 - depreciation_percent) / 100.0;

    // Step 1: cash floor
    let total_loan_cost = rrp * (1.0 + investor_rate * 2.0);
    let min_monthly_loan_repayment = total_loan_cost / FINANCING_MONTHS;
    let hard_floor = min_monthly_loan_repayment + logistics_buffer;

    // Step 2: 12-month anchor
    let monthly_depreciation = (rrp - rrp * residual_value_fraction) / DEPRECIATION_MONTHS;
    let base_cost = monthly_depreciation.max(min_monthly_loan_repayment) + logistics_buffer;
    let anchor_price_raw = base_cost / (1.0 - settings.deduction_fraction());
    let anchor_price = round_up_to_nearest_9(anchor_price_raw);

    // Step 3: term ladder
    let price_3_month =
        round_up_to_nearest_9(anchor_price * RentalTerm::ThreeMonths.multiplier());
    let price_6_month = round_up_to_nearest_9(anchor_price * RentalTerm::SixMonths.multiplier());
    let price_12_month = anchor_price;
    let price_24_month_raw = anchor_price * RentalTerm::TwentyFourMonths.multiplier();
    let price_24_month = if price_24_month_raw < hard_floor {
        round_up_to_nearest_9(hard_floor)
    } else {
        round_up_to_nearest_9(price_24_month_raw)
    };

    PricingResult {
        hard_floor,
        anchor_price,
        price_3_month,
        price_6_month,
        price_12_month,
        price_24_month,
        monthly_depreciation,
        total_loan_cost,
        min_monthly_loan_repayment,
        base_cost,
    }
}

/// Stateless pricing service bound to one set of business settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentalPricingCalculator {
    settings: BusinessSettings,
}

impl RentalPricingCalculator {
    /// Create a calculator without checking the settings.
    #[must_use]
    pub const fn new(settings: BusinessSettings) -> Self {
        Self { settings }
    }

    /// Create a calculator after checking the settings invariants.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidSettings` if the settings would make the
    /// anchor derivation divide by a non-positive number or a rate is out of
    /// range.
    pub fn validated(settings: BusinessSettings) -> Result<Self, PricingError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// The settings this calculator prices with.
    #[must_use]
    pub const fn settings(&self) -> &BusinessSettings {
        &self.settings
    }

    /// Price a validated device input.
    #[must_use]
    pub fn price(&self, input: &PricingInput) -> PricingResult {
        calculate_rental_pricing(input.rrp(), input.depreciation_percent(), &self.settings)
    }
}

impl Default for RentalPricingCalculator {
    fn default() -> Self {
        Self::new(BusinessSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn no_deductions() -> BusinessSettings {
        BusinessSettings {
            risk_provision: 0.0,
            gateway_fee: 0.0,
            target_margin: 0.0,
            ..Default::default()
        }
    }

    #[test]
    fn intermediates_for_reference_device() {
        let r = calculate_rental_pricing(4000.0, 20.0, &BusinessSettings::default());

        assert!(approx(r.monthly_depreciation, 800.0 / 12.0));
        assert!(approx(r.total_loan_cost, 5200.0));
        assert!(approx(r.min_monthly_loan_repayment, 5200.0 / 24.0));
        assert!(approx(r.hard_floor, 5200.0 / 24.0 + 500.0));
        assert!(approx(r.base_cost, 5200.0 / 24.0 + 500.0));
    }

    #[test]
    fn ladder_for_reference_device_with_defaults() {
        // Deductions 0.375: 716.67 / 0.625 = 1146.67
        let r = calculate_rental_pricing(4000.0, 20.0, &BusinessSettings::default());

        assert_eq!(r.anchor_price, 1149.0);
        assert_eq!(r.price_3_month, 1729.0);
        assert_eq!(r.price_6_month, 1499.0);
        assert_eq!(r.price_12_month, 1149.0);
        assert_eq!(r.price_24_month, 979.0);
        assert!(!r.is_floor_clamped());
    }

    #[test]
    fn ladder_for_reference_device_with_half_margin() {
        // Deductions 0.575: 716.67 / 0.425 = 1686.27
        let settings = BusinessSettings {
            target_margin: 0.50,
            ..Default::default()
        };
        let r = calculate_rental_pricing(4000.0, 20.0, &settings);

        assert_eq!(r.anchor_price, 1689.0);
        assert_eq!(r.price_3_month, 2539.0);
        assert_eq!(r.price_6_month, 2199.0);
        assert_eq!(r.price_12_month, 1689.0);
        assert_eq!(r.price_24_month, 1439.0);
    }

    #[test]
    fn depreciation_dominates_for_fast_depreciating_device() {
        // 60% of 4000 over 12 months = 200/month, below the 216.67 repayment.
        // 90% of 4000 over 12 months = 300/month, above it.
        let slow = calculate_rental_pricing(4000.0, 60.0, &BusinessSettings::default());
        let fast = calculate_rental_pricing(4000.0, 90.0, &BusinessSettings::default());

        assert!(approx(slow.base_cost, slow.hard_floor));
        assert!(approx(fast.monthly_depreciation, 300.0));
        assert!(approx(fast.base_cost, 800.0));
        assert!(fast.anchor_price > slow.anchor_price);
    }

    #[test]
    fn twenty_four_month_price_clamps_to_floor() {
        // Without deductions the anchor barely clears the floor, so 0.85x of
        // it falls below: 719 * 0.85 = 611.15 < 716.67.
        let r = calculate_rental_pricing(4000.0, 20.0, &no_deductions());

        assert_eq!(r.anchor_price, 719.0);
        assert!(r.is_floor_clamped());
        assert_eq!(r.price_24_month, round_up_to_nearest_9(r.hard_floor));
        assert_eq!(r.price_24_month, 719.0);
    }

    #[test]
    fn zero_depreciation_uses_repayment() {
        let r = calculate_rental_pricing(4000.0, 0.0, &BusinessSettings::default());
        assert_eq!(r.monthly_depreciation, 0.0);
        assert!(approx(r.base_cost, r.hard_floor));
    }

    #[test]
    fn raw_entry_point_does_not_guard_deductions() {
        let settings = BusinessSettings {
            risk_provision: 0.5,
            gateway_fee: 0.25,
            target_margin: 0.25,
            ..Default::default()
        };
        let r = calculate_rental_pricing(4000.0, 20.0, &settings);
        assert!(!r.anchor_price.is_finite());
    }

    #[test]
    fn raw_entry_point_does_not_guard_rrp() {
        let r = calculate_rental_pricing(-4000.0, 20.0, &BusinessSettings::default());
        assert!(r.total_loan_cost < 0.0);
    }

    #[test]
    fn validated_calculator_rejects_bad_settings() {
        let settings = BusinessSettings {
            target_margin: 0.95,
            ..Default::default()
        };
        assert!(matches!(
            RentalPricingCalculator::validated(settings),
            Err(PricingError::InvalidSettings { .. })
        ));
    }

    #[test]
    fn calculator_price_matches_raw_entry_point() {
        let calculator = RentalPricingCalculator::validated(BusinessSettings::default()).unwrap();
        let input = PricingInput::new(2500.0, 35.0).unwrap();

        assert_eq!(
            calculator.price(&input),
            calculate_rental_pricing(2500.0, 35.0, &BusinessSettings::default())
        );
        assert_eq!(calculator.settings(), &BusinessSettings::default());
    }

    #[test]
    fn default_calculator_uses_default_settings() {
        assert_eq!(
            RentalPricingCalculator::default().settings(),
            &BusinessSettings::default()
        );
    }

    fn valid_settings() -> impl Strategy<Value = BusinessSettings> {
        (
            0.0f64..=1.0,
            0.0f64..0.3,
            0.0f64..0.3,
            0.0f64..0.3,
            0.0f64..2000.0,
        )
            .prop_map(
                |(investor_rate, risk_provision, gateway_fee, target_margin, logistics_buffer)| {
                    BusinessSettings {
                        investor_rate,
                        risk_provision,
                        gateway_fee,
                        target_margin,
                        logistics_buffer,
                    }
                },
            )
    }

    proptest! {
        #[test]
        fn ladder_is_ordered(
            rrp in 1.0f64..100_000.0,
            depreciation in 0.0f64..=100.0,
            settings in valid_settings(),
        ) {
            let r = calculate_rental_pricing(rrp, depreciation, &settings);
            prop_assert!(r.price_3_month >= r.price_6_month);
            prop_assert!(r.price_6_month >= r.price_12_month);
            prop_assert!(r.price_12_month >= r.price_24_month);
        }

        #[test]
        fn twenty_four_month_price_never_below_floor(
            rrp in 1.0f64..100_000.0,
            depreciation in 0.0f64..=100.0,
            settings in valid_settings(),
        ) {
            let r = calculate_rental_pricing(rrp, depreciation, &settings);
            prop_assert!(r.price_24_month >= r.hard_floor);
            if r.is_floor_clamped() {
                prop_assert_eq!(r.price_24_month, round_up_to_nearest_9(r.hard_floor));
            }
        }

        #[test]
        fn all_prices_end_in_nine(
            rrp in 1.0f64..100_000.0,
            depreciation in 0.0f64..=100.0,
            settings in valid_settings(),
        ) {
            let r = calculate_rental_pricing(rrp, depreciation, &settings);
            for (_, price) in r.ladder() {
                prop_assert_eq!(price % 10.0, 9.0);
            }
        }

        #[test]
        fn higher_depreciation_never_lowers_price(
            rrp in 1.0f64..100_000.0,
            a in 0.0f64..=100.0,
            b in 0.0f64..=100.0,
            settings in valid_settings(),
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let low = calculate_rental_pricing(rrp, lo, &settings);
            let high = calculate_rental_pricing(rrp, hi, &settings);
            prop_assert!(high.monthly_depreciation >= low.monthly_depreciation);
            prop_assert!(high.anchor_price >= low.anchor_price);
        }
    }
}
