//! Pricing DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::pricing::{BusinessSettings, PricingResult, RentalTerm};
use crate::domain::settings::SettingKey;
use crate::domain::shared::{DomainError, Money};

/// Calculator form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequestDto {
    /// Device RRP as typed.
    pub rrp: String,
    /// Depreciation rate as typed; blank or missing uses the configured default.
    #[serde(default)]
    pub depreciation_percent: Option<String>,
}

impl QuoteRequestDto {
    /// Build a request from typed text.
    #[must_use]
    pub fn new(rrp: impl Into<String>, depreciation_percent: Option<&str>) -> Self {
        Self {
            rrp: rrp.into(),
            depreciation_percent: depreciation_percent.map(str::to_string),
        }
    }
}

/// One rung of the price ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermPriceDto {
    /// Rental term.
    pub term: RentalTerm,
    /// Commitment length in months.
    pub months: u32,
    /// Label shown under the price ("×1.50", "Anchor", ...).
    pub label: String,
    /// Monthly price.
    pub price: Decimal,
}

/// Pricing result prepared for display, amounts rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResultDto {
    /// Currency code of every amount.
    pub currency: String,
    /// Price ladder in display order.
    pub ladder: Vec<TermPriceDto>,
    /// 12-month anchor price.
    pub anchor_price: Decimal,
    /// Minimum monthly price.
    pub hard_floor: Decimal,
    /// Whether the 24-month price was lifted to the hard floor.
    pub floor_clamped: bool,
    /// Device cost plus investor profit.
    pub total_loan_cost: Decimal,
    /// Monthly financing repayment.
    pub min_monthly_loan_repayment: Decimal,
    /// Monthly depreciation.
    pub monthly_depreciation: Decimal,
    /// Monthly base cost before deductions.
    pub base_cost: Decimal,
}

impl PricingResultDto {
    /// Convert a computed result.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotRepresentable` if any figure is NaN or
    /// infinite, which only happens when unchecked inputs reach the raw
    /// calculation.
    pub fn from_result(result: &PricingResult, currency: &str) -> Result<Self, DomainError> {
        let amount = |figure: &str, value: f64| Money::try_from_f64(figure, value).map(Decimal::from);

        let ladder = result
            .ladder()
            .map(|(term, price)| {
                Ok(TermPriceDto {
                    term,
                    months: term.months(),
                    label: term.label().to_string(),
                    price: amount("price", price)?,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            currency: currency.to_string(),
            ladder,
            anchor_price: amount("anchor_price", result.anchor_price)?,
            hard_floor: amount("hard_floor", result.hard_floor)?,
            floor_clamped: result.is_floor_clamped(),
            total_loan_cost: amount("total_loan_cost", result.total_loan_cost)?,
            min_monthly_loan_repayment: amount(
                "min_monthly_loan_repayment",
                result.min_monthly_loan_repayment,
            )?,
            monthly_depreciation: amount("monthly_depreciation", result.monthly_depreciation)?,
            base_cost: amount("base_cost", result.base_cost)?,
        })
    }

    /// Price for a term, if present.
    #[must_use]
    pub fn price_for(&self, term: RentalTerm) -> Option<Decimal> {
        self.ladder.iter().find(|t| t.term == term).map(|t| t.price)
    }

    /// Price for a term as shown on the dashboard, e.g. `AED 1689.00`.
    #[must_use]
    pub fn formatted_price(&self, term: RentalTerm) -> Option<String> {
        self.price_for(term)
            .map(|price| Money::new(price).display_in(&self.currency))
    }
}

/// Settings as shown on the settings screen: rates in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSettingsDto {
    /// Investor profit rate, percent.
    pub investor_profit_rate: Decimal,
    /// Risk provision, percent.
    pub risk_provision: Decimal,
    /// Payment gateway fee, percent.
    pub payment_gateway_fee: Decimal,
    /// Target margin, percent.
    pub target_margin: Decimal,
    /// Logistics buffer, currency amount.
    pub logistics_buffer: Decimal,
    /// Keys that fell back to their defaults.
    pub defaulted: Vec<SettingKey>,
}

impl BusinessSettingsDto {
    /// Convert resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotRepresentable` for non-finite values.
    pub fn from_settings(
        settings: &BusinessSettings,
        defaulted: Vec<SettingKey>,
    ) -> Result<Self, DomainError> {
        let percent = |figure: &str, rate: f64| {
            Money::try_from_f64(figure, rate * 100.0).map(Decimal::from)
        };

        Ok(Self {
            investor_profit_rate: percent("investor_profit_rate", settings.investor_rate)?,
            risk_provision: percent("risk_provision", settings.risk_provision)?,
            payment_gateway_fee: percent("payment_gateway_fee", settings.gateway_fee)?,
            target_margin: percent("target_margin", settings.target_margin)?,
            logistics_buffer: Money::try_from_f64("logistics_buffer", settings.logistics_buffer)?
                .amount(),
            defaulted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::calculate_rental_pricing;
    use rust_decimal_macros::dec;

    #[test]
    fn converts_reference_result() {
        let result = calculate_rental_pricing(4000.0, 20.0, &BusinessSettings::default());
        let dto = PricingResultDto::from_result(&result, "AED").unwrap();

        assert_eq!(dto.currency, "AED");
        assert_eq!(dto.anchor_price, dec!(1149));
        assert_eq!(dto.hard_floor, dec!(716.67));
        assert_eq!(dto.min_monthly_loan_repayment, dec!(216.67));
        assert_eq!(dto.monthly_depreciation, dec!(66.67));
        assert_eq!(dto.total_loan_cost, dec!(5200));
        assert!(!dto.floor_clamped);
        assert_eq!(dto.price_for(RentalTerm::ThreeMonths), Some(dec!(1729)));
        assert_eq!(dto.price_for(RentalTerm::TwentyFourMonths), Some(dec!(979)));
    }

    #[test]
    fn formats_prices_with_currency() {
        let result = calculate_rental_pricing(4000.0, 20.0, &BusinessSettings::default());
        let dto = PricingResultDto::from_result(&result, "AED").unwrap();

        assert_eq!(
            dto.formatted_price(RentalTerm::TwelveMonths).as_deref(),
            Some("AED 1149.00")
        );
    }

    #[test]
    fn ladder_carries_labels() {
        let result = calculate_rental_pricing(4000.0, 20.0, &BusinessSettings::default());
        let dto = PricingResultDto::from_result(&result, "AED").unwrap();

        let labels: Vec<&str> = dto.ladder.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["×1.50", "×1.30", "Anchor", "×0.85"]);
        let months: Vec<u32> = dto.ladder.iter().map(|t| t.months).collect();
        assert_eq!(months, vec![3, 6, 12, 24]);
    }

    #[test]
    fn non_finite_result_is_rejected() {
        let settings = BusinessSettings {
            risk_provision: 0.5,
            gateway_fee: 0.25,
            target_margin: 0.25,
            ..Default::default()
        };
        let result = calculate_rental_pricing(4000.0, 20.0, &settings);
        assert!(PricingResultDto::from_result(&result, "AED").is_err());
    }

    #[test]
    fn amounts_serialize_as_strings() {
        let result = calculate_rental_pricing(4000.0, 20.0, &BusinessSettings::default());
        let dto = PricingResultDto::from_result(&result, "AED").unwrap();
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["hard_floor"], "716.67");
        assert_eq!(json["ladder"][2]["term"], "twelve_months");
    }

    #[test]
    fn settings_dto_shows_percentages() {
        let dto = BusinessSettingsDto::from_settings(
            &BusinessSettings::default(),
            vec![SettingKey::LogisticsBuffer],
        )
        .unwrap();

        assert_eq!(dto.investor_profit_rate, dec!(15));
        assert_eq!(dto.payment_gateway_fee, dec!(2.5));
        assert_eq!(dto.target_margin, dec!(30));
        assert_eq!(dto.logistics_buffer, dec!(500));
        assert_eq!(dto.defaulted, vec![SettingKey::LogisticsBuffer]);
    }

    #[test]
    fn quote_request_decodes_without_depreciation() {
        let request: QuoteRequestDto = serde_json::from_str(r#"{"rrp": "4000"}"#).unwrap();
        assert_eq!(request.rrp, "4000");
        assert!(request.depreciation_percent.is_none());
    }
}
