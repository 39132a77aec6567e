//! Quote Rental Pricing Use Case

use std::sync::Arc;

use crate::application::dto::{PricingResultDto, QuoteRequestDto};
use crate::application::ports::{SettingsError, SettingsRepositoryPort};
use crate::domain::pricing::{PricingError, PricingInput, PricingResult, RentalPricingCalculator};
use crate::domain::shared::DomainError;

use super::LoadSettingsUseCase;

/// Errors from quoting a device.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// Settings could not be read.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Device input or loaded settings failed validation.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A figure could not be converted for display.
    #[error(transparent)]
    Presentation(#[from] DomainError),
}

/// Use case behind the dashboard's pricing calculator.
///
/// Validates the device input, loads settings fresh from the store,
/// validates them, and prices the device.
pub struct QuoteRentalPricingUseCase<R>
where
    R: SettingsRepositoryPort,
{
    load_settings: LoadSettingsUseCase<R>,
    default_depreciation_percent: f64,
    currency: String,
}

impl<R> QuoteRentalPricingUseCase<R>
where
    R: SettingsRepositoryPort,
{
    /// Create a new QuoteRentalPricingUseCase.
    pub fn new(
        settings_repo: Arc<R>,
        default_depreciation_percent: f64,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            load_settings: LoadSettingsUseCase::new(settings_repo),
            default_depreciation_percent,
            currency: currency.into(),
        }
    }

    /// Quote a calculator form submission.
    pub async fn execute(&self, request: QuoteRequestDto) -> Result<PricingResultDto, QuoteError> {
        // Input is checked before any I/O, as the form does.
        let input = PricingInput::parse(
            &request.rrp,
            request.depreciation_percent.as_deref(),
            self.default_depreciation_percent,
        )?;

        let result = self.price(&input).await?;
        Ok(PricingResultDto::from_result(&result, &self.currency)?)
    }

    /// Price a validated input with freshly loaded settings.
    pub async fn price(&self, input: &PricingInput) -> Result<PricingResult, QuoteError> {
        let settings = self.load_settings.execute().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Failed to load business settings");
        })?;
        let calculator = RentalPricingCalculator::validated(settings)?;
        let result = calculator.price(input);

        tracing::info!(
            rrp = input.rrp(),
            depreciation_percent = input.depreciation_percent(),
            anchor_price = result.anchor_price,
            price_24_month = result.price_24_month,
            hard_floor = result.hard_floor,
            floor_clamped = result.is_floor_clamped(),
            "Rental pricing calculated"
        );

        Ok(result)
    }

    /// Currency quoted amounts are in.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }
}
