//! Load Settings Use Case

use std::sync::Arc;

use crate::application::dto::BusinessSettingsDto;
use crate::application::ports::{SettingsError, SettingsRepositoryPort};
use crate::domain::pricing::BusinessSettings;
use crate::domain::settings::{SettingKey, defaulted_keys};
use crate::domain::shared::DomainError;

/// Errors from preparing settings for the settings screen.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsViewError {
    /// Settings could not be read.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// A stored value could not be converted for display.
    #[error(transparent)]
    Presentation(#[from] DomainError),
}

/// Use case for obtaining the business settings the calculator needs.
///
/// Every call reads the store afresh. A failed read is returned as-is;
/// missing rows are absorbed by defaults.
pub struct LoadSettingsUseCase<R>
where
    R: SettingsRepositoryPort,
{
    settings_repo: Arc<R>,
}

impl<R> LoadSettingsUseCase<R>
where
    R: SettingsRepositoryPort,
{
    /// Create a new LoadSettingsUseCase.
    pub fn new(settings_repo: Arc<R>) -> Self {
        Self { settings_repo }
    }

    /// Load settings, applying defaults for anything not set.
    pub async fn execute(&self) -> Result<BusinessSettings, SettingsError> {
        self.execute_with_defaults().await.map(|(settings, _)| settings)
    }

    /// Load settings and report which keys fell back to their defaults.
    pub async fn execute_with_defaults(
        &self,
    ) -> Result<(BusinessSettings, Vec<SettingKey>), SettingsError> {
        let rows = self.settings_repo.fetch_all().await?;
        let settings = BusinessSettings::from_rows(&rows);
        let defaulted = defaulted_keys(&rows);

        tracing::debug!(
            rows = rows.len(),
            defaulted = ?defaulted,
            investor_rate = settings.investor_rate,
            risk_provision = settings.risk_provision,
            gateway_fee = settings.gateway_fee,
            target_margin = settings.target_margin,
            logistics_buffer = settings.logistics_buffer,
            "Business settings loaded"
        );

        Ok((settings, defaulted))
    }

    /// Load settings as shown on the settings screen.
    pub async fn execute_for_display(&self) -> Result<BusinessSettingsDto, SettingsViewError> {
        let (settings, defaulted) = self.execute_with_defaults().await?;
        Ok(BusinessSettingsDto::from_settings(&settings, defaulted)?)
    }
}

impl<R> Clone for LoadSettingsUseCase<R>
where
    R: SettingsRepositoryPort,
{
    fn clone(&self) -> Self {
        Self {
            settings_repo: Arc::clone(&self.settings_repo),
        }
    }
}
