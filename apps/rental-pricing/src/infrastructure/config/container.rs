//! Dependency Injection Container
//!
//! Wires configuration to the settings store adapter and the use cases.

use std::sync::Arc;

use crate::application::ports::{InMemorySettingsRepository, SettingsRepositoryPort};
use crate::application::use_cases::{LoadSettingsUseCase, QuoteRentalPricingUseCase};
use crate::config::{Config, PricingConfig};
use crate::infrastructure::settings_store::{SupabaseError, SupabaseSettingsRepository};

/// Container construction errors.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// `settings_store.url` is empty.
    #[error("Settings store is not configured (settings_store.url is empty)")]
    StoreNotConfigured,

    /// Adapter construction failed.
    #[error(transparent)]
    Supabase(#[from] SupabaseError),
}

/// Dependency injection container.
///
/// Holds the settings store port and the pricing configuration. Use cases
/// are created on demand and share the same port.
pub struct Container<R>
where
    R: SettingsRepositoryPort + 'static,
{
    settings_repo: Arc<R>,
    pricing: PricingConfig,
}

impl<R> Container<R>
where
    R: SettingsRepositoryPort + 'static,
{
    /// Create a new container from a port and pricing configuration.
    pub fn new(settings_repo: Arc<R>, pricing: PricingConfig) -> Self {
        Self {
            settings_repo,
            pricing,
        }
    }

    /// Get the settings repository port.
    pub fn settings_repo(&self) -> Arc<R> {
        Arc::clone(&self.settings_repo)
    }

    /// Get the pricing configuration.
    pub const fn pricing_config(&self) -> &PricingConfig {
        &self.pricing
    }

    /// Create a `LoadSettingsUseCase`.
    pub fn load_settings_use_case(&self) -> LoadSettingsUseCase<R> {
        LoadSettingsUseCase::new(Arc::clone(&self.settings_repo))
    }

    /// Create a `QuoteRentalPricingUseCase`.
    pub fn quote_rental_pricing_use_case(&self) -> QuoteRentalPricingUseCase<R> {
        QuoteRentalPricingUseCase::new(
            Arc::clone(&self.settings_repo),
            self.pricing.default_depreciation_percent,
            self.pricing.currency.clone(),
        )
    }
}

impl Container<SupabaseSettingsRepository> {
    /// Build a container backed by the configured Supabase project.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::StoreNotConfigured` if no URL is set, or the
    /// adapter's error if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ContainerError> {
        if !config.settings_store.is_configured() {
            return Err(ContainerError::StoreNotConfigured);
        }

        let repo = SupabaseSettingsRepository::new(&config.settings_store.to_adapter_config())?;
        tracing::info!(
            table = %config.settings_store.table,
            timeout_secs = config.settings_store.timeout_secs,
            "Settings store adapter configured"
        );

        Ok(Self::new(Arc::new(repo), config.pricing.clone()))
    }
}

impl Container<InMemorySettingsRepository> {
    /// Build a container over an in-memory store, for local runs and tests.
    pub fn in_memory(repo: InMemorySettingsRepository, pricing: PricingConfig) -> Self {
        Self::new(Arc::new(repo), pricing)
    }
}
