// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value
    )
)]

//! Rental Pricing - Rust Core Library
//!
//! Pricing engine for the device-rental back office. Derives a monthly
//! price ladder (3, 6, 12 and 24 month terms) from a device's retail price,
//! its expected depreciation, and business settings stored as named rows in
//! the dashboard's datastore.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure business logic, no I/O
//!   - `pricing`: Rounding policy, calculator, settings and result value objects
//!   - `settings`: Setting keys, stored rows, default resolution
//!   - `shared`: `Money` and domain errors
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `SettingsRepositoryPort` (driven port to the settings store)
//!   - `use_cases`: `LoadSettings`, `QuoteRentalPricing`
//!   - `dto`: Presentation shapes for the dashboard
//!
//! - **Infrastructure**: Adapters
//!   - `settings_store`: Supabase/PostgREST adapter
//!   - `config`: Dependency injection container
//!
//! - **Configuration**: YAML loading with `${VAR}` interpolation (`config`)
//!   and logging setup (`telemetry`)
//!
//! The calculator is synchronous and stateless. Only settings loading
//! suspends on I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging setup.
pub mod telemetry;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::pricing::{
    BusinessSettings, PricingError, PricingInput, PricingResult, RentalPricingCalculator,
    RentalTerm, calculate_rental_pricing, round_up_to_nearest_9,
};
pub use domain::settings::{BusinessSettingRow, SettingColumn, SettingKey};
pub use domain::shared::{DomainError, Money};

// Application re-exports
pub use application::dto::{
    BusinessSettingsDto, PricingResultDto, QuoteRequestDto, TermPriceDto,
};
pub use application::ports::{InMemorySettingsRepository, SettingsError, SettingsRepositoryPort};
pub use application::use_cases::{
    LoadSettingsUseCase, QuoteError, QuoteRentalPricingUseCase, SettingsViewError,
};

// Configuration re-exports
pub use config::{Config, ConfigError, load_config, load_config_from_string};
pub use telemetry::{TelemetryError, init_telemetry};

// Infrastructure re-exports
pub use infrastructure::config::{Container, ContainerError};
pub use infrastructure::settings_store::{
    SupabaseError, SupabaseSettingsConfig, SupabaseSettingsRepository,
};
