//! Logging Setup
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`,
//! falling back to the configured level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rental_pricing::config::load_config;
//! use rental_pricing::telemetry::init_telemetry;
//!
//! let config = load_config(None)?;
//! init_telemetry(&config.observability.logging)?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Telemetry initialisation errors.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Configured level is not a valid filter directive.
    #[error("Invalid log filter '{level}': {message}")]
    InvalidFilter {
        /// The rejected directive.
        level: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber is already installed.
    #[error("Global tracing subscriber already initialized")]
    AlreadyInitialized,
}

/// Build the filter: `RUST_LOG` when set and valid, else the configured level.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if `RUST_LOG` is unusable and the
/// configured level does not parse.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.level).map_err(|e| TelemetryError::InvalidFilter {
            level: config.level.clone(),
            message: e.to_string(),
        })
    })
}

/// Initialize console logging.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` for an unparsable level, or
/// `TelemetryError::AlreadyInitialized` if a global subscriber exists.
pub fn init_telemetry(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|_| TelemetryError::AlreadyInitialized)?;

    tracing::debug!(level = %config.level, "Telemetry initialized");
    Ok(())
}
