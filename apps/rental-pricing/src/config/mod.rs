//! Configuration module for the rental pricing engine.
//!
//! Loads the YAML configuration, interpolates environment variables and
//! validates the result.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rental_pricing::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("Currency: {}", config.pricing.currency);
//! ```

mod observability;
mod pricing;
mod settings_store;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use pricing::PricingConfig;
pub use settings_store::SettingsStoreConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Settings store connection.
    #[serde(default)]
    pub settings_store: SettingsStoreConfig,
    /// Pricing defaults.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. An unset or empty
/// variable without a default becomes the empty string.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let store = &config.settings_store;
    if store.is_configured()
        && !(store.url.starts_with("http://") || store.url.starts_with("https://"))
    {
        return Err(ConfigError::ValidationError(format!(
            "settings_store.url must start with http:// or https://, got '{}'",
            store.url
        )));
    }

    if store.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "settings_store.timeout_secs must be positive".to_string(),
        ));
    }

    if store.table.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "settings_store.table must not be empty".to_string(),
        ));
    }

    let depreciation = config.pricing.default_depreciation_percent;
    if !(0.0..=100.0).contains(&depreciation) {
        return Err(ConfigError::ValidationError(
            "pricing.default_depreciation_percent must be between 0 and 100".to_string(),
        ));
    }

    if config.pricing.currency.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "pricing.currency must not be empty".to_string(),
        ));
    }

    let level = &config.observability.logging.level;
    if let Err(e) = tracing_subscriber::EnvFilter::try_new(level) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level '{level}' is not a valid filter: {e}"
        )));
    }

    Ok(())
}
