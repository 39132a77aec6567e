//! Settings store connection configuration.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::infrastructure::settings_store::SupabaseSettingsConfig;

/// Settings store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsStoreConfig {
    /// Supabase project URL. Empty means no remote store is configured.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// API key for the project.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_key: String,
    /// Table holding the settings rows.
    #[serde(default = "default_table")]
    pub table: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl SettingsStoreConfig {
    /// Whether a remote store is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Adapter configuration for the Supabase repository.
    #[must_use]
    pub fn to_adapter_config(&self) -> SupabaseSettingsConfig {
        SupabaseSettingsConfig::new(self.url.clone(), self.api_key.clone())
            .with_table(self.table.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

impl Default for SettingsStoreConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// An interpolated `${VAR}` with VAR unset leaves a bare `url:`, which YAML reads as null.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_table() -> String {
    "business_settings".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}
