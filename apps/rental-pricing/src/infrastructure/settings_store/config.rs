//! Supabase adapter configuration.

use std::time::Duration;

/// Default table holding the settings rows.
pub const DEFAULT_TABLE: &str = "business_settings";

/// Configuration for the Supabase settings adapter.
#[derive(Debug, Clone)]
pub struct SupabaseSettingsConfig {
    /// Project URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// API key sent with every request.
    pub api_key: String,
    /// Table holding the settings rows.
    pub table: String,
    /// HTTP request timeout.
    pub timeout: Duration,
}

impl SupabaseSettingsConfig {
    /// Create a new configuration for the default table.
    #[must_use]
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Read from a different table.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint listing every row of the table, ordered by id.
    #[must_use]
    pub fn rows_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=*&order=id.asc",
            self.url.trim_end_matches('/'),
            self.table
        )
    }
}
