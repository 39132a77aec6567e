//! Supabase settings repository.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::application::ports::{SettingsError, SettingsRepositoryPort};
use crate::domain::settings::BusinessSettingRow;

use super::api_types::PostgrestErrorResponse;
use super::config::SupabaseSettingsConfig;
use super::error::SupabaseError;

/// Reads business settings rows through Supabase's PostgREST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseSettingsRepository {
    client: Client,
    api_key: String,
    rows_url: String,
}

impl SupabaseSettingsRepository {
    /// Create a new repository from config.
    ///
    /// # Errors
    ///
    /// Returns `SupabaseError::NotConfigured` if the URL or API key is empty,
    /// or `SupabaseError::Network` if the HTTP client cannot be built.
    pub fn new(config: &SupabaseSettingsConfig) -> Result<Self, SupabaseError> {
        if config.url.trim().is_empty() {
            return Err(SupabaseError::NotConfigured("url is empty".to_string()));
        }
        if config.api_key.is_empty() {
            return Err(SupabaseError::NotConfigured("api_key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            rows_url: config.rows_url(),
        })
    }

    /// Fetch every row, one request, no retries.
    async fn fetch_rows(&self) -> Result<Vec<BusinessSettingRow>, SupabaseError> {
        let response = self
            .client
            .get(&self.rows_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SupabaseError::Network(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| SupabaseError::JsonParse(e.to_string()));
        }

        let message = serde_json::from_str::<PostgrestErrorResponse>(&body)
            .map_or(body, |err| err.describe());

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SupabaseError::Unauthorized {
                status: status.as_u16(),
                message,
            }),
            _ => Err(SupabaseError::Api {
                status: status.as_u16(),
                message,
            }),
        }
    }
}

#[async_trait]
impl SettingsRepositoryPort for SupabaseSettingsRepository {
    async fn fetch_all(&self) -> Result<Vec<BusinessSettingRow>, SettingsError> {
        match self.fetch_rows().await {
            Ok(rows) => {
                tracing::debug!(rows = rows.len(), "Fetched business settings rows");
                Ok(rows)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Business settings read failed");
                Err(e.into())
            }
        }
    }
}
