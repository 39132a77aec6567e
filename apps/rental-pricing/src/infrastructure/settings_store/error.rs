//! Supabase-specific error types.

use thiserror::Error;

use crate::application::ports::SettingsError;

/// Errors from the Supabase adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SupabaseError {
    /// Adapter is missing its URL or API key.
    #[error("Supabase adapter not configured: {0}")]
    NotConfigured(String),

    /// Request never got a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Credentials rejected or row-level security denied the read.
    #[error("Access denied (status {status}): {message}")]
    Unauthorized {
        /// HTTP status.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// API returned an error.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<SupabaseError> for SettingsError {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::NotConfigured(message) | SupabaseError::Network(message) => {
                Self::Unavailable { message }
            }
            SupabaseError::Unauthorized { message, .. } => Self::PermissionDenied { message },
            SupabaseError::Api { status, message } => Self::Store { status, message },
            SupabaseError::JsonParse(message) => Self::Decode { message },
        }
    }
}
