//! Settings Repository Port (Driven Port)
//!
//! Read access to the named business settings store.

use std::cmp::Ordering as CmpOrdering;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::settings::BusinessSettingRow;

/// Settings store error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Store could not be reached.
    #[error("Settings store unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Credentials rejected or the table is not readable.
    #[error("Settings store denied access: {message}")]
    PermissionDenied {
        /// Error details.
        message: String,
    },

    /// Store answered with an error.
    #[error("Settings store error (status {status}): {message}")]
    Store {
        /// Status code reported by the store.
        status: u16,
        /// Error details.
        message: String,
    },

    /// Rows could not be decoded.
    #[error("Failed to decode settings rows: {message}")]
    Decode {
        /// Error details.
        message: String,
    },
}

/// Port for reading business settings rows.
///
/// Implementations issue a fresh read per call: no caching, no retries.
#[async_trait]
pub trait SettingsRepositoryPort: Send + Sync {
    /// Fetch every row of the settings collection, ordered by id.
    async fn fetch_all(&self) -> Result<Vec<BusinessSettingRow>, SettingsError>;
}

/// In-memory implementation for testing and local runs.
#[derive(Debug, Default)]
pub struct InMemorySettingsRepository {
    rows: std::sync::RwLock<Vec<BusinessSettingRow>>,
    failure: std::sync::RwLock<Option<SettingsError>>,
    reads: AtomicUsize,
}

impl InMemorySettingsRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `rows`.
    #[must_use]
    pub fn with_rows(rows: Vec<BusinessSettingRow>) -> Self {
        Self {
            rows: std::sync::RwLock::new(rows),
            ..Self::default()
        }
    }

    /// Replace the stored rows, as an administrator saving the settings
    /// screen would.
    pub fn replace_rows(&self, rows: Vec<BusinessSettingRow>) {
        let mut guard = self
            .rows
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = rows;
    }

    /// Make every subsequent read fail with `error` (or succeed again with `None`).
    pub fn set_failure(&self, error: Option<SettingsError>) {
        let mut guard = self
            .failure
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = error;
    }

    /// Number of reads issued so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsRepositoryPort for InMemorySettingsRepository {
    async fn fetch_all(&self) -> Result<Vec<BusinessSettingRow>, SettingsError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        let failure = self
            .failure
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        if let Some(error) = failure {
            return Err(error);
        }

        let mut rows = self
            .rows
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        rows.sort_by(|a, b| compare_ids(&a.id, &b.id));
        Ok(rows)
    }
}

/// Order ids the way the store does: integer ids numerically, ahead of
/// any non-integer ids, which compare as text.
fn compare_ids(a: &str, b: &str) -> CmpOrdering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => CmpOrdering::Less,
        (Err(_), Ok(_)) => CmpOrdering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
