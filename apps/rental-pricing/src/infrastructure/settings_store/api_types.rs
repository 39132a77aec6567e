//! PostgREST response types.

use serde::Deserialize;

/// Error body returned by PostgREST.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestErrorResponse {
    /// PostgreSQL or PostgREST error code, e.g. `42P01`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Extra detail, if any.
    #[serde(default)]
    pub details: Option<String>,
    /// Suggested fix, if any.
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestErrorResponse {
    /// Message with code and details folded in.
    pub fn describe(&self) -> String {
        let mut out = match &self.code {
            Some(code) => format!("{code}: {}", self.message),
            None => self.message.clone(),
        };
        if let Some(details) = self.details.as_deref().filter(|d| !d.is_empty()) {
            out.push_str(" (");
            out.push_str(details);
            out.push(')');
        }
        if let Some(hint) = self.hint.as_deref().filter(|h| !h.is_empty()) {
            out.push_str("; hint: ");
            out.push_str(hint);
        }
        out
    }
}
