//! Domain errors shared across the pricing and settings contexts.

use std::fmt;

/// Domain-level errors that can occur in business logic.
///
/// These errors are independent of infrastructure concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// A computed figure cannot be represented as a currency amount.
    NotRepresentable {
        /// Figure name (e.g., "anchor_price").
        figure: String,
        /// The raw value as rendered by the float formatter.
        value: String,
    },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::NotRepresentable { figure, value } => {
                write!(f, "{figure} is not a representable amount: {value}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
