//! Pricing errors.

use std::fmt;

/// Errors raised by the checked pricing path.
///
/// The raw calculation never fails; these are produced only when inputs or
/// settings are validated before calculating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Device input (RRP or depreciation) is out of range or unparsable.
    InvalidInput {
        /// Input field.
        field: String,
        /// Error message.
        message: String,
    },

    /// Business settings would produce a non-positive anchor divisor or an
    /// out-of-range rate.
    InvalidSettings {
        /// Settings field.
        field: String,
        /// Error message.
        message: String,
    },
}

impl PricingError {
    pub(crate) fn input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn settings(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid pricing input [{field}]: {message}")
            }
            Self::InvalidSettings { field, message } => {
                write!(f, "Invalid business settings [{field}]: {message}")
            }
        }
    }
}

impl std::error::Error for PricingError {}
