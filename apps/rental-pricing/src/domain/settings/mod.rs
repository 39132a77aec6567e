//! Business Settings Bounded Context
//!
//! Named business parameters persisted as rows of a key-value table, and
//! their resolution into the `BusinessSettings` the calculator consumes.
//!
//! # Key Concepts
//!
//! - **Setting key**: One of five known keys; others are ignored
//! - **Column**: Rates read `value_percent` (÷100), the buffer reads `value_aed`
//! - **Defaulting**: Anything not set falls back to its documented default

mod resolution;
mod setting_key;
mod setting_row;

pub use resolution::{defaulted_keys, stored_value};
pub use setting_key::{SettingColumn, SettingKey};
pub use setting_row::BusinessSettingRow;
