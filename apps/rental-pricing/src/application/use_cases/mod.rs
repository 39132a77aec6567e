//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod load_settings;
mod quote_rental_pricing;

pub use load_settings::{LoadSettingsUseCase, SettingsViewError};
pub use quote_rental_pricing::{QuoteError, QuoteRentalPricingUseCase};
