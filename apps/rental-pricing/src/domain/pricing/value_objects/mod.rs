//! Pricing Value Objects

mod business_settings;
mod pricing_input;
mod pricing_result;
mod rental_term;

pub use business_settings::{
    BusinessSettings, DEFAULT_GATEWAY_FEE, DEFAULT_INVESTOR_RATE, DEFAULT_LOGISTICS_BUFFER,
    DEFAULT_RISK_PROVISION, DEFAULT_TARGET_MARGIN,
};
pub use pricing_input::{DEFAULT_DEPRECIATION_PERCENT, PricingInput};
pub use pricing_result::PricingResult;
pub use rental_term::RentalTerm;
