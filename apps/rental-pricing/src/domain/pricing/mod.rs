//! Pricing Bounded Context
//!
//! Derives the monthly price ladder for a rental device.
//!
//! # Key Concepts
//!
//! - **Hard floor**: Monthly financing repayment plus the logistics buffer
//! - **Anchor price**: 12-month price, base cost grossed up for risk, gateway and margin
//! - **Ladder**: 3/6/12/24-month prices as multiples of the anchor, ending in 9

pub mod errors;
pub mod rounding;
pub mod services;
pub mod value_objects;

pub use errors::PricingError;
pub use rounding::round_up_to_nearest_9;
pub use services::{RentalPricingCalculator, calculate_rental_pricing};
pub use value_objects::{
    BusinessSettings, DEFAULT_DEPRECIATION_PERCENT, PricingInput, PricingResult, RentalTerm,
};
