//! Pricing Domain Services

mod calculator;

pub use calculator::{RentalPricingCalculator, calculate_rental_pricing};
