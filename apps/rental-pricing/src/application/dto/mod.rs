//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod pricing_dto;

pub use pricing_dto::{BusinessSettingsDto, PricingResultDto, QuoteRequestDto, TermPriceDto};
