//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`pricing`]: Rental price derivation and the vanity rounding policy
//! - [`settings`]: Named business settings and their default resolution

pub mod pricing;
pub mod settings;
pub mod shared;
