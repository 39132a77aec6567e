//! Infrastructure Configuration
//!
//! Dependency injection container.

mod container;

pub use container::{Container, ContainerError};
