//! Infrastructure Layer
//!
//! Adapters implementing application ports.

pub mod config;
pub mod settings_store;
