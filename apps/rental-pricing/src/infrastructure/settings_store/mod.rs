//! Supabase Settings Store Adapter
//!
//! Implementation of `SettingsRepositoryPort` over the PostgREST API that
//! fronts the dashboard's `business_settings` table:
//! - One GET per read, ordered by id
//! - Anon/service key sent as both `apikey` and bearer token
//! - No caching and no retries

mod api_types;
mod config;
mod error;
mod repository;

pub use config::SupabaseSettingsConfig;
pub use error::SupabaseError;
pub use repository::SupabaseSettingsRepository;
