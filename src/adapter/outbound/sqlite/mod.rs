//! SQLite persistence adapters.
//!
//! Provides a SQLite-backed [`FrequencyStore`](crate::port::FrequencyStore)
//! using Diesel ORM.

pub mod database;
pub mod store;

pub use store::SqliteFrequencyStore;
