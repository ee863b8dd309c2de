//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`FrequencyStore`] - Persistence for label frequencies

pub mod outbound;

pub use outbound::store::{FrequencyStore, PersistedFrequency, SaveReport};
