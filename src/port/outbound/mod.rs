//! Ports implemented by outbound adapters.

pub mod store;
