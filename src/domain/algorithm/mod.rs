//! Standalone algorithm demonstrations.
//!
//! None of these depend on the color statistics.

pub mod binary;
pub mod fibonacci;
pub mod search;

pub use binary::{generate_binary_number, BinaryNumber};
pub use fibonacci::{fibonacci_sum, Fibonacci, DEFAULT_FIBONACCI_TERMS};
pub use search::{linear_search, NOT_FOUND};
