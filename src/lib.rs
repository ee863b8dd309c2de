//! Shirtstat - descriptive statistics over weekly shirt-color observations.
//!
//! Counts how often each color was worn, derives a handful of statistics
//! from those counts, persists the counts to SQLite, and runs three small
//! standalone algorithm demonstrations.
//!
//! # Modules
//!
//! - [`domain`] - Frequency counting, statistics, and the algorithm demos
//! - [`port`] - Persistence trait implemented by the adapters
//! - [`adapter`] - SQLite and in-memory stores, and the command-line interface
//! - [`app`] - Runs everything and collects a [`app::DemoReport`]
//! - [`infrastructure`] - Configuration loading and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use shirtstat::domain::ColorAnalyzer;
//!
//! let analyzer = ColorAnalyzer::new(["RED", "BLUE", "BLUE"]);
//! assert_eq!(analyzer.mode_label(), Some("BLUE"));
//! assert!((analyzer.probability("RED") - 1.0 / 3.0).abs() < 1e-12);
//! ```

pub mod adapter;
pub mod app;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
