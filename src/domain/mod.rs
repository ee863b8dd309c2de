//! Storage-agnostic domain logic: counting, statistics, and the standalone
//! algorithm demonstrations.

pub mod algorithm;
pub mod analysis;
pub mod frequency;

pub use analysis::ColorAnalyzer;
pub use frequency::{FrequencyTable, LabelCount};
