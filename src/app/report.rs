//! Result types produced by a run.

use serde::Serialize;

use crate::domain::algorithm::search::as_sentinel;
use crate::domain::algorithm::BinaryNumber;
use crate::domain::{ColorAnalyzer, FrequencyTable};
use crate::error::StatsError;
use crate::port::SaveReport;

/// Probability of one label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbabilityReport {
    pub label: String,
    pub value: f64,
}

/// Descriptive statistics over the observation sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStats {
    pub observations: usize,
    pub frequencies: FrequencyTable,
    pub mean_label: Option<String>,
    pub mode_label: Option<String>,
    pub median_label: Option<String>,
    pub variance: f64,
    pub probability: ProbabilityReport,
}

impl ColorStats {
    /// Compute every statistic for `analyzer`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] when the variance is undefined.
    pub fn compute(analyzer: &ColorAnalyzer, probability_label: &str) -> Result<Self, StatsError> {
        Ok(Self {
            observations: analyzer.observations(),
            frequencies: analyzer.table().clone(),
            mean_label: analyzer.mean_label().map(str::to_string),
            mode_label: analyzer.mode_label().map(str::to_string),
            median_label: analyzer.median_label().map(str::to_string),
            variance: analyzer.variance()?,
            probability: ProbabilityReport {
                label: probability_label.to_string(),
                value: analyzer.probability(probability_label),
            },
        })
    }
}

/// What happened to the frequency table in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PersistenceOutcome {
    /// Persistence was disabled for this run.
    Skipped,
    Saved(SaveReport),
    Failed { error: String },
}

impl PersistenceOutcome {
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Linear search input and result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchReport {
    pub numbers: Vec<i64>,
    pub target: i64,
    pub start: usize,
    /// Index of the first match, or -1.
    pub index: i64,
}

impl SearchReport {
    #[must_use]
    pub fn new(numbers: Vec<i64>, target: i64, start: usize, result: Option<usize>) -> Self {
        Self {
            numbers,
            target,
            start,
            index: as_sentinel(result),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FibonacciReport {
    pub terms: usize,
    pub sum: u128,
}

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    pub stats: ColorStats,
    pub persistence: PersistenceOutcome,
    pub search: SearchReport,
    pub binary: BinaryNumber,
    pub fibonacci: FibonacciReport,
}
