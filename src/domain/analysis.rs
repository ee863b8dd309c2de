//! Descriptive statistics over a frequency table.
//!
//! The "mean" and "median" labels here are heuristics over label counts rather
//! than statistics of the underlying label distribution:
//!
//! - the mean label is the label whose count lies closest to the mean count;
//! - the median label is the label at index `len / 2` after a stable ascending
//!   sort by count, even when neighbouring counts repeat.
//!
//! Ties in the mean and mode are resolved in favour of the label that was
//! observed first. That tie-break is arbitrary and carries no meaning.

use crate::domain::frequency::{FrequencyTable, LabelCount};
use crate::error::StatsError;

/// Statistics over one observation sequence.
#[derive(Debug, Clone)]
pub struct ColorAnalyzer {
    table: FrequencyTable,
}

impl ColorAnalyzer {
    /// Build the frequency table for `observations`.
    #[must_use]
    pub fn new<I, S>(observations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            table: FrequencyTable::from_observations(observations),
        }
    }

    #[must_use]
    pub fn from_table(table: FrequencyTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Number of observations the table was built from.
    #[must_use]
    pub fn observations(&self) -> usize {
        self.table.total()
    }

    /// Arithmetic mean of the counts, `None` for an empty table.
    #[must_use]
    pub fn mean_count(&self) -> Option<f64> {
        if self.table.is_empty() {
            return None;
        }
        Some(self.table.total() as f64 / self.table.len() as f64)
    }

    /// Label whose count is closest to the mean count.
    #[must_use]
    pub fn mean_label(&self) -> Option<&str> {
        let mean = self.mean_count()?;
        let mut best: Option<(&LabelCount, f64)> = None;
        for entry in &self.table {
            let distance = (entry.count as f64 - mean).abs();
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((entry, distance));
            }
        }
        best.map(|(entry, _)| entry.label.as_str())
    }

    /// Most frequently observed label.
    #[must_use]
    pub fn mode_label(&self) -> Option<&str> {
        let mut best: Option<&LabelCount> = None;
        for entry in &self.table {
            if best.map_or(true, |b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best.map(|entry| entry.label.as_str())
    }

    /// Label at the floor-middle rank after sorting by count.
    #[must_use]
    pub fn median_label(&self) -> Option<&str> {
        let mut ranked: Vec<&LabelCount> = self.table.iter().collect();
        // stable: equal counts keep first-seen order
        ranked.sort_by_key(|e| e.count);
        ranked.get(ranked.len() / 2).map(|e| e.label.as_str())
    }

    /// Sample variance (n - 1 divisor) of the counts.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InsufficientData`] when fewer than two distinct
    /// labels were observed.
    pub fn variance(&self) -> Result<f64, StatsError> {
        let n = self.table.len();
        if n < 2 {
            return Err(StatsError::InsufficientData {
                needed: 2,
                found: n,
            });
        }
        let mean = self.table.total() as f64 / n as f64;
        let squares: f64 = self
            .table
            .counts()
            .map(|c| {
                let delta = c as f64 - mean;
                delta * delta
            })
            .sum();
        Ok(squares / (n - 1) as f64)
    }

    /// Empirical probability that a random observation is `label`.
    ///
    /// Unknown labels count as zero and an empty sequence yields zero.
    #[must_use]
    pub fn probability(&self, label: &str) -> f64 {
        let total = self.table.total();
        if total == 0 {
            return 0.0;
        }
        self.table.count(label) as f64 / total as f64
    }
}
