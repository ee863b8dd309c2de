//! Persistence port for label frequencies.

use serde::Serialize;

use crate::domain::FrequencyTable;
use crate::error::Result;

/// A stored (label, frequency) row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistedFrequency {
    pub color: String,
    pub frequency: i32,
}

/// Outcome of a successful save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// Labels that had no row before the save.
    pub inserted: usize,
    /// Labels whose existing row was overwritten.
    pub updated: usize,
}

impl SaveReport {
    #[must_use]
    pub fn total(&self) -> usize {
        self.inserted + self.updated
    }
}

/// Storage operations for frequency tables.
pub trait FrequencyStore {
    /// Upsert every entry of `table`, committing once at the end.
    ///
    /// Existing rows for the same label are overwritten; rows for labels not
    /// in `table` are left untouched.
    fn save(&self, table: &FrequencyTable) -> Result<SaveReport>;

    /// All stored rows ordered by label.
    fn load_all(&self) -> Result<Vec<PersistedFrequency>>;
}
