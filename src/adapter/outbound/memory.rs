//! In-memory frequency store for testing.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::domain::FrequencyTable;
use crate::error::{Error, Result};
use crate::port::{FrequencyStore, PersistedFrequency, SaveReport};

/// In-memory store for testing purposes.
#[derive(Debug, Default)]
pub struct MemoryFrequencyStore {
    rows: RwLock<BTreeMap<String, i32>>,
}

impl MemoryFrequencyStore {
    /// Create a new empty memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrequencyStore for MemoryFrequencyStore {
    fn save(&self, table: &FrequencyTable) -> Result<SaveReport> {
        let staged = table
            .iter()
            .map(|e| {
                i32::try_from(e.count)
                    .map(|f| (e.label.clone(), f))
                    .map_err(|_| Error::Database(format!("frequency for {} out of range", e.label)))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut rows = self.rows.write();
        let mut report = SaveReport::default();
        for (color, frequency) in staged {
            if rows.insert(color, frequency).is_some() {
                report.updated += 1;
            } else {
                report.inserted += 1;
            }
        }
        Ok(report)
    }

    fn load_all(&self) -> Result<Vec<PersistedFrequency>> {
        Ok(self
            .rows
            .read()
            .iter()
            .map(|(color, frequency)| PersistedFrequency {
                color: color.clone(),
                frequency: *frequency,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_semantics_match_sqlite_store() {
        let store = MemoryFrequencyStore::new();
        let first = store
            .save(&FrequencyTable::from_observations(["RED", "RED", "BLUE"]))
            .unwrap();
        let second = store
            .save(&FrequencyTable::from_observations(["RED"]))
            .unwrap();

        assert_eq!(first, SaveReport { inserted: 2, updated: 0 });
        assert_eq!(second, SaveReport { inserted: 0, updated: 1 });
        let rows = store.load_all().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].color, "RED");
        assert_eq!(rows[1].frequency, 1);
    }
}
