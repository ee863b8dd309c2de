//! Label frequency counting.
//!
//! [`FrequencyTable`] keeps labels in the order they were first seen. Several
//! statistics break ties by that order, so it is part of the contract.

use serde::Serialize;

/// A label together with the number of times it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Immutable label -> count mapping in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<LabelCount>,
}

impl FrequencyTable {
    /// Count every label in `observations`.
    ///
    /// Inputs are a few dozen labels at most, so the lookup is a linear scan.
    #[must_use]
    pub fn from_observations<I, S>(observations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<LabelCount> = Vec::new();
        for label in observations {
            let label = label.as_ref();
            match entries.iter_mut().find(|e| e.label == label) {
                Some(entry) => entry.count += 1,
                None => entries.push(LabelCount {
                    label: label.to_string(),
                    count: 1,
                }),
            }
        }
        Self { entries }
    }

    /// Count recorded for `label`, zero when never observed.
    #[must_use]
    pub fn count(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map_or(0, |e| e.count)
    }

    /// Sum of all counts, equal to the length of the source sequence.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &LabelCount> {
        self.entries.iter()
    }

    /// Count values in first-seen order.
    pub fn counts(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.count)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a LabelCount;
    type IntoIter = std::slice::Iter<'a, LabelCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
