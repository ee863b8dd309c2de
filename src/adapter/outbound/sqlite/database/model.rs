//! Database model types for Diesel ORM.

use diesel::prelude::*;

use super::schema::color_frequencies;
use crate::domain::LabelCount;
use crate::error::Error;
use crate::port::PersistedFrequency;

/// Database row for a color frequency.
#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = color_frequencies)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ColorFrequencyRow {
    pub color: String,
    pub frequency: i32,
}

impl TryFrom<&LabelCount> for ColorFrequencyRow {
    type Error = Error;

    fn try_from(entry: &LabelCount) -> Result<Self, Self::Error> {
        let frequency = i32::try_from(entry.count).map_err(|_| {
            Error::Database(format!(
                "frequency {} for {} exceeds the column range",
                entry.count, entry.label
            ))
        })?;
        Ok(Self {
            color: entry.label.clone(),
            frequency,
        })
    }
}

impl From<ColorFrequencyRow> for PersistedFrequency {
    fn from(row: ColorFrequencyRow) -> Self {
        Self {
            color: row.color,
            frequency: row.frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_label_count() {
        let entry = LabelCount {
            label: "RED".into(),
            count: 9,
        };
        let row = ColorFrequencyRow::try_from(&entry).unwrap();
        assert_eq!(row.color, "RED");
        assert_eq!(row.frequency, 9);
    }

    #[test]
    fn rejects_count_beyond_integer_column() {
        let entry = LabelCount {
            label: "RED".into(),
            count: usize::MAX,
        };
        assert!(matches!(
            ColorFrequencyRow::try_from(&entry),
            Err(Error::Database(_))
        ));
    }
}
