//! SQLite frequency store implementation.
//!
//! Provides persistent storage for color frequencies using SQLite and Diesel ORM.

use std::time::Duration;

use diesel::prelude::*;
use diesel::upsert::excluded;
use tracing::debug;

use super::database::connection::{create_pool, run_migrations, DbPool};
use super::database::model::ColorFrequencyRow;
use super::database::schema::color_frequencies;
use crate::domain::FrequencyTable;
use crate::error::{Error, Result};
use crate::infrastructure::config::database::DatabaseConfig;
use crate::port::{FrequencyStore, PersistedFrequency, SaveReport};

/// SQLite-backed frequency store.
///
/// Implements the [`FrequencyStore`] trait on top of the
/// `color_frequencies` table.
pub struct SqliteFrequencyStore {
    /// Database connection pool.
    pool: DbPool,
}

impl SqliteFrequencyStore {
    /// Create a new SQLite frequency store with the given connection pool.
    ///
    /// The pool must already have migrations applied.
    #[must_use]
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Connect to the configured database and create the table if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the migration fails.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = create_pool(
            &config.url,
            Duration::from_millis(config.connect_timeout_ms),
        )?;
        run_migrations(&pool)?;
        debug!(url = %config.url, "frequency store ready");
        Ok(Self::new(pool))
    }
}

impl FrequencyStore for SqliteFrequencyStore {
    fn save(&self, table: &FrequencyTable) -> Result<SaveReport> {
        let rows = table
            .iter()
            .map(ColorFrequencyRow::try_from)
            .collect::<Result<Vec<_>>>()?;

        let mut pooled = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, Error, _>(|conn| {
            let mut report = SaveReport::default();
            for row in &rows {
                let existing: i64 = color_frequencies::table
                    .find(&row.color)
                    .count()
                    .get_result(conn)?;

                diesel::insert_into(color_frequencies::table)
                    .values(row)
                    .on_conflict(color_frequencies::color)
                    .do_update()
                    .set(color_frequencies::frequency.eq(excluded(color_frequencies::frequency)))
                    .execute(conn)?;

                if existing > 0 {
                    report.updated += 1;
                } else {
                    report.inserted += 1;
                }
            }
            Ok(report)
        })
    }

    fn load_all(&self) -> Result<Vec<PersistedFrequency>> {
        let mut pooled = self
            .pool
            .get()
            .map_err(|e| Error::Connection(e.to_string()))?;
        let conn: &mut SqliteConnection = &mut pooled;

        let rows: Vec<ColorFrequencyRow> = color_frequencies::table
            .order(color_frequencies::color.asc())
            .select(ColorFrequencyRow::as_select())
            .load(conn)?;

        Ok(rows.into_iter().map(PersistedFrequency::from).collect())
    }
}
