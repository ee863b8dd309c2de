//! Database connection management using Diesel ORM.
//!
//! Provides connection pooling and migration support for SQLite databases.

use std::time::Duration;

use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Type alias for a SQLite connection pool.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single connection: the program is single-threaded and `:memory:`
/// databases are per-connection.
const POOL_SIZE: u32 = 1;

/// Create a connection pool for the given database URL.
///
/// # Errors
/// Returns an error if no connection can be established within
/// `connect_timeout`.
pub fn create_pool(database_url: &str, connect_timeout: Duration) -> Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .max_size(POOL_SIZE)
        .connection_timeout(connect_timeout)
        .build(manager)
        .map_err(|e| Error::Connection(e.to_string()))
}

/// Run all pending database migrations.
///
/// # Errors
/// Returns an error if migrations fail.
pub fn run_migrations(pool: &DbPool) -> Result<()> {
    let mut conn = pool.get().map_err(|e| Error::Connection(e.to_string()))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Database(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::prelude::*;

    const TIMEOUT: Duration = Duration::from_secs(1);

    #[derive(diesel::QueryableByName)]
    struct TableName {
        #[diesel(sql_type = diesel::sql_types::Text)]
        name: String,
    }

    #[test]
    fn create_pool_with_memory_db() {
        let pool = create_pool(":memory:", TIMEOUT);
        assert!(pool.is_ok());
    }

    #[test]
    fn run_migrations_creates_table() {
        let pool = create_pool(":memory:", TIMEOUT).unwrap();
        run_migrations(&pool).unwrap();

        let mut conn = pool.get().unwrap();
        let tables: Vec<String> = diesel::sql_query(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations' ORDER BY name",
        )
        .load::<TableName>(&mut conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();

        assert_eq!(tables, vec!["color_frequencies".to_string()]);
    }

    #[test]
    fn run_migrations_is_idempotent() {
        let pool = create_pool(":memory:", TIMEOUT).unwrap();
        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();
    }

    #[test]
    fn pool_holds_one_connection() {
        let pool = create_pool(":memory:", TIMEOUT).unwrap();
        let conn = pool.get().unwrap();
        assert_eq!(pool.state().connections, 1);
        drop(conn);
        assert_eq!(pool.state().idle_connections, 1);
    }
}
