use std::path::PathBuf;

use shirtstat::infrastructure::config::database::DatabaseConfig;
use tempfile::TempDir;

/// Temporary SQLite database file for integration tests.
///
/// The directory, and the database with it, is removed on drop.
pub struct TempDb {
    dir: TempDir,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("shirtstat.db")
    }

    pub fn url(&self) -> String {
        format!("sqlite://{}", self.path().display())
    }

    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            url: self.url(),
            ..DatabaseConfig::default()
        }
    }
}
