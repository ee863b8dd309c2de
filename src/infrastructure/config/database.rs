//! Frequency store connection settings.

use serde::Deserialize;

/// Environment variable that overrides [`DatabaseConfig::url`].
pub const DATABASE_URL_ENV: &str = "SHIRTSTAT_DATABASE_URL";

/// SQLite connection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Whether the run persists frequencies at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Path or `sqlite://` URL of the database file.
    #[serde(default = "default_url")]
    pub url: String,
    /// How long to wait for a connection before giving up.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_enabled() -> bool {
    true
}

fn default_url() -> String {
    "shirtstat.db".to_string()
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            url: default_url(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
