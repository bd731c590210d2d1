//! Database connection settings.

use serde::Deserialize;

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL URL or libpq keyword/value string.
    ///
    /// Defaults to the local `news` database. No host is named, so libpq
    /// picks the socket directory it was built with, the same one `psql`
    /// uses on that machine.
    #[serde(default = "default_database_url")]
    pub url: String,
}

fn default_database_url() -> String {
    "postgres:///news".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
        }
    }
}
