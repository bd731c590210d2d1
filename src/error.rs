//! Error types for the crate.

use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The database is unreachable or rejected the credentials.
    #[error("connection error: {0}")]
    Connection(#[from] diesel::ConnectionError),

    /// A statement failed: malformed SQL, missing or duplicate view, or a
    /// row that does not decode into the expected shape.
    #[error("query error: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("missing tables: {}", .0.join(", "))]
    MissingTables(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
