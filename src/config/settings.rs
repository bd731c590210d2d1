//! Application configuration loading and validation.
//!
//! Every setting has a default, so the configuration file is optional. The
//! database URL can be overridden with the `DATABASE_URL` environment
//! variable.
//!
//! ```toml
//! [database]
//! url = "postgres://vagrant@localhost/news"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use serde::Deserialize;
use std::path::Path;

use super::database::DatabaseConfig;
use super::logging::{LoggingConfig, FORMATS};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `[database] url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// File read when no path is given explicitly.
    pub const DEFAULT_PATH: &'static str = "newslog.toml";

    /// Parse and validate configuration from TOML content.
    ///
    /// Environment overrides are not applied here.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, the TOML is malformed or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let mut config = Self::parse_toml(&content)?;
        config.apply_env()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise [`Self::DEFAULT_PATH`] when it exists,
    /// otherwise the defaults. Environment overrides are applied in all cases.
    ///
    /// # Errors
    /// Fails if an explicitly given file cannot be read, or on any parse or
    /// validation error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(Self::DEFAULT_PATH).is_file() => Self::load(Self::DEFAULT_PATH),
            None => {
                let mut config = Self::default();
                config.apply_env()?;
                Ok(config)
            }
        }
    }

    /// Replace the database URL when `url` is set, then re-validate.
    ///
    /// # Errors
    /// Fails if the resulting configuration is invalid.
    pub fn override_database_url(&mut self, url: Option<String>) -> Result<()> {
        if let Some(url) = url {
            self.database.url = url;
        }
        self.validate()
    }

    fn apply_env(&mut self) -> Result<()> {
        self.override_database_url(std::env::var(DATABASE_URL_ENV).ok())
    }

    fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "database.url",
            }
            .into());
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        if !FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {}", FORMATS.join(", ")),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
