//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Report popular articles, authors and error-heavy days from the news database
#[derive(Parser, Debug)]
#[command(name = "newslog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file [default: newslog.toml when present]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Database URL, overrides the config file and DATABASE_URL
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands. Without one, `report` runs.
#[derive(Subcommand, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Commands {
    /// Create the helper views, print the reports and drop the views
    #[default]
    Report,
    /// Check the connection, source tables and leftover views
    Check,
    /// Drop helper views left behind by an interrupted run
    Cleanup,
}

impl Cli {
    /// Load configuration and apply the command-line overrides.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_or_default(self.config.as_deref())?;
        config.override_database_url(self.database_url.clone())?;
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.json_logs {
            config.logging.format = "json".into();
        }
        Ok(config)
    }
}
