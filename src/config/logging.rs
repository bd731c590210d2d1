//! Logging configuration and initialization.

use std::io::IsTerminal;

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Log formats accepted in `[logging] format`.
pub const FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr; stdout carries the reports only.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_ansi(ansi_enabled(&std::io::stderr()))
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

/// Colour codes only make sense on a terminal.
fn ansi_enabled(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
