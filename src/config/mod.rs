//! Configuration loading, validation and logging setup.

pub mod database;
pub mod logging;
pub mod settings;

pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use settings::Config;
