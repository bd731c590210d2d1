//! CLI module graph.

pub mod check;
pub mod cleanup;
pub mod command;
pub mod output;
pub mod report;

use crate::adapter::outbound::postgres::PostgresReportStore;
use crate::application::ReportingService;
use crate::config::Config;
use crate::error::Result;

use command::{Cli, Commands};

/// Dispatch the parsed command against the configured database.
pub fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let service = ReportingService::new(PostgresReportStore::new(config.database.url.clone()));

    match cli.command.unwrap_or_default() {
        Commands::Report => report::execute(&service),
        Commands::Check => check::execute(&service),
        Commands::Cleanup => cleanup::execute(&service),
    }
}
