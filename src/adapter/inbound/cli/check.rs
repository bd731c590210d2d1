//! Handler for the `check` command.

use crate::adapter::inbound::cli::output;
use crate::application::ReportingService;
use crate::error::{Error, Result};
use crate::port::ReportStore;

/// Verify the connection, the source tables and that no helper view is left
/// over from an earlier run.
pub fn execute<S: ReportStore>(service: &ReportingService<S>) -> Result<()> {
    output::target(&service.store().target());

    let health = service.check()?;
    output::status(true, "Connected");
    output::tables(&health);
    output::leftover_views(&health);

    if !health.missing_tables.is_empty() {
        return Err(Error::MissingTables(health.missing_tables));
    }

    if health.is_ready() {
        output::status(true, "Ready to report");
    }
    Ok(())
}
