//! Handler for the `cleanup` command.

use crate::adapter::inbound::cli::output;
use crate::application::ReportingService;
use crate::error::Result;
use crate::port::ReportStore;

/// Drop helper views left behind by an interrupted report run.
pub fn execute<S: ReportStore>(service: &ReportingService<S>) -> Result<()> {
    let dropped = service.cleanup()?;
    output::dropped_views(&dropped);
    Ok(())
}
