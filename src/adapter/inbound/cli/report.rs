//! Handler for the `report` command.

use std::io;

use crate::application::ReportingService;
use crate::error::Result;
use crate::port::ReportStore;

/// Print the three reports to stdout.
pub fn execute<S: ReportStore>(service: &ReportingService<S>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    service.run(&mut out)?;
    Ok(())
}
