//! Tool lifecycle and typed tool clients
//!
//! - [`Toolbox`] — locate-once registry built during bootstrap
//! - [`Git`], [`MsBuild`] — helpers that build argument lists and log
//!   failures for the commands that use them

mod git;
mod msbuild;
mod toolbox;

pub use git::Git;
pub use msbuild::MsBuild;
pub use toolbox::Toolbox;

use oms_domain::{ConsoleOutput, LogFatal, Logger};

/// Log a failed invocation's captured output at `Error`
fn report_failure(log: &Logger, category: &str, output: &ConsoleOutput) -> Result<(), LogFatal> {
    log.error(category, "FAILED!")?;
    if !output.stdout.trim().is_empty() {
        log.error(category, output.stdout.trim_end())?;
    }
    if !output.stderr.trim().is_empty() {
        log.error(category, "STDERR")?;
        log.error(category, output.stderr.trim_end())?;
    }
    Ok(())
}
