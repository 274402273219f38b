//! Tool locator port
//!
//! Tool-specific discovery (version probes, registry queries) lives behind
//! this trait; the [`Toolbox`](crate::tools::Toolbox) only drives it.

use async_trait::async_trait;
use oms_domain::{LogFatal, Logger, ToolError, ToolKind};
use std::path::PathBuf;
use thiserror::Error;

use super::process_runner::ProcessRunner;

/// Why a locate attempt stopped
#[derive(Debug, Error)]
pub enum LocateError {
    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Fatal(#[from] LogFatal),
}

/// Port for locating one kind of external tool
#[async_trait]
pub trait ToolLocator: Send + Sync {
    fn kind(&self) -> ToolKind;

    /// Display name used in bootstrap output
    fn name(&self) -> &str {
        self.kind().name()
    }

    /// Find the tool's invocable path
    ///
    /// Called at most once per process. Allowed to block on subprocesses.
    async fn locate(
        &self,
        runner: &dyn ProcessRunner,
        log: &Logger,
    ) -> Result<PathBuf, LocateError>;
}
