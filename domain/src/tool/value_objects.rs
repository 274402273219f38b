//! Tool domain value objects — process output and locate errors

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Exit code reported when a process could not be spawned at all
///
/// Mirrors the Windows shell's "command not found" errorlevel.
pub const SPAWN_FAILED_EXIT_CODE: i32 = 9009;

/// Exit code reported when a process was killed for exceeding its timeout
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Captured output of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ConsoleOutput {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Output for a process that could not be started
    pub fn spawn_failed(reason: impl Into<String>) -> Self {
        Self::new(SPAWN_FAILED_EXIT_CODE, String::new(), reason)
    }

    /// Output for a process that was killed after `limit`
    pub fn timed_out(limit: Duration) -> Self {
        Self::new(
            TIMEOUT_EXIT_CODE,
            String::new(),
            format!("timed out after {:?}", limit),
        )
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn spawn_did_fail(&self) -> bool {
        self.exit_code == SPAWN_FAILED_EXIT_CODE
    }
}

/// Reason a tool could not be located
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The tool is not installed or not runnable
    #[error("{0}")]
    NotAvailable(String),

    /// The tool's location could not be found
    #[error("{0}")]
    NotFound(String),

    /// A discovery query returned output that could not be understood
    #[error("{0}")]
    InvalidOutput(String),
}
