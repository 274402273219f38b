//! Process runner port
//!
//! Defines how the application layer runs external executables.

use async_trait::async_trait;
use oms_domain::ConsoleOutput;
use std::path::Path;

/// Port for running an external executable to completion
///
/// Implementations capture stdout and stderr and block the caller until the
/// child exits. They never fail: a process that cannot be spawned is
/// reported with [`SPAWN_FAILED_EXIT_CODE`](oms_domain::SPAWN_FAILED_EXIT_CODE)
/// so callers always get the same result shape.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &Path, args: &[String], cwd: Option<&Path>) -> ConsoleOutput;
}
