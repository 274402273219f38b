//! Subprocess runner backed by `tokio::process`

use async_trait::async_trait;
use oms_application::ProcessRunner;
use oms_domain::ConsoleOutput;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs external programs, capturing stdout and stderr
///
/// Never fails: a program that cannot be started yields
/// [`ConsoleOutput::spawn_failed`], and one that outlives the optional
/// timeout is killed and yields [`ConsoleOutput::timed_out`].
#[derive(Debug, Clone, Default)]
pub struct SystemProcessRunner {
    timeout: Option<Duration>,
}

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, program: &Path, args: &[String], cwd: Option<&Path>) -> ConsoleOutput {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        debug!(program = %program.display(), ?args, ?cwd, "Spawning process");

        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, cmd.output()).await {
                Ok(result) => result,
                Err(_) => {
                    // Dropping the future kills the child
                    warn!(
                        program = %program.display(),
                        timeout = ?limit,
                        "Process timed out"
                    );
                    return ConsoleOutput::timed_out(limit);
                }
            },
            None => cmd.output().await,
        };

        match result {
            Ok(output) => {
                let exit_code = output.status.code().unwrap_or(-1);
                debug!(program = %program.display(), exit_code, "Process exited");
                ConsoleOutput::new(
                    exit_code,
                    String::from_utf8_lossy(&output.stdout),
                    String::from_utf8_lossy(&output.stderr),
                )
            }
            Err(e) => {
                debug!(program = %program.display(), error = %e, "Failed to spawn process");
                ConsoleOutput::spawn_failed(format!("Failed to start {}: {}", program.display(), e))
            }
        }
    }
}
