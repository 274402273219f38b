//! Fakes shared by the application tests

use async_trait::async_trait;
use oms_domain::{ConsoleOutput, Logger, ToolError, ToolKind};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::ports::process_runner::ProcessRunner;
use crate::ports::tool_locator::{LocateError, ToolLocator};

/// One recorded call to [`FakeRunner::run`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Runner that replays scripted outputs and records every call
pub struct FakeRunner {
    queued: Mutex<VecDeque<ConsoleOutput>>,
    fallback: ConsoleOutput,
    calls: Mutex<Vec<Invocation>>,
}

impl FakeRunner {
    pub fn new(fallback: ConsoleOutput) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(ConsoleOutput::new(0, "", ""))
    }

    /// Queue an output for the next call; falls back once the queue is empty
    pub fn then(self, output: ConsoleOutput) -> Self {
        self.queued.lock().unwrap().push_back(output);
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for FakeRunner {
    async fn run(&self, program: &Path, args: &[String], cwd: Option<&Path>) -> ConsoleOutput {
        self.calls.lock().unwrap().push(Invocation {
            program: program.to_path_buf(),
            args: args.to_vec(),
            cwd: cwd.map(Path::to_path_buf),
        });
        self.queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

/// Locator with a fixed outcome that counts how often it was asked
pub struct FakeLocator {
    kind: ToolKind,
    outcome: Result<PathBuf, ToolError>,
    attempts: Arc<AtomicUsize>,
}

impl FakeLocator {
    pub fn found(kind: ToolKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            outcome: Ok(path.into()),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn missing(kind: ToolKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            outcome: Err(ToolError::NotAvailable(reason.into())),
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn attempts(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.attempts)
    }
}

#[async_trait]
impl ToolLocator for FakeLocator {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    async fn locate(
        &self,
        _runner: &dyn ProcessRunner,
        log: &Logger,
    ) -> Result<PathBuf, LocateError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        log.debug("tools", format!("fake locate: {}", self.kind))?;
        Ok(self.outcome.clone()?)
    }
}
