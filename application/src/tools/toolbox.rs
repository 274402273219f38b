//! Toolbox
//!
//! The [`Toolbox`] holds one [`ToolHandle`] per tool kind. It is built by
//! [`Toolbox::load_all`] during bootstrap and never changes afterwards:
//! commands only look handles up and invoke them.
//!
//! # Bootstrap
//!
//! Locators are run **in order** and the first failure stops the bootstrap.
//! Later locators are never attempted, so a run that gets past bootstrap can
//! rely on every requested tool being `Ready`. A handle that fails moves to
//! `Failed` and is dropped.
//!
//! ```text
//! [Verbose][tools]    >     Locating tool: git
//! [Info][tool-git]    >         Found git, version: `2.43.0`
//! [Verbose][tools]    >     Locating tool: git success!
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use oms_domain::{ConsoleOutput, Logger, ToolHandle, ToolKind};
use tracing::{debug, warn};

use crate::error::SetupError;
use crate::ports::process_runner::ProcessRunner;
use crate::ports::tool_locator::{LocateError, ToolLocator};

/// Read-only registry of located tools
pub struct Toolbox {
    handles: BTreeMap<ToolKind, ToolHandle>,
    runner: Arc<dyn ProcessRunner>,
}

impl Toolbox {
    /// A toolbox with no tools (used when a command needs none)
    pub fn empty(runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            handles: BTreeMap::new(),
            runner,
        }
    }

    /// Locate every tool in `locators`, in order, failing fast
    pub async fn load_all(
        runner: Arc<dyn ProcessRunner>,
        log: &Logger,
        locators: &[Box<dyn ToolLocator>],
    ) -> Result<Self, SetupError> {
        let mut handles = BTreeMap::new();

        for locator in locators {
            let kind = locator.kind();
            if handles.contains_key(&kind) {
                debug!(tool = %kind, "Tool already located, skipping duplicate entry");
                continue;
            }

            let handle = ToolHandle::unresolved(kind);
            log.verbose("tools", format!("Locating tool: {}", locator.name()))?;

            let handle = handle.resolving();
            let path = match locator.locate(runner.as_ref(), &log.nested()).await {
                Ok(path) => path,
                Err(LocateError::Tool(cause)) => {
                    let handle = handle.failed();
                    warn!(
                        tool = %kind,
                        state = ?handle.state(),
                        error = %cause,
                        "Tool bootstrap failed"
                    );
                    log.verbose("tools", format!("Locating tool: {} failed!", locator.name()))?;
                    return Err(SetupError::ToolMissing {
                        tool: locator.name().to_string(),
                        source: cause,
                    });
                }
                Err(LocateError::Fatal(fatal)) => return Err(fatal.into()),
            };

            debug!(tool = %kind, path = %path.display(), "Tool ready");
            handles.insert(kind, handle.ready(path));
            log.verbose("tools", format!("Locating tool: {} success!", locator.name()))?;
        }

        Ok(Self { handles, runner })
    }

    /// Look up a located tool
    ///
    /// Returns `None` only if `kind` was not part of the bootstrap list.
    pub fn get(&self, kind: ToolKind) -> Option<&ToolHandle> {
        self.handles.get(&kind)
    }

    pub fn contains(&self, kind: ToolKind) -> bool {
        self.handles.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Run a located tool and capture its output
    ///
    /// Non-zero exit codes are returned as-is. A handle without a resolved
    /// path is treated like an executable that cannot be spawned.
    pub async fn invoke(
        &self,
        handle: &ToolHandle,
        args: &[String],
        cwd: Option<&Path>,
    ) -> ConsoleOutput {
        let Some(path) = handle.path().filter(|_| handle.is_ready()) else {
            return ConsoleOutput::spawn_failed(format!("{} has not been located", handle.name()));
        };

        debug!(tool = %handle.kind(), ?args, "Invoking tool");
        self.runner.run(path, args, cwd).await
    }
}

impl std::fmt::Debug for Toolbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toolbox")
            .field("handles", &self.handles)
            .finish_non_exhaustive()
    }
}
