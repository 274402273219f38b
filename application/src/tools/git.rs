//! Git client over a located `git` handle

use oms_domain::{ConsoleOutput, LogFatal, Logger, ToolHandle, ToolKind};

use super::report_failure;
use super::toolbox::Toolbox;

const CATEGORY: &str = "tool-git";

/// Typed operations on the located git executable
pub struct Git<'a> {
    toolbox: &'a Toolbox,
    handle: &'a ToolHandle,
}

impl<'a> Git<'a> {
    /// `None` if git was not part of the bootstrap list
    pub fn from_toolbox(toolbox: &'a Toolbox) -> Option<Self> {
        let handle = toolbox.get(ToolKind::Git)?;
        Some(Self { toolbox, handle })
    }

    /// `git clone -- <from> <to>`
    ///
    /// The `--` keeps a source or target starting with `-` from being read
    /// as an option.
    ///
    /// Failure output is logged at `Error` and returned to the caller, which
    /// decides how to report it.
    pub async fn clone_repo(
        &self,
        from: &str,
        to: &str,
        log: &Logger,
    ) -> Result<ConsoleOutput, LogFatal> {
        log.info(CATEGORY, format!("Cloning... `{}` -> `{}`", from, to))?;

        let args = vec![
            "clone".to_string(),
            "--".to_string(),
            from.to_string(),
            to.to_string(),
        ];
        let output = self.toolbox.invoke(self.handle, &args, None).await;

        if !output.success() {
            report_failure(log, CATEGORY, &output)?;
        }
        Ok(output)
    }
}
