//! MSBuild client over a located `msbuild` handle

use oms_domain::{ConsoleOutput, LogFatal, Logger, ToolHandle, ToolKind};
use std::path::Path;

use super::report_failure;
use super::toolbox::Toolbox;

const CATEGORY: &str = "tool-msbuild";

/// Typed operations on the located MSBuild executable
pub struct MsBuild<'a> {
    toolbox: &'a Toolbox,
    handle: &'a ToolHandle,
}

impl<'a> MsBuild<'a> {
    pub fn from_toolbox(toolbox: &'a Toolbox) -> Option<Self> {
        let handle = toolbox.get(ToolKind::MsBuild)?;
        Some(Self { toolbox, handle })
    }

    /// Build `project` with the given configuration and target
    ///
    /// Runs in the project's directory with only the file name on the command
    /// line, so relative paths inside the project file resolve the same way
    /// they do in an IDE build.
    pub async fn build(
        &self,
        project: &str,
        configuration: &str,
        target: &str,
        log: &Logger,
    ) -> Result<ConsoleOutput, LogFatal> {
        log.info(
            CATEGORY,
            format!("Building `{}` ({}, /t:{})", project, configuration, target),
        )?;

        let path = Path::new(project);
        let cwd = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        let project_arg = match (cwd, path.file_name()) {
            (Some(_), Some(name)) => name.to_string_lossy().into_owned(),
            _ => project.to_string(),
        };

        let args = vec![
            project_arg,
            "/nologo".to_string(),
            format!("/p:Configuration={}", configuration),
            format!("/t:{}", target),
        ];
        let output = self.toolbox.invoke(self.handle, &args, cwd).await;

        if !output.success() {
            report_failure(log, CATEGORY, &output)?;
        }
        Ok(output)
    }
}
