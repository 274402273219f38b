//! `build` — build a project with MSBuild
//!
//! MSBuild is located through the Windows registry, so the command only has
//! an entry point on Windows. Elsewhere it is still listed but resolving it
//! reports that it has no entry point.

use async_trait::async_trait;
use oms_domain::{LogFatal, Logger, ParamSpec, StepResult};
use serde_json::json;

use super::failure_message;
use crate::dispatch::{Command, CommandDescriptor, bind_values};
use crate::system::System;
use crate::tools::MsBuild;

pub const NAME: &str = "build";

pub fn descriptor() -> CommandDescriptor {
    let descriptor = CommandDescriptor::new(NAME, "Build a project or solution with MSBuild")
        .with_param(ParamSpec::required("project", "Project or solution file"))
        .with_param(ParamSpec::optional(
            "configuration",
            "Build configuration",
            "Release",
        ))
        .with_param(ParamSpec::optional("target", "MSBuild target", "Build"));

    if cfg!(windows) {
        descriptor.with_entry(|values| {
            let [project, configuration, target] = bind_values(values)?;
            Ok(Box::new(BuildCommand::new(project, configuration, target)?) as Box<dyn Command>)
        })
    } else {
        descriptor
    }
}

#[derive(Debug)]
pub struct BuildCommand {
    project: String,
    configuration: String,
    target: String,
}

impl BuildCommand {
    pub fn new(
        project: impl Into<String>,
        configuration: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self, String> {
        let project = project.into();
        if project.trim().is_empty() {
            return Err("`project` must not be empty".to_string());
        }
        Ok(Self {
            project,
            configuration: configuration.into(),
            target: target.into(),
        })
    }
}

#[async_trait]
impl Command for BuildCommand {
    fn name(&self) -> &str {
        NAME
    }

    async fn execute(&self, system: &System, log: &Logger) -> Result<StepResult, LogFatal> {
        let Some(msbuild) = MsBuild::from_toolbox(system.toolbox()) else {
            return Ok(StepResult::failure(1, "MSBuild is not loaded"));
        };

        let output = msbuild
            .build(
                &self.project,
                &self.configuration,
                &self.target,
                &log.nested(),
            )
            .await?;
        if !output.success() {
            return Ok(StepResult::failure(1, failure_message("msbuild failed", &output)));
        }

        log.info(NAME, format!("Built `{}`", self.project))?;
        Ok(StepResult::success().with_payload(json!({
            "project": self.project,
            "configuration": self.configuration,
        })))
    }
}
