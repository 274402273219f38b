//! `clone` — clone a git repository

use async_trait::async_trait;
use oms_domain::{LogFatal, Logger, ParamSpec, StepResult};
use serde_json::json;

use super::failure_message;
use crate::dispatch::{Command, CommandDescriptor, bind_values};
use crate::system::System;
use crate::tools::Git;

pub const NAME: &str = "clone";

pub fn descriptor() -> CommandDescriptor {
    CommandDescriptor::new(NAME, "Clone a git repository")
        .with_param(ParamSpec::required("source", "Repository URL or path"))
        .with_param(ParamSpec::required("target", "Directory to clone into"))
        .with_entry(|values| {
            let [source, target] = bind_values(values)?;
            Ok(Box::new(CloneCommand::new(source, target)?) as Box<dyn Command>)
        })
}

#[derive(Debug)]
pub struct CloneCommand {
    source: String,
    target: String,
}

impl CloneCommand {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Result<Self, String> {
        let source = source.into();
        let target = target.into();
        if source.trim().is_empty() {
            return Err("`source` must not be empty".to_string());
        }
        if target.trim().is_empty() {
            return Err("`target` must not be empty".to_string());
        }
        Ok(Self { source, target })
    }
}

#[async_trait]
impl Command for CloneCommand {
    fn name(&self) -> &str {
        NAME
    }

    async fn execute(&self, system: &System, log: &Logger) -> Result<StepResult, LogFatal> {
        let Some(git) = Git::from_toolbox(system.toolbox()) else {
            return Ok(StepResult::failure(1, "git is not loaded"));
        };

        let output = git.clone_repo(&self.source, &self.target, &log.nested()).await?;
        if !output.success() {
            return Ok(StepResult::failure(1, failure_message("git clone failed", &output)));
        }

        Ok(StepResult::success().with_payload(json!({
            "source": self.source,
            "target": self.target,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::tool_locator::ToolLocator;
    use crate::test_support::{FakeLocator, FakeRunner};
    use crate::tools::Toolbox;
    use oms_domain::{ArgumentStore, ConsoleOutput, ToolKind};
    use std::sync::Arc;

    async fn system_with_git(runner: Arc<FakeRunner>) -> System {
        let locators: Vec<Box<dyn ToolLocator>> =
            vec![Box::new(FakeLocator::found(ToolKind::Git, "git"))];
        let toolbox = Toolbox::load_all(runner, &Logger::discard(), &locators)
            .await
            .unwrap();
        System::new(ArgumentStore::new(), toolbox)
    }

    #[test]
    fn test_rejects_empty_parameters() {
        assert!(CloneCommand::new("", "/tmp/out").is_err());
        assert!(CloneCommand::new("https://example/repo.git", " ").is_err());
    }

    #[tokio::test]
    async fn test_clone_success() {
        let system = system_with_git(Arc::new(FakeRunner::succeeding())).await;
        let command = CloneCommand::new("https://example/repo.git", "/tmp/out").unwrap();

        let result = command.execute(&system, &Logger::discard()).await.unwrap();

        assert_eq!(result.code, 0);
        let payload = result.payload.unwrap();
        assert_eq!(payload["target"], "/tmp/out");
    }

    #[tokio::test]
    async fn test_clone_failure_reports_stderr() {
        let runner = Arc::new(FakeRunner::new(ConsoleOutput::new(
            1,
            "",
            "fatal: repository not found\n",
        )));
        let system = system_with_git(runner).await;
        let command = CloneCommand::new("https://example/repo.git", "/tmp/out").unwrap();

        let result = command.execute(&system, &Logger::discard()).await.unwrap();

        assert_ne!(result.code, 0);
        assert!(result.message.unwrap().contains("repository not found"));
    }

    #[tokio::test]
    async fn test_clone_without_git_loaded() {
        let system = System::new(
            ArgumentStore::new(),
            Toolbox::empty(Arc::new(FakeRunner::succeeding())),
        );
        let command = CloneCommand::new("a", "b").unwrap();

        let result = command.execute(&system, &Logger::discard()).await.unwrap();

        assert_eq!(result.code, 1);
        assert_eq!(result.message.as_deref(), Some("git is not loaded"));
    }
}
