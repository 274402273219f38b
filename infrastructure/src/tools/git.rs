//! Git locator
//!
//! Probes `git --version` and resolves the executable's full path.

use async_trait::async_trait;
use oms_application::{LocateError, ProcessRunner, ToolLocator};
use oms_domain::{Logger, ToolError, ToolKind};
use regex::Regex;
use std::path::PathBuf;
use tracing::debug;

const CATEGORY: &str = "tool-git";

/// Locates `git`, either at a configured path or on `PATH`
#[derive(Debug, Clone, Default)]
pub struct GitLocator {
    path: Option<PathBuf>,
}

impl GitLocator {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn program(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from("git"))
    }
}

/// Extract the version from `git version X` output
pub fn parse_version(output: &str) -> Option<String> {
    let re = Regex::new(r"(?m)^git version (\S+)").ok()?;
    re.captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[async_trait]
impl ToolLocator for GitLocator {
    fn kind(&self) -> ToolKind {
        ToolKind::Git
    }

    async fn locate(
        &self,
        runner: &dyn ProcessRunner,
        log: &Logger,
    ) -> Result<PathBuf, LocateError> {
        let program = self.program();
        let output = runner.run(&program, &["--version".to_string()], None).await;

        if !output.success() {
            debug!(
                exit_code = output.exit_code,
                stderr = %output.stderr.trim(),
                "git --version failed"
            );
            return Err(ToolError::NotAvailable("git must be in system path".to_string()).into());
        }

        let version = parse_version(&output.stdout).unwrap_or_else(|| "unknown".to_string());
        log.info(CATEGORY, format!("Found git, version: `{}`", version))?;

        if self.path.is_some() {
            return Ok(program);
        }
        Ok(which::which(&program).unwrap_or(program))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::scripted::ScriptedRunner;
    use oms_domain::{ConsoleOutput, LogLevel, MemorySink};
    use std::sync::Arc;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("git version 2.43.0\n").as_deref(), Some("2.43.0"));
        assert_eq!(
            parse_version("git version 2.41.0.windows.1\r\n").as_deref(),
            Some("2.41.0.windows.1")
        );
        assert_eq!(parse_version("something else"), None);
        assert_eq!(parse_version(""), None);
    }

    #[tokio::test]
    async fn test_locate_logs_version() {
        let runner = ScriptedRunner::new(ConsoleOutput::new(0, "git version 2.43.0\n", ""));
        let sink = Arc::new(MemorySink::new());
        let log = Logger::new(sink.clone(), LogLevel::Debug);

        let path = GitLocator::new(Some(PathBuf::from("/opt/git/bin/git")))
            .locate(&runner, &log)
            .await
            .unwrap();

        assert_eq!(path, PathBuf::from("/opt/git/bin/git"));
        assert!(sink.contains("Found git, version: `2.43.0`"));
        assert_eq!(
            runner.programs(),
            vec![PathBuf::from("/opt/git/bin/git")]
        );
    }

    #[tokio::test]
    async fn test_locate_unknown_version() {
        let runner = ScriptedRunner::new(ConsoleOutput::new(0, "hub 2.14\n", ""));
        let sink = Arc::new(MemorySink::new());
        let log = Logger::new(sink.clone(), LogLevel::Debug);

        GitLocator::new(Some(PathBuf::from("git")))
            .locate(&runner, &log)
            .await
            .unwrap();

        assert!(sink.contains("Found git, version: `unknown`"));
    }

    #[tokio::test]
    async fn test_locate_not_on_path() {
        let runner = ScriptedRunner::new(ConsoleOutput::spawn_failed("not found"));

        let err = GitLocator::default()
            .locate(&runner, &Logger::discard())
            .await
            .unwrap_err();

        match err {
            LocateError::Tool(ToolError::NotAvailable(reason)) => {
                assert_eq!(reason, "git must be in system path");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
