//! MSBuild locator
//!
//! Reads the MSBuild tools directory from the Windows registry:
//!
//! ```text
//! HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\MSBuild\ToolsVersions\4.0
//!     MSBuildToolsPath    REG_SZ    C:\Windows\Microsoft.NET\Framework64\v4.0.30319\
//! ```

use async_trait::async_trait;
use oms_application::{LocateError, ProcessRunner, ToolLocator};
use oms_domain::{Logger, ToolError, ToolKind};
use regex::Regex;
use std::path::{Path, PathBuf};

const CATEGORY: &str = "tool-msbuild";
const REG_LOCATION: &str = r"HKEY_LOCAL_MACHINE\SOFTWARE\Microsoft\MSBuild\ToolsVersions\4.0";
const REG_KEY: &str = "MSBuildToolsPath";

/// Locates `msbuild`, either at a configured path or via `reg query`
#[derive(Debug, Clone, Default)]
pub struct MsBuildLocator {
    path: Option<PathBuf>,
}

impl MsBuildLocator {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn query_args() -> Vec<String> {
        vec![
            "query".to_string(),
            REG_LOCATION.to_string(),
            "/v".to_string(),
            REG_KEY.to_string(),
        ]
    }
}

/// Find the executable path in `reg query` output
///
/// The value line must directly follow the key line.
pub fn parse_registry_output(output: &str) -> Result<String, ToolError> {
    let value_line = Regex::new(&format!(r"^\s+{}\s+REG_SZ\s+(.+)$", REG_KEY))
        .map_err(|e| ToolError::InvalidOutput(e.to_string()))?;

    let lines: Vec<&str> = output.lines().collect();
    for pair in lines.windows(2) {
        if !pair[0].starts_with(REG_LOCATION) {
            continue;
        }

        let caps = value_line.captures(pair[1]).ok_or_else(|| {
            ToolError::InvalidOutput(format!("invalid registry key: `{}`", pair[1]))
        })?;
        let dir = caps[1].trim_end();

        let separator = if dir.ends_with('\\') || dir.ends_with('/') {
            ""
        } else {
            "\\"
        };
        return Ok(format!("{}{}msbuild", dir, separator));
    }

    Err(ToolError::NotFound("failed to locate reg value".to_string()))
}

#[async_trait]
impl ToolLocator for MsBuildLocator {
    fn kind(&self) -> ToolKind {
        ToolKind::MsBuild
    }

    async fn locate(
        &self,
        runner: &dyn ProcessRunner,
        log: &Logger,
    ) -> Result<PathBuf, LocateError> {
        if let Some(path) = &self.path {
            if !path.exists() {
                return Err(ToolError::NotFound(format!(
                    "configured MSBuild path `{}` does not exist",
                    path.display()
                ))
                .into());
            }
            log.info(CATEGORY, format!("Using msbuild, path: `{}`", path.display()))?;
            return Ok(path.clone());
        }

        let output = runner.run(Path::new("reg"), &Self::query_args(), None).await;
        if !output.success() {
            return Err(ToolError::NotAvailable(format!(
                "failed to query registry at `{}`, key `{}`",
                REG_LOCATION, REG_KEY
            ))
            .into());
        }

        let path = parse_registry_output(&output.stdout)?;
        log.info(CATEGORY, format!("Found msbuild, path: `{}`", path))?;
        Ok(PathBuf::from(path))
    }
}
