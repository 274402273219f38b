//! Tools configuration from TOML (`[tools]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [tools]
//! load = ["git", "msbuild"]
//! timeout_seconds = 600
//!
//! [tools.git]
//! path = "/usr/local/bin/git"
//!
//! [tools.msbuild]
//! path = "C:/Program Files/Microsoft Visual Studio/2022/Community/MSBuild/Current/Bin/MSBuild.exe"
//! ```

use oms_domain::ToolKind;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::ConfigValidationError;

/// Tools located at startup when `tools.load` is not set
pub fn default_tools() -> Vec<ToolKind> {
    if cfg!(windows) {
        vec![ToolKind::Git, ToolKind::MsBuild]
    } else {
        vec![ToolKind::Git]
    }
}

/// Per-tool override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolPathConfig {
    /// Executable to use instead of discovering one
    pub path: Option<PathBuf>,
}

/// Raw tools configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Tools to locate, in order (platform default when unset)
    pub load: Option<Vec<String>>,
    /// Kill tool processes that run longer than this
    pub timeout_seconds: Option<u64>,
    pub git: FileToolPathConfig,
    pub msbuild: FileToolPathConfig,
}

impl FileToolsConfig {
    /// Parse `load` into tool kinds
    pub fn tool_kinds(&self) -> Result<Vec<ToolKind>, ConfigValidationError> {
        match &self.load {
            None => Ok(default_tools()),
            Some(names) => names
                .iter()
                .map(|name| {
                    name.parse::<ToolKind>()
                        .map_err(|_| ConfigValidationError::UnknownTool(name.clone()))
                })
                .collect(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn path_for(&self, kind: ToolKind) -> Option<PathBuf> {
        match kind {
            ToolKind::Git => self.git.path.clone(),
            ToolKind::MsBuild => self.msbuild.path.clone(),
        }
    }
}
