//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod log;
mod tools;

pub use log::FileLogConfig;
pub use tools::{FileToolPathConfig, FileToolsConfig, default_tools};

use oms_application::DEFAULT_COMMAND;
use oms_domain::ErrorCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("default_command cannot be empty")]
    EmptyDefaultCommand,

    #[error("tools.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("unknown tool `{0}` in tools.load (expected one of: git, msbuild)")]
    UnknownTool(String),
}

impl ConfigValidationError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConfigInvalid
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Command run when none is given on the command line
    pub default_command: String,
    /// Console log settings
    pub log: FileLogConfig,
    /// Tool bootstrap settings
    pub tools: FileToolsConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            default_command: DEFAULT_COMMAND.to_string(),
            log: FileLogConfig::default(),
            tools: FileToolsConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the configuration, stopping at the first problem
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.default_command.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDefaultCommand);
        }
        if self.tools.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        self.tools.tool_kinds()?;
        Ok(())
    }

    /// Render the effective configuration as TOML (for `--show-config`)
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
