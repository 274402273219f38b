//! Console log configuration (`[log]` section)

use oms_domain::LogLevel;
use serde::{Deserialize, Serialize};

/// Raw log configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Lowest level written to the console
    pub level: LogLevel,
}
