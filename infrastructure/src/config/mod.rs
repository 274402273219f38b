//! Configuration file loading for oni-mod-setup
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `OMS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./oms.toml` or `./.oms.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/oms/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileLogConfig, FileToolPathConfig, FileToolsConfig,
    default_tools,
};
pub use loader::ConfigLoader;
