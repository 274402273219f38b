//! Infrastructure layer for oni-mod-setup
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod process;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLogConfig, FileToolPathConfig,
    FileToolsConfig,
};
pub use logging::ConsoleSink;
pub use process::SystemProcessRunner;
pub use tools::{GitLocator, MsBuildLocator, locator_for, locators_from_config};
