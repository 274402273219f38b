//! Domain layer for oni-mod-setup
//!
//! This crate contains the value types every other layer speaks in.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Arguments**: `key` / `key=value` tokens parsed into an [`ArgumentStore`]
//! - **Commands**: named steps declaring string parameters ([`ParamSpec`]) and
//!   producing a [`StepResult`]
//! - **Tools**: external executables tracked through a [`ToolHandle`]
//! - **Logging**: the hierarchical [`Logger`]

pub mod argument;
pub mod command;
pub mod core;
pub mod log;
pub mod tool;

// Re-export commonly used types
pub use argument::{ArgumentError, ArgumentStore};
pub use command::{INTERNAL_ERROR_CODE, ParamKind, ParamSpec, StepResult};
pub use crate::core::error::ErrorCode;
pub use log::{DEFAULT_INDENT, LogFatal, LogLevel, LogLine, LogSink, Logger, MemorySink, NullSink};
pub use tool::{
    ConsoleOutput, SPAWN_FAILED_EXIT_CODE, TIMEOUT_EXIT_CODE, ToolError, ToolHandle, ToolKind,
    ToolState,
};
