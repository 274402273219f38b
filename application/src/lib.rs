//! Application layer for oni-mod-setup
//!
//! This crate contains the command dispatcher, the built-in commands, the
//! tool bootstrap, and the ports the infrastructure layer implements.
//! It depends only on the domain layer.

pub mod commands;
pub mod dispatch;
pub mod error;
pub mod ports;
pub mod system;
pub mod tools;
pub mod use_cases;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use commands::{DEFAULT_COMMAND, builtin_commands};
pub use dispatch::{Command, CommandDescriptor, CommandDispatcher, CommandEntry, bind_values};
pub use error::SetupError;
pub use ports::{
    process_runner::ProcessRunner,
    tool_locator::{LocateError, ToolLocator},
};
pub use system::System;
pub use tools::{Git, MsBuild, Toolbox};
pub use use_cases::run_command::{RunCommandInput, RunCommandUseCase};
