//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod run_command;
