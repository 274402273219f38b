//! Tool domain module
//!
//! A *tool* wraps an external executable (git, MSBuild). It is located once
//! during bootstrap and invoked any number of times afterwards.
//!
//! ```text
//! ┌──────────────┐  locate  ┌──────────────┐  invoke  ┌───────────────┐
//! │ ToolHandle   │─────────▶│ ToolHandle   │─────────▶│ ConsoleOutput │
//! │ (Unresolved) │          │ (Ready+path) │          │ (exit/out/err)│
//! └──────────────┘          └──────────────┘          └───────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`ToolKind`] — which tool a handle refers to
//! - [`ToolHandle`] — lifecycle state plus the resolved path
//! - [`ConsoleOutput`] — captured result of one invocation
//! - [`ToolError`] — why locating a tool failed

pub mod entities;
pub mod value_objects;

pub use entities::{ToolHandle, ToolKind, ToolState};
pub use value_objects::{ConsoleOutput, SPAWN_FAILED_EXIT_CODE, TIMEOUT_EXIT_CODE, ToolError};
