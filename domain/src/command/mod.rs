//! Command domain types
//!
//! - [`ParamSpec`] — a declared command parameter
//! - [`StepResult`] — the outcome of one command execution

pub mod param;
pub mod result;

pub use param::{ParamKind, ParamSpec};
pub use result::{INTERNAL_ERROR_CODE, StepResult};
