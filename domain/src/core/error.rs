//! Numeric error codes shared by every layer
//!
//! Codes are grouped by the subsystem that raises them so a code alone is
//! enough to tell where a run stopped:
//!
//! | Range | Subsystem |
//! |-------|-----------|
//! | `100` | Tools (bootstrap) |
//! | `200` | Command dispatch |
//! | `300` | Logging |
//! | `400` | Argument parsing |
//! | `500` | Configuration |

use serde::{Deserialize, Serialize};

/// Stable error code vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ErrorCode {
    Ok = 0,

    ToolGeneric = 100,
    ToolMissing = 101,

    CommandGeneric = 200,
    CommandNotFound = 201,
    CommandNoEntry = 202,
    CommandBadParam = 203,
    CommandMissingParam = 204,
    CommandConstructFailed = 205,

    LogGeneric = 300,
    LogFatal = 301,

    ArgumentGeneric = 400,
    ArgumentDuplicate = 401,

    ConfigInvalid = 500,
}

impl ErrorCode {
    /// Numeric value of the code
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self, self.as_i32())
    }
}
