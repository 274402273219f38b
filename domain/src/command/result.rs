//! Step result value object

use serde::{Deserialize, Serialize};

/// Code reported when a run failed before or outside command execution
pub const INTERNAL_ERROR_CODE: i32 = -1;

/// Outcome of one command execution
///
/// `code == 0` is success. Any other code is a failure;
/// [`INTERNAL_ERROR_CODE`] marks a setup failure or an aborted run.
/// `payload` carries structured data for steps that feed other steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl StepResult {
    pub fn new(code: i32) -> Self {
        Self {
            code,
            message: None,
            payload: None,
        }
    }

    pub fn success() -> Self {
        Self::new(0)
    }

    pub fn failure(code: i32, message: impl Into<String>) -> Self {
        Self::new(code).with_message(message)
    }

    /// Result for a run that never reached (or escaped) command execution
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::failure(INTERNAL_ERROR_CODE, message)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    pub fn is_internal_error(&self) -> bool {
        self.code == INTERNAL_ERROR_CODE
    }
}
