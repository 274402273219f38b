//! Setup-phase errors
//!
//! Everything that can stop a run before the requested command executes.
//! Failures *during* execution are not errors: commands report them as a
//! non-zero [`StepResult`](oms_domain::StepResult).

use oms_domain::{ArgumentError, ErrorCode, LogFatal, ParamKind, ToolError};
use thiserror::Error;

/// Errors raised while bootstrapping tools or resolving a command
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Command not found `{name}`")]
    CommandNotFound { name: String },

    #[error("No entry point for command `{name}`")]
    CommandNoEntry { name: String },

    #[error("Command `{command}` declares `{param}` as {kind}, only string params are supported")]
    CommandBadParam {
        command: String,
        param: String,
        kind: ParamKind,
    },

    #[error("Command `{command}` requires `{param}` parameter")]
    CommandMissingParam { command: String, param: String },

    #[error("Failed to prepare command `{command}`: {reason}")]
    CommandConstructFailed { command: String, reason: String },

    #[error("Command `{name}` is already registered")]
    DuplicateCommand { name: String },

    #[error("Failed to locate `{tool}`")]
    ToolMissing {
        tool: String,
        #[source]
        source: ToolError,
    },

    #[error("Fatal: {0}")]
    LogFatal(#[from] LogFatal),

    #[error(transparent)]
    Arguments(#[from] ArgumentError),
}

impl SetupError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SetupError::CommandNotFound { .. } => ErrorCode::CommandNotFound,
            SetupError::CommandNoEntry { .. } => ErrorCode::CommandNoEntry,
            SetupError::CommandBadParam { .. } => ErrorCode::CommandBadParam,
            SetupError::CommandMissingParam { .. } => ErrorCode::CommandMissingParam,
            SetupError::CommandConstructFailed { .. } => ErrorCode::CommandConstructFailed,
            SetupError::DuplicateCommand { .. } => ErrorCode::CommandGeneric,
            SetupError::ToolMissing { .. } => ErrorCode::ToolMissing,
            SetupError::LogFatal(fatal) => fatal.code(),
            SetupError::Arguments(err) => err.code(),
        }
    }

    /// The error followed by each of its causes, outermost first
    pub fn chain(&self) -> Vec<String> {
        let mut messages = vec![self.to_string()];
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            messages.push(cause.to_string());
            source = cause.source();
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_param_names_command_and_param() {
        let err = SetupError::CommandMissingParam {
            command: "clone".to_string(),
            param: "source".to_string(),
        };
        assert_eq!(err.to_string(), "Command `clone` requires `source` parameter");
        assert_eq!(err.code(), ErrorCode::CommandMissingParam);
    }

    #[test]
    fn test_tool_missing_keeps_cause() {
        let err = SetupError::ToolMissing {
            tool: "git".to_string(),
            source: ToolError::NotAvailable("git must be in system path".to_string()),
        };
        assert_eq!(
            err.chain(),
            vec![
                "Failed to locate `git`".to_string(),
                "git must be in system path".to_string(),
            ]
        );
        assert_eq!(err.code(), ErrorCode::ToolMissing);
    }

    #[test]
    fn test_wrapped_codes() {
        let fatal: SetupError = LogFatal {
            category: "system".to_string(),
            message: "abort".to_string(),
        }
        .into();
        assert_eq!(fatal.code(), ErrorCode::LogFatal);

        let args: SetupError = ArgumentError::DuplicateKey {
            key: "target".to_string(),
        }
        .into();
        assert_eq!(args.code(), ErrorCode::ArgumentDuplicate);
    }
}
