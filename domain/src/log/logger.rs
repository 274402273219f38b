//! Hierarchical logger
//!
//! A [`Logger`] is a cheap, immutable handle: deriving a child with
//! [`Logger::indent`] shares the sink and threshold and only widens the
//! indentation, so nested output needs no depth counter at call sites.

use std::sync::Arc;
use thiserror::Error;

use super::level::LogLevel;
use super::sink::{LogLine, LogSink, NullSink};
use crate::core::error::ErrorCode;

/// Indentation added by [`Logger::nested`]
pub const DEFAULT_INDENT: usize = 4;

/// Abort signal raised by a fatal log call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{category}]{message}")]
pub struct LogFatal {
    pub category: String,
    pub message: String,
}

impl LogFatal {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::LogFatal
    }
}

/// Leveled, indentable line logger
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    threshold: LogLevel,
    indent: usize,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>, threshold: LogLevel) -> Self {
        Self {
            sink,
            threshold,
            indent: 0,
        }
    }

    /// Logger that emits nothing (fatal calls still abort)
    pub fn discard() -> Self {
        Self::new(Arc::new(NullSink), LogLevel::None)
    }

    /// Derive a child logger indented by `extra` more columns
    pub fn indent(&self, extra: usize) -> Logger {
        Self {
            sink: Arc::clone(&self.sink),
            threshold: self.threshold,
            indent: self.indent + extra,
        }
    }

    /// Shorthand for `indent(DEFAULT_INDENT)`
    pub fn nested(&self) -> Logger {
        self.indent(DEFAULT_INDENT)
    }

    /// Same sink and indentation, different threshold
    pub fn with_threshold(&self, threshold: LogLevel) -> Logger {
        Self {
            sink: Arc::clone(&self.sink),
            threshold,
            indent: self.indent,
        }
    }

    pub fn indent_width(&self) -> usize {
        self.indent
    }

    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    /// Write a line at `level`
    ///
    /// Lines below the threshold are dropped. A `Fatal` (or higher) line is
    /// never emitted; it returns [`LogFatal`] so the caller aborts. Fatal
    /// cannot be silenced by the threshold.
    pub fn write_line(
        &self,
        level: LogLevel,
        category: &str,
        message: impl AsRef<str>,
    ) -> Result<(), LogFatal> {
        if level < self.threshold.min(LogLevel::Fatal) {
            return Ok(());
        }

        if level >= LogLevel::Fatal {
            return Err(LogFatal {
                category: category.to_string(),
                message: message.as_ref().to_string(),
            });
        }

        self.sink.write(&LogLine {
            level,
            category: category.to_string(),
            indent: self.indent,
            message: message.as_ref().to_string(),
        });
        Ok(())
    }

    pub fn debug(&self, category: &str, message: impl AsRef<str>) -> Result<(), LogFatal> {
        self.write_line(LogLevel::Debug, category, message)
    }

    pub fn verbose(&self, category: &str, message: impl AsRef<str>) -> Result<(), LogFatal> {
        self.write_line(LogLevel::Verbose, category, message)
    }

    pub fn info(&self, category: &str, message: impl AsRef<str>) -> Result<(), LogFatal> {
        self.write_line(LogLevel::Info, category, message)
    }

    pub fn warning(&self, category: &str, message: impl AsRef<str>) -> Result<(), LogFatal> {
        self.write_line(LogLevel::Warning, category, message)
    }

    pub fn error(&self, category: &str, message: impl AsRef<str>) -> Result<(), LogFatal> {
        self.write_line(LogLevel::Error, category, message)
    }

    /// Always returns `Err`
    pub fn fatal(&self, category: &str, message: impl AsRef<str>) -> Result<(), LogFatal> {
        self.write_line(LogLevel::Fatal, category, message)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("indent", &self.indent)
            .finish_non_exhaustive()
    }
}
