//! Log sinks
//!
//! A [`LogSink`] receives lines that already passed the logger's threshold.
//! The console sink lives in the infrastructure layer; the sinks here have
//! no I/O.

use std::sync::Mutex;

use super::level::LogLevel;

/// Width the `[Level][category]` prefix is padded to
pub const PREFIX_WIDTH: usize = 20;

/// A single line ready to be emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: LogLevel,
    pub category: String,
    pub indent: usize,
    pub message: String,
}

impl LogLine {
    /// The `[Level][category]` prefix, unpadded
    pub fn prefix(&self) -> String {
        format!("[{}][{}]", self.level, self.category)
    }

    /// Render as `[Level][category]<pad>> <indent>message`
    pub fn render(&self) -> String {
        format!(
            "{:<width$}> {}{}",
            self.prefix(),
            " ".repeat(self.indent),
            self.message,
            width = PREFIX_WIDTH
        )
    }
}

/// Destination for emitted log lines
pub trait LogSink: Send + Sync {
    fn write(&self, line: &LogLine);
}

/// Sink that drops every line
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn write(&self, _line: &LogLine) {}
}

/// Sink that keeps rendered lines in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the rendered lines written so far
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|l| l.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn write(&self, line: &LogLine) {
        let rendered = line.render();
        match self.lines.lock() {
            Ok(mut lines) => lines.push(rendered),
            Err(poisoned) => poisoned.into_inner().push(rendered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(indent: usize) -> LogLine {
        LogLine {
            level: LogLevel::Info,
            category: "system".to_string(),
            indent,
            message: "Loading system...".to_string(),
        }
    }

    #[test]
    fn test_render_pads_prefix() {
        assert_eq!(line(0).render(), "[Info][system]      > Loading system...");
    }

    #[test]
    fn test_render_long_prefix_is_not_truncated() {
        let line = LogLine {
            level: LogLevel::Verbose,
            category: "tool-msbuild".to_string(),
            indent: 0,
            message: "x".to_string(),
        };
        assert_eq!(line.render(), "[Verbose][tool-msbuild]> x");
    }

    #[test]
    fn test_render_indent_goes_after_marker() {
        assert_eq!(
            line(4).render(),
            "[Info][system]      >     Loading system..."
        );
    }

    #[test]
    fn test_memory_sink_captures() {
        let sink = MemorySink::new();
        sink.write(&line(0));
        assert_eq!(sink.lines().len(), 1);
        assert!(sink.contains("Loading system"));
    }
}
