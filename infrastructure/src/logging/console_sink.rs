//! Console sink for the user-facing [`Logger`](oms_domain::Logger).
//!
//! Writes each line as `[Level][category]<pad>> <indent>message`, coloured
//! by level when colour is enabled.

use colored::Colorize;
use oms_domain::{LogLevel, LogLine, LogSink};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use tracing::warn;

/// Sink writing rendered lines to a terminal (stdout by default)
pub struct ConsoleSink<W: Write + Send = Stdout> {
    writer: Mutex<W>,
    color: bool,
}

impl ConsoleSink<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W, color: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Render a line, optionally coloured by level
pub fn format_line(line: &LogLine, color: bool) -> String {
    let rendered = line.render();
    if !color {
        return rendered;
    }

    match line.level {
        LogLevel::Error | LogLevel::Fatal => rendered.red().to_string(),
        LogLevel::Warning => rendered.yellow().to_string(),
        LogLevel::Debug | LogLevel::Verbose => rendered.dimmed().to_string(),
        LogLevel::Info | LogLevel::None => rendered,
    }
}

impl<W: Write + Send> LogSink for ConsoleSink<W> {
    fn write(&self, line: &LogLine) {
        let text = format_line(line, self.color);
        let mut writer = match self.writer.lock() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
            warn!("Failed to write log line: {}", e);
        }
    }
}
