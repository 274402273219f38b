//! Logging infrastructure — console output for the user-facing logger.
//!
//! Provides [`ConsoleSink`], a terminal writer that implements the
//! [`LogSink`](oms_domain::LogSink) trait.

mod console_sink;

pub use console_sink::{ConsoleSink, format_line};
