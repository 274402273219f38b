//! Hierarchical logging
//!
//! User-facing output goes through a [`Logger`]: lines are filtered by a
//! [`LogLevel`] threshold, prefixed with `[Level][category]` and indented
//! per logger depth before reaching a [`LogSink`].
//!
//! ```text
//! [Info][system]      > Loading tools...
//! [Verbose][tools]    >     Locating tool: git
//! [Info][tool-git]    >         Found git, version: `2.43.0`
//! ```

pub mod level;
pub mod logger;
pub mod sink;

pub use level::LogLevel;
pub use logger::{DEFAULT_INDENT, LogFatal, Logger};
pub use sink::{LogLine, LogSink, MemorySink, NullSink, PREFIX_WIDTH};
