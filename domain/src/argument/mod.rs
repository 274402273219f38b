//! Command argument parsing
//!
//! Everything after the command name on the command line is parsed into an
//! [`ArgumentStore`](store::ArgumentStore). Commands bind their declared
//! parameters from it by name.

pub mod store;

pub use store::{ArgumentError, ArgumentStore};
