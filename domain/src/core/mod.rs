//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ErrorCode`] — numeric error codes reported by every layer

pub mod error;
