//! Error types for concur-map
//!
//! This module defines the error types used throughout concur-map.

use thiserror::Error;

/// The main error type for concur-map operations
///
/// Set operations (`insert` / `delete` / `contains`) never return this
/// type; they answer "did the set change?" with a `bool`. `Error` exists
/// for the driver boundary, where malformed run parameters need to be
/// reported and the process exited non-zero.
#[derive(Error, Debug)]
pub enum Error {
    /// A driver argument failed validation (wrong count, bad percentages, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// A specialized Result type for concur-map operations
pub type Result<T> = std::result::Result<T, Error>;
