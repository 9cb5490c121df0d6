//! Error types for placement optimization.
//!
//! The optimizer is a pure computation: failures are never transient, so
//! there is no retry machinery. Degenerate inputs and non-viable tunables
//! are rejected before any evaluation work starts.

use std::fmt;

/// Result alias for fallible placement operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An error raised by the placement optimizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input data is degenerate (e.g., an empty worker pool).
    InvalidInput(String),
    /// The tunable parameters cannot produce a viable run
    /// (e.g., a population smaller than the tournament size).
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Error::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            }
        }
    }
}

impl std::error::Error for Error {}
