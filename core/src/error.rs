//! Error types for the spiralsolve-core library.

use thiserror::Error;

use crate::domain::Integer;

/// Result type alias for spiralsolve operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing batches, validating grids, or
/// managing configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The batch declared more cases than the input supplies.
    #[error("Batch declares {declared} cases but only {available} integers follow the count")]
    MalformedCount { declared: Integer, available: usize },

    /// A token could not be parsed as an integer.
    #[error("Token {position} is not an integer: {token:?}")]
    NonIntegerToken { token: String, position: usize },

    /// The case count itself was negative.
    #[error("Case count must not be negative, got {0}")]
    NegativeCount(Integer),

    /// Grid dimensions must both be at least 1.
    #[error("Invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: Integer, cols: Integer },

    /// A direction token other than `U`, `D`, `L` or `R`.
    #[error("Not a direction token: {0:?}")]
    InvalidDirection(String),

    /// Strict parsing found tokens after the last declared case.
    #[error("{count} unexpected trailing token(s) after the last case")]
    TrailingTokens { count: usize },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
