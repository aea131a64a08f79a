//! Error types for searchable field generation.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by the gram generator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GramError {
    /// Window size other than 2 or 3 was requested
    #[error("Value of n must be either 2 or 3 (got {n})")]
    InvalidArgument { n: usize },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while handling a tool call.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Tool output could not be encoded as JSON
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),

    /// Value exceeds the configured maximum length
    #[error("Value too long: {len} characters (max {max})")]
    ValueTooLong { len: usize, max: usize },

    /// Gram generation failed
    #[error(transparent)]
    Gram(#[from] GramError),
}

/// Convenience type alias for Results with GramError
pub type GramResultOf<T> = Result<T, GramError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with RequestError
pub type RequestResult<T> = Result<T, RequestError>;
