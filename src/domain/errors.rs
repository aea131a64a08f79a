//! Domain validation errors.

use std::fmt;

/// Errors that can occur while parsing domain names from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided search mode name is not known.
    UnknownMode(String),

    /// The provided gram type code is not known.
    UnknownGramType(String),

    /// The provided operator name is not known.
    UnknownOperator(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMode(mode) => write!(
                f,
                "Unknown search mode: {} (expected fullTextSearch or autoComplete)",
                mode
            ),
            Self::UnknownGramType(code) => {
                write!(f, "Unknown gram type: {} (expected pre, bi or tri)", code)
            }
            Self::UnknownOperator(op) => write!(f, "Unknown match operator: {}", op),
        }
    }
}

impl std::error::Error for ValidationError {}
