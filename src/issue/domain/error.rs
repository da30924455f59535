//! Error types for issue domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain issue values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IssueDomainError {
    /// A required field was absent or blank.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    /// The priority value is not one of the supported levels.
    #[error("unknown issue priority: {0}")]
    InvalidPriority(String),
}
