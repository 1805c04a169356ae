//! Error types for WEB-SRM canonicalization

use thiserror::Error;

/// Errors that can occur during canonicalization or hashing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    #[error("non-integer numeric value '{0}' in payload - monetary amounts must be integer cents")]
    NonIntegerValue(String),

    #[error("JSON serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialization(err.to_string())
    }
}
