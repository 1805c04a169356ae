//! Error types for the WEB-SRM signature engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Invalid PEM: {0}")]
    InvalidPem(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Malformed DER signature: {0}")]
    MalformedDer(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}
