//! Error types for the transport layer.

use thiserror::Error;
use websrm_core::ValidationError;
use websrm_crypto::CryptoError;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Unsupported HTTP method '{0}': transmissions are always POST")]
    UnsupportedMethod(String),

    #[error("Invalid URL path '{0}': must start with '/'")]
    InvalidPath(String),

    #[error("Missing or empty required header: {0}")]
    MissingHeader(&'static str),

    #[error("Non-ASCII value in header: {0}")]
    NonAsciiHeader(&'static str),

    #[error("Malformed canonical base string: {0}")]
    MalformedBaseString(String),

    #[error("Invalid QR chain signature: {0}")]
    InvalidQrSignature(String),

    #[error("Profile validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
