//! Error types for the signature chain.

use thiserror::Error;
use websrm_canonical::CanonicalError;
use websrm_crypto::CryptoError;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Private key is not PEM-shaped")]
    MalformedPrivateKey,

    #[error("Invalid preceding signature: {0}")]
    InvalidPrecedSignature(String),

    #[error("Broken chain at link {index}: {reason}")]
    BrokenChain { index: usize, reason: String },

    #[error("Canonicalization error: {0}")]
    Canonical(#[from] CanonicalError),

    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
}
