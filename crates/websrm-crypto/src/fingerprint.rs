//! SHA-1 certificate fingerprint.
//!
//! The transmission headers carry a 40-hex-character SHA-1 fingerprint of
//! the raw certificate bytes, which the government endpoint uses to match
//! the transmission to the enrolled device certificate.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use sha1::{Digest, Sha1};

use crate::error::CryptoError;

const CERT_BEGIN: &str = "-----BEGIN CERTIFICATE-----";
const CERT_END: &str = "-----END CERTIFICATE-----";

/// Fingerprint length in hex characters (SHA-1 is 20 bytes).
pub const FINGERPRINT_HEX_LEN: usize = 40;

/// Compute the SHA-1 fingerprint of a PEM certificate.
///
/// Extracts the Base64 body between the PEM markers, decodes it to the raw
/// certificate bytes, and returns the SHA-1 digest as 40 lowercase hex
/// characters.
///
/// # Errors
///
/// Returns `CryptoError::InvalidPem` if either marker is missing or the
/// body is not valid Base64.
pub fn certificate_fingerprint(cert_pem: &str) -> Result<String, CryptoError> {
    let body = pem_body(cert_pem)?;

    let raw = BASE64
        .decode(body.as_bytes())
        .map_err(|e| CryptoError::InvalidPem(format!("certificate body is not base64: {}", e)))?;

    let digest = Sha1::digest(&raw);
    Ok(hex::encode(digest))
}

/// Extract the whitespace-stripped Base64 body between certificate markers.
fn pem_body(cert_pem: &str) -> Result<String, CryptoError> {
    let start = cert_pem
        .find(CERT_BEGIN)
        .ok_or_else(|| CryptoError::InvalidPem("missing BEGIN CERTIFICATE marker".to_string()))?;
    let after_begin = start + CERT_BEGIN.len();

    let end = cert_pem[after_begin..]
        .find(CERT_END)
        .map(|offset| after_begin + offset)
        .ok_or_else(|| CryptoError::InvalidPem("missing END CERTIFICATE marker".to_string()))?;

    Ok(cert_pem[after_begin..end]
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect())
}
