//! SHA256 hashing for WEB-SRM documents

use crate::canonical::to_canonical_json;
use crate::error::CanonicalError;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Hash raw bytes with SHA256
///
/// Returns a 64-character lowercase hex string.
///
/// # Example
///
/// ```rust
/// use websrm_canonical::hash_bytes;
///
/// let hash = hash_bytes(b"{\"a\":1}");
/// assert_eq!(hash.len(), 64);
/// assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();

    hex_encode(&result)
}

/// Hash a string with SHA256
///
/// The string is treated as UTF-8 bytes.
pub fn hash_string(s: &str) -> String {
    hash_bytes(s.as_bytes())
}

/// Canonicalize and hash a serializable value
///
/// This is the digest stored alongside each chain record and embedded in the
/// canonical base string as the body hash.
///
/// # Errors
///
/// Returns `CanonicalError` if canonicalization fails (e.g., floats detected).
///
/// # Example
///
/// ```rust
/// use websrm_canonical::hash_canonical;
///
/// let value = serde_json::json!({"b": 1, "a": 2});
/// let hash = hash_canonical(&value).unwrap();
///
/// // Same logical value with different key order produces same hash
/// let value2 = serde_json::json!({"a": 2, "b": 1});
/// let hash2 = hash_canonical(&value2).unwrap();
///
/// assert_eq!(hash, hash2);
/// ```
pub fn hash_canonical<T: Serialize>(value: &T) -> Result<String, CanonicalError> {
    let canonical = to_canonical_json(value)?;
    Ok(hash_bytes(&canonical))
}

/// Verify that a hash matches the expected value
pub fn verify_hash(data: &[u8], expected_hash: &str) -> bool {
    let computed = hash_bytes(data);
    constant_time_compare(&computed, expected_hash)
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}

/// Convert bytes to lowercase hex string
fn hex_encode(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        write!(hex, "{:02x}", byte).unwrap();
    }
    hex
}

/// Validate a SHA256 hash string format
///
/// Returns `true` if the string is a valid 64-character hex string.
pub fn is_valid_sha256(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}
