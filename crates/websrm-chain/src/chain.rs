//! Chain record computation and verification.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use websrm_canonical::{hash_string, to_canonical_json_string};
use websrm_crypto::{sign, verify, P1363_SIGNATURE_LEN, SIGNATURE_BASE64_LEN};

use crate::error::ChainError;

/// The `preced` placeholder for the first link of a chain: 88 `=`
/// characters. Not a real signature - it cannot Base64-decode to 64 bytes
/// of signature material, which keeps it visually and programmatically
/// distinguishable from one.
pub fn empty_preced() -> String {
    "=".repeat(SIGNATURE_BASE64_LEN)
}

/// One transaction's position in the append-only ledger.
///
/// Immutable once computed. The external persistence layer stores it keyed
/// by device and serves `actu` back as the next transaction's
/// `previous_actu`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureChainLink {
    /// Previous transaction's `actu`, or the 88-`=` placeholder
    pub preced: String,

    /// This transaction's signature, 88 Base64 characters
    pub actu: String,

    /// The exact canonical string that was signed
    pub canonical: String,

    /// SHA-256 of `canonical`, 64 lowercase hex characters. Informational;
    /// the signature covers the canonical string itself, never this digest.
    pub sha256_hex: String,
}

/// Compute the signed chain record for one transaction payload.
///
/// A malformed-but-present `previous_actu` is a hard error, never a silent
/// restart of the chain: falling back to first-in-chain would mask a
/// corrupted ledger.
///
/// # Errors
///
/// - `ChainError::MalformedPrivateKey` if the key lacks PEM markers
/// - `ChainError::InvalidPrecedSignature` if `previous_actu` is not exactly
///   88 characters of Base64 decoding to 64 bytes
/// - canonicalization and signing errors from the underlying layers
pub fn compute_body_signatures(
    payload: &Value,
    private_key_pem: &str,
    previous_actu: Option<&str>,
) -> Result<SignatureChainLink, ChainError> {
    if !private_key_pem.contains("-----BEGIN") || !private_key_pem.contains("PRIVATE KEY-----") {
        return Err(ChainError::MalformedPrivateKey);
    }
    if let Some(prev) = previous_actu {
        validate_preced(prev)?;
    }

    let canonical = to_canonical_json_string(payload)?;
    let sha256_hex = hash_string(&canonical);
    let actu = sign(&canonical, private_key_pem)?;
    let preced = previous_actu.map(str::to_owned).unwrap_or_else(empty_preced);

    Ok(SignatureChainLink {
        preced,
        actu,
        canonical,
        sha256_hex,
    })
}

fn validate_preced(prev: &str) -> Result<(), ChainError> {
    if prev.len() != SIGNATURE_BASE64_LEN {
        return Err(ChainError::InvalidPrecedSignature(format!(
            "expected {} characters, got {}",
            SIGNATURE_BASE64_LEN,
            prev.len()
        )));
    }
    match BASE64.decode(prev) {
        Ok(bytes) if bytes.len() == P1363_SIGNATURE_LEN => Ok(()),
        Ok(bytes) => Err(ChainError::InvalidPrecedSignature(format!(
            "decoded to {} bytes, expected {}",
            bytes.len(),
            P1363_SIGNATURE_LEN
        ))),
        Err(e) => Err(ChainError::InvalidPrecedSignature(format!(
            "invalid base64: {}",
            e
        ))),
    }
}

/// Check the structural linkage of a stored chain: the first link carries
/// the placeholder, every later link's `preced` equals its predecessor's
/// `actu`.
pub fn verify_linkage(links: &[SignatureChainLink]) -> Result<(), ChainError> {
    for (index, link) in links.iter().enumerate() {
        if index == 0 {
            if link.preced != empty_preced() {
                return Err(ChainError::BrokenChain {
                    index,
                    reason: "first link does not carry the empty-preced placeholder".to_string(),
                });
            }
        } else if link.preced != links[index - 1].actu {
            return Err(ChainError::BrokenChain {
                index,
                reason: "preced does not match the previous link's actu".to_string(),
            });
        }
    }
    Ok(())
}

/// Full audit check of a stored chain: linkage plus, for every link, that
/// `sha256_hex` matches the canonical string and that `actu` verifies
/// against the device public key.
///
/// Returns `Ok(false)` for signature or digest mismatches (expected,
/// branchable outcomes); structural linkage breaks are errors.
pub fn verify_links(
    links: &[SignatureChainLink],
    public_key_pem: &str,
) -> Result<bool, ChainError> {
    verify_linkage(links)?;

    for link in links {
        if hash_string(&link.canonical) != link.sha256_hex {
            return Ok(false);
        }
        if !verify(&link.canonical, &link.actu, public_key_pem)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_preced_shape() {
        let placeholder = empty_preced();
        assert_eq!(placeholder.len(), 88);
        assert!(placeholder.chars().all(|c| c == '='));
        // The placeholder must never decode to signature material
        assert!(BASE64.decode(&placeholder).is_err());
    }

    #[test]
    fn test_preced_wrong_length_rejected() {
        let err = validate_preced("short").unwrap_err();
        assert!(err.to_string().contains("88"));
    }

    #[test]
    fn test_preced_placeholder_is_not_a_valid_previous_actu() {
        // 88 chars but not decodable: a caller must not thread the
        // placeholder through as if it were a real prior signature
        assert!(validate_preced(&empty_preced()).is_err());
    }

    #[test]
    fn test_preced_valid_base64_wrong_decoded_length_rejected() {
        // 88 chars of base64 that decode to 66 bytes, not 64
        let prev = BASE64.encode([0u8; 66]);
        assert_eq!(prev.len(), 88);
        let err = validate_preced(&prev).unwrap_err();
        assert!(err.to_string().contains("66"));
    }

    #[test]
    fn test_malformed_key_rejected_before_signing() {
        let result = compute_body_signatures(&json!({"a": 1}), "not a key", None);
        assert!(matches!(result, Err(ChainError::MalformedPrivateKey)));
    }
}
