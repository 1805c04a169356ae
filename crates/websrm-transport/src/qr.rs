//! Receipt verification URL.
//!
//! The printed QR encodes a single URL with a fixed query order
//! (`no`, `dt`, `tot`, `sig`) so the same transaction always produces the
//! same bytes. The chain signature is transcoded from standard Base64 to
//! the URL-safe alphabet with padding stripped.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use websrm_crypto::{P1363_SIGNATURE_LEN, SIGNATURE_BASE64_LEN};

use crate::error::TransportError;

/// RFC 3986 unreserved characters pass through; everything else is
/// percent-encoded.
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Settings for the QR URL builder.
///
/// The verification base URL differs per certification agreement, so there
/// is no default; callers supply it from configuration.
#[derive(Debug, Clone)]
pub struct QrOptions {
    base_url: String,
}

impl QrOptions {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Build the verification URL for a signed transaction payload.
///
/// `payload` is the final (signature-injected) transaction document;
/// `actu_signature` is the current chain signature in standard Base64.
/// Fields absent from the payload yield empty parameter values rather
/// than dropped parameters, so the query shape never varies.
///
/// # Errors
///
/// `TransportError::InvalidQrSignature` when the signature is not an
/// 88-character standard-Base64 encoding of 64 bytes.
pub fn build_official_qr(
    payload: &Value,
    actu_signature: &str,
    options: &QrOptions,
) -> Result<String, TransportError> {
    if actu_signature.len() != SIGNATURE_BASE64_LEN {
        return Err(TransportError::InvalidQrSignature(format!(
            "expected {} characters, found {}",
            SIGNATURE_BASE64_LEN,
            actu_signature.len()
        )));
    }
    let decoded = BASE64
        .decode(actu_signature)
        .map_err(|e| TransportError::InvalidQrSignature(e.to_string()))?;
    if decoded.len() != P1363_SIGNATURE_LEN {
        return Err(TransportError::InvalidQrSignature(format!(
            "decodes to {} bytes, expected {}",
            decoded.len(),
            P1363_SIGNATURE_LEN
        )));
    }

    let transaction_id = string_field(payload, "idTrans");
    let transaction_date = string_field(payload, "datTrans");
    let total = payload
        .get("montTot")
        .and_then(Value::as_i64)
        .map(|v| v.to_string())
        .unwrap_or_default();
    let sig = to_url_safe(actu_signature);

    Ok(format!(
        "{}?no={}&dt={}&tot={}&sig={}",
        options.base_url,
        utf8_percent_encode(&transaction_id, QUERY_ENCODE),
        utf8_percent_encode(&transaction_date, QUERY_ENCODE),
        utf8_percent_encode(&total, QUERY_ENCODE),
        utf8_percent_encode(&sig, QUERY_ENCODE),
    ))
}

fn string_field(payload: &Value, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Standard Base64 to the URL-safe alphabet: `+` becomes `-`, `/` becomes
/// `_`, trailing padding is dropped.
fn to_url_safe(standard: &str) -> String {
    standard
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}
