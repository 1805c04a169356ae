//! The assembled output of one signing run.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;
use websrm_chain::SignatureChainLink;
use websrm_core::ProfileSummary;

/// Everything produced for one transaction: the signed payload, the
/// transmission headers, the receipt QR URL, the chain record, and a
/// key-free summary of the profile it was signed under.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WebSrmRecord {
    /// Internal identifier for this signing run, not a wire field
    pub record_id: Uuid,

    /// Final transaction payload with the `signa` block injected
    pub payload: Value,

    /// Canonical JSON of `payload`, the exact request body bytes
    pub body: String,

    /// Transmission headers including `SIGNATRANSM` and `EMPRCERTIFTRANSM`
    pub headers: HashMap<String, String>,

    /// Receipt verification URL
    pub qr_url: String,

    /// This transaction's position in the signature chain
    pub chain_link: SignatureChainLink,

    /// Profile the record was signed under, without key material
    pub profile: ProfileSummary,
}
