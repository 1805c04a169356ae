//! Canonical base string for request authentication.
//!
//! Exactly four `\n`-joined segments, no trailing newline:
//! `POST`, the URL path, the lowercase-hex SHA-256 of the canonical body,
//! and the semicolon-joined `KEY=value` header list in its fixed order.

use websrm_canonical::hash_string;

use crate::error::TransportError;
use crate::headers::{
    HDR_CASESSAI, HDR_CODCERTIF, HDR_ENVIRN, HDR_IDAPPRL, HDR_IDPARTN, HDR_IDSEV, HDR_IDVERSI,
    HDR_VERSI, HDR_VERSIPARN,
};

/// Identifier values for one transmission's header list.
///
/// The string layer is deliberately untyped; environment validation lives
/// with [`crate::build_official_headers`].
#[derive(Debug, Clone, Default)]
pub struct TransmissionIds {
    /// `IDAPPRL`, included only when non-empty
    pub device_id: Option<String>,

    /// `IDSEV`
    pub software_id: String,

    /// `IDVERSI`
    pub software_version_id: String,

    /// `CODCERTIF`
    pub certification_code: String,

    /// `IDPARTN`
    pub partner_id: String,

    /// `VERSI`
    pub software_version: String,

    /// `VERSIPARN`
    pub partner_version: String,

    /// `ENVIRN`
    pub environment: String,

    /// `CASESSAI`, appended last only when non-blank
    pub test_case: Option<String>,
}

impl TransmissionIds {
    /// Copy the identifier fields out of a compliance profile. The
    /// test-case policy (per-environment) is applied by the official
    /// header builder, not here.
    pub fn from_profile(profile: &websrm_core::ComplianceProfile) -> Self {
        Self {
            device_id: profile.device_id.clone(),
            software_id: profile.software_id.clone(),
            software_version_id: profile.software_version_id.clone(),
            certification_code: profile.certification_code.clone(),
            partner_id: profile.partner_id.clone(),
            software_version: profile.software_version.clone(),
            partner_version: profile.partner_version.clone(),
            environment: profile.environment.as_str().to_string(),
            test_case: profile.test_case.clone(),
        }
    }
}

/// Build the canonical base string for one outgoing request.
///
/// # Errors
///
/// - `TransportError::UnsupportedMethod` for anything but POST
///   (case-insensitive input, uppercase output)
/// - `TransportError::InvalidPath` when the path does not start with `/`
/// - `TransportError::MissingHeader` / `NonAsciiHeader` naming the
///   offending header
///
/// # Example
///
/// ```ignore
/// let base = build_canonical_base_string("post", "/transaction", body, &ids)?;
/// assert_eq!(base.matches('\n').count(), 3);
/// ```
pub fn build_canonical_base_string(
    method: &str,
    path: &str,
    canonical_body: &str,
    ids: &TransmissionIds,
) -> Result<String, TransportError> {
    if !method.eq_ignore_ascii_case("POST") {
        return Err(TransportError::UnsupportedMethod(method.to_string()));
    }
    if !path.starts_with('/') {
        return Err(TransportError::InvalidPath(path.to_string()));
    }

    let body_hash = hash_string(canonical_body);
    let header_list = build_header_list(ids)?;

    Ok(format!("POST\n{}\n{}\n{}", path, body_hash, header_list))
}

/// Assemble the `KEY=value;...` header list in the fixed wire order:
/// optional `IDAPPRL` first, the seven required identifiers, optional
/// `CASESSAI` last.
fn build_header_list(ids: &TransmissionIds) -> Result<String, TransportError> {
    let mut pairs: Vec<String> = Vec::with_capacity(9);

    if let Some(device_id) = &ids.device_id {
        if !device_id.is_empty() {
            if !device_id.is_ascii() {
                return Err(TransportError::NonAsciiHeader(HDR_IDAPPRL));
            }
            pairs.push(format!("{}={}", HDR_IDAPPRL, device_id));
        }
    }

    let required: [(&'static str, &str); 7] = [
        (HDR_IDSEV, &ids.software_id),
        (HDR_IDVERSI, &ids.software_version_id),
        (HDR_CODCERTIF, &ids.certification_code),
        (HDR_IDPARTN, &ids.partner_id),
        (HDR_VERSI, &ids.software_version),
        (HDR_VERSIPARN, &ids.partner_version),
        (HDR_ENVIRN, &ids.environment),
    ];
    for (key, value) in required {
        if value.is_empty() {
            return Err(TransportError::MissingHeader(key));
        }
        if !value.is_ascii() {
            return Err(TransportError::NonAsciiHeader(key));
        }
        pairs.push(format!("{}={}", key, value));
    }

    if let Some(test_case) = &ids.test_case {
        if !test_case.trim().is_empty() {
            if !test_case.is_ascii() {
                return Err(TransportError::NonAsciiHeader(HDR_CASESSAI));
            }
            pairs.push(format!("{}={}", HDR_CASESSAI, test_case));
        }
    }

    Ok(pairs.join(";"))
}
