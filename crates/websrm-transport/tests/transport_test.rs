//! Integration tests covering the full header-signing path with real keys.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use p256::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use pretty_assertions::assert_eq;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use websrm_core::{ComplianceProfile, Environment};
use websrm_crypto::verify;
use websrm_transport::{
    build_canonical_base_string, build_official_headers, build_official_qr, QrOptions,
    TransmissionIds, TransportError, HDR_CASESSAI, HDR_EMPRCERTIFTRANSM, HDR_ENVIRN,
    HDR_SIGNATRANSM,
};

fn test_keypair() -> (String, String) {
    let secret = p256::SecretKey::random(&mut OsRng);
    let private_pem = secret.to_pkcs8_pem(LineEnding::LF).unwrap().to_string();
    let public_pem = secret
        .public_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap();
    (private_pem, public_pem)
}

// The fingerprint covers the DER bytes between the PEM markers; a synthetic
// body is enough to exercise it.
fn test_certificate() -> String {
    let der: Vec<u8> = (0u8..160).collect();
    format!(
        "-----BEGIN CERTIFICATE-----\n{}\n-----END CERTIFICATE-----\n",
        BASE64.encode(&der)
    )
}

fn test_profile(environment: Environment, test_case: Option<&str>) -> ComplianceProfile {
    let (private_pem, _) = test_keypair();
    ComplianceProfile {
        device_id: Some("0000-0000".to_string()),
        software_id: "SEV-1".to_string(),
        software_version_id: "VER-1".to_string(),
        certification_code: "CERT-123".to_string(),
        partner_id: "PARTN-9".to_string(),
        software_version: "1.4.2".to_string(),
        partner_version: "2.0.0".to_string(),
        environment,
        test_case: test_case.map(str::to_owned),
        private_key_pem: private_pem,
        certificate_pem: test_certificate(),
    }
}

fn base_string_for(profile: &ComplianceProfile, body: &str) -> String {
    let mut ids = TransmissionIds::from_profile(profile);
    ids.test_case = websrm_transport::resolve_test_case(profile);
    build_canonical_base_string("POST", "/transaction", body, &ids).unwrap()
}

#[test]
fn test_transport_signature_verifies_over_base_string() {
    let secret = p256::SecretKey::random(&mut OsRng);
    let private_pem = secret.to_pkcs8_pem(LineEnding::LF).unwrap().to_string();
    let public_pem = secret
        .public_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap();

    let mut profile = test_profile(Environment::Prod, None);
    profile.private_key_pem = private_pem;

    let base = base_string_for(&profile, r#"{"idTrans":"ORD-001","montTot":3068}"#);
    let headers = build_official_headers(&profile, &base).unwrap();

    let signature = &headers[HDR_SIGNATRANSM];
    assert_eq!(signature.len(), 88);
    assert!(verify(&base, signature, &public_pem).unwrap());
    assert!(!verify("POST\n/other\nhash\nlist", signature, &public_pem).unwrap());
}

#[test]
fn test_fingerprint_is_sha1_of_certificate_body() {
    let profile = test_profile(Environment::Prod, None);
    let base = base_string_for(&profile, "{}");
    let headers = build_official_headers(&profile, &base).unwrap();

    let fingerprint = &headers[HDR_EMPRCERTIFTRANSM];
    assert_eq!(fingerprint.len(), 40);
    assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_header_map_carries_all_identifiers() {
    let profile = test_profile(Environment::Essai, Some("004.001"));
    let base = base_string_for(&profile, "{}");
    let headers = build_official_headers(&profile, &base).unwrap();

    assert_eq!(headers["IDAPPRL"], "0000-0000");
    assert_eq!(headers["IDSEV"], "SEV-1");
    assert_eq!(headers["IDVERSI"], "VER-1");
    assert_eq!(headers["CODCERTIF"], "CERT-123");
    assert_eq!(headers["IDPARTN"], "PARTN-9");
    assert_eq!(headers["VERSI"], "1.4.2");
    assert_eq!(headers["VERSIPARN"], "2.0.0");
    assert_eq!(headers[HDR_ENVIRN], "ESSAI");
    assert_eq!(headers[HDR_CASESSAI], "004.001");
}

#[test]
fn test_case_header_per_environment() {
    let prod = test_profile(Environment::Prod, Some("004.001"));
    let base = base_string_for(&prod, "{}");
    let headers = build_official_headers(&prod, &base).unwrap();
    assert!(!headers.contains_key(HDR_CASESSAI));

    let essai_blank = test_profile(Environment::Essai, None);
    let base = base_string_for(&essai_blank, "{}");
    let headers = build_official_headers(&essai_blank, &base).unwrap();
    assert!(!headers.contains_key(HDR_CASESSAI));

    let dev_blank = test_profile(Environment::Dev, None);
    let base = base_string_for(&dev_blank, "{}");
    let headers = build_official_headers(&dev_blank, &base).unwrap();
    assert_eq!(headers[HDR_CASESSAI], "000.000");
}

#[test]
fn test_malformed_base_string_rejected() {
    let profile = test_profile(Environment::Prod, None);

    let err = build_official_headers(&profile, "POST\n/transaction\nhash").unwrap_err();
    assert!(matches!(err, TransportError::MalformedBaseString(_)));

    let err = build_official_headers(&profile, "POST\n/transaction\nhash\nlist\n").unwrap_err();
    assert!(matches!(err, TransportError::MalformedBaseString(_)));
}

#[test]
fn test_invalid_profile_rejected_before_signing() {
    let mut profile = test_profile(Environment::Prod, None);
    profile.partner_id = String::new();

    let base = "POST\n/transaction\nhash\nlist";
    let err = build_official_headers(&profile, base).unwrap_err();
    assert!(matches!(err, TransportError::Validation(_)));
}

#[test]
fn test_base_string_hash_matches_body() {
    let profile = test_profile(Environment::Prod, None);
    let body = r#"{"idTrans":"ORD-001","montTot":3068}"#;
    let base = base_string_for(&profile, body);

    let expected = hex::encode(Sha256::digest(body.as_bytes()));
    assert_eq!(base.split('\n').nth(2).unwrap(), expected);
}

#[test]
fn test_qr_uses_chain_signature_unchanged() {
    let (private_pem, public_pem) = test_keypair();
    let signature = websrm_crypto::sign("receipt body", &private_pem).unwrap();

    let payload = serde_json::json!({
        "idTrans": "ORD-001",
        "datTrans": "2024-03-15T14:30:00Z",
        "montTot": 3068,
    });
    let options = QrOptions::new("https://verify.example.test/qr");
    let url = build_official_qr(&payload, &signature, &options).unwrap();

    let sig_param = url.split("sig=").nth(1).unwrap();
    let mut standard: String = sig_param
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }
    assert_eq!(standard, signature);
    assert!(verify("receipt body", &standard, &public_pem).unwrap());
}
