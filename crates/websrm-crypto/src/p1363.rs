//! DER ↔ IEEE P1363 signature encoding adapters.
//!
//! A P-256 ECDSA signature is a pair of scalars `(r, s)`. DER encodes them
//! as `SEQUENCE { INTEGER r, INTEGER s }` with minimal-length, sign-aware
//! integers; P1363 encodes them as a fixed 64-byte `R‖S` with each half
//! exactly 32 bytes, big-endian, left-zero-padded. This module converts
//! between the two. It is pure byte manipulation, no cryptography.

use crate::error::CryptoError;

/// Fixed P1363 signature length for P-256: two 32-byte scalars.
pub const P1363_SIGNATURE_LEN: usize = 64;

/// Base64 length of a 64-byte signature.
pub const SIGNATURE_BASE64_LEN: usize = 88;

const SCALAR_LEN: usize = 32;

/// Convert a DER-encoded ECDSA P-256 signature to fixed 64-byte P1363.
///
/// DER integers are minimal-length: short scalars arrive with fewer than
/// 32 bytes and must be left-padded back, and a scalar whose high bit is
/// set carries a leading zero byte for sign disambiguation that must be
/// stripped before padding.
pub fn der_to_p1363(der: &[u8]) -> Result<[u8; P1363_SIGNATURE_LEN], CryptoError> {
    if der.first() != Some(&0x30) {
        return Err(CryptoError::MalformedDer(
            "missing SEQUENCE tag".to_string(),
        ));
    }

    let mut pos = 1;
    let seq_len = read_length(der, &mut pos)?;
    if pos + seq_len != der.len() {
        return Err(CryptoError::MalformedDer(
            "SEQUENCE length does not match input".to_string(),
        ));
    }

    let mut out = [0u8; P1363_SIGNATURE_LEN];
    read_integer_into(der, &mut pos, &mut out[..SCALAR_LEN])?;
    read_integer_into(der, &mut pos, &mut out[SCALAR_LEN..])?;

    if pos != der.len() {
        return Err(CryptoError::MalformedDer(
            "trailing bytes after S integer".to_string(),
        ));
    }

    Ok(out)
}

/// Convert a fixed 64-byte P1363 signature to DER.
///
/// Leading zero bytes of each scalar are stripped down to the minimal
/// encoding, and a zero byte is re-added when the high bit of the first
/// remaining byte is set, so the DER integer is not misread as negative.
pub fn p1363_to_der(sig: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if sig.len() != P1363_SIGNATURE_LEN {
        return Err(CryptoError::InvalidSignature(format!(
            "expected {} bytes, got {}",
            P1363_SIGNATURE_LEN,
            sig.len()
        )));
    }

    let r = encode_integer(&sig[..SCALAR_LEN]);
    let s = encode_integer(&sig[SCALAR_LEN..]);

    // Content is at most 2 + 33 + 2 + 33 = 70 bytes, so the short length
    // form always suffices for P-256.
    let content_len = r.len() + s.len();
    let mut out = Vec::with_capacity(content_len + 2);
    out.push(0x30);
    out.push(content_len as u8);
    out.extend_from_slice(&r);
    out.extend_from_slice(&s);
    Ok(out)
}

/// Read a DER length octet (short form, or single-byte long form).
fn read_length(der: &[u8], pos: &mut usize) -> Result<usize, CryptoError> {
    let first = *der
        .get(*pos)
        .ok_or_else(|| CryptoError::MalformedDer("truncated length".to_string()))?;
    *pos += 1;

    match first {
        n if n < 0x80 => Ok(n as usize),
        0x81 => {
            let n = *der
                .get(*pos)
                .ok_or_else(|| CryptoError::MalformedDer("truncated length".to_string()))?;
            *pos += 1;
            Ok(n as usize)
        }
        _ => Err(CryptoError::MalformedDer(
            "unsupported DER length form".to_string(),
        )),
    }
}

/// Read one DER INTEGER and left-pad it into a 32-byte destination.
fn read_integer_into(der: &[u8], pos: &mut usize, dest: &mut [u8]) -> Result<(), CryptoError> {
    if der.get(*pos) != Some(&0x02) {
        return Err(CryptoError::MalformedDer(
            "missing INTEGER tag".to_string(),
        ));
    }
    *pos += 1;

    let len = read_length(der, pos)?;
    if len == 0 {
        return Err(CryptoError::MalformedDer("empty INTEGER".to_string()));
    }
    let end = *pos + len;
    let bytes = der
        .get(*pos..end)
        .ok_or_else(|| CryptoError::MalformedDer("truncated INTEGER".to_string()))?;
    *pos = end;

    // Strip sign-disambiguation / redundant leading zeros.
    let mut scalar = bytes;
    while scalar.len() > 1 && scalar[0] == 0 {
        scalar = &scalar[1..];
    }
    if scalar.len() > SCALAR_LEN {
        return Err(CryptoError::MalformedDer(format!(
            "INTEGER wider than {} bytes",
            SCALAR_LEN
        )));
    }

    dest[SCALAR_LEN - scalar.len()..].copy_from_slice(scalar);
    Ok(())
}

/// Encode a 32-byte big-endian scalar as a DER INTEGER.
fn encode_integer(scalar: &[u8]) -> Vec<u8> {
    let mut bytes = scalar;
    while bytes.len() > 1 && bytes[0] == 0 {
        bytes = &bytes[1..];
    }

    let needs_sign_byte = bytes[0] & 0x80 != 0;
    let len = bytes.len() + usize::from(needs_sign_byte);

    let mut out = Vec::with_capacity(len + 2);
    out.push(0x02);
    out.push(len as u8);
    if needs_sign_byte {
        out.push(0x00);
    }
    out.extend_from_slice(bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p1363_with(r_first: u8, s_first: u8) -> [u8; 64] {
        let mut sig = [0u8; 64];
        sig[0] = r_first;
        sig[31] = 0x01;
        sig[32] = s_first;
        sig[63] = 0x02;
        sig
    }

    #[test]
    fn test_high_bit_scalar_gets_sign_byte() {
        let sig = p1363_with(0x80, 0x01);
        let der = p1363_to_der(&sig).unwrap();

        // r: tag, len 33, 0x00 pad, then 32 bytes starting 0x80
        assert_eq!(der[2], 0x02);
        assert_eq!(der[3], 33);
        assert_eq!(der[4], 0x00);
        assert_eq!(der[5], 0x80);
    }

    #[test]
    fn test_short_scalar_stripped() {
        // r is 0x00...01 -> minimal DER integer is a single byte
        let mut sig = [0u8; 64];
        sig[31] = 0x01;
        sig[63] = 0x02;

        let der = p1363_to_der(&sig).unwrap();
        assert_eq!(&der[2..5], &[0x02, 0x01, 0x01]);
    }

    #[test]
    fn test_round_trip_identity() {
        let sig = p1363_with(0x7f, 0xff);
        let der = p1363_to_der(&sig).unwrap();
        let back = der_to_p1363(&der).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(p1363_to_der(&[0u8; 63]).is_err());
        assert!(p1363_to_der(&[0u8; 65]).is_err());
    }

    #[test]
    fn test_missing_sequence_tag_rejected() {
        let err = der_to_p1363(&[0x31, 0x00]).unwrap_err();
        assert!(err.to_string().contains("SEQUENCE"));
    }

    #[test]
    fn test_truncated_der_rejected() {
        let sig = p1363_with(0x10, 0x20);
        let der = p1363_to_der(&sig).unwrap();
        assert!(der_to_p1363(&der[..der.len() - 1]).is_err());
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let sig = p1363_with(0x10, 0x20);
        let mut der = p1363_to_der(&sig).unwrap();
        der.push(0x00);
        // Outer length no longer matches
        assert!(der_to_p1363(&der).is_err());
    }

    #[test]
    fn test_zero_scalar_round_trips() {
        let sig = [0u8; 64];
        let der = p1363_to_der(&sig).unwrap();
        assert_eq!(der_to_p1363(&der).unwrap(), sig);
    }
}
