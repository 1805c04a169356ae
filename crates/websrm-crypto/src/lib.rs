//! # WEB-SRM Crypto
//!
//! ECDSA P-256 signature engine for the WEB-SRM transaction pipeline.
//!
//! The government wire format requires signatures in IEEE P1363 form
//! (fixed 64-byte R‖S, Base64-encoded to exactly 88 characters), while the
//! platform's native elliptic-curve primitive produces variable-length
//! ASN.1 DER. This crate provides:
//!
//! - [`sign`] / [`verify`]: SHA-256/ECDSA-P-256 over UTF-8 base strings,
//!   in and out of the 88-character Base64 P1363 encoding
//! - [`der_to_p1363`] / [`p1363_to_der`]: the DER adapters as a dedicated,
//!   separately-tested module of pure byte manipulation
//! - [`certificate_fingerprint`]: SHA-1 fingerprint of a PEM certificate,
//!   40 lowercase hex characters
//!
//! ECDSA signing uses a random nonce: two signatures of the same base
//! string with the same key will generally differ, but both verify.

mod error;
mod fingerprint;
mod p1363;
mod signing;

pub use error::*;
pub use fingerprint::*;
pub use p1363::*;
pub use signing::*;
