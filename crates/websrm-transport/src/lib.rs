//! # WEB-SRM Transport
//!
//! The request-authentication surface of the compliance adapter:
//!
//! - [`build_canonical_base_string`]: the four-segment string
//!   (`METHOD\nPATH\nbodyHashHex\nheaderList`) that represents one
//!   outgoing request
//! - [`build_official_headers`]: the signed transmission header map,
//!   including the 88-character transport signature (`SIGNATRANSM`) and
//!   the 40-hex certificate fingerprint (`EMPRCERTIFTRANSM`)
//! - [`build_official_qr`]: the deterministic, URL-safe verification URL
//!   printed on receipts
//!
//! Actual network transmission to the government endpoint is out of scope;
//! this crate only produces the bytes.

mod base_string;
mod error;
mod headers;
mod qr;

pub use base_string::*;
pub use error::*;
pub use headers::*;
pub use qr::*;
