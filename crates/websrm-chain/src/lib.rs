//! # WEB-SRM Chain
//!
//! The append-only signature ledger: every transaction's chain record
//! carries the previous transaction's signature as its `preced` field, so
//! insertion, deletion, or reordering is detectable by anyone holding the
//! sequence - the audit property the tax authority verifies.
//!
//! # Example
//!
//! ```ignore
//! use websrm_chain::{compute_body_signatures, empty_preced};
//!
//! let first = compute_body_signatures(&payload_a, &key_pem, None)?;
//! assert_eq!(first.preced, empty_preced());
//!
//! let second = compute_body_signatures(&payload_b, &key_pem, Some(&first.actu))?;
//! assert_eq!(second.preced, first.actu);
//! ```
//!
//! The core holds no shared state: callers serialize chain computations per
//! device (one signer task or lock per device key) and thread `previous_actu`
//! explicitly, typically via a [`PreviousSignatureStore`].

mod chain;
mod error;
mod store;

pub use chain::*;
pub use error::*;
pub use store::*;
