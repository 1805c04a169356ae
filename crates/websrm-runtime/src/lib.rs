//! # WEB-SRM Runtime
//!
//! The orchestration layer that turns a point-of-sale [`websrm_core::Order`]
//! into a fully signed, transmittable record:
//!
//! 1. validate the compliance profile
//! 2. map the order to the transaction payload shape
//! 3. compute the chained body signatures
//! 4. inject the signature block and canonicalize the final body
//! 5. build the canonical base string and signed transmission headers
//! 6. build the receipt QR URL
//! 7. hand the assembled [`WebSrmRecord`] to the configured [`RecordSink`]
//!
//! Persistence failures are logged and tolerated; the signed record is
//! still returned so the caller can retry storage without re-signing
//! (re-signing would fork the chain).

mod error;
mod mapper;
mod orchestrator;
mod record;
mod sink;

pub use error::*;
pub use mapper::*;
pub use orchestrator::*;
pub use record::*;
pub use sink::*;
