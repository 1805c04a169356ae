//! # WEB-SRM Canonical
//!
//! Deterministic JSON serialization and hashing for WEB-SRM transaction
//! documents.
//!
//! This crate provides:
//! - Canonical JSON serialization with sorted keys and ASCII folding
//! - SHA256 hashing for body digests and chain records
//!
//! ## Canonical JSON Rules
//!
//! 1. Object keys sorted lexicographically by byte after ASCII folding
//! 2. Arrays preserve insertion order
//! 3. No whitespace
//! 4. Strings reduced to ASCII: accented Latin letters are folded to their
//!    unaccented equivalent, any other non-ASCII character is dropped
//! 5. **Floats are NOT allowed** - every amount is integer cents
//!
//! ## Example
//!
//! ```rust
//! use websrm_canonical::{to_canonical_json_string, hash_canonical};
//!
//! let value = serde_json::json!({"montTot": 3068, "acti": "ENR"});
//! let canonical = to_canonical_json_string(&value).unwrap();
//! assert_eq!(canonical, r#"{"acti":"ENR","montTot":3068}"#);
//!
//! let hash = hash_canonical(&value).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! ## Float Prohibition
//!
//! A float anywhere in a transaction document is a hard error, not a
//! rounding opportunity: the government endpoint certifies byte-exact
//! payloads and monetary values are always expressed in minor units.

mod canonical;
mod error;
mod fold;
mod hash;

pub use canonical::*;
pub use error::*;
pub use fold::*;
pub use hash::*;
