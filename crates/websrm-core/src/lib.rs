//! # WEB-SRM Core
//!
//! Core types and validation for the WEB-SRM fiscal compliance adapter.
//!
//! This crate provides:
//! - [`ComplianceProfile`]: the device/partner/software identity bundle,
//!   including the in-memory PEM key material
//! - [`Order`] and friends: the point-of-sale order shape fed to the
//!   signing pipeline, all amounts in integer cents
//! - Profile validation
//!
//! Key material in a profile is held in memory only; the `Debug`
//! implementation redacts it and the type is never serialized.

pub mod profile;
pub mod types;
pub mod validation;

pub use profile::*;
pub use types::*;
pub use validation::*;
