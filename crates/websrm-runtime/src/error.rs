//! Error type for the orchestration pipeline.

use thiserror::Error;
use websrm_canonical::CanonicalError;
use websrm_chain::ChainError;
use websrm_core::ValidationError;
use websrm_transport::TransportError;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(
        "inconsistent amounts: subtotal {subtotal} + GST {gst} + QST {qst} != total {total} (cents)"
    )]
    InconsistentAmounts {
        subtotal: i64,
        gst: i64,
        qst: i64,
        total: i64,
    },

    #[error("profile validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("canonicalization error: {0}")]
    Canonical(#[from] CanonicalError),

    #[error("chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}
