//! Cryptographic primitives for the commit-reveal fairness protocol.
//!
//! This module provides:
//! - Secret: the per-game HMAC key, revealed after the user moves
//! - Commitment: HMAC-SHA256 of the computer's move under the Secret

mod commitment;
mod secret;

use thiserror::Error;

pub use commitment::Commitment;
pub use secret::{Secret, SECRET_LEN};

/// Errors from cryptographic operations
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("secure random source unavailable: {0}")]
    RandomUnavailable(String),

    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}
