//! Per-game secret key.

use super::CryptoError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;

/// Length of the secret key in bytes
pub const SECRET_LEN: usize = 32;

/// 32-byte HMAC key, generated fresh for every game
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    /// Draw a new secret from the operating system's secure random source
    pub fn random() -> Result<Self, CryptoError> {
        Self::generate(&mut OsRng)
    }

    /// Draw a new secret from the given cryptographically secure generator.
    ///
    /// Fails if the generator cannot produce bytes; there is no fallback.
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; SECRET_LEN];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::RandomUnavailable(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SECRET_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse the hex form printed at the end of a game
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(s.trim())?;
        let actual = bytes.len();
        let bytes: [u8; SECRET_LEN] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidLength {
                expected: SECRET_LEN,
                actual,
            })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    /// Lowercase hex encoding, as revealed to the user
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({}..)", hex::encode(&self.0[..4]))
    }
}
