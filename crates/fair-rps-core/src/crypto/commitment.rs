//! Keyed commitment to the computer's move.

use super::{CryptoError, Secret};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Commitment = HMAC-SHA256(key = secret, message = move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Commit to a move label under the given secret
    pub fn new(secret: &Secret, move_label: &str) -> Result<Self, CryptoError> {
        let mac = keyed_mac(secret.as_bytes(), move_label.as_bytes())?;
        Ok(Self(mac.finalize().into_bytes().into()))
    }

    /// Parse the hex digest published at the start of a game
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(s.trim())?;
        let actual = bytes.len();
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidLength {
                expected: 32,
                actual,
            })?;
        Ok(Self(bytes))
    }

    /// Check that the revealed secret and claimed move reproduce this commitment.
    ///
    /// The comparison is constant-time.
    pub fn verify(&self, secret: &Secret, move_label: &str) -> bool {
        match keyed_mac(secret.as_bytes(), move_label.as_bytes()) {
            Ok(mac) => mac.verify_slice(&self.0).is_ok(),
            Err(_) => false,
        }
    }
}

fn keyed_mac(key: &[u8], message: &[u8]) -> Result<HmacSha256, CryptoError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| CryptoError::InvalidLength {
        expected: super::SECRET_LEN,
        actual: key.len(),
    })?;
    mac.update(message);
    Ok(mac)
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
