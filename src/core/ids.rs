//! Short (20-byte) identifiers used as signer addresses

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::crypto::sha256;

/// Length of an address in bytes
pub const SHORT_ID_LEN: usize = 20;

/// Length of the checksum appended to the textual form
const CHECKSUM_LEN: usize = 4;

/// Errors parsing the textual form of a [`ShortId`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid base58 encoding")]
    InvalidEncoding,
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Checksum mismatch")]
    ChecksumMismatch,
}

/// A signer address: RIPEMD160(SHA256(compressed public key))
///
/// Ordering is plain byte order, which is the canonical order for address
/// sets in [`OutputOwners`](super::OutputOwners).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShortId([u8; SHORT_ID_LEN]);

impl ShortId {
    /// The all-zero address, which no key hashes to in practice
    pub const EMPTY: ShortId = ShortId([0; SHORT_ID_LEN]);

    pub const fn new(bytes: [u8; SHORT_ID_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, IdError> {
        let bytes: [u8; SHORT_ID_LEN] = bytes.try_into().map_err(|_| IdError::InvalidLength {
            expected: SHORT_ID_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; SHORT_ID_LEN] {
        &self.0
    }

    fn checksum(&self) -> [u8; CHECKSUM_LEN] {
        let digest = sha256(&self.0);
        let mut checksum = [0u8; CHECKSUM_LEN];
        checksum.copy_from_slice(&digest[digest.len() - CHECKSUM_LEN..]);
        checksum
    }
}

impl From<[u8; SHORT_ID_LEN]> for ShortId {
    fn from(bytes: [u8; SHORT_ID_LEN]) -> Self {
        Self(bytes)
    }
}

/// Base58 of the id followed by the last four bytes of its SHA-256
impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut payload = Vec::with_capacity(SHORT_ID_LEN + CHECKSUM_LEN);
        payload.extend_from_slice(&self.0);
        payload.extend_from_slice(&self.checksum());
        f.write_str(&bs58::encode(payload).into_string())
    }
}

impl FromStr for ShortId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let payload = bs58::decode(s)
            .into_vec()
            .map_err(|_| IdError::InvalidEncoding)?;
        if payload.len() != SHORT_ID_LEN + CHECKSUM_LEN {
            return Err(IdError::InvalidLength {
                expected: SHORT_ID_LEN + CHECKSUM_LEN,
                actual: payload.len(),
            });
        }

        let (body, checksum) = payload.split_at(SHORT_ID_LEN);
        let id = Self::from_slice(body)?;
        if id.checksum() != checksum {
            return Err(IdError::ChecksumMismatch);
        }
        Ok(id)
    }
}
