//! Signature-to-address recovery
//!
//! The engine never sees public keys: it recovers the signing key from each
//! signature and the signed message, hashes it to an address, and compares
//! that with the address the spender claimed.

use std::fmt;

use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, Secp256k1, VerifyOnly};

use super::hash::sha256;
use super::keys::{public_key_to_address, KeyError};
use crate::core::{ShortId, Signature};

/// Recovers the address that produced a signature over a message
pub trait SignatureRecovery: Send + Sync {
    fn recover_address(&self, signature: &Signature, message: &[u8]) -> Result<ShortId, KeyError>;
}

/// secp256k1 recovery over SHA-256(message)
pub struct Secp256k1Recovery {
    secp: Secp256k1<VerifyOnly>,
    strict: bool,
}

impl fmt::Debug for Secp256k1Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1Recovery")
            .field("strict", &self.strict)
            .finish()
    }
}

impl Secp256k1Recovery {
    /// Recovery that rejects malleable signature encodings
    pub fn new() -> Self {
        Self::with_strictness(true)
    }

    /// When `strict` is set, only recovery ids 0 and 1 and low-s signatures
    /// are accepted.
    pub fn with_strictness(strict: bool) -> Self {
        Self {
            secp: Secp256k1::verification_only(),
            strict,
        }
    }

    fn parse(&self, signature: &Signature) -> Result<RecoverableSignature, KeyError> {
        let recovery_byte = signature.recovery_byte();
        if self.strict && recovery_byte > 1 {
            return Err(KeyError::InvalidRecoveryId(recovery_byte));
        }
        let recovery_id = RecoveryId::from_i32(i32::from(recovery_byte))
            .map_err(|_| KeyError::InvalidRecoveryId(recovery_byte))?;
        let parsed = RecoverableSignature::from_compact(signature.compact(), recovery_id)?;

        if self.strict {
            let standard = parsed.to_standard();
            let mut normalized = standard;
            normalized.normalize_s();
            if normalized != standard {
                return Err(KeyError::HighS);
            }
        }
        Ok(parsed)
    }
}

impl Default for Secp256k1Recovery {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureRecovery for Secp256k1Recovery {
    fn recover_address(&self, signature: &Signature, message: &[u8]) -> Result<ShortId, KeyError> {
        let parsed = self.parse(signature)?;
        let digest = Message::from_digest_slice(&sha256(message))?;
        let public_key = self
            .secp
            .recover_ecdsa(&digest, &parsed)
            .map_err(|_| KeyError::RecoveryFailed)?;
        Ok(public_key_to_address(&public_key))
    }
}
