//! ECDSA key management
//!
//! Key pairs sign the SHA-256 digest of a message with a recoverable
//! secp256k1 signature, so a verifier can derive the signer's address from
//! the signature alone.

use rand::rngs::OsRng;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use thiserror::Error;

use super::hash::{hash160, sha256};
use crate::core::{ShortId, Signature, SIGNATURE_LEN};

/// Errors that can occur during key operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid private key")]
    InvalidPrivateKey,
    #[error("Invalid recovery id: {0}")]
    InvalidRecoveryId(u8),
    #[error("Non-canonical signature: s is in the upper half of the curve order")]
    HighS,
    #[error("Public key recovery failed")]
    RecoveryFailed,
    #[error("Secp256k1 error: {0}")]
    Secp256k1Error(#[from] secp256k1::Error),
}

/// A key pair consisting of a private key and its corresponding public key
#[derive(Clone)]
pub struct KeyPair {
    pub secret_key: SecretKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    /// Generate a new random key pair
    pub fn generate() -> Self {
        let secp = Secp256k1::new();
        let (secret_key, public_key) = secp.generate_keypair(&mut OsRng);
        Self {
            secret_key,
            public_key,
        }
    }

    /// Create a key pair from an existing secret key
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let secp = Secp256k1::signing_only();
        let public_key = PublicKey::from_secret_key(&secp, &secret_key);
        Self {
            secret_key,
            public_key,
        }
    }

    /// Create a key pair from a hex-encoded private key
    pub fn from_private_key_hex(hex_key: &str) -> Result<Self, KeyError> {
        let bytes = hex::decode(hex_key).map_err(|_| KeyError::InvalidPrivateKey)?;
        let secret_key =
            SecretKey::from_slice(&bytes).map_err(|_| KeyError::InvalidPrivateKey)?;
        Ok(Self::from_secret_key(secret_key))
    }

    /// Get the private key as a hex string
    pub fn private_key_hex(&self) -> String {
        hex::encode(self.secret_key.secret_bytes())
    }

    /// Get the public key as a hex string (compressed format)
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.public_key.serialize())
    }

    /// Address controlled by this key
    pub fn address(&self) -> ShortId {
        public_key_to_address(&self.public_key)
    }

    /// Sign SHA-256(`message`) with a recoverable signature
    pub fn sign(&self, message: &[u8]) -> Result<Signature, KeyError> {
        let secp = Secp256k1::signing_only();
        let digest = Message::from_digest_slice(&sha256(message))?;
        let (recovery_id, compact) = secp
            .sign_ecdsa_recoverable(&digest, &self.secret_key)
            .serialize_compact();

        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..SIGNATURE_LEN - 1].copy_from_slice(&compact);
        // recovery ids produced by signing are always 0..=3
        bytes[SIGNATURE_LEN - 1] = recovery_id.to_i32() as u8;
        Ok(Signature::from_bytes(bytes))
    }
}

/// Convert a public key to its address
pub fn public_key_to_address(public_key: &PublicKey) -> ShortId {
    ShortId::new(hash160(&public_key.serialize()))
}
