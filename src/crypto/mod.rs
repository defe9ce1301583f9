//! Cryptographic utilities
//!
//! This module provides:
//! - SHA-256 / RIPEMD-160 hashing
//! - ECDSA key management (secp256k1) with recoverable signatures
//! - Signature-to-address recovery

pub mod hash;
pub mod keys;
pub mod recover;

pub use hash::{hash160, ripemd160, sha256};
pub use keys::{public_key_to_address, KeyError, KeyPair};
pub use recover::{Secp256k1Recovery, SignatureRecovery};
