//! Type registry with tagged JSON encoding
//!
//! Shapes are registered by name in a fixed order; the position of a name in
//! the registry is its type id. Only registered shapes can be encoded or
//! decoded, and every encoding carries its type name so a payload cannot be
//! decoded as a different shape.

use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Credential, MintOperation, MintOutput, TransferInput, TransferOutput};

/// Codec errors
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Type already registered: {0}")]
    AlreadyRegistered(&'static str),
    #[error("Type not registered: {0}")]
    NotRegistered(&'static str),
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("Registry lock poisoned")]
    Poisoned,
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// A shape that can be registered with a [`Codec`]
pub trait Registered {
    const TYPE_NAME: &'static str;
}

impl Registered for TransferInput {
    const TYPE_NAME: &'static str = "secp256k1fx.TransferInput";
}

impl Registered for MintOutput {
    const TYPE_NAME: &'static str = "secp256k1fx.MintOutput";
}

impl Registered for TransferOutput {
    const TYPE_NAME: &'static str = "secp256k1fx.TransferOutput";
}

impl Registered for MintOperation {
    const TYPE_NAME: &'static str = "secp256k1fx.MintOperation";
}

impl Registered for Credential {
    const TYPE_NAME: &'static str = "secp256k1fx.Credential";
}

/// Registration facility provided by the host environment
pub trait Codec: Send + Sync {
    fn register_type(&self, name: &'static str) -> Result<(), CodecError>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    #[serde(rename = "type")]
    type_name: &'a str,
    value: &'a T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(rename = "type")]
    type_name: String,
    value: T,
}

/// In-memory [`Codec`] that encodes registered shapes as tagged JSON
#[derive(Debug, Default)]
pub struct TypeRegistry {
    names: RwLock<Vec<&'static str>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type id assigned to `name`, if registered
    pub fn type_id(&self, name: &str) -> Result<Option<u32>, CodecError> {
        let names = self.names.read().map_err(|_| CodecError::Poisoned)?;
        Ok(names
            .iter()
            .position(|registered| *registered == name)
            .map(|index| index as u32))
    }

    /// Registered names in registration order
    pub fn registered(&self) -> Result<Vec<&'static str>, CodecError> {
        let names = self.names.read().map_err(|_| CodecError::Poisoned)?;
        Ok(names.clone())
    }

    fn ensure_registered(&self, name: &'static str) -> Result<(), CodecError> {
        match self.type_id(name)? {
            Some(_) => Ok(()),
            None => Err(CodecError::NotRegistered(name)),
        }
    }

    pub fn encode<T: Registered + Serialize>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        self.ensure_registered(T::TYPE_NAME)?;
        let envelope = EnvelopeRef {
            type_name: T::TYPE_NAME,
            value,
        };
        Ok(serde_json::to_vec(&envelope)?)
    }

    pub fn decode<T: Registered + DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        self.ensure_registered(T::TYPE_NAME)?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_slice(bytes)?;
        if envelope.type_name != T::TYPE_NAME {
            return Err(CodecError::TypeMismatch {
                expected: T::TYPE_NAME,
                found: envelope.type_name,
            });
        }
        Ok(serde_json::from_value(envelope.value)?)
    }
}

impl Codec for TypeRegistry {
    fn register_type(&self, name: &'static str) -> Result<(), CodecError> {
        let mut names = self.names.write().map_err(|_| CodecError::Poisoned)?;
        if names.contains(&name) {
            return Err(CodecError::AlreadyRegistered(name));
        }
        names.push(name);
        Ok(())
    }
}
