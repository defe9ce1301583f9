//! Signature bundles accompanying a spend

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Length of a recoverable secp256k1 signature: r (32) || s (32) || recovery id (1)
pub const SIGNATURE_LEN: usize = 65;

/// A recoverable signature
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    pub const fn from_bytes(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }

    /// The compact (r, s) part
    pub fn compact(&self) -> &[u8] {
        &self.0[..SIGNATURE_LEN - 1]
    }

    pub fn recovery_byte(&self) -> u8 {
        self.0[SIGNATURE_LEN - 1]
    }
}

impl Default for Signature {
    fn default() -> Self {
        Self([0; SIGNATURE_LEN])
    }
}

impl From<[u8; SIGNATURE_LEN]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}

impl Serialize for Signature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> Deserialize<'de> for Signature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::decode(&text).map_err(D::Error::custom)?;
        let bytes: [u8; SIGNATURE_LEN] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            D::Error::custom(format!(
                "expected {} signature bytes, got {}",
                SIGNATURE_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

/// Ordered signatures, position-paired with an input's signer indices
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub sigs: Vec<Signature>,
}

impl Credential {
    pub fn new(sigs: Vec<Signature>) -> Self {
        Self { sigs }
    }

    pub fn len(&self) -> usize {
        self.sigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sigs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_hex_encoding() {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[0] = 0xab;
        bytes[64] = 1;
        let credential = Credential::new(vec![Signature::from_bytes(bytes)]);

        let json = serde_json::to_string(&credential).unwrap();
        assert!(json.contains("\"ab00"));
        let decoded: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, credential);
        assert_eq!(decoded.sigs[0].recovery_byte(), 1);
    }

    #[test]
    fn test_signature_wrong_length_rejected() {
        let result: Result<Signature, _> = serde_json::from_str("\"abcd\"");
        assert!(result.is_err());
    }
}
