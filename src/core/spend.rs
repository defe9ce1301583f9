//! UTXO-shaped spend objects
//!
//! Inputs carry the signer indices a spender claims; outputs carry the
//! [`OutputOwners`] that will have to authorize the next spend.

use serde::{Deserialize, Serialize};

use super::error::FxError;
use super::owners::{indices_strictly_increasing, OutputOwners};

/// Signer indices into the consumed output's address set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub sig_indices: Vec<u32>,
}

impl Input {
    pub fn new(sig_indices: Vec<u32>) -> Self {
        Self { sig_indices }
    }

    /// Check the indices are strictly increasing
    pub fn verify(&self) -> Result<(), FxError> {
        if !indices_strictly_increasing(&self.sig_indices) {
            return Err(FxError::UnsortedOrDuplicateIndices);
        }
        Ok(())
    }
}

/// Input consuming a mint-permission token
pub type MintInput = Input;

/// Input spending a value-carrying output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferInput {
    pub amount: u64,
    #[serde(flatten)]
    pub input: Input,
}

impl TransferInput {
    pub fn new(amount: u64, sig_indices: Vec<u32>) -> Self {
        Self {
            amount,
            input: Input::new(sig_indices),
        }
    }

    pub fn sig_indices(&self) -> &[u32] {
        &self.input.sig_indices
    }
}

/// Value-carrying output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutput {
    pub amount: u64,
    pub owners: OutputOwners,
}

impl TransferOutput {
    pub fn new(amount: u64, owners: OutputOwners) -> Self {
        Self { amount, owners }
    }

    pub fn validate_structure(&self) -> Result<(), FxError> {
        self.owners.validate_structure()
    }
}

/// Mint-permission token: carries no value, only the authority to mint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintOutput {
    pub owners: OutputOwners,
}

impl MintOutput {
    pub fn new(owners: OutputOwners) -> Self {
        Self { owners }
    }

    pub fn validate_structure(&self) -> Result<(), FxError> {
        self.owners.validate_structure()
    }
}
