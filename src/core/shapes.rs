//! Tagged caller shapes
//!
//! Callers hand the engine inputs and UTXOs without knowing which concrete
//! kind the engine expects. Each verification call resolves the shape once
//! at its entry point and rejects anything else.

use serde::{Deserialize, Serialize};

use super::spend::{MintInput, MintOutput, TransferInput, TransferOutput};

/// An input of any kind this engine understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FxInput {
    Transfer(TransferInput),
    Mint(MintInput),
}

/// An output (or consumed UTXO) of any kind this engine understands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum FxOutput {
    Transfer(TransferOutput),
    Mint(MintOutput),
}

impl From<TransferInput> for FxInput {
    fn from(input: TransferInput) -> Self {
        FxInput::Transfer(input)
    }
}

impl From<TransferOutput> for FxOutput {
    fn from(output: TransferOutput) -> Self {
        FxOutput::Transfer(output)
    }
}

impl From<MintOutput> for FxOutput {
    fn from(output: MintOutput) -> Self {
        FxOutput::Mint(output)
    }
}
