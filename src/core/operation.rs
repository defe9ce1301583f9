//! Mint operation: consume a mint-permission token, reissue it, and create value

use serde::{Deserialize, Serialize};

use super::error::{FxError, OperationFault};
use super::spend::{MintInput, MintOutput, TransferOutput};

/// A compound state transition that mints new value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintOperation {
    /// Signers authorizing consumption of the existing mint token
    pub mint_input: MintInput,
    /// Replacement mint token keeping the minting authority alive
    pub mint_output: MintOutput,
    /// Newly minted value
    pub transfer_output: TransferOutput,
}

impl MintOperation {
    pub fn new(
        mint_input: MintInput,
        mint_output: MintOutput,
        transfer_output: TransferOutput,
    ) -> Self {
        Self {
            mint_input,
            mint_output,
            transfer_output,
        }
    }

    /// Check both produced outputs are structurally valid and the mint input
    /// lists its signers in ascending order
    pub fn verify(&self) -> Result<(), FxError> {
        self.mint_output
            .owners
            .check_structure()
            .map_err(|fault| FxError::InvalidOperationOutputs(OperationFault::MintOutput(fault)))?;
        self.transfer_output
            .owners
            .check_structure()
            .map_err(|fault| {
                FxError::InvalidOperationOutputs(OperationFault::TransferOutput(fault))
            })?;
        self.mint_input.verify()
    }

    /// Check the replacement token is controlled exactly like the consumed one
    pub fn verify_reissue(&self, consumed: &MintOutput) -> Result<(), FxError> {
        if !self.mint_output.owners.has_same_authority(&consumed.owners) {
            return Err(FxError::InvalidOperationOutputs(
                OperationFault::AuthorityChanged,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Input, OutputOwners, OwnersFault, ShortId};

    fn owners() -> OutputOwners {
        OutputOwners::unlocked(1, vec![ShortId::new([9; 20])])
    }

    fn operation() -> MintOperation {
        MintOperation::new(
            Input::new(vec![0]),
            MintOutput::new(owners()),
            TransferOutput::new(1, owners()),
        )
    }

    #[test]
    fn test_valid_operation() {
        let op = operation();
        assert!(op.verify().is_ok());
        assert!(op.verify_reissue(&MintOutput::new(owners())).is_ok());
    }

    #[test]
    fn test_invalid_transfer_output() {
        let mut op = operation();
        op.transfer_output.owners.addresses.clear();
        assert!(matches!(
            op.verify(),
            Err(FxError::InvalidOperationOutputs(OperationFault::TransferOutput(
                OwnersFault::ThresholdTooHigh { .. }
            )))
        ));
    }

    #[test]
    fn test_invalid_mint_output() {
        let mut op = operation();
        op.mint_output.owners.threshold = 0;
        assert!(matches!(
            op.verify(),
            Err(FxError::InvalidOperationOutputs(OperationFault::MintOutput(
                OwnersFault::ZeroThreshold { .. }
            )))
        ));
    }

    #[test]
    fn test_unsorted_mint_input() {
        let mut op = operation();
        op.mint_input = Input::new(vec![1, 0]);
        assert!(matches!(
            op.verify(),
            Err(FxError::UnsortedOrDuplicateIndices)
        ));

        op.mint_output.owners.threshold = 0;
        assert!(matches!(
            op.verify(),
            Err(FxError::InvalidOperationOutputs(OperationFault::MintOutput(_)))
        ));
    }

    #[test]
    fn test_reissue_must_keep_authority() {
        let mut op = operation();
        op.mint_output = MintOutput::default();
        assert!(op.verify().is_ok());
        assert!(matches!(
            op.verify_reissue(&MintOutput::new(owners())),
            Err(FxError::InvalidOperationOutputs(OperationFault::AuthorityChanged))
        ));

        let mut op = operation();
        op.mint_output.owners.locktime = 1_000;
        assert!(op.verify_reissue(&MintOutput::new(owners())).is_ok());
    }
}
