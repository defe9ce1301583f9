//! Verification error taxonomy
//!
//! Every check performed by the engine is terminal: the first failing check
//! aborts the call and surfaces one of these variants. Data errors (the
//! transaction is not authorized) are kept apart from usage errors (the engine
//! was driven out of order), see [`FxError::is_usage_error`].

use std::fmt;

use thiserror::Error;

use super::ids::ShortId;
use crate::codec::CodecError;
use crate::crypto::KeyError;
use crate::fx::FxState;

/// A required argument of a verification call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Tx,
    Input,
    Credential,
    Output,
    Operation,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Argument::Tx => "transaction",
            Argument::Input => "input",
            Argument::Credential => "credential",
            Argument::Output => "output",
            Argument::Operation => "operation",
        };
        f.write_str(name)
    }
}

/// Why an [`OutputOwners`](super::OutputOwners) failed structural validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OwnersFault {
    #[error("threshold is zero but {addresses} addresses are listed")]
    ZeroThreshold { addresses: usize },
    #[error("threshold {threshold} exceeds address count {addresses}")]
    ThresholdTooHigh { threshold: u32, addresses: usize },
    #[error("addresses are not sorted and unique")]
    UnsortedAddresses,
}

/// Why the outputs produced by a mint operation were rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationFault {
    #[error("mint output: {0}")]
    MintOutput(OwnersFault),
    #[error("transfer output: {0}")]
    TransferOutput(OwnersFault),
    #[error("mint output does not preserve the consumed minting authority")]
    AuthorityChanged,
}

/// Errors returned by the authorization engine
#[derive(Error, Debug)]
pub enum FxError {
    #[error("Missing {0}")]
    Absent(Argument),
    #[error("Invalid output owners: {0}")]
    InvalidOwners(OwnersFault),
    #[error("Output is time locked until {locktime}, current time is {now}")]
    TimeLocked { locktime: u64, now: u64 },
    #[error("Amount mismatch: input {input}, output {output}")]
    AmountMismatch { input: u64, output: u64 },
    #[error("Credential has {signatures} signatures but the input lists {indices} signers")]
    CredentialSignatureCountMismatch { indices: usize, signatures: usize },
    #[error("Too many signers: threshold {threshold}, got {signers}")]
    TooManySigners { threshold: u32, signers: usize },
    #[error("Too few signers: threshold {threshold}, got {signers}")]
    TooFewSigners { threshold: u32, signers: usize },
    #[error("Signature indices are not strictly increasing")]
    UnsortedOrDuplicateIndices,
    #[error("Signature index {index} out of range for {addresses} addresses")]
    IndexOutOfRange { index: u32, addresses: usize },
    #[error("Signature {position} was produced by {recovered}, expected {expected}")]
    SignatureMismatch {
        position: usize,
        expected: ShortId,
        recovered: ShortId,
    },
    #[error("Signature {position} is malformed: {source}")]
    InvalidSignature {
        position: usize,
        #[source]
        source: KeyError,
    },
    #[error("Unknown utxo type")]
    UnknownUtxoType,
    #[error("Unknown input type")]
    UnknownInputType,
    #[error("Wrong number of utxos: expected {expected}, got {actual}")]
    WrongUtxoCount { expected: usize, actual: usize },
    #[error("Invalid operation outputs: {0}")]
    InvalidOperationOutputs(OperationFault),
    #[error("Fx has not been initialized")]
    NotInitialized,
    #[error("Invalid environment")]
    InvalidEnvironment,
    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: FxState, to: FxState },
    #[error("Type registration failed: {0}")]
    Registration(#[from] CodecError),
}

impl FxError {
    /// True when the engine itself was misused, as opposed to being handed
    /// data that does not authorize the spend.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            FxError::NotInitialized
                | FxError::InvalidEnvironment
                | FxError::InvalidStateTransition { .. }
                | FxError::Registration(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_are_distinguished() {
        assert!(FxError::NotInitialized.is_usage_error());
        assert!(FxError::InvalidEnvironment.is_usage_error());
        assert!(FxError::InvalidStateTransition {
            from: FxState::Bootstrapped,
            to: FxState::Bootstrapping,
        }
        .is_usage_error());

        assert!(!FxError::UnsortedOrDuplicateIndices.is_usage_error());
        assert!(!FxError::Absent(Argument::Tx).is_usage_error());
        assert!(!FxError::TimeLocked { locktime: 2, now: 1 }.is_usage_error());
    }

    #[test]
    fn test_messages_carry_context() {
        let err = FxError::AmountMismatch {
            input: 2,
            output: 1,
        };
        assert_eq!(err.to_string(), "Amount mismatch: input 2, output 1");

        let err = FxError::InvalidOperationOutputs(OperationFault::TransferOutput(
            OwnersFault::ThresholdTooHigh {
                threshold: 1,
                addresses: 0,
            },
        ));
        assert_eq!(
            err.to_string(),
            "Invalid operation outputs: transfer output: threshold 1 exceeds address count 0"
        );
        assert_eq!(FxError::Absent(Argument::Credential).to_string(), "Missing credential");
    }
}
