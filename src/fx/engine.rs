//! Authorization engine
//!
//! [`Fx`] decides whether a spend or a mint is authorized. It checks the
//! consumed output's owners, the spender's claimed signer indices, the
//! credential, and (once bootstrapped) that every signature recovers to the
//! claimed signer's address.
//!
//! # Trust during bootstrap
//!
//! Until the engine is notified that bootstrapping finished, signatures are
//! not checked cryptographically: data replayed during bootstrap was already
//! authorized when the network first accepted it. Every structural check
//! still runs. Callers that feed the engine fresh, unreplayed data must move
//! it to [`FxState::Bootstrapped`] first.

use std::fmt;
use std::sync::Arc;

use super::config::FxConfig;
use super::env::{Clock, Environment, UnsignedTx};
use super::state::FxState;
use crate::codec::Registered;
use crate::core::{
    Argument, Credential, FxError, FxInput, FxOutput, Input, MintOperation, MintOutput,
    OutputOwners, TransferInput, TransferOutput,
};
use crate::crypto::{Secp256k1Recovery, SignatureRecovery};

/// Shapes registered with the host codec, in type id order
const REGISTERED_TYPES: [&str; 5] = [
    TransferInput::TYPE_NAME,
    MintOutput::TYPE_NAME,
    TransferOutput::TYPE_NAME,
    MintOperation::TYPE_NAME,
    Credential::TYPE_NAME,
];

/// The transaction authorization engine
pub struct Fx {
    state: FxState,
    clock: Option<Arc<dyn Clock>>,
    recovery: Box<dyn SignatureRecovery>,
}

impl Fx {
    /// Engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(&FxConfig::default())
    }

    pub fn with_config(config: &FxConfig) -> Self {
        Self::with_recovery(Box::new(Secp256k1Recovery::with_strictness(
            config.strict_signatures,
        )))
    }

    /// Engine using a custom signature recovery primitive
    pub fn with_recovery(recovery: Box<dyn SignatureRecovery>) -> Self {
        Self {
            state: FxState::Created,
            clock: None,
            recovery,
        }
    }

    pub fn state(&self) -> FxState {
        self.state
    }

    /// Bind the host environment and register this engine's shapes
    pub fn initialize(&mut self, env: Option<&dyn Environment>) -> Result<(), FxError> {
        let env = env.ok_or(FxError::InvalidEnvironment)?;
        let next = self.state.transition(FxState::Initialized)?;

        let codec = env.codec();
        for name in REGISTERED_TYPES {
            codec.register_type(name)?;
        }

        self.clock = Some(env.clock());
        self.state = next;
        log::info!("Fx initialized, registered {} types", REGISTERED_TYPES.len());
        Ok(())
    }

    /// The host started replaying history
    pub fn notify_bootstrapping(&mut self) -> Result<(), FxError> {
        self.advance(FxState::Bootstrapping)
    }

    /// The host finished replaying history; signatures are checked from now on
    pub fn notify_bootstrapped(&mut self) -> Result<(), FxError> {
        self.advance(FxState::Bootstrapped)
    }

    fn advance(&mut self, next: FxState) -> Result<(), FxError> {
        let from = self.state;
        self.state = from.transition(next)?;
        log::info!("Fx state {} -> {}", from, next);
        Ok(())
    }

    fn clock(&self) -> Result<&dyn Clock, FxError> {
        match &self.clock {
            Some(clock) if self.state.is_initialized() => Ok(clock.as_ref()),
            _ => Err(FxError::NotInitialized),
        }
    }

    /// Verify that `input` with `credential` may spend `utxo` inside `tx`
    pub fn verify_transfer(
        &self,
        tx: Option<&dyn UnsignedTx>,
        input: Option<&FxInput>,
        credential: Option<&Credential>,
        utxo: Option<&FxOutput>,
    ) -> Result<(), FxError> {
        let clock = self.clock()?;
        let tx = tx.ok_or(FxError::Absent(Argument::Tx))?;
        let input = match input.ok_or(FxError::Absent(Argument::Input))? {
            FxInput::Transfer(input) => input,
            FxInput::Mint(_) => return Err(FxError::UnknownInputType),
        };
        let credential = credential.ok_or(FxError::Absent(Argument::Credential))?;
        let output = match utxo.ok_or(FxError::Absent(Argument::Output))? {
            FxOutput::Transfer(output) => output,
            FxOutput::Mint(_) => return Err(FxError::UnknownUtxoType),
        };

        output.validate_structure()?;
        if input.amount != output.amount {
            return Err(FxError::AmountMismatch {
                input: input.amount,
                output: output.amount,
            });
        }
        output.owners.check_unlocked(clock.now())?;
        self.verify_credentials(tx, &input.input, credential, &output.owners)?;

        log::debug!("Transfer of {} verified", output.amount);
        Ok(())
    }

    /// Verify that `operation` may consume the single mint token in `utxos`
    pub fn verify_operation(
        &self,
        tx: Option<&dyn UnsignedTx>,
        operation: Option<&MintOperation>,
        credential: Option<&Credential>,
        utxos: &[Option<&FxOutput>],
    ) -> Result<(), FxError> {
        self.clock()?;
        let tx = tx.ok_or(FxError::Absent(Argument::Tx))?;
        let operation = operation.ok_or(FxError::Absent(Argument::Operation))?;
        let credential = credential.ok_or(FxError::Absent(Argument::Credential))?;

        let [utxo] = utxos else {
            return Err(FxError::WrongUtxoCount {
                expected: 1,
                actual: utxos.len(),
            });
        };
        let consumed = match utxo {
            Some(FxOutput::Mint(consumed)) => consumed,
            Some(FxOutput::Transfer(_)) | None => return Err(FxError::UnknownUtxoType),
        };

        operation.verify()?;
        operation.verify_reissue(consumed)?;
        self.verify_credentials(tx, &operation.mint_input, credential, &consumed.owners)?;

        log::debug!("Mint of {} verified", operation.transfer_output.amount);
        Ok(())
    }

    /// Check that `credential` satisfies `owners` for the signers `input` claims
    fn verify_credentials(
        &self,
        tx: &dyn UnsignedTx,
        input: &Input,
        credential: &Credential,
        owners: &OutputOwners,
    ) -> Result<(), FxError> {
        self.clock()?;
        owners.validate_structure()?;
        owners.match_signatures(&input.sig_indices)?;
        if credential.len() != input.sig_indices.len() {
            return Err(FxError::CredentialSignatureCountMismatch {
                indices: input.sig_indices.len(),
                signatures: credential.len(),
            });
        }
        if credential.is_empty() {
            return Ok(());
        }

        if !self.state.verifies_signatures() {
            log::debug!(
                "Fx is {}, skipping {} signature checks",
                self.state,
                credential.len()
            );
            return Ok(());
        }

        let message = tx.unsigned_bytes();
        for (position, (&index, signature)) in
            input.sig_indices.iter().zip(&credential.sigs).enumerate()
        {
            let expected = *owners.address_at(index).ok_or(FxError::IndexOutOfRange {
                index,
                addresses: owners.addresses.len(),
            })?;
            let recovered = self
                .recovery
                .recover_address(signature, &message)
                .map_err(|source| FxError::InvalidSignature { position, source })?;
            if recovered != expected {
                log::warn!(
                    "Signature {} recovered to {}, expected {}",
                    position,
                    recovered,
                    expected
                );
                return Err(FxError::SignatureMismatch {
                    position,
                    expected,
                    recovered,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Fx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fx")
            .field("state", &self.state)
            .field("now", &self.clock.as_ref().map(|clock| clock.now()))
            .finish_non_exhaustive()
    }
}

impl Default for Fx {
    fn default() -> Self {
        Self::new()
    }
}
