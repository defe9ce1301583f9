//! utxo-fx: transaction authorization for a UTXO ledger
//!
//! This crate decides whether a spend or a mint is authorized:
//! - Threshold multisig ownership with time locks (`OutputOwners`)
//! - Transfer and mint inputs/outputs, and the mint operation
//! - Recoverable secp256k1 signatures matched to signer addresses by index
//! - A lifecycle-gated engine that trusts replayed history while
//!   bootstrapping and checks every signature afterwards
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use utxo_fx::{
//!     Credential, Fx, FxInput, FxOutput, KeyPair, ManualClock, OutputOwners, StaticEnvironment,
//!     TransferInput, TransferOutput,
//! };
//!
//! // Bind the engine to a host environment
//! let env = StaticEnvironment::new(Arc::new(ManualClock::new(1_700_000_000)));
//! let mut fx = Fx::new();
//! fx.initialize(Some(&env))?;
//! fx.notify_bootstrapped()?;
//!
//! // A 1-of-1 output owned by a fresh key
//! let owner = KeyPair::generate();
//! let owners = OutputOwners::unlocked(1, vec![owner.address()]);
//! let utxo = FxOutput::from(TransferOutput::new(10, owners));
//!
//! // Spend it
//! let tx: Vec<u8> = b"unsigned tx bytes".to_vec();
//! let input = FxInput::from(TransferInput::new(10, vec![0]));
//! let credential = Credential::new(vec![owner.sign(&tx)?]);
//!
//! fx.verify_transfer(Some(&tx), Some(&input), Some(&credential), Some(&utxo))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod core;
pub mod crypto;
pub mod fx;

// Re-export commonly used types
pub use codec::{Codec, CodecError, Registered, TypeRegistry};
pub use core::{
    Argument, Credential, FxError, FxInput, FxOutput, Input, MintInput, MintOperation,
    MintOutput, OperationFault, OutputOwners, OwnersFault, ShortId, Signature, TransferInput,
    TransferOutput,
};
pub use crypto::{KeyError, KeyPair, Secp256k1Recovery, SignatureRecovery};
pub use fx::{
    Clock, Environment, Fx, FxConfig, FxState, ManualClock, StaticEnvironment, SystemClock,
    UnsignedTx,
};
