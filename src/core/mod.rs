//! Core data model
//!
//! This module contains the shapes the engine reasons about:
//! - Addresses (`ShortId`)
//! - The threshold multisig + time lock ownership predicate (`OutputOwners`)
//! - Transfer and mint inputs/outputs
//! - The mint operation
//! - Credentials (recoverable signatures)
//! - The verification error taxonomy

pub mod credential;
pub mod error;
pub mod ids;
pub mod operation;
pub mod owners;
pub mod shapes;
pub mod spend;

pub use credential::{Credential, Signature, SIGNATURE_LEN};
pub use error::{Argument, FxError, OperationFault, OwnersFault};
pub use ids::{IdError, ShortId, SHORT_ID_LEN};
pub use operation::MintOperation;
pub use owners::OutputOwners;
pub use shapes::{FxInput, FxOutput};
pub use spend::{Input, MintInput, MintOutput, TransferInput, TransferOutput};
