//! Shared test fixtures

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use secp256k1::SecretKey;

use super::engine::Fx;
use super::env::{ManualClock, StaticEnvironment, UnsignedTx};
use crate::core::{
    Credential, SHORT_ID_LEN, SIGNATURE_LEN, FxInput, FxOutput, Input, MintOperation, MintOutput, OutputOwners, TransferInput,
    TransferOutput,
};
use crate::crypto::KeyPair;

pub const TX_BYTES: [u8; 6] = [0, 1, 2, 3, 4, 5];

/// Known-good signature over [`TX_BYTES`], recovery id 0
pub const SIG_BYTES: [u8; SIGNATURE_LEN] = [
    0x0e, 0x33, 0x4e, 0xbc, 0x67, 0xa7, 0x3f, 0xe8, 0x24, 0x33, 0xac, 0xa3, 0x47, 0x88, 0xa6, 0x3d,
    0x58, 0xe5, 0x8e, 0xf0, 0x3a, 0xd5, 0x84, 0xf1, 0xbc, 0xa3, 0xb2, 0xd2, 0x5d, 0x51, 0xd6, 0x9b,
    0x0f, 0x28, 0x5d, 0xcd, 0x3f, 0x71, 0x17, 0x0a, 0xf9, 0xbf, 0x2d, 0xb1, 0x10, 0x26, 0x5c, 0xe9,
    0xdc, 0xc3, 0x9d, 0x7a, 0x01, 0x50, 0x9d, 0xe8, 0x35, 0xbd, 0xcb, 0x29, 0x3a, 0xd1, 0x49, 0x32,
    0x00,
];

/// Address [`SIG_BYTES`] recovers to
pub const ADDR_BYTES: [u8; SHORT_ID_LEN] = [
    0x01, 0x5c, 0xce, 0x6c, 0x55, 0xd6, 0xb5, 0x09, 0x84, 0x5c, 0x8c, 0x4e, 0x30, 0xbe, 0xd9, 0x8d,
    0x39, 0x1a, 0xe7, 0xf0,
];

pub struct TestTx {
    pub bytes: Vec<u8>,
}

impl UnsignedTx for TestTx {
    fn unsigned_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

pub fn test_tx() -> TestTx {
    TestTx {
        bytes: TX_BYTES.to_vec(),
    }
}

pub fn test_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 1, 19, 16, 25, 17).unwrap()
}

fn key(seed: u8) -> KeyPair {
    KeyPair::from_secret_key(SecretKey::from_slice(&[seed; 32]).unwrap())
}

pub fn signer() -> KeyPair {
    key(1)
}

pub fn other_signer() -> KeyPair {
    key(2)
}

/// `count` distinct keys ordered by address
pub fn sorted_signers(count: u8) -> Vec<KeyPair> {
    let mut keys: Vec<KeyPair> = (1..=count).map(key).collect();
    keys.sort_by_key(|kp| kp.address());
    keys
}

pub fn environment() -> Arc<StaticEnvironment> {
    let _ = env_logger::builder().is_test(true).try_init();
    Arc::new(StaticEnvironment::new(Arc::new(ManualClock::at(test_date()))))
}

/// Initialized engine and a handle on its clock, which reads [`test_date`]
pub fn initialized_fx() -> (Fx, Arc<ManualClock>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let clock = Arc::new(ManualClock::at(test_date()));
    let env = StaticEnvironment::new(clock.clone());
    let mut fx = Fx::new();
    fx.initialize(Some(&env)).unwrap();
    (fx, clock)
}

pub fn bootstrapped_fx() -> (Fx, Arc<ManualClock>) {
    let (mut fx, clock) = initialized_fx();
    fx.notify_bootstrapping().unwrap();
    fx.notify_bootstrapped().unwrap();
    (fx, clock)
}

/// Unlocked owners requiring every listed key
pub fn owners_of(keys: &[KeyPair]) -> OutputOwners {
    let mut addresses: Vec<_> = keys.iter().map(KeyPair::address).collect();
    addresses.sort();
    OutputOwners::unlocked(addresses.len() as u32, addresses)
}

pub fn transfer_input(amount: u64, sig_indices: Vec<u32>) -> FxInput {
    FxInput::Transfer(TransferInput::new(amount, sig_indices))
}

pub fn transfer_output(amount: u64, owners: OutputOwners) -> FxOutput {
    FxOutput::Transfer(TransferOutput::new(amount, owners))
}

pub fn signed_credential(keys: &[&KeyPair]) -> Credential {
    Credential::new(
        keys.iter()
            .map(|kp| kp.sign(&TX_BYTES).unwrap())
            .collect(),
    )
}

pub fn mint_utxo() -> FxOutput {
    FxOutput::Mint(MintOutput::new(owners_of(&[signer()])))
}

pub fn mint_operation() -> MintOperation {
    MintOperation::new(
        Input::new(vec![0]),
        MintOutput::new(owners_of(&[signer()])),
        TransferOutput::new(1, owners_of(&[signer()])),
    )
}
