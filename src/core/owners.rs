//! Threshold multisig ownership predicate
//!
//! An [`OutputOwners`] names a set of addresses, how many of them must sign,
//! and the earliest time the output may be spent. Spenders refer to signers
//! by index into `addresses`, so the address list must stay in canonical
//! (strictly ascending) order: two owners describing the same set must list
//! it identically, and an index always resolves to one address.

use serde::{Deserialize, Serialize};

use super::error::{FxError, OwnersFault};
use super::ids::ShortId;

/// Owners of an output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOwners {
    /// Earliest Unix time (seconds) at which the output can be spent.
    /// 0 means unlocked.
    pub locktime: u64,
    /// Number of distinct signatures required
    pub threshold: u32,
    /// Signer addresses, strictly ascending
    pub addresses: Vec<ShortId>,
}

impl OutputOwners {
    pub fn new(locktime: u64, threshold: u32, addresses: Vec<ShortId>) -> Self {
        Self {
            locktime,
            threshold,
            addresses,
        }
    }

    /// Owners with no time lock
    pub fn unlocked(threshold: u32, addresses: Vec<ShortId>) -> Self {
        Self::new(0, threshold, addresses)
    }

    /// Check the threshold and address-set invariants
    pub fn validate_structure(&self) -> Result<(), FxError> {
        self.check_structure().map_err(FxError::InvalidOwners)
    }

    pub(crate) fn check_structure(&self) -> Result<(), OwnersFault> {
        let addresses = self.addresses.len();
        if self.threshold as usize > addresses {
            return Err(OwnersFault::ThresholdTooHigh {
                threshold: self.threshold,
                addresses,
            });
        }
        if self.threshold == 0 && addresses > 0 {
            return Err(OwnersFault::ZeroThreshold { addresses });
        }
        if !self.addresses_sorted_unique() {
            return Err(OwnersFault::UnsortedAddresses);
        }
        Ok(())
    }

    /// True if every address is strictly greater than the one before it
    pub fn addresses_sorted_unique(&self) -> bool {
        self.addresses.windows(2).all(|pair| pair[0] < pair[1])
    }

    /// Fail if the output cannot be spent yet at `now`
    pub fn check_unlocked(&self, now: u64) -> Result<(), FxError> {
        if self.locktime > now {
            return Err(FxError::TimeLocked {
                locktime: self.locktime,
                now,
            });
        }
        Ok(())
    }

    /// Check that `signature_indices` claims exactly `threshold` distinct
    /// signers, all of which exist in this address set.
    ///
    /// Indices are bounded by `self.addresses.len()`.
    pub fn match_signatures(&self, signature_indices: &[u32]) -> Result<(), FxError> {
        let signers = signature_indices.len();
        let threshold = self.threshold as usize;
        if signers > threshold {
            return Err(FxError::TooManySigners {
                threshold: self.threshold,
                signers,
            });
        }
        if signers < threshold {
            return Err(FxError::TooFewSigners {
                threshold: self.threshold,
                signers,
            });
        }

        if !indices_strictly_increasing(signature_indices) {
            return Err(FxError::UnsortedOrDuplicateIndices);
        }

        let addresses = self.addresses.len();
        if let Some(&index) = signature_indices
            .iter()
            .find(|&&index| index as usize >= addresses)
        {
            return Err(FxError::IndexOutOfRange { index, addresses });
        }
        Ok(())
    }

    /// Address at a signer index
    pub fn address_at(&self, index: u32) -> Option<&ShortId> {
        self.addresses.get(index as usize)
    }

    /// True if `other` is controlled by the same signers with the same
    /// threshold. Locktimes are not compared.
    pub fn has_same_authority(&self, other: &OutputOwners) -> bool {
        self.threshold == other.threshold && self.addresses == other.addresses
    }
}

pub(crate) fn indices_strictly_increasing(indices: &[u32]) -> bool {
    indices.windows(2).all(|pair| pair[0] < pair[1])
}
