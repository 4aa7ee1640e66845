//! Epoch ledger
//!
//! Sequential, append-mostly log of distribution rounds. Each epoch binds
//! its number to a (root, token) pair. Epoch numbers are dense and start at
//! 1; the latest epoch's pair may be replaced in place (to correct a
//! just-published root without burning an epoch slot), but prior epochs are
//! immutable and nothing is ever deleted.

use crate::error::{EngineError, EngineResult};
use rewards_primitives::{Hash256, TokenId};
use serde::{Deserialize, Serialize};

/// The (root, token) pair published for one epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochEntry {
    /// Merkle root committing to this epoch's entitlements
    pub root: Hash256,

    /// Reward token the entitlements are paid in
    pub token: TokenId,
}

/// Append-mostly log of epochs
#[derive(Debug, Clone, Default)]
pub struct EpochLedger {
    epochs: Vec<EpochEntry>,
}

impl EpochLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// The current (highest) epoch number; 0 when no epoch exists yet
    pub fn current(&self) -> u64 {
        self.epochs.len() as u64
    }

    /// Append a new epoch and return its number (always `previous + 1`).
    pub fn append(&mut self, root: Hash256, token: TokenId) -> u64 {
        self.epochs.push(EpochEntry { root, token });
        self.epochs.len() as u64
    }

    /// Replace the latest epoch's (root, token) pair in place.
    ///
    /// Returns the (unchanged) epoch number. Fails with `NoEpochPublished`
    /// when the ledger is still empty.
    pub fn update_latest(&mut self, root: Hash256, token: TokenId) -> EngineResult<u64> {
        let last = self.epochs.last_mut().ok_or(EngineError::NoEpochPublished)?;
        *last = EpochEntry { root, token };
        Ok(self.epochs.len() as u64)
    }

    /// Look up an epoch by number.
    pub fn get(&self, number: u64) -> EngineResult<&EpochEntry> {
        if number == 0 || number > self.epochs.len() as u64 {
            return Err(EngineError::NotFound(number));
        }
        Ok(&self.epochs[(number - 1) as usize])
    }
}
