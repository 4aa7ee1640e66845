//! Per-(epoch, recipient) claim tracking
//!
//! A claim record is a set-once boolean: once marked, it stays marked.
//! Check-then-set happens under the engine's `&mut` borrow, so it is atomic
//! with respect to other top-level requests.

use crate::error::{EngineError, EngineResult};
use rewards_primitives::Address;
use std::collections::HashSet;

/// Tracks which (epoch, recipient) pairs have already been paid
#[derive(Debug, Clone, Default)]
pub struct ClaimTracker {
    claimed: HashSet<(u64, Address)>,
}

impl ClaimTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the recipient has claimed for this epoch
    pub fn is_claimed(&self, epoch: u64, recipient: Address) -> bool {
        self.claimed.contains(&(epoch, recipient))
    }

    /// Mark a claim, failing if one was already recorded.
    pub fn mark(&mut self, epoch: u64, recipient: Address) -> EngineResult<()> {
        if !self.claimed.insert((epoch, recipient)) {
            return Err(EngineError::RewardAlreadyClaimed { epoch, recipient });
        }
        Ok(())
    }

    /// Undo a mark. Only for the engine's payout-failure rollback; the
    /// public contract is that a mark is permanent.
    pub(crate) fn clear(&mut self, epoch: u64, recipient: Address) {
        self.claimed.remove(&(epoch, recipient));
    }
}
