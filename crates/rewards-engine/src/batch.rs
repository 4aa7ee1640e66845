//! Batched engine calls
//!
//! A batch executes an ordered sequence of engine calls against the same
//! state as one atomic unit. The policy is all-or-nothing: the first
//! failing call restores the pre-batch state (engine and asset ledger
//! alike) and its precise error kind is surfaced, so a recipient claiming
//! several epochs either receives every payout or none.

use crate::assets::AssetTransfer;
use crate::engine::RewardDistribution;
use crate::error::EngineResult;
use rewards_primitives::{Address, Amount, Hash256, TokenId};
use serde::{Deserialize, Serialize};

/// One call inside a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "op")]
pub enum EngineCall {
    /// Claim the caller's entitlement for an epoch
    Claim {
        epoch: u64,
        amount: Amount,
        proof: Vec<Hash256>,
    },

    /// Deposit into the vault
    Deposit {
        token: TokenId,
        amount: Amount,
        attached_value: Amount,
    },
}

impl<A: AssetTransfer + Clone> RewardDistribution<A> {
    /// Execute `calls` in order as an atomic unit.
    ///
    /// Requires `A: Clone` so the asset ledger participates in the
    /// snapshot; a host with an external ledger should front this with its
    /// own transaction mechanism instead.
    pub fn execute_batch(&mut self, caller: Address, calls: &[EngineCall]) -> EngineResult<()> {
        let snapshot = self.clone();
        for call in calls {
            let result = match call {
                EngineCall::Claim { epoch, amount, proof } => {
                    self.claim(caller, *epoch, *amount, proof)
                }
                EngineCall::Deposit { token, amount, attached_value } => {
                    self.deposit(caller, *token, *amount, *attached_value)
                }
            };
            if let Err(e) = result {
                *self = snapshot;
                return Err(e);
            }
        }
        Ok(())
    }
}
