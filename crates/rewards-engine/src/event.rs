//! Observable engine events
//!
//! Side effects are modeled as an explicit, inspectable log rather than an
//! implicit channel, so callers and tests can assert the exact sequence an
//! operation emitted.

use rewards_primitives::{Address, Amount, Hash256, TokenId};
use serde::{Deserialize, Serialize};

/// A notification emitted by a successful engine operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Event {
    /// A token was added to the whitelist
    TokenWhitelisted { token: TokenId },

    /// A token was removed from the whitelist
    TokenRemoved { token: TokenId },

    /// A new epoch was published
    MerkleRootAdded {
        epoch: u64,
        root: Hash256,
        token: TokenId,
    },

    /// The latest epoch's root/token pair was replaced
    MerkleRootUpdated {
        epoch: u64,
        root: Hash256,
        token: TokenId,
    },

    /// Funds were deposited into the vault
    RewardAdded { token: TokenId, amount: Amount },

    /// A claim succeeded and the payout was authorized
    RewardClaimed { recipient: Address, amount: Amount },
}
