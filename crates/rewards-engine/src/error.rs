//! Error types for the reward distribution engine

use rewards_primitives::{Address, Amount, TokenId};
use thiserror::Error;

/// Errors that can occur during engine operations.
///
/// Every failure aborts the current request before any state mutation
/// escapes; the specific kind always surfaces to the caller, including
/// through batches.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Deposit or distribution referencing a non-whitelisted, non-native token
    #[error("token {0} is not whitelisted")]
    InvalidToken(TokenId),

    /// The zero/native sentinel supplied where a real token is required
    #[error("zero address supplied where a reward token is required")]
    ZeroAddress,

    /// Deposit amount of zero
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// Native deposit value mismatch, or vault underfunded at payout time
    #[error("insufficient balance for {token}: available {available}, requested {requested}")]
    InsufficientBalance {
        token: TokenId,
        available: Amount,
        requested: Amount,
    },

    /// Credit would push a balance past the amount type's range
    #[error("balance overflow for {0}")]
    BalanceOverflow(TokenId),

    /// Merkle verification failed for the supplied leaf/root/proof triple.
    ///
    /// A wrong amount, wrong epoch, or another recipient's proof all land
    /// here: the leaf binds recipient and amount, so any mismatch produces
    /// the wrong leaf and verification fails.
    #[error("merkle proof does not match the published root")]
    InvalidProof,

    /// Claim re-attempted after a prior success for the same (epoch, recipient)
    #[error("reward for epoch {epoch} already claimed by {recipient}")]
    RewardAlreadyClaimed { epoch: u64, recipient: Address },

    /// Reference to a nonexistent epoch
    #[error("epoch {0} does not exist")]
    NotFound(u64),

    /// Root update attempted before any epoch was published
    #[error("no epoch has been published yet")]
    NoEpochPublished,

    /// Non-administrator invoked an administrator-only operation
    #[error("caller {0} is not the administrator")]
    Unauthorized(Address),
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
