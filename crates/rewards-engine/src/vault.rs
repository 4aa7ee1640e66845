//! Per-token vault balances
//!
//! The vault is the source of truth for "can this claim be paid": balances
//! grow only through deposits and shrink only through successful payouts,
//! so cumulative payouts can never exceed cumulative deposits, even against
//! a maliciously constructed root.

use crate::error::{EngineError, EngineResult};
use rewards_primitives::{Amount, TokenId};
use std::collections::HashMap;

/// Running per-token balance accounting
#[derive(Debug, Clone, Default)]
pub struct RewardVault {
    balances: HashMap<TokenId, Amount>,
}

impl RewardVault {
    /// Create an empty vault
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance for a token (0 if never deposited)
    pub fn balance(&self, token: TokenId) -> Amount {
        self.balances.get(&token).copied().unwrap_or(0)
    }

    /// Fail with `InsufficientBalance` unless `amount` is covered.
    pub fn ensure_available(&self, token: TokenId, amount: Amount) -> EngineResult<()> {
        let available = self.balance(token);
        if available < amount {
            return Err(EngineError::InsufficientBalance {
                token,
                available,
                requested: amount,
            });
        }
        Ok(())
    }

    /// Credit a deposit; fails with `BalanceOverflow` if the balance would
    /// leave the amount type's range.
    pub fn credit(&mut self, token: TokenId, amount: Amount) -> EngineResult<()> {
        let balance = self.balances.entry(token).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(EngineError::BalanceOverflow(token))?;
        Ok(())
    }

    /// Debit a payout; fails with `InsufficientBalance` on underflow.
    pub fn debit(&mut self, token: TokenId, amount: Amount) -> EngineResult<()> {
        self.ensure_available(token, amount)?;
        if let Some(balance) = self.balances.get_mut(&token) {
            *balance -= amount;
        }
        Ok(())
    }
}
