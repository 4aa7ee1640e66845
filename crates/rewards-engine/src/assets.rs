//! Asset-transfer collaborator
//!
//! Actual movement of value is delegated to an external ledger behind the
//! [`AssetTransfer`] trait, which hides the native/token distinction behind
//! the uniform `TokenId` interface. The engine validates the value-matching
//! rule for native deposits before calling in; implementations are expected
//! to fail (not panic) when the depositor lacks funds or authorization.
//!
//! [`InMemoryAssets`] is the in-process implementation used by tests and
//! simulations.

use crate::error::{EngineError, EngineResult};
use rewards_primitives::{Address, Amount, TokenId};
use std::collections::HashMap;

/// External ledger moving value in and out of the engine.
pub trait AssetTransfer {
    /// Pull `amount` of `token` from `from` into the engine's custody.
    ///
    /// For the native token, `attached_value` is the value sent along with
    /// the request (already validated to equal `amount` by the engine).
    /// For other tokens the implementation performs an allowance-style pull.
    fn transfer_in(
        &mut self,
        token: TokenId,
        from: Address,
        amount: Amount,
        attached_value: Amount,
    ) -> EngineResult<()>;

    /// Pay `amount` of `token` out of the engine's custody to `to`.
    fn transfer_out(&mut self, token: TokenId, to: Address, amount: Amount) -> EngineResult<()>;
}

/// In-memory asset ledger: one balance per (account, token).
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssets {
    balances: HashMap<(Address, TokenId), Amount>,
}

impl InMemoryAssets {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit an account out of thin air (test/simulation setup).
    ///
    /// Saturates at `Amount::MAX` so fixture setup stays infallible; real
    /// value movement goes through the checked [`AssetTransfer`] methods.
    pub fn mint(&mut self, account: Address, token: TokenId, amount: Amount) {
        let balance = self.balances.entry((account, token)).or_insert(0);
        *balance = balance.saturating_add(amount);
    }

    /// Balance of an account for a token
    pub fn balance(&self, account: Address, token: TokenId) -> Amount {
        self.balances.get(&(account, token)).copied().unwrap_or(0)
    }

    fn debit(&mut self, account: Address, token: TokenId, amount: Amount) -> EngineResult<()> {
        let available = self.balance(account, token);
        if available < amount {
            return Err(EngineError::InsufficientBalance {
                token,
                available,
                requested: amount,
            });
        }
        self.balances.insert((account, token), available - amount);
        Ok(())
    }
}

impl AssetTransfer for InMemoryAssets {
    fn transfer_in(
        &mut self,
        token: TokenId,
        from: Address,
        amount: Amount,
        _attached_value: Amount,
    ) -> EngineResult<()> {
        self.debit(from, token, amount)
    }

    fn transfer_out(&mut self, token: TokenId, to: Address, amount: Amount) -> EngineResult<()> {
        let balance = self.balances.entry((to, token)).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(EngineError::BalanceOverflow(token))?;
        Ok(())
    }
}
