//! Claim engine orchestration
//!
//! [`RewardDistribution`] owns the registry, epoch ledger, claim tracker,
//! and vault, plus the asset-transfer collaborator and the event log. Every
//! operation takes the caller's identity explicitly; administrator-only
//! operations compare it against the stored owner.
//!
//! # Claim ordering
//!
//! A claim runs: resolve epoch, verify proof, check claimed-state, precheck
//! vault funding, mark claimed, debit vault, transfer out. The mark commits
//! *before* the payout side effect runs, so a collaborator that could
//! re-enter the claim path can never observe an unclaimed entitlement that
//! is about to be paid. The funding precheck runs before the mark, so an
//! underfunded vault never consumes an entitlement.

use crate::assets::AssetTransfer;
use crate::claims::ClaimTracker;
use crate::epoch::{EpochEntry, EpochLedger};
use crate::error::{EngineError, EngineResult};
use crate::event::Event;
use crate::registry::TokenRegistry;
use crate::vault::RewardVault;
use rewards_merkle::verify_proof;
use rewards_primitives::{entitlement_leaf, Address, Amount, Hash256, TokenId};

/// The reward distribution engine.
///
/// All mutating operations take `&mut self`: the engine assumes an
/// externally serialized single writer, as the borrow checker enforces
/// in-process. A host fronting concurrent claim submissions must serialize
/// claim processing (at minimum per `(epoch, recipient)` key) before
/// calling in, or the at-most-once claim invariant cannot be preserved.
#[derive(Clone)]
pub struct RewardDistribution<A: AssetTransfer> {
    owner: Address,
    registry: TokenRegistry,
    epochs: EpochLedger,
    claims: ClaimTracker,
    vault: RewardVault,
    assets: A,
    events: Vec<Event>,
}

impl<A: AssetTransfer> RewardDistribution<A> {
    /// Create an engine administered by `owner`.
    pub fn new(owner: Address, assets: A) -> Self {
        Self {
            owner,
            registry: TokenRegistry::new(),
            epochs: EpochLedger::new(),
            claims: ClaimTracker::new(),
            vault: RewardVault::new(),
            assets,
            events: Vec::new(),
        }
    }

    /// Create an engine with one token pre-whitelisted, as a deployment
    /// would configure its initial reward token.
    pub fn with_token(owner: Address, token: TokenId, assets: A) -> EngineResult<Self> {
        let mut engine = Self::new(owner, assets);
        engine.registry.add(token)?;
        engine.events.push(Event::TokenWhitelisted { token });
        Ok(engine)
    }

    fn ensure_owner(&self, caller: Address) -> EngineResult<()> {
        if caller != self.owner {
            return Err(EngineError::Unauthorized(caller));
        }
        Ok(())
    }

    fn ensure_accepted(&self, token: TokenId) -> EngineResult<()> {
        if !self.registry.is_accepted(token) {
            return Err(EngineError::InvalidToken(token));
        }
        Ok(())
    }

    // --- Administrative interface ---

    /// Whitelist a reward token. Re-adding is a no-op (no event).
    pub fn add_token(&mut self, caller: Address, token: TokenId) -> EngineResult<()> {
        self.ensure_owner(caller)?;
        if self.registry.add(token)? {
            self.events.push(Event::TokenWhitelisted { token });
        }
        Ok(())
    }

    /// Remove a token from the whitelist. Removing an absent token is a
    /// no-op (no event). Existing epochs for the token stay claimable.
    pub fn remove_token(&mut self, caller: Address, token: TokenId) -> EngineResult<()> {
        self.ensure_owner(caller)?;
        if self.registry.remove(token) {
            self.events.push(Event::TokenRemoved { token });
        }
        Ok(())
    }

    /// Publish a new epoch for a (root, token) pair and return its number.
    pub fn add_merkle_root(
        &mut self,
        caller: Address,
        root: Hash256,
        token: TokenId,
    ) -> EngineResult<u64> {
        self.ensure_owner(caller)?;
        self.ensure_accepted(token)?;
        let epoch = self.epochs.append(root, token);
        self.events.push(Event::MerkleRootAdded { epoch, root, token });
        Ok(epoch)
    }

    /// Replace the latest epoch's (root, token) pair in place.
    pub fn update_merkle_root(
        &mut self,
        caller: Address,
        root: Hash256,
        token: TokenId,
    ) -> EngineResult<()> {
        self.ensure_owner(caller)?;
        self.ensure_accepted(token)?;
        let epoch = self.epochs.update_latest(root, token)?;
        self.events.push(Event::MerkleRootUpdated { epoch, root, token });
        Ok(())
    }

    // --- Deposit interface ---

    /// Deposit `amount` of `token` into the vault.
    ///
    /// For the native token, `attached_value` must equal `amount` exactly;
    /// for whitelisted tokens, the asset collaborator pulls `amount` from
    /// the depositor (allowance-style) and `attached_value` is ignored.
    pub fn deposit(
        &mut self,
        caller: Address,
        token: TokenId,
        amount: Amount,
        attached_value: Amount,
    ) -> EngineResult<()> {
        self.ensure_accepted(token)?;
        if amount == 0 {
            return Err(EngineError::InvalidAmount);
        }
        if token.is_native() && attached_value != amount {
            return Err(EngineError::InsufficientBalance {
                token,
                available: attached_value,
                requested: amount,
            });
        }
        self.assets.transfer_in(token, caller, amount, attached_value)?;
        self.vault.credit(token, amount)?;
        self.events.push(Event::RewardAdded { token, amount });
        Ok(())
    }

    // --- Claim interface ---

    /// Claim the caller's entitlement for `epoch`.
    ///
    /// The proof must show that `(caller, amount)` is committed into the
    /// epoch's published root. A wrong amount or wrong epoch surfaces as
    /// `InvalidProof`, since the leaf binds both.
    pub fn claim(
        &mut self,
        caller: Address,
        epoch: u64,
        amount: Amount,
        proof: &[Hash256],
    ) -> EngineResult<()> {
        let EpochEntry { root, token } = *self.epochs.get(epoch)?;

        let leaf = entitlement_leaf(caller, amount);
        if !verify_proof(leaf, root, proof) {
            return Err(EngineError::InvalidProof);
        }

        if self.claims.is_claimed(epoch, caller) {
            return Err(EngineError::RewardAlreadyClaimed {
                epoch,
                recipient: caller,
            });
        }

        // Funding precheck before the mark: an underfunded vault must not
        // consume the entitlement.
        self.vault.ensure_available(token, amount)?;

        // Mark before paying out. The collaborator call is the only step
        // that can fail past this point; on failure both mutations are
        // rolled back so no partial state escapes the request.
        self.claims.mark(epoch, caller)?;
        self.vault.debit(token, amount)?;
        if let Err(e) = self.assets.transfer_out(token, caller, amount) {
            // Restoring the just-debited amount cannot overflow.
            self.vault.credit(token, amount).ok();
            self.claims.clear(epoch, caller);
            return Err(e);
        }

        self.events.push(Event::RewardClaimed {
            recipient: caller,
            amount,
        });
        Ok(())
    }

    // --- Read interface ---

    /// The administrator identity
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Current epoch count; 0 before the first root is published
    pub fn current_epoch(&self) -> u64 {
        self.epochs.current()
    }

    /// The (root, token) pair published for an epoch
    pub fn merkle_root(&self, epoch: u64) -> EngineResult<EpochEntry> {
        self.epochs.get(epoch).copied()
    }

    /// Whether a token is whitelisted
    pub fn is_whitelisted(&self, token: TokenId) -> bool {
        self.registry.is_whitelisted(token)
    }

    /// Whitelisted tokens in insertion order
    pub fn white_list_tokens(&self) -> &[TokenId] {
        self.registry.tokens()
    }

    /// Whether a recipient has claimed for an epoch
    pub fn is_claimed(&self, epoch: u64, recipient: Address) -> bool {
        self.claims.is_claimed(epoch, recipient)
    }

    /// Current vault balance for a token
    pub fn vault_balance(&self, token: TokenId) -> Amount {
        self.vault.balance(token)
    }

    /// Events emitted so far, oldest first
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain the event log
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// The asset collaborator (read access for tests and hosts)
    pub fn assets(&self) -> &A {
        &self.assets
    }
}
