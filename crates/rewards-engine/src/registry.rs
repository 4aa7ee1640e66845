//! Reward token whitelist
//!
//! Gates which tokens may be deposited and distributed. The native sentinel
//! is never stored here: it is implicitly valid as a distribution and
//! deposit target, and attempting to whitelist it is rejected.

use crate::error::{EngineError, EngineResult};
use rewards_primitives::TokenId;

/// Owner-controlled set of whitelisted reward tokens.
///
/// Insertion order is preserved so introspection matches the order tokens
/// were added. Re-adding a whitelisted token and removing an absent one are
/// both no-ops: admin scripts stay idempotent, and the error taxonomy keeps
/// `InvalidToken` for deposit/distribution misuse.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: Vec<TokenId>,
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token to the whitelist.
    ///
    /// Returns `true` if the token was newly added, `false` for a no-op
    /// re-add. Rejects the native sentinel with `ZeroAddress`.
    pub fn add(&mut self, token: TokenId) -> EngineResult<bool> {
        if token.is_native() {
            return Err(EngineError::ZeroAddress);
        }
        if self.tokens.contains(&token) {
            return Ok(false);
        }
        self.tokens.push(token);
        Ok(true)
    }

    /// Remove a token from the whitelist.
    ///
    /// Returns `true` if the token was present. Does not touch epochs
    /// already created against the token; those are historical facts.
    pub fn remove(&mut self, token: TokenId) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| *t != token);
        self.tokens.len() != before
    }

    /// Whether a token is currently whitelisted
    pub fn is_whitelisted(&self, token: TokenId) -> bool {
        self.tokens.contains(&token)
    }

    /// Whether a token may be deposited or distributed (whitelisted or native)
    pub fn is_accepted(&self, token: TokenId) -> bool {
        token.is_native() || self.is_whitelisted(token)
    }

    /// The whitelisted tokens, in insertion order
    pub fn tokens(&self) -> &[TokenId] {
        &self.tokens
    }
}
