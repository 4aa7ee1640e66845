//! Merkle Rewards - Proof-Based Reward Distribution
//!
//! This workspace implements a Merkle-proof reward/airdrop distribution
//! engine: per distribution round ("epoch") an administrator publishes a
//! Merkle root committing to `(recipient, amount)` entitlements for a
//! reward token, and recipients claim against it exactly once with an
//! inclusion proof.
//!
//! # Crates
//!
//! - `rewards-primitives`: addresses, token identifiers, hashes, leaf encoding
//! - `rewards-merkle`: sorted-pair proof verification and tree construction
//! - `rewards-engine`: epoch/claim/vault accounting and batch execution
//!
//! # Example
//!
//! ```
//! use merkle_rewards::engine::{InMemoryAssets, RewardDistribution};
//! use merkle_rewards::merkle::MerkleTree;
//! use merkle_rewards::primitives::{entitlement_leaf, Address, TokenId};
//!
//! let owner = Address::from_bytes([1u8; 20]);
//! let alice = Address::from_bytes([2u8; 20]);
//!
//! let mut assets = InMemoryAssets::new();
//! assets.mint(owner, TokenId::NATIVE, 1_000);
//! let mut engine = RewardDistribution::new(owner, assets);
//!
//! let tree = MerkleTree::from_leaves(vec![
//!     entitlement_leaf(alice, 100),
//!     entitlement_leaf(owner, 50),
//! ])
//! .unwrap();
//!
//! engine.deposit(owner, TokenId::NATIVE, 1_000, 1_000).unwrap();
//! engine.add_merkle_root(owner, tree.root(), TokenId::NATIVE).unwrap();
//! engine.claim(alice, 1, 100, &tree.proof(0).unwrap()).unwrap();
//! assert!(engine.is_claimed(1, alice));
//! ```

// Re-export sub-crates
pub use rewards_engine as engine;
pub use rewards_merkle as merkle;
pub use rewards_primitives as primitives;
