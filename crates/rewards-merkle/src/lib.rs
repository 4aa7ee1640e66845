//! Merkle proof verification and tree construction
//!
//! The engine only ever consumes this crate through [`verify_proof`]: given
//! a leaf, a published root, and an ordered list of sibling hashes, it
//! recomputes the root with sorted-pair Keccak-256 hashing and reports
//! whether it matches. Sorting each pair before hashing makes verification
//! independent of left/right position in the tree, so a proof is just a
//! list of siblings with no direction bits.
//!
//! [`MerkleTree`] is the matching off-chain builder used by tests and
//! distribution tooling. It is not part of the claim path.

pub mod error;
pub mod tree;
pub mod verify;

pub use error::{MerkleError, MerkleResult};
pub use tree::MerkleTree;
pub use verify::{hash_pair, verify_proof};
