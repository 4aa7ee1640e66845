//! Error types for Merkle tree construction

use thiserror::Error;

/// Errors that can occur while building a tree or generating a proof.
///
/// Proof *verification* never errors: any malformed input simply fails to
/// reproduce the root and verifies as false.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MerkleError {
    /// Tree construction requires at least one leaf
    #[error("merkle tree cannot be built from zero leaves")]
    EmptyTree,

    /// Proof requested for a leaf index past the end of the tree
    #[error("leaf index {index} out of bounds (tree has {leaves} leaves)")]
    LeafIndexOutOfBounds { index: usize, leaves: usize },
}

/// Result type for tree operations
pub type MerkleResult<T> = Result<T, MerkleError>;
