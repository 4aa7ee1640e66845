//! Off-chain Merkle tree construction
//!
//! Builds the tree whose root the administrator publishes and generates the
//! sibling proofs recipients submit. Construction matches the verifier
//! exactly: parents are sorted-pair Keccak-256 hashes, and an odd trailing
//! node is promoted to the next level unhashed (its proof simply has no
//! sibling at that level).

use crate::error::{MerkleError, MerkleResult};
use crate::verify::hash_pair;
use rewards_primitives::Hash256;

/// A Merkle tree over entitlement leaves
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// All levels, bottom-up; level 0 holds the leaves, the last level the root
    levels: Vec<Vec<Hash256>>,
}

impl MerkleTree {
    /// Build a tree from leaf hashes.
    pub fn from_leaves(leaves: Vec<Hash256>) -> MerkleResult<Self> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyTree);
        }

        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let current = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            let mut i = 0;
            while i < current.len() {
                if i + 1 < current.len() {
                    next.push(hash_pair(&current[i], &current[i + 1]));
                } else {
                    // Odd trailing node: promote unhashed
                    next.push(current[i]);
                }
                i += 2;
            }
            levels.push(next);
        }

        Ok(Self { levels })
    }

    /// The tree root
    pub fn root(&self) -> Hash256 {
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Generate the sibling proof for the leaf at `index`.
    pub fn proof(&self, index: usize) -> MerkleResult<Vec<Hash256>> {
        if index >= self.leaf_count() {
            return Err(MerkleError::LeafIndexOutOfBounds {
                index,
                leaves: self.leaf_count(),
            });
        }

        let mut proof = Vec::with_capacity(self.depth());
        let mut current = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = if current % 2 == 0 {
                current + 1
            } else {
                current - 1
            };
            // A promoted odd node has no sibling at this level
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            current /= 2;
        }

        Ok(proof)
    }
}
