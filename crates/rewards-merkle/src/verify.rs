//! Sorted-pair proof verification
//!
//! Notes on construction:
//! - Pairs are hashed in sorted order (numerically by 32-byte value), so
//!   when folding the proof we place the lower value on the left before
//!   hashing. One proof path then verifies regardless of whether the leaf
//!   was the left or right child at each level.
//! - The leaf scheme is `rewards_primitives::entitlement_leaf`; off-chain
//!   builders must use the exact same byte order to match.

use rewards_primitives::Hash256;

/// Hash a pair of nodes in sorted order.
pub fn hash_pair(a: &Hash256, b: &Hash256) -> Hash256 {
    if a <= b {
        Hash256::keccak256_concat(a, b)
    } else {
        Hash256::keccak256_concat(b, a)
    }
}

/// Verify an inclusion proof for `leaf` against `root`.
///
/// Pure function of its inputs. A wrong leaf, a wrong root, a truncated or
/// reordered proof all return `false`; nothing here can fail with an error.
pub fn verify_proof(leaf: Hash256, root: Hash256, proof: &[Hash256]) -> bool {
    proof.iter().fold(leaf, |acc, sibling| hash_pair(&acc, sibling)) == root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_pair_is_symmetric() {
        let a = Hash256::from_bytes([1u8; 32]);
        let b = Hash256::from_bytes([2u8; 32]);
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }

    #[test]
    fn test_empty_proof_requires_leaf_eq_root() {
        let leaf = Hash256::keccak256(b"leaf");
        assert!(verify_proof(leaf, leaf, &[]));
        assert!(!verify_proof(leaf, Hash256::keccak256(b"other"), &[]));
    }

    #[test]
    fn test_two_leaf_proof() {
        let left = Hash256::keccak256(b"left");
        let right = Hash256::keccak256(b"right");
        let root = hash_pair(&left, &right);

        assert!(verify_proof(left, root, &[right]));
        assert!(verify_proof(right, root, &[left]));
        assert!(!verify_proof(left, root, &[left]));
    }

    #[test]
    fn test_reordered_proof_fails() {
        let leaves: Vec<Hash256> = (0u8..4)
            .map(|i| Hash256::keccak256(&[i]))
            .collect();
        let n01 = hash_pair(&leaves[0], &leaves[1]);
        let n23 = hash_pair(&leaves[2], &leaves[3]);
        let root = hash_pair(&n01, &n23);

        assert!(verify_proof(leaves[0], root, &[leaves[1], n23]));
        assert!(!verify_proof(leaves[0], root, &[n23, leaves[1]]));
    }

    #[test]
    fn test_truncated_proof_fails() {
        let leaves: Vec<Hash256> = (0u8..4)
            .map(|i| Hash256::keccak256(&[i]))
            .collect();
        let n01 = hash_pair(&leaves[0], &leaves[1]);
        let n23 = hash_pair(&leaves[2], &leaves[3]);
        let root = hash_pair(&n01, &n23);

        assert!(!verify_proof(leaves[0], root, &[leaves[1]]));
    }
}
