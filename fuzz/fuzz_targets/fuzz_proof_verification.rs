//! Fuzz target for Merkle proof verification
//!
//! This target ensures verification:
//! 1. Never panics on any leaf/root/proof triple
//! 2. Is deterministic
//! 3. Accepts every honestly generated proof and rejects it after tampering

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rewards_merkle::{verify_proof, MerkleTree};
use rewards_primitives::Hash256;

/// Arbitrary leaf/root/proof triple
#[derive(Debug, Arbitrary)]
struct RawVerifyInput {
    leaf: [u8; 32],
    root: [u8; 32],
    siblings: Vec<[u8; 32]>,
}

/// Honest tree construction followed by tampering
#[derive(Debug, Arbitrary)]
struct TreeInput {
    leaf_seeds: Vec<u8>,
    index: usize,
    tamper_byte: u8,
}

#[derive(Debug, Arbitrary)]
enum FuzzInput {
    Raw(RawVerifyInput),
    Tree(TreeInput),
}

fuzz_target!(|input: FuzzInput| {
    match input {
        FuzzInput::Raw(raw) => {
            let leaf = Hash256::from_bytes(raw.leaf);
            let root = Hash256::from_bytes(raw.root);
            let proof: Vec<Hash256> = raw
                .siblings
                .iter()
                .take(64)
                .map(|s| Hash256::from_bytes(*s))
                .collect();

            // Verification should never panic
            let v1 = verify_proof(leaf, root, &proof);

            // Verification should be deterministic
            let v2 = verify_proof(leaf, root, &proof);
            assert_eq!(v1, v2);
        }
        FuzzInput::Tree(t) => {
            if t.leaf_seeds.is_empty() {
                return;
            }
            let leaves: Vec<Hash256> = t
                .leaf_seeds
                .iter()
                .take(64)
                .map(|s| Hash256::keccak256(&[*s]))
                .collect();
            let index = t.index % leaves.len();

            let tree = MerkleTree::from_leaves(leaves.clone()).expect("non-empty");
            let proof = tree.proof(index).expect("index in range");

            // Every honest proof verifies
            assert!(verify_proof(leaves[index], tree.root(), &proof));

            // A tampered root never verifies
            let mut bad_root = *tree.root().as_bytes();
            bad_root[0] ^= t.tamper_byte | 1;
            assert!(!verify_proof(
                leaves[index],
                Hash256::from_bytes(bad_root),
                &proof
            ));
        }
    }
});
