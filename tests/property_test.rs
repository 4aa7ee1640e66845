//! Property-based tests for the reward distribution engine
//!
//! These tests use proptest to verify invariants that should hold for all
//! inputs:
//! - A proof verifies only for the exact (recipient, amount) it commits to
//! - Claimed state transitions false -> true at most once per (epoch, recipient)
//! - Cumulative payouts never exceed cumulative deposits

use proptest::prelude::*;
use rewards_engine::{EngineError, InMemoryAssets, RewardDistribution};
use rewards_merkle::{verify_proof, MerkleTree};
use rewards_primitives::{entitlement_leaf, Address, Amount, TokenId};

// =============================================================================
// Test Helpers
// =============================================================================

fn distinct_addresses(seeds: &[u8]) -> Vec<Address> {
    seeds
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let mut bytes = [0u8; 20];
            bytes[0] = *s;
            bytes[1] = i as u8;
            bytes[19] = 1; // never the zero address
            Address::from_bytes(bytes)
        })
        .collect()
}

fn entitlement_tree(recipients: &[Address], amounts: &[Amount]) -> MerkleTree {
    let leaves = recipients
        .iter()
        .zip(amounts)
        .map(|(r, a)| entitlement_leaf(*r, *a))
        .collect();
    MerkleTree::from_leaves(leaves).unwrap()
}

// =============================================================================
// Proof binding
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every committed leaf verifies with its own proof.
    #[test]
    fn prop_committed_leaves_verify(
        seeds in prop::collection::vec(any::<u8>(), 1..24),
        amounts in prop::collection::vec(1u64..u64::MAX, 24),
    ) {
        let recipients = distinct_addresses(&seeds);
        let amounts: Vec<Amount> = amounts[..recipients.len()]
            .iter()
            .map(|a| *a as Amount)
            .collect();
        let tree = entitlement_tree(&recipients, &amounts);

        for (i, (recipient, amount)) in recipients.iter().zip(&amounts).enumerate() {
            let proof = tree.proof(i).unwrap();
            prop_assert!(verify_proof(
                entitlement_leaf(*recipient, *amount),
                tree.root(),
                &proof
            ));
        }
    }

    /// Property: altering the amount by any nonzero delta breaks the proof.
    #[test]
    fn prop_amount_delta_breaks_proof(
        seeds in prop::collection::vec(any::<u8>(), 2..16),
        amount in 1u64..u64::MAX,
        delta in 1u64..u64::MAX,
        index in any::<prop::sample::Index>(),
    ) {
        let recipients = distinct_addresses(&seeds);
        let amounts: Vec<Amount> = vec![amount as Amount; recipients.len()];
        let tree = entitlement_tree(&recipients, &amounts);

        let i = index.index(recipients.len());
        let proof = tree.proof(i).unwrap();
        let wrong = (amount as Amount).wrapping_add(delta as Amount);
        prop_assume!(wrong != amount as Amount);
        prop_assert!(!verify_proof(
            entitlement_leaf(recipients[i], wrong),
            tree.root(),
            &proof
        ));
    }

    /// Property: one recipient's proof never verifies another's leaf.
    #[test]
    fn prop_proof_not_transferable(
        seeds in prop::collection::vec(any::<u8>(), 2..16),
        amount in 1u64..u64::MAX,
        index in any::<prop::sample::Index>(),
    ) {
        let recipients = distinct_addresses(&seeds);
        let amounts: Vec<Amount> = vec![amount as Amount; recipients.len()];
        let tree = entitlement_tree(&recipients, &amounts);

        let i = index.index(recipients.len());
        let j = (i + 1) % recipients.len();
        let proof = tree.proof(i).unwrap();
        prop_assert!(!verify_proof(
            entitlement_leaf(recipients[j], amount as Amount),
            tree.root(),
            &proof
        ));
    }
}

// =============================================================================
// Engine invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: after a successful claim, every retry fails with
    /// RewardAlreadyClaimed and moves no funds.
    #[test]
    fn prop_at_most_one_claim(
        seeds in prop::collection::vec(any::<u8>(), 2..12),
        amounts in prop::collection::vec(1u64..1_000_000, 12),
        retries in 1usize..4,
    ) {
        let owner = Address::from_bytes([0xFFu8; 20]);
        let recipients = distinct_addresses(&seeds);
        let amounts: Vec<Amount> = amounts[..recipients.len()]
            .iter()
            .map(|a| *a as Amount)
            .collect();
        let total: Amount = amounts.iter().sum();

        let mut assets = InMemoryAssets::new();
        assets.mint(owner, TokenId::NATIVE, total);
        let mut engine = RewardDistribution::new(owner, assets);

        let tree = entitlement_tree(&recipients, &amounts);
        engine.deposit(owner, TokenId::NATIVE, total, total).unwrap();
        engine.add_merkle_root(owner, tree.root(), TokenId::NATIVE).unwrap();

        for (i, (recipient, amount)) in recipients.iter().zip(&amounts).enumerate() {
            let proof = tree.proof(i).unwrap();
            engine.claim(*recipient, 1, *amount, &proof).unwrap();
            let paid = engine.assets().balance(*recipient, TokenId::NATIVE);
            prop_assert_eq!(paid, *amount);

            for _ in 0..retries {
                prop_assert_eq!(
                    engine.claim(*recipient, 1, *amount, &proof).unwrap_err(),
                    EngineError::RewardAlreadyClaimed { epoch: 1, recipient: *recipient }
                );
            }
            prop_assert_eq!(engine.assets().balance(*recipient, TokenId::NATIVE), paid);
        }

        // Every entitlement paid exactly once drains the vault completely.
        prop_assert_eq!(engine.vault_balance(TokenId::NATIVE), 0);
    }

    /// Property: whatever subset of claims succeeds, payouts never exceed
    /// deposits.
    #[test]
    fn prop_conservation_under_underfunding(
        seeds in prop::collection::vec(any::<u8>(), 2..12),
        amounts in prop::collection::vec(1u64..1_000_000, 12),
        funding_ratio in 0u64..=100,
    ) {
        let owner = Address::from_bytes([0xFFu8; 20]);
        let recipients = distinct_addresses(&seeds);
        let amounts: Vec<Amount> = amounts[..recipients.len()]
            .iter()
            .map(|a| *a as Amount)
            .collect();
        let total: Amount = amounts.iter().sum();
        let deposited = total * funding_ratio as Amount / 100;

        let mut assets = InMemoryAssets::new();
        assets.mint(owner, TokenId::NATIVE, total);
        let mut engine = RewardDistribution::new(owner, assets);

        let tree = entitlement_tree(&recipients, &amounts);
        if deposited > 0 {
            engine.deposit(owner, TokenId::NATIVE, deposited, deposited).unwrap();
        }
        engine.add_merkle_root(owner, tree.root(), TokenId::NATIVE).unwrap();

        let mut paid_out: Amount = 0;
        for (i, (recipient, amount)) in recipients.iter().zip(&amounts).enumerate() {
            let proof = tree.proof(i).unwrap();
            match engine.claim(*recipient, 1, *amount, &proof) {
                Ok(()) => paid_out += *amount,
                Err(EngineError::InsufficientBalance { .. }) => {
                    // Underfunded claim must not consume the entitlement.
                    prop_assert!(!engine.is_claimed(1, *recipient));
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }

        prop_assert!(paid_out <= deposited);
        prop_assert_eq!(engine.vault_balance(TokenId::NATIVE), deposited - paid_out);
    }
}
