//! Reward distribution engine
//!
//! Accounting and verification core for Merkle-proof reward/airdrop
//! distribution. An administrator whitelists reward tokens, deposits funds,
//! and publishes per-epoch Merkle roots; recipients submit inclusion proofs
//! to claim their entitlement exactly once per epoch.
//!
//! # Architecture
//!
//! - **TokenRegistry**: owner-controlled whitelist of reward tokens
//! - **EpochLedger**: dense, append-mostly log of (root, token) pairs
//! - **ClaimTracker**: set-once claimed state per (epoch, recipient)
//! - **RewardVault**: per-token balances backing payouts
//! - **RewardDistribution**: orchestrates claims (verify, mark, pay) and
//!   admin operations, emitting an explicit [`Event`] log
//! - **Batching**: [`EngineCall`] sequences executed all-or-nothing
//!
//! Value movement is delegated to an [`AssetTransfer`] collaborator;
//! [`InMemoryAssets`] serves tests and simulation.
//!
//! # Concurrency
//!
//! The engine is a single-writer state machine: every mutating operation
//! takes `&mut self`. Hosts accepting concurrent claim submissions must
//! serialize them before calling in; the claimed-mark is committed before
//! the payout collaborator runs, so a re-entrant payout path can never
//! observe a claim as unclaimed while its payout is in flight.

pub mod assets;
pub mod batch;
pub mod claims;
pub mod engine;
pub mod epoch;
pub mod error;
pub mod event;
pub mod registry;
pub mod vault;

pub use assets::{AssetTransfer, InMemoryAssets};
pub use batch::EngineCall;
pub use claims::ClaimTracker;
pub use engine::RewardDistribution;
pub use epoch::{EpochEntry, EpochLedger};
pub use error::{EngineError, EngineResult};
pub use event::Event;
pub use registry::TokenRegistry;
pub use vault::RewardVault;
