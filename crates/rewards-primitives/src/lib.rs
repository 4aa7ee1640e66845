//! Core value types for the reward distribution engine
//!
//! This crate defines the address, token, and hash newtypes shared by the
//! Merkle verification and engine crates, along with the leaf encoding that
//! binds a recipient and an entitlement amount into a tree leaf.
//!
//! All byte-level types serialize as `0x`-prefixed hex strings.

pub mod address;
pub mod hash;
pub mod leaf;
pub mod token;

pub use address::{Address, AddressParseError};
pub use hash::Hash256;
pub use leaf::entitlement_leaf;
pub use token::TokenId;

/// Entitlement and balance amounts.
///
/// Wide enough to hold any `uint256`-style amount the off-chain tree builder
/// would realistically commit to; all arithmetic on amounts is checked.
pub type Amount = u128;
