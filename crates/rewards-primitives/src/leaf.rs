//! Entitlement leaf encoding
//!
//! A leaf commits to one `(recipient, amount)` entitlement:
//!
//! ```text
//! leaf = keccak256(recipient (20 bytes) || amount (32 bytes, big-endian))
//! ```
//!
//! This is the packed encoding of an address followed by a 256-bit amount,
//! so off-chain builders producing `keccak256(abi.encodePacked(address,
//! uint256))` leaves hash to identical values. The amount occupies the low
//! 16 bytes of the 32-byte field; the high bytes are zero.

use crate::address::Address;
use crate::hash::Hash256;
use crate::Amount;

/// Compute the Merkle leaf for a recipient's entitlement.
///
/// The leaf is recomputed on every verification; it is never stored.
pub fn entitlement_leaf(recipient: Address, amount: Amount) -> Hash256 {
    let mut data = [0u8; 52];
    data[..20].copy_from_slice(recipient.as_bytes());
    data[36..52].copy_from_slice(&amount.to_be_bytes());
    Hash256::keccak256(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_deterministic() {
        let recipient = Address::from_bytes([1u8; 20]);
        assert_eq!(
            entitlement_leaf(recipient, 100),
            entitlement_leaf(recipient, 100)
        );
    }

    #[test]
    fn test_leaf_binds_amount() {
        let recipient = Address::from_bytes([1u8; 20]);
        assert_ne!(
            entitlement_leaf(recipient, 100),
            entitlement_leaf(recipient, 101)
        );
    }

    #[test]
    fn test_leaf_binds_recipient() {
        let a = Address::from_bytes([1u8; 20]);
        let b = Address::from_bytes([2u8; 20]);
        assert_ne!(entitlement_leaf(a, 100), entitlement_leaf(b, 100));
    }

    #[test]
    fn test_leaf_packed_encoding() {
        // Must equal keccak256 of the raw packed bytes.
        let recipient = Address::from_bytes([0x11u8; 20]);
        let amount: Amount = 0x0102;
        let mut packed = Vec::new();
        packed.extend_from_slice(&[0x11u8; 20]);
        packed.extend_from_slice(&[0u8; 16]);
        packed.extend_from_slice(&amount.to_be_bytes());
        assert_eq!(
            entitlement_leaf(recipient, amount),
            Hash256::keccak256(&packed)
        );
    }
}
