//! 20-byte account addresses
//!
//! Both recipients and the administrator identity are plain 20-byte
//! addresses. The zero address is representable (it doubles as the native
//! token sentinel) but helpers are provided to reject it where a real
//! account is required.

use thiserror::Error;

/// Errors from parsing an address out of a hex string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressParseError {
    /// Wrong number of hex characters
    #[error("invalid address length: expected 40 hex chars, got {0}")]
    InvalidLength(usize),

    /// Non-hex characters in the input
    #[error("invalid hex encoding: {0}")]
    InvalidHex(String),
}

/// A 20-byte account address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address
    pub const ZERO: Address = Address([0u8; 20]);

    /// Create from bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string, with or without `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
        let cleaned = s.trim().strip_prefix("0x").unwrap_or(s.trim());
        if cleaned.len() != 40 {
            return Err(AddressParseError::InvalidLength(cleaned.len()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(cleaned, &mut bytes)
            .map_err(|e| AddressParseError::InvalidHex(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Convert to hex string (lowercase, no 0x prefix)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Whether this is the all-zero address
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_prefix() {
        let addr = Address::from_hex("0x1234567890abcdef1234567890abcdef12345678").unwrap();
        assert_eq!(addr.to_hex(), "1234567890abcdef1234567890abcdef12345678");
    }

    #[test]
    fn test_parse_without_prefix() {
        let addr = Address::from_hex("1234567890abcdef1234567890abcdef12345678").unwrap();
        assert_eq!(addr.as_bytes().len(), 20);
    }

    #[test]
    fn test_parse_invalid_length() {
        assert_eq!(
            Address::from_hex("0x1234"),
            Err(AddressParseError::InvalidLength(4))
        );
    }

    #[test]
    fn test_parse_invalid_hex() {
        assert!(matches!(
            Address::from_hex("zz34567890abcdef1234567890abcdef12345678"),
            Err(AddressParseError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_zero_address() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_bytes([1u8; 20]).is_zero());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let addr = Address::from_bytes([7u8; 20]);
        let json = serde_json::to_string(&addr).unwrap();
        let recovered: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, recovered);
    }
}
