//! Reward token identifiers
//!
//! Tokens are identified by an opaque 20-byte address-like value. The
//! all-zero identifier is the native-asset sentinel: it is never
//! whitelisted but is always a valid distribution and deposit target.

use crate::address::{Address, AddressParseError};

/// Identifier of a reward token
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TokenId(pub [u8; 20]);

impl TokenId {
    /// Sentinel for the native asset
    pub const NATIVE: TokenId = TokenId([0u8; 20]);

    /// Create from bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string, with or without `0x` prefix
    pub fn from_hex(s: &str) -> Result<Self, AddressParseError> {
        Address::from_hex(s).map(|a| Self(a.0))
    }

    /// Convert to hex string (lowercase, no 0x prefix)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Whether this is the native-asset sentinel
    pub fn is_native(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl From<[u8; 20]> for TokenId {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl core::fmt::Display for TokenId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_native() {
            write!(f, "native")
        } else {
            write!(f, "0x{}", self.to_hex())
        }
    }
}

impl serde::Serialize for TokenId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{}", self.to_hex()))
    }
}

impl<'de> serde::Deserialize<'de> for TokenId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
