//! Fuzz target for hex parsing of addresses, tokens, and hashes
//!
//! This target ensures parsing:
//! 1. Never panics on arbitrary strings
//! 2. Round-trips every value it accepts

#![no_main]

use libfuzzer_sys::fuzz_target;
use rewards_primitives::{Address, Hash256, TokenId};

fuzz_target!(|data: &str| {
    if let Ok(addr) = Address::from_hex(data) {
        let rehex = format!("0x{}", addr.to_hex());
        assert_eq!(Address::from_hex(&rehex), Ok(addr));
    }

    if let Ok(token) = TokenId::from_hex(data) {
        let rehex = format!("0x{}", token.to_hex());
        assert_eq!(TokenId::from_hex(&rehex), Ok(token));
    }

    if let Ok(hash) = Hash256::from_hex(data) {
        assert_eq!(
            Hash256::from_hex(&hash.to_hex()).map(|h| h.to_hex()),
            Ok(hash.to_hex())
        );
    }
});
