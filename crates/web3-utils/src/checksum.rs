//! EIP-55 mixed-case checksum encoding.
//!
//! The case of every hex letter in an address is selected by the Keccak-256
//! hash of the address' lowercase hex text: a letter is uppercased when the
//! hash nibble at the same position is 8 or greater.

use sha3::{Digest, Keccak256};
use tracing::trace;

/// Length of a checksummed 20-byte address string, `0x` prefix included.
pub const CHECKSUM_ADDRESS_LEN: usize = 42;

/// Encodes and validates checksummed address strings.
pub trait ChecksumCodec {
    /// Produces the checksummed `0x`-prefixed form of `raw`.
    fn encode(&self, raw: &[u8]) -> String;

    /// Returns `true` if `candidate` is exactly the checksummed form of the
    /// 20 bytes it spells.
    fn validate(&self, candidate: &str) -> bool;
}

/// The EIP-55 checksum scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Eip55;

impl ChecksumCodec for Eip55 {
    fn encode(&self, raw: &[u8]) -> String {
        to_checksum_address(raw)
    }

    fn validate(&self, candidate: &str) -> bool {
        is_checksum_address(candidate)
    }
}

/// Converts raw address bytes to their EIP-55 checksummed string.
///
/// Any input length is accepted. The hash provides 64 nibbles, so letters
/// past the first 32 bytes of input have nothing selecting their case and are
/// left lowercase. Empty input yields `"0x"`.
pub fn to_checksum_address(raw: &[u8]) -> String {
    let addr_hex = hex::encode(raw);

    // EIP-55 hashes the lowercase hex text, not the raw bytes.
    let hash_hex = hex::encode(Keccak256::digest(addr_hex.as_bytes()));
    let hash_hex = hash_hex.as_bytes();

    let mut checksummed = String::with_capacity(2 + addr_hex.len());
    checksummed.push_str("0x");

    for (i, c) in addr_hex.chars().enumerate() {
        let uppercase =
            c.is_ascii_alphabetic() && hash_hex.get(i).is_some_and(|&nibble| nibble >= b'8');
        if uppercase {
            checksummed.push(c.to_ascii_uppercase());
        } else {
            checksummed.push(c);
        }
    }

    checksummed
}

/// Checks whether `candidate` is a correctly checksummed 20-byte address.
///
/// Malformed input (missing `0x`, wrong length, non-hex characters) is
/// reported as `false` rather than an error.
pub fn is_checksum_address(candidate: &str) -> bool {
    let Some(hex_part) = candidate.strip_prefix("0x") else {
        trace!(reason = "missing 0x prefix", "rejected checksum address");
        return false;
    };

    if candidate.len() != CHECKSUM_ADDRESS_LEN {
        trace!(
            len = candidate.len(),
            reason = "wrong length",
            "rejected checksum address"
        );
        return false;
    }

    let raw = match hex::decode(hex_part) {
        Ok(raw) => raw,
        Err(e) => {
            trace!(reason = %e, "rejected checksum address");
            return false;
        }
    };

    to_checksum_address(&raw) == candidate
}
