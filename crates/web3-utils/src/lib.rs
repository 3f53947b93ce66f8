//! Stateless Ethereum helper functions.
//!
//! This crate provides:
//! - EIP-55 checksum encoding and validation of addresses
//! - A typed 20-byte [`Address`] that displays in checksummed form
//! - Keccak-256 hashing and HMAC-SHA256 digests
//! - Zero-padding to 32-byte EVM words and byte concatenation
//!
//! ```
//! use web3_utils::{is_checksum_address, to_checksum_address};
//!
//! let raw = hex::decode("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap();
//! let checksummed = to_checksum_address(&raw);
//! assert_eq!(checksummed, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
//! assert!(is_checksum_address(&checksummed));
//! ```

pub mod address;
pub mod bytes;
pub mod checksum;
pub mod error;
pub mod hash;

pub use address::Address;
pub use bytes::{concat_bytes, pad_hex_string_to_32_bytes, pad_to_32_bytes};
pub use checksum::{is_checksum_address, to_checksum_address, ChecksumCodec, Eip55};
pub use error::Web3Error;
pub use hash::{compute_hmac_digest, keccak256, verify_hmac_digest};
