use thiserror::Error;

/// Errors returned by the fallible helpers in this crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Web3Error {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("hex value too long: {len} bytes exceeds 32")]
    Overflow { len: usize },

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid checksum: {0}")]
    InvalidChecksum(String),
}
