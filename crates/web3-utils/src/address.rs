use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::checksum::to_checksum_address;
use crate::error::Web3Error;

/// Length of a raw Ethereum address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A 20-byte Ethereum account or contract address.
///
/// Displays as its EIP-55 checksummed string.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; ADDRESS_LEN]);

    /// Copies an address out of `bytes`, which must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Web3Error> {
        let raw: [u8; ADDRESS_LEN] = bytes.try_into().map_err(|_| Web3Error::InvalidLength {
            expected: ADDRESS_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Returns the EIP-55 checksummed, `0x`-prefixed form.
    pub fn to_checksum(&self) -> String {
        to_checksum_address(&self.0)
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(raw: [u8; ADDRESS_LEN]) -> Self {
        Self(raw)
    }
}

impl From<Address> for [u8; ADDRESS_LEN] {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_checksum())
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&hex::encode(self.0))
    }
}

/// Parses a `0x`-prefixed, 40 hex character address.
///
/// All-lowercase and all-uppercase strings carry no checksum and are
/// accepted as-is. Mixed-case strings must match their EIP-55 checksum.
impl FromStr for Address {
    type Err = Web3Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex_part = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| {
                trace!(reason = "missing 0x prefix", "rejected address");
                Web3Error::InvalidAddress("address must start with 0x".into())
            })?;

        if hex_part.len() != ADDRESS_LEN * 2 {
            trace!(len = hex_part.len(), reason = "wrong length", "rejected address");
            return Err(Web3Error::InvalidAddress(format!(
                "expected 40 hex characters, got {}",
                hex_part.len()
            )));
        }

        let bytes = hex::decode(hex_part).map_err(|e| Web3Error::InvalidHex(e.to_string()))?;
        let address = Self::from_slice(&bytes)?;

        let is_all_lower = !hex_part.bytes().any(|b| b.is_ascii_uppercase());
        let is_all_upper = !hex_part.bytes().any(|b| b.is_ascii_lowercase());

        if !is_all_lower && !is_all_upper && address.to_checksum()[2..] != *hex_part {
            trace!(reason = "checksum mismatch", "rejected address");
            return Err(Web3Error::InvalidChecksum(s.to_string()));
        }

        Ok(address)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
