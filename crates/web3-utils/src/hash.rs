use hmac::{Hmac, Mac};
use sha2::Sha256;
use sha3::{Digest, Keccak256};

type HmacSha256 = Hmac<Sha256>;

/// Computes the HMAC-SHA256 digest of `message` keyed with `secret`.
///
/// Keys of any length are accepted: short keys are zero-padded to the block
/// size and long keys are hashed first, as HMAC specifies.
pub fn compute_hmac_digest(message: &[u8], secret: &[u8]) -> [u8; 32] {
    let mut mac = keyed(secret);
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Verifies an HMAC-SHA256 `tag` over `message` in constant time.
///
/// Tags that are not exactly 32 bytes are rejected.
pub fn verify_hmac_digest(message: &[u8], secret: &[u8], tag: &[u8]) -> bool {
    let mut mac = keyed(secret);
    mac.update(message);
    mac.verify_slice(tag).is_ok()
}

fn keyed(secret: &[u8]) -> HmacSha256 {
    // HMAC takes keys of any length, so `new_from_slice` cannot fail here.
    match HmacSha256::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    }
}

/// Computes the Keccak-256 hash of `input`.
///
/// This is the original Keccak padding used by Ethereum, not NIST SHA3-256.
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    Keccak256::digest(input).into()
}
