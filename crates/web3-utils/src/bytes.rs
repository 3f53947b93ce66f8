//! Fixed-width byte helpers for building 32-byte EVM words.

use tracing::trace;

use crate::error::Web3Error;

/// Width of an EVM word in bytes.
pub const WORD_LEN: usize = 32;

/// Decodes a hex string (optionally `0x`-prefixed) and right-aligns it in a
/// zeroed 32-byte word.
///
/// Values that decode to more than 32 bytes are rejected with
/// [`Web3Error::Overflow`] instead of being truncated.
pub fn pad_hex_string_to_32_bytes(hex_string: &str) -> Result<[u8; WORD_LEN], Web3Error> {
    let hex_part = hex_string.strip_prefix("0x").unwrap_or(hex_string);

    let data = hex::decode(hex_part).map_err(|e| Web3Error::InvalidHex(e.to_string()))?;

    if data.len() > WORD_LEN {
        trace!(len = data.len(), "hex value does not fit in a word");
        return Err(Web3Error::Overflow { len: data.len() });
    }

    let mut word = [0u8; WORD_LEN];
    word[WORD_LEN - data.len()..].copy_from_slice(&data);
    Ok(word)
}

/// Left-pads `input` with zero bytes to 32 bytes.
///
/// Inputs that are already 32 bytes or longer are returned unchanged, never
/// truncated.
pub fn pad_to_32_bytes(input: &[u8]) -> Vec<u8> {
    if input.len() >= WORD_LEN {
        return input.to_vec();
    }

    let mut word = vec![0u8; WORD_LEN];
    word[WORD_LEN - input.len()..].copy_from_slice(input);
    word
}

/// Concatenates byte slices in order, with no separators.
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let size = parts.iter().map(|part| part.len()).sum();
    let mut out = Vec::with_capacity(size);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_hex_with_prefix() {
        let word = pad_hex_string_to_32_bytes("0x1234").unwrap();

        assert_eq!(&word[..30], &[0u8; 30]);
        assert_eq!(&word[30..], &[0x12, 0x34]);
    }

    #[test]
    fn pad_hex_without_prefix() {
        let word = pad_hex_string_to_32_bytes("abcd").unwrap();
        assert_eq!(word[30], 0xab);
        assert_eq!(word[31], 0xcd);
    }

    #[test]
    fn pad_hex_full_word() {
        let hex = "ff".repeat(32);
        let word = pad_hex_string_to_32_bytes(&hex).unwrap();
        assert_eq!(word, [0xff; 32]);
    }

    #[test]
    fn pad_hex_empty_is_zero_word() {
        assert_eq!(pad_hex_string_to_32_bytes("").unwrap(), [0u8; 32]);
        assert_eq!(pad_hex_string_to_32_bytes("0x").unwrap(), [0u8; 32]);
    }

    #[test]
    fn pad_hex_invalid_chars_errors() {
        let err = pad_hex_string_to_32_bytes("zz").unwrap_err();
        assert!(matches!(err, Web3Error::InvalidHex(_)));
    }

    #[test]
    fn pad_hex_odd_length_errors() {
        let err = pad_hex_string_to_32_bytes("0x123").unwrap_err();
        assert!(matches!(err, Web3Error::InvalidHex(_)));
    }

    #[test]
    fn pad_hex_strips_only_one_prefix() {
        assert!(pad_hex_string_to_32_bytes("0x0x12").is_err());
    }

    #[test]
    fn pad_hex_too_long_errors() {
        let hex = format!("0x{}", "01".repeat(33));
        let err = pad_hex_string_to_32_bytes(&hex).unwrap_err();
        assert_eq!(err, Web3Error::Overflow { len: 33 });
    }

    #[test]
    fn pad_short_input() {
        let padded = pad_to_32_bytes(&[0xCA, 0xFE]);

        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..30], &[0u8; 30]);
        assert_eq!(&padded[30..], &[0xCA, 0xFE]);
    }

    #[test]
    fn pad_empty_input() {
        assert_eq!(pad_to_32_bytes(&[]), vec![0u8; 32]);
    }

    #[test]
    fn pad_address_sized_input() {
        let addr = [0x11u8; 20];
        let padded = pad_to_32_bytes(&addr);

        // 12 zero bytes + 20 address bytes, like an ABI address word.
        assert_eq!(&padded[..12], &[0u8; 12]);
        assert_eq!(&padded[12..], &addr);
    }

    #[test]
    fn pad_exact_word_unchanged() {
        let input = [0x42u8; 32];
        assert_eq!(pad_to_32_bytes(&input), input.to_vec());
    }

    #[test]
    fn pad_long_input_not_truncated() {
        let input = vec![0xFF; 64];
        assert_eq!(pad_to_32_bytes(&input), input);
    }

    #[test]
    fn pad_is_idempotent() {
        for len in [0usize, 1, 20, 31, 32, 33, 64] {
            let input = vec![0x07u8; len];
            let once = pad_to_32_bytes(&input);
            assert_eq!(pad_to_32_bytes(&once), once, "len {}", len);
        }
    }

    #[test]
    fn concat_two_slices() {
        let a = [0x01u8, 0x02];
        let b = [0x03u8, 0x04, 0x05];
        let out = concat_bytes(&[&a, &b]);

        assert_eq!(out.len(), a.len() + b.len());
        assert_eq!(out, vec![0x01, 0x02, 0x03, 0x04, 0x05]);
    }

    #[test]
    fn concat_no_inputs() {
        assert!(concat_bytes(&[]).is_empty());
    }

    #[test]
    fn concat_skips_empty_parts() {
        let out = concat_bytes(&[b"", b"ab", b"", b"c"]);
        assert_eq!(out, b"abc".to_vec());
    }

    #[test]
    fn concat_selector_and_words() {
        let selector = [0xa9u8, 0x05, 0x9c, 0xbb];
        let to = pad_to_32_bytes(&[0x01]);
        let amount = pad_hex_string_to_32_bytes("0x64").unwrap();

        let data = concat_bytes(&[&selector, &to, &amount]);

        assert_eq!(data.len(), 68);
        assert_eq!(&data[..4], &selector);
        assert_eq!(data[35], 0x01);
        assert_eq!(data[67], 100);
    }
}
