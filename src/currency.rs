//! Currency codes in the ledger's 160-bit currency field.
//!
//! A code's bytes are right-padded with zero bytes to [`ISO_BLOCK_BYTES`] and the block is then
//! left-padded to the full [`FIELD_BYTES`], so a three letter code such as `BZO` lands in bytes
//! 12..15 of the field.

use tracing::debug;

use crate::error::{CodecError, Result};
use crate::hex;
use crate::zero_pad::{pad_left, pad_right};

/// Total size of the currency field.
pub const FIELD_BYTES: usize = 20;

/// Size of the block the code is right-padded into before left-padding.
pub const ISO_BLOCK_BYTES: usize = 8;

/// Encodes `text` into the 40 digit currency field.
///
/// Text whose byte encoding does not fit in the field is rejected with
/// [`CodecError::Range`].
pub fn currency_to_hex(text: &str) -> Result<String> {
    let len = text.len();
    if len > FIELD_BYTES {
        return Err(CodecError::Range {
            value: text.to_string(),
            bits: (FIELD_BYTES * 8) as u32,
            max: format!("{} bytes", FIELD_BYTES),
        });
    }
    let content = hex::text_to_hex(text);
    let block = pad_right(&content, ISO_BLOCK_BYTES * 2);
    Ok(pad_left(&block, FIELD_BYTES * 2))
}

/// Recovers the code from a currency field.
///
/// Leading and trailing zero bytes are padding. After decoding, the text is cut at the first
/// remaining zero byte, so a code that really contains a zero byte loses everything after it.
pub fn hex_to_currency(hex: &str) -> Result<String> {
    let bytes = hex::decode_bytes(hex)?;
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| b != 0).map_or(start, |i| i + 1);
    let text = String::from_utf8_lossy(&bytes[start..end]);
    match text.find('\0') {
        Some(cut) => {
            debug!(hex, cut, "currency truncated at interior zero byte");
            Ok(text[..cut].to_string())
        }
        None => Ok(text.into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_to_hex() {
        let expected = "000000000000000000000000425A4F0000000000".to_string();
        let actual = currency_to_hex("BZO").unwrap();
        assert_eq!(expected, actual);
        assert_eq!(40, actual.len());
    }

    #[test]
    fn test_currency_to_hex_long_code() {
        // past the eight byte block there is no right padding
        let expected = "000000000000000000004142434445464748494A".to_string();
        let actual = currency_to_hex("ABCDEFGHIJ").unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_currency_to_hex_too_long() {
        assert!(currency_to_hex("ABCDEFGHIJKLMNOPQRSTU").is_err());
        assert!(currency_to_hex("ABCDEFGHIJKLMNOPQRST").is_ok());
    }

    #[test]
    fn test_hex_to_currency() {
        let expected = "BZO".to_string();
        let actual = hex_to_currency("000000000000000000000000425A4F0000000000").unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_hex_to_currency_code_ending_in_zero_nibble() {
        // 'P' is 0x50; only whole zero bytes are padding
        let hex = currency_to_hex("BZP").unwrap();
        assert_eq!("BZP", hex_to_currency(&hex).unwrap());
    }

    #[test]
    fn test_hex_to_currency_interior_zero_truncates() {
        // known lossy boundary: an embedded zero byte ends the code
        let expected = "AB".to_string();
        let actual = hex_to_currency("0000000000000000000000004142004300000000").unwrap();
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_hex_to_currency_all_zero() {
        assert_eq!("", hex_to_currency("0000000000000000000000000000000000000000").unwrap());
    }

    #[test]
    fn test_hex_to_currency_malformed() {
        assert!(hex_to_currency("ABC").is_err());
        assert!(hex_to_currency("XYZW").is_err());
    }
}
