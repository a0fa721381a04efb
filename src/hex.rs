//! Hex encoding and decoding utilities.
//!
//! Output is always uppercase; input is accepted in either case.

use num::BigUint;

use crate::error::{CodecError, Result};
use crate::zero_pad::pad_even;

const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Convert a single ASCII hex character to its 4-bit value.
fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Returns an error unless `hex` is non-empty and made only of hex digits.
pub fn validate(hex: &str) -> Result<()> {
    if hex.is_empty() {
        return Err(CodecError::format(hex, "empty hex string"));
    }
    match hex.bytes().find(|&c| hex_digit(c).is_none()) {
        Some(c) => Err(CodecError::format(
            hex,
            &format!("{:?} is not a hex digit", c as char),
        )),
        None => Ok(()),
    }
}

/// Encode raw bytes as an uppercase hex string.
pub fn encode_bytes(input: &[u8]) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for &byte in input {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string into raw bytes. The empty string decodes to no bytes.
pub fn decode_bytes(hex: &str) -> Result<Vec<u8>> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(CodecError::format(hex, "odd number of hex digits"));
    }
    raw.chunks(2)
        .map(|pair| match (hex_digit(pair[0]), hex_digit(pair[1])) {
            (Some(hi), Some(lo)) => Ok((hi << 4) | lo),
            _ => Err(CodecError::format(hex, "not a hex digit")),
        })
        .collect()
}

/// UTF-8 bytes of `text` as uppercase hex.
pub fn text_to_hex(text: &str) -> String {
    encode_bytes(text.as_bytes())
}

/// Decodes hex into text. Invalid UTF-8 sequences become U+FFFD.
pub fn hex_to_text(hex: &str) -> Result<String> {
    let bytes = decode_bytes(hex)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reverses the order of the two-digit byte groups in `hex`, converting between big-endian and
/// little-endian byte order. Applying it twice gives back the (uppercased) input.
///
/// An odd-length input is treated as if it had a leading zero digit.
pub fn flip_bytes(hex: &str) -> Result<String> {
    if !hex.is_empty() {
        validate(hex)?;
    }
    let mut bytes = decode_bytes(&pad_even(hex))?;
    bytes.reverse();
    Ok(encode_bytes(&bytes))
}

/// Renders `value` as big-endian hex (padded to whole bytes) and flips it to little-endian.
pub fn flip_uint(value: &BigUint) -> String {
    let mut bytes = value.to_bytes_be();
    bytes.reverse();
    encode_bytes(&bytes)
}
