//! Fixed-width unsigned integers to and from zero-padded uppercase hex.
//!
//! Encoding is the strict boundary: values outside `[0, 2^W)` are rejected. Decoding is
//! permissive and accepts any well-formed hex, whatever its length.

use num::{BigInt, BigUint, One};

use crate::error::{CodecError, Result};
use crate::hex;
use crate::zero_pad::pad_left;

/// The unsigned widths the ledger format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
    W64,
    W224,
}

impl Width {
    pub const ALL: [Width; 5] = [Width::W8, Width::W16, Width::W32, Width::W64, Width::W224];

    pub fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
            Width::W224 => 224,
        }
    }

    /// Number of hex digits in an encoded value.
    pub fn hex_len(self) -> usize {
        (self.bits() / 4) as usize
    }

    /// Largest encodable value, `2^W - 1`.
    pub fn max_value(self) -> BigUint {
        (BigUint::one() << self.bits() as usize) - BigUint::one()
    }

    pub fn from_bits(bits: u32) -> Option<Width> {
        Width::ALL.iter().copied().find(|width| width.bits() == bits)
    }
}

/// Encodes `value` as exactly `width.hex_len()` uppercase hex digits.
pub fn encode(value: &BigInt, width: Width) -> Result<String> {
    let max = width.max_value();
    // to_biguint is None for negative values
    let in_range = match value.to_biguint() {
        Some(magnitude) => magnitude <= max,
        None => false,
    };
    if !in_range {
        return Err(CodecError::Range {
            value: value.to_string(),
            bits: width.bits(),
            max: max.to_string(),
        });
    }
    let digits = value.to_str_radix(16).to_uppercase();
    Ok(pad_left(&digits, width.hex_len()))
}

/// Interprets `hex` as a base-16 integer. The width is not enforced on this side; it is taken
/// only so call sites read the same as [`encode`].
pub fn decode(hex: &str, _width: Width) -> Result<BigUint> {
    hex::validate(hex)?;
    BigUint::parse_bytes(hex.as_bytes(), 16)
        .ok_or_else(|| CodecError::format(hex, "not a hex integer"))
}

pub fn uint8_to_hex<T: Into<BigInt>>(value: T) -> Result<String> {
    encode(&value.into(), Width::W8)
}

pub fn uint16_to_hex<T: Into<BigInt>>(value: T) -> Result<String> {
    encode(&value.into(), Width::W16)
}

pub fn uint32_to_hex<T: Into<BigInt>>(value: T) -> Result<String> {
    encode(&value.into(), Width::W32)
}

pub fn uint64_to_hex<T: Into<BigInt>>(value: T) -> Result<String> {
    encode(&value.into(), Width::W64)
}

pub fn uint224_to_hex<T: Into<BigInt>>(value: T) -> Result<String> {
    encode(&value.into(), Width::W224)
}

pub fn hex_to_uint8(hex: &str) -> Result<BigUint> {
    decode(hex, Width::W8)
}

pub fn hex_to_uint16(hex: &str) -> Result<BigUint> {
    decode(hex, Width::W16)
}

pub fn hex_to_uint32(hex: &str) -> Result<BigUint> {
    decode(hex, Width::W32)
}

pub fn hex_to_uint64(hex: &str) -> Result<BigUint> {
    decode(hex, Width::W64)
}

pub fn hex_to_uint224(hex: &str) -> Result<BigUint> {
    decode(hex, Width::W224)
}
