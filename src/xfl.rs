//! XFL: the ledger's 64-bit packed decimal float.
//!
//! Layout, from the most significant bit down:
//!
//! ```text
//! 63   62    61 .. 54          53 .. 0
//! 0    sign  exponent + 97     mantissa
//! ```
//!
//! The sign bit is set for positive values. A non-zero mantissa always lies in
//! `[10^15, 10^16 - 1]`, and the all-zero pattern is the only encoding of zero. Bit 63 is never
//! set, so a packed XFL read as an `i64` is non-negative; the decoders below reject negative raw
//! values with [`CodecError::InvalidXfl`].

use std::fmt;
use std::str::FromStr;

use num::{BigInt, Signed, ToPrimitive, Zero};
use tracing::debug;

use crate::bit_ops;
use crate::error::{CodecError, Result};
use crate::hex;
use crate::num_ops;

mod parse;

pub use self::parse::{parse_decimal, parse_integer};

pub mod consts {
    pub const MIN_MANTISSA: u64 = 1_000_000_000_000_000;
    pub const MAX_MANTISSA: u64 = 9_999_999_999_999_999;

    pub const MIN_EXPONENT: i64 = -96;
    pub const MAX_EXPONENT: i64 = 80;
    pub const EXPONENT_BIAS: i64 = 97;

    pub const MANTISSA_BITS: u32 = 54;
    pub const EXPONENT_BITS: u32 = 8;
    pub const SIGN_BIT: u32 = 62;

    /// Display string for canonical zero.
    pub const ZERO_STRING: &str = "<zero>";

    /// Hex digits in a wire-encoded XFL.
    pub const WIRE_HEX_LEN: usize = 16;
}

/// A packed XFL, or the sentinel for a value whose exponent fell outside
/// `[MIN_EXPONENT, MAX_EXPONENT]` during construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Xfl {
    Packed(u64),
    Invalid,
}

/// Builds an XFL from `mantissa * 10^exponent`.
///
/// The mantissa is normalized into `[10^15, 10^16 - 1]`, truncating surplus digits. A zero
/// mantissa gives canonical zero whatever the exponent. If the normalized exponent is out of range
/// the result is [`Xfl::Invalid`], not an error.
pub fn make_xfl(exponent: i64, mantissa: &BigInt) -> Xfl {
    if mantissa.is_zero() {
        return Xfl::ZERO;
    }
    let is_negative = mantissa.is_negative();

    let (normalized, exponent) = num_ops::normalize(
        mantissa.magnitude().clone(),
        exponent,
        consts::MIN_MANTISSA,
        consts::MAX_MANTISSA,
    );
    let mantissa = match normalized.to_u64() {
        Some(0) | None => return Xfl::ZERO,
        Some(mantissa) => mantissa,
    };

    if exponent < consts::MIN_EXPONENT || exponent > consts::MAX_EXPONENT {
        debug!(exponent, "xfl exponent out of range");
        return Xfl::Invalid;
    }
    let biased_exponent = (exponent + consts::EXPONENT_BIAS) as u64;

    let mut bits = bit_ops::put_bits(0, mantissa, 0, consts::MANTISSA_BITS);
    bits = bit_ops::put_bits(bits, biased_exponent, consts::MANTISSA_BITS, consts::EXPONENT_BITS);
    if !is_negative {
        bits = bit_ops::set_bit(bits, consts::SIGN_BIT);
    }
    Xfl::Packed(bits)
}

fn check_raw(raw: i64) -> Result<u64> {
    if raw < 0 {
        Err(CodecError::InvalidXfl)
    } else {
        Ok(raw as u64)
    }
}

/// The unbiased exponent of a raw XFL. Zero has exponent 0.
pub fn exponent(raw: i64) -> Result<i32> {
    let bits = check_raw(raw)?;
    if bits == 0 {
        return Ok(0);
    }
    let biased = bit_ops::get_bits(
        bits,
        consts::MANTISSA_BITS,
        consts::MANTISSA_BITS + consts::EXPONENT_BITS,
    );
    Ok((biased as i64 - consts::EXPONENT_BIAS) as i32)
}

/// The mantissa of a raw XFL, i.e. the value with the sign and exponent bits cleared.
pub fn mantissa(raw: i64) -> Result<u64> {
    let bits = check_raw(raw)?;
    Ok(bit_ops::get_bits(bits, 0, consts::MANTISSA_BITS))
}

/// True when the sign bit of a raw XFL is clear. Zero is not negative.
pub fn is_negative(raw: i64) -> Result<bool> {
    let bits = check_raw(raw)?;
    if bits == 0 {
        return Ok(false);
    }
    Ok(!bit_ops::is_bit_set(bits, consts::SIGN_BIT))
}

/// Renders a raw XFL as `<sign><mantissa>E<exponent>`, e.g. `+1000000000000000E-15`.
pub fn to_sci_string(raw: i64) -> Result<String> {
    if check_raw(raw)? == 0 {
        return Ok(consts::ZERO_STRING.to_string());
    }
    let sign = if is_negative(raw)? { "-" } else { "+" };
    Ok(format!("{}{}E{}", sign, mantissa(raw)?, exponent(raw)?))
}

impl Xfl {
    pub const ZERO: Xfl = Xfl::Packed(0);

    pub fn new(exponent: i64, mantissa: &BigInt) -> Xfl {
        make_xfl(exponent, mantissa)
    }

    /// Wraps raw bits as read from storage. Negative values map to [`Xfl::Invalid`].
    pub fn from_raw(raw: i64) -> Xfl {
        match check_raw(raw) {
            Ok(bits) => Xfl::Packed(bits),
            Err(_) => Xfl::Invalid,
        }
    }

    /// Builds an XFL from a float via its shortest decimal rendering.
    pub fn from_f64(value: f64) -> Result<Xfl> {
        if !value.is_finite() {
            return Err(CodecError::format(&value.to_string(), "not a finite number"));
        }
        value.to_string().parse()
    }

    /// The packed value as a signed integer, or `None` for the sentinel.
    pub fn raw(&self) -> Option<i64> {
        match *self {
            Xfl::Packed(bits) => Some(bits as i64),
            Xfl::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        *self == Xfl::Invalid
    }

    pub fn is_zero(&self) -> bool {
        *self == Xfl::ZERO
    }

    fn checked_raw(&self) -> Result<i64> {
        self.raw().ok_or(CodecError::InvalidXfl)
    }

    pub fn exponent(&self) -> Result<i32> {
        exponent(self.checked_raw()?)
    }

    pub fn mantissa(&self) -> Result<u64> {
        mantissa(self.checked_raw()?)
    }

    pub fn is_negative(&self) -> Result<bool> {
        is_negative(self.checked_raw()?)
    }

    pub fn to_sci_string(&self) -> Result<String> {
        to_sci_string(self.checked_raw()?)
    }

    /// The value as a float, going through the `<sign><mantissa>E<exponent>` rendering.
    pub fn to_f64(&self) -> Result<f64> {
        if self.checked_raw()? == 0 {
            return Ok(0.0);
        }
        let text = self.to_sci_string()?;
        text.parse::<f64>()
            .map_err(|err| CodecError::format(&text, &err.to_string()))
    }

    /// Little-endian wire hex, always 16 digits.
    pub fn to_wire_hex(&self) -> Result<String> {
        let raw = self.checked_raw()?;
        hex::flip_bytes(&format!("{:016X}", raw))
    }

    /// Reads a little-endian 16 digit wire value.
    pub fn from_wire_hex(wire: &str) -> Result<Xfl> {
        if wire.len() != consts::WIRE_HEX_LEN {
            return Err(CodecError::format(wire, "an XFL is exactly 16 hex digits"));
        }
        let big_endian = hex::flip_bytes(wire)?;
        let bits = u64::from_str_radix(&big_endian, 16)
            .map_err(|err| CodecError::format(wire, &err.to_string()))?;
        match Xfl::from_raw(bits as i64) {
            Xfl::Invalid => Err(CodecError::InvalidXfl),
            xfl => Ok(xfl),
        }
    }
}

impl Default for Xfl {
    fn default() -> Xfl {
        Xfl::ZERO
    }
}

impl FromStr for Xfl {
    type Err = CodecError;

    /// Parses decimal or scientific notation. Out-of-range values parse to [`Xfl::Invalid`].
    fn from_str(s: &str) -> Result<Xfl> {
        let (exponent, mantissa) = parse_decimal(s)?;
        Ok(make_xfl(exponent, &mantissa))
    }
}

impl fmt::Debug for Xfl {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Xfl::Invalid => write!(formatter, "Xfl::Invalid"),
            Xfl::Packed(bits) => {
                let raw = bits as i64;
                match (is_negative(raw), exponent(raw), mantissa(raw)) {
                    (Ok(is_negative), Ok(exponent), Ok(mantissa)) => write!(
                        formatter,
                        "Xfl {{ is_negative: {}, exponent: {}, mantissa: {} }}",
                        is_negative, exponent, mantissa
                    ),
                    _ => write!(formatter, "Xfl::Packed({:#018x})", bits),
                }
            }
        }
    }
}

/// Encodes a decimal string straight to wire hex.
pub fn value_to_wire_hex(text: &str) -> Result<String> {
    text.parse::<Xfl>()?.to_wire_hex()
}

/// Decodes wire hex straight to a float.
pub fn wire_hex_to_value(wire: &str) -> Result<f64> {
    Xfl::from_wire_hex(wire)?.to_f64()
}
