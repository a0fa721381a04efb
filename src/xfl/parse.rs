use num::{BigInt, Zero};
use tracing::debug;

use crate::error::{CodecError, Result};

/// Splits a decimal or scientific-notation string into `(exponent, mantissa)` such that the value
/// is `mantissa * 10^exponent`. No floating point is involved, so every digit is kept.
///
/// A string with more than one decimal point parses as zero.
pub fn parse_decimal(text: &str) -> Result<(i64, BigInt)> {
    let lowered = text.trim().to_lowercase();

    let mut parts = lowered.split('e');
    let (digits, mut exponent) = match (parts.next(), parts.next(), parts.next()) {
        (Some(digits), None, _) => (digits, 0),
        (Some(digits), Some(exponent), None) => (digits, parse_exponent(text, exponent)?),
        _ => return Err(CodecError::format(text, "more than one exponent marker")),
    };

    let pieces: Vec<&str> = digits.split('.').collect();
    let joined = match pieces.len() {
        1 => pieces[0].to_string(),
        2 => {
            exponent = exponent.saturating_sub(pieces[1].len() as i64);
            pieces[0].to_string() + pieces[1]
        }
        _ => {
            debug!(text, "more than one decimal point, reading as zero");
            return Ok((exponent, BigInt::zero()));
        }
    };

    let mantissa = parse_digits(text, &joined)?;
    Ok((exponent, mantissa))
}

/// Parses an optionally signed run of ASCII decimal digits. Separators such as `_` are rejected.
pub fn parse_integer(text: &str) -> Result<BigInt> {
    parse_digits(text, text.trim())
}

fn parse_digits(text: &str, digits: &str) -> Result<BigInt> {
    let (negative, magnitude) = split_sign(digits);
    if !is_digits(magnitude) {
        return Err(CodecError::format(text, "expected decimal digits"));
    }
    let mut value = BigInt::parse_bytes(magnitude.as_bytes(), 10)
        .ok_or_else(|| CodecError::format(text, "expected decimal digits"))?;
    if negative {
        value = -value;
    }
    Ok(value)
}

fn parse_exponent(text: &str, exponent: &str) -> Result<i64> {
    let (negative, magnitude) = split_sign(exponent);
    if !is_digits(magnitude) {
        return Err(CodecError::format(text, "malformed exponent"));
    }
    let value: i64 = magnitude
        .parse()
        .map_err(|_| CodecError::format(text, "exponent out of range"))?;
    Ok(if negative { -value } else { value })
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|c| c.is_ascii_digit())
}
