use num::{BigUint, Zero};

pub fn decimal_digits(num: &BigUint) -> usize {
    num.to_str_radix(10).len()
}

fn pow10(exp: usize) -> BigUint {
    num::pow(BigUint::from(10u32), exp)
}

fn shift_exponent(exponent: i64, shift: usize, up: bool) -> i64 {
    let shift = i64::try_from(shift).unwrap_or(i64::MAX);
    if up {
        exponent.saturating_add(shift)
    } else {
        exponent.saturating_sub(shift)
    }
}

/// Scales `mantissa` by powers of ten until it lies in `[min, max]`, adjusting `exponent` to keep
/// the value the same. Digits shifted off the right are truncated.
///
/// A zero mantissa is returned unchanged. The exponent saturates instead of wrapping, so callers
/// can range-check it afterwards.
pub fn normalize(mantissa: BigUint, exponent: i64, min: u64, max: u64) -> (BigUint, i64) {
    if mantissa.is_zero() {
        return (mantissa, exponent);
    }
    let min = BigUint::from(min);
    let max = BigUint::from(max);

    let mut mantissa = mantissa;
    let mut exponent = exponent;

    // bulk shift by whole digits first, then settle the last step one digit at a time
    let digits = decimal_digits(&mantissa);
    let max_digits = decimal_digits(&max);
    let min_digits = decimal_digits(&min);
    if digits > max_digits {
        let shift = digits - max_digits;
        mantissa = mantissa / pow10(shift);
        exponent = shift_exponent(exponent, shift, true);
    } else if digits < min_digits {
        let shift = min_digits - digits;
        mantissa = mantissa * pow10(shift);
        exponent = shift_exponent(exponent, shift, false);
    }

    while mantissa > max {
        mantissa = mantissa / 10u32;
        exponent = exponent.saturating_add(1);
    }
    while mantissa < min && !mantissa.is_zero() {
        mantissa = mantissa * 10u32;
        exponent = exponent.saturating_sub(1);
    }
    (mantissa, exponent)
}
