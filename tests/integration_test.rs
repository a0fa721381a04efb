use num::{BigInt, BigUint, One};

use xfl_codec::currency::{currency_to_hex, hex_to_currency};
use xfl_codec::hex::flip_bytes;
use xfl_codec::uint::{self, Width};
use xfl_codec::{make_xfl, CodecError, Xfl};

fn samples(width: Width) -> Vec<BigUint> {
    let max = width.max_value();
    let half = &max >> 1usize;
    vec![
        BigUint::from(0u32),
        BigUint::one(),
        BigUint::from(0x7fu32),
        half,
        max,
    ]
}

#[test]
fn fixed_width_round_trip() {
    for width in Width::ALL.iter().copied() {
        for value in samples(width) {
            let hex = uint::encode(&BigInt::from(value.clone()), width).unwrap();
            assert_eq!(width.hex_len(), hex.len());
            assert_eq!(hex.to_uppercase(), hex);
            assert_eq!(value, uint::decode(&hex, width).unwrap());
        }
    }
}

#[test]
fn fixed_width_range_rejection() {
    for width in Width::ALL.iter().copied() {
        let two_to_w = BigInt::from(BigUint::one() << width.bits() as usize);
        match uint::encode(&two_to_w, width) {
            Err(CodecError::Range { bits, .. }) => assert_eq!(width.bits(), bits),
            other => panic!("expected a range error for uint{}, got {:?}", width.bits(), other),
        }
        assert!(uint::encode(&BigInt::from(-1), width).is_err());
    }
}

#[test]
fn uint8_scenario() {
    assert_eq!("FF", uint::uint8_to_hex(255).unwrap());
    assert_eq!(BigUint::from(255u32), uint::hex_to_uint8("FF").unwrap());
    assert!(uint::uint8_to_hex(256).is_err());
}

#[test]
fn xfl_canonical_zero() {
    for exponent in [0, 80, -96, 1_000_000_000, -1_000_000_000] {
        let zero = make_xfl(exponent, &BigInt::from(0));
        assert_eq!(Some(0), zero.raw());
        assert_eq!("<zero>", zero.to_sci_string().unwrap());
    }
}

#[test]
fn xfl_normalization_is_idempotent() {
    let a = make_xfl(5, &BigInt::from(12345));
    let b = make_xfl(1, &BigInt::from(123_450_000));
    assert_eq!(a, b);
    assert_eq!(a.exponent(), b.exponent());
    assert_eq!(a.mantissa(), b.mantissa());
    assert_eq!(a.is_negative(), b.is_negative());

    let renormalized = make_xfl(
        i64::from(a.exponent().unwrap()),
        &BigInt::from(a.mantissa().unwrap()),
    );
    assert_eq!(a, renormalized);
}

#[test]
fn xfl_overflow_returns_sentinel() {
    let overflow = make_xfl(200, &BigInt::from(1));
    assert_eq!(Xfl::Invalid, overflow);
    assert_eq!(Err(CodecError::InvalidXfl), overflow.to_wire_hex());
}

#[test]
fn xfl_one_hundredths_scenario() {
    let a = make_xfl(-2, &BigInt::from(100));
    let b = make_xfl(-18, &BigInt::from(1_000_000_000_000_000_000i64));
    assert_eq!(a, b);
    assert_eq!("+1000000000000000E-15", a.to_sci_string().unwrap());
    assert_eq!(1.0, a.to_f64().unwrap());
}

#[test]
fn xfl_wire_round_trip() {
    for text in ["1", "-1.5", "0.000001", "123456789.123456", "1e80", "-9.999999999999999e95"] {
        let xfl: Xfl = text.parse().unwrap();
        let wire = xfl.to_wire_hex().unwrap();
        assert_eq!(xfl, Xfl::from_wire_hex(&wire).unwrap());
    }
}

#[test]
fn flip_bytes_is_an_involution() {
    for hex in ["", "AB", "0102", "54838D7EA4C68000", "000000000000000000000000425A4F0000000000"] {
        assert_eq!(hex, flip_bytes(&flip_bytes(hex).unwrap()).unwrap());
    }
}

#[test]
fn currency_scenario() {
    let hex = currency_to_hex("BZO").unwrap();
    assert_eq!(40, hex.len());
    assert_eq!("BZO", hex_to_currency(&hex).unwrap());
}
