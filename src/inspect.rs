//! Reading one hex value as every field type at once.
//!
//! Each field type is tried independently. A size mismatch or a decode failure in one field is
//! recorded in its [`Outcome`] and never stops the remaining fields.

use tracing::trace;

use crate::address::{self, AddressCodec};
use crate::currency;
use crate::error::{CodecError, Result};
use crate::hex;
use crate::uint::{self, Width};
use crate::xfl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    UInt(Width),
    Xfl,
    Currency,
    AccountId,
}

impl FieldKind {
    pub const ALL: [FieldKind; 9] = [
        FieldKind::Text,
        FieldKind::UInt(Width::W8),
        FieldKind::UInt(Width::W16),
        FieldKind::UInt(Width::W32),
        FieldKind::UInt(Width::W64),
        FieldKind::UInt(Width::W224),
        FieldKind::Xfl,
        FieldKind::Currency,
        FieldKind::AccountId,
    ];

    /// Hex digits a field of this kind occupies, or `None` for free-length text.
    pub fn hex_len(self) -> Option<usize> {
        match self {
            FieldKind::Text => None,
            FieldKind::UInt(width) => Some(width.hex_len()),
            FieldKind::Xfl => Some(xfl::consts::WIRE_HEX_LEN),
            FieldKind::Currency | FieldKind::AccountId => Some(currency::FIELD_BYTES * 2),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Decoded(String),
    InvalidSize,
    Failed(CodecError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interpretation {
    pub kind: FieldKind,
    pub outcome: Outcome,
}

/// Interprets `hex` as each [`FieldKind`]. Account ids are only tried when `codec` is given.
pub fn inspect(hex: &str, codec: Option<&dyn AddressCodec>) -> Vec<Interpretation> {
    FieldKind::ALL
        .iter()
        .filter(|&&kind| kind != FieldKind::AccountId || codec.is_some())
        .map(|&kind| {
            let outcome = match kind.hex_len() {
                Some(len) if len != hex.len() => Outcome::InvalidSize,
                _ => match decode_field(kind, hex, codec) {
                    Ok(value) => Outcome::Decoded(value),
                    Err(err) => Outcome::Failed(err),
                },
            };
            trace!(?kind, ?outcome, "inspected field");
            Interpretation { kind, outcome }
        })
        .collect()
}

/// Decodes `hex` as a single field of `kind` into display text.
pub fn decode_field(
    kind: FieldKind,
    hex: &str,
    codec: Option<&dyn AddressCodec>,
) -> Result<String> {
    match kind {
        FieldKind::Text => hex::hex_to_text(hex),
        FieldKind::UInt(width) => Ok(uint::decode(hex, width)?.to_string()),
        FieldKind::Xfl => Ok(xfl::wire_hex_to_value(hex)?.to_string()),
        FieldKind::Currency => currency::hex_to_currency(hex),
        FieldKind::AccountId => address::hex_to_address(require(codec)?, hex),
    }
}

/// Encodes user-entered `text` as a field of `kind`.
///
/// Integer kinds expect decimal text; XFL accepts decimal or scientific notation.
pub fn encode_field(
    kind: FieldKind,
    text: &str,
    codec: Option<&dyn AddressCodec>,
) -> Result<String> {
    match kind {
        FieldKind::Text => Ok(hex::text_to_hex(text)),
        FieldKind::UInt(width) => {
            let value = xfl::parse_integer(text)?;
            uint::encode(&value, width)
        }
        FieldKind::Xfl => xfl::value_to_wire_hex(text),
        FieldKind::Currency => currency::currency_to_hex(text),
        FieldKind::AccountId => address::address_to_hex(require(codec)?, text),
    }
}

fn require(codec: Option<&dyn AddressCodec>) -> Result<&dyn AddressCodec> {
    codec.ok_or_else(|| CodecError::Address("no address codec configured".to_string()))
}
