//! Conversions between human-readable values and the hex encodings used by ledger fields.
//!
//! - [`xfl`]: the 64-bit packed decimal float, its normalization rules and its little-endian wire
//!   form.
//! - [`uint`]: unsigned integers of 8, 16, 32, 64 and 224 bits as fixed-length hex.
//! - [`currency`]: currency codes in the 160-bit currency field.
//! - [`address`]: account ids, through a caller-supplied [`AddressCodec`].
//! - [`inspect`]: one hex value read as every field type at once.
//!
//! Every operation is a pure function. Failures are reported as [`CodecError`], except XFL
//! construction, which signals overflow and underflow with [`Xfl::Invalid`].

mod bit_ops;
mod num_ops;
mod zero_pad;

pub mod address;
pub mod currency;
pub mod error;
pub mod hex;
pub mod inspect;
pub mod uint;
pub mod xfl;

pub use address::AddressCodec;
pub use error::{CodecError, Result};
pub use inspect::{FieldKind, Interpretation, Outcome};
pub use uint::Width;
pub use xfl::{make_xfl, Xfl};
