//! Account addresses, through a caller-supplied codec.
//!
//! The checksum and alphabet of the address format live outside this crate; implementors of
//! [`AddressCodec`] provide them.

use crate::error::Result;
use crate::hex;

/// Maximum number of characters kept from an encoded address.
pub const MAX_ADDRESS_LEN: usize = 40;

/// Converts between raw account-id bytes and their printable address.
pub trait AddressCodec {
    fn encode_address(&self, bytes: &[u8]) -> String;

    /// Fails with [`CodecError::Address`](crate::CodecError::Address) when `address` is not valid.
    fn decode_address(&self, address: &str) -> Result<Vec<u8>>;
}

/// Decodes account-id hex and renders it through `codec`.
pub fn hex_to_address<C: AddressCodec + ?Sized>(codec: &C, hex: &str) -> Result<String> {
    let bytes = hex::decode_bytes(hex)?;
    let address = codec.encode_address(&bytes);
    Ok(address.chars().take(MAX_ADDRESS_LEN).collect())
}

/// Decodes `address` through `codec` and renders the bytes as uppercase hex.
pub fn address_to_hex<C: AddressCodec + ?Sized>(codec: &C, address: &str) -> Result<String> {
    let bytes = codec.decode_address(address)?;
    Ok(hex::encode_bytes(&bytes))
}
