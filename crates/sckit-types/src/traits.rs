use std::fmt;

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};

/// The six conversions every storable value type provides.
///
/// `decode`/`encode` are used inside composite encodings and call payloads;
/// `from_bytes`/`to_bytes` are the canonical whole-value form kept in the
/// host store. `from_bytes` of an empty buffer always yields
/// `Self::default()`, so absent store entries read as zero values.
///
/// Equality between values is full-content equality of their canonical
/// bytes.
pub trait ScType: Sized + Clone + Default + PartialEq + fmt::Debug {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self>;

    fn encode(&self, enc: &mut Encoder);

    fn from_bytes(buf: &[u8]) -> CodecResult<Self>;

    fn to_bytes(&self) -> Vec<u8>;

    /// Parse the human-readable form.
    fn from_text(text: &str) -> CodecResult<Self>;

    /// Render the human-readable form.
    fn to_text(&self) -> String;
}

/// Copy a canonical buffer into a fixed-size array, rejecting any other length.
pub(crate) fn fixed_array<const N: usize>(
    type_name: &'static str,
    buf: &[u8],
) -> CodecResult<[u8; N]> {
    <[u8; N]>::try_from(buf).map_err(|_| CodecError::InvalidLength {
        type_name,
        expected: N,
        actual: buf.len(),
    })
}

/// Read `N` bytes from a decoder into a fixed-size array.
pub(crate) fn decode_array<const N: usize>(
    type_name: &'static str,
    dec: &mut Decoder<'_>,
) -> CodecResult<[u8; N]> {
    fixed_array(type_name, dec.fixed_bytes(N)?)
}

/// Decode hex text, tolerating a `0x` prefix.
pub(crate) fn hex_text(text: &str) -> CodecResult<Vec<u8>> {
    let text = text.trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text).map_err(|e| CodecError::InvalidHex(e.to_string()))
}

/// Decode hex text that must hold exactly `N` bytes.
pub(crate) fn hex_array<const N: usize>(
    type_name: &'static str,
    text: &str,
) -> CodecResult<[u8; N]> {
    fixed_array(type_name, &hex_text(text)?)
}

/// Encode a value into a standalone buffer with its `encode` form.
pub fn encode_value<T: ScType>(value: &T) -> Vec<u8> {
    let mut enc = Encoder::new();
    value.encode(&mut enc);
    enc.into_bytes()
}

/// Decode a standalone buffer produced by [`encode_value`], rejecting
/// trailing bytes.
pub fn decode_value<T: ScType>(buf: &[u8]) -> CodecResult<T> {
    let mut dec = Decoder::new(buf);
    let value = T::decode(&mut dec)?;
    dec.finish()?;
    Ok(value)
}
