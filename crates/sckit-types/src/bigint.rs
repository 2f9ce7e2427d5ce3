//! Arbitrary-precision unsigned integers.
//!
//! The canonical form is the minimal big-endian magnitude, so zero is the
//! empty buffer. The text form is decimal.

use std::fmt;

use num_bigint::BigUint;

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::serde_text::text_serde;
use crate::traits::ScType;

/// An unsigned integer of any size, used for token amounts.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScBigInt(BigUint);

impl ScBigInt {
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.bits() == 0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }
}

impl ScType for ScBigInt {
    const TYPE_NAME: &'static str = "BigInt";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        Self::from_bytes(dec.bytes()?)
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.bytes(&self.to_bytes());
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.first() == Some(&0) {
            return Err(CodecError::malformed(Self::TYPE_NAME, "leading zero byte"));
        }
        Ok(Self(BigUint::from_bytes_be(buf)))
    }

    fn to_bytes(&self) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        self.0.to_bytes_be()
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        text.trim()
            .parse::<BigUint>()
            .map(Self)
            .map_err(|e| CodecError::malformed(Self::TYPE_NAME, e.to_string()))
    }

    fn to_text(&self) -> String {
        self.0.to_str_radix(10)
    }
}

text_serde!(ScBigInt);

impl fmt::Debug for ScBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScBigInt({})", self.0)
    }
}

impl fmt::Display for ScBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for ScBigInt {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<BigUint> for ScBigInt {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{decode_value, encode_value};

    #[test]
    fn zero_is_empty_buffer() {
        assert!(ScBigInt::default().to_bytes().is_empty());
        assert!(ScBigInt::from_bytes(&[]).unwrap().is_zero());
        assert_eq!(encode_value(&ScBigInt::default()), vec![0]);
    }

    #[test]
    fn bytes_are_big_endian_magnitude() {
        let value = ScBigInt::from(123_213_u64);
        assert_eq!(value.to_bytes(), vec![0x01, 0xe1, 0x4d]);
        assert_eq!(ScBigInt::from_bytes(&[0x01, 0xe1, 0x4d]).unwrap(), value);
        assert!(ScBigInt::from_bytes(&[0x00, 0x01]).is_err());
    }

    #[test]
    fn text_is_decimal() {
        let text = "340282366920938463463374607431768211456";
        let value = ScBigInt::from_text(text).unwrap();
        assert_eq!(value.to_text(), text);
        assert_eq!(value.to_bytes().len(), 17);
        assert!(ScBigInt::from_text("-1").is_err());
        assert!(ScBigInt::from_text("12x").is_err());
    }

    #[test]
    fn encode_is_length_prefixed() {
        let value = ScBigInt::from(256_u64);
        let buf = encode_value(&value);
        assert_eq!(buf, vec![2, 1, 0]);
        assert_eq!(decode_value::<ScBigInt>(&buf).unwrap(), value);
        assert!(decode_value::<ScBigInt>(&[2, 0, 1]).is_err());
    }
}
