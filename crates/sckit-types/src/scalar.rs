//! Integer and boolean encodings.
//!
//! Canonical bytes are fixed-width little-endian; `encode`/`decode` use the
//! variable-length forms from [`crate::codec`], except for the single-byte
//! types which are written raw.

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::traits::{fixed_array, ScType};

impl ScType for bool {
    const TYPE_NAME: &'static str = "Bool";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        bool_from_byte(dec.byte()?)
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.byte(u8::from(*self));
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(false);
        }
        let [b] = fixed_array::<1>(Self::TYPE_NAME, buf)?;
        bool_from_byte(b)
    }

    fn to_bytes(&self) -> Vec<u8> {
        vec![u8::from(*self)]
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(CodecError::malformed(
                Self::TYPE_NAME,
                format!("cannot parse {other:?}"),
            )),
        }
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

fn bool_from_byte(b: u8) -> CodecResult<bool> {
    match b {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(CodecError::malformed(
            "Bool",
            format!("unexpected byte 0x{other:02x}"),
        )),
    }
}

impl ScType for u8 {
    const TYPE_NAME: &'static str = "Uint8";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        dec.byte()
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.byte(*self);
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(0);
        }
        let [b] = fixed_array::<1>(Self::TYPE_NAME, buf)?;
        Ok(b)
    }

    fn to_bytes(&self) -> Vec<u8> {
        vec![*self]
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        parse_int(Self::TYPE_NAME, text)
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

impl ScType for i8 {
    const TYPE_NAME: &'static str = "Int8";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        Ok(dec.byte()? as i8)
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.byte(*self as u8);
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(0);
        }
        let [b] = fixed_array::<1>(Self::TYPE_NAME, buf)?;
        Ok(b as i8)
    }

    fn to_bytes(&self) -> Vec<u8> {
        vec![*self as u8]
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        parse_int(Self::TYPE_NAME, text)
    }

    fn to_text(&self) -> String {
        self.to_string()
    }
}

fn parse_int<T: std::str::FromStr>(type_name: &'static str, text: &str) -> CodecResult<T>
where
    T::Err: std::fmt::Display,
{
    text.trim()
        .parse::<T>()
        .map_err(|e| CodecError::malformed(type_name, format!("{text:?}: {e}")))
}

macro_rules! unsigned_type {
    ($ty:ty, $name:literal, $bits:literal) => {
        impl ScType for $ty {
            const TYPE_NAME: &'static str = $name;

            fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
                let value = dec.vlu_decode($bits)?;
                <$ty>::try_from(value).map_err(|_| {
                    CodecError::malformed($name, format!("value {value} out of range"))
                })
            }

            fn encode(&self, enc: &mut Encoder) {
                enc.vlu_encode(u64::from(*self));
            }

            fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
                if buf.is_empty() {
                    return Ok(0);
                }
                Ok(<$ty>::from_le_bytes(fixed_array($name, buf)?))
            }

            fn to_bytes(&self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }

            fn from_text(text: &str) -> CodecResult<Self> {
                parse_int($name, text)
            }

            fn to_text(&self) -> String {
                self.to_string()
            }
        }
    };
}

macro_rules! signed_type {
    ($ty:ty, $name:literal, $bits:literal) => {
        impl ScType for $ty {
            const TYPE_NAME: &'static str = $name;

            fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
                let value = dec.vli_decode($bits)?;
                <$ty>::try_from(value).map_err(|_| {
                    CodecError::malformed($name, format!("value {value} out of range"))
                })
            }

            fn encode(&self, enc: &mut Encoder) {
                enc.vli_encode(i64::from(*self));
            }

            fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
                if buf.is_empty() {
                    return Ok(0);
                }
                Ok(<$ty>::from_le_bytes(fixed_array($name, buf)?))
            }

            fn to_bytes(&self) -> Vec<u8> {
                self.to_le_bytes().to_vec()
            }

            fn from_text(text: &str) -> CodecResult<Self> {
                parse_int($name, text)
            }

            fn to_text(&self) -> String {
                self.to_string()
            }
        }
    };
}

unsigned_type!(u16, "Uint16", 16);
unsigned_type!(u32, "Uint32", 32);
unsigned_type!(u64, "Uint64", 64);
signed_type!(i16, "Int16", 16);
signed_type!(i32, "Int32", 32);
signed_type!(i64, "Int64", 64);
