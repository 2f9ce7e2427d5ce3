//! Opaque byte strings and UTF-8 strings.
//!
//! Both are variable length: the canonical form is the raw content and the
//! `encode` form is length-prefixed.

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::traits::{hex_text, ScType};

impl ScType for Vec<u8> {
    const TYPE_NAME: &'static str = "Bytes";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        Ok(dec.bytes()?.to_vec())
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.bytes(self);
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        Ok(buf.to_vec())
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.clone()
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        hex_text(text)
    }

    fn to_text(&self) -> String {
        hex::encode(self)
    }
}

impl ScType for String {
    const TYPE_NAME: &'static str = "String";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        utf8(dec.bytes()?)
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.bytes(self.as_bytes());
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        utf8(buf)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        Ok(text.to_string())
    }

    fn to_text(&self) -> String {
        self.clone()
    }
}

fn utf8(buf: &[u8]) -> CodecResult<String> {
    std::str::from_utf8(buf)
        .map(str::to_string)
        .map_err(|e| CodecError::malformed("String", e.to_string()))
}
