use std::fmt;

use crate::codec::{Decoder, Encoder};
use crate::error::CodecResult;
use crate::serde_text::text_serde;
use crate::traits::{decode_array, fixed_array, hex_array, ScType};

pub const SC_TOKEN_ID_LENGTH: usize = 38;

/// Identifier of a native token: the foundry that minted it plus its serial.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScTokenId([u8; SC_TOKEN_ID_LENGTH]);

impl ScTokenId {
    pub const fn from_array(bytes: [u8; SC_TOKEN_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SC_TOKEN_ID_LENGTH] {
        &self.0
    }
}

impl Default for ScTokenId {
    fn default() -> Self {
        Self([0; SC_TOKEN_ID_LENGTH])
    }
}

impl ScType for ScTokenId {
    const TYPE_NAME: &'static str = "TokenID";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        decode_array(Self::TYPE_NAME, dec).map(Self)
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.fixed_bytes(&self.0);
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(Self::default());
        }
        fixed_array(Self::TYPE_NAME, buf).map(Self)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        hex_array(Self::TYPE_NAME, text).map(Self)
    }

    fn to_text(&self) -> String {
        hex::encode(self.0)
    }
}

text_serde!(ScTokenId);

impl fmt::Debug for ScTokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScTokenId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ScTokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
