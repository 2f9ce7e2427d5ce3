use std::fmt;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};

use crate::codec::{Decoder, Encoder};
use crate::error::CodecResult;
use crate::serde_text::text_serde;
use crate::traits::{decode_array, fixed_array, hex_array, ScType};

pub const SC_HASH_LENGTH: usize = 32;

type Blake2b256 = Blake2b<U32>;

/// A 32-byte content hash.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScHash([u8; SC_HASH_LENGTH]);

impl ScHash {
    pub const fn from_array(bytes: [u8; SC_HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// BLAKE2b-256 digest of `data`.
    pub fn digest(data: &[u8]) -> Self {
        Self(Blake2b256::digest(data).into())
    }

    pub fn as_bytes(&self) -> &[u8; SC_HASH_LENGTH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl ScType for ScHash {
    const TYPE_NAME: &'static str = "Hash";

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
        self.to_hex()
    }
}

text_serde!(ScHash);

impl fmt::Debug for ScHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ScHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
