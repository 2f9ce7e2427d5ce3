use std::fmt;

use crate::address::{ScAddress, ScAddressKind};
use crate::codec::{Decoder, Encoder};
use crate::error::CodecResult;
use crate::serde_text::text_serde;
use crate::traits::{decode_array, fixed_array, hex_array, ScType};

pub const SC_CHAIN_ID_LENGTH: usize = 32;

/// Identifier of a chain: the id of the alias output that anchors it.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScChainId([u8; SC_CHAIN_ID_LENGTH]);

impl ScChainId {
    pub const fn from_array(bytes: [u8; SC_CHAIN_ID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// The alias address controlled by this chain.
    pub fn as_address(&self) -> ScAddress {
        ScAddress::new(ScAddressKind::Alias, self.0)
    }

    pub fn as_bytes(&self) -> &[u8; SC_CHAIN_ID_LENGTH] {
        &self.0
    }
}

impl ScType for ScChainId {
    const TYPE_NAME: &'static str = "ChainID";

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

text_serde!(ScChainId);

impl fmt::Debug for ScChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScChainId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ScChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
