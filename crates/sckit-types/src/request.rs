use std::fmt;

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::hash::{ScHash, SC_HASH_LENGTH};
use crate::serde_text::text_serde;
use crate::traits::{decode_array, fixed_array, hex_array, ScType};

pub const SC_REQUEST_ID_LENGTH: usize = SC_HASH_LENGTH + 2;

/// Highest output index a transaction can carry.
pub const MAX_OUTPUT_INDEX: u16 = 127;

const SEPARATOR: char = '-';

/// Identifier of a request: the transaction hash plus the little-endian
/// 16-bit index of the output holding the request.
///
/// Text form is `<index>-<transaction hash hex>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScRequestId([u8; SC_REQUEST_ID_LENGTH]);

impl ScRequestId {
    pub fn new(transaction: &ScHash, output_index: u16) -> CodecResult<Self> {
        let mut bytes = [0_u8; SC_REQUEST_ID_LENGTH];
        bytes[..SC_HASH_LENGTH].copy_from_slice(transaction.as_bytes());
        bytes[SC_HASH_LENGTH..].copy_from_slice(&output_index.to_le_bytes());
        Self::checked(bytes)
    }

    fn checked(bytes: [u8; SC_REQUEST_ID_LENGTH]) -> CodecResult<Self> {
        if bytes[SC_HASH_LENGTH] > MAX_OUTPUT_INDEX as u8 || bytes[SC_HASH_LENGTH + 1] != 0 {
            return Err(CodecError::malformed(
                Self::TYPE_NAME,
                format!("output index > {MAX_OUTPUT_INDEX}"),
            ));
        }
        Ok(Self(bytes))
    }

    pub fn transaction(&self) -> ScHash {
        let mut tx = [0_u8; SC_HASH_LENGTH];
        tx.copy_from_slice(&self.0[..SC_HASH_LENGTH]);
        ScHash::from_array(tx)
    }

    pub fn output_index(&self) -> u16 {
        u16::from_le_bytes([self.0[SC_HASH_LENGTH], self.0[SC_HASH_LENGTH + 1]])
    }
}

impl Default for ScRequestId {
    fn default() -> Self {
        Self([0; SC_REQUEST_ID_LENGTH])
    }
}

impl ScType for ScRequestId {
    const TYPE_NAME: &'static str = "RequestID";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        Self::checked(decode_array(Self::TYPE_NAME, dec)?)
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.fixed_bytes(&self.0);
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(Self::default());
        }
        Self::checked(fixed_array(Self::TYPE_NAME, buf)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        let (index, tx) = text.trim().split_once(SEPARATOR).ok_or_else(|| {
            CodecError::malformed(Self::TYPE_NAME, format!("missing '{SEPARATOR}' in {text:?}"))
        })?;
        let index = u16::from_text(index)?;
        let tx = ScHash::from_array(hex_array(Self::TYPE_NAME, tx)?);
        Self::new(&tx, index)
    }

    fn to_text(&self) -> String {
        format!(
            "{}{SEPARATOR}{}",
            self.output_index(),
            hex::encode(&self.0[..SC_HASH_LENGTH])
        )
    }
}

text_serde!(ScRequestId);

impl fmt::Debug for ScRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScRequestId({}{SEPARATOR}{})",
            self.output_index(),
            hex::encode(&self.0[..4])
        )
    }
}

impl fmt::Display for ScRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
