use std::fmt;

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::serde_text::text_serde;
use crate::traits::{decode_array, fixed_array, hex_array, ScType};

pub const SC_ADDRESS_LENGTH: usize = 33;

/// The leading byte of an address, selecting what the remaining 32 bytes mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ScAddressKind {
    Ed25519 = 0,
    Alias = 8,
    Nft = 16,
}

impl ScAddressKind {
    pub fn from_byte(b: u8) -> CodecResult<Self> {
        match b {
            0 => Ok(Self::Ed25519),
            8 => Ok(Self::Alias),
            16 => Ok(Self::Nft),
            other => Err(CodecError::malformed(
                "Address",
                format!("unknown address kind {other}"),
            )),
        }
    }
}

/// A ledger address: one kind byte followed by a 32-byte key or id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScAddress([u8; SC_ADDRESS_LENGTH]);

impl ScAddress {
    pub fn new(kind: ScAddressKind, id: [u8; 32]) -> Self {
        let mut bytes = [0_u8; SC_ADDRESS_LENGTH];
        bytes[0] = kind as u8;
        bytes[1..].copy_from_slice(&id);
        Self(bytes)
    }

    fn checked(bytes: [u8; SC_ADDRESS_LENGTH]) -> CodecResult<Self> {
        ScAddressKind::from_byte(bytes[0])?;
        Ok(Self(bytes))
    }

    pub fn kind(&self) -> ScAddressKind {
        // construction only admits known kinds
        ScAddressKind::from_byte(self.0[0]).unwrap_or(ScAddressKind::Ed25519)
    }

    /// The 32 bytes following the kind byte.
    pub fn id(&self) -> &[u8] {
        &self.0[1..]
    }

    pub fn as_bytes(&self) -> &[u8; SC_ADDRESS_LENGTH] {
        &self.0
    }
}

impl Default for ScAddress {
    fn default() -> Self {
        Self([0; SC_ADDRESS_LENGTH])
    }
}

impl ScType for ScAddress {
    const TYPE_NAME: &'static str = "Address";

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
        Self::checked(hex_array(Self::TYPE_NAME, text)?)
    }

    fn to_text(&self) -> String {
        hex::encode(self.0)
    }
}

text_serde!(ScAddress);

impl fmt::Debug for ScAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScAddress({:?}:{})", self.kind(), hex::encode(&self.0[1..5]))
    }
}

impl fmt::Display for ScAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_byte_leads() {
        let addr = ScAddress::new(ScAddressKind::Alias, [3; 32]);
        let bytes = addr.to_bytes();
        assert_eq!(bytes.len(), SC_ADDRESS_LENGTH);
        assert_eq!(bytes[0], 8);
        assert_eq!(addr.kind(), ScAddressKind::Alias);
        assert_eq!(addr.id(), &[3; 32]);
    }

    #[test]
    fn unknown_kind_is_malformed() {
        let mut bytes = vec![0_u8; SC_ADDRESS_LENGTH];
        bytes[0] = 5;
        let err = ScAddress::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::Malformed { .. }));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(ScAddress::from_bytes(&[0; 32]).is_err());
        assert!(ScAddress::from_bytes(&[0; 34]).is_err());
        assert_eq!(ScAddress::from_bytes(&[]).unwrap(), ScAddress::default());
    }

    #[test]
    fn text_roundtrip() {
        let addr = ScAddress::new(ScAddressKind::Nft, [0x5a; 32]);
        assert_eq!(ScAddress::from_text(&addr.to_text()).unwrap(), addr);
    }
}
