use std::fmt;

use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::hash::ScHash;
use crate::serde_text::text_serde;
use crate::traits::{decode_array, fixed_array, ScType};

pub const SC_HNAME_LENGTH: usize = 4;

/// A 4-byte name-hash identifying a contract or entry point.
///
/// Stored as a little-endian `u32`. Hashes derived from names are never `0`
/// or `u32::MAX`; both values are reserved.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScHname(pub u32);

impl ScHname {
    /// Derive the name-hash of a UTF-8 name.
    ///
    /// Walks the BLAKE2b-256 digest in 4-byte little-endian chunks and keeps
    /// the first one that is not reserved. Falls back to `1` when all eight
    /// chunks are reserved.
    pub fn from_name(name: &str) -> Self {
        let digest = ScHash::digest(name.as_bytes());
        digest
            .as_bytes()
            .chunks_exact(SC_HNAME_LENGTH)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .find(|&v| v != 0 && v != u32::MAX)
            .map_or(Self(1), Self)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ScType for ScHname {
    const TYPE_NAME: &'static str = "Hname";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        decode_array(Self::TYPE_NAME, dec).map(|b| Self(u32::from_le_bytes(b)))
    }

    fn encode(&self, enc: &mut Encoder) {
        enc.fixed_bytes(&self.0.to_le_bytes());
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(Self::default());
        }
        fixed_array(Self::TYPE_NAME, buf).map(|b| Self(u32::from_le_bytes(b)))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        let text = text.trim();
        let text = text.strip_prefix("0x").unwrap_or(text);
        if text.is_empty() || text.len() > 2 * SC_HNAME_LENGTH {
            return Err(CodecError::malformed(
                Self::TYPE_NAME,
                format!("expected up to 8 hex digits, got {text:?}"),
            ));
        }
        u32::from_str_radix(text, 16)
            .map(Self)
            .map_err(|e| CodecError::InvalidHex(e.to_string()))
    }

    fn to_text(&self) -> String {
        format!("{:08x}", self.0)
    }
}

text_serde!(ScHname);

impl fmt::Debug for ScHname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScHname({:08x})", self.0)
    }
}

impl fmt::Display for ScHname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl From<u32> for ScHname {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_deterministic() {
        assert_eq!(ScHname::from_name("init"), ScHname::from_name("init"));
        assert_ne!(ScHname::from_name("init"), ScHname::from_name("setOwner"));
    }

    #[test]
    fn from_name_matches_deployed_contracts() {
        assert_eq!(ScHname::from_name("init").0, 0x1f44_d644);
        assert_eq!(ScHname::from_name("setOwnerMargin").0, 0x1774_461a);
        assert_eq!(ScHname::from_name("placeBid").0, 0x9bd7_2fa9);
        assert_eq!(ScHname::from_name("fairauction").0, 0x1b5c_43b1);
    }

    #[test]
    fn derived_hnames_avoid_reserved_values() {
        for name in ["", "a", "init", "getOwnerMargin", "setOwnerMargin"] {
            let h = ScHname::from_name(name);
            assert_ne!(h.value(), 0, "{name}");
            assert_ne!(h.value(), u32::MAX, "{name}");
        }
    }

    #[test]
    fn bytes_are_little_endian() {
        let h = ScHname(0x0102_0304);
        assert_eq!(h.to_bytes(), vec![4, 3, 2, 1]);
        assert_eq!(ScHname::from_bytes(&[4, 3, 2, 1]).unwrap(), h);
        assert!(ScHname::from_bytes(&[1, 2, 3]).is_err());
        assert!(ScHname::from_bytes(&[]).unwrap().is_zero());
    }

    #[test]
    fn text_is_eight_hex_digits() {
        let h = ScHname(0xab);
        assert_eq!(h.to_text(), "000000ab");
        assert_eq!(ScHname::from_text("000000ab").unwrap(), h);
        assert_eq!(ScHname::from_text("0xab").unwrap(), h);
        assert!(ScHname::from_text("123456789").is_err());
        assert!(ScHname::from_text("zz").is_err());
    }
}
