use std::fmt;

use crate::address::{ScAddress, SC_ADDRESS_LENGTH};
use crate::chain::ScChainId;
use crate::codec::{Decoder, Encoder};
use crate::error::{CodecError, CodecResult};
use crate::hname::{ScHname, SC_HNAME_LENGTH};
use crate::serde_text::text_serde;
use crate::traits::{fixed_array, ScType};

pub const SC_AGENT_ID_LENGTH: usize = SC_ADDRESS_LENGTH + SC_HNAME_LENGTH;

/// Identity of anything that can call a contract: an address, optionally
/// narrowed to one contract on the chain behind that address.
///
/// An agent with a zero hname is a plain address; a non-zero hname names a
/// contract.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScAgentId {
    address: ScAddress,
    hname: ScHname,
}

impl ScAgentId {
    pub fn new(address: ScAddress, hname: ScHname) -> Self {
        Self { address, hname }
    }

    /// Agent for a plain address.
    pub fn from_address(address: ScAddress) -> Self {
        Self::new(address, ScHname::default())
    }

    /// Agent for contract `hname` running on `chain`.
    pub fn for_contract(chain: &ScChainId, hname: ScHname) -> Self {
        Self::new(chain.as_address(), hname)
    }

    pub fn address(&self) -> ScAddress {
        self.address
    }

    pub fn hname(&self) -> ScHname {
        self.hname
    }

    pub fn is_contract(&self) -> bool {
        !self.hname.is_zero()
    }

    fn from_array(bytes: [u8; SC_AGENT_ID_LENGTH]) -> CodecResult<Self> {
        let (address, hname) = bytes.split_at(SC_ADDRESS_LENGTH);
        Ok(Self {
            address: ScAddress::from_bytes(address)?,
            hname: ScHname::from_bytes(hname)?,
        })
    }
}

impl ScType for ScAgentId {
    const TYPE_NAME: &'static str = "AgentID";

    fn decode(dec: &mut Decoder<'_>) -> CodecResult<Self> {
        Self::from_array(fixed_array(
            Self::TYPE_NAME,
            dec.fixed_bytes(SC_AGENT_ID_LENGTH)?,
        )?)
    }

    fn encode(&self, enc: &mut Encoder) {
        self.address.encode(enc);
        self.hname.encode(enc);
    }

    fn from_bytes(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(Self::default());
        }
        Self::from_array(fixed_array(Self::TYPE_NAME, buf)?)
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = self.address.to_bytes();
        buf.extend_from_slice(&self.hname.to_bytes());
        buf
    }

    fn from_text(text: &str) -> CodecResult<Self> {
        match text.trim().split_once('@') {
            Some((address, hname)) => {
                let hname = ScHname::from_text(hname)?;
                if hname.is_zero() {
                    return Err(CodecError::malformed(
                        Self::TYPE_NAME,
                        "contract hname must not be zero",
                    ));
                }
                Ok(Self::new(ScAddress::from_text(address)?, hname))
            }
            None => Ok(Self::from_address(ScAddress::from_text(text)?)),
        }
    }

    fn to_text(&self) -> String {
        if self.is_contract() {
            format!("{}@{}", self.address.to_text(), self.hname.to_text())
        } else {
            self.address.to_text()
        }
    }
}

text_serde!(ScAgentId);

impl fmt::Debug for ScAgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScAgentId({:?}@{})", self.address, self.hname)
    }
}

impl fmt::Display for ScAgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::ScAddressKind;

    fn user() -> ScAgentId {
        ScAgentId::from_address(ScAddress::new(ScAddressKind::Ed25519, [1; 32]))
    }

    #[test]
    fn layout_is_address_then_hname() {
        let agent = ScAgentId::for_contract(&ScChainId::from_array([2; 32]), ScHname(7));
        let bytes = agent.to_bytes();
        assert_eq!(bytes.len(), SC_AGENT_ID_LENGTH);
        assert_eq!(bytes[0], ScAddressKind::Alias as u8);
        assert_eq!(&bytes[SC_ADDRESS_LENGTH..], &[7, 0, 0, 0]);
        assert_eq!(ScAgentId::from_bytes(&bytes).unwrap(), agent);
    }

    #[test]
    fn text_forms() {
        let plain = user();
        assert!(!plain.to_text().contains('@'));
        assert_eq!(ScAgentId::from_text(&plain.to_text()).unwrap(), plain);

        let contract = ScAgentId::for_contract(&ScChainId::from_array([2; 32]), ScHname(0xbeef));
        assert!(contract.to_text().ends_with("@0000beef"));
        assert_eq!(ScAgentId::from_text(&contract.to_text()).unwrap(), contract);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(ScAgentId::from_bytes(&[0; 33]).is_err());
        assert!(ScAgentId::from_bytes(&[0; 38]).is_err());
    }

    #[test]
    fn different_agents_compare_unequal() {
        let a = user();
        let b = ScAgentId::new(a.address(), ScHname(1));
        assert_ne!(a, b);
    }
}
