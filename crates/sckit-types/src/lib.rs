//! Canonical value encodings for sandboxed contract state.
//!
//! Every value that crosses the boundary between a guest contract and its
//! host is a byte buffer. This crate defines how each domain type becomes
//! bytes and back again.
//!
//! # Key Types
//!
//! - [`Decoder`] / [`Encoder`] — byte-level reader and writer with
//!   continuation-bit variable-length integers
//! - [`ScType`] — the six conversions every storable type provides
//! - [`ScHash`], [`ScHname`], [`ScAddress`], [`ScChainId`], [`ScAgentId`],
//!   [`ScRequestId`], [`ScTokenId`], [`ScNftId`] — fixed-length identifiers
//! - [`ScBigInt`] — arbitrary-precision token amounts
//!
//! Integers, `bool`, `String` and `Vec<u8>` implement [`ScType`] directly.

pub mod address;
pub mod agent;
pub mod bigint;
pub mod bytes;
pub mod chain;
pub mod codec;
pub mod error;
pub mod hash;
pub mod hname;
pub mod nft;
pub mod request;
pub mod scalar;
mod serde_text;
pub mod token;
pub mod traits;

pub use address::{ScAddress, ScAddressKind, SC_ADDRESS_LENGTH};
pub use agent::{ScAgentId, SC_AGENT_ID_LENGTH};
pub use bigint::ScBigInt;
pub use chain::{ScChainId, SC_CHAIN_ID_LENGTH};
pub use codec::{Decoder, Encoder};
pub use error::{CodecError, CodecResult};
pub use hash::{ScHash, SC_HASH_LENGTH};
pub use hname::{ScHname, SC_HNAME_LENGTH};
pub use nft::{ScNftId, SC_NFT_ID_LENGTH};
pub use request::{ScRequestId, MAX_OUTPUT_INDEX, SC_REQUEST_ID_LENGTH};
pub use token::{ScTokenId, SC_TOKEN_ID_LENGTH};
pub use traits::{decode_value, encode_value, ScType};
