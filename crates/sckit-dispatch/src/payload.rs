//! Key/value bundles carried by a call.
//!
//! Parameters travel into a call and results travel back out as a
//! [`CallPayload`]. The encoding is canonical:
//!
//! ```text
//! vlu(count) { bytes(key) bytes(value) }*     pairs sorted by key
//! ```
//!
//! An empty buffer decodes to the empty bundle.

use std::collections::BTreeMap;

use sckit_store::InMemoryHostStore;
use sckit_types::{CodecError, CodecResult, Decoder, Encoder, ScType};

const PAYLOAD_TYPE_NAME: &str = "CallPayload";

/// An ordered set of key/value pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallPayload {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl CallPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Vec<u8>, Vec<u8>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Snapshot the contents of a store, such as a filled-in results bundle.
    pub fn from_store(store: &InMemoryHostStore) -> Self {
        Self::from_entries(store.entries())
    }

    /// A store holding these pairs, for building parameter views.
    pub fn to_store(&self) -> InMemoryHostStore {
        InMemoryHostStore::from_entries(self.entries.clone())
    }

    /// Insert raw bytes under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> &mut Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert the canonical bytes of `value` under the field `name`.
    pub fn set<T: ScType>(&mut self, name: &str, value: &T) -> &mut Self {
        self.insert(name.as_bytes(), value.to_bytes())
    }

    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Decode field `name`; an absent field yields the default value.
    pub fn value<T: ScType>(&self, name: &str) -> CodecResult<T> {
        T::from_bytes(self.get(name.as_bytes()).unwrap_or_default())
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut enc = Encoder::new();
        enc.vlu_encode(self.entries.len() as u64);
        for (key, value) in &self.entries {
            enc.bytes(key).bytes(value);
        }
        enc.into_bytes()
    }

    /// Decode a bundle, rejecting unsorted or repeated keys and trailing
    /// bytes.
    pub fn decode(buf: &[u8]) -> CodecResult<Self> {
        if buf.is_empty() {
            return Ok(Self::new());
        }

        let mut dec = Decoder::new(buf);
        let count = dec.vlu_decode(32)?;
        let mut entries = BTreeMap::new();
        let mut previous: Option<&[u8]> = None;
        for _ in 0..count {
            let key = dec.bytes()?;
            let value = dec.bytes()?;
            if previous.is_some_and(|p| p >= key) {
                return Err(CodecError::malformed(
                    PAYLOAD_TYPE_NAME,
                    "keys not in strictly ascending order",
                ));
            }
            previous = Some(key);
            entries.insert(key.to_vec(), value.to_vec());
        }
        dec.finish()?;
        Ok(Self { entries })
    }
}
