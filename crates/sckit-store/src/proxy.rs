use std::fmt;
use std::sync::Arc;

use sckit_types::{CodecError, CodecResult, ScType};
use tracing::debug;

use crate::traits::HostStore;

/// Separator between a path and a map key.
pub const MAP_KEY_SEPARATOR: u8 = b'|';

/// Separator between a path and a binary array index.
pub const INDEX_SEPARATOR: u8 = b'#';

/// An address into a [`HostStore`]: a composed key path plus a handle to the
/// store it points into.
///
/// A proxy owns no data. Cloning one is cheap and every clone addresses the
/// same slot. Paths are composed deterministically:
///
/// ```text
/// root("bets")              -> "bets"            (array length counter)
/// root("bets").index(2)     -> "bets#\x02\0\0\0" (array element)
/// root("owners").key(b"x")  -> "owners|x"        (map entry)
/// ```
#[derive(Clone)]
pub struct Proxy {
    key: Vec<u8>,
    store: Arc<dyn HostStore>,
}

impl Proxy {
    /// A proxy with an empty path over `store`.
    pub fn new(store: Arc<dyn HostStore>) -> Self {
        Self {
            key: Vec::new(),
            store,
        }
    }

    /// Start a new path rooted at the top-level field `name`.
    ///
    /// Any path already held by this proxy is discarded.
    pub fn root(&self, name: &str) -> Proxy {
        Self {
            key: name.as_bytes().to_vec(),
            store: Arc::clone(&self.store),
        }
    }

    /// Descend into the map entry for `key`.
    pub fn key(&self, key: &[u8]) -> Proxy {
        self.sub(MAP_KEY_SEPARATOR, key)
    }

    /// Descend into array slot `index`. No bounds check is made.
    pub fn index(&self, index: u32) -> Proxy {
        self.sub(INDEX_SEPARATOR, &index.to_le_bytes())
    }

    fn sub(&self, separator: u8, suffix: &[u8]) -> Proxy {
        let mut key = Vec::with_capacity(self.key.len() + 1 + suffix.len());
        if !self.key.is_empty() {
            key.extend_from_slice(&self.key);
            key.push(separator);
        }
        key.extend_from_slice(suffix);
        Self {
            key,
            store: Arc::clone(&self.store),
        }
    }

    /// Number of elements in the array at this path; 0 if never written.
    pub fn length(&self) -> CodecResult<u32> {
        u32::from_bytes(&self.get())
    }

    /// Grow the array at this path by one and return the new slot.
    pub fn append(&self) -> CodecResult<Proxy> {
        let length = self.length()?;
        let next = length
            .checked_add(1)
            .ok_or_else(|| CodecError::malformed("Array", "array length overflow"))?;
        self.set(&next.to_bytes());
        Ok(self.index(length))
    }

    /// Reset the array length to 0.
    ///
    /// Element entries are left in the store. Re-growing the array overwrites
    /// them slot by slot; until then they hold stale bytes.
    pub fn clear_array(&self) {
        debug!(key = %hex::encode(&self.key), "clearing array length");
        self.delete();
    }

    /// Maps carry no length and cannot be enumerated, so there is nothing to
    /// reset. Entries must be deleted key by key.
    pub fn clear_map(&self) {
        debug!(key = %hex::encode(&self.key), "clear on map is a no-op");
    }

    pub fn exists(&self) -> bool {
        self.store.exists(&self.key)
    }

    /// Raw bytes at this path, or an empty buffer.
    pub fn get(&self) -> Vec<u8> {
        self.store.get(&self.key)
    }

    pub fn set(&self, value: &[u8]) {
        self.store.set(&self.key, value);
    }

    pub fn delete(&self) {
        self.store.delete(&self.key);
    }

    /// The composed key bytes.
    pub fn key_path(&self) -> &[u8] {
        &self.key
    }

    /// The store this proxy addresses.
    pub fn store(&self) -> &Arc<dyn HostStore> {
        &self.store
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proxy({})", hex::encode(&self.key))
    }
}
