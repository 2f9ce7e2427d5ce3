use std::sync::{Arc, RwLock};

use tracing::warn;

use crate::traits::HostStore;

/// A [`HostStore`] wrapper that serves reads and refuses writes.
///
/// `set` and `delete` leave the inner store untouched. The first refused key
/// is remembered so the caller can abort once control returns to it.
pub struct ReadOnlyHostStore {
    inner: Arc<dyn HostStore>,
    rejected: RwLock<Option<Vec<u8>>>,
}

impl ReadOnlyHostStore {
    pub fn new(inner: Arc<dyn HostStore>) -> Self {
        Self {
            inner,
            rejected: RwLock::new(None),
        }
    }

    /// Key of the first refused write, if any write was attempted.
    pub fn rejected_write(&self) -> Option<Vec<u8>> {
        self.rejected.read().expect("lock poisoned").clone()
    }

    fn reject(&self, op: &'static str, key: &[u8]) {
        warn!(op, key = %hex::encode(key), "write refused on read-only store");
        let mut rejected = self.rejected.write().expect("lock poisoned");
        if rejected.is_none() {
            *rejected = Some(key.to_vec());
        }
    }
}

impl HostStore for ReadOnlyHostStore {
    fn exists(&self, key: &[u8]) -> bool {
        self.inner.exists(key)
    }

    fn get(&self, key: &[u8]) -> Vec<u8> {
        self.inner.get(key)
    }

    fn set(&self, key: &[u8], _value: &[u8]) {
        self.reject("set", key);
    }

    fn delete(&self, key: &[u8]) {
        self.reject("delete", key);
    }
}
