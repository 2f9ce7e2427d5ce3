use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::traits::HostStore;

/// In-memory, ordered key/value store.
///
/// Used for call parameters and results, and as the state store in tests.
/// Entries are kept sorted by key so [`Self::entries`] is deterministic.
pub struct InMemoryHostStore {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryHostStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a store pre-populated with `entries`.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Vec<u8>, Vec<u8>)>,
    {
        Self {
            entries: RwLock::new(entries.into_iter().collect()),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Snapshot of all entries, sorted by key.
    pub fn entries(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.entries
            .read()
            .expect("lock poisoned")
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryHostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HostStore for InMemoryHostStore {
    fn exists(&self, key: &[u8]) -> bool {
        self.entries
            .read()
            .expect("lock poisoned")
            .contains_key(key)
    }

    fn get(&self, key: &[u8]) -> Vec<u8> {
        self.entries
            .read()
            .expect("lock poisoned")
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    fn set(&self, key: &[u8], value: &[u8]) {
        self.entries
            .write()
            .expect("lock poisoned")
            .insert(key.to_vec(), value.to_vec());
    }

    fn delete(&self, key: &[u8]) {
        self.entries.write().expect("lock poisoned").remove(key);
    }
}

impl std::fmt::Debug for InMemoryHostStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryHostStore")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_delete() {
        let store = InMemoryHostStore::new();
        assert!(!store.exists(b"k"));
        assert!(store.get(b"k").is_empty());

        store.set(b"k", b"v");
        assert!(store.exists(b"k"));
        assert_eq!(store.get(b"k"), b"v");

        store.set(b"k", b"w");
        assert_eq!(store.get(b"k"), b"w");
        assert_eq!(store.len(), 1);

        store.delete(b"k");
        assert!(!store.exists(b"k"));
        store.delete(b"k");
        assert!(store.is_empty());
    }

    #[test]
    fn empty_value_still_exists() {
        let store = InMemoryHostStore::new();
        store.set(b"k", b"");
        assert!(store.exists(b"k"));
        assert!(store.get(b"k").is_empty());
    }

    #[test]
    fn entries_are_sorted() {
        let store = InMemoryHostStore::from_entries(vec![
            (b"b".to_vec(), b"2".to_vec()),
            (b"a".to_vec(), b"1".to_vec()),
        ]);
        let keys: Vec<Vec<u8>> = store.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec()]);
        store.clear();
        assert!(store.is_empty());
    }
}
