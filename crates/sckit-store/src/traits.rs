/// The flat key/value store a host exposes to a guest contract.
///
/// All implementations must satisfy these invariants:
/// - Keys and values are opaque byte strings; the store never interprets them.
/// - Each call is atomic on its own. There are no multi-key transactions.
/// - Reading an absent key yields an empty buffer, never an error.
/// - No enumeration: callers can only find a value again by its exact key.
pub trait HostStore: Send + Sync {
    /// Check whether a value is stored under `key`.
    fn exists(&self, key: &[u8]) -> bool;

    /// Read the value under `key`, or an empty buffer if there is none.
    fn get(&self, key: &[u8]) -> Vec<u8>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &[u8], value: &[u8]);

    /// Remove the value under `key`. Deleting an absent key is a no-op.
    fn delete(&self, key: &[u8]);
}
