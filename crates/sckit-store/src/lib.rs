//! Host store contract and key-path addressing.
//!
//! A guest contract never holds a reference into host state. Instead it
//! composes byte-string key paths with a [`Proxy`] and issues
//! `exists`/`get`/`set`/`delete` calls against the host's flat
//! [`HostStore`]. The same sequence of `root`/`key`/`index` steps always
//! yields the same key, which is the only thing needed to find a value again
//! across calls.
//!
//! # Storage Backends
//!
//! - [`InMemoryHostStore`] -- ordered in-memory store for call payloads and tests
//! - [`ReadOnlyHostStore`] -- wrapper that refuses writes, handed to views

pub mod memory;
pub mod proxy;
pub mod readonly;
pub mod traits;

pub use memory::InMemoryHostStore;
pub use proxy::{Proxy, INDEX_SEPARATOR, MAP_KEY_SEPARATOR};
pub use readonly::ReadOnlyHostStore;
pub use traits::HostStore;
