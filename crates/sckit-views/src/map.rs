use std::fmt;
use std::marker::PhantomData;

use sckit_store::Proxy;
use sckit_types::ScType;

use crate::traits::{ProxyView, ReadOnlyView};

/// Read-only view of a map from `K` to `E` views.
///
/// Entry `k` lives at `path|<canonical bytes of k>`. Maps support point
/// lookups only: the host store cannot enumerate keys, so there is no
/// length and no iteration. A missing entry reads as the element's zero
/// value.
pub struct ImmutableMap<K: ScType, E: ReadOnlyView> {
    proxy: Proxy,
    _marker: PhantomData<fn() -> (K, E)>,
}

impl<K: ScType, E: ReadOnlyView> ImmutableMap<K, E> {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            proxy,
            _marker: PhantomData,
        }
    }

    /// View of the entry for `key`.
    pub fn get(&self, key: &K) -> E {
        E::from_proxy(self.entry(key))
    }

    fn entry(&self, key: &K) -> Proxy {
        self.proxy.key(&key.to_bytes())
    }
}

impl<K: ScType, E: ReadOnlyView> ProxyView for ImmutableMap<K, E> {
    type ReadOnly = Self;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.proxy
    }
}

impl<K: ScType, E: ReadOnlyView> ReadOnlyView for ImmutableMap<K, E> {}

impl<K: ScType, E: ReadOnlyView> Clone for ImmutableMap<K, E> {
    fn clone(&self) -> Self {
        Self::new(self.proxy.clone())
    }
}

impl<K: ScType, E: ReadOnlyView> fmt::Debug for ImmutableMap<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImmutableMap").field(&self.proxy).finish()
    }
}

/// Read-write view of a map from `K` to `E` views.
pub struct MutableMap<K: ScType, E: ProxyView> {
    inner: ImmutableMap<K, E::ReadOnly>,
}

impl<K: ScType, E: ProxyView> MutableMap<K, E> {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            inner: ImmutableMap::new(proxy),
        }
    }

    pub fn get(&self, key: &K) -> E {
        E::from_proxy(self.inner.entry(key))
    }

    /// Maps keep no length, so there is nothing to reset; individual
    /// entries must be deleted through their element views.
    pub fn clear(&self) {
        self.inner.proxy.clear_map();
    }

    pub fn as_immutable(&self) -> &ImmutableMap<K, E::ReadOnly> {
        &self.inner
    }
}

impl<K: ScType, E: ProxyView> ProxyView for MutableMap<K, E> {
    type ReadOnly = ImmutableMap<K, E::ReadOnly>;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.inner.proxy
    }
}

impl<K: ScType, E: ProxyView> Clone for MutableMap<K, E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: ScType, E: ProxyView> fmt::Debug for MutableMap<K, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableMap").field(&self.inner.proxy).finish()
    }
}
