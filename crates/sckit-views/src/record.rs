use sckit_store::Proxy;

use crate::traits::{ProxyView, ReadOnlyView};

/// Read-only bundle of named fields.
///
/// A record over an empty path is a top-level bundle such as a contract's
/// persistent state or the parameters of one call: field `name` then lives
/// at the bare key `name`. A record nested under a path stores its fields as
/// map entries of that path.
#[derive(Clone, Debug)]
pub struct ImmutableRecord {
    proxy: Proxy,
}

impl ImmutableRecord {
    pub fn new(proxy: Proxy) -> Self {
        Self { proxy }
    }

    /// Read-only view of type `V` rooted at field `name`.
    pub fn field<V: ReadOnlyView>(&self, name: &str) -> V {
        V::from_proxy(self.proxy.key(name.as_bytes()))
    }

    /// Whether field `name` holds a value. Only meaningful for scalar
    /// fields; containers keep their entries under sub-keys.
    pub fn exists(&self, name: &str) -> bool {
        self.proxy.key(name.as_bytes()).exists()
    }
}

impl ProxyView for ImmutableRecord {
    type ReadOnly = Self;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.proxy
    }
}

impl ReadOnlyView for ImmutableRecord {}

/// Read-write bundle of named fields.
#[derive(Clone, Debug)]
pub struct MutableRecord {
    inner: ImmutableRecord,
}

impl MutableRecord {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            inner: ImmutableRecord::new(proxy),
        }
    }

    /// View of type `V`, read-only or writable, rooted at field `name`.
    pub fn field<V: ProxyView>(&self, name: &str) -> V {
        V::from_proxy(self.inner.proxy.key(name.as_bytes()))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.inner.exists(name)
    }

    pub fn as_immutable(&self) -> &ImmutableRecord {
        &self.inner
    }
}

impl ProxyView for MutableRecord {
    type ReadOnly = ImmutableRecord;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.inner.proxy
    }
}
