use std::marker::PhantomData;

use sckit_store::Proxy;
use sckit_types::{CodecResult, ScType};

use crate::traits::{ProxyView, ReadOnlyView};

/// Read-only view of a single `T` value.
#[derive(Clone, Debug)]
pub struct Immutable<T: ScType> {
    proxy: Proxy,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ScType> Immutable<T> {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            proxy,
            _marker: PhantomData,
        }
    }

    pub fn exists(&self) -> bool {
        self.proxy.exists()
    }

    /// The stored value, or `T::default()` if nothing is stored.
    pub fn value(&self) -> CodecResult<T> {
        T::from_bytes(&self.proxy.get())
    }

    pub fn to_text(&self) -> CodecResult<String> {
        Ok(self.value()?.to_text())
    }
}

impl<T: ScType> ProxyView for Immutable<T> {
    type ReadOnly = Self;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.proxy
    }
}

impl<T: ScType> ReadOnlyView for Immutable<T> {}

/// Read-write view of a single `T` value.
///
/// Embeds the [`Immutable`] view over the same path and adds writes.
#[derive(Clone, Debug)]
pub struct Mutable<T: ScType> {
    inner: Immutable<T>,
}

impl<T: ScType> Mutable<T> {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            inner: Immutable::new(proxy),
        }
    }

    pub fn as_immutable(&self) -> &Immutable<T> {
        &self.inner
    }

    pub fn exists(&self) -> bool {
        self.inner.exists()
    }

    pub fn value(&self) -> CodecResult<T> {
        self.inner.value()
    }

    pub fn to_text(&self) -> CodecResult<String> {
        self.inner.to_text()
    }

    pub fn set_value(&self, value: &T) {
        self.inner.proxy.set(&value.to_bytes());
    }

    pub fn delete(&self) {
        self.inner.proxy.delete();
    }
}

impl<T: ScType> ProxyView for Mutable<T> {
    type ReadOnly = Immutable<T>;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.inner.proxy
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sckit_store::InMemoryHostStore;
    use sckit_types::{CodecError, ScHash};

    use super::*;

    fn root(name: &str) -> Proxy {
        Proxy::new(Arc::new(InMemoryHostStore::new())).root(name)
    }

    #[test]
    fn missing_value_reads_as_zero() {
        let view = Immutable::<u64>::new(root("margin"));
        assert!(!view.exists());
        assert_eq!(view.value().unwrap(), 0);
        assert_eq!(view.to_text().unwrap(), "0");
    }

    #[test]
    fn mutable_and_immutable_share_state() {
        let proxy = root("margin");
        let writer = Mutable::<u64>::new(proxy.clone());
        let reader = Immutable::<u64>::new(proxy);
        writer.set_value(&500);
        assert!(reader.exists());
        assert_eq!(reader.value().unwrap(), 500);
        assert_eq!(writer.as_immutable().value().unwrap(), 500);
        assert_eq!(writer.read_only().value().unwrap(), 500);

        writer.delete();
        assert!(!reader.exists());
        assert_eq!(reader.value().unwrap(), 0);
    }

    #[test]
    fn corrupt_bytes_surface_as_errors() {
        let proxy = root("hash");
        proxy.set(&[1, 2, 3]);
        let view = Immutable::<ScHash>::new(proxy);
        assert!(matches!(
            view.value(),
            Err(CodecError::InvalidLength { .. })
        ));
    }

    #[test]
    fn text_form_follows_type() {
        let view = Mutable::<String>::new(root("name"));
        view.set_value(&"roulette".to_string());
        assert_eq!(view.to_text().unwrap(), "roulette");
    }
}
