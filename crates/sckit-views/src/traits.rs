use sckit_store::Proxy;

/// A typed view rooted at one key path.
///
/// Views are built on demand from a [`Proxy`] and hold nothing but that
/// proxy, so a read-only and a read-write view over the same path always
/// observe the same state.
pub trait ProxyView: Sized {
    /// The read-only view over the same path.
    type ReadOnly: ReadOnlyView;

    fn from_proxy(proxy: Proxy) -> Self;

    fn proxy(&self) -> &Proxy;

    /// Narrow this view to its read-only counterpart.
    fn read_only(&self) -> Self::ReadOnly {
        Self::ReadOnly::from_proxy(self.proxy().clone())
    }
}

/// Marker for views that cannot write to the store.
pub trait ReadOnlyView: ProxyView {}
