use std::fmt;
use std::marker::PhantomData;

use sckit_store::Proxy;
use sckit_types::{CodecError, CodecResult, ScType};

use crate::traits::{ProxyView, ReadOnlyView};
use crate::value::{Immutable, Mutable};

/// Read-only view of a dense, 0-indexed array of `E` views.
///
/// The length counter lives at the array's own path; element `i` lives at
/// `path#i`. An array that was never written has length 0. Elements are
/// read-only as well.
pub struct ImmutableArray<E: ReadOnlyView> {
    proxy: Proxy,
    _marker: PhantomData<fn() -> E>,
}

impl<E: ReadOnlyView> ImmutableArray<E> {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            proxy,
            _marker: PhantomData,
        }
    }

    pub fn length(&self) -> CodecResult<u32> {
        self.proxy.length()
    }

    /// View of element `index`, which must be below [`Self::length`].
    pub fn get(&self, index: u32) -> CodecResult<E> {
        self.element(index).map(E::from_proxy)
    }

    /// Views of every element in index order.
    pub fn elements(&self) -> CodecResult<Vec<E>> {
        Ok(self.element_paths()?.into_iter().map(E::from_proxy).collect())
    }

    fn element(&self, index: u32) -> CodecResult<Proxy> {
        let length = self.length()?;
        if index >= length {
            return Err(CodecError::IndexOutOfRange { index, length });
        }
        Ok(self.proxy.index(index))
    }

    fn element_paths(&self) -> CodecResult<Vec<Proxy>> {
        let length = self.length()?;
        Ok((0..length).map(|i| self.proxy.index(i)).collect())
    }
}

impl<T: ScType> ImmutableArray<Immutable<T>> {
    /// Read every element value in index order.
    pub fn to_vec(&self) -> CodecResult<Vec<T>> {
        self.elements()?.iter().map(Immutable::value).collect()
    }
}

impl<E: ReadOnlyView> ProxyView for ImmutableArray<E> {
    type ReadOnly = Self;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.proxy
    }
}

impl<E: ReadOnlyView> ReadOnlyView for ImmutableArray<E> {}

impl<E: ReadOnlyView> Clone for ImmutableArray<E> {
    fn clone(&self) -> Self {
        Self::new(self.proxy.clone())
    }
}

impl<E: ReadOnlyView> fmt::Debug for ImmutableArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImmutableArray").field(&self.proxy).finish()
    }
}

/// Read-write view of an array of `E` views; adds growth and clearing.
///
/// Embeds the read-only array over the same path, which hands out the
/// read-only counterparts of `E`.
pub struct MutableArray<E: ProxyView> {
    inner: ImmutableArray<E::ReadOnly>,
}

impl<E: ProxyView> MutableArray<E> {
    pub fn new(proxy: Proxy) -> Self {
        Self {
            inner: ImmutableArray::new(proxy),
        }
    }

    pub fn length(&self) -> CodecResult<u32> {
        self.inner.length()
    }

    pub fn get(&self, index: u32) -> CodecResult<E> {
        self.inner.element(index).map(E::from_proxy)
    }

    pub fn elements(&self) -> CodecResult<Vec<E>> {
        Ok(self
            .inner
            .element_paths()?
            .into_iter()
            .map(E::from_proxy)
            .collect())
    }

    /// Grow the array by one element and return a view of the new slot.
    pub fn append(&self) -> CodecResult<E> {
        Ok(E::from_proxy(self.inner.proxy.append()?))
    }

    /// Reset the length to 0. Element entries stay in the store until a
    /// later append overwrites them.
    pub fn clear(&self) {
        self.inner.proxy.clear_array();
    }

    pub fn as_immutable(&self) -> &ImmutableArray<E::ReadOnly> {
        &self.inner
    }
}

impl<T: ScType> MutableArray<Mutable<T>> {
    /// Append `value` as a new last element.
    pub fn push(&self, value: &T) -> CodecResult<()> {
        self.append()?.set_value(value);
        Ok(())
    }
}

impl<E: ProxyView> ProxyView for MutableArray<E> {
    type ReadOnly = ImmutableArray<E::ReadOnly>;

    fn from_proxy(proxy: Proxy) -> Self {
        Self::new(proxy)
    }

    fn proxy(&self) -> &Proxy {
        &self.inner.proxy
    }
}

impl<E: ProxyView> Clone for MutableArray<E> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: ProxyView> fmt::Debug for MutableArray<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableArray").field(&self.inner.proxy).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sckit_store::InMemoryHostStore;

    use super::*;

    fn root(name: &str) -> Proxy {
        Proxy::new(Arc::new(InMemoryHostStore::new())).root(name)
    }

    #[test]
    fn never_written_array_is_empty() {
        let arr = ImmutableArray::<Immutable<u32>>::new(root("arr"));
        assert_eq!(arr.length().unwrap(), 0);
        assert!(arr.to_vec().unwrap().is_empty());
    }

    #[test]
    fn push_and_read_back() {
        let arr = MutableArray::<Mutable<String>>::new(root("names"));
        arr.push(&"a".to_string()).unwrap();
        arr.push(&"b".to_string()).unwrap();
        assert_eq!(arr.length().unwrap(), 2);
        assert_eq!(arr.get(1).unwrap().value().unwrap(), "b");
        assert_eq!(
            arr.as_immutable().to_vec().unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn get_past_end_is_rejected() {
        let arr = MutableArray::<Mutable<u8>>::new(root("arr"));
        arr.push(&1).unwrap();
        let err = arr.get(1).unwrap_err();
        assert_eq!(err, CodecError::IndexOutOfRange { index: 1, length: 1 });
    }

    #[test]
    fn clear_then_regrow() {
        let arr = MutableArray::<Mutable<u16>>::new(root("arr"));
        for v in [10, 20, 30] {
            arr.push(&v).unwrap();
        }
        arr.clear();
        assert_eq!(arr.length().unwrap(), 0);
        assert!(arr.get(0).is_err());

        arr.push(&99).unwrap();
        assert_eq!(arr.as_immutable().to_vec().unwrap(), vec![99]);
    }

    #[test]
    fn array_of_arrays() {
        let outer = MutableArray::<MutableArray<Mutable<u32>>>::new(root("grid"));
        let row0 = outer.append().unwrap();
        row0.push(&1).unwrap();
        row0.push(&2).unwrap();
        let row1 = outer.append().unwrap();
        row1.push(&3).unwrap();

        let read = outer.as_immutable();
        assert_eq!(read.length().unwrap(), 2);
        assert_eq!(read.get(0).unwrap().to_vec().unwrap(), vec![1, 2]);
        assert_eq!(read.get(1).unwrap().to_vec().unwrap(), vec![3]);
    }

    #[test]
    fn read_only_side_yields_read_only_elements() {
        let outer = MutableArray::<MutableArray<Mutable<u8>>>::new(root("rows"));
        outer.append().unwrap().push(&4).unwrap();

        let row: ImmutableArray<Immutable<u8>> = outer.as_immutable().get(0).unwrap();
        assert_eq!(row.to_vec().unwrap(), vec![4]);
        let narrowed: ImmutableArray<ImmutableArray<Immutable<u8>>> = outer.read_only();
        assert_eq!(narrowed.length().unwrap(), 1);
    }
}
