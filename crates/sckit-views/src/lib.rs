//! Typed views over key-path addressed contract state.
//!
//! A view is a [`Proxy`](sckit_store::Proxy) plus a static type. Reading a
//! view decodes the bytes stored at its path; writing encodes a value and
//! stores it there. Views compose: an array of maps of values is just an
//! [`ImmutableArray`] whose element type is an [`ImmutableMap`].
//!
//! # Key Types
//!
//! - [`Immutable`] / [`Mutable`] — a single value
//! - [`ImmutableArray`] / [`MutableArray`] — dense 0-indexed arrays
//! - [`ImmutableMap`] / [`MutableMap`] — point-lookup maps
//! - [`ImmutableRecord`] / [`MutableRecord`] — named-field bundles
//!
//! Every mutable view embeds the immutable view over the same path and can
//! be narrowed with `as_immutable()` or [`ProxyView::read_only`].

pub mod array;
pub mod map;
pub mod record;
pub mod traits;
pub mod value;

pub use array::{ImmutableArray, MutableArray};
pub use map::{ImmutableMap, MutableMap};
pub use record::{ImmutableRecord, MutableRecord};
pub use traits::{ProxyView, ReadOnlyView};
pub use value::{Immutable, Mutable};
