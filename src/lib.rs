//! anyrange provides cursors, ranges built from them, and type-erased
//! cursors which can hold cursors of different concrete types behind a single
//! type.
//!
//! # Cursors and ranges
//!
//! A cursor is a position within a sequence. Cursors are classified into
//! categories according to the operations they support, from single-pass
//! _input_ cursors up to _random access_ cursors which can move by arbitrary
//! offsets in constant time. See the [`cursor`] module for details.
//!
//! A [`Range`] is a type which exposes a begin and end cursor. Any range gets
//! container-like operations such as [`len`](View::len),
//! [`front`](View::front), [`back`](View::back) and checked indexing
//! ([`at`](View::at)) via the [`View`] trait. Each operation is available
//! only if the range's cursors support it.
//!
//! ```
//! use anyrange::prelude::*;
//!
//! let data = vec![3, 1, 4, 1, 5];
//! let view = &data[1..4];
//!
//! assert_eq!(View::len(&view), 3);
//! assert_eq!(view.front(), Some(&1));
//! assert_eq!(view.back(), Some(&1));
//! assert_eq!(view.at(1), Ok(&4));
//! assert!(view.at(3).is_err());
//! ```
//!
//! # Type erasure
//!
//! [`AnyCursor`] erases the type of a cursor, keeping only the operations of
//! a chosen category. This allows cursors of different types, for example
//! over slices and over integer sequences, to be used interchangeably.
//!
//! ```
//! use anyrange::prelude::*;
//! use anyrange::{iota, AnyRandomAccessView};
//!
//! let data = [10, 11, 12];
//! let views: Vec<AnyRandomAccessView<isize>> = vec![
//!     iota(10..13).erase(),
//!     (&data[..]).copied().erase(),
//! ];
//! for view in &views {
//!     assert_eq!(view.element(2), 12);
//! }
//! ```
//!
//! # Serialization
//!
//! Views can be serialized as sequences using [serde](https://serde.rs) if
//! the `serde` feature is enabled.

pub mod any_cursor;
pub mod cursor;
mod cursors;
mod downcast;
pub mod errors;
mod impl_debug;
#[cfg(feature = "serde")]
mod impl_serialize;
mod view;

// Re-exports for convenience.
pub use any_cursor::{
    AnyBidirectionalCursor, AnyBidirectionalView, AnyCursor, AnyForwardCursor, AnyForwardView,
    AnyInputCursor, AnyInputView, AnyRandomAccessCursor, AnyRandomAccessView, AnyView,
    Bidirectional, Category, Forward, Input, IntoErased, RandomAccess,
};
pub use cursor::{
    BidirectionalCursor, CursorIter, ForwardCursor, InputCursor, ItemOf, RandomAccessCursor,
    RandomAccessIter, Range,
};
pub use cursors::{iota, iter_view, CopiedCursor, IotaCursor, IterCursor, SliceCursor};
pub use errors::IndexError;
pub use view::{IteratorView, View};

/// This module provides a convenient way to import the most common traits
/// from this library via a glob import.
pub mod prelude {
    pub use super::{
        BidirectionalCursor, ForwardCursor, InputCursor, RandomAccessCursor, Range, View,
    };
}

// This module is public for use by tests, but is considered internal to the
// project.
#[doc(hidden)]
pub mod test_util;
