//! Cursors with restricted capabilities, for testing operations which
//! depend on the cursor category.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::cursor::{BidirectionalCursor, ForwardCursor, InputCursor};
use crate::view::IteratorView;

/// Wraps a cursor and exposes only its input and forward operations.
///
/// Unlike the wrapped cursor, `distance_to` always steps.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardOnly<C>(pub C);

impl<C: InputCursor> InputCursor for ForwardOnly<C> {
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.0.get()
    }

    fn advance(&mut self) {
        self.0.advance()
    }
}

impl<C: ForwardCursor> ForwardCursor for ForwardOnly<C> {}

/// Wraps a cursor and exposes only its bidirectional operations.
#[derive(Clone, Debug, PartialEq)]
pub struct BidirectionalOnly<C>(pub C);

impl<C: InputCursor> InputCursor for BidirectionalOnly<C> {
    type Item = C::Item;

    fn get(&self) -> C::Item {
        self.0.get()
    }

    fn advance(&mut self) {
        self.0.advance()
    }
}

impl<C: ForwardCursor> ForwardCursor for BidirectionalOnly<C> {}

impl<C: BidirectionalCursor> BidirectionalCursor for BidirectionalOnly<C> {
    fn retreat(&mut self) {
        self.0.retreat()
    }
}

/// Input cursor which consumes items from a queue shared by all copies of
/// the cursor.
pub struct StreamCursor<T> {
    /// Shared queue of remaining items, or `None` for the end cursor.
    items: Option<Rc<RefCell<VecDeque<T>>>>,
}

impl<T> StreamCursor<T> {
    fn is_done(&self) -> bool {
        self.items
            .as_ref()
            .map_or(true, |items| items.borrow().is_empty())
    }
}

impl<T> Clone for StreamCursor<T> {
    fn clone(&self) -> Self {
        StreamCursor {
            items: self.items.clone(),
        }
    }
}

impl<T> PartialEq for StreamCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_done(), other.is_done()) {
            (true, true) => true,
            (false, false) => match (&self.items, &other.items) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                _ => false,
            },
            _ => false,
        }
    }
}

impl<T: Clone> InputCursor for StreamCursor<T> {
    type Item = T;

    fn get(&self) -> T {
        let front = self
            .items
            .as_ref()
            .and_then(|items| items.borrow().front().cloned());
        match front {
            Some(item) => item,
            None => panic!("cannot dereference end of stream"),
        }
    }

    fn advance(&mut self) {
        if let Some(items) = &self.items {
            items.borrow_mut().pop_front();
        }
    }
}

/// Return a single-pass view over `items`.
pub fn stream_view<T: Clone>(items: impl IntoIterator<Item = T>) -> IteratorView<StreamCursor<T>> {
    let queue = Rc::new(RefCell::new(items.into_iter().collect()));
    IteratorView::new(
        StreamCursor { items: Some(queue) },
        StreamCursor { items: None },
    )
}
