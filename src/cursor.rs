//! Cursor category traits and the [`Range`] trait.
//!
//! A cursor is a position within a sequence which can be dereferenced to
//! get the item at that position and moved to the next position. The
//! operations a cursor supports are determined by its _category_, which is
//! expressed as a hierarchy of traits:
//!
//! | Trait                   | Adds                                         |
//! | ----------------------- | -------------------------------------------- |
//! | [`InputCursor`]         | `get`, `advance`, `==`                       |
//! | [`ForwardCursor`]       | independent copies, `distance_to`            |
//! | [`BidirectionalCursor`] | `retreat`                                    |
//! | [`RandomAccessCursor`]  | `offset`, `difference`, `get_at`             |
//!
//! A [`Range`] is a pair of cursors marking the start of a sequence and the
//! position one past its end.

use std::cmp::Ordering;
use std::iter::FusedIterator;

/// A cursor which can be dereferenced and advanced.
///
/// Input cursors are single-pass. Copies of an input cursor may share
/// underlying state, so that advancing one copy invalidates the others.
pub trait InputCursor: PartialEq {
    /// Type of item produced by dereferencing the cursor.
    type Item;

    /// Return the item at the current position.
    ///
    /// The result of calling this on an end cursor is determined by the
    /// implementation. The cursors in this crate panic.
    fn get(&self) -> Self::Item;

    /// Move to the next position.
    fn advance(&mut self);
}

/// A multi-pass cursor.
///
/// Clones of a forward cursor are independent. Advancing one does not
/// affect the others.
pub trait ForwardCursor: InputCursor + Clone {
    /// Return the number of steps needed to move from `self` to `end`.
    ///
    /// The default implementation steps a copy of `self` until it reaches
    /// `end`. Random access cursors should override this with a constant
    /// time version.
    fn distance_to(&self, end: &Self) -> usize {
        let mut cursor = self.clone();
        let mut steps = 0;
        while cursor != *end {
            cursor.advance();
            steps += 1;
        }
        steps
    }

    /// Return a copy of this cursor moved forwards `n` times.
    fn advanced_by(&self, n: usize) -> Self {
        let mut cursor = self.clone();
        for _ in 0..n {
            cursor.advance();
        }
        cursor
    }
}

/// A cursor which can move backwards as well as forwards.
pub trait BidirectionalCursor: ForwardCursor {
    /// Move to the previous position.
    fn retreat(&mut self);

    /// Return a copy of this cursor moved back one position.
    fn retreated(&self) -> Self {
        let mut cursor = self.clone();
        cursor.retreat();
        cursor
    }
}

/// A cursor which can move by an arbitrary offset in constant time.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Move the cursor by `n` positions. Negative values move backwards.
    fn offset(&mut self, n: isize);

    /// Return the signed number of steps from `origin` to `self`.
    fn difference(&self, origin: &Self) -> isize;

    /// Return the item `n` positions away from the current one.
    fn get_at(&self, n: isize) -> Self::Item {
        let mut cursor = self.clone();
        cursor.offset(n);
        cursor.get()
    }

    /// Compare the positions of two cursors into the same sequence.
    fn position_cmp(&self, other: &Self) -> Ordering {
        self.difference(other).cmp(&0)
    }
}

/// A type which exposes the start and end positions of a sequence.
///
/// The end cursor marks the position one past the last item. Ranges
/// usually borrow their data, so that creating cursors is cheap.
///
/// Operations derived from the cursors are available via the
/// [`View`](crate::View) trait, which is implemented for all ranges.
pub trait Range {
    type Cursor: InputCursor;

    /// Return a cursor pointing to the first item.
    fn begin(&self) -> Self::Cursor;

    /// Return a cursor pointing one past the last item.
    fn end(&self) -> Self::Cursor;
}

/// Type of items produced by a range's cursors.
pub type ItemOf<R> = <<R as Range>::Cursor as InputCursor>::Item;

/// Iterator over the items between two cursors.
///
/// This is returned by [`View::iter`](crate::View::iter). It is
/// double-ended if the cursor is bidirectional.
#[derive(Clone, Debug)]
pub struct CursorIter<C> {
    front: C,
    back: C,
}

impl<C: InputCursor> CursorIter<C> {
    /// Create an iterator which yields items from `begin` up to, but not
    /// including, `end`.
    pub fn new(begin: C, end: C) -> Self {
        CursorIter {
            front: begin,
            back: end,
        }
    }
}

impl<C: InputCursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        Some(item)
    }
}

impl<C: BidirectionalCursor> DoubleEndedIterator for CursorIter<C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl<C: InputCursor> FusedIterator for CursorIter<C> {}

/// Iterator over the items between two random access cursors.
///
/// Unlike [`CursorIter`] this knows its exact length and supports
/// constant-time skipping. It is returned by
/// [`View::exact_iter`](crate::View::exact_iter).
#[derive(Clone, Debug)]
pub struct RandomAccessIter<C> {
    front: C,
    back: C,
}

impl<C: RandomAccessCursor> RandomAccessIter<C> {
    pub fn new(begin: C, end: C) -> Self {
        RandomAccessIter {
            front: begin,
            back: end,
        }
    }
}

impl<C: RandomAccessCursor> Iterator for RandomAccessIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.front.get();
        self.front.advance();
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.distance_to(&self.back);
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.front = self.back.clone();
            return None;
        }
        self.front.offset(n as isize);
        self.next()
    }
}

impl<C: RandomAccessCursor> DoubleEndedIterator for RandomAccessIter<C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back.retreat();
        Some(self.back.get())
    }
}

impl<C: RandomAccessCursor> ExactSizeIterator for RandomAccessIter<C> {}

impl<C: RandomAccessCursor> FusedIterator for RandomAccessIter<C> {}
