//! Cursors over common sequence types.

use std::cmp::Ordering;
use std::fmt;

use crate::cursor::{BidirectionalCursor, ForwardCursor, InputCursor, RandomAccessCursor, Range};
use crate::view::IteratorView;

/// Random access cursor over a slice.
///
/// Dereferencing produces a reference with the lifetime of the slice, not of
/// the cursor.
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Return a cursor pointing to the first element of `data`.
    pub fn begin(data: &'a [T]) -> Self {
        SliceCursor { data, pos: 0 }
    }

    /// Return a cursor pointing one past the last element of `data`.
    pub fn end(data: &'a [T]) -> Self {
        SliceCursor {
            data,
            pos: data.len(),
        }
    }

    /// Return the index of the cursor within the slice.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn moved_by(&self, n: isize) -> usize {
        match self.pos.checked_add_signed(n) {
            Some(pos) => pos,
            None => panic!(
                "cannot move slice cursor at {} by {} to a negative position",
                self.pos, n
            ),
        }
    }
}

// Implemented manually to avoid a `T: Clone` bound.
impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.data, other.data) && self.pos == other.pos
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("pos", &self.pos)
            .field("len", &self.data.len())
            .finish()
    }
}

impl<'a, T> InputCursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn get(&self) -> &'a T {
        &self.data[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }
}

impl<T> ForwardCursor for SliceCursor<'_, T> {
    fn distance_to(&self, end: &Self) -> usize {
        end.pos.saturating_sub(self.pos)
    }
}

impl<T> BidirectionalCursor for SliceCursor<'_, T> {
    #[inline]
    fn retreat(&mut self) {
        assert!(self.pos > 0, "cannot retreat slice cursor before start");
        self.pos -= 1;
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.pos = self.moved_by(n);
    }

    #[inline]
    fn difference(&self, origin: &Self) -> isize {
        self.pos as isize - origin.pos as isize
    }

    #[inline]
    fn get_at(&self, n: isize) -> Self::Item {
        &self.data[self.moved_by(n)]
    }
}

impl<'a, T> Range for &'a [T] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::begin(*self)
    }

    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::end(*self)
    }
}

impl<'a, T> Range for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::begin(self.as_slice())
    }

    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::end(self.as_slice())
    }
}

impl<'a, T, const N: usize> Range for &'a [T; N] {
    type Cursor = SliceCursor<'a, T>;

    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::begin(self.as_slice())
    }

    fn end(&self) -> SliceCursor<'a, T> {
        SliceCursor::end(self.as_slice())
    }
}

/// Random access cursor over consecutive integers.
///
/// Dereferencing produces the current value. Offsets wrap around, so
/// positions within any `isize` range can be reached even if the range is
/// wider than `isize::MAX`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IotaCursor {
    value: isize,
}

impl IotaCursor {
    pub fn new(value: isize) -> Self {
        IotaCursor { value }
    }
}

impl InputCursor for IotaCursor {
    type Item = isize;

    #[inline]
    fn get(&self) -> isize {
        self.value
    }

    #[inline]
    fn advance(&mut self) {
        self.value += 1;
    }
}

impl ForwardCursor for IotaCursor {
    fn distance_to(&self, end: &Self) -> usize {
        if end.value > self.value {
            end.value.abs_diff(self.value)
        } else {
            0
        }
    }
}

impl BidirectionalCursor for IotaCursor {
    #[inline]
    fn retreat(&mut self) {
        self.value -= 1;
    }
}

impl RandomAccessCursor for IotaCursor {
    #[inline]
    fn offset(&mut self, n: isize) {
        self.value = self.value.wrapping_add(n);
    }

    /// Return `self - origin`. The result wraps if the distance does not fit
    /// in an `isize`.
    #[inline]
    fn difference(&self, origin: &Self) -> isize {
        self.value.wrapping_sub(origin.value)
    }

    #[inline]
    fn get_at(&self, n: isize) -> isize {
        self.value.wrapping_add(n)
    }

    fn position_cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Return a view over the integers in `range`.
///
/// If `range.end < range.start` the view is empty.
pub fn iota(range: std::ops::Range<isize>) -> IteratorView<IotaCursor> {
    let end = range.end.max(range.start);
    IteratorView::new(IotaCursor::new(range.start), IotaCursor::new(end))
}

/// Forward cursor which adapts a cloneable Rust iterator.
///
/// The cursor caches the item at the current position, so dereferencing
/// clones it. Two cursors are equal if both are exhausted, or if both are
/// live and have advanced the same number of times.
pub struct IterCursor<I: Iterator> {
    /// Remaining iterator and the item at the current position. `None` once
    /// the iterator is exhausted.
    state: Option<(I, I::Item)>,
    pos: usize,
}

impl<I: Iterator> IterCursor<I> {
    /// Return a cursor pointing to the first item of `iter`.
    pub fn new(mut iter: I) -> Self {
        let state = iter.next().map(|item| (iter, item));
        IterCursor { state, pos: 0 }
    }

    /// Return a cursor which compares equal to any exhausted cursor.
    pub fn exhausted() -> Self {
        IterCursor {
            state: None,
            pos: 0,
        }
    }

    /// Return the number of times this cursor has advanced.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<I> Clone for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        IterCursor {
            state: self.state.clone(),
            pos: self.pos,
        }
    }
}

impl<I: Iterator> PartialEq for IterCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (None, None) => true,
            (Some(_), Some(_)) => self.pos == other.pos,
            _ => false,
        }
    }
}

impl<I: Iterator> fmt::Debug for IterCursor<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterCursor")
            .field("pos", &self.pos)
            .field("exhausted", &self.state.is_none())
            .finish()
    }
}

impl<I> InputCursor for IterCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn get(&self) -> I::Item {
        match &self.state {
            Some((_, item)) => item.clone(),
            None => panic!("cannot dereference exhausted iterator cursor"),
        }
    }

    fn advance(&mut self) {
        if let Some((mut iter, _)) = self.state.take() {
            self.state = iter.next().map(|item| (iter, item));
            self.pos += 1;
        }
    }
}

impl<I> ForwardCursor for IterCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
}

/// Return a view over the items of a cloneable iterator.
///
/// ```
/// use anyrange::{iter_view, View};
///
/// let evens = iter_view((1..10).filter(|x| x % 2 == 0));
/// assert_eq!(evens.len(), 4);
/// assert_eq!(evens.front(), Some(2));
/// ```
pub fn iter_view<I>(iter: I) -> IteratorView<IterCursor<I::IntoIter>>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    I::Item: Clone,
{
    IteratorView::new(IterCursor::new(iter.into_iter()), IterCursor::exhausted())
}

/// Cursor adapter which copies the values referenced by another cursor.
///
/// This is returned by [`View::copied`](crate::View::copied). It has the
/// same category as the wrapped cursor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CopiedCursor<C>(C);

impl<C> CopiedCursor<C> {
    pub fn new(cursor: C) -> Self {
        CopiedCursor(cursor)
    }

    /// Return the wrapped cursor.
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<'a, C, T> InputCursor for CopiedCursor<C>
where
    C: InputCursor<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    #[inline]
    fn get(&self) -> T {
        *self.0.get()
    }

    #[inline]
    fn advance(&mut self) {
        self.0.advance()
    }
}

impl<'a, C, T> ForwardCursor for CopiedCursor<C>
where
    C: ForwardCursor<Item = &'a T>,
    T: Copy + 'a,
{
    fn distance_to(&self, end: &Self) -> usize {
        self.0.distance_to(&end.0)
    }
}

impl<'a, C, T> BidirectionalCursor for CopiedCursor<C>
where
    C: BidirectionalCursor<Item = &'a T>,
    T: Copy + 'a,
{
    #[inline]
    fn retreat(&mut self) {
        self.0.retreat()
    }
}

impl<'a, C, T> RandomAccessCursor for CopiedCursor<C>
where
    C: RandomAccessCursor<Item = &'a T>,
    T: Copy + 'a,
{
    #[inline]
    fn offset(&mut self, n: isize) {
        self.0.offset(n)
    }

    #[inline]
    fn difference(&self, origin: &Self) -> isize {
        self.0.difference(&origin.0)
    }

    #[inline]
    fn get_at(&self, n: isize) -> T {
        *self.0.get_at(n)
    }
}
