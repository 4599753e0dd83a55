//! Container-like operations for ranges.

use crate::any_cursor::{AnyCursor, AnyView, Category, IntoErased};
use crate::cursor::{
    BidirectionalCursor, CursorIter, ForwardCursor, InputCursor, ItemOf, RandomAccessCursor,
    RandomAccessIter, Range,
};
use crate::cursors::CopiedCursor;
use crate::errors::IndexError;

/// Operations derived from a range's begin and end cursors.
///
/// This trait is implemented for every [`Range`]. Each operation requires
/// the minimum cursor category needed to implement it, so for example
/// [`back`](View::back) is only available when the cursors are
/// bidirectional:
///
/// ```compile_fail
/// use anyrange::{iter_view, View};
///
/// // `iter_view` produces forward cursors.
/// let view = iter_view([1, 2, 3]);
/// view.back();
/// ```
///
/// Whereas the same operation on a random access range compiles:
///
/// ```
/// use anyrange::{iota, View};
///
/// let view = iota(1..4);
/// assert_eq!(view.back(), Some(3));
/// ```
///
/// Indexing requires random access cursors:
///
/// ```compile_fail
/// use anyrange::{iota, Bidirectional, View};
///
/// let view = iota(0..3).erase::<Bidirectional>();
/// let _ = view.element(1);
/// ```
///
/// ```compile_fail
/// use anyrange::{iota, Bidirectional, View};
///
/// let view = iota(0..3).erase::<Bidirectional>();
/// let _ = view.at(1);
/// ```
///
/// ```
/// use anyrange::{iota, RandomAccess, View};
///
/// let view = iota(0..3).erase::<RandomAccess>();
/// assert_eq!(view.element(1), 1);
/// assert_eq!(view.at(1), Ok(1));
/// ```
///
/// Input ranges are single pass, so they can be iterated but not measured
/// or inspected without consuming them:
///
/// ```compile_fail
/// use anyrange::{iota, Input, View};
///
/// let view = iota(0..3).erase::<Input>();
/// let _ = view.len();
/// ```
///
/// ```compile_fail
/// use anyrange::{iota, Input, View};
///
/// let view = iota(0..3).erase::<Input>();
/// let _ = view.front();
/// ```
///
/// ```
/// use anyrange::{iota, Input, View};
///
/// let view = iota(0..3).erase::<Input>();
/// assert!(view.eq_iter([0, 1, 2]));
/// ```
pub trait View: Range {
    /// Return an iterator over the items in this range.
    fn iter(&self) -> CursorIter<Self::Cursor> {
        CursorIter::new(self.begin(), self.end())
    }

    /// Return true if the range contains no items.
    fn is_empty(&self) -> bool
    where
        Self::Cursor: ForwardCursor,
    {
        self.begin() == self.end()
    }

    /// Return the number of items in the range.
    ///
    /// This takes constant time for random access cursors and linear time
    /// otherwise.
    fn len(&self) -> usize
    where
        Self::Cursor: ForwardCursor,
    {
        self.begin().distance_to(&self.end())
    }

    /// Return the first item, or `None` if the range is empty.
    fn front(&self) -> Option<ItemOf<Self>>
    where
        Self::Cursor: ForwardCursor,
    {
        let begin = self.begin();
        (begin != self.end()).then(|| begin.get())
    }

    /// Return the last item, or `None` if the range is empty.
    fn back(&self) -> Option<ItemOf<Self>>
    where
        Self::Cursor: BidirectionalCursor,
    {
        let end = self.end();
        (self.begin() != end).then(|| end.retreated().get())
    }

    /// Return the item at `index`.
    ///
    /// No range checking is performed here. What happens if `index` is out
    /// of range is up to the cursor. See [`get`](View::get) and
    /// [`at`](View::at) for checked alternatives.
    fn element(&self, index: usize) -> ItemOf<Self>
    where
        Self::Cursor: RandomAccessCursor,
    {
        self.begin().get_at(index as isize)
    }

    /// Return the item at `index`, or `None` if `index` is out of range.
    fn get(&self, index: usize) -> Option<ItemOf<Self>>
    where
        Self::Cursor: RandomAccessCursor,
    {
        (index < self.len()).then(|| self.element(index))
    }

    /// Return the item at `index`, or an error if `index` is not less than
    /// the length of the range.
    fn at(&self, index: usize) -> Result<ItemOf<Self>, IndexError>
    where
        Self::Cursor: RandomAccessCursor,
    {
        let len = self.len();
        if index >= len {
            return Err(IndexError { index, len });
        }
        Ok(self.element(index))
    }

    /// Return true if this range and `other` have the same length and equal
    /// items.
    fn equals<R>(&self, other: &R) -> bool
    where
        R: Range + ?Sized,
        ItemOf<Self>: PartialEq<ItemOf<R>>,
    {
        self.iter().eq(other.iter())
    }

    /// Return true if this range yields the same items as `other`.
    fn eq_iter<I>(&self, other: I) -> bool
    where
        I: IntoIterator,
        ItemOf<Self>: PartialEq<I::Item>,
    {
        self.iter().eq(other)
    }

    /// Return a view which produces copies of the values referenced by this
    /// range's items.
    fn copied<'a, T>(&self) -> IteratorView<CopiedCursor<Self::Cursor>>
    where
        Self::Cursor: InputCursor<Item = &'a T>,
        T: Copy + 'a,
    {
        IteratorView::new(CopiedCursor::new(self.begin()), CopiedCursor::new(self.end()))
    }

    /// Return an exact-size iterator over the items in this range.
    fn exact_iter(&self) -> RandomAccessIter<Self::Cursor>
    where
        Self::Cursor: RandomAccessCursor,
    {
        RandomAccessIter::new(self.begin(), self.end())
    }

    /// Return a view over this range whose cursors have been type-erased
    /// to category `Cat`.
    ///
    /// ```
    /// use anyrange::{iota, AnyForwardView, View};
    ///
    /// let erased: AnyForwardView<isize> = iota(0..3).erase();
    /// assert_eq!(erased.len(), 3);
    /// ```
    fn erase<'a, Cat>(&self) -> AnyView<'a, Cat, ItemOf<Self>>
    where
        Cat: Category,
        ItemOf<Self>: 'a,
        Self::Cursor: IntoErased<'a, Cat, ItemOf<Self>>,
    {
        IteratorView::new(AnyCursor::new(self.begin()), AnyCursor::new(self.end()))
    }
}

impl<R: Range + ?Sized> View for R {}

/// A range defined by a pair of cursors.
#[derive(Clone, Copy)]
pub struct IteratorView<C> {
    begin: C,
    end: C,
}

impl<C> IteratorView<C> {
    /// Create a view over the items from `begin` up to, but not including,
    /// `end`.
    pub fn new(begin: C, end: C) -> Self {
        IteratorView { begin, end }
    }

    /// Consume the view and return its begin and end cursors.
    pub fn into_parts(self) -> (C, C) {
        (self.begin, self.end)
    }
}

impl<C: InputCursor + Clone> Range for IteratorView<C> {
    type Cursor = C;

    fn begin(&self) -> C {
        self.begin.clone()
    }

    fn end(&self) -> C {
        self.end.clone()
    }
}

impl<C: InputCursor> IntoIterator for IteratorView<C> {
    type Item = C::Item;
    type IntoIter = CursorIter<C>;

    fn into_iter(self) -> CursorIter<C> {
        CursorIter::new(self.begin, self.end)
    }
}

impl<C: InputCursor + Clone> IntoIterator for &IteratorView<C> {
    type Item = C::Item;
    type IntoIter = CursorIter<C>;

    fn into_iter(self) -> CursorIter<C> {
        self.iter()
    }
}

impl<C, D> PartialEq<IteratorView<D>> for IteratorView<C>
where
    C: InputCursor + Clone,
    D: InputCursor + Clone,
    C::Item: PartialEq<D::Item>,
{
    fn eq(&self, other: &IteratorView<D>) -> bool {
        self.equals(other)
    }
}

impl<C, U, const N: usize> PartialEq<[U; N]> for IteratorView<C>
where
    C: InputCursor + Clone,
    C::Item: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        iter_eq_slice(self.iter(), other)
    }
}

impl<C, U> PartialEq<Vec<U>> for IteratorView<C>
where
    C: InputCursor + Clone,
    C::Item: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        iter_eq_slice(self.iter(), other)
    }
}

fn iter_eq_slice<I: Iterator, U>(mut iter: I, other: &[U]) -> bool
where
    I::Item: PartialEq<U>,
{
    for expected in other {
        match iter.next() {
            Some(item) if item == *expected => {}
            _ => return false,
        }
    }
    iter.next().is_none()
}
