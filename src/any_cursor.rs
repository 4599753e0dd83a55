//! Type-erased cursors.
//!
//! [`AnyCursor`] can hold any concrete cursor which produces items of a given
//! type, provided the cursor supports the operations of the erased cursor's
//! category. The category is chosen using one of the marker types
//! [`Input`], [`Forward`], [`Bidirectional`] or [`RandomAccess`], and
//! determines which cursor traits `AnyCursor` implements.
//!
//! ```
//! use anyrange::{iota, AnyRandomAccessCursor, InputCursor, RandomAccessCursor, Range};
//!
//! let data = [1, 2, 3, 4];
//! let mut cursor = AnyRandomAccessCursor::new((&data[..]).begin());
//! cursor += 2;
//! assert_eq!(cursor.get(), &3);
//! assert_eq!(cursor.get_at(-1), &2);
//! ```
//!
//! Operations which are not supported by the category are not available:
//!
//! ```compile_fail
//! use anyrange::{iota, AnyForwardCursor, BidirectionalCursor, Range};
//!
//! let mut cursor = AnyForwardCursor::new(iota(0..3).end());
//! cursor.retreat();
//! ```
//!
//! ```compile_fail
//! use anyrange::{iota, AnyBidirectionalCursor, Range};
//!
//! let mut cursor = AnyBidirectionalCursor::new(iota(0..3).begin());
//! cursor += 1;
//! ```

use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::cursor::{BidirectionalCursor, ForwardCursor, InputCursor, RandomAccessCursor};
use crate::downcast::{impl_downcastdyn, ConcreteType, DowncastDyn};
use crate::view::IteratorView;

/// Object-safe interface for an erased input cursor.
///
/// This and the other `Erased*` traits are implemented by the boxed values
/// inside [`AnyCursor`]. They are public because they appear in the
/// definition of [`Category`], but are not intended to be used directly.
pub trait ErasedInput<'a, T>: ConcreteType {
    fn dyn_get(&self) -> T;
    fn dyn_advance(&mut self);

    /// Return true if `other` holds the same type of cursor as `self` and
    /// the two cursors are equal.
    fn dyn_eq(&self, other: &(dyn ErasedInput<'a, T> + 'a)) -> bool;

    fn clone_input(&self) -> Box<dyn ErasedInput<'a, T> + 'a>;
    fn as_dyn_input(&self) -> &(dyn ErasedInput<'a, T> + 'a);
}

impl_downcastdyn!(ErasedInput);

/// Object-safe interface for an erased forward cursor.
pub trait ErasedForward<'a, T>: ErasedInput<'a, T> {
    /// Return the distance to `end`, or `None` if it holds a different type
    /// of cursor.
    fn dyn_distance_to(&self, end: &(dyn ErasedInput<'a, T> + 'a)) -> Option<usize>;

    fn clone_forward(&self) -> Box<dyn ErasedForward<'a, T> + 'a>;
}

/// Object-safe interface for an erased bidirectional cursor.
pub trait ErasedBidirectional<'a, T>: ErasedForward<'a, T> {
    fn dyn_retreat(&mut self);
    fn clone_bidirectional(&self) -> Box<dyn ErasedBidirectional<'a, T> + 'a>;
}

/// Object-safe interface for an erased random access cursor.
pub trait ErasedRandomAccess<'a, T>: ErasedBidirectional<'a, T> {
    fn dyn_offset(&mut self, n: isize);

    /// Return `self - origin`, or `None` if `origin` holds a different type
    /// of cursor.
    fn dyn_difference(&self, origin: &(dyn ErasedInput<'a, T> + 'a)) -> Option<isize>;

    /// Compare positions with `other`. Returns `None` if `other` holds a
    /// different type of cursor, or if the cursors are at the same position
    /// without being equal.
    fn dyn_partial_cmp(&self, other: &(dyn ErasedInput<'a, T> + 'a)) -> Option<Ordering>;

    fn dyn_get_at(&self, n: isize) -> T;
    fn clone_random_access(&self) -> Box<dyn ErasedRandomAccess<'a, T> + 'a>;
}

mod private {
    pub trait Sealed {}
}

/// Marker for a cursor category, used to parametrize [`AnyCursor`].
pub trait Category: private::Sealed + 'static {
    /// Trait object type which holds erased cursors of this category.
    type Erased<'a, T: 'a>: ?Sized + ErasedInput<'a, T> + 'a;

    /// Name of the category, used in debug output.
    const NAME: &'static str;

    fn clone_erased<'a, T: 'a>(cursor: &Self::Erased<'a, T>) -> Box<Self::Erased<'a, T>>;
}

/// Category of single-pass cursors. See [`InputCursor`].
#[derive(Copy, Clone, Debug)]
pub enum Input {}

/// Category of multi-pass cursors. See [`ForwardCursor`].
#[derive(Copy, Clone, Debug)]
pub enum Forward {}

/// Category of cursors which can move backwards. See [`BidirectionalCursor`].
#[derive(Copy, Clone, Debug)]
pub enum Bidirectional {}

/// Category of cursors which can move by arbitrary offsets. See
/// [`RandomAccessCursor`].
#[derive(Copy, Clone, Debug)]
pub enum RandomAccess {}

impl private::Sealed for Input {}
impl private::Sealed for Forward {}
impl private::Sealed for Bidirectional {}
impl private::Sealed for RandomAccess {}

impl Category for Input {
    type Erased<'a, T: 'a> = dyn ErasedInput<'a, T> + 'a;
    const NAME: &'static str = "Input";

    fn clone_erased<'a, T: 'a>(cursor: &Self::Erased<'a, T>) -> Box<Self::Erased<'a, T>> {
        cursor.clone_input()
    }
}

impl Category for Forward {
    type Erased<'a, T: 'a> = dyn ErasedForward<'a, T> + 'a;
    const NAME: &'static str = "Forward";

    fn clone_erased<'a, T: 'a>(cursor: &Self::Erased<'a, T>) -> Box<Self::Erased<'a, T>> {
        cursor.clone_forward()
    }
}

impl Category for Bidirectional {
    type Erased<'a, T: 'a> = dyn ErasedBidirectional<'a, T> + 'a;
    const NAME: &'static str = "Bidirectional";

    fn clone_erased<'a, T: 'a>(cursor: &Self::Erased<'a, T>) -> Box<Self::Erased<'a, T>> {
        cursor.clone_bidirectional()
    }
}

impl Category for RandomAccess {
    type Erased<'a, T: 'a> = dyn ErasedRandomAccess<'a, T> + 'a;
    const NAME: &'static str = "RandomAccess";

    fn clone_erased<'a, T: 'a>(cursor: &Self::Erased<'a, T>) -> Box<Self::Erased<'a, T>> {
        cursor.clone_random_access()
    }
}

/// Box a concrete cursor as the erased cursor type of category `Cat`.
///
/// This is implemented for every cursor which supports the operations of
/// `Cat`. Cursors can be erased to a category weaker than their own, so a
/// random access cursor can be held by an `AnyCursor<Forward, _>` for
/// example.
pub trait IntoErased<'a, Cat: Category, T: 'a> {
    fn into_erased(self) -> Box<Cat::Erased<'a, T>>;
}

impl<'a, C, T: 'a> IntoErased<'a, Input, T> for C
where
    C: InputCursor<Item = T> + Clone + 'a,
{
    fn into_erased(self) -> Box<dyn ErasedInput<'a, T> + 'a> {
        Box::new(Model(self))
    }
}

impl<'a, C, T: 'a> IntoErased<'a, Forward, T> for C
where
    C: ForwardCursor<Item = T> + 'a,
{
    fn into_erased(self) -> Box<dyn ErasedForward<'a, T> + 'a> {
        Box::new(Model(self))
    }
}

impl<'a, C, T: 'a> IntoErased<'a, Bidirectional, T> for C
where
    C: BidirectionalCursor<Item = T> + 'a,
{
    fn into_erased(self) -> Box<dyn ErasedBidirectional<'a, T> + 'a> {
        Box::new(Model(self))
    }
}

impl<'a, C, T: 'a> IntoErased<'a, RandomAccess, T> for C
where
    C: RandomAccessCursor<Item = T> + 'a,
{
    fn into_erased(self) -> Box<dyn ErasedRandomAccess<'a, T> + 'a> {
        Box::new(Model(self))
    }
}

/// Wrapper which implements the erased cursor traits for a concrete cursor.
#[derive(Clone)]
#[repr(transparent)]
pub(crate) struct Model<C>(pub(crate) C);

impl<C> ConcreteType for Model<C> {
    fn concrete_type(&self) -> TypeId {
        typeid::of::<Self>()
    }
}

impl<'a, C, T> ErasedInput<'a, T> for Model<C>
where
    C: InputCursor<Item = T> + Clone + 'a,
{
    fn dyn_get(&self) -> T {
        self.0.get()
    }

    fn dyn_advance(&mut self) {
        self.0.advance()
    }

    fn dyn_eq(&self, other: &(dyn ErasedInput<'a, T> + 'a)) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.0 == other.0)
    }

    fn clone_input(&self) -> Box<dyn ErasedInput<'a, T> + 'a> {
        Box::new(self.clone())
    }

    fn as_dyn_input(&self) -> &(dyn ErasedInput<'a, T> + 'a) {
        self
    }
}

impl<'a, C, T> ErasedForward<'a, T> for Model<C>
where
    C: ForwardCursor<Item = T> + 'a,
{
    fn dyn_distance_to(&self, end: &(dyn ErasedInput<'a, T> + 'a)) -> Option<usize> {
        end.downcast_ref::<Self>()
            .map(|end| self.0.distance_to(&end.0))
    }

    fn clone_forward(&self) -> Box<dyn ErasedForward<'a, T> + 'a> {
        Box::new(self.clone())
    }
}

impl<'a, C, T> ErasedBidirectional<'a, T> for Model<C>
where
    C: BidirectionalCursor<Item = T> + 'a,
{
    fn dyn_retreat(&mut self) {
        self.0.retreat()
    }

    fn clone_bidirectional(&self) -> Box<dyn ErasedBidirectional<'a, T> + 'a> {
        Box::new(self.clone())
    }
}

impl<'a, C, T> ErasedRandomAccess<'a, T> for Model<C>
where
    C: RandomAccessCursor<Item = T> + 'a,
{
    fn dyn_offset(&mut self, n: isize) {
        self.0.offset(n)
    }

    fn dyn_difference(&self, origin: &(dyn ErasedInput<'a, T> + 'a)) -> Option<isize> {
        origin
            .downcast_ref::<Self>()
            .map(|origin| self.0.difference(&origin.0))
    }

    fn dyn_partial_cmp(&self, other: &(dyn ErasedInput<'a, T> + 'a)) -> Option<Ordering> {
        let other = other.downcast_ref::<Self>()?;
        if self.0 == other.0 {
            return Some(Ordering::Equal);
        }
        match self.0.position_cmp(&other.0) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }

    fn dyn_get_at(&self, n: isize) -> T {
        self.0.get_at(n)
    }

    fn clone_random_access(&self) -> Box<dyn ErasedRandomAccess<'a, T> + 'a> {
        Box::new(self.clone())
    }
}

/// A type-erased cursor of category `Cat` which produces items of type `T`.
///
/// The concrete cursor is stored in a heap allocation which is owned by the
/// `AnyCursor`. Cloning an `AnyCursor` clones the concrete cursor into a new
/// allocation.
///
/// A default-constructed `AnyCursor` is _singular_: it holds no cursor.
/// Singular cursors can be cloned, compared and dropped, but any other
/// operation panics.
pub struct AnyCursor<'a, Cat: Category, T: 'a> {
    cursor: Option<Box<Cat::Erased<'a, T>>>,
}

/// Erased cursor of the [`Input`] category.
pub type AnyInputCursor<'a, T> = AnyCursor<'a, Input, T>;

/// Erased cursor of the [`Forward`] category.
pub type AnyForwardCursor<'a, T> = AnyCursor<'a, Forward, T>;

/// Erased cursor of the [`Bidirectional`] category.
pub type AnyBidirectionalCursor<'a, T> = AnyCursor<'a, Bidirectional, T>;

/// Erased cursor of the [`RandomAccess`] category.
pub type AnyRandomAccessCursor<'a, T> = AnyCursor<'a, RandomAccess, T>;

/// A range whose cursors are type-erased.
pub type AnyView<'a, Cat, T> = IteratorView<AnyCursor<'a, Cat, T>>;

pub type AnyInputView<'a, T> = AnyView<'a, Input, T>;
pub type AnyForwardView<'a, T> = AnyView<'a, Forward, T>;
pub type AnyBidirectionalView<'a, T> = AnyView<'a, Bidirectional, T>;
pub type AnyRandomAccessView<'a, T> = AnyView<'a, RandomAccess, T>;

impl<'a, Cat: Category, T: 'a> AnyCursor<'a, Cat, T> {
    /// Erase a concrete cursor.
    pub fn new<C: IntoErased<'a, Cat, T>>(cursor: C) -> Self {
        AnyCursor {
            cursor: Some(cursor.into_erased()),
        }
    }

    /// Return true if this cursor holds no concrete cursor.
    pub fn is_singular(&self) -> bool {
        self.cursor.is_none()
    }

    fn erased(&self) -> &Cat::Erased<'a, T> {
        match &self.cursor {
            Some(cursor) => cursor,
            None => panic!("operation on singular {} cursor", Cat::NAME),
        }
    }

    fn erased_mut(&mut self) -> &mut Cat::Erased<'a, T> {
        match &mut self.cursor {
            Some(cursor) => cursor,
            None => panic!("operation on singular {} cursor", Cat::NAME),
        }
    }
}

impl<'a, Cat: Category, T: 'a> Default for AnyCursor<'a, Cat, T> {
    fn default() -> Self {
        AnyCursor { cursor: None }
    }
}

impl<'a, Cat: Category, T: 'a> Clone for AnyCursor<'a, Cat, T> {
    fn clone(&self) -> Self {
        AnyCursor {
            cursor: self.cursor.as_deref().map(Cat::clone_erased),
        }
    }
}

impl<'a, Cat: Category, T: 'a> PartialEq for AnyCursor<'a, Cat, T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.cursor, &other.cursor) {
            (Some(cursor), Some(other)) => cursor.dyn_eq(other.as_dyn_input()),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, Cat: Category, T: 'a> fmt::Debug for AnyCursor<'a, Cat, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyCursor")
            .field("category", &Cat::NAME)
            .field("singular", &self.is_singular())
            .finish()
    }
}

impl<'a, Cat: Category, T: 'a> InputCursor for AnyCursor<'a, Cat, T> {
    type Item = T;

    fn get(&self) -> T {
        self.erased().dyn_get()
    }

    fn advance(&mut self) {
        self.erased_mut().dyn_advance()
    }
}

impl<'a, Cat: Category, T: 'a> ForwardCursor for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedForward<'a, T>,
{
    fn distance_to(&self, end: &Self) -> usize {
        match self.erased().dyn_distance_to(end.erased().as_dyn_input()) {
            Some(distance) => distance,
            None => panic!("cannot measure distance between different cursor types"),
        }
    }
}

impl<'a, Cat: Category, T: 'a> BidirectionalCursor for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedBidirectional<'a, T>,
{
    fn retreat(&mut self) {
        self.erased_mut().dyn_retreat()
    }
}

impl<'a, Cat: Category, T: 'a> AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    /// Return `self - origin`, or `None` if either cursor is singular or the
    /// cursors hold different concrete types.
    pub fn checked_difference(&self, origin: &Self) -> Option<isize> {
        let (cursor, origin) = (self.cursor.as_deref()?, origin.cursor.as_deref()?);
        cursor.dyn_difference(origin.as_dyn_input())
    }
}

impl<'a, Cat: Category, T: 'a> RandomAccessCursor for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    fn offset(&mut self, n: isize) {
        self.erased_mut().dyn_offset(n)
    }

    fn difference(&self, origin: &Self) -> isize {
        match self.erased().dyn_difference(origin.erased().as_dyn_input()) {
            Some(diff) => diff,
            None => panic!("cannot measure difference between different cursor types"),
        }
    }

    fn get_at(&self, n: isize) -> T {
        self.erased().dyn_get_at(n)
    }
}

impl<'a, Cat: Category, T: 'a> PartialOrd for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.cursor.as_deref(), other.cursor.as_deref()) {
            (Some(cursor), Some(other)) => cursor.dyn_partial_cmp(other.as_dyn_input()),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl<'a, Cat: Category, T: 'a> AddAssign<isize> for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    fn add_assign(&mut self, n: isize) {
        self.offset(n)
    }
}

impl<'a, Cat: Category, T: 'a> SubAssign<isize> for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    fn sub_assign(&mut self, n: isize) {
        self.offset(-n)
    }
}

impl<'a, Cat: Category, T: 'a> Add<isize> for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, Cat: Category, T: 'a> Add<AnyCursor<'a, Cat, T>> for isize
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    type Output = AnyCursor<'a, Cat, T>;

    fn add(self, cursor: AnyCursor<'a, Cat, T>) -> AnyCursor<'a, Cat, T> {
        cursor + self
    }
}

impl<'a, Cat: Category, T: 'a> Sub<isize> for AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<'a, 'r, Cat: Category, T: 'a> Sub for &'r AnyCursor<'a, Cat, T>
where
    Cat::Erased<'a, T>: ErasedRandomAccess<'a, T>,
{
    type Output = isize;

    fn sub(self, origin: &'r AnyCursor<'a, Cat, T>) -> isize {
        self.difference(origin)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use anyrange_testing::{InstanceCounter, TestCases};

    use super::{
        AnyBidirectionalCursor, AnyCursor, AnyForwardCursor, AnyForwardView, AnyInputCursor,
        AnyRandomAccessCursor, AnyRandomAccessView, Bidirectional, DowncastDyn, ErasedInput,
        Input, IntoErased, Model, RandomAccess,
    };
    use crate::cursor::{BidirectionalCursor, ForwardCursor, InputCursor, RandomAccessCursor};
    use crate::cursors::{iota, CopiedCursor, IotaCursor, SliceCursor};
    use crate::test_util::{stream_view, BidirectionalOnly, ForwardOnly};
    use crate::view::View;
    use crate::Range;

    /// Cursor which counts its live instances.
    #[derive(Clone, Debug)]
    struct CountedCursor {
        inner: IotaCursor,
        _instance: anyrange_testing::Instance,
    }

    impl PartialEq for CountedCursor {
        fn eq(&self, other: &Self) -> bool {
            self.inner == other.inner
        }
    }

    impl InputCursor for CountedCursor {
        type Item = isize;

        fn get(&self) -> isize {
            self.inner.get()
        }

        fn advance(&mut self) {
            self.inner.advance()
        }
    }

    impl ForwardCursor for CountedCursor {}

    #[test]
    fn test_input_cursor() {
        let view = stream_view(["a", "b", "c"]);
        let mut cursor = AnyInputCursor::new(view.begin());
        let end = AnyInputCursor::new(view.end());

        assert_eq!(cursor.get(), "a");
        cursor.advance();
        assert_eq!(cursor.get(), "b");
        assert!(cursor != end);
        cursor.advance();
        cursor.advance();
        assert!(cursor == end);
    }

    #[test]
    fn test_forward_cursor() {
        let data = [1, 2, 3];
        let begin = ForwardOnly(SliceCursor::begin(&data));
        let end = ForwardOnly(SliceCursor::end(&data));

        let mut cursor = AnyForwardCursor::new(begin);
        let end = AnyForwardCursor::new(end);
        let copy = cursor.clone();

        // Advancing a copy does not affect the original.
        cursor.advance();
        assert_eq!(cursor.get(), &2);
        assert_eq!(copy.get(), &1);
        assert_eq!(copy.distance_to(&end), 3);
        assert_eq!(cursor.distance_to(&end), 2);
        assert_eq!(copy.advanced_by(3), end);
    }

    #[test]
    fn test_erased_increment_matches_underlying() {
        let data = [5, 6, 7, 8];
        let mut concrete = SliceCursor::begin(&data);
        let mut erased = AnyForwardCursor::new(concrete);
        let end = SliceCursor::end(&data);

        while concrete != end {
            assert_eq!(erased.get(), concrete.get());
            erased.advance();
            concrete.advance();
        }
        assert_eq!(erased, AnyForwardCursor::new(end));
    }

    #[test]
    fn test_bidirectional_cursor() {
        let data = [1, 2, 3];
        let mut cursor = AnyBidirectionalCursor::new(BidirectionalOnly(SliceCursor::end(&data)));
        cursor.retreat();
        assert_eq!(cursor.get(), &3);
        cursor.retreat();
        assert_eq!(cursor.get(), &2);
        assert_eq!(cursor.retreated().get(), &1);
    }

    #[test]
    fn test_random_access_cursor() {
        let data = [10, 20, 30, 40, 50];
        let begin = AnyRandomAccessCursor::new(SliceCursor::begin(&data));
        let end = AnyRandomAccessCursor::new(SliceCursor::end(&data));

        let mut cursor = begin.clone();
        cursor += 3;
        assert_eq!(cursor.get(), &40);
        cursor -= 2;
        assert_eq!(cursor.get(), &20);
        assert_eq!(cursor.get_at(2), &40);
        assert_eq!(cursor.get_at(-1), &10);

        assert_eq!(&end - &begin, 5);
        assert_eq!(&begin - &end, -5);
        assert_eq!((begin.clone() + 4).get(), &50);
        assert_eq!((2isize + begin.clone()).get(), &30);
        assert_eq!((end.clone() - 1).get(), &50);
        assert_eq!(begin.distance_to(&end), 5);
    }

    #[test]
    fn test_random_access_ordering() {
        #[derive(Debug)]
        struct Case {
            lhs: isize,
            rhs: isize,
        }

        let cases = [
            Case { lhs: 0, rhs: 0 },
            Case { lhs: 0, rhs: 3 },
            Case { lhs: 3, rhs: 0 },
            Case { lhs: -2, rhs: 2 },
        ];

        cases.test_each(|&Case { lhs, rhs }| {
            let a = AnyRandomAccessCursor::new(IotaCursor::new(lhs));
            let b = AnyRandomAccessCursor::new(IotaCursor::new(rhs));
            assert_eq!(a < b, lhs < rhs);
            assert_eq!(a > b, lhs > rhs);
            assert_eq!(a <= b, lhs <= rhs);
            assert_eq!(a >= b, lhs >= rhs);
            assert_eq!(a == b, lhs == rhs);
            assert_eq!(&a - &b, lhs - rhs);
        })
    }

    #[test]
    fn test_different_cursor_types() {
        let data = [0isize, 1, 2];
        let a = AnyRandomAccessCursor::new(IotaCursor::new(0));
        let b = AnyRandomAccessCursor::new(CopiedCursor::new(SliceCursor::begin(&data)));

        assert_eq!(a.get(), b.get());
        assert!(a != b);
        assert_eq!(a.partial_cmp(&b), None);
        assert_eq!(a.checked_difference(&b), None);
    }

    #[test]
    #[should_panic(expected = "cannot measure difference between different cursor types")]
    fn test_difference_between_different_types() {
        let data = [0isize, 1];
        let a = AnyRandomAccessCursor::new(IotaCursor::new(0));
        let b = AnyRandomAccessCursor::new(CopiedCursor::new(SliceCursor::begin(&data)));
        let _ = &a - &b;
    }

    #[test]
    #[should_panic(expected = "cannot measure distance between different cursor types")]
    fn test_distance_between_different_types() {
        let data = [0isize, 1];
        let a = AnyForwardCursor::new(IotaCursor::new(0));
        let b = AnyForwardCursor::new(CopiedCursor::new(SliceCursor::begin(&data)));
        a.distance_to(&b);
    }

    #[test]
    fn test_ordering_consistent_with_equality() {
        let a = [1, 2];
        let b = [1, 2];
        let x = AnyRandomAccessCursor::new(SliceCursor::begin(&a));
        let y = AnyRandomAccessCursor::new(SliceCursor::begin(&b));

        // Same position in different slices.
        assert!(x != y);
        assert_eq!(x.partial_cmp(&y), None);
        assert!(!(x <= y));
        assert!(!(x >= y));

        let x2 = x.clone();
        assert!(x == x2);
        assert_eq!(x.partial_cmp(&x2), Some(Ordering::Equal));
        assert!(x < x.clone() + 1);
    }

    #[test]
    fn test_ordering_wide_span() {
        let begin = AnyRandomAccessCursor::new(IotaCursor::new(isize::MIN));
        let end = AnyRandomAccessCursor::new(IotaCursor::new(isize::MAX));
        assert!(begin < end);
        assert!(end > begin);
        assert_eq!(begin.distance_to(&end), usize::MAX);
    }

    #[test]
    fn test_weaker_category() {
        // A random access cursor can be held as a forward cursor.
        let view: AnyForwardView<isize> = iota(0..4).erase();
        assert_eq!(view.len(), 4);
        assert_eq!(view.front(), Some(0));
        assert!(view.eq_iter([0, 1, 2, 3]));

        let data = [1, 2, 3];
        let view = (&data[..]).erase::<Bidirectional>();
        assert_eq!(view.back(), Some(&3));
    }

    #[test]
    fn test_erased_view() {
        let data = vec![3, 1, 4, 1, 5];
        let view: AnyRandomAccessView<&i32> = (&data).erase();
        assert_eq!(view.len(), 5);
        assert_eq!(view.element(2), &4);
        assert_eq!(view.at(5).err().map(|e| e.len), Some(5));
        assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), [5, 1, 4, 1, 3]);
        assert_eq!(view, [&3, &1, &4, &1, &5]);
    }

    #[test]
    fn test_singular() {
        let data = [1i32];
        let singular = AnyForwardCursor::<i32>::default();
        assert!(singular.is_singular());
        assert!(singular.clone().is_singular());
        assert_eq!(singular, AnyForwardCursor::default());
        assert_ne!(singular, AnyForwardCursor::new(CopiedCursor::new(SliceCursor::begin(&data))));

        let singular = AnyRandomAccessCursor::<isize>::default();
        let cursor = AnyRandomAccessCursor::new(IotaCursor::new(0));
        assert_eq!(singular.partial_cmp(&cursor), None);
        assert_eq!(cursor.partial_cmp(&singular), None);
        assert_eq!(
            singular.partial_cmp(&AnyRandomAccessCursor::default()),
            Some(Ordering::Equal)
        );
    }

    #[test]
    #[should_panic(expected = "operation on singular Forward cursor")]
    fn test_singular_get() {
        AnyForwardCursor::<i32>::default().get();
    }

    #[test]
    fn test_clone_owns_copy() {
        let counter = InstanceCounter::new();
        let cursor = AnyForwardCursor::new(CountedCursor {
            inner: IotaCursor::new(0),
            _instance: counter.instance(),
        });
        assert_eq!(counter.live(), 1);

        let mut copy = cursor.clone();
        assert_eq!(counter.live(), 2);
        copy.advance();
        assert_eq!(copy.get(), 1);
        assert_eq!(cursor.get(), 0);

        drop(cursor);
        assert_eq!(counter.live(), 1);
        drop(copy);
        assert_eq!(counter.live(), 0);
        assert_eq!(counter.created(), 2);
    }

    #[test]
    fn test_downcast_erased() {
        let data = [1, 2];
        let erased: Box<dyn ErasedInput<'_, &i32> + '_> =
            IntoErased::<Input, _>::into_erased(SliceCursor::begin(&data));
        assert!(erased.is::<Model<SliceCursor<i32>>>());
        assert!(!erased.is::<Model<IotaCursor>>());
        assert_eq!(
            erased
                .downcast_ref::<Model<SliceCursor<i32>>>()
                .map(|m| m.0.position()),
            Some(0)
        );
    }

    #[test]
    fn test_debug() {
        let cursor = AnyCursor::<RandomAccess, isize>::new(IotaCursor::new(0));
        assert_eq!(
            format!("{:?}", cursor),
            "AnyCursor { category: \"RandomAccess\", singular: false }"
        );
    }
}
