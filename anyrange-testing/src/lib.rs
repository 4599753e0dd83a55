//! Internal testing utilities for the anyrange crates.

use std::cell::Cell;
use std::fmt::Debug;
use std::panic::RefUnwindSafe;
use std::rc::Rc;

/// Utility for table-driven tests.
///
/// Create a `Debug` struct, conventionally named `Case`, holding the inputs
/// and expected outputs of one case, then call `test_each` on a collection of
/// cases. Every case is run, even if earlier ones fail, and the failing cases
/// are reported together.
///
/// ```
/// use anyrange_testing::TestCases;
///
/// #[derive(Debug)]
/// struct Case {
///     len: usize,
///     index: usize,
///     in_range: bool,
/// }
///
/// let cases = [
///     Case { len: 3, index: 0, in_range: true },
///     Case { len: 3, index: 3, in_range: false },
/// ];
///
/// cases.test_each(|case| {
///     assert_eq!(case.index < case.len, case.in_range);
/// });
/// ```
///
/// Both the cases and the values captured by the test function must be
/// [unwind safe](https://doc.rust-lang.org/std/panic/fn.catch_unwind.html).
/// Values which are not, such as ones with interior mutability, should be
/// created inside the test function.
pub trait TestCases {
    /// The data for a single test case.
    type Case;

    /// Call `test` with a reference to each case, catching any panics.
    ///
    /// Panics after all cases have run if any of them failed.
    fn test_each(self, test: impl Fn(&Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe;

    /// Variant of [`test_each`](TestCases::test_each) which passes cases by
    /// value.
    ///
    /// Each case is formatted before the test function is called, so that
    /// it can be reported if the test fails.
    fn test_each_value(self, test: impl Fn(Self::Case) + RefUnwindSafe)
    where
        Self::Case: Debug + std::panic::UnwindSafe;
}

impl<I: IntoIterator> TestCases for I {
    type Case = I::Item;

    fn test_each(self, test: impl Fn(&I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + RefUnwindSafe,
    {
        let failures: Vec<_> = self
            .into_iter()
            .filter(|case| std::panic::catch_unwind(|| test(case)).is_err())
            .collect();
        report_failures(&failures);
    }

    fn test_each_value(self, test: impl Fn(I::Item) + RefUnwindSafe)
    where
        Self::Case: Debug + std::panic::UnwindSafe,
    {
        let mut failures = Vec::new();
        for case in self {
            let desc = format!("{:?}", case);
            let test = &test;
            if std::panic::catch_unwind(move || test(case)).is_err() {
                failures.push(desc);
            }
        }
        report_failures(&failures);
    }
}

fn report_failures<F: Debug>(failures: &[F]) {
    assert!(
        failures.is_empty(),
        "{} test cases failed: {:?}",
        failures.len(),
        failures
    );
}

/// Counts live instances of [`Instance`] tokens.
///
/// Embed an `Instance` in a value to check how many copies of the value
/// exist, for example to verify that cloning a container duplicates its
/// contents and dropping it releases them.
#[derive(Clone, Debug, Default)]
pub struct InstanceCounter {
    live: Rc<Cell<usize>>,
    created: Rc<Cell<usize>>,
}

impl InstanceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new token tracked by this counter.
    pub fn instance(&self) -> Instance {
        Instance::register(self.clone())
    }

    /// Return the number of tokens which are currently alive.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Return the total number of tokens created, including clones.
    pub fn created(&self) -> usize {
        self.created.get()
    }
}

/// Token whose live copies are counted by an [`InstanceCounter`].
#[derive(Debug)]
pub struct Instance {
    counter: InstanceCounter,
}

impl Instance {
    fn register(counter: InstanceCounter) -> Self {
        counter.live.set(counter.live.get() + 1);
        counter.created.set(counter.created.get() + 1);
        Instance { counter }
    }
}

impl Clone for Instance {
    fn clone(&self) -> Self {
        Instance::register(self.counter.clone())
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        self.counter.live.set(self.counter.live.get() - 1);
    }
}
