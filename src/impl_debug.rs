use std::fmt;

use crate::cursor::InputCursor;
use crate::view::{IteratorView, View};

/// Views are formatted as a list of their items.
///
/// For input ranges, formatting consumes the items.
impl<C> fmt::Debug for IteratorView<C>
where
    C: InputCursor + Clone,
    C::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::cursors::{iota, iter_view};

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", iota(1..4)), "[1, 2, 3]");
        assert_eq!(format!("{:?}", iota(0..0)), "[]");
        assert_eq!(format!("{:?}", iter_view(["a", "b"])), "[\"a\", \"b\"]");
    }
}
