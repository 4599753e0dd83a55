//! Error types that are reported by range operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error returned by checked element access when the index is not less
/// than the length of the range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexError {
    /// The index that was requested.
    pub index: usize,

    /// The length of the range at the time of the access.
    pub len: usize,
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Index out of range: {} >= size ({})",
            self.index, self.len
        )
    }
}

impl Error for IndexError {}
