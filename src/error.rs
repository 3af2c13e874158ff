//! Error types for building a set from pre-sorted input.

use thiserror::Error;

/// Error variants for fallible [`WBTreeSet`](crate::WBTreeSet) construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The element at `index` is not strictly greater than the element before it.
    ///
    /// Raised by [`WBTreeSet::try_from_sorted`](crate::WBTreeSet::try_from_sorted) for input
    /// that is unsorted or that contains duplicates.
    #[error("input is not strictly ascending at index {index}")]
    NotStrictlyAscending {
        /// Position of the first offending element.
        index: usize,
    },
}

/// A specialized Result type for set construction.
pub type Result<T> = core::result::Result<T, Error>;

/// Checks that `values` is strictly ascending, reporting the first offending index.
pub(crate) fn check_strictly_ascending<T: Ord>(values: &[T]) -> Result<()> {
    match values.windows(2).position(|pair| pair[0] >= pair[1]) {
        Some(offset) => Err(Error::NotStrictlyAscending {
            index: offset + 1,
        }),
        None => Ok(()),
    }
}
