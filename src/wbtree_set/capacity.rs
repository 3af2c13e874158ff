use super::WBTreeSet;
use crate::raw::RawWBTree;

impl<T> WBTreeSet<T> {
    /// Creates an empty set with node storage for at least `capacity` elements.
    ///
    /// This is an extension and is not part of the standard `BTreeSet` API.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set: WBTreeSet<i32> = WBTreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        WBTreeSet {
            raw: RawWBTree::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the set can hold without reallocating its node storage.
    ///
    /// Rebuilding a subtree after an insertion reuses the slots it released, so capacity only
    /// grows with the number of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set: WBTreeSet<i32> = WBTreeSet::with_capacity(32);
    /// assert!(set.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
