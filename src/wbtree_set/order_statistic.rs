use core::borrow::Borrow;
use core::ops::Index;

use alloc::vec::Vec;

use super::WBTreeSet;
use crate::Rank;

impl<T> WBTreeSet<T> {
    /// Returns the value at one-based `position` in sorted order.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API.
    ///
    /// `get_ith(1)` is the smallest element and `get_ith(len)` the largest. Returns `None`
    /// for `0` or any position past the end.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([10, 20, 30]);
    /// assert_eq!(set.get_ith(2), Some(&20));
    /// assert!(set.get_ith(0).is_none());
    /// assert!(set.get_ith(4).is_none());
    /// ```
    #[must_use]
    pub fn get_ith(&self, position: usize) -> Option<&T> {
        self.raw.get_ith(position)
    }

    /// Returns the one-based position of `value` in sorted order, or `None` if
    /// the value is not present.
    ///
    /// This is an order-statistic extension and is not part of the standard
    /// `BTreeSet` API.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([10, 20]);
    ///
    /// assert_eq!(set.position_of(&20), Some(2));
    /// assert_eq!(set.position_of(&15), None);
    /// ```
    #[must_use]
    pub fn position_of<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.position_of(value)
    }

    /// Returns the number of elements greater than or equal to `value`.
    ///
    /// `value` need not be in the set.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([10, 20, 30, 40]);
    /// assert_eq!(set.num_geq(&20), 3);
    /// assert_eq!(set.num_geq(&25), 2);
    /// assert_eq!(set.num_geq(&50), 0);
    /// ```
    #[must_use]
    pub fn num_geq<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.num_geq(value)
    }

    /// Returns the number of elements less than or equal to `value`.
    ///
    /// `value` need not be in the set.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([10, 20, 30, 40]);
    /// assert_eq!(set.num_leq(&20), 2);
    /// assert_eq!(set.num_leq(&5), 0);
    /// ```
    #[must_use]
    pub fn num_leq<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.num_leq(value)
    }

    /// Returns the number of elements in the closed range `[min, max]`.
    ///
    /// Neither bound needs to be in the set.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(set.num_range(&2, &5), 4);
    /// assert_eq!(set.num_range(&0, &100), 7);
    /// assert_eq!(set.num_range(&4, &4), 1);
    /// ```
    #[must_use]
    pub fn num_range<Q>(&self, min: &Q, max: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        assert!(min <= max, "range start is greater than range end in `WBTreeSet::num_range()`");
        self.raw.num_range(min, max)
    }

    /// Returns clones of the elements in the closed range `[min, max]`, in ascending order.
    ///
    /// Only the subtrees that can hold elements of the range are visited.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    ///
    /// # Complexity
    ///
    /// O(log n + k), where k is the number of elements returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(set.extract_range(&2, &5), vec![2, 3, 4, 5]);
    /// assert!(set.extract_range(&8, &9).is_empty());
    /// ```
    #[must_use]
    pub fn extract_range<Q>(&self, min: &Q, max: &Q) -> Vec<T>
    where
        T: Borrow<Q> + Clone,
        Q: ?Sized + Ord,
    {
        assert!(min <= max, "range start is greater than range end in `WBTreeSet::extract_range()`");
        self.raw.extract_range(min, max).into_iter().cloned().collect()
    }
}

/// Indexes into the set by one-based rank.
///
/// # Panics
///
/// Panics if `rank` is `Rank(0)` or greater than the number of elements.
///
/// # Examples
///
/// ```
/// use wabi_bst::{Rank, WBTreeSet};
///
/// let set = WBTreeSet::from([10, 20, 30]);
/// assert_eq!(set[Rank(2)], 20);
/// ```
impl<T> Index<Rank> for WBTreeSet<T> {
    type Output = T;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_ith(rank.0).expect("index out of bounds")
    }
}
