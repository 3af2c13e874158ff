use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use alloc::vec;
use alloc::vec::Vec;

use crate::error::{Result, check_strictly_ascending};
use crate::raw::{InOrder, RawWBTree};

mod capacity;
mod order_statistic;

/// An ordered set based on a weight-balanced binary search tree.
///
/// Every node caches the number of elements in its left and right subtrees, which makes rank
/// queries ([`get_ith`], [`position_of`]) and counting queries ([`num_geq`], [`num_leq`],
/// [`num_range`]) run in O(log n) instead of requiring a scan.
///
/// Balance is restored by rebuilding rather than by rotations. After an insertion, a subtree
/// whose children satisfy `max(l, r) > 2 * min(l, r) + 1` is flattened and rebuilt perfectly
/// balanced. Removals never rebalance: a long run of removals may leave the tree taller than
/// necessary until the next insertion repairs it.
///
/// It is a logic error for an item to be modified in such a way that the item's ordering relative
/// to any other item, as determined by the [`Ord`] trait, changes while it is in the set. This is
/// normally only possible through [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
/// The behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `WBTreeSet` that observed the logic error and not result in undefined behavior.
///
/// Iterators returned by [`WBTreeSet::iter`] and [`WBTreeSet::into_iter`] produce their items in
/// ascending order.
///
/// [`get_ith`]: WBTreeSet::get_ith
/// [`position_of`]: WBTreeSet::position_of
/// [`num_geq`]: WBTreeSet::num_geq
/// [`num_leq`]: WBTreeSet::num_leq
/// [`num_range`]: WBTreeSet::num_range
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
///
/// # Examples
///
/// ```
/// use wabi_bst::WBTreeSet;
///
/// let mut books = WBTreeSet::new();
///
/// books.insert("A Dance With Dragons");
/// books.insert("To Kill a Mockingbird");
/// books.insert("The Odyssey");
/// books.insert("The Great Gatsby");
///
/// if !books.contains("The Winds of Winter") {
///     println!("We have {} books, but The Winds of Winter ain't one.", books.len());
/// }
///
/// books.remove("The Odyssey");
///
/// // Alphabetical position of a title, starting at 1.
/// assert_eq!(books.position_of("The Great Gatsby"), Some(2));
///
/// for book in &books {
///     println!("{book}");
/// }
/// ```
///
/// A `WBTreeSet` with a known list of items can be initialized from an array:
///
/// ```
/// use wabi_bst::WBTreeSet;
///
/// let set = WBTreeSet::from([1, 2, 3]);
/// ```
pub struct WBTreeSet<T> {
    raw: RawWBTree<T>,
}

/// An iterator over the items of a `WBTreeSet`.
///
/// This `struct` is created by the [`iter`] method on [`WBTreeSet`].
/// See its documentation for more.
///
/// # Examples
///
/// ```
/// use wabi_bst::WBTreeSet;
///
/// let set = WBTreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.len(), 2);
/// ```
///
/// [`iter`]: WBTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: InOrder<'a, T>,
}

/// An owning iterator over the items of a `WBTreeSet` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`WBTreeSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// # Examples
///
/// ```
/// use wabi_bst::WBTreeSet;
///
/// let set = WBTreeSet::from([1, 2, 3]);
/// let mut iter = set.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next_back(), Some(3));
/// assert_eq!(iter.next(), Some(2));
/// ```
///
/// [`into_iter`]: WBTreeSet#method.into_iter
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> WBTreeSet<T> {
    /// Makes a new, empty `WBTreeSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    ///
    /// // entries can now be inserted into the empty set
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> WBTreeSet<T> {
        WBTreeSet {
            raw: RawWBTree::new(),
        }
    }

    /// Builds a perfectly balanced set from values that are already in strictly ascending order.
    ///
    /// # Panics
    ///
    /// Panics if `values` is not strictly ascending (unsorted or containing duplicates).
    /// Use [`try_from_sorted`](Self::try_from_sorted) to handle that case as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from_sorted(vec![1, 2, 3, 4, 5, 6, 7]);
    /// assert_eq!(set.height(), Some(2));
    /// assert_eq!(set.get_ith(4), Some(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn from_sorted(values: Vec<T>) -> WBTreeSet<T>
    where
        T: Ord,
    {
        match Self::try_from_sorted(values) {
            Ok(set) => set,
            Err(err) => panic!("`WBTreeSet::from_sorted()` - {err}!"),
        }
    }

    /// Builds a perfectly balanced set from values in strictly ascending order, reporting the
    /// first out-of-order position instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotStrictlyAscending`](crate::Error::NotStrictlyAscending) with the index
    /// of the first element that is not greater than its predecessor.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::{Error, WBTreeSet};
    ///
    /// assert!(WBTreeSet::try_from_sorted(vec![1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     WBTreeSet::try_from_sorted(vec![1, 3, 3]).unwrap_err(),
    ///     Error::NotStrictlyAscending { index: 2 },
    /// );
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn try_from_sorted(values: Vec<T>) -> Result<WBTreeSet<T>>
    where
        T: Ord,
    {
        check_strictly_ascending(&values)?;
        Ok(WBTreeSet {
            raw: RawWBTree::from_sorted(values),
        })
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut v = WBTreeSet::new();
    /// v.insert(1);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) while the tree is balanced; O(height) after removals.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains(value)
    }

    /// Returns a reference to the element in the set, if any, that is equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.get(&2), Some(&2));
    /// assert_eq!(set.get(&4), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(value)
    }

    /// Returns a reference to the smallest element, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.min(), None);
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.min(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns a reference to the largest element, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.max(), None);
    /// set.insert(3);
    /// set.insert(1);
    /// assert_eq!(set.max(), Some(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is
    ///   returned.
    /// - If the set already contained an equal value, `false` is returned, and
    ///   the entry is not updated.
    ///
    /// An insertion that puts a subtree out of weight balance rebuilds that subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) amortized; a single insertion may rebuild a subtree in time linear in its size.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.raw.insert(value)
    }

    /// If the set contains an element equal to the value, removes it from the
    /// set and drops it. Returns whether such an element was present.
    ///
    /// Removal never rebalances the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.remove(&2), true);
    /// assert_eq!(set.remove(&2), false);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// set.insert(2);
    /// assert_eq!(set.take(&2), Some(2));
    /// assert_eq!(set.take(&2), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value)
    }

    /// Gets an iterator that visits the elements in the `WBTreeSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), Some(&3));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) to create the iterator and O(1) amortized per step.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: InOrder::new(&self.raw),
        }
    }

    /// Returns the elements in ascending order as a vector of clones.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([30, 10, 20]);
    /// assert_eq!(set.to_vec(), vec![10, 20, 30]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut a = WBTreeSet::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1);
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut a = WBTreeSet::new();
    /// assert!(a.is_empty());
    /// a.insert(1);
    /// assert!(!a.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of edges on the longest root-to-leaf path, or `None` if the set is
    /// empty. A single element has height `Some(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let mut set = WBTreeSet::new();
    /// assert_eq!(set.height(), None);
    /// set.insert(1);
    /// assert_eq!(set.height(), Some(0));
    /// set.insert(2);
    /// assert_eq!(set.height(), Some(1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.raw.height()
    }
}

impl<T: PartialEq> PartialEq for WBTreeSet<T> {
    fn eq(&self, other: &WBTreeSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for WBTreeSet<T> {}

impl<T: Clone> Clone for WBTreeSet<T> {
    fn clone(&self) -> Self {
        WBTreeSet {
            raw: self.raw.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for WBTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for WBTreeSet<T> {
    fn default() -> Self {
        WBTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for WBTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = WBTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for WBTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for WBTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for WBTreeSet<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for WBTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `WBTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_bst::WBTreeSet;
    ///
    /// let set = WBTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a WBTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `wbtree_set::Iter`.
    ///
    /// ```
    /// # use wabi_bst::wbtree_set;
    /// let iter: wbtree_set::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            inner: InOrder::empty(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("inner", &self.inner).finish()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `wbtree_set::IntoIter`.
    ///
    /// ```
    /// # use wabi_bst::wbtree_set;
    /// let iter: wbtree_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            inner: Vec::new().into_iter(),
        }
    }
}
