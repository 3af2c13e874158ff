use core::borrow::Borrow;
use core::cmp::Ordering;

use super::handle::Handle;
use super::size::Size;

/// Multiplier applied to the lighter side in the weight-balance predicate.
pub(crate) const WEIGHT_FACTOR: usize = 2;
/// Additive slack in the weight-balance predicate.
pub(crate) const WEIGHT_SLACK: usize = 1;

// Binary search tree node with cached subtree sizes.
#[derive(Clone)]
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
    // Number of elements in the left subtree, not counting this node.
    left_count: Size,
    // Number of elements in the right subtree, not counting this node.
    right_count: Size,
}

/// Which child of a node a descent went through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// Returns true if a subtree with the given child counts violates weight balance:
/// `max(left, right) > 2 * min(left, right) + 1`.
#[inline]
pub(crate) const fn is_unbalanced(left: usize, right: usize) -> bool {
    let (light, heavy) = if left < right {
        (left, right)
    } else {
        (right, left)
    };
    heavy > WEIGHT_FACTOR * light + WEIGHT_SLACK
}

impl<T> Node<T> {
    /// Creates a leaf holding `value`.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
            left_count: Size::ZERO,
            right_count: Size::ZERO,
        }
    }

    /// Creates a node over already-built children of the given sizes.
    pub(crate) const fn with_children(
        value: T,
        left: Option<Handle>,
        left_count: usize,
        right: Option<Handle>,
        right_count: usize,
    ) -> Self {
        Self {
            value,
            left,
            right,
            left_count: Size::from_usize(left_count),
            right_count: Size::from_usize(right_count),
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value, returning the previous one.
    pub(crate) fn replace_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) const fn left_count(&self) -> usize {
        self.left_count.to_usize()
    }

    #[inline]
    pub(crate) const fn right_count(&self) -> usize {
        self.right_count.to_usize()
    }

    /// Number of elements in the subtree rooted at this node, including itself.
    #[inline]
    pub(crate) const fn subtree_len(&self) -> usize {
        self.left_count() + self.right_count() + 1
    }

    /// Records that the subtree on `side` grew by one element.
    pub(crate) fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left_count = self.left_count.increment(),
            Side::Right => self.right_count = self.right_count.increment(),
        }
    }

    /// Records that the subtree on `side` shrank by one element.
    pub(crate) fn decrement(&mut self, side: Side) {
        match side {
            Side::Left => self.left_count = self.left_count.decrement(),
            Side::Right => self.right_count = self.right_count.decrement(),
        }
    }

    /// Returns true if this node's children violate the weight-balance predicate.
    #[inline]
    pub(crate) const fn is_unbalanced(&self) -> bool {
        is_unbalanced(self.left_count(), self.right_count())
    }

    /// Compares a search key against this node's value.
    #[inline]
    pub(crate) fn compare<Q>(&self, key: &Q) -> Ordering
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        key.cmp(self.value.borrow())
    }

    /// Returns the side a search for `key` continues on, or `None` when `key` matches.
    #[inline]
    pub(crate) fn direction<Q>(&self, key: &Q) -> Option<Side>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        match self.compare(key) {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => None,
        }
    }
}
