use core::borrow::Borrow;

use alloc::vec::Vec;
use log::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// The core weight-balanced tree backing `WBTreeSet`.
#[derive(Clone)]
pub(crate) struct RawWBTree<T> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
}

impl<T> RawWBTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Returns the number of node slots allocated up front.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of elements, read from the root's cached counts.
    pub(crate) fn len(&self) -> usize {
        let len = self.subtree_len(self.root);
        debug_assert_eq!(len, self.nodes.len(), "cached root counts disagree with the arena");
        len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Size of an optional subtree; an absent subtree is empty.
    #[inline]
    pub(crate) fn subtree_len(&self, subtree: Option<Handle>) -> usize {
        subtree.map_or(0, |handle| self.nodes.get(handle).subtree_len())
    }

    /// Returns true if the optional subtree violates weight balance at its root.
    #[inline]
    pub(crate) fn is_unbalanced_at(&self, subtree: Option<Handle>) -> bool {
        subtree.is_some_and(|handle| self.nodes.get(handle).is_unbalanced())
    }

    /// Height of the tree: `None` when empty, `Some(0)` for a single node.
    pub(crate) fn height(&self) -> Option<usize> {
        self.height_of(self.root)
    }

    fn height_of(&self, subtree: Option<Handle>) -> Option<usize> {
        let node = self.nodes.get(subtree?);
        let left = self.height_of(node.left());
        let right = self.height_of(node.right());
        Some(left.max(right).map_or(0, |height| height + 1))
    }

    /// Returns the smallest value.
    pub(crate) fn first(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(left) = self.nodes.get(current).left() {
            current = left;
        }
        Some(self.nodes.get(current).value())
    }

    /// Returns the largest value.
    pub(crate) fn last(&self) -> Option<&T> {
        let mut current = self.root?;
        while let Some(right) = self.nodes.get(current).right() {
            current = right;
        }
        Some(self.nodes.get(current).value())
    }

    /// Moves every value out of the tree in ascending order, leaving it empty.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        let root = self.root.take();
        self.drain_subtree(root, &mut values);
        self.nodes.clear();
        values
    }

    /// Searches for a value and returns the handle of the node holding it.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            match node.direction(key) {
                Some(side) => current = node.child(side),
                None => return Some(handle),
            }
        }
        None
    }

    /// Returns the stored value equal to `key`.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.nodes.get(handle).value())
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }
}

impl<T: Ord> RawWBTree<T> {
    /// Inserts a value. Returns false, leaving the tree unchanged, if an equal value is present.
    ///
    /// After the insertion unwinds, the whole tree is rebuilt if the root is out of balance.
    /// Otherwise the children of the shallowest node whose path child went out of balance are
    /// re-checked, and each one still out of balance is rebuilt in place.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let mut anchor = None;
        let (root, inserted) = self.insert_at(self.root, value, &mut anchor);
        self.root = Some(root);

        if self.nodes.get(root).is_unbalanced() {
            debug!("root out of balance, rebuilding all {} elements", self.nodes.get(root).subtree_len());
            self.root = self.rebuild(Some(root));
        } else if let Some(anchor) = anchor {
            for side in [Side::Left, Side::Right] {
                let child = self.nodes.get(anchor).child(side);
                if self.is_unbalanced_at(child) {
                    trace!("rebuilding {side:?} subtree of {} elements below anchor", self.subtree_len(child));
                    let rebuilt = self.rebuild(child);
                    self.nodes.get_mut(anchor).set_child(side, rebuilt);
                }
            }
        }

        inserted
    }

    /// Recursive insertion below `slot`. Returns the subtree's root and whether a node was added.
    ///
    /// Every level whose path child is out of balance overwrites `anchor`, so the shallowest
    /// such level wins.
    fn insert_at(&mut self, slot: Option<Handle>, value: T, anchor: &mut Option<Handle>) -> (Handle, bool) {
        let Some(handle) = slot else {
            return (self.nodes.alloc(Node::leaf(value)), true);
        };
        let Some(side) = self.nodes.get(handle).direction(&value) else {
            return (handle, false);
        };

        let child = self.nodes.get(handle).child(side);
        let (child, inserted) = self.insert_at(child, value, anchor);

        let node = self.nodes.get_mut(handle);
        node.set_child(side, Some(child));
        if inserted {
            node.increment(side);
        }
        if self.nodes.get(child).is_unbalanced() {
            *anchor = Some(handle);
        }

        (handle, inserted)
    }

    /// Removes the value equal to `key` and returns it. Never rebalances.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;
        removed
    }

    fn remove_at<Q>(&mut self, slot: Option<Handle>, key: &Q) -> (Option<Handle>, Option<T>)
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = slot else {
            return (None, None);
        };

        if let Some(side) = self.nodes.get(handle).direction(key) {
            let child = self.nodes.get(handle).child(side);
            let (child, removed) = self.remove_at(child, key);
            let node = self.nodes.get_mut(handle);
            node.set_child(side, child);
            if removed.is_some() {
                node.decrement(side);
            }
            return (Some(handle), removed);
        }

        let node = self.nodes.get(handle);
        match (node.left(), node.right()) {
            (None, only) | (only, None) => {
                let removed = self.nodes.take(handle).into_value();
                (only, Some(removed))
            }
            (Some(_), Some(right)) => {
                // Promote the in-order successor into this node.
                let (right, successor) = self.detach_min(right);
                let node = self.nodes.get_mut(handle);
                node.set_child(Side::Right, right);
                node.decrement(Side::Right);
                let removed = node.replace_value(successor);
                (Some(handle), Some(removed))
            }
        }
    }

    /// Unlinks the leftmost node of the subtree at `handle`, returning the new subtree root
    /// and the detached value.
    fn detach_min(&mut self, handle: Handle) -> (Option<Handle>, T) {
        let node = self.nodes.get(handle);
        if let Some(left) = node.left() {
            let (left, min) = self.detach_min(left);
            let node = self.nodes.get_mut(handle);
            node.set_child(Side::Left, left);
            node.decrement(Side::Left);
            (Some(handle), min)
        } else {
            let right = node.right();
            (right, self.nodes.take(handle).into_value())
        }
    }
}
