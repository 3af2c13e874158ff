use alloc::vec::Vec;
use log::trace;

use super::handle::Handle;
use super::node::Node;
use super::raw_wbtree::RawWBTree;

impl<T> RawWBTree<T> {
    /// Builds a tree from values that are already strictly ascending.
    ///
    /// The caller is responsible for the ordering precondition.
    pub(crate) fn from_sorted(values: Vec<T>) -> Self {
        trace!("building tree from {} sorted values", values.len());
        let mut tree = Self::with_capacity(values.len());
        tree.root = tree.build(values);
        tree
    }

    /// Releases every node of `subtree` and replaces it with a perfectly balanced subtree
    /// holding the same values. Returns the new subtree root.
    pub(super) fn rebuild(&mut self, subtree: Option<Handle>) -> Option<Handle> {
        let mut values = Vec::with_capacity(self.subtree_len(subtree));
        self.drain_subtree(subtree, &mut values);
        self.build(values)
    }

    /// Moves the values of `subtree` into `out` in order, freeing each node.
    pub(super) fn drain_subtree(&mut self, subtree: Option<Handle>, out: &mut Vec<T>) {
        let Some(handle) = subtree else {
            return;
        };
        let node = self.nodes.take(handle);
        let right = node.right();
        self.drain_subtree(node.left(), out);
        out.push(node.into_value());
        self.drain_subtree(right, out);
    }

    /// Allocates a weight-balanced subtree over `values`, which must be in ascending order.
    pub(super) fn build(&mut self, values: Vec<T>) -> Option<Handle> {
        let len = values.len();
        let mut values = values.into_iter();
        let root = self.build_balanced(len, &mut values);
        debug_assert!(values.next().is_none(), "`build()` - values left over after building");
        root
    }

    // Equivalent to taking the middle of [low, high] as `(low + high) / 2`: the left subtree
    // gets `(len - 1) / 2` values and the right subtree the rest. Building left first lets the
    // values be consumed in order.
    fn build_balanced<I>(&mut self, len: usize, values: &mut I) -> Option<Handle>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return None;
        }
        let left_len = (len - 1) / 2;
        let right_len = len - 1 - left_len;

        let left = self.build_balanced(left_len, values);
        let value = values.next().expect("`build_balanced()` - fewer values than `len`");
        let right = self.build_balanced(right_len, values);

        Some(self.nodes.alloc(Node::with_children(value, left, left_len, right, right_len)))
    }
}
