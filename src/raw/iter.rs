use core::iter::FusedIterator;

use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_wbtree::RawWBTree;

/// Stack of pending ancestors; weight balance keeps this shallow for any realistic size.
type Spine = SmallVec<[Handle; 32]>;

/// In-order traversal over a tree, holding only the left spine of the unvisited part.
pub(crate) struct InOrder<'a, T> {
    tree: Option<&'a RawWBTree<T>>,
    spine: Spine,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(tree: &'a RawWBTree<T>) -> Self {
        let mut iter = Self {
            tree: Some(tree),
            spine: SmallVec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Self {
            tree: None,
            spine: SmallVec::new(),
            remaining: 0,
        }
    }

    fn push_left_spine(&mut self, mut current: Option<Handle>) {
        let Some(tree) = self.tree else {
            return;
        };
        while let Some(handle) = current {
            self.spine.push(handle);
            current = tree.node(handle).left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let tree = self.tree?;
        let handle = self.spine.pop()?;
        let node = tree.node(handle);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

impl<T> Clone for InOrder<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            spine: self.spine.clone(),
            remaining: self.remaining,
        }
    }
}
