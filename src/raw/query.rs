//! Order-statistic and range queries over the cached subtree counts.

use core::borrow::Borrow;

use alloc::vec::Vec;

use super::handle::Handle;
use super::node::Side;
use super::raw_wbtree::RawWBTree;

impl<T> RawWBTree<T> {
    /// Returns the value at one-based `position` in sorted order.
    pub(crate) fn get_ith(&self, position: usize) -> Option<&T> {
        if position == 0 || position > self.len() {
            return None;
        }

        let mut current = self.root?;
        let mut rank = self.node(current).left_count() + 1;

        loop {
            let node = self.node(current);
            let side = match rank.cmp(&position) {
                core::cmp::Ordering::Equal => return Some(node.value()),
                core::cmp::Ordering::Greater => Side::Left,
                core::cmp::Ordering::Less => Side::Right,
            };
            // The bounds check above guarantees the child exists while the counts are consistent.
            let child = node.child(side)?;
            rank = self.step_rank(rank, side, child);
            current = child;
        }
    }

    /// Returns the one-based position of `key` in sorted order.
    pub(crate) fn position_of<Q>(&self, key: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root?;
        let mut rank = self.node(current).left_count() + 1;

        loop {
            let node = self.node(current);
            let Some(side) = node.direction(key) else {
                return Some(rank);
            };
            let child = node.child(side)?;
            rank = self.step_rank(rank, side, child);
            current = child;
        }
    }

    // Moving into a left child loses that child's right subtree and the child itself from
    // the rank; moving right gains the child's left subtree and the child.
    #[inline]
    fn step_rank(&self, rank: usize, side: Side, child: Handle) -> usize {
        let child = self.node(child);
        match side {
            Side::Left => rank - (child.right_count() + 1),
            Side::Right => rank + child.left_count() + 1,
        }
    }

    /// Counts the values greater than or equal to `key`.
    pub(crate) fn num_geq<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut total = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            if node.compare(key).is_le() {
                total += node.right_count() + 1;
                current = node.left();
            } else {
                current = node.right();
            }
        }
        total
    }

    /// Counts the values less than or equal to `key`.
    pub(crate) fn num_leq<Q>(&self, key: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut total = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            if node.compare(key).is_ge() {
                total += node.left_count() + 1;
                current = node.right();
            } else {
                current = node.left();
            }
        }
        total
    }

    /// Counts the values in `[min, max]`. Requires `min <= max`.
    pub(crate) fn num_range<Q>(&self, min: &Q, max: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        // The two tails overlap in exactly [min, max] and together cover the tree once more.
        self.num_geq(min) + self.num_leq(max) - self.len()
    }

    /// Collects references to the values in `[min, max]` in ascending order.
    ///
    /// Subtrees entirely outside the bounds are never entered.
    pub(crate) fn extract_range<'a, Q>(&'a self, min: &Q, max: &Q) -> Vec<&'a T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut out = Vec::new();
        self.extract_at(self.root, min, max, &mut out);
        out
    }

    fn extract_at<'a, Q>(&'a self, subtree: Option<Handle>, min: &Q, max: &Q, out: &mut Vec<&'a T>)
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = subtree else {
            return;
        };
        let node = self.node(handle);
        let from_min = node.compare(min);
        let from_max = node.compare(max);

        if from_min.is_lt() {
            self.extract_at(node.left(), min, max, out);
        }
        if from_min.is_le() && from_max.is_ge() {
            out.push(node.value());
        }
        if from_max.is_gt() {
            self.extract_at(node.right(), min, max, out);
        }
    }
}
