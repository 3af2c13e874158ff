//! Weight-balanced order-statistic binary search tree set for Rust.
//!
//! This crate provides [`WBTreeSet`], an ordered set in the spirit of the standard
//! library's `BTreeSet` with additional O(log n) order-statistic and counting operations:
//!
//! - [`get_ith`](WBTreeSet::get_ith) - Get the element at a given (one-based) sorted position
//! - [`position_of`](WBTreeSet::position_of) - Get the (one-based) sorted position of a value
//! - [`num_geq`](WBTreeSet::num_geq) / [`num_leq`](WBTreeSet::num_leq) /
//!   [`num_range`](WBTreeSet::num_range) - Count elements in a tail or closed range
//! - [`extract_range`](WBTreeSet::extract_range) - Collect a closed range in O(log n + k)
//! - Indexing by [`Rank`] - e.g., `set[Rank(1)]` for the smallest element
//!
//! # Example
//!
//! ```
//! use wabi_bst::{Rank, WBTreeSet};
//!
//! let mut scores = WBTreeSet::new();
//! for score in [85, 100, 92, 71] {
//!     scores.insert(score);
//! }
//!
//! assert!(scores.contains(&92));
//! assert_eq!(scores.len(), 4);
//!
//! // Order-statistic operations (O(log n)), ranks start at 1.
//! assert_eq!(scores.get_ith(2), Some(&85));
//! assert_eq!(scores.position_of(&100), Some(4));
//! assert_eq!(scores[Rank(1)], 71);
//!
//! // Counting and range operations.
//! assert_eq!(scores.num_geq(&90), 2);
//! assert_eq!(scores.num_range(&80, &95), 2);
//! assert_eq!(scores.extract_range(&80, &95), vec![85, 92]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **O(log n) rank operations** - Efficient order-statistic queries via subtree size augmentation
//! - **Rebuild-based balancing** - No rotations; unbalanced subtrees are flattened and rebuilt
//!
//! # Implementation
//!
//! The set is a binary search tree whose nodes cache the number of elements in their left and
//! right subtrees. After an insertion, any node whose children differ in weight by more than
//! `max(l, r) > 2 * min(l, r) + 1` causes the offending subtree (or the whole tree) to be
//! flattened and rebuilt perfectly balanced. Removal does **not** rebalance, so a long run of
//! removals can leave the tree skewed until the next insertion.
//!
//! Nodes live in an arena and are addressed by compact handles, so rebuilding a subtree reuses
//! the slots it just released.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod wbtree_set;

pub use error::{Error, Result};
pub use order_statistic::Rank;
pub use wbtree_set::WBTreeSet;
