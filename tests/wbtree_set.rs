use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};
use wabi_bst::wbtree_set;
use wabi_bst::{Error, Rank, WBTreeSet};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Routes the crate's rebuild logging through the test harness.
fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Generates values in a range narrow enough to produce collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -3_000i64..3_000i64
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum SetOp {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    Min,
    Max,
}

fn set_op_strategy() -> impl Strategy<Value = SetOp> {
    prop_oneof![
        5 => value_strategy().prop_map(SetOp::Insert),
        3 => value_strategy().prop_map(SetOp::Remove),
        2 => value_strategy().prop_map(SetOp::Contains),
        1 => Just(SetOp::Min),
        1 => Just(SetOp::Max),
    ]
}

// Linear-scan reference answers over the sorted contents.

fn num_geq_slow(sorted: &[i64], key: i64) -> usize {
    sorted.iter().filter(|&&v| v >= key).count()
}

fn num_leq_slow(sorted: &[i64], key: i64) -> usize {
    sorted.iter().filter(|&&v| v <= key).count()
}

fn range_slow(sorted: &[i64], min: i64, max: i64) -> Vec<i64> {
    sorted.iter().copied().filter(|&v| min <= v && v <= max).collect()
}

// ─── Core CRUD operations ────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both WBTreeSet and BTreeSet and
    /// asserts identical results at every step.
    #[test]
    fn set_ops_match_btreeset(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut wb_set: WBTreeSet<i64> = WBTreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    prop_assert_eq!(wb_set.insert(*v), bt_set.insert(*v), "insert({})", v);
                }
                SetOp::Remove(v) => {
                    prop_assert_eq!(wb_set.remove(v), bt_set.remove(v), "remove({})", v);
                }
                SetOp::Contains(v) => {
                    prop_assert_eq!(wb_set.contains(v), bt_set.contains(v), "contains({})", v);
                }
                SetOp::Min => {
                    prop_assert_eq!(wb_set.min(), bt_set.first(), "min()");
                }
                SetOp::Max => {
                    prop_assert_eq!(wb_set.max(), bt_set.last(), "max()");
                }
            }
            prop_assert_eq!(wb_set.len(), bt_set.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(wb_set.is_empty(), bt_set.is_empty(), "is_empty mismatch after {:?}", op);
        }

        let wb_items: Vec<_> = wb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(wb_items, bt_items);
    }

    /// Tests that iteration order matches BTreeSet after random insertions.
    #[test]
    fn iter_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let wb_set: WBTreeSet<i64> = values.iter().copied().collect();
        let bt_set: BTreeSet<i64> = values.iter().copied().collect();

        let wb_items: Vec<_> = wb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(&wb_items, &bt_items, "iter() mismatch");
        prop_assert_eq!(&wb_set.to_vec(), &bt_items, "to_vec() mismatch");
        prop_assert_eq!(wb_set.iter().len(), bt_set.len());

        let wb_into: Vec<_> = wb_set.clone().into_iter().collect();
        prop_assert_eq!(&wb_into, &bt_items, "into_iter() mismatch");

        let wb_rev: Vec<_> = wb_set.into_iter().rev().collect();
        let bt_rev: Vec<_> = bt_set.into_iter().rev().collect();
        prop_assert_eq!(&wb_rev, &bt_rev, "into_iter().rev() mismatch");
    }

    /// Tests get and take match BTreeSet.
    #[test]
    fn get_and_take_match_btreeset(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 200),
    ) {
        let mut wb_set: WBTreeSet<i64> = values.iter().copied().collect();
        let mut bt_set: BTreeSet<i64> = values.iter().copied().collect();

        for probe in &probes {
            prop_assert_eq!(wb_set.get(probe), bt_set.get(probe), "get({})", probe);
            prop_assert_eq!(wb_set.take(probe), bt_set.take(probe), "take({})", probe);
        }
        prop_assert_eq!(wb_set.len(), bt_set.len());
    }

    /// Tests that the height stays logarithmic under insert-only workloads.
    #[test]
    fn insert_only_height_is_logarithmic(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let wb_set: WBTreeSet<i64> = values.iter().copied().collect();
        let height = wb_set.height().expect("set is non-empty");

        // Each child holds at most about two thirds of its parent, giving height <= log_1.5(n).
        let bound = (wb_set.len() as f64).log(1.5).floor() as usize + 1;
        prop_assert!(height <= bound, "height {} exceeds {} for {} elements", height, bound, wb_set.len());
    }
}

// ─── Order statistics and counting ───────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests get_ith and Index<Rank> against the sorted contents.
    #[test]
    fn get_ith_matches_sorted_vec(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let wb_set: WBTreeSet<i64> = values.iter().copied().collect();
        let sorted: Vec<i64> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        prop_assert_eq!(wb_set.get_ith(0), None);
        for (index, value) in sorted.iter().enumerate() {
            prop_assert_eq!(wb_set.get_ith(index + 1), Some(value), "get_ith({})", index + 1);
            prop_assert_eq!(&wb_set[Rank(index + 1)], value);
        }
        prop_assert_eq!(wb_set.get_ith(sorted.len() + 1), None);
    }

    /// Tests that position_of and get_ith are inverse of each other.
    #[test]
    fn position_of_get_ith_roundtrip(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        probes in proptest::collection::vec(value_strategy(), 200),
    ) {
        let wb_set: WBTreeSet<i64> = values.iter().copied().collect();

        for position in 1..=wb_set.len() {
            let value = wb_set.get_ith(position).expect("position is in bounds");
            prop_assert_eq!(wb_set.position_of(value), Some(position));
        }
        for probe in &probes {
            match wb_set.position_of(probe) {
                Some(position) => {
                    prop_assert_eq!(wb_set.get_ith(position), Some(probe));
                }
                None => {
                    prop_assert!(!wb_set.contains(probe));
                }
            }
        }
    }

    /// Tests the counting and range queries against linear scans, including probes that are
    /// not in the set.
    #[test]
    fn counting_matches_linear_scan(
        values in proptest::collection::vec(value_strategy(), TEST_SIZE),
        a in -3_100i64..3_100i64,
        b in -3_100i64..3_100i64,
    ) {
        let wb_set: WBTreeSet<i64> = values.iter().copied().collect();
        let sorted = wb_set.to_vec();
        let (min, max) = if a <= b { (a, b) } else { (b, a) };

        prop_assert_eq!(wb_set.num_geq(&a), num_geq_slow(&sorted, a), "num_geq({})", a);
        prop_assert_eq!(wb_set.num_leq(&a), num_leq_slow(&sorted, a), "num_leq({})", a);

        let expected = range_slow(&sorted, min, max);
        prop_assert_eq!(wb_set.num_range(&min, &max), expected.len(), "num_range({}, {})", min, max);
        prop_assert_eq!(wb_set.extract_range(&min, &max), expected, "extract_range({}, {})", min, max);
    }

    /// Tests that order statistics stay correct while removals leave the tree skewed.
    #[test]
    fn order_stats_after_mutations(ops in proptest::collection::vec(set_op_strategy(), TEST_SIZE)) {
        let mut wb_set: WBTreeSet<i64> = WBTreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();

        for op in &ops {
            match op {
                SetOp::Insert(v) => {
                    wb_set.insert(*v);
                    bt_set.insert(*v);
                }
                SetOp::Remove(v) => {
                    wb_set.remove(v);
                    bt_set.remove(v);
                }
                SetOp::Contains(_) | SetOp::Min | SetOp::Max => {}
            }
        }

        let sorted: Vec<i64> = bt_set.into_iter().collect();
        for (index, value) in sorted.iter().enumerate() {
            prop_assert_eq!(wb_set.get_ith(index + 1), Some(value));
            prop_assert_eq!(wb_set.position_of(value), Some(index + 1));
            prop_assert_eq!(wb_set.num_leq(value), index + 1);
            prop_assert_eq!(wb_set.num_geq(value), sorted.len() - index);
        }
    }
}

// ─── Construction ────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Tests that from_sorted produces a set of minimal height holding exactly its input.
    #[test]
    fn from_sorted_builds_minimal_height(values in proptest::collection::btree_set(value_strategy(), 1..TEST_SIZE)) {
        let sorted: Vec<i64> = values.into_iter().collect();
        let wb_set = WBTreeSet::from_sorted(sorted.clone());

        prop_assert_eq!(wb_set.len(), sorted.len());
        prop_assert_eq!(wb_set.to_vec(), sorted.clone());
        let minimal = (usize::BITS - sorted.len().leading_zeros() - 1) as usize;
        prop_assert_eq!(wb_set.height(), Some(minimal));
    }

    /// Tests that try_from_sorted rejects any input with a descent or a duplicate.
    #[test]
    fn try_from_sorted_rejects_unsorted(values in proptest::collection::vec(value_strategy(), 2..200)) {
        let first_bad = values.windows(2).position(|pair| pair[0] >= pair[1]).map(|offset| offset + 1);
        match first_bad {
            Some(index) => {
                prop_assert_eq!(
                    WBTreeSet::try_from_sorted(values).map(|set| set.len()),
                    Err(Error::NotStrictlyAscending { index })
                );
            }
            None => {
                prop_assert!(WBTreeSet::try_from_sorted(values).is_ok());
            }
        }
    }

    /// Tests that clone produces an equal, independent set.
    #[test]
    fn clone_produces_equal_set(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let wb_set: WBTreeSet<i64> = values.iter().copied().collect();
        let mut cloned = wb_set.clone();
        prop_assert_eq!(&cloned, &wb_set);

        if let Some(&min) = wb_set.min() {
            cloned.remove(&min);
            prop_assert_ne!(&cloned, &wb_set);
            prop_assert!(wb_set.contains(&min));
        }
    }

    /// Tests that extend produces the same set as BTreeSet.
    #[test]
    fn extend_matches_btreeset(
        initial in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
        extra in proptest::collection::vec(value_strategy(), TEST_SIZE / 2),
    ) {
        let mut wb_set: WBTreeSet<i64> = initial.iter().copied().collect();
        let mut bt_set: BTreeSet<i64> = initial.iter().copied().collect();
        wb_set.extend(extra.iter());
        bt_set.extend(extra.iter());

        let wb_items: Vec<_> = wb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        prop_assert_eq!(wb_items, bt_items);
    }
}

// ─── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn seven_value_scenario() {
    init_logging();
    let set = WBTreeSet::from_sorted((1..=7).collect());

    assert_eq!(set.height(), Some(2));
    assert_eq!(set.get_ith(4), Some(&4));
    assert_eq!(set.num_geq(&5), 3);
    assert_eq!(set.num_leq(&5), 5);
    assert_eq!(set.num_range(&2, &5), 4);
    assert_eq!(set.extract_range(&2, &5), vec![2, 3, 4, 5]);
}

#[test]
fn mixed_inserts_then_remove_scenario() {
    init_logging();
    let mut set = WBTreeSet::new();
    for value in [10, 20, 5, 15, 25, 1, 30] {
        assert!(set.insert(value));
    }
    assert_eq!(set.position_of(&20), Some(5));

    assert!(set.remove(&15));
    assert_eq!(set.len(), 6);
    assert!(!set.contains(&15));
    assert_eq!(set.to_vec(), vec![1, 5, 10, 20, 25, 30]);
    assert_eq!(set.position_of(&20), Some(4));
}

#[test]
fn ascending_inserts_stay_shallow() {
    init_logging();
    let mut set = WBTreeSet::new();
    for value in 1..=1_000 {
        assert!(set.insert(value));
    }

    assert_eq!(set.len(), 1_000);
    assert!(!set.insert(500));
    assert_eq!(set.len(), 1_000);
    // log_1.5(1000) < 18
    assert!(set.height().expect("non-empty") <= 18);
    assert_eq!(set.min(), Some(&1));
    assert_eq!(set.max(), Some(&1_000));
    assert_eq!(set.position_of(&500), Some(500));
}

#[test]
fn removals_keep_answers_correct() {
    init_logging();
    let mut set: WBTreeSet<i32> = (1..=100).collect();
    for value in (1..=100).filter(|v| v % 3 != 0) {
        assert!(set.remove(&value));
    }

    let expected: Vec<i32> = (1..=100).filter(|v| v % 3 == 0).collect();
    assert_eq!(set.to_vec(), expected);
    assert_eq!(set.get_ith(1), Some(&3));
    assert_eq!(set.position_of(&99), Some(33));
    assert_eq!(set.num_range(&10, &20), 3);
    assert_eq!(set.extract_range(&10, &20), vec![12, 15, 18]);

    // A removal of an absent value changes nothing.
    assert!(!set.remove(&1));
    assert_eq!(set.len(), 33);
}

#[test]
fn empty_set_accessors() {
    let set: WBTreeSet<i64> = WBTreeSet::default();
    assert_eq!(set.len(), 0);
    assert!(set.is_empty());
    assert_eq!(set.height(), None);
    assert_eq!(set.min(), None);
    assert_eq!(set.max(), None);
    assert_eq!(set.get_ith(1), None);
    assert_eq!(set.num_geq(&0), 0);
    assert_eq!(set.num_range(&0, &0), 0);
    assert!(set.extract_range(&-1, &1).is_empty());
    assert_eq!(set.iter().next(), None);
}

#[test]
fn clear_then_reuse() {
    let mut set: WBTreeSet<i64> = (0..500).collect();
    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.height(), None);

    set.extend([3, 1, 2]);
    assert_eq!(set.to_vec(), vec![1, 2, 3]);
}

#[test]
fn default_iterators_are_empty() {
    let iter: wbtree_set::Iter<'_, i64> = wbtree_set::Iter::default();
    assert_eq!(iter.len(), 0);
    let into_iter: wbtree_set::IntoIter<i64> = wbtree_set::IntoIter::default();
    assert_eq!(into_iter.count(), 0);
}

// ─── Panic tests ──────────────────────────────────────────────────────────────

/// Tests that num_range rejects reversed bounds like BTreeSet::range.
#[test]
#[should_panic(expected = "range start is greater than range end")]
fn num_range_reversed_bounds_panics() {
    let set: WBTreeSet<i32> = [1, 2, 3].into_iter().collect();
    let _ = set.num_range(&5, &3);
}

/// Tests that extract_range rejects reversed bounds.
#[test]
#[should_panic(expected = "range start is greater than range end")]
fn extract_range_reversed_bounds_panics() {
    let set: WBTreeSet<i32> = [1, 2, 3].into_iter().collect();
    let _ = set.extract_range(&5, &3);
}

/// Tests that from_sorted rejects duplicates.
#[test]
#[should_panic(expected = "not strictly ascending at index 2")]
fn from_sorted_duplicate_panics() {
    let _ = WBTreeSet::from_sorted(vec![1, 2, 2, 3]);
}

/// Tests that Index<Rank> panics past the last element.
#[test]
#[should_panic(expected = "index out of bounds")]
fn index_rank_out_of_bounds_panics() {
    let set: WBTreeSet<i32> = [1, 2, 3].into_iter().collect();
    let _value = set[Rank(4)];
}

/// Tests that Index<Rank> panics on an empty set.
#[test]
#[should_panic(expected = "index out of bounds")]
fn index_rank_empty_set_panics() {
    let set: WBTreeSet<i32> = WBTreeSet::new();
    let _value = set[Rank(1)];
}

// ─── Deterministic Insertion Pattern Tests ────────────────────────────────────

/// Helper function to generate deterministic pseudo-random values using LCG.
fn random_values_deterministic(n: usize) -> Vec<i64> {
    let mut values = Vec::with_capacity(n);
    let mut x: u64 = 12345; // Fixed seed for reproducibility
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        values.push((x >> 33) as i64);
    }
    values
}

mod insertion_pattern_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const N: usize = 10_000;

    fn check_against_btreeset(values: &[i64]) {
        init_logging();
        let mut wb_set: WBTreeSet<i64> = WBTreeSet::new();
        let mut bt_set: BTreeSet<i64> = BTreeSet::new();
        for &v in values {
            assert_eq!(wb_set.insert(v), bt_set.insert(v));
        }

        assert_eq!(wb_set.len(), bt_set.len());
        let wb_items: Vec<_> = wb_set.iter().copied().collect();
        let bt_items: Vec<_> = bt_set.iter().copied().collect();
        assert_eq!(wb_items, bt_items);
        assert_eq!(wb_set.min(), bt_set.first());
        assert_eq!(wb_set.max(), bt_set.last());

        for &v in values.iter().step_by(7) {
            assert_eq!(wb_set.remove(&v), bt_set.remove(&v));
        }
        for (index, value) in bt_set.iter().enumerate() {
            assert_eq!(wb_set.get_ith(index + 1), Some(value));
        }
    }

    /// Tests ordered (ascending) inserts match BTreeSet.
    #[test]
    fn ordered_inserts_match_btreeset() {
        let values: Vec<i64> = (0..N as i64).collect();
        check_against_btreeset(&values);
    }

    /// Tests reverse-ordered (descending) inserts match BTreeSet.
    #[test]
    fn reverse_ordered_inserts_match_btreeset() {
        let values: Vec<i64> = (0..N as i64).rev().collect();
        check_against_btreeset(&values);
    }

    /// Tests random inserts match BTreeSet.
    #[test]
    fn random_inserts_match_btreeset() {
        check_against_btreeset(&random_values_deterministic(N));
    }

    /// Tests zig-zag inserts, which alternate between the two ends of the key space.
    #[test]
    fn alternating_inserts_match_btreeset() {
        let values: Vec<i64> = (0..N as i64).map(|i| if i % 2 == 0 { i } else { -i }).collect();
        check_against_btreeset(&values);
    }
}
