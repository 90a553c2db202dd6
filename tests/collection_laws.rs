#![cfg(feature = "collection")]
//! Property-based tests for the collection operations.
//!
//! ## Partition
//! - `filter(c, p)` and `reject(c, p)` together hold every element exactly once
//!
//! ## Permutation
//! - `shuffle_with(c, rng)` is a reordering of `c`
//!
//! ## Idempotence
//! - `uniq(uniq(c)) == uniq(c)`
//! - the sorted and unsorted `uniq` paths agree on sorted input
//!
//! ## Fold agreement
//! - `reduce_from` agrees with `Iterator::fold`
//! - `reduce` agrees with `Iterator::reduce`

use foldkit::collection::{
    Nested, difference, every, filter, flatten, flatten_deep, intersection, map, reduce,
    reduce_from, reject, shuffle_with, some, sort_by, uniq,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// =============================================================================
// Partition
// =============================================================================

proptest! {
    #[test]
    fn prop_filter_reject_partition(values in prop::collection::vec(any::<i16>(), 0..64), pivot in any::<i16>()) {
        let kept = filter(&values, |value| *value < pivot);
        let dropped = reject(&values, |value| *value < pivot);

        prop_assert_eq!(kept.len() + dropped.len(), values.len());

        let mut rejoined = kept.clone();
        rejoined.extend(dropped.iter().copied());
        rejoined.sort_unstable();
        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert_eq!(rejoined, sorted);
    }

    #[test]
    fn prop_every_is_negated_some(values in prop::collection::vec(any::<u8>(), 0..32)) {
        let all_even = every(&values, |value| value % 2 == 0);
        let any_odd = some(&values, |value| value % 2 == 1);
        prop_assert_eq!(all_even, !any_odd);
    }
}

// =============================================================================
// Permutation
// =============================================================================

proptest! {
    #[test]
    fn prop_shuffle_is_permutation(values in prop::collection::vec(any::<u32>(), 0..128), seed in any::<u64>()) {
        let shuffled = shuffle_with(&values, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(shuffled.len(), values.len());

        let mut left = shuffled;
        let mut right = values.clone();
        left.sort_unstable();
        right.sort_unstable();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_sort_by_matches_stable_std_sort(values in prop::collection::vec((0u8..4, any::<u16>()), 0..64)) {
        let sorted = sort_by(&values, |pair| pair.0);
        let mut expected = values.clone();
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sorted, expected);
    }
}

// =============================================================================
// Idempotence
// =============================================================================

proptest! {
    #[test]
    fn prop_uniq_idempotent(values in prop::collection::vec(0u8..16, 0..64)) {
        let once = uniq(&values, false);
        prop_assert_eq!(uniq(&once, false), once);
    }

    #[test]
    fn prop_uniq_paths_agree_on_sorted_input(mut values in prop::collection::vec(0u8..16, 0..64)) {
        values.sort_unstable();
        prop_assert_eq!(uniq(&values, true), uniq(&values, false));
    }

    #[test]
    fn prop_intersection_with_self_is_uniq(values in prop::collection::vec(0u8..16, 0..64)) {
        prop_assert_eq!(intersection(&values, &[values.as_slice()]), uniq(&values, false));
    }

    #[test]
    fn prop_difference_with_self_is_empty(values in prop::collection::vec(any::<i8>(), 0..64)) {
        prop_assert!(difference(&values, &[values.as_slice()]).is_empty());
    }

    #[test]
    fn prop_flatten_of_flat_input_is_identity(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let nested: Vec<Nested<i32>> = values.iter().copied().map(Nested::Item).collect();
        prop_assert_eq!(flatten(&nested), nested.clone());
        prop_assert_eq!(flatten_deep(&nested), values);
    }
}

// =============================================================================
// Fold agreement
// =============================================================================

proptest! {
    #[test]
    fn prop_reduce_from_matches_fold(values in prop::collection::vec(any::<i32>(), 0..64), seed in any::<i32>()) {
        let expected = values.iter().fold(seed, |sum, value| sum.wrapping_add(*value));
        prop_assert_eq!(reduce_from(&values, seed, |sum, value| sum.wrapping_add(*value)), expected);
    }

    #[test]
    fn prop_reduce_matches_iterator_reduce(values in prop::collection::vec(any::<i32>(), 1..64)) {
        let expected = values.iter().copied().reduce(i32::wrapping_sub);
        prop_assert_eq!(reduce(&values, |accumulator, value| accumulator.wrapping_sub(*value)).ok(), expected);
    }

    #[test]
    fn prop_map_preserves_length(values in prop::collection::vec(any::<i64>(), 0..64)) {
        prop_assert_eq!(map(&values, |value| value.count_ones()).len(), values.len());
    }
}
