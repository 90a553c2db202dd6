//! Operations that build a new sequence from a collection.
//!
//! Nothing here mutates its input: every result is a freshly allocated
//! `Vec` (or a borrowed sub-slice for [`first_n`] and [`last_n`]).

use std::collections::HashSet;
use std::hash::Hash;
use std::iter;

use super::iteration::{Collection, each};
use super::reduction::reduce_from;

/// Applies `iterator` to every value, keeping length and order.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |number| number * 10), vec![10, 20, 30]);
/// ```
pub fn map<C, R, F>(collection: &C, mut iterator: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Value) -> R,
{
    reduce_from(
        collection,
        Vec::with_capacity(collection.length()),
        |mut results, value| {
            results.push(iterator(value));
            results
        },
    )
}

/// Returns the first element, if any.
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements, or the whole sequence when it is
/// shorter.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), &[1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), &[1, 2, 3]);
/// ```
#[inline]
pub fn first_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[..count.min(sequence.len())]
}

/// Returns the last element, if any.
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements, or the whole sequence when it is
/// shorter.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), &[2, 3]);
/// assert!(last_n(&[1, 2, 3], 0).is_empty());
/// assert_eq!(last_n(&[1, 2, 3], 9), &[1, 2, 3]);
/// ```
#[inline]
pub fn last_n<T>(sequence: &[T], count: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(count)..]
}

/// Removes duplicate values, keeping the first occurrence of each.
///
/// See [`uniq_by`] for the meaning of `is_sorted`.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2], false), vec![1, 2, 3]);
/// assert_eq!(uniq(&[1, 1, 2, 3, 3], true), vec![1, 2, 3]);
/// ```
pub fn uniq<T>(sequence: &[T], is_sorted: bool) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    deduplicate(sequence, is_sorted, |value| value)
}

/// Removes values whose `key` was already seen, keeping first occurrences
/// in their original order.
///
/// With `is_sorted == false` every key is checked against the set of keys
/// seen so far. With `is_sorted == true` the input must already group equal
/// keys together, and each key is compared only with its immediate
/// predecessor's key: one comparison per element after the first.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::uniq_by;
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq_by(&words, true, |word| word.chars().next());
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
/// ```
pub fn uniq_by<T, K, F>(sequence: &[T], is_sorted: bool, key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&T) -> K,
{
    deduplicate(sequence, is_sorted, key)
}

fn deduplicate<'a, T, K, F>(sequence: &'a [T], is_sorted: bool, mut key: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: FnMut(&'a T) -> K,
{
    let mut kept = Vec::new();
    if is_sorted {
        let mut previous: Option<K> = None;
        each(sequence, |value, _, _| {
            let current = key(value);
            let is_repeat = matches!(&previous, Some(last) if *last == current);
            if !is_repeat {
                kept.push(value.clone());
            }
            previous = Some(current);
        });
    } else {
        let mut seen = HashSet::new();
        each(sequence, |value, _, _| {
            if seen.insert(key(value)) {
                kept.push(value.clone());
            }
        });
    }
    kept
}

/// Returns the values ordered ascending by `criterion`.
///
/// The sort is stable: values with equal criteria keep their input order.
/// `criterion` is evaluated exactly once per value.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::sort_by;
///
/// let people = vec![("moe", 40), ("larry", 50), ("curly", 40)];
/// let by_age = sort_by(&people, |person| person.1);
/// assert_eq!(by_age, vec![("moe", 40), ("curly", 40), ("larry", 50)]);
/// ```
pub fn sort_by<C, K, F>(collection: &C, mut criterion: F) -> Vec<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    K: Ord,
    F: FnMut(&C::Value) -> K,
{
    let mut decorated = Vec::with_capacity(collection.length());
    each(collection, |value, _, _| decorated.push((criterion(value), value)));
    decorated.sort_by(|left, right| left.0.cmp(&right.0));
    decorated
        .into_iter()
        .map(|(_, value)| value.clone())
        .collect()
}

/// Groups the elements at each index across `first` and `rest`.
///
/// The result has one row per index up to the longest input. A sequence
/// that is too short contributes `None` at that position.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::zip;
///
/// let rows = zip(&[1, 2, 3], &[&[10, 20], &[100]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some(1), Some(10), Some(100)],
///         vec![Some(2), Some(20), None],
///         vec![Some(3), None, None],
///     ]
/// );
/// ```
pub fn zip<T: Clone>(first: &[T], rest: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let longest = rest
        .iter()
        .map(|sequence| sequence.len())
        .fold(first.len(), usize::max);
    (0..longest)
        .map(|index| {
            iter::once(first)
                .chain(rest.iter().copied())
                .map(|sequence| sequence.get(index).cloned())
                .collect()
        })
        .collect()
}

/// Pairs the elements of two sequences of possibly different types.
///
/// Like [`zip`], the result runs to the longer length and fills the
/// missing side with `None`.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::zip_pair;
///
/// let pairs = zip_pair(&['a', 'b', 'c', 'd'], &[1, 2, 3]);
/// assert_eq!(
///     pairs,
///     vec![
///         (Some('a'), Some(1)),
///         (Some('b'), Some(2)),
///         (Some('c'), Some(3)),
///         (Some('d'), None),
///     ]
/// );
/// ```
pub fn zip_pair<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    (0..left.len().max(right.len()))
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_map_over_mapping_uses_enumeration_order() {
        let scores = BTreeMap::from([("b", 2), ("a", 1)]);
        assert_eq!(map(&scores, |value| value * 2), vec![2, 4]);
    }

    #[test]
    fn test_first_and_last_on_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(first(&empty), None);
        assert_eq!(last(&empty), None);
        assert!(first_n(&empty, 3).is_empty());
        assert!(last_n(&empty, 3).is_empty());
    }

    #[test]
    fn test_uniq_empty() {
        let empty: Vec<i32> = Vec::new();
        assert!(uniq(&empty, false).is_empty());
        assert!(uniq(&empty, true).is_empty());
    }

    #[test]
    fn test_uniq_sorted_keeps_separated_runs() {
        // Equal values that are not adjacent are distinct runs.
        assert_eq!(uniq(&[1, 1, 2, 1], true), vec![1, 2, 1]);
    }

    #[test]
    fn test_sort_by_evaluates_criterion_once_per_value() {
        let mut calls = 0;
        let sorted = sort_by(&[3, 1, 2], |value| {
            calls += 1;
            *value
        });
        assert_eq!(sorted, vec![1, 2, 3]);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_zip_with_no_rest() {
        assert_eq!(zip(&[1, 2], &[]), vec![vec![Some(1)], vec![Some(2)]]);
    }
}
