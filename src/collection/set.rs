//! Set-style operations across several sequences.

use std::collections::HashSet;
use std::hash::Hash;

use super::predicate::{every, filter};
use super::transform::uniq;

/// Returns the values present in `first` and in every sequence of `rest`.
///
/// Equality is by value. The result follows the order of first occurrence
/// in `first` and holds no duplicates. With an empty `rest` this is the
/// de-duplicated `first`.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::intersection;
///
/// assert_eq!(intersection(&[1, 2, 3], &[&[2, 3, 4], &[2, 5]]), vec![2]);
/// assert_eq!(intersection(&[3, 1, 3, 2], &[&[1, 2, 3]]), vec![3, 1, 2]);
/// ```
pub fn intersection<T>(first: &[T], rest: &[&[T]]) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    let lookups: Vec<HashSet<&T>> = rest.iter().map(|sequence| sequence.iter().collect()).collect();
    let shared = filter(first, |value| every(&lookups, |lookup| lookup.contains(value)));
    uniq(&shared, false)
}

/// Returns the values of `sequence` that appear in none of `others`.
///
/// Order and duplicates of `sequence` are preserved.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4], &[&[2, 4]]), vec![1, 3]);
/// assert_eq!(difference(&[1, 1, 2], &[&[3], &[2]]), vec![1, 1]);
/// ```
pub fn difference<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Clone + Hash + Eq,
{
    let excluded: HashSet<&T> = others.iter().flat_map(|other| other.iter()).collect();
    filter(sequence, |value| !excluded.contains(value))
}
