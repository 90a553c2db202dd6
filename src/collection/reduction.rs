//! Left folds over a [`Collection`].
//!
//! [`reduce_from`] folds with an explicit seed; [`reduce`] seeds with the
//! first value and folds the rest. [`contains`] and [`index_of`] are
//! short-circuiting folds built on the same primitive.

use std::ops::ControlFlow;

use super::error::{CollectionError, Result};
use super::iteration::{Collection, settle};

/// Folds every value into `seed` from left to right.
///
/// The seed is always used, even when it is a "falsy" value such as `0` or
/// `false`, and the reducer sees every element.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::reduce_from;
///
/// let sum = reduce_from(&[1, 2, 3], 0, |total, number| total + number);
/// assert_eq!(sum, 6);
///
/// let lengths = reduce_from(&vec!["ab", "cde"], 0usize, |total, word| total + word.len());
/// assert_eq!(lengths, 5);
/// ```
pub fn reduce_from<C, A, F>(collection: &C, seed: A, mut reducer: F) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Value) -> A,
{
    settle(collection.try_fold(seed, |accumulator, value, _, _| {
        ControlFlow::Continue(reducer(accumulator, value))
    }))
}

/// Folds the collection using its first value as the seed.
///
/// The first value is never passed to `reducer`; reduction starts at the
/// second value. A single-value collection yields that value without
/// calling `reducer`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] when the collection is empty.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::reduce;
///
/// let identity = reduce(&[5], |total, number| total + number * number).unwrap();
/// assert_eq!(identity, 5);
///
/// let product = reduce(&[2, 3, 4], |total, number| total * number).unwrap();
/// assert_eq!(product, 24);
/// ```
pub fn reduce<C, F>(collection: &C, mut reducer: F) -> Result<C::Value>
where
    C: Collection + ?Sized,
    C::Value: Clone,
    F: FnMut(C::Value, &C::Value) -> C::Value,
{
    let folded = settle(
        collection.try_fold(None, |accumulator: Option<C::Value>, value, _, _| {
            ControlFlow::Continue(Some(match accumulator {
                None => value.clone(),
                Some(current) => reducer(current, value),
            }))
        }),
    );
    folded.ok_or(CollectionError::InvalidArgument {
        operation: "reduce",
        reason: "empty collection and no seed",
    })
}

/// Returns whether any value equals `target`.
///
/// Stops at the first match.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::contains;
/// use std::collections::HashMap;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&HashMap::from([("a", 1)]), &2));
/// ```
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Collection + ?Sized,
    C::Value: PartialEq,
{
    settle(collection.try_fold(false, |_, value, _, _| {
        if value == target {
            ControlFlow::Break(true)
        } else {
            ControlFlow::Continue(false)
        }
    }))
}

/// Returns the index of the first value equal to `target`.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20], &30), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    settle(sequence.try_fold(None, |_, value, index, _| {
        if value == target {
            ControlFlow::Break(Some(index))
        } else {
            ControlFlow::Continue(None)
        }
    }))
}
