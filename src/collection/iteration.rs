//! Uniform traversal over sequences and mappings.
//!
//! This module provides the [`Collection`] trait, the single abstraction the
//! rest of the crate folds over. A collection is either a *sequence*
//! (slices, `Vec`, arrays), keyed by its `usize` index, or a *mapping*
//! (`HashMap`, `BTreeMap`), keyed by a reference to its own keys.
//!
//! The one required traversal is [`Collection::try_fold`], a left fold that
//! may stop early by returning [`ControlFlow::Break`]. [`each`] and every
//! reduction in the crate are derived from it.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::collection::each;
//! use std::collections::BTreeMap;
//!
//! let mut seen = Vec::new();
//! each(&vec!["a", "b"], |value, index, _| seen.push((*value, index)));
//! assert_eq!(seen, vec![("a", 0), ("b", 1)]);
//!
//! let scores = BTreeMap::from([("ann", 3), ("bob", 5)]);
//! let mut total = 0;
//! each(&scores, |score, _name, _| total += score);
//! assert_eq!(total, 8);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::ops::ControlFlow;

/// A finite container whose values can be visited together with their keys.
///
/// Sequences visit in ascending index order. Mappings visit in their own
/// enumeration order, which is stable for the duration of one call.
///
/// # Required Methods
///
/// - `try_fold`: Left fold with early exit
/// - `length`: Number of values
pub trait Collection {
    /// The key handed to callbacks: an index for sequences, a key
    /// reference for mappings.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// The element type.
    type Value;

    /// Folds every `(value, key, collection)` triple from left to right,
    /// stopping as soon as `function` breaks.
    ///
    /// Returns `Continue` with the final accumulator when every element was
    /// visited, or the `Break` value produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::collection::Collection;
    /// use std::ops::ControlFlow;
    ///
    /// let values = [3, 8, 1];
    /// let first_large = values.try_fold((), |(), value, index, _| {
    ///     if *value > 5 { ControlFlow::Break(index) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(first_large, ControlFlow::Break(1));
    /// ```
    fn try_fold<'a, B, R, F>(&'a self, init: B, function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, &'a Self::Value, Self::Key<'a>, &'a Self) -> ControlFlow<R, B>;

    /// Returns the number of values in the collection.
    fn length(&self) -> usize;

    /// Returns whether the collection has no values.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}

/// Calls `iterator(value, key, collection)` once per element.
///
/// Elements are never skipped or coalesced. The return value of the
/// iterator is discarded.
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Value, C::Key<'a>, &'a C),
{
    let _ = collection.try_fold((), |(), value, key, whole| -> ControlFlow<()> {
        iterator(value, key, whole);
        ControlFlow::Continue(())
    });
}

/// Unwraps a fold whose break and continue types agree.
#[inline]
pub(crate) fn settle<B>(flow: ControlFlow<B, B>) -> B {
    match flow {
        ControlFlow::Continue(value) | ControlFlow::Break(value) => value,
    }
}

// =============================================================================
// Sequence Implementations
// =============================================================================

impl<T> Collection for [T] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn try_fold<'a, B, R, F>(&'a self, init: B, mut function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, &'a Self::Value, Self::Key<'a>, &'a Self) -> ControlFlow<R, B>,
    {
        let mut accumulator = init;
        for (index, value) in self.iter().enumerate() {
            accumulator = function(accumulator, value, index, self)?;
        }
        ControlFlow::Continue(accumulator)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for Vec<T> {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn try_fold<'a, B, R, F>(&'a self, init: B, mut function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, &'a Self::Value, Self::Key<'a>, &'a Self) -> ControlFlow<R, B>,
    {
        self.as_slice()
            .try_fold(init, |accumulator, value, index, _| {
                function(accumulator, value, index, self)
            })
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Value = T;

    fn try_fold<'a, B, R, F>(&'a self, init: B, mut function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, &'a Self::Value, Self::Key<'a>, &'a Self) -> ControlFlow<R, B>,
    {
        self.as_slice()
            .try_fold(init, |accumulator, value, index, _| {
                function(accumulator, value, index, self)
            })
    }

    #[inline]
    fn length(&self) -> usize {
        N
    }
}

// =============================================================================
// Mapping Implementations
// =============================================================================

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn try_fold<'a, B, R, F>(&'a self, init: B, mut function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, &'a Self::Value, Self::Key<'a>, &'a Self) -> ControlFlow<R, B>,
    {
        let mut accumulator = init;
        for (key, value) in self {
            accumulator = function(accumulator, value, key, self)?;
        }
        ControlFlow::Continue(accumulator)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Value = V;

    fn try_fold<'a, B, R, F>(&'a self, init: B, mut function: F) -> ControlFlow<R, B>
    where
        F: FnMut(B, &'a Self::Value, Self::Key<'a>, &'a Self) -> ControlFlow<R, B>,
    {
        let mut accumulator = init;
        for (key, value) in self {
            accumulator = function(accumulator, value, key, self)?;
        }
        ControlFlow::Continue(accumulator)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_on_empty_sequence_never_calls() {
        let empty: Vec<i32> = Vec::new();
        let mut calls = 0;
        each(&empty, |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_each_passes_whole_collection() {
        let values = vec![1, 2, 3];
        each(&values, |_, _, collection| {
            assert!(std::ptr::eq(collection, &values));
        });
    }

    #[test]
    fn test_try_fold_stops_on_break() {
        let values = [1, 2, 3, 4];
        let mut visited = 0;
        let flow = values.try_fold(0, |total, value, _, _| {
            visited += 1;
            if *value == 2 {
                ControlFlow::Break(total)
            } else {
                ControlFlow::Continue(total + value)
            }
        });
        assert_eq!(flow, ControlFlow::Break(1));
        assert_eq!(visited, 2);
    }

    #[test]
    fn test_btreemap_visits_in_key_order() {
        let map = BTreeMap::from([(2, "b"), (1, "a"), (3, "c")]);
        let mut keys = Vec::new();
        each(&map, |_, key, _| keys.push(*key));
        assert_eq!(keys, vec![1, 2, 3]);
    }

    #[test]
    fn test_length_and_is_empty() {
        assert_eq!(Collection::length(&[1, 2, 3]), 3);
        assert!(Collection::is_empty(&HashMap::<i32, i32>::new()));
    }
}
