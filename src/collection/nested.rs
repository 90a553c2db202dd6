//! Nested sequences and flattening.
//!
//! A nested sequence is a `Vec<Nested<T>>`: each element is either a plain
//! item or a further list. [`flatten`] removes exactly one level of
//! nesting; [`flatten_deep`] removes all of it.

/// An element of a nested sequence.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::Nested;
///
/// // [1, [2], [3, [[4]]]]
/// let nested = vec![
///     Nested::Item(1),
///     Nested::List(vec![Nested::Item(2)]),
///     Nested::List(vec![
///         Nested::Item(3),
///         Nested::List(vec![Nested::List(vec![Nested::Item(4)])]),
///     ]),
/// ];
/// assert_eq!(nested.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    /// A plain value.
    Item(T),
    /// A sub-sequence.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Returns whether this element is a sub-sequence.
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl<T> From<T> for Nested<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

/// Splices the members of every top-level list into place.
///
/// Only one level is removed: a list inside a list stays a list.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::{Nested, flatten};
///
/// let nested = vec![
///     Nested::Item(1),
///     Nested::List(vec![Nested::Item(2)]),
///     Nested::List(vec![
///         Nested::Item(3),
///         Nested::List(vec![Nested::List(vec![Nested::Item(4)])]),
///     ]),
/// ];
/// assert_eq!(
///     flatten(&nested),
///     vec![
///         Nested::Item(1),
///         Nested::Item(2),
///         Nested::Item(3),
///         Nested::List(vec![Nested::List(vec![Nested::Item(4)])]),
///     ]
/// );
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut flattened = Vec::with_capacity(nested.len());
    for element in nested {
        match element {
            Nested::Item(_) => flattened.push(element.clone()),
            Nested::List(members) => flattened.extend(members.iter().cloned()),
        }
    }
    flattened
}

/// Removes every level of nesting, yielding the plain items in order.
///
/// # Examples
///
/// ```rust
/// use foldkit::collection::{Nested, flatten_deep};
///
/// let nested = vec![
///     Nested::Item(1),
///     Nested::List(vec![Nested::List(vec![Nested::Item(2)]), Nested::Item(3)]),
/// ];
/// assert_eq!(flatten_deep(&nested), vec![1, 2, 3]);
/// ```
pub fn flatten_deep<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    // Explicit stack keeps deep inputs off the call stack.
    let mut flattened = Vec::new();
    let mut pending: Vec<std::slice::Iter<'_, Nested<T>>> = vec![nested.iter()];
    while let Some(level) = pending.last_mut() {
        match level.next() {
            Some(Nested::Item(value)) => flattened.push(value.clone()),
            Some(Nested::List(members)) => pending.push(members.iter()),
            None => {
                pending.pop();
            }
        }
    }
    flattened
}
