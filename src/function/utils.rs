//! Small helper functions.

/// Returns the value unchanged.
///
/// Handy as the key extractor of the `*_by` operations when the element
/// itself is the key.
///
/// # Examples
///
/// ```rust
/// use foldkit::function::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
///
/// # Use as a key extractor
///
/// ```rust
/// use foldkit::function::{identity, memoize_by};
///
/// let square = memoize_by(|value: u64| value * value, |value: &u64| identity(*value));
/// assert_eq!(square.call(7), 49);
/// assert_eq!(square.cache_len(), 1);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
