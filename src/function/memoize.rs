//! Result caching keyed by the call's arguments.
//!
//! [`memoize`] caches one result per distinct argument value; the wrapped
//! function only runs on a cache miss. [`memoize_by`] derives the cache key
//! from the arguments with a caller-supplied function instead.
//!
//! The cache lives as long as the wrapper and is never evicted.
//!
//! # Hashing
//!
//! The cache hasher follows the crate's feature flags: `fxhash` selects
//! `rustc-hash`, `ahash` selects `ahash`, and otherwise std's
//! `RandomState` is used.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::function::memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let area = memoize(|(width, height): (u32, u32)| {
//!     calls.set(calls.get() + 1);
//!     width * height
//! });
//!
//! assert_eq!(area.call((3, 4)), 12);
//! assert_eq!(area.call((3, 4)), 12);
//! assert_eq!(area.call((4, 3)), 12);
//! assert_eq!(calls.get(), 2);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[cfg(feature = "fxhash")]
type CacheHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type CacheHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type CacheHasher = std::collections::hash_map::RandomState;

/// A function wrapper that caches results per cache key.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `H` - Derives the cache key from the arguments
/// * `K` - The cache key
/// * `R` - The cached result
pub struct Memoize<F, H, K, R> {
    function: F,
    hasher: H,
    cache: RefCell<HashMap<K, R, CacheHasher>>,
}

impl<F, H, K, R> Memoize<F, H, K, R> {
    /// Wraps `function`, keying its cache with `hasher(&arguments)`.
    pub fn new(function: F, hasher: H) -> Self {
        Self {
            function,
            hasher,
            cache: RefCell::new(HashMap::with_hasher(CacheHasher::default())),
        }
    }

    /// Returns the cached result for these arguments, computing and storing
    /// it on a miss.
    ///
    /// The cache is not borrowed while the wrapped function runs.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: Fn(A) -> R,
        H: Fn(&A) -> K,
        K: Hash + Eq,
        R: Clone,
    {
        let key = (self.hasher)(&arguments);
        if let Some(result) = self.cache.borrow().get(&key) {
            tracing::trace!("memoize: cache hit");
            return result.clone();
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.function)(arguments);
        self.cache.borrow_mut().insert(key, result.clone());
        result
    }

    /// Returns the number of cached results.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<F, H, K, R> fmt::Debug for Memoize<F, H, K, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Caches `function`'s results keyed by the full argument value.
///
/// Arguments are assumed to be plain values: two calls with equal arguments
/// share one cache entry.
#[inline]
pub fn memoize<A, R, F>(function: F) -> Memoize<F, fn(&A) -> A, A, R>
where
    A: Clone + Hash + Eq,
    F: Fn(A) -> R,
{
    Memoize::new(function, A::clone as fn(&A) -> A)
}

/// Caches `function`'s results keyed by `hasher(&arguments)`.
///
/// # Examples
///
/// ```rust
/// use foldkit::function::memoize_by;
///
/// // Case-insensitive cache key.
/// let greet = memoize_by(
///     |name: String| format!("hello, {name}"),
///     |name: &String| name.to_lowercase(),
/// );
/// assert_eq!(greet.call("Ann".to_string()), "hello, Ann");
/// assert_eq!(greet.call("ANN".to_string()), "hello, Ann");
/// assert_eq!(greet.cache_len(), 1);
/// ```
#[inline]
pub fn memoize_by<A, K, R, F, H>(function: F, hasher: H) -> Memoize<F, H, K, R>
where
    F: Fn(A) -> R,
    H: Fn(&A) -> K,
    K: Hash + Eq,
{
    Memoize::new(function, hasher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_memoize_debug_reports_cache_size() {
        let square = memoize(|value: i64| value * value);
        square.call(3);
        assert_eq!(format!("{square:?}"), "Memoize { cached: 1, .. }");
    }

    #[rstest]
    fn test_memoize_distinguishes_argument_order() {
        let calls = Cell::new(0);
        let subtract = memoize(|(left, right): (i32, i32)| {
            calls.set(calls.get() + 1);
            left - right
        });
        assert_eq!(subtract.call((5, 3)), 2);
        assert_eq!(subtract.call((3, 5)), -2);
        assert_eq!(calls.get(), 2);
        assert_eq!(subtract.cache_len(), 2);
    }
}
