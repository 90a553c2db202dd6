//! Call-at-most-once decorator.
//!
//! [`once`] wraps a function so that only the first call reaches it. The
//! first result is cached and handed back on every later call, whatever
//! arguments those calls carry.
//!
//! Arguments are forwarded as a single value; use a tuple for several.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::function::once;
//!
//! let connect = once(|(shard, port): (u8, u16)| format!("shard-{shard}:{port}"));
//!
//! assert_eq!(connect.call((1, 5432)), "shard-1:5432");
//! // Later arguments are ignored; the first result is returned.
//! assert_eq!(connect.call((2, 6379)), "shard-1:5432");
//! ```

use std::cell::RefCell;
use std::fmt;

/// The internal state of a [`Once`] wrapper.
#[derive(Debug)]
pub enum OnceState<F, R> {
    /// Not called yet. Holds the wrapped function.
    Pending(F),
    /// Called. Holds the cached result.
    Called(R),
    /// The wrapped function panicked or was re-entered while running.
    /// The wrapper is now unusable.
    Poisoned,
}

/// A function wrapper that runs the wrapped function at most once.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `R` - Its result, cloned out to every caller
///
/// # Thread Safety
///
/// This type is NOT thread-safe. Each wrapper owns its own state and is
/// meant to be called from one thread.
///
/// # Examples
///
/// ```rust
/// use foldkit::function::Once;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let wrapper = Once::new(|value: i32| {
///     call_count.set(call_count.get() + 1);
///     value * 2
/// });
///
/// assert_eq!(wrapper.call(1), 2);
/// assert_eq!(wrapper.call(5), 2);
/// assert_eq!(call_count.get(), 1);
/// ```
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

impl<F, R> Once<F, R> {
    /// Wraps `function`. It is not called until the first [`call`](Self::call).
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
        }
    }

    /// Invokes the wrapped function on the first call only and returns its
    /// cached result on every call.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics, the wrapper becomes poisoned and
    ///   this call and all later calls panic.
    /// - If the wrapped function calls this same wrapper again while it is
    ///   still running.
    pub fn call<A>(&self, arguments: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        if let OnceState::Called(result) = &*self.state.borrow() {
            return result.clone();
        }

        // Poisoned stays in place until the function returns normally.
        let previous = std::mem::replace(&mut *self.state.borrow_mut(), OnceState::Poisoned);
        let OnceState::Pending(function) = previous else {
            panic!("Once instance has been poisoned");
        };

        let result = function(arguments);
        tracing::trace!("once: wrapped function called");
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        result
    }

    /// Returns whether the wrapped function has run to completion.
    #[inline]
    pub fn is_called(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns whether the wrapper has been poisoned.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }

    /// Returns the cached result, if the wrapped function has run.
    pub fn result(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            OnceState::Called(result) => Some(result.clone()),
            _ => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            OnceState::Called(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Pending(_) => formatter.debug_tuple("Once").field(&"<pending>").finish(),
            OnceState::Poisoned => formatter.debug_tuple("Once").field(&"<poisoned>").finish(),
        }
    }
}

/// Wraps `function` so it runs at most once. See [`Once`].
#[inline]
pub fn once<A, F, R>(function: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

static_assertions::assert_not_impl_any!(Once<fn(i32) -> i32, i32>: Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_once_is_pending_until_called() {
        let wrapper = once(|value: i32| value);
        assert!(!wrapper.is_called());
        assert_eq!(wrapper.result(), None);
    }

    #[rstest]
    fn test_once_debug_shows_state() {
        let wrapper = once(|value: i32| value + 1);
        assert_eq!(format!("{wrapper:?}"), "Once(\"<pending>\")");
        wrapper.call(1);
        assert_eq!(format!("{wrapper:?}"), "Once(2)");
    }

    #[rstest]
    fn test_once_poisoned_after_panic() {
        let wrapper = once(|value: i32| -> i32 { panic!("failed with {value}") });
        let first = catch_unwind(AssertUnwindSafe(|| wrapper.call(1)));
        assert!(first.is_err());
        assert!(wrapper.is_poisoned());

        let second = catch_unwind(AssertUnwindSafe(|| wrapper.call(2)));
        assert!(second.is_err());
    }
}
