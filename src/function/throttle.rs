//! Rate limiting: at most one call per time window.
//!
//! A [`Throttle`] runs its function on the *leading edge* of a window (the
//! first call when no window is open) and then ignores calls until the
//! window closes. If calls arrived meanwhile, the most recent one's
//! arguments are used for a single *trailing* call when the window closes,
//! and that trailing call opens the next window.
//!
//! ```text
//! calls:    x  x x  x                       x
//! fires:    L         T                     L
//! window:   [--wait--][--wait--]            [--wait--]
//! ```
//!
//! Both edges can be switched off with [`ThrottleOptions`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use super::scheduler::Scheduler;

/// Which edges of a window may fire.
///
/// # Examples
///
/// ```rust
/// use foldkit::function::ThrottleOptions;
///
/// let options = ThrottleOptions::default().leading(false);
/// assert!(!options.is_leading());
/// assert!(options.is_trailing());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThrottleOptions {
    leading: bool,
    trailing: bool,
}

impl ThrottleOptions {
    /// Both edges enabled.
    pub const fn new() -> Self {
        Self {
            leading: true,
            trailing: true,
        }
    }

    /// Sets whether the first call of a window runs immediately. When off,
    /// that call waits for the trailing edge instead.
    #[must_use]
    pub const fn leading(mut self, enabled: bool) -> Self {
        self.leading = enabled;
        self
    }

    /// Sets whether calls suppressed during a window produce a trailing call.
    #[must_use]
    pub const fn trailing(mut self, enabled: bool) -> Self {
        self.trailing = enabled;
        self
    }

    /// Returns whether the leading edge fires.
    pub const fn is_leading(&self) -> bool {
        self.leading
    }

    /// Returns whether the trailing edge fires.
    pub const fn is_trailing(&self) -> bool {
        self.trailing
    }
}

impl Default for ThrottleOptions {
    fn default() -> Self {
        Self::new()
    }
}

struct WindowState<A> {
    open: bool,
    pending: Option<A>,
}

struct ThrottleInner<A, F, S> {
    function: F,
    wait: Duration,
    options: ThrottleOptions,
    scheduler: S,
    window: Mutex<WindowState<A>>,
}

impl<A, F, S> ThrottleInner<A, F, S>
where
    A: Send + 'static,
    F: Send + Sync + 'static,
    S: Scheduler + 'static,
{
    fn schedule_close<R>(self: &Arc<Self>)
    where
        F: Fn(A) -> R,
    {
        let inner = Arc::clone(self);
        self.scheduler
            .schedule(self.wait, Box::new(move || inner.close_window::<R>()));
    }

    fn close_window<R>(self: &Arc<Self>)
    where
        F: Fn(A) -> R,
    {
        let trailing = {
            let mut window = self.window.lock();
            let pending = window.pending.take();
            if pending.is_none() {
                window.open = false;
            }
            pending
        };

        match trailing {
            Some(arguments) => {
                tracing::debug!(wait = ?self.wait, "throttle: trailing call fired");
                self.schedule_close::<R>();
                let _ = (self.function)(arguments);
            }
            None => tracing::trace!("throttle: window closed"),
        }
    }
}

/// A function wrapper that runs at most once per `wait` window.
///
/// Cloning a `Throttle` yields another handle to the same window state.
///
/// # Examples
///
/// ```rust
/// use foldkit::function::{VirtualScheduler, throttle};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let record = throttle(
///     scheduler.clone(),
///     move |value: i32| sink.lock().unwrap().push(value),
///     Duration::from_millis(100),
/// );
///
/// for value in 1..=10 {
///     record.call(value);
///     scheduler.advance(Duration::from_millis(5));
/// }
/// scheduler.run_until_idle();
///
/// // One leading call, one trailing call with the last arguments.
/// assert_eq!(*seen.lock().unwrap(), vec![1, 10]);
/// ```
pub struct Throttle<A, F, S> {
    inner: Arc<ThrottleInner<A, F, S>>,
}

impl<A, F, S> Throttle<A, F, S>
where
    A: Send + 'static,
    F: Send + Sync + 'static,
    S: Scheduler + 'static,
{
    /// Wraps `function` with a `wait` window and the given edge options.
    pub fn new(scheduler: S, function: F, wait: Duration, options: ThrottleOptions) -> Self {
        Self {
            inner: Arc::new(ThrottleInner {
                function,
                wait,
                options,
                scheduler,
                window: Mutex::new(WindowState {
                    open: false,
                    pending: None,
                }),
            }),
        }
    }

    /// Calls through the throttle.
    ///
    /// Returns `Some(result)` when this call ran immediately on the leading
    /// edge, and `None` when it was suppressed or deferred to the trailing
    /// edge.
    pub fn call<R>(&self, arguments: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        let options = self.inner.options;
        let leading = {
            let mut window = self.inner.window.lock();
            if window.open {
                if options.trailing {
                    window.pending = Some(arguments);
                }
                tracing::trace!("throttle: call suppressed");
                return None;
            }
            window.open = true;
            if options.leading {
                Some(arguments)
            } else {
                if options.trailing {
                    window.pending = Some(arguments);
                }
                None
            }
        };

        tracing::debug!(wait = ?self.inner.wait, "throttle: window opened");
        self.inner.schedule_close::<R>();
        leading.map(|arguments| (self.inner.function)(arguments))
    }

    /// Returns whether a window is currently open.
    pub fn is_window_open(&self) -> bool {
        self.inner.window.lock().open
    }

    /// Returns the options this throttle was built with.
    pub fn options(&self) -> ThrottleOptions {
        self.inner.options
    }
}

impl<A, F, S> Clone for Throttle<A, F, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, F, S> fmt::Debug for Throttle<A, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let window = self.inner.window.lock();
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.inner.wait)
            .field("options", &self.inner.options)
            .field("window_open", &window.open)
            .field("pending", &window.pending.is_some())
            .finish()
    }
}

/// Throttles `function` to one call per `wait`, firing on both edges.
#[inline]
pub fn throttle<A, R, F, S>(scheduler: S, function: F, wait: Duration) -> Throttle<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
    S: Scheduler + 'static,
{
    Throttle::new(scheduler, function, wait, ThrottleOptions::default())
}

/// Throttles `function` to one call per `wait` with explicit edge options.
#[inline]
pub fn throttle_with<A, R, F, S>(
    scheduler: S,
    function: F,
    wait: Duration,
    options: ThrottleOptions,
) -> Throttle<A, F, S>
where
    A: Send + 'static,
    F: Fn(A) -> R + Send + Sync + 'static,
    S: Scheduler + 'static,
{
    Throttle::new(scheduler, function, wait, options)
}
