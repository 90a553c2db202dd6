//! Deferred single invocation.

use std::time::Duration;

use super::scheduler::Scheduler;

/// Schedules one call of `function(arguments)` no earlier than `wait` from
/// now and returns immediately.
///
/// The call always fires once the scheduler's clock reaches `wait`; there is
/// no cancellation. Whatever `function` returns is discarded.
///
/// # Examples
///
/// ```rust
/// use foldkit::function::{VirtualScheduler, delay};
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let received = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&received);
///
/// delay(
///     &scheduler,
///     move |(first, second): (&'static str, &'static str)| sink.lock().unwrap().extend([first, second]),
///     Duration::from_millis(500),
///     ("a", "b"),
/// );
/// assert!(received.lock().unwrap().is_empty());
///
/// scheduler.advance(Duration::from_millis(500));
/// assert_eq!(*received.lock().unwrap(), vec!["a", "b"]);
/// ```
pub fn delay<S, A, R, F>(scheduler: &S, function: F, wait: Duration, arguments: A)
where
    S: Scheduler + ?Sized,
    A: Send + 'static,
    F: FnOnce(A) -> R + Send + 'static,
{
    tracing::debug!(?wait, "delay: call scheduled");
    scheduler.schedule(
        wait,
        Box::new(move || {
            let _ = function(arguments);
        }),
    );
}
