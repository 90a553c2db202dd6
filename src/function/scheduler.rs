//! Timer facilities for the deferred decorators.
//!
//! [`delay`](super::delay) and [`throttle`](super::throttle) never sleep
//! themselves. They register a task with a [`Scheduler`] and return at once;
//! the scheduler runs the task once its logical clock has moved at least
//! the requested delay forward.
//!
//! - [`VirtualScheduler`]: a logical clock advanced by hand. Deterministic,
//!   runtime-free, and the natural choice for tests.
//! - `TokioScheduler` (feature `async`): tasks sleep on `tokio::time` and
//!   run on a tokio runtime.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// A deferred callback.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A host timer facility.
///
/// Implementations must run every scheduled task exactly once, no earlier
/// than `delay` after it was scheduled. Tasks may schedule further tasks.
pub trait Scheduler: Send + Sync {
    /// Returns the logical time elapsed since the scheduler was created.
    fn now(&self) -> Duration;

    /// Registers `task` to run once `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    #[inline]
    fn now(&self) -> Duration {
        (**self).now()
    }

    #[inline]
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task);
    }
}

// =============================================================================
// VirtualScheduler
// =============================================================================

struct PendingTask {
    due: Duration,
    sequence: u64,
    task: Task,
}

impl PendingTask {
    const fn order_key(&self) -> (Duration, u64) {
        (self.due, self.sequence)
    }
}

impl PartialEq for PendingTask {
    fn eq(&self, other: &Self) -> bool {
        self.order_key() == other.order_key()
    }
}

impl Eq for PendingTask {}

impl PartialOrd for PendingTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingTask {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_sequence: u64,
    queue: BinaryHeap<Reverse<PendingTask>>,
}

/// A single logical clock that only moves when told to.
///
/// Clones share the same clock and task queue. Due tasks run in order of
/// due time, then registration order, on the thread that advances the
/// clock. The clock is unlocked while a task runs, so tasks may schedule
/// more work; anything that falls due within the same advance also runs.
///
/// # Examples
///
/// ```rust
/// use foldkit::function::{Scheduler, VirtualScheduler};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// scheduler.schedule(
///     Duration::from_millis(100),
///     Box::new(move || flag.store(true, Ordering::SeqCst)),
/// );
///
/// scheduler.advance(Duration::from_millis(99));
/// assert!(!fired.load(Ordering::SeqCst));
/// scheduler.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    clock: Arc<Mutex<VirtualClock>>,
}

impl VirtualScheduler {
    /// Creates a scheduler whose clock reads zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `duration`, running every task that
    /// falls due on the way.
    pub fn advance(&self, duration: Duration) {
        let target = self.now().saturating_add(duration);
        while let Some(task) = self.next_due(target) {
            task();
        }
        let mut clock = self.clock.lock();
        clock.now = clock.now.max(target);
    }

    /// Runs tasks until none are left, moving the clock to each due time.
    pub fn run_until_idle(&self) {
        while let Some(task) = self.next_due(Duration::MAX) {
            task();
        }
    }

    /// Returns the number of tasks waiting to run.
    pub fn pending_tasks(&self) -> usize {
        self.clock.lock().queue.len()
    }

    fn next_due(&self, target: Duration) -> Option<Task> {
        let mut clock = self.clock.lock();
        let is_due = clock
            .queue
            .peek()
            .is_some_and(|Reverse(pending)| pending.due <= target);
        if !is_due {
            return None;
        }
        let Reverse(pending) = clock.queue.pop()?;
        clock.now = clock.now.max(pending.due);
        Some(pending.task)
    }
}

impl Scheduler for VirtualScheduler {
    fn now(&self) -> Duration {
        self.clock.lock().now
    }

    fn schedule(&self, delay: Duration, task: Task) {
        let mut clock = self.clock.lock();
        let due = clock.now.saturating_add(delay);
        let sequence = clock.next_sequence;
        clock.next_sequence += 1;
        tracing::trace!(?due, sequence, "virtual scheduler: task registered");
        clock.queue.push(Reverse(PendingTask {
            due,
            sequence,
            task,
        }));
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.lock();
        formatter
            .debug_struct("VirtualScheduler")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

static_assertions::assert_impl_all!(VirtualScheduler: Send, Sync, Clone);

// =============================================================================
// TokioScheduler
// =============================================================================

#[cfg(feature = "async")]
pub use tokio_scheduler::TokioScheduler;

#[cfg(feature = "async")]
mod tokio_scheduler {
    use std::time::Duration;

    use tokio::runtime::{Handle, TryCurrentError};
    use tokio::time::Instant;

    use super::{Scheduler, Task};

    /// A [`Scheduler`] that sleeps on `tokio::time` inside a tokio runtime.
    ///
    /// Each scheduled task is spawned on the captured runtime handle, waits
    /// until its deadline, then runs. Under a paused test clock the tasks
    /// follow `tokio::time::advance`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::function::{Scheduler, TokioScheduler};
    /// use std::time::Duration;
    ///
    /// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
    /// let scheduler = TokioScheduler::current().unwrap();
    /// let (sender, receiver) = tokio::sync::oneshot::channel();
    /// scheduler.schedule(
    ///     Duration::from_millis(5),
    ///     Box::new(move || {
    ///         let _ = sender.send("done");
    ///     }),
    /// );
    /// assert_eq!(receiver.await.unwrap(), "done");
    /// # });
    /// ```
    #[derive(Clone, Debug)]
    pub struct TokioScheduler {
        handle: Handle,
        origin: Instant,
    }

    impl TokioScheduler {
        /// Creates a scheduler that spawns onto `handle`.
        pub fn new(handle: Handle) -> Self {
            Self {
                handle,
                origin: Instant::now(),
            }
        }

        /// Creates a scheduler for the runtime the caller is running in.
        ///
        /// # Errors
        ///
        /// Returns [`TryCurrentError`] when called outside a tokio runtime.
        pub fn current() -> Result<Self, TryCurrentError> {
            Handle::try_current().map(Self::new)
        }
    }

    impl Scheduler for TokioScheduler {
        fn now(&self) -> Duration {
            self.origin.elapsed()
        }

        fn schedule(&self, delay: Duration, task: Task) {
            // The deadline is fixed now, not when the spawned task first polls.
            let deadline = Instant::now().checked_add(delay);
            tracing::trace!(?delay, "tokio scheduler: task spawned");
            self.handle.spawn(async move {
                match deadline {
                    Some(deadline) => tokio::time::sleep_until(deadline).await,
                    None => tokio::time::sleep(delay).await,
                }
                task();
            });
        }
    }
}
