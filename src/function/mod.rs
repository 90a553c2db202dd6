//! Function decorators.
//!
//! Each decorator wraps a function and changes *when* or *how often* it
//! runs, without touching what it computes.
//!
//! - [`once`]: run at most once, replay the first result
//! - [`memoize`] / [`memoize_by`]: cache results per argument value
//! - [`delay`]: run once after a wait
//! - [`throttle`] / [`throttle_with`]: run at most once per time window
//!
//! The synchronous decorators ([`Once`], [`Memoize`]) keep their state in a
//! `RefCell` and are meant for a single thread. The timed ones hand their
//! work to a [`Scheduler`]: [`VirtualScheduler`] for a hand-driven clock, or
//! `TokioScheduler` (feature `async`) for real timers.
//!
//! Wrapped functions take a single argument value. Pass a tuple to forward
//! several.

mod delay;
mod memoize;
mod once;
mod scheduler;
mod throttle;
mod utils;

pub use delay::delay;
pub use memoize::{Memoize, memoize, memoize_by};
pub use once::{Once, OnceState, once};
#[cfg(feature = "async")]
pub use scheduler::TokioScheduler;
pub use scheduler::{Scheduler, Task, VirtualScheduler};
pub use throttle::{Throttle, ThrottleOptions, throttle, throttle_with};
pub use utils::identity;
