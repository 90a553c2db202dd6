#![cfg(feature = "async")]
//! Timed decorators running on tokio's paused test clock.

use foldkit::function::{Scheduler, TokioScheduler, delay, throttle};
use rstest::rstest;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::{Instant, sleep};

#[rstest]
fn current_fails_outside_runtime() {
    assert!(TokioScheduler::current().is_err());
}

#[tokio::test(start_paused = true)]
async fn now_tracks_tokio_clock() {
    let scheduler = TokioScheduler::current().unwrap();
    sleep(Duration::from_millis(50)).await;
    assert!(scheduler.now() >= Duration::from_millis(50));
}

#[tokio::test(start_paused = true)]
async fn delay_waits_at_least_requested_time() {
    let scheduler = TokioScheduler::current().unwrap();
    let (sender, receiver) = tokio::sync::oneshot::channel();
    let start = Instant::now();

    delay(
        &scheduler,
        move |value: u32| {
            let _ = sender.send((value, Instant::now()));
        },
        Duration::from_millis(250),
        7,
    );

    let (value, fired_at) = receiver.await.unwrap();
    assert_eq!(value, 7);
    assert!(fired_at.duration_since(start) >= Duration::from_millis(250));
}

#[tokio::test(start_paused = true)]
async fn throttle_burst_within_half_window_fires_twice() {
    let scheduler = TokioScheduler::current().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let limited = throttle(
        scheduler,
        move |value: u32| sink.lock().unwrap().push(value),
        Duration::from_millis(100),
    );

    for value in 1..=10 {
        limited.call(value);
        sleep(Duration::from_millis(5)).await;
    }
    sleep(Duration::from_millis(300)).await;

    assert_eq!(*seen.lock().unwrap(), vec![1, 10]);
    assert!(!limited.is_window_open());
}

#[tokio::test(start_paused = true)]
async fn explicit_handle_scheduler_runs_task() {
    let scheduler = TokioScheduler::new(tokio::runtime::Handle::current());
    let (sender, receiver) = tokio::sync::oneshot::channel();
    scheduler.schedule(
        Duration::from_secs(3600),
        Box::new(move || {
            let _ = sender.send(());
        }),
    );
    tokio::time::advance(Duration::from_secs(3600)).await;
    receiver.await.unwrap();
}
