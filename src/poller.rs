//! Periodic data refresh with guaranteed teardown.
//!
//! Each dashboard widget owns one [`Poller`] per data source: a tokio task
//! ticks at the configured cadence, invokes the fetch, and replaces the
//! displayed state wholesale on success. On failure the previous state is
//! retained and the error surfaced, never thrown.
//!
//! The poller is an explicit task handle owning its own cancellation flag,
//! replacing ambient global timers. Stopping guarantees that no state
//! mutation is observable after [`Poller::stop`] returns, even if a fetch
//! is in flight at that moment: the late result is discarded.
//!
//! Fetches are serialized — a tick awaits its fetch before the next tick
//! fires — so responses cannot land out of order.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::error::Result;

// ---------------------------------------------------------------------------
// PollSnapshot
// ---------------------------------------------------------------------------

/// Point-in-time view of a poller's state.
#[derive(Debug, Clone, PartialEq)]
pub struct PollSnapshot<T> {
    /// Latest successfully fetched data, if any fetch has succeeded yet.
    pub data: Option<T>,
    /// Error from the most recent fetch attempt; cleared on the next
    /// success.
    pub last_error: Option<String>,
    /// Number of completed fetch attempts (successes and failures).
    pub ticks: u64,
}

impl<T> Default for PollSnapshot<T> {
    fn default() -> Self {
        Self { data: None, last_error: None, ticks: 0 }
    }
}

// ---------------------------------------------------------------------------
// Poller
// ---------------------------------------------------------------------------

/// Handle to a recurring fetch task, scoped to a widget's visible lifetime.
///
/// Created with [`start`](Poller::start) on activation and torn down with
/// [`stop`](Poller::stop) (or by dropping the handle) on destruction.
pub struct Poller<T> {
    state: Arc<Mutex<PollSnapshot<T>>>,
    stopped: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl<T: Clone + Send + 'static> Poller<T> {
    /// Spawn a polling task that invokes `fetch` immediately and then once
    /// per `interval`.
    ///
    /// On success the displayed state is replaced wholesale (no partial
    /// merge) and any prior error is cleared; on failure the previous state
    /// is kept and the error message stored.
    pub fn start<F, Fut>(interval: Duration, mut fetch: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send,
    {
        let state: Arc<Mutex<PollSnapshot<T>>> = Arc::new(Mutex::new(PollSnapshot::default()));
        let stopped = Arc::new(AtomicBool::new(false));

        let task_state = Arc::clone(&state);
        let task_stopped = Arc::clone(&stopped);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if task_stopped.load(Ordering::SeqCst) {
                    break;
                }
                let outcome = fetch().await;
                commit(&task_state, &task_stopped, outcome);
            }
        });

        Self { state, stopped, handle }
    }

    /// Latest state, error, and tick count.
    pub fn snapshot(&self) -> PollSnapshot<T> {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Whether [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Stop polling.
    ///
    /// After this returns, no further state mutation occurs: the stop flag
    /// is raised before the state lock is taken once, so a commit racing
    /// with teardown either completed before `stop` returned or will
    /// observe the flag and discard its result. The task itself is aborted
    /// at its next await point.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.handle.abort();
        // Synchronize with any commit already holding the lock.
        drop(self.state.lock().unwrap_or_else(|e| e.into_inner()));
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.handle.abort();
    }
}

/// Commit a fetch outcome, unless the poller was stopped in the meantime.
///
/// The stop check happens under the state lock; this is what makes the
/// teardown guarantee hold for in-flight fetches.
fn commit<T>(
    state: &Mutex<PollSnapshot<T>>,
    stopped: &AtomicBool,
    outcome: Result<T>,
) {
    let mut guard = state.lock().unwrap_or_else(|e| e.into_inner());
    if stopped.load(Ordering::SeqCst) {
        return;
    }
    guard.ticks += 1;
    match outcome {
        Ok(data) => {
            guard.data = Some(data);
            guard.last_error = None;
        }
        Err(e) => {
            guard.last_error = Some(e.to_string());
        }
    }
}
