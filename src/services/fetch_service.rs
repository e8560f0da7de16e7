//! Fetch-display-retry state machine shared by every networked screen.
//!
//! A [`FetchSlot`] runs one request at a time on the tokio runtime and
//! reports back through a oneshot channel that the UI polls on each tick.
//! Every request is stamped with a generation; only the result of the most
//! recently started request may commit to visible state. Starting a new
//! request, resetting the slot, or dropping it aborts the previous task.

use crate::api::FetchError;
use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Display state of a fetched value
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// Nothing requested yet (or the screen was left)
    Idle,
    /// Request in flight
    Loading,
    /// Request succeeded
    Populated(T),
    /// Request failed; holds the user-facing message
    Errored(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Loadable<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Loadable::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn is_errored(&self) -> bool {
        matches!(self, Loadable::Errored(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Populated(value) => Some(value),
            _ => None,
        }
    }
}

/// Handle for polling one in-flight request
pub struct FetchHandle<T> {
    generation: u64,
    receiver: oneshot::Receiver<Result<T, FetchError>>,
    task: JoinHandle<()>,
}

impl<T> FetchHandle<T> {
    /// Try to receive the result without blocking
    pub fn try_recv(&mut self) -> Option<Result<T, FetchError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(FetchError::Transport(
                "Request ended unexpectedly".to_string(),
            ))),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn abort(&self) {
        self.task.abort();
    }
}

/// One fetchable value plus its in-flight request
pub struct FetchSlot<T> {
    /// Used in log lines only
    label: &'static str,
    state: Loadable<T>,
    generation: u64,
    pending: Option<FetchHandle<T>>,
}

impl<T> FetchSlot<T> {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: Loadable::Idle,
            generation: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    /// Generation of the most recently started request
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// Enter `Loading` for a new request and return its generation.
    ///
    /// Any previous in-flight request is aborted and can no longer commit.
    pub fn begin(&mut self) -> u64 {
        self.cancel_pending();
        self.generation += 1;
        self.state = Loadable::Loading;
        debug!("{}: starting request #{}", self.label, self.generation);
        self.generation
    }

    /// Apply a result if it belongs to the latest request.
    ///
    /// Returns `true` when visible state changed.
    pub fn commit(&mut self, generation: u64, result: Result<T, FetchError>) -> bool {
        if generation != self.generation || !self.state.is_loading() {
            warn!(
                "{}: dropping stale response #{} (current #{})",
                self.label, generation, self.generation
            );
            return false;
        }

        self.state = match result {
            Ok(value) => Loadable::Populated(value),
            Err(e) => {
                error!("{}: request #{} failed ({}): {}", self.label, generation, e.kind(), e);
                Loadable::Errored(e.to_string())
            }
        };
        true
    }

    /// Poll the in-flight request; returns `true` when state changed.
    pub fn poll(&mut self) -> bool {
        let Some(handle) = self.pending.as_mut() else {
            return false;
        };
        let Some(result) = handle.try_recv() else {
            return false;
        };
        let generation = handle.generation();
        self.pending = None;
        self.commit(generation, result)
    }

    /// Back to `Idle`, discarding any in-flight request
    pub fn reset(&mut self) {
        self.cancel_pending();
        // Bump so a result captured before the reset cannot commit later.
        self.generation += 1;
        self.state = Loadable::Idle;
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("{}: aborting request #{}", self.label, handle.generation());
            handle.abort();
        }
    }
}

impl<T: Send + 'static> FetchSlot<T> {
    /// Start `future` on `runtime` as the slot's new current request
    pub fn start<F>(&mut self, runtime: &Handle, future: F) -> u64
    where
        F: Future<Output = Result<T, FetchError>> + Send + 'static,
    {
        let generation = self.begin();
        let (sender, receiver) = oneshot::channel();

        let task = runtime.spawn(async move {
            let result = future.await;
            // Receiver is gone when the request was superseded; nothing to do.
            let _ = sender.send(result);
        });

        self.pending = Some(FetchHandle {
            generation,
            receiver,
            task,
        });
        generation
    }
}

impl<T> Drop for FetchSlot<T> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_settled<T>(slot: &mut FetchSlot<T>) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while slot.is_in_flight() && Instant::now() < deadline {
            slot.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_commit_success_and_error() {
        let mut slot: FetchSlot<u32> = FetchSlot::new("test");
        assert!(slot.state().is_idle());

        let generation = slot.begin();
        assert!(slot.state().is_loading());
        assert!(slot.commit(generation, Ok(7)));
        assert_eq!(slot.state().value(), Some(&7));

        let generation = slot.begin();
        assert!(slot.commit(generation, Err(FetchError::MissingCredential)));
        assert!(slot.state().is_errored());
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut slot: FetchSlot<&str> = FetchSlot::new("test");
        let first = slot.begin();
        let second = slot.begin();

        // Second request answers first
        assert!(slot.commit(second, Ok("second")));
        // The first one arrives late and must not overwrite
        assert!(!slot.commit(first, Ok("first")));
        assert_eq!(slot.state().value(), Some(&"second"));
    }

    #[test]
    fn test_reset_blocks_late_results() {
        let mut slot: FetchSlot<u8> = FetchSlot::new("test");
        let generation = slot.begin();
        slot.reset();
        assert!(!slot.commit(generation, Ok(1)));
        assert!(slot.state().is_idle());
    }

    #[test]
    fn test_start_runs_on_runtime() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut slot: FetchSlot<String> = FetchSlot::new("test");

        slot.start(runtime.handle(), async { Ok("done".to_string()) });
        assert!(slot.state().is_loading());

        wait_settled(&mut slot);
        assert_eq!(slot.state().value().map(String::as_str), Some("done"));
    }

    #[test]
    fn test_superseded_task_never_commits() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut slot: FetchSlot<&'static str> = FetchSlot::new("test");

        slot.start(runtime.handle(), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok("slow")
        });
        slot.start(runtime.handle(), async { Ok("fast") });

        wait_settled(&mut slot);
        std::thread::sleep(Duration::from_millis(300));
        slot.poll();
        assert_eq!(slot.state().value(), Some(&"fast"));
        assert_eq!(slot.generation(), 2);
    }
}
