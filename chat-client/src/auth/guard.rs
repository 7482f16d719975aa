//! # Submission Guard
//!
//! At-most-one in-flight invocation of a user action. While an action is
//! pending, further triggers are dropped: the action closure is not called,
//! nothing is queued, no error is raised. The guard returns to idle when the
//! action settles, whether it succeeded, failed, or panicked.
//!
//! The pending flag doubles as the UI's rate-limit signal (the request-code
//! button reads "Sent" while its guard is pending). There is no timeout: an
//! action that never settles keeps its guard pending for good, so wrapped
//! actions must always resolve or fail.
//!
//! ```rust
//! use chat_client::auth::guard::SubmissionGuard;
//!
//! # tokio_test_block(async {
//! let guard = SubmissionGuard::new("submit");
//! assert_eq!(guard.run(|| async { 42 }).await, Some(42));
//! assert!(!guard.is_pending());
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

/// Observable guard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Idle,
    Pending,
}

/// Reusable in-flight guard. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    name: &'static str,
    pending: Arc<AtomicBool>,
}

/// Proof that the guard is held. Dropping it returns the guard to idle.
#[derive(Debug)]
#[must_use = "the guard is released as soon as the permit is dropped"]
pub struct PendingPermit {
    name: &'static str,
    pending: Arc<AtomicBool>,
}

impl Drop for PendingPermit {
    fn drop(&mut self) {
        self.pending.store(false, Ordering::Release);
        tracing::trace!(guard = self.name, "Guard released");
    }
}

impl SubmissionGuard {
    /// `name` only shows up in logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            pending: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    pub fn state(&self) -> GuardState {
        if self.is_pending() {
            GuardState::Pending
        } else {
            GuardState::Idle
        }
    }

    /// Move idle -> pending. `None` when an action is already in flight.
    pub fn try_acquire(&self) -> Option<PendingPermit> {
        match self
            .pending
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        {
            Ok(_) => {
                tracing::trace!(guard = self.name, "Guard acquired");
                Some(PendingPermit {
                    name: self.name,
                    pending: Arc::clone(&self.pending),
                })
            }
            Err(_) => {
                tracing::debug!(guard = self.name, "Trigger suppressed: action already in flight");
                None
            }
        }
    }

    /// Run `action` to completion in the caller's task.
    ///
    /// Returns `None` without calling `action` if the guard is pending.
    pub async fn run<F, Fut, T>(&self, action: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let _permit = self.try_acquire()?;
        Some(action().await)
    }

    /// Run `action` as a tokio task, holding the guard until the task ends.
    ///
    /// Returns `None` without calling `action` if the guard is pending.
    /// Must be called from within a tokio runtime.
    pub fn spawn<F, Fut, T>(&self, action: F) -> Option<JoinHandle<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let permit = self.try_acquire()?;
        let future = action();
        Some(tokio::spawn(async move {
            let _permit = permit;
            future.await
        }))
    }
}
