//! Deferred work
//!
//! The board only ever needs "run this later, unless I change my mind":
//! the search debounce and the message auto-hide. A [`TimerSlot`] holds at
//! most one pending task and replaces it on every reschedule.
//!
//! Cancelling stops a task that has not fired yet. Once a task has fired,
//! whatever it started (a fetch, say) runs to completion.

use futures_util::future::LocalBoxFuture;
use std::cell::RefCell;
use std::time::Duration;

/// Handle to a scheduled task
pub trait TimerHandle {
    /// Prevent the task from firing. No-op if it already fired.
    fn cancel(self);
}

/// Runs a future after a delay on the current (single) thread
pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) -> Self::Handle;
}

/// At most one pending task; scheduling replaces the previous one
pub struct TimerSlot<T: Scheduler> {
    scheduler: T,
    pending: RefCell<Option<T::Handle>>,
}

impl<T: Scheduler> TimerSlot<T> {
    pub fn new(scheduler: T) -> Self {
        Self {
            scheduler,
            pending: RefCell::new(None),
        }
    }

    /// Cancel whatever is pending and schedule `task` after `delay`
    pub fn replace(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) {
        self.clear();
        let handle = self.scheduler.schedule(delay, task);
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Cancel whatever is pending
    pub fn clear(&self) {
        let previous = self.pending.borrow_mut().take();
        if let Some(handle) = previous {
            handle.cancel();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use self::tokio_timer::{TokioScheduler, TokioTimer};

#[cfg(not(target_arch = "wasm32"))]
mod tokio_timer {
    use super::*;
    use tokio::task::JoinHandle;

    /// Scheduler backed by tokio's local task set.
    ///
    /// Must be used from inside a [`tokio::task::LocalSet`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioScheduler;

    /// Aborting only hits the sleep; a fired task lives in its own local task
    #[derive(Debug)]
    pub struct TokioTimer(JoinHandle<()>);

    impl TimerHandle for TokioTimer {
        fn cancel(self) {
            self.0.abort();
        }
    }

    impl Scheduler for TokioScheduler {
        type Handle = TokioTimer;

        fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) -> TokioTimer {
            TokioTimer(tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                tokio::task::spawn_local(task);
            }))
        }
    }
}
