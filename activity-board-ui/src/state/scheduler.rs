//! Browser timers for the controller's debounce and auto-hide.

use activity_board::{Scheduler, TimerHandle};
use futures_util::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;
use std::time::Duration;

/// Scheduler backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

/// Pending `setTimeout`; dropping it clears the timeout
pub struct GlooTimer(Timeout);

impl TimerHandle for GlooTimer {
    fn cancel(self) {
        drop(self.0);
    }
}

impl Scheduler for GlooScheduler {
    type Handle = GlooTimer;

    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) -> GlooTimer {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        GlooTimer(Timeout::new(millis, move || {
            wasm_bindgen_futures::spawn_local(task);
        }))
    }
}
