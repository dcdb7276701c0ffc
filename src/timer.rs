//! Browser timers for the core `Scheduler`.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use todo_core::Scheduler;

/// Runs tasks on `setTimeout`; timers are never cancelled
#[derive(Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }
}
