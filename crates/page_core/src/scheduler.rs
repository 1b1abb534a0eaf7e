//! Cancellable timers delivered as viewport events.

use std::time::Duration;

use crossbeam_channel::{Sender, TrySendError};
use shared::events::ViewportEvent;
use tokio::runtime::Handle;

/// Handle to one scheduled task. Cancelling consumes the handle; a timer
/// that is never cancelled keeps firing until its event queue closes.
pub struct TaskHandle {
    cancel: Box<dyn FnOnce() + Send>,
    finished: Box<dyn Fn() -> bool + Send>,
}

impl TaskHandle {
    pub fn from_fn(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self::from_parts(cancel, || false)
    }

    pub fn from_parts(
        cancel: impl FnOnce() + Send + 'static,
        finished: impl Fn() -> bool + Send + 'static,
    ) -> Self {
        Self {
            cancel: Box::new(cancel),
            finished: Box::new(finished),
        }
    }

    /// True once the backing task has stopped on its own.
    pub fn is_finished(&self) -> bool {
        (self.finished)()
    }

    pub fn cancel(self) {
        (self.cancel)();
    }
}

/// Seam between the state machines and real time. Production code uses
/// [`TokioScheduler`]; tests substitute a fake that only counts handles.
pub trait Scheduler {
    /// Schedules `event` to be emitted every `every` until cancelled.
    fn repeat(&self, every: Duration, event: ViewportEvent) -> TaskHandle;
}

/// Scheduler backed by the host's background tokio runtime. Each task is a
/// spawned interval loop whose only observable effect is sending events
/// into the page's queue.
pub struct TokioScheduler {
    runtime: Handle,
    events: Sender<ViewportEvent>,
}

impl TokioScheduler {
    pub fn new(runtime: Handle, events: Sender<ViewportEvent>) -> Self {
        Self { runtime, events }
    }
}

impl Scheduler for TokioScheduler {
    fn repeat(&self, every: Duration, event: ViewportEvent) -> TaskHandle {
        let events = self.events.clone();
        let task = self.runtime.spawn(async move {
            // interval() fires immediately; the first tick belongs a full
            // period after scheduling.
            let start = tokio::time::Instant::now() + every;
            let mut ticker = tokio::time::interval_at(start, every);
            loop {
                ticker.tick().await;
                match events.try_send(event.clone()) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::warn!(event = ?event, "event queue full; dropping timer event");
                    }
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        });
        let abort = task.abort_handle();
        TaskHandle::from_parts(move || abort.abort(), move || task.is_finished())
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
