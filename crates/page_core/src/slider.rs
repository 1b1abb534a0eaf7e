//! Active-slide state machine for the gallery carousel.

use std::time::Duration;

use shared::events::ViewportEvent;

use crate::scheduler::{Scheduler, TaskHandle};

/// One slide change: the index that loses the active mark and the index
/// that gains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub previous: usize,
    pub current: usize,
}

/// Owns the active index and the autoplay timer. The slide set is fixed at
/// startup and never empty (bindings reject an empty gallery), so every
/// transition wraps and none can fail.
pub struct SlideController {
    count: usize,
    active: usize,
    interval: Duration,
    autoplay: Option<TaskHandle>,
}

impl SlideController {
    pub fn new(count: usize, interval: Duration) -> Self {
        Self {
            count,
            active: 0,
            interval,
            autoplay: None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn slide_count(&self) -> usize {
        self.count
    }

    pub fn next(&mut self) -> SlideTransition {
        self.show((self.active + 1) % self.count)
    }

    pub fn previous(&mut self) -> SlideTransition {
        self.show((self.active + self.count - 1) % self.count)
    }

    /// Direct jump from an indicator press. Indicators correspond one-to-one
    /// with slides, so an out-of-range index is a wiring bug, not input.
    pub fn go_to(&mut self, index: usize) -> SlideTransition {
        debug_assert!(index < self.count);
        self.show(index)
    }

    fn show(&mut self, index: usize) -> SlideTransition {
        let previous = self.active;
        self.active = index;
        SlideTransition {
            previous,
            current: index,
        }
    }

    /// Starts the recurring tick. Always cancels a live timer first so two
    /// back-to-back starts cannot leave duplicate timers ticking.
    pub fn start_autoplay(&mut self, scheduler: &dyn Scheduler) {
        self.stop_autoplay();
        self.autoplay = Some(scheduler.repeat(self.interval, ViewportEvent::AutoplayTick));
    }

    pub fn stop_autoplay(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            handle.cancel();
        }
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }
}

#[cfg(test)]
#[path = "tests/slider_tests.rs"]
mod tests;
