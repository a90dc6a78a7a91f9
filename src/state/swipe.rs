//! Pull-to-refresh gesture tracking.
//!
//! A gesture only counts while the page is scrolled to the very top, both
//! when the finger lands and while it moves. Pulling down more than
//! [`RELOAD_THRESHOLD_PX`] requests one reload per gesture.

#[cfg(test)]
#[path = "swipe_test.rs"]
mod swipe_test;

/// Downward pull distance (CSS px) that triggers a reload.
pub const RELOAD_THRESHOLD_PX: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    Idle,
    Reload,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start_y: Option<f64>,
    fired: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A finger touched the screen at `y` with the page scrolled by `scroll_y`.
    pub fn start(&mut self, y: f64, scroll_y: f64) {
        if scroll_y > 0.0 {
            self.start_y = None;
            return;
        }
        self.start_y = Some(y);
        self.fired = false;
    }

    /// The finger moved to `y`. Upward movement counts as no pull.
    pub fn moved(&mut self, y: f64, scroll_y: f64) -> SwipeOutcome {
        if scroll_y > 0.0 || self.fired {
            return SwipeOutcome::Idle;
        }
        let Some(start_y) = self.start_y else {
            return SwipeOutcome::Idle;
        };
        let pulled = (y - start_y).max(0.0);
        if pulled > RELOAD_THRESHOLD_PX {
            self.fired = true;
            SwipeOutcome::Reload
        } else {
            SwipeOutcome::Idle
        }
    }
}
