//! Debounced notification built on the timer system.
//!
//! Viewport resize events arrive in bursts while the user drags a window
//! edge or rotates a device. A [`Debouncer`] coalesces such a burst into a
//! single timer fire: every [`poke`](Debouncer::poke) cancels the pending
//! one-shot and arms a fresh one, so only the trailing edge of the burst is
//! ever observed.
//!
//! ```
//! use std::time::Duration;
//! use lumen_vitrine_core::{Debouncer, TimerManager};
//!
//! let mut timers = TimerManager::new();
//! let mut debouncer = Debouncer::new(Duration::from_millis(250));
//!
//! debouncer.poke(&mut timers);
//! debouncer.poke(&mut timers);
//! debouncer.poke(&mut timers);
//!
//! // Only the last poke is still pending.
//! assert_eq!(timers.active_count(), 1);
//! ```

use std::time::Duration;

use crate::timer::{TimerId, TimerManager};

/// Coalesces a burst of notifications into a single trailing timer fire.
#[derive(Debug)]
pub struct Debouncer {
    /// Quiet period required before the pending fire is delivered.
    delay: Duration,
    /// The currently armed one-shot, if any.
    pending: Option<TimerId>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a notification: cancel any pending fire and arm a fresh one.
    pub fn poke(&mut self, timers: &mut TimerManager) {
        let id = timers.restart_one_shot(self.pending.take(), self.delay);
        tracing::trace!(target: "lumen_vitrine_core::debounce", ?id, "debounce re-armed");
        self.pending = Some(id);
    }

    /// Check whether a fired timer is this debouncer's pending fire.
    ///
    /// Returns `true` exactly once per armed timer; the pending handle is
    /// consumed on a match.
    pub fn matches(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Drop the pending fire, if any.
    pub fn cancel(&mut self, timers: &mut TimerManager) {
        if let Some(id) = self.pending.take() {
            let _ = timers.stop(id);
        }
    }

    /// Whether a fire is currently pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}
