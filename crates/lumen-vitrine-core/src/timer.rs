//! Timer system for Lumen Vitrine.
//!
//! Provides one-shot and repeating timers that the host event layer polls.
//! Widgets never spawn threads for their timing; they hold `TimerId`s handed
//! out by a [`TimerManager`] owned by the host, and react when the host
//! reports a fire.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{SlotMap, new_key_type};

use crate::error::{Result, VitrineError};

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval for repeating timers.
    interval: Duration,
    /// The kind of timer.
    kind: TimerKind,
    /// Whether this timer is active.
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers for a page.
///
/// The host event layer owns the single mutable instance, polls
/// [`time_until_next`](Self::time_until_next) for its wakeup deadline, and
/// drains [`process_expired`](Self::process_expired) on wakeup.
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.start(duration, TimerKind::OneShot)
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs after `interval` duration.
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.start(interval, TimerKind::Repeating)
    }

    fn start(&mut self, interval: Duration, kind: TimerKind) -> TimerId {
        let next_fire = Instant::now() + interval;

        let data = TimerData {
            next_fire,
            interval,
            kind,
            active: true,
        };

        let id = self.timers.insert(data);
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });

        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns `Ok(())` if the timer was found and removed, or an error if not found.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if let Some(timer) = self.timers.get_mut(id) {
            timer.active = false;
            self.timers.remove(id);
            Ok(())
        } else {
            Err(VitrineError::InvalidTimerId)
        }
    }

    /// Cancel a possibly stale one-shot handle and arm a fresh one.
    ///
    /// An `id` that has already fired (or was never started) is tolerated;
    /// the guarantee is that at most one of the old and new timers is ever
    /// pending afterwards.
    pub fn restart_one_shot(&mut self, id: Option<TimerId>, duration: Duration) -> TimerId {
        if let Some(id) = id {
            let _ = self.stop(id);
        }
        self.start_one_shot(duration)
    }

    /// Cancel a possibly stale repeating handle and arm a fresh one.
    ///
    /// Same tolerance as [`restart_one_shot`](Self::restart_one_shot): the old
    /// handle never fires again, and exactly one new timer is pending.
    pub fn restart_repeating(&mut self, id: Option<TimerId>, interval: Duration) -> TimerId {
        if let Some(id) = id {
            let _ = self.stop(id);
        }
        self.start_repeating(interval)
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        // Clean up any inactive timers from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            let now = Instant::now();
            if entry.fire_time > now {
                entry.fire_time - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Process all timers that should fire now.
    ///
    /// Returns the IDs of timers that fired, in fire-time order. One-shot
    /// timers are removed; repeating timers are re-armed for their next
    /// interval. Each timer fires at most once per call, so a zero-interval
    /// repeating timer yields once and is due again on the next poll.
    #[tracing::instrument(skip(self), target = "lumen_vitrine_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<TimerId> {
        let now = Instant::now();
        let mut fired = Vec::new();

        while let Some(entry) = self.queue.peek() {
            // Check if this timer should fire.
            if entry.fire_time > now {
                break;
            }

            // Re-armed during this pass; leave it for the next poll.
            if fired.contains(&entry.id) {
                break;
            }

            let Some(entry) = self.queue.pop() else {
                break;
            };
            let id = entry.id;

            // Skip stale entries whose timer was stopped or restarted.
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };

            if !timer.active {
                continue;
            }

            // Timer has fired.
            tracing::trace!(target: "lumen_vitrine_core::timer", ?id, "timer fired");
            fired.push(id);

            match timer.kind {
                TimerKind::OneShot => {
                    // One-shot timers are removed after firing.
                    timer.active = false;
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    // Schedule the next fire.
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        fired
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

// Ensure TimerManager is Send + Sync
static_assertions::assert_impl_all!(TimerManager: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::ZERO);

        assert!(timers.is_active(id));
        assert_eq!(timers.process_expired(), vec![id]);

        // Gone after firing.
        assert!(!timers.is_active(id));
        assert!(timers.process_expired().is_empty());
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_stop_before_fire() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::ZERO);

        assert!(timers.stop(id).is_ok());
        assert!(timers.process_expired().is_empty());

        // Stopping again reports the stale handle.
        assert_eq!(timers.stop(id), Err(VitrineError::InvalidTimerId));
    }

    #[test]
    fn test_stop_unknown_id() {
        let mut timers = TimerManager::new();
        assert_eq!(
            timers.stop(TimerId::default()),
            Err(VitrineError::InvalidTimerId)
        );
    }

    #[test]
    fn test_repeating_rearms() {
        let mut timers = TimerManager::new();
        let id = timers.start_repeating(Duration::ZERO);

        assert_eq!(timers.process_expired(), vec![id]);
        assert!(timers.is_active(id));
        assert_eq!(timers.process_expired(), vec![id]);

        assert!(timers.stop(id).is_ok());
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_restart_cancels_pending() {
        let mut timers = TimerManager::new();
        let first = timers.start_one_shot(Duration::ZERO);
        let second = timers.restart_one_shot(Some(first), Duration::ZERO);

        assert_ne!(first, second);
        assert_eq!(timers.active_count(), 1);
        assert_eq!(timers.process_expired(), vec![second]);
    }

    #[test]
    fn test_restart_repeating_never_duplicates() {
        let mut timers = TimerManager::new();
        let mut id = timers.start_repeating(Duration::ZERO);
        for _ in 0..10 {
            id = timers.restart_repeating(Some(id), Duration::ZERO);
        }

        assert_eq!(timers.active_count(), 1);
        assert_eq!(timers.process_expired(), vec![id]);
    }

    #[test]
    fn test_restart_with_no_previous_handle() {
        let mut timers = TimerManager::new();
        let id = timers.restart_repeating(None, Duration::ZERO);
        assert!(timers.is_active(id));
        assert_eq!(timers.active_count(), 1);
    }

    #[test]
    fn test_fire_order_by_deadline() {
        let mut timers = TimerManager::new();
        let later = timers.start_one_shot(Duration::from_millis(5));
        let sooner = timers.start_one_shot(Duration::ZERO);

        std::thread::sleep(Duration::from_millis(10));
        assert_eq!(timers.process_expired(), vec![sooner, later]);
    }

    #[test]
    fn test_time_until_next() {
        let mut timers = TimerManager::new();
        assert_eq!(timers.time_until_next(), None);

        let id = timers.start_one_shot(Duration::from_millis(50));
        let remaining = timers.time_until_next();
        assert!(remaining.is_some_and(|d| d <= Duration::from_millis(50)));

        timers.stop(id).unwrap();
        assert_eq!(timers.time_until_next(), None);
    }

    #[test]
    fn test_expired_timer_reports_zero_wait() {
        let mut timers = TimerManager::new();
        timers.start_one_shot(Duration::ZERO);
        assert_eq!(timers.time_until_next(), Some(Duration::ZERO));
    }
}
