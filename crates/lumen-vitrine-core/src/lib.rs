//! Core systems for Lumen Vitrine.
//!
//! This crate provides the host-agnostic mechanism underneath the Lumen
//! Vitrine storefront widgets:
//!
//! - **Signal/Slot System**: Type-safe change notification for widget state
//! - **Timers**: One-shot and repeating timers, polled by the host event layer
//! - **Debouncing**: Burst coalescing for noisy notifications such as resizes
//!
//! Everything here runs on a single cooperative control thread. The host owns
//! one [`TimerManager`], asks it for the next wakeup deadline, and drains
//! expired timers back into the widgets; nothing in this crate spawns threads
//! or blocks.
//!
//! # Signal/Slot Example
//!
//! ```
//! use lumen_vitrine_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::time::Duration;
//! use lumen_vitrine_core::TimerManager;
//!
//! let mut timers = TimerManager::new();
//! let tick = timers.start_repeating(Duration::from_secs(3));
//!
//! // The host sleeps until the next deadline, then drains fires.
//! let _deadline = timers.time_until_next();
//! for id in timers.process_expired() {
//!     if id == tick {
//!         // advance whatever the timer drives
//!     }
//! }
//! ```

mod debounce;
mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use debounce::Debouncer;
pub use error::{Result, VitrineError};
pub use signal::{ConnectionId, Signal};
pub use timer::{TimerId, TimerKind, TimerManager};
