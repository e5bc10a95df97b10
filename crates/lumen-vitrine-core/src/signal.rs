//! Signal/slot system for Lumen Vitrine.
//!
//! This module provides a type-safe signal/slot mechanism for widget change
//! notification. Widgets expose signals as public fields; hosts connect slots
//! (closures) and are invoked whenever the widget emits.
//!
//! All slots are invoked directly on the emitting thread. Lumen Vitrine runs
//! its widgets on a single cooperative control thread, so there is no queued
//! or cross-thread delivery; signals exist purely so hosts can observe state
//! changes without polling.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Example
//!
//! ```
//! use lumen_vitrine_core::Signal;
//!
//! // Create a signal that passes the new card index
//! let current_changed = Signal::<usize>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = current_changed.connect(|&index| {
//!     println!("now showing card {index}");
//! });
//!
//! // Emit the signal
//! current_changed.emit(3);
//!
//! // Disconnect when done
//! current_changed.disconnect(conn_id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with the
/// provided arguments, in the order the connection map yields them.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(usize, usize)` for multiple arguments.
///
/// # Re-entrancy
///
/// The slot list is snapshotted before invocation, so a slot may connect or
/// disconnect on the same signal it is handling. Connections made during an
/// emit are first invoked on the next emit.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: Clone + Send + 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: Clone + Send + 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let connection = Connection {
            slot: Arc::new(slot),
        };
        self.connections.lock().insert(connection)
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing. The slot list is
    /// snapshotted under the lock and invoked after releasing it, so slots
    /// may freely connect or disconnect on this same signal.
    #[tracing::instrument(skip_all, target = "lumen_vitrine_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "lumen_vitrine_core::signal", "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Arc<dyn Fn(&Args) + Send + Sync>> = {
            let connections = self.connections.lock();
            tracing::trace!(
                target: "lumen_vitrine_core::signal",
                connection_count = connections.len(),
                "emitting signal"
            );
            connections.values().map(|conn| conn.slot.clone()).collect()
        };

        for slot in slots {
            slot(&args);
        }
    }
}

// Ensure Signal is Send + Sync
static_assertions::assert_impl_all!(Signal<usize>: Send, Sync);
