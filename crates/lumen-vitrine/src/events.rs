//! Input event types.
//!
//! The storefront widgets are headless: the host translates whatever input
//! system it sits on (browser events, a windowing library, test fixtures)
//! into these types and feeds them to the page driver.

use crate::geometry::Point;

/// Keyboard keys the storefront widgets react to.
///
/// A deliberately small subset: carousel navigation and card activation.
/// Anything else the host sees maps to [`Key::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow; previous card.
    ArrowLeft,
    /// Right arrow; next card.
    ArrowRight,
    /// Enter; activates the focused card.
    Enter,
    /// Space; activates the focused card.
    Space,
    /// Escape.
    Escape,
    /// Tab; focus traversal is the host's job, carried for completeness.
    Tab,
    /// Any key the widgets do not handle, with the host's raw code.
    Unknown(u16),
}

impl Key {
    /// Whether this key navigates the carousel.
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::ArrowLeft | Self::ArrowRight)
    }

    /// Whether this key activates the focused element.
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

/// Phase of a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger touched down.
    Started,
    /// The finger moved while down.
    Moved,
    /// The finger lifted.
    Ended,
    /// The system cancelled the touch (e.g. an incoming call).
    Cancelled,
}

/// A single touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Phase of the touch sequence.
    pub phase: TouchPhase,
    /// Position of the touch in logical pixels.
    pub position: Point,
}

impl TouchEvent {
    /// Create a touch event.
    pub const fn new(phase: TouchPhase, position: Point) -> Self {
        Self { phase, position }
    }
}
