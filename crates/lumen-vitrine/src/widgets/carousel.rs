//! Product carousel widget.
//!
//! A horizontal track of product cards, windowed to however many fit the
//! viewport. The offset into the track is a card index clamped to
//! `0..=total - cards_per_view`; navigation moves one card at a time from
//! button clicks, arrow keys, or horizontal swipes.
//!
//! As with the rotator, the math lives in a pure state struct
//! ([`CarouselState`]) and the input/signal wiring in the widget
//! ([`ProductCarousel`]).
//!
//! # Signals
//!
//! - `current_changed(usize)`: the track offset moved
//! - `cards_per_view_changed(usize)`: a resize changed how many cards fit

use lumen_vitrine_core::Signal;

use crate::events::{Key, TouchEvent};
use crate::gesture::{GestureResponse, SwipeDirection, SwipeTracker};
use crate::viewport::cards_per_view;

/// Direction of a single navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// One card toward the start of the track.
    Previous,
    /// One card toward the end of the track.
    Next,
}

/// Clamp a track offset into `0..=max(0, total - visible)`.
pub fn clamp_index(index: usize, total: usize, visible: usize) -> usize {
    index.min(total.saturating_sub(visible))
}

/// Snapshot of the carousel position, for host diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselStatus {
    /// Current track offset.
    pub current_index: usize,
    /// Number of cards in the track.
    pub total_cards: usize,
    /// Cards visible at once.
    pub cards_per_view: usize,
    /// Largest reachable offset.
    pub max_index: usize,
}

/// Pure carousel state: track size, window size, current offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    /// Number of cards in the track, fixed per instance.
    total: usize,
    /// Cards visible at once, derived from the viewport width.
    cards_per_view: usize,
    /// Current offset, always within `0..=max_index`.
    current: usize,
}

impl CarouselState {
    /// Create state for a track of `total` cards at an initial width.
    pub fn new(total: usize, width: f32) -> Self {
        Self {
            total,
            cards_per_view: cards_per_view(width),
            current: 0,
        }
    }

    /// Step one card in the given direction, clamped at both ends.
    ///
    /// Returns `true` if the offset changed.
    pub fn advance(&mut self, direction: NavDirection) -> bool {
        let next = match direction {
            NavDirection::Previous => self.current.saturating_sub(1),
            NavDirection::Next => clamp_index(self.current + 1, self.total, self.cards_per_view),
        };
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Jump to an offset, clamped into range.
    ///
    /// Returns `true` if the offset changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        let next = clamp_index(index, self.total, self.cards_per_view);
        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// React to a (debounced) viewport resize.
    ///
    /// Recomputes cards-per-view and resets the offset to 0 unconditionally,
    /// even when the count did not change.
    pub fn on_resize(&mut self, width: f32) {
        self.cards_per_view = cards_per_view(width);
        self.current = 0;
    }

    /// Current track offset.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of cards in the track.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Cards visible at once.
    pub fn cards_per_view(&self) -> usize {
        self.cards_per_view
    }

    /// Largest reachable offset.
    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.cards_per_view)
    }

    /// Horizontal translation of the track, as a percentage of one viewport.
    ///
    /// Each card occupies `100 / cards_per_view` percent; the track shifts
    /// left by one card width per offset step.
    pub fn track_offset_percent(&self) -> f32 {
        -(self.current as f32 * 100.0 / self.cards_per_view as f32)
    }

    /// Snapshot the current position.
    pub fn status(&self) -> CarouselStatus {
        CarouselStatus {
            current_index: self.current,
            total_cards: self.total,
            cards_per_view: self.cards_per_view,
            max_index: self.max_index(),
        }
    }
}

/// The product carousel widget: carousel state plus input handling.
///
/// The carousel has no timers; it moves only on discrete input. Swipes are
/// recognized by an internal [`SwipeTracker`]: a leftward swipe advances to
/// the next card, a rightward swipe to the previous one.
pub struct ProductCarousel {
    /// Position state machine.
    state: CarouselState,
    /// Swipe recognizer for touch input.
    tracker: SwipeTracker,
    /// Signal emitted when the track offset changes.
    pub current_changed: Signal<usize>,
    /// Signal emitted when a resize changes the visible card count.
    pub cards_per_view_changed: Signal<usize>,
}

impl ProductCarousel {
    /// Create a carousel for a track of `total` cards at an initial width.
    pub fn new(total: usize, width: f32, min_swipe_distance: f32) -> Self {
        let state = CarouselState::new(total, width);
        tracing::debug!(
            target: "lumen_vitrine::carousel",
            total,
            cards_per_view = state.cards_per_view(),
            "carousel initialized"
        );
        Self {
            state,
            tracker: SwipeTracker::new(min_swipe_distance),
            current_changed: Signal::new(),
            cards_per_view_changed: Signal::new(),
        }
    }

    /// Step one card, emitting `current_changed` if the offset moved.
    pub fn advance(&mut self, direction: NavDirection) {
        if self.state.advance(direction) {
            tracing::debug!(
                target: "lumen_vitrine::carousel",
                ?direction,
                current = self.state.current_index(),
                "carousel moved"
            );
            self.current_changed.emit(self.state.current_index());
        }
    }

    /// Jump to an offset, emitting `current_changed` if it moved.
    pub fn go_to(&mut self, index: usize) {
        if self.state.go_to(index) {
            self.current_changed.emit(self.state.current_index());
        }
    }

    /// Handle a key press. Returns `true` when the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => {
                self.advance(NavDirection::Previous);
                true
            }
            Key::ArrowRight => {
                self.advance(NavDirection::Next);
                true
            }
            _ => false,
        }
    }

    /// Feed a touch event through the swipe recognizer.
    ///
    /// Returns `true` when the host should capture the gesture (suppress
    /// scrolling underneath the track). A completed swipe navigates.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        match self.tracker.process(event) {
            GestureResponse::Capture => true,
            GestureResponse::Swipe(SwipeDirection::Left) => {
                self.advance(NavDirection::Next);
                false
            }
            GestureResponse::Swipe(SwipeDirection::Right) => {
                self.advance(NavDirection::Previous);
                false
            }
            GestureResponse::None => false,
        }
    }

    /// Apply a (debounced) viewport resize.
    ///
    /// Emits `cards_per_view_changed` when the count changed and
    /// `current_changed` when the reset actually moved the offset.
    pub fn handle_resize(&mut self, width: f32) {
        let old_count = self.state.cards_per_view();
        let old_current = self.state.current_index();
        self.state.on_resize(width);

        if self.state.cards_per_view() != old_count {
            tracing::debug!(
                target: "lumen_vitrine::carousel",
                cards_per_view = self.state.cards_per_view(),
                "cards per view changed"
            );
            self.cards_per_view_changed.emit(self.state.cards_per_view());
        }
        if self.state.current_index() != old_current {
            self.current_changed.emit(self.state.current_index());
        }
    }

    /// Current track offset.
    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    /// Number of cards in the track.
    pub fn total(&self) -> usize {
        self.state.total()
    }

    /// Cards visible at once.
    pub fn cards_per_view(&self) -> usize {
        self.state.cards_per_view()
    }

    /// Largest reachable offset.
    pub fn max_index(&self) -> usize {
        self.state.max_index()
    }

    /// Horizontal translation of the track, as a percentage.
    pub fn track_offset_percent(&self) -> f32 {
        self.state.track_offset_percent()
    }

    /// Snapshot the current position.
    pub fn status(&self) -> CarouselStatus {
        self.state.status()
    }
}

// Ensure ProductCarousel is Send + Sync
static_assertions::assert_impl_all!(ProductCarousel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::TouchPhase;
    use crate::gesture::DEFAULT_SWIPE_MIN_DISTANCE;
    use crate::geometry::Point;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn assert_index_invariant(state: &CarouselState) {
        assert!(state.current_index() <= state.max_index());
    }

    fn touch(phase: TouchPhase, x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(phase, Point::new(x, y))
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(0, 12, 5), 0);
        assert_eq!(clamp_index(7, 12, 5), 7);
        assert_eq!(clamp_index(8, 12, 5), 7);
        assert_eq!(clamp_index(100, 12, 5), 7);
        // Fewer cards than the window: pinned at 0.
        assert_eq!(clamp_index(3, 4, 5), 0);
    }

    #[test]
    fn test_next_caps_at_max_index() {
        // 12 cards, 5 visible: three steps reach 3, the max is 7.
        let mut state = CarouselState::new(12, 1920.0);
        assert_eq!(state.cards_per_view(), 5);

        for expected in 1..=3 {
            assert!(state.advance(NavDirection::Next));
            assert_eq!(state.current_index(), expected);
        }

        for _ in 0..10 {
            state.advance(NavDirection::Next);
            assert_index_invariant(&state);
        }
        assert_eq!(state.current_index(), 7);
        assert!(!state.advance(NavDirection::Next));
    }

    #[test]
    fn test_previous_floors_at_zero() {
        let mut state = CarouselState::new(12, 1920.0);
        assert!(!state.advance(NavDirection::Previous));
        assert_eq!(state.current_index(), 0);

        state.go_to(2);
        assert!(state.advance(NavDirection::Previous));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut state = CarouselState::new(12, 1920.0);
        assert!(state.go_to(100));
        assert_eq!(state.current_index(), 7);

        assert!(state.go_to(0));
        assert_eq!(state.current_index(), 0);
        assert!(!state.go_to(0));
    }

    #[test]
    fn test_resize_resets_unconditionally() {
        let mut state = CarouselState::new(12, 1920.0);
        state.go_to(5);

        // Same breakpoint: still resets to 0.
        state.on_resize(1800.0);
        assert_eq!(state.cards_per_view(), 5);
        assert_eq!(state.current_index(), 0);

        state.go_to(5);
        state.on_resize(400.0);
        assert_eq!(state.cards_per_view(), 1);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_invariant_over_mixed_operations() {
        let mut state = CarouselState::new(7, 1024.0);
        let widths = [320.0, 700.0, 1300.0, 1100.0];

        for step in 0..40 {
            match step % 4 {
                0 => {
                    state.advance(NavDirection::Next);
                }
                1 => {
                    state.go_to(step);
                }
                2 => {
                    state.advance(NavDirection::Previous);
                }
                _ => {
                    state.on_resize(widths[(step / 4) % widths.len()]);
                }
            }
            assert_index_invariant(&state);
        }
    }

    #[test]
    fn test_track_offset_percent() {
        let mut state = CarouselState::new(12, 1920.0);
        assert_eq!(state.track_offset_percent(), 0.0);

        state.go_to(3);
        assert_eq!(state.track_offset_percent(), -60.0);

        state.on_resize(400.0);
        state.go_to(2);
        assert_eq!(state.track_offset_percent(), -200.0);
    }

    #[test]
    fn test_status_snapshot() {
        let mut state = CarouselState::new(12, 1920.0);
        state.go_to(4);
        assert_eq!(
            state.status(),
            CarouselStatus {
                current_index: 4,
                total_cards: 12,
                cards_per_view: 5,
                max_index: 7,
            }
        );
    }

    #[test]
    fn test_widget_keys_navigate() {
        let mut carousel = ProductCarousel::new(12, 1920.0, DEFAULT_SWIPE_MIN_DISTANCE);

        assert!(carousel.handle_key(Key::ArrowRight));
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.handle_key(Key::ArrowLeft));
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.handle_key(Key::Escape));
    }

    #[test]
    fn test_widget_swipe_left_advances() {
        let mut carousel = ProductCarousel::new(12, 1920.0, DEFAULT_SWIPE_MIN_DISTANCE);

        carousel.handle_touch(&touch(TouchPhase::Started, 200.0, 100.0));
        // Horizontal drag: host should capture.
        assert!(carousel.handle_touch(&touch(TouchPhase::Moved, 150.0, 102.0)));
        carousel.handle_touch(&touch(TouchPhase::Ended, 120.0, 105.0));

        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn test_widget_swipe_right_retreats() {
        let mut carousel = ProductCarousel::new(12, 1920.0, DEFAULT_SWIPE_MIN_DISTANCE);
        carousel.go_to(3);

        carousel.handle_touch(&touch(TouchPhase::Started, 100.0, 100.0));
        carousel.handle_touch(&touch(TouchPhase::Ended, 180.0, 100.0));

        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn test_widget_vertical_drag_is_ignored() {
        let mut carousel = ProductCarousel::new(12, 1920.0, DEFAULT_SWIPE_MIN_DISTANCE);

        carousel.handle_touch(&touch(TouchPhase::Started, 100.0, 100.0));
        assert!(!carousel.handle_touch(&touch(TouchPhase::Moved, 105.0, 200.0)));
        carousel.handle_touch(&touch(TouchPhase::Ended, 110.0, 300.0));

        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_widget_emits_signals() {
        let mut carousel = ProductCarousel::new(12, 1920.0, DEFAULT_SWIPE_MIN_DISTANCE);

        let moves = Arc::new(AtomicUsize::new(0));
        let counts = Arc::new(AtomicUsize::new(0));
        let moves_clone = moves.clone();
        let counts_clone = counts.clone();
        carousel.current_changed.connect(move |_| {
            moves_clone.fetch_add(1, Ordering::SeqCst);
        });
        carousel.cards_per_view_changed.connect(move |_| {
            counts_clone.fetch_add(1, Ordering::SeqCst);
        });

        carousel.advance(NavDirection::Next);
        carousel.advance(NavDirection::Previous);
        // At the floor: no movement, no emit.
        carousel.advance(NavDirection::Previous);
        assert_eq!(moves.load(Ordering::SeqCst), 2);

        carousel.handle_resize(400.0);
        assert_eq!(counts.load(Ordering::SeqCst), 1);
        // Offset was already 0; the reset does not re-emit.
        assert_eq!(moves.load(Ordering::SeqCst), 2);

        // Same breakpoint: no count change.
        carousel.handle_resize(450.0);
        assert_eq!(counts.load(Ordering::SeqCst), 1);
    }
}
