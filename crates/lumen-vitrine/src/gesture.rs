//! Swipe gesture recognition.
//!
//! Two layers, mirroring how the carousel consumes touch input:
//!
//! - [`classify_swipe`] is the pure geometric classifier: given start and end
//!   points it decides whether the movement was a horizontal swipe and in
//!   which direction. Independent of any event plumbing, trivially testable.
//! - [`SwipeTracker`] is the stateful wrapper a host feeds [`TouchEvent`]s
//!   into. It also reports, during the move phase, when the drag has become
//!   horizontally dominant so the host can capture the gesture (suppress
//!   vertical scrolling underneath it).

use crate::events::{TouchEvent, TouchPhase};
use crate::geometry::Point;

/// Minimum horizontal travel for a movement to count as a swipe.
pub const DEFAULT_SWIPE_MIN_DISTANCE: f32 = 50.0;

/// Horizontal travel past which a horizontally dominant drag should be
/// captured by the carousel rather than scrolled by the host.
pub const CAPTURE_SLOP: f32 = 10.0;

/// Direction of a recognized horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved left (toward smaller x).
    Left,
    /// Finger moved right (toward larger x).
    Right,
}

/// What a [`SwipeTracker`] has to say about a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureResponse {
    /// Nothing to report.
    None,
    /// The drag is horizontally dominant; the host should capture it and
    /// stop treating it as a scroll.
    Capture,
    /// The touch ended in a recognized swipe.
    Swipe(SwipeDirection),
}

/// Classify a completed movement as a horizontal swipe.
///
/// Returns a direction only when the movement is horizontally dominant
/// (`|dx| > |dy|`) and travels strictly farther than `min_distance`.
/// Equality on either comparison classifies as `None`.
pub fn classify_swipe(start: Point, end: Point, min_distance: f32) -> Option<SwipeDirection> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > dy.abs() && dx.abs() > min_distance {
        if dx < 0.0 {
            Some(SwipeDirection::Left)
        } else {
            Some(SwipeDirection::Right)
        }
    } else {
        None
    }
}

/// Tracks one touch sequence at a time and recognizes horizontal swipes.
#[derive(Debug)]
pub struct SwipeTracker {
    /// Where the active touch started, if one is in flight.
    start: Option<Point>,
    /// Minimum travel for the end-of-touch classification.
    min_distance: f32,
}

impl SwipeTracker {
    /// Create a tracker with the given minimum swipe distance.
    pub fn new(min_distance: f32) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    /// Feed one touch event through the tracker.
    ///
    /// `Started` begins tracking (replacing any stale sequence), `Moved`
    /// may report [`GestureResponse::Capture`], `Ended` classifies and
    /// resets, `Cancelled` resets without classifying.
    pub fn process(&mut self, event: &TouchEvent) -> GestureResponse {
        match event.phase {
            TouchPhase::Started => {
                self.start = Some(event.position);
                GestureResponse::None
            }
            TouchPhase::Moved => {
                let Some(start) = self.start else {
                    return GestureResponse::None;
                };
                let dx = (event.position.x - start.x).abs();
                let dy = (event.position.y - start.y).abs();
                if dx > dy && dx > CAPTURE_SLOP {
                    GestureResponse::Capture
                } else {
                    GestureResponse::None
                }
            }
            TouchPhase::Ended => {
                let Some(start) = self.start.take() else {
                    return GestureResponse::None;
                };
                match classify_swipe(start, event.position, self.min_distance) {
                    Some(direction) => GestureResponse::Swipe(direction),
                    None => GestureResponse::None,
                }
            }
            TouchPhase::Cancelled => {
                self.start = None;
                GestureResponse::None
            }
        }
    }

    /// Whether a touch sequence is currently being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// The configured minimum swipe distance.
    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(phase: TouchPhase, x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(phase, Point::new(x, y))
    }

    #[test]
    fn test_classify_left_swipe() {
        // dx = -60, dy = +5: horizontal, past the threshold, leftward.
        let result = classify_swipe(
            Point::new(100.0, 100.0),
            Point::new(40.0, 105.0),
            DEFAULT_SWIPE_MIN_DISTANCE,
        );
        assert_eq!(result, Some(SwipeDirection::Left));
    }

    #[test]
    fn test_classify_right_swipe() {
        let result = classify_swipe(
            Point::new(100.0, 100.0),
            Point::new(160.0, 105.0),
            DEFAULT_SWIPE_MIN_DISTANCE,
        );
        assert_eq!(result, Some(SwipeDirection::Right));
    }

    #[test]
    fn test_classify_mostly_vertical() {
        // dx = 20, dy = 80: vertically dominant, no swipe.
        let result = classify_swipe(
            Point::new(100.0, 100.0),
            Point::new(120.0, 180.0),
            DEFAULT_SWIPE_MIN_DISTANCE,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_classify_too_short() {
        let result = classify_swipe(
            Point::new(100.0, 100.0),
            Point::new(60.0, 100.0),
            DEFAULT_SWIPE_MIN_DISTANCE,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_classify_boundaries_are_strict() {
        // |dx| exactly at min_distance is not a swipe.
        let result = classify_swipe(
            Point::new(100.0, 0.0),
            Point::new(150.0, 0.0),
            DEFAULT_SWIPE_MIN_DISTANCE,
        );
        assert_eq!(result, None);

        // |dx| == |dy| is not horizontally dominant.
        let result = classify_swipe(
            Point::new(0.0, 0.0),
            Point::new(80.0, 80.0),
            DEFAULT_SWIPE_MIN_DISTANCE,
        );
        assert_eq!(result, None);
    }

    #[test]
    fn test_tracker_swipe_flow() {
        let mut tracker = SwipeTracker::new(DEFAULT_SWIPE_MIN_DISTANCE);

        assert_eq!(
            tracker.process(&touch(TouchPhase::Started, 200.0, 100.0)),
            GestureResponse::None
        );
        assert!(tracker.is_tracking());

        // Small movement: not yet capturable.
        assert_eq!(
            tracker.process(&touch(TouchPhase::Moved, 195.0, 100.0)),
            GestureResponse::None
        );

        // Horizontally dominant past the slop: capture.
        assert_eq!(
            tracker.process(&touch(TouchPhase::Moved, 150.0, 103.0)),
            GestureResponse::Capture
        );

        assert_eq!(
            tracker.process(&touch(TouchPhase::Ended, 100.0, 105.0)),
            GestureResponse::Swipe(SwipeDirection::Left)
        );
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn test_tracker_vertical_drag_never_captures() {
        let mut tracker = SwipeTracker::new(DEFAULT_SWIPE_MIN_DISTANCE);

        tracker.process(&touch(TouchPhase::Started, 100.0, 100.0));
        assert_eq!(
            tracker.process(&touch(TouchPhase::Moved, 110.0, 200.0)),
            GestureResponse::None
        );
        assert_eq!(
            tracker.process(&touch(TouchPhase::Ended, 110.0, 300.0)),
            GestureResponse::None
        );
    }

    #[test]
    fn test_tracker_cancel_resets() {
        let mut tracker = SwipeTracker::new(DEFAULT_SWIPE_MIN_DISTANCE);

        tracker.process(&touch(TouchPhase::Started, 200.0, 100.0));
        tracker.process(&touch(TouchPhase::Cancelled, 100.0, 100.0));
        assert!(!tracker.is_tracking());

        // An end without a start classifies nothing.
        assert_eq!(
            tracker.process(&touch(TouchPhase::Ended, 0.0, 100.0)),
            GestureResponse::None
        );
    }

    #[test]
    fn test_tracker_moved_without_start() {
        let mut tracker = SwipeTracker::new(DEFAULT_SWIPE_MIN_DISTANCE);
        assert_eq!(
            tracker.process(&touch(TouchPhase::Moved, 50.0, 50.0)),
            GestureResponse::None
        );
    }

    #[test]
    fn test_tracker_restart_replaces_stale_sequence() {
        let mut tracker = SwipeTracker::new(DEFAULT_SWIPE_MIN_DISTANCE);

        tracker.process(&touch(TouchPhase::Started, 0.0, 0.0));
        // A new start supersedes the old one; classification measures from it.
        tracker.process(&touch(TouchPhase::Started, 200.0, 100.0));
        assert_eq!(
            tracker.process(&touch(TouchPhase::Ended, 120.0, 100.0)),
            GestureResponse::Swipe(SwipeDirection::Left)
        );
    }
}
