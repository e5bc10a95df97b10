//! Transition timing published to hosts.
//!
//! The widgets never animate anything themselves; they publish
//! [`TransitionSpec`]s alongside their state changes so the host's render
//! layer can drive whatever animation system it has. A spec is pure data:
//! a duration and an easing curve, with a helper to sample eased progress.

use std::time::Duration;

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Quadratic ease-in-out (smooth start and end).
    EaseInOut,
}

/// Apply an easing curve to a progress value.
///
/// Input is clamped to `0.0..=1.0`.
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
            }
        }
    }
}

/// Timing for one enter/leave/pulse transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionSpec {
    /// How long the transition runs.
    pub duration: Duration,
    /// The easing curve applied over that duration.
    pub easing: Easing,
}

/// Items leaving the visible set fade out over 300ms.
pub const FADE_OUT: TransitionSpec =
    TransitionSpec::new(Duration::from_millis(300), Easing::EaseOut);

/// Items entering the visible set fade in over 400ms.
pub const FADE_IN: TransitionSpec =
    TransitionSpec::new(Duration::from_millis(400), Easing::EaseOut);

/// Footer header and cards slide in over 400ms.
pub const FOOTER_ENTRY: TransitionSpec =
    TransitionSpec::new(Duration::from_millis(400), Easing::EaseInOut);

/// Card press feedback pulses for 200ms.
pub const PRESS_PULSE: TransitionSpec =
    TransitionSpec::new(Duration::from_millis(200), Easing::Linear);

impl TransitionSpec {
    /// Create a transition spec.
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A zero-duration spec that completes immediately.
    ///
    /// Used when the user prefers reduced motion.
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }

    /// Eased progress at the given elapsed time.
    ///
    /// Returns 1.0 at or after the end; zero-duration specs are always
    /// complete.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        ease(self.easing, t)
    }

    /// Whether the transition has finished at the given elapsed time.
    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
