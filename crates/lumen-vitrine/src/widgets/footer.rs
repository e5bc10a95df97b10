//! Footer reveal and feature-card interactions.
//!
//! The footer block above the page footer holds a header and a row of
//! feature cards. Two behaviors live here:
//!
//! - [`FooterReveal`]: a scroll-reveal latch. The first time enough of the
//!   footer scrolls into view, it publishes a staggered entry schedule
//!   (header first, then each card with an increasing delay) and never
//!   fires again.
//! - [`FeatureCard`]: per-card hover/press/focus state with cancellable
//!   timers. Hovering arms a short delay before the icon dot accents;
//!   leaving before the delay elapses cancels it. Pressing (click, Enter,
//!   Space) runs a fixed-length pulse.

use std::time::Duration;

use lumen_vitrine_core::{TimerId, TimerManager};

use crate::animation::{Easing, TransitionSpec};
use crate::config::FooterConfig;
use crate::events::Key;

/// What a reveal-schedule entry animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    /// The footer header section.
    Header,
    /// The feature card at this index.
    Card(usize),
}

/// One element of the staggered footer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealEntry {
    /// What to animate.
    pub target: RevealTarget,
    /// How long after the reveal to start.
    pub delay: Duration,
    /// The entry transition.
    pub spec: TransitionSpec,
}

/// The full staggered entry schedule, header first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    /// Entries in start order.
    pub entries: Vec<RevealEntry>,
}

/// Scroll-reveal latch for the footer block.
#[derive(Debug)]
pub struct FooterReveal {
    /// Footer settings (threshold, stagger, durations).
    config: FooterConfig,
    /// Whether the reveal has already fired.
    revealed: bool,
}

impl FooterReveal {
    /// Create an unrevealed latch.
    pub fn new(config: FooterConfig) -> Self {
        Self {
            config,
            revealed: false,
        }
    }

    /// Report how much of the footer is visible (0.0 to 1.0).
    ///
    /// Returns the entry schedule exactly once, the first time the ratio
    /// meets the configured threshold.
    pub fn observe(&mut self, visible_ratio: f32) -> Option<RevealSchedule> {
        if self.revealed || visible_ratio < self.config.reveal_threshold {
            return None;
        }
        tracing::debug!(
            target: "lumen_vitrine::footer",
            visible_ratio,
            "footer revealed"
        );
        self.revealed = true;
        Some(self.schedule())
    }

    /// Reveal immediately, for hosts without scroll visibility reporting.
    ///
    /// Returns `None` if already revealed.
    pub fn force_reveal(&mut self) -> Option<RevealSchedule> {
        if self.revealed {
            return None;
        }
        self.revealed = true;
        Some(self.schedule())
    }

    /// Whether the reveal has fired.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    fn entry_spec(&self) -> TransitionSpec {
        if self.config.reduce_motion {
            TransitionSpec::instant()
        } else {
            TransitionSpec::new(self.config.animation_duration, Easing::EaseInOut)
        }
    }

    fn schedule(&self) -> RevealSchedule {
        let spec = self.entry_spec();
        let mut entries = Vec::with_capacity(self.config.card_count + 1);
        entries.push(RevealEntry {
            target: RevealTarget::Header,
            delay: Duration::ZERO,
            spec,
        });
        for index in 0..self.config.card_count {
            entries.push(RevealEntry {
                target: RevealTarget::Card(index),
                delay: self.config.stagger_interval * index as u32,
                spec,
            });
        }
        RevealSchedule { entries }
    }
}

/// Events a [`FeatureCard`] reports from its timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureCardEvent {
    /// The hover delay elapsed; the icon dot is now accented.
    DotAccent,
    /// The press pulse finished.
    PulseEnded,
}

/// Hover/press/focus state machine for one feature card.
#[derive(Debug)]
pub struct FeatureCard {
    /// Footer settings (hover delay, pulse duration, reduced motion).
    config: FooterConfig,
    /// Pointer is over the card.
    hovered: bool,
    /// The icon dot accent is showing.
    dot_accented: bool,
    /// A press pulse is running.
    pressed: bool,
    /// The card has keyboard focus.
    focused: bool,
    /// Pending hover-delay one-shot.
    accent_timer: Option<TimerId>,
    /// Pending press-pulse one-shot.
    pulse_timer: Option<TimerId>,
}

impl FeatureCard {
    /// Create an idle card.
    pub fn new(config: FooterConfig) -> Self {
        Self {
            config,
            hovered: false,
            dot_accented: false,
            pressed: false,
            focused: false,
            accent_timer: None,
            pulse_timer: None,
        }
    }

    /// Pointer entered the card: arm the dot-accent delay.
    pub fn hover_enter(&mut self, timers: &mut TimerManager) {
        self.hovered = true;
        self.accent_timer =
            Some(timers.restart_one_shot(self.accent_timer.take(), self.config.hover_delay));
    }

    /// Pointer left the card: clear hover state and cancel a pending accent.
    pub fn hover_leave(&mut self, timers: &mut TimerManager) {
        self.hovered = false;
        self.dot_accented = false;
        if let Some(id) = self.accent_timer.take() {
            let _ = timers.stop(id);
        }
    }

    /// Press the card (click or key activation): start the pulse.
    pub fn press(&mut self, timers: &mut TimerManager) {
        self.pressed = true;
        self.pulse_timer =
            Some(timers.restart_one_shot(self.pulse_timer.take(), self.config.press_pulse));
    }

    /// Handle a key press while this card is focused.
    ///
    /// Enter and Space activate the card. Returns `true` when consumed.
    pub fn handle_key(&mut self, key: Key, timers: &mut TimerManager) -> bool {
        if key.is_activation() {
            self.press(timers);
            true
        } else {
            false
        }
    }

    /// Handle a fired timer.
    ///
    /// Returns the card event when the id belongs to this card.
    pub fn handle_timer(&mut self, id: TimerId) -> Option<FeatureCardEvent> {
        if self.accent_timer == Some(id) {
            self.accent_timer = None;
            self.dot_accented = true;
            return Some(FeatureCardEvent::DotAccent);
        }
        if self.pulse_timer == Some(id) {
            self.pulse_timer = None;
            self.pressed = false;
            return Some(FeatureCardEvent::PulseEnded);
        }
        None
    }

    /// The card gained keyboard focus.
    pub fn focus_in(&mut self) {
        self.focused = true;
    }

    /// The card lost keyboard focus.
    pub fn focus_out(&mut self) {
        self.focused = false;
    }

    /// Pointer is over the card.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// The icon dot accent is showing.
    pub fn is_dot_accented(&self) -> bool {
        self.dot_accented
    }

    /// A press pulse is running.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// The card has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Transition for the press pulse.
    pub fn pulse_spec(&self) -> TransitionSpec {
        if self.config.reduce_motion {
            TransitionSpec::instant()
        } else {
            TransitionSpec::new(self.config.press_pulse, Easing::Linear)
        }
    }
}

// Ensure the footer widgets are Send + Sync
static_assertions::assert_impl_all!(FooterReveal: Send, Sync);
static_assertions::assert_impl_all!(FeatureCard: Send, Sync);
