//! Benefit rotator widget.
//!
//! The storefront header shows five "benefit" items. On wide viewports all
//! five are visible and nothing moves; on medium and narrow viewports only a
//! subset fits, and the widget cycles which subset is visible every few
//! seconds by walking a fixed table of index patterns.
//!
//! The module splits teacher-fashion into a pure state machine
//! ([`RotatorState`]) and a widget ([`BenefitRotator`]) that owns the
//! repeating tick timer and publishes changes through signals.
//!
//! # Signals
//!
//! - `rotation_changed(RotationStep)`: a tick swapped items in and out
//! - `class_changed(ViewportClass)`: a resize crossed a breakpoint

use std::time::Duration;

use lumen_vitrine_core::{Signal, TimerId, TimerManager};

use crate::animation::{FADE_IN, FADE_OUT, TransitionSpec};
use crate::viewport::ViewportClass;

/// Number of benefit items in the fixed collection.
pub const BENEFIT_ITEM_COUNT: usize = 5;

/// Default time between rotation ticks.
pub const ROTATION_INTERVAL: Duration = Duration::from_secs(3);

/// Medium viewports cycle five overlapping three-item windows.
const MEDIUM_PATTERNS: [&[usize]; 5] = [
    &[0, 1, 2],
    &[1, 2, 3],
    &[2, 3, 4],
    &[0, 3, 4],
    &[0, 1, 4],
];

/// Narrow viewports cycle the items one at a time.
const NARROW_PATTERNS: [&[usize]; 5] = [&[0], &[1], &[2], &[3], &[4]];

/// The pattern table for a viewport class, or `None` when rotation is off.
fn pattern_set(class: ViewportClass) -> Option<&'static [&'static [usize]]> {
    match class {
        ViewportClass::Narrow => Some(&NARROW_PATTERNS),
        ViewportClass::Medium => Some(&MEDIUM_PATTERNS),
        ViewportClass::Wide => None,
    }
}

/// The outcome of one rotation tick.
///
/// `entering` and `leaving` are disjoint: the symmetric difference between
/// the previous and the new visible set. Items present in both sets appear
/// in neither, so the host only animates what actually changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationStep {
    /// Indices that became visible on this tick.
    pub entering: Vec<usize>,
    /// Indices that stopped being visible on this tick.
    pub leaving: Vec<usize>,
}

/// Pure rotation state: viewport class, pattern cursor, visible set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotatorState {
    /// Current viewport class.
    class: ViewportClass,
    /// Position in the pattern table. Meaningless while `class` is Wide.
    cursor: usize,
    /// Indices currently visible, always sorted and within `0..5`.
    visible: Vec<usize>,
}

impl RotatorState {
    /// Create state for an initial viewport width.
    pub fn new(width: f32) -> Self {
        let mut state = Self {
            class: ViewportClass::from_width(width),
            cursor: 0,
            visible: Vec::new(),
        };
        state.initialize(state.class);
        state
    }

    /// Reset to the initial visible set for a viewport class.
    ///
    /// Cursor returns to 0; the visible set becomes all items on Wide, or
    /// the first pattern otherwise.
    pub fn initialize(&mut self, class: ViewportClass) {
        self.class = class;
        self.cursor = 0;
        self.visible = match pattern_set(class) {
            Some(patterns) => patterns[0].to_vec(),
            None => (0..BENEFIT_ITEM_COUNT).collect(),
        };
    }

    /// Advance to the next pattern.
    ///
    /// Returns `None` while rotation is inactive (Wide class). Otherwise
    /// advances the cursor modulo the table length, swaps the visible set,
    /// and reports which items entered and left.
    pub fn tick(&mut self) -> Option<RotationStep> {
        let patterns = pattern_set(self.class)?;

        self.cursor = (self.cursor + 1) % patterns.len();
        let next = patterns[self.cursor];

        let entering: Vec<usize> = next
            .iter()
            .copied()
            .filter(|index| !self.visible.contains(index))
            .collect();
        let leaving: Vec<usize> = self
            .visible
            .iter()
            .copied()
            .filter(|index| !next.contains(index))
            .collect();

        self.visible = next.to_vec();
        Some(RotationStep { entering, leaving })
    }

    /// React to a (debounced) viewport resize.
    ///
    /// Re-derives the class and re-initializes only when the class actually
    /// changed; a resize within the same class keeps the cursor and visible
    /// set. Returns whether rotation should be running afterwards.
    pub fn on_resize(&mut self, width: f32) -> bool {
        let class = ViewportClass::from_width(width);
        if class != self.class {
            self.initialize(class);
        }
        self.class.rotates()
    }

    /// Indices currently visible, sorted ascending.
    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    /// Current viewport class.
    pub fn viewport_class(&self) -> ViewportClass {
        self.class
    }

    /// Current position in the pattern table.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether rotation is active in the current class.
    pub fn is_rotation_active(&self) -> bool {
        self.class.rotates()
    }
}

/// The benefit rotator widget: rotation state plus timer wiring and signals.
///
/// All timer-touching operations take the host's [`TimerManager`]; the widget
/// only remembers its own `TimerId`. Restarting always cancels the previous
/// handle first, so no sequence of pause/resume/reset/resize calls can leave
/// two ticks pending.
pub struct BenefitRotator {
    /// Rotation state machine.
    state: RotatorState,
    /// Time between ticks.
    interval: Duration,
    /// The repeating tick timer, while rotation runs.
    tick_timer: Option<TimerId>,
    /// Signal emitted when a tick swaps items in and out.
    pub rotation_changed: Signal<RotationStep>,
    /// Signal emitted when a resize crosses a breakpoint.
    pub class_changed: Signal<ViewportClass>,
}

impl BenefitRotator {
    /// Create a rotator for an initial viewport width, starting the tick
    /// timer if the class rotates.
    pub fn new(timers: &mut TimerManager, width: f32, interval: Duration) -> Self {
        let state = RotatorState::new(width);
        let tick_timer = state
            .is_rotation_active()
            .then(|| timers.start_repeating(interval));

        tracing::debug!(
            target: "lumen_vitrine::rotator",
            class = ?state.viewport_class(),
            rotating = state.is_rotation_active(),
            "rotator initialized"
        );

        Self {
            state,
            interval,
            tick_timer,
            rotation_changed: Signal::new(),
            class_changed: Signal::new(),
        }
    }

    /// Handle a fired timer.
    ///
    /// Returns `true` when the id belongs to this widget. A matching fire
    /// ticks the state machine and emits `rotation_changed`.
    pub fn handle_timer(&mut self, id: TimerId) -> bool {
        if self.tick_timer != Some(id) {
            return false;
        }

        if let Some(step) = self.state.tick() {
            tracing::debug!(
                target: "lumen_vitrine::rotator",
                cursor = self.state.cursor(),
                entering = ?step.entering,
                leaving = ?step.leaving,
                "rotation tick"
            );
            self.rotation_changed.emit(step);
        }
        true
    }

    /// Apply a (debounced) viewport resize.
    ///
    /// When the class changes, the state re-initializes, `class_changed`
    /// fires, and the tick timer restarts (or stops, entering Wide). A
    /// resize within the same class leaves state and timer untouched.
    pub fn handle_resize(&mut self, timers: &mut TimerManager, width: f32) {
        let old_class = self.state.viewport_class();
        let active = self.state.on_resize(width);
        let class = self.state.viewport_class();

        if class == old_class {
            return;
        }

        tracing::debug!(
            target: "lumen_vitrine::rotator",
            ?old_class,
            ?class,
            rotating = active,
            "viewport class changed"
        );

        if active {
            self.tick_timer = Some(timers.restart_repeating(self.tick_timer.take(), self.interval));
        } else if let Some(id) = self.tick_timer.take() {
            let _ = timers.stop(id);
        }

        self.class_changed.emit(class);
    }

    /// Stop the tick timer. Rotation state is kept.
    pub fn pause(&mut self, timers: &mut TimerManager) {
        if let Some(id) = self.tick_timer.take() {
            let _ = timers.stop(id);
        }
    }

    /// Restart the tick timer from a full interval.
    ///
    /// A no-op in Wide class. Safe to call while already running; the
    /// previous handle is cancelled first.
    pub fn resume(&mut self, timers: &mut TimerManager) {
        if self.state.is_rotation_active() {
            self.tick_timer = Some(timers.restart_repeating(self.tick_timer.take(), self.interval));
        }
    }

    /// Re-initialize for the current class and restart rotation if active.
    pub fn reset(&mut self, timers: &mut TimerManager) {
        self.state.initialize(self.state.viewport_class());
        if self.state.is_rotation_active() {
            self.tick_timer = Some(timers.restart_repeating(self.tick_timer.take(), self.interval));
        } else if let Some(id) = self.tick_timer.take() {
            let _ = timers.stop(id);
        }
    }

    /// Indices currently visible.
    pub fn visible_indices(&self) -> &[usize] {
        self.state.visible_indices()
    }

    /// How many items are currently visible.
    pub fn visible_count(&self) -> usize {
        self.state.visible_indices().len()
    }

    /// Current viewport class.
    pub fn viewport_class(&self) -> ViewportClass {
        self.state.viewport_class()
    }

    /// Whether rotation is active for the current class.
    pub fn is_rotation_active(&self) -> bool {
        self.state.is_rotation_active()
    }

    /// Whether the tick timer is currently armed.
    pub fn is_running(&self) -> bool {
        self.tick_timer.is_some()
    }

    /// The configured tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Transition for items entering the visible set.
    pub fn enter_spec(&self) -> TransitionSpec {
        FADE_IN
    }

    /// Transition for items leaving the visible set.
    pub fn leave_spec(&self) -> TransitionSpec {
        FADE_OUT
    }
}

// Ensure BenefitRotator is Send + Sync
static_assertions::assert_impl_all!(BenefitRotator: Send, Sync);
