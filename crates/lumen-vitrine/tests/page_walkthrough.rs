//! End-to-end walk through a storefront page session.
//!
//! Drives one [`StorefrontPage`] the way a host would: connect to the widget
//! signals, feed input events, sleep-and-pump on the timer deadlines, and
//! check that everything observable lines up.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lumen_vitrine::config::StorefrontConfig;
use lumen_vitrine::events::{Key, TouchEvent, TouchPhase};
use lumen_vitrine::geometry::Point;
use lumen_vitrine::storefront::StorefrontPage;
use lumen_vitrine::viewport::ViewportClass;
use lumen_vitrine::widgets::NavDirection;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn instant_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::default();
    config.rotator.interval = Duration::ZERO;
    config.rotator.resize_debounce = Duration::ZERO;
    config.footer.hover_delay = Duration::ZERO;
    config.footer.press_pulse = Duration::ZERO;
    config
}

fn touch(phase: TouchPhase, x: f32, y: f32) -> TouchEvent {
    TouchEvent::new(phase, Point::new(x, y))
}

#[test]
fn full_session_walkthrough() {
    init_tracing();

    let mut page = StorefrontPage::new(instant_config(), 1024.0).unwrap();

    let rotation_steps = Arc::new(AtomicUsize::new(0));
    let steps_clone = rotation_steps.clone();
    page.rotator().rotation_changed.connect(move |step| {
        // Entering and leaving are always disjoint.
        assert!(step.entering.iter().all(|i| !step.leaving.contains(i)));
        steps_clone.fetch_add(1, Ordering::SeqCst);
    });

    let carousel_moves = Arc::new(AtomicUsize::new(0));
    let moves_clone = carousel_moves.clone();
    page.carousel().current_changed.connect(move |_| {
        moves_clone.fetch_add(1, Ordering::SeqCst);
    });

    // 1024px: Medium rotator (3 items rotating), 4 cards per view.
    assert_eq!(page.rotator().viewport_class(), ViewportClass::Medium);
    assert_eq!(page.rotator().visible_indices(), &[0, 1, 2]);
    assert_eq!(page.carousel().cards_per_view(), 4);

    // One tick swaps exactly one item at Medium.
    page.pump();
    assert_eq!(rotation_steps.load(Ordering::SeqCst), 1);
    assert_eq!(page.rotator().visible_indices(), &[1, 2, 3]);

    // Click, keyboard, and swipe each move one card.
    page.advance_carousel(NavDirection::Next);
    assert!(page.on_key(Key::ArrowRight));
    page.on_touch(&touch(TouchPhase::Started, 300.0, 200.0));
    assert!(page.on_touch(&touch(TouchPhase::Moved, 250.0, 202.0)));
    page.on_touch(&touch(TouchPhase::Ended, 200.0, 205.0));
    assert_eq!(page.carousel().current_index(), 3);
    assert_eq!(carousel_moves.load(Ordering::SeqCst), 3);

    // Resize burst down to phone width: one recomputation for both widgets.
    for width in [1000.0, 700.0, 390.0] {
        page.on_resize(width);
    }
    page.pump();
    assert_eq!(page.rotator().viewport_class(), ViewportClass::Narrow);
    assert_eq!(page.rotator().visible_indices(), &[0]);
    assert_eq!(page.carousel().cards_per_view(), 1);
    // The resize reset moved the carousel back to 0 and emitted.
    assert_eq!(page.carousel().current_index(), 0);
    assert_eq!(carousel_moves.load(Ordering::SeqCst), 4);

    // Footer scrolls into view once.
    let schedule = page.on_scroll_visibility(0.4).unwrap();
    assert_eq!(schedule.entries.len(), 5);
    assert!(page.on_scroll_visibility(1.0).is_none());

    // Hover then activate a card through the keyboard.
    page.card_hover_enter(0);
    page.pump();
    assert!(page.cards()[0].is_dot_accented());
    page.card_hover_leave(0);
    assert!(!page.cards()[0].is_dot_accented());

    page.focus_card(Some(0));
    assert!(page.on_key(Key::Space));
    assert!(page.cards()[0].is_pressed());
    page.pump();
    assert!(!page.cards()[0].is_pressed());
}

#[test]
fn rotator_control_surface_is_leak_free() {
    // Real 3-second tick interval, but resizes apply on the next pump.
    let mut config = StorefrontConfig::default();
    config.rotator.resize_debounce = Duration::ZERO;
    let mut page = StorefrontPage::new(config, 800.0).unwrap();
    assert!(page.rotator().is_running());
    assert_eq!(page.active_timer_count(), 1);

    for _ in 0..50 {
        page.resume_rotator();
        page.reset_rotator();
    }
    assert_eq!(page.active_timer_count(), 1);

    page.pause_rotator();
    assert!(!page.rotator().is_running());
    assert_eq!(page.active_timer_count(), 0);

    // Growing past the Wide breakpoint while paused keeps the timer off.
    page.on_resize(1600.0);
    page.pump();
    assert_eq!(page.rotator().viewport_class(), ViewportClass::Wide);
    assert_eq!(page.rotator().visible_indices(), &[0, 1, 2, 3, 4]);
    assert_eq!(page.active_timer_count(), 0);

    // Shrinking back restarts rotation from pattern zero.
    page.on_resize(800.0);
    page.pump();
    assert_eq!(page.rotator().viewport_class(), ViewportClass::Medium);
    assert_eq!(page.rotator().visible_indices(), &[0, 1, 2]);
    assert!(page.rotator().is_running());
    assert_eq!(page.active_timer_count(), 1);
}

#[test]
fn rotation_cycle_returns_to_start() {
    let mut page = StorefrontPage::new(instant_config(), 390.0).unwrap();
    assert_eq!(page.rotator().visible_indices(), &[0]);

    for _ in 0..5 {
        page.pump();
    }
    assert_eq!(page.rotator().visible_indices(), &[0]);
}
