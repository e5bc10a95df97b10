//! The storefront page driver.
//!
//! [`StorefrontPage`] is the host event layer made concrete: it owns the one
//! [`TimerManager`], the resize debouncer, and all the widgets, and
//! serializes every external event (resize, key, touch, click, scroll
//! visibility, timer fire) into them one at a time. A host embeds the page,
//! forwards its input events, sleeps until [`next_deadline`], and calls
//! [`pump`] on wakeup.
//!
//! [`next_deadline`]: StorefrontPage::next_deadline
//! [`pump`]: StorefrontPage::pump
//!
//! ```
//! use lumen_vitrine::config::StorefrontConfig;
//! use lumen_vitrine::storefront::StorefrontPage;
//! use lumen_vitrine::widgets::NavDirection;
//!
//! let mut page = StorefrontPage::new(StorefrontConfig::default(), 1280.0).unwrap();
//! page.advance_carousel(NavDirection::Next);
//! assert_eq!(page.carousel().current_index(), 1);
//! ```

use std::time::Duration;

use lumen_vitrine_core::{Debouncer, TimerManager};

use crate::config::{ConfigError, StorefrontConfig};
use crate::events::{Key, TouchEvent};
use crate::widgets::carousel::{NavDirection, ProductCarousel};
use crate::widgets::footer::{FeatureCard, FooterReveal, RevealSchedule};
use crate::widgets::rotator::BenefitRotator;

/// One storefront page: timers, debouncer, and the three widgets.
pub struct StorefrontPage {
    /// The single timer manager every widget schedules through.
    timers: TimerManager,
    /// Coalesces resize bursts.
    resize_debounce: Debouncer,
    /// Width reported by the most recent resize, waiting for the debounce.
    pending_width: Option<f32>,
    /// Last applied viewport width.
    width: f32,
    /// Benefit rotator.
    rotator: BenefitRotator,
    /// Product carousel.
    carousel: ProductCarousel,
    /// Footer scroll-reveal latch.
    reveal: FooterReveal,
    /// Footer feature cards.
    cards: Vec<FeatureCard>,
    /// Index of the focused feature card, if any.
    focused_card: Option<usize>,
}

impl StorefrontPage {
    /// Build a page from a validated configuration and an initial width.
    pub fn new(config: StorefrontConfig, initial_width: f32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut timers = TimerManager::new();
        let rotator = BenefitRotator::new(&mut timers, initial_width, config.rotator.interval);
        let carousel = ProductCarousel::new(
            config.carousel.total_cards,
            initial_width,
            config.carousel.min_swipe_distance,
        );
        let reveal = FooterReveal::new(config.footer.clone());
        let cards = (0..config.footer.card_count)
            .map(|_| FeatureCard::new(config.footer.clone()))
            .collect();

        tracing::debug!(
            target: "lumen_vitrine::storefront",
            width = initial_width,
            "storefront page initialized"
        );

        Ok(Self {
            resize_debounce: Debouncer::new(config.rotator.resize_debounce),
            timers,
            pending_width: None,
            width: initial_width,
            rotator,
            carousel,
            reveal,
            cards,
            focused_card: None,
        })
    }

    /// Record a viewport resize.
    ///
    /// The new width is applied to the widgets only when the debounce quiet
    /// period elapses; a burst of calls yields one recomputation.
    pub fn on_resize(&mut self, width: f32) {
        self.pending_width = Some(width);
        self.resize_debounce.poke(&mut self.timers);
    }

    /// How long until the next timer fires, if any is pending.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Drain expired timers and route each fire to its owner.
    pub fn pump(&mut self) {
        let fired = self.timers.process_expired();
        for id in fired {
            if self.resize_debounce.matches(id) {
                if let Some(width) = self.pending_width.take() {
                    self.apply_resize(width);
                }
                continue;
            }
            if self.rotator.handle_timer(id) {
                continue;
            }
            for (index, card) in self.cards.iter_mut().enumerate() {
                if let Some(event) = card.handle_timer(id) {
                    tracing::debug!(
                        target: "lumen_vitrine::storefront",
                        card = index,
                        ?event,
                        "feature card event"
                    );
                    break;
                }
            }
        }
    }

    /// Fan a debounced width out to both viewport-driven widgets.
    fn apply_resize(&mut self, width: f32) {
        tracing::debug!(target: "lumen_vitrine::storefront", width, "applying resize");
        self.width = width;
        self.rotator.handle_resize(&mut self.timers, width);
        self.carousel.handle_resize(width);
    }

    /// Route a key press.
    ///
    /// Arrow keys navigate the carousel; Enter and Space activate the
    /// focused feature card. Returns `true` when consumed.
    pub fn on_key(&mut self, key: Key) -> bool {
        if key.is_navigation() {
            return self.carousel.handle_key(key);
        }
        if key.is_activation() {
            if let Some(index) = self.focused_card {
                return self.cards[index].handle_key(key, &mut self.timers);
            }
        }
        false
    }

    /// Route a touch event to the carousel.
    ///
    /// Returns `true` when the host should capture the gesture.
    pub fn on_touch(&mut self, event: &TouchEvent) -> bool {
        self.carousel.handle_touch(event)
    }

    /// Report footer scroll visibility (0.0 to 1.0).
    pub fn on_scroll_visibility(&mut self, ratio: f32) -> Option<RevealSchedule> {
        self.reveal.observe(ratio)
    }

    /// Previous/next button click.
    pub fn advance_carousel(&mut self, direction: NavDirection) {
        self.carousel.advance(direction);
    }

    /// Jump the carousel to a card index.
    pub fn go_to_card(&mut self, index: usize) {
        self.carousel.go_to(index);
    }

    /// Pause the rotator's tick timer.
    pub fn pause_rotator(&mut self) {
        self.rotator.pause(&mut self.timers);
    }

    /// Resume the rotator's tick timer from a full interval.
    pub fn resume_rotator(&mut self) {
        self.rotator.resume(&mut self.timers);
    }

    /// Reset the rotator to its initial pattern and restart rotation.
    pub fn reset_rotator(&mut self) {
        self.rotator.reset(&mut self.timers);
    }

    /// Pointer entered a feature card.
    pub fn card_hover_enter(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.hover_enter(&mut self.timers);
        }
    }

    /// Pointer left a feature card.
    pub fn card_hover_leave(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.hover_leave(&mut self.timers);
        }
    }

    /// A feature card was clicked.
    pub fn card_press(&mut self, index: usize) {
        if let Some(card) = self.cards.get_mut(index) {
            card.press(&mut self.timers);
        }
    }

    /// Move keyboard focus to a feature card (or clear it with `None`).
    pub fn focus_card(&mut self, index: Option<usize>) {
        if let Some(old) = self.focused_card.take() {
            self.cards[old].focus_out();
        }
        if let Some(new) = index {
            if let Some(card) = self.cards.get_mut(new) {
                card.focus_in();
                self.focused_card = Some(new);
            }
        }
    }

    /// Last applied viewport width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// The benefit rotator (connect to its signals here).
    pub fn rotator(&self) -> &BenefitRotator {
        &self.rotator
    }

    /// The product carousel (connect to its signals here).
    pub fn carousel(&self) -> &ProductCarousel {
        &self.carousel
    }

    /// The footer reveal latch.
    pub fn reveal(&self) -> &FooterReveal {
        &self.reveal
    }

    /// The footer feature cards.
    pub fn cards(&self) -> &[FeatureCard] {
        &self.cards
    }

    /// Number of timers currently pending, for leak diagnostics.
    pub fn active_timer_count(&self) -> usize {
        self.timers.active_count()
    }
}

// Ensure StorefrontPage is Send + Sync
static_assertions::assert_impl_all!(StorefrontPage: Send, Sync);
