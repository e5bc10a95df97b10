//! Lumen Vitrine: headless responsive storefront widgets.
//!
//! Three independent widgets for a lighting-products storefront, with all
//! rendering left to the host:
//!
//! - **Benefit rotator** ([`widgets::BenefitRotator`]): cycles which subset
//!   of five benefit items is visible, driven by viewport breakpoints and a
//!   3-second tick.
//! - **Product carousel** ([`widgets::ProductCarousel`]): a windowed track
//!   of product cards navigated one step at a time by buttons, arrow keys,
//!   or horizontal swipes.
//! - **Footer interactions** ([`widgets::FooterReveal`],
//!   [`widgets::FeatureCard`]): a one-shot staggered scroll reveal plus
//!   per-card hover/press/focus state.
//!
//! [`storefront::StorefrontPage`] ties them together: it owns the single
//! timer manager and resize debouncer and serializes every external event
//! into the widgets. Widgets publish state changes through
//! [`lumen_vitrine_core::Signal`]s and describe their animations as
//! [`animation::TransitionSpec`] data; the host applies both however it
//! renders.
//!
//! # Example
//!
//! ```
//! use lumen_vitrine::config::StorefrontConfig;
//! use lumen_vitrine::storefront::StorefrontPage;
//!
//! let mut page = StorefrontPage::new(StorefrontConfig::default(), 1024.0).unwrap();
//!
//! // Viewport resizes are debounced; timers drive everything else.
//! page.on_resize(390.0);
//! let _wakeup = page.next_deadline();
//! page.pump();
//! ```

pub mod animation;
pub mod config;
pub mod events;
pub mod gesture;
pub mod geometry;
pub mod storefront;
pub mod viewport;
pub mod widgets;

pub use animation::{Easing, TransitionSpec, ease};
pub use config::{CarouselConfig, ConfigError, FooterConfig, RotatorConfig, StorefrontConfig};
pub use events::{Key, TouchEvent, TouchPhase};
pub use gesture::{
    CAPTURE_SLOP, DEFAULT_SWIPE_MIN_DISTANCE, GestureResponse, SwipeDirection, SwipeTracker,
    classify_swipe,
};
pub use geometry::{Point, Size};
pub use storefront::StorefrontPage;
pub use viewport::{ViewportClass, cards_per_view};
pub use widgets::{
    BenefitRotator, CarouselState, CarouselStatus, FeatureCard, FeatureCardEvent, FooterReveal,
    NavDirection, ProductCarousel, RevealSchedule, RotationStep, RotatorState,
};

// Re-export the core crate so hosts need only one dependency.
pub use lumen_vitrine_core as core;
