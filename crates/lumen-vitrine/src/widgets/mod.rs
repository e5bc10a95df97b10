//! The storefront widgets.

pub mod carousel;
pub mod footer;
pub mod rotator;

pub use carousel::{CarouselState, CarouselStatus, NavDirection, ProductCarousel, clamp_index};
pub use footer::{
    FeatureCard, FeatureCardEvent, FooterReveal, RevealEntry, RevealSchedule, RevealTarget,
};
pub use rotator::{
    BENEFIT_ITEM_COUNT, BenefitRotator, ROTATION_INTERVAL, RotationStep, RotatorState,
};
