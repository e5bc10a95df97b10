//! Viewport classification.
//!
//! Both storefront widgets derive their layout from the viewport width, but
//! against two different breakpoint tables:
//!
//! - The benefit rotator maps width to a [`ViewportClass`] (Narrow / Medium /
//!   Wide) that decides how many items show and whether rotation runs.
//! - The product carousel maps width to a cards-per-view count via
//!   [`cards_per_view`], with an extra breakpoint at 768px.
//!
//! The tables are intentionally independent; do not merge them.

/// Widths at or below this are phone-sized (one item / one card).
pub const PHONE_MAX_WIDTH: f32 = 480.0;

/// Widths at or below this (and above phone) are tablet-sized.
///
/// Only the carousel distinguishes this breakpoint; the rotator treats
/// everything between phone and laptop as [`ViewportClass::Medium`].
pub const TABLET_MAX_WIDTH: f32 = 768.0;

/// Widths at or below this (and above phone) rotate three items; wider
/// viewports show everything statically.
pub const LAPTOP_MAX_WIDTH: f32 = 1200.0;

/// Viewport size class for the benefit rotator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Phone-sized: one benefit item visible, rotation active.
    Narrow,
    /// Tablet/laptop-sized: three benefit items visible, rotation active.
    Medium,
    /// Desktop-sized: all five items visible, rotation disabled.
    Wide,
}

impl ViewportClass {
    /// Classify a viewport width.
    ///
    /// Total over all finite non-negative widths; boundary values belong to
    /// the smaller class (480 is Narrow, 1200 is Medium).
    pub fn from_width(width: f32) -> Self {
        if width <= PHONE_MAX_WIDTH {
            Self::Narrow
        } else if width <= LAPTOP_MAX_WIDTH {
            Self::Medium
        } else {
            Self::Wide
        }
    }

    /// Whether the rotator cycles items in this class.
    pub fn rotates(self) -> bool {
        matches!(self, Self::Narrow | Self::Medium)
    }

    /// How many benefit items are visible at once in this class.
    pub fn visible_items(self) -> usize {
        match self {
            Self::Narrow => 1,
            Self::Medium => 3,
            Self::Wide => 5,
        }
    }
}

/// How many product cards the carousel shows for a viewport width.
///
/// The carousel's breakpoint table, independent of [`ViewportClass`]:
/// `<=480` shows 1, `<=768` shows 2, `<=1200` shows 4, wider shows 5.
pub fn cards_per_view(width: f32) -> usize {
    if width <= PHONE_MAX_WIDTH {
        1
    } else if width <= TABLET_MAX_WIDTH {
        2
    } else if width <= LAPTOP_MAX_WIDTH {
        4
    } else {
        5
    }
}
