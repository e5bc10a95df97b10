//! Storefront configuration.
//!
//! Typed, serde-backed configuration for the three widgets, loadable from
//! TOML. Every field has a default matching the shipped storefront, so an
//! empty document (or [`StorefrontConfig::default`]) is a valid
//! configuration. Durations are denominated in milliseconds on the wire.
//!
//! ```
//! use lumen_vitrine::config::StorefrontConfig;
//!
//! let config = StorefrontConfig::from_toml_str(
//!     r#"
//!     [carousel]
//!     total_cards = 8
//!     "#,
//! )
//! .unwrap();
//! assert_eq!(config.carousel.total_cards, 8);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors produced while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document failed to parse (syntax or unknown fields).
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field parsed but carries a value the widgets cannot run with.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Dotted path of the offending field.
        field: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },
}

/// Serialize durations as integer milliseconds.
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Benefit rotator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotatorConfig {
    /// Time between rotation ticks while rotation is active.
    #[serde(with = "duration_ms", rename = "interval_ms")]
    pub interval: Duration,
    /// Quiet period before a resize burst is applied.
    #[serde(with = "duration_ms", rename = "resize_debounce_ms")]
    pub resize_debounce: Duration,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            resize_debounce: Duration::from_millis(250),
        }
    }
}

/// Product carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Number of product cards in the track.
    pub total_cards: usize,
    /// Minimum horizontal travel for a touch to register as a swipe.
    pub min_swipe_distance: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            total_cards: 12,
            min_swipe_distance: crate::gesture::DEFAULT_SWIPE_MIN_DISTANCE,
        }
    }
}

/// Footer reveal and feature-card settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Number of feature cards under the footer header.
    pub card_count: usize,
    /// Duration of the header/card entry transition.
    #[serde(with = "duration_ms", rename = "animation_duration_ms")]
    pub animation_duration: Duration,
    /// Delay between hovering a card and accenting its icon dot.
    #[serde(with = "duration_ms", rename = "hover_delay_ms")]
    pub hover_delay: Duration,
    /// Fraction of the footer that must be visible before it reveals.
    pub reveal_threshold: f32,
    /// Delay between consecutive card entries in the reveal.
    #[serde(with = "duration_ms", rename = "stagger_interval_ms")]
    pub stagger_interval: Duration,
    /// Duration of the card press pulse.
    #[serde(with = "duration_ms", rename = "press_pulse_ms")]
    pub press_pulse: Duration,
    /// Collapse all transition durations to zero (reduced motion).
    pub reduce_motion: bool,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            card_count: 4,
            animation_duration: Duration::from_millis(400),
            hover_delay: Duration::from_millis(100),
            reveal_threshold: 0.2,
            stagger_interval: Duration::from_millis(150),
            press_pulse: Duration::from_millis(200),
            reduce_motion: false,
        }
    }
}

/// Top-level configuration for one storefront page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Benefit rotator settings.
    pub rotator: RotatorConfig,
    /// Product carousel settings.
    pub carousel: CarouselConfig,
    /// Footer settings.
    pub footer: FooterConfig,
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.total_cards == 0 {
            return Err(ConfigError::InvalidValue {
                field: "carousel.total_cards",
                reason: "must be at least 1".into(),
            });
        }
        if !(self.carousel.min_swipe_distance > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "carousel.min_swipe_distance",
                reason: format!("must be positive, got {}", self.carousel.min_swipe_distance),
            });
        }
        if self.footer.card_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "footer.card_count",
                reason: "must be at least 1".into(),
            });
        }
        if !(0.0..=1.0).contains(&self.footer.reveal_threshold)
            || self.footer.reveal_threshold.is_nan()
        {
            return Err(ConfigError::InvalidValue {
                field: "footer.reveal_threshold",
                reason: format!(
                    "must be within 0.0..=1.0, got {}",
                    self.footer.reveal_threshold
                ),
            });
        }
        Ok(())
    }
}
