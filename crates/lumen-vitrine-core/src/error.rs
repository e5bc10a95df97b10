//! Error types for Lumen Vitrine.

use std::fmt;

/// The main error type for Lumen Vitrine core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VitrineError {
    /// The timer ID is invalid or has already been removed.
    InvalidTimerId,
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimerId => write!(f, "Invalid or expired timer ID"),
        }
    }
}

impl std::error::Error for VitrineError {}

/// A specialized Result type for Lumen Vitrine core operations.
pub type Result<T> = std::result::Result<T, VitrineError>;
