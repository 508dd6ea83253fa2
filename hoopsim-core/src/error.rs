//! Error types surfaced by the shot engine.
use thiserror::Error;

/// Invalid-argument conditions rejected at the engine boundary.
///
/// Geometry and probability lookups are total over finite input, so every
/// variant here describes a caller handing the engine something it refuses to
/// coerce.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShotError {
    #[error("court position must be finite (got x={x}, y={y})")]
    NonFinitePosition { x: f64, y: f64 },
    #[error("trial count must be between {min} and {max} (got {requested})")]
    TrialCountOutOfRange { requested: i64, min: u32, max: u32 },
    #[error("shot probability must be between {min:.1} and {max:.1} percent (got {value})")]
    ProbabilityOutOfRange { value: f64, min: f64, max: f64 },
}

impl ShotError {
    /// Every engine error is an invalid-argument condition.
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::NonFinitePosition { .. }
                | Self::TrialCountOutOfRange { .. }
                | Self::ProbabilityOutOfRange { .. }
        )
    }
}

/// Errors raised when session configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    TrialRange {
        field: &'static str,
        min: u32,
        max: u32,
        value: u32,
    },
    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("config could not be parsed: {0}")]
    Parse(String),
}
