//! Error types for building a pointer transform from an injected config.
//!
//! Nothing on the per-sample path can fail; these errors only surface when a
//! [`MotionConfig`](crate::MotionConfig) is validated.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A constant that scales or divides must be strictly positive.
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// A `min..max` pair that must span a non-empty interval.
    #[error("{field} range is empty: min {min} >= max {max}")]
    EmptyRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
