//! Error types for capline-seg.

use thiserror::Error;

/// Splitter configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Duration threshold must be positive
    #[error("non-positive duration threshold: {name} = {value}s")]
    NonPositiveDuration { name: &'static str, value: f32 },

    /// Thresholds must satisfy min <= target <= max
    #[error("duration thresholds out of order: min {min}s, target {target}s, max {max}s")]
    InvalidDurationOrder { min: f32, target: f32, max: f32 },

    /// Silence gap cannot be negative
    #[error("negative silence gap: {0}s")]
    NegativeSilenceGap(f32),

    /// Character budget must allow at least one character
    #[error("max characters must be at least 1")]
    ZeroMaxCharacters,

    /// Boundary pattern failed to compile
    #[error(transparent)]
    InvalidPattern(#[from] regex::Error),
}

/// Result type alias for capline-seg configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
