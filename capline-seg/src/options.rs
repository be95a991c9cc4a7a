//! Splitter configuration with tunable thresholds.

use crate::error::{ConfigError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Default minimum segment duration in seconds
pub const DEFAULT_MIN_DURATION: f32 = 1.5;

/// Default target segment duration in seconds
pub const DEFAULT_TARGET_DURATION: f32 = 2.5;

/// Default maximum segment duration in seconds
pub const DEFAULT_MAX_DURATION: f32 = 3.5;

/// Default character budget per segment, whitespace excluded
pub const DEFAULT_MAX_CHARACTERS: usize = 50;

/// Default silence gap in seconds treated as a split boundary
pub const DEFAULT_SILENCE_GAP: f32 = 0.5;

static SENTENCE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?。！？…]").expect("builtin pattern compiles"));

static NATURAL_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[,:;、，]|\s(그리고|그런데|하지만|그래서)\s").expect("builtin pattern compiles")
});

/// Segment splitting configuration.
///
/// Callers overlay partial settings onto the defaults with struct update
/// syntax:
///
/// ```
/// use capline_seg::options::SplitterOptions;
///
/// let options = SplitterOptions {
///     max_duration: 5.0,
///     ..SplitterOptions::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SplitterOptions {
    /// Below this duration a segment is a merge candidate
    pub min_duration: f32,

    /// Soft duration goal; natural-break and clause-start rules activate
    /// once reached
    pub target_duration: f32,

    /// Hard duration ceiling, splits regardless of linguistic cues
    pub max_duration: f32,

    /// Hard character ceiling, counted excluding whitespace
    pub max_characters: usize,

    /// Gap to the next word treated as a silence boundary
    pub silence_gap: f32,

    /// Sentence-final punctuation
    pub sentence_delimiters: Regex,

    /// Commas, colons, semicolons, or a conjunction between spaces
    pub natural_break: Regex,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            min_duration: DEFAULT_MIN_DURATION,
            target_duration: DEFAULT_TARGET_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
            max_characters: DEFAULT_MAX_CHARACTERS,
            silence_gap: DEFAULT_SILENCE_GAP,
            sentence_delimiters: SENTENCE_DELIMITERS.clone(),
            natural_break: NATURAL_BREAK.clone(),
        }
    }
}

impl SplitterOptions {
    /// Replace the boundary patterns, validating the regexes.
    pub fn with_patterns(mut self, sentence_delimiters: &str, natural_break: &str) -> Result<Self> {
        self.sentence_delimiters = Regex::new(sentence_delimiters)?;
        self.natural_break = Regex::new(natural_break)?;
        Ok(self)
    }

    /// Check threshold consistency.
    pub fn validate(&self) -> Result<()> {
        let thresholds = [
            ("min_duration", self.min_duration),
            ("target_duration", self.target_duration),
            ("max_duration", self.max_duration),
        ];

        for (name, value) in thresholds {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDuration { name, value });
            }
        }

        if self.min_duration > self.target_duration || self.target_duration > self.max_duration {
            return Err(ConfigError::InvalidDurationOrder {
                min: self.min_duration,
                target: self.target_duration,
                max: self.max_duration,
            });
        }

        if self.silence_gap < 0.0 {
            return Err(ConfigError::NegativeSilenceGap(self.silence_gap));
        }

        if self.max_characters == 0 {
            return Err(ConfigError::ZeroMaxCharacters);
        }

        Ok(())
    }
}
