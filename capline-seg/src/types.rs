//! Core types for capline-seg.

use serde::{Deserialize, Serialize};

/// Recognized word with timestamps.
///
/// Produced by an upstream speech-to-text engine; punctuation may be attached
/// to the token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordTimestamp {
    /// Recognized text token
    pub word: String,
    /// Start time in seconds
    #[serde(alias = "startTime")]
    pub start: f32,
    /// End time in seconds
    #[serde(alias = "endTime")]
    pub end: f32,
    /// Recognition confidence in [0, 1], when the engine reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl WordTimestamp {
    pub fn new(word: impl Into<String>, start: f32, end: f32) -> Self {
        Self {
            word: word.into(),
            start,
            end,
            confidence: None,
        }
    }
}

/// Transcription result from a speech-to-text engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SttResult {
    /// Full recognized text
    #[serde(alias = "fullText")]
    pub text: String,
    /// Word-level timestamps in chronological order (empty for engines that
    /// return text only)
    #[serde(default)]
    pub words: Vec<WordTimestamp>,
    /// Total audio duration in seconds
    pub duration: f32,
    /// Language tag when the engine reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Caption-length span of text with timestamps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubtitleSegment {
    /// Unique segment id
    pub id: String,
    /// Caption text, trimmed
    pub text: String,
    /// Start time in seconds
    #[serde(alias = "startTime")]
    pub start: f32,
    /// End time in seconds
    #[serde(alias = "endTime")]
    pub end: f32,
    /// Words the segment was built from (empty in the duration-estimated path)
    #[serde(default)]
    pub words: Vec<WordTimestamp>,
}

impl SubtitleSegment {
    /// Segment duration in seconds.
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }

    /// Character count of the text, whitespace excluded.
    pub fn char_count(&self) -> usize {
        count_chars(&self.text)
    }
}

/// Count characters excluding whitespace.
pub fn count_chars(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}
