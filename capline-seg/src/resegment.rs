//! Duration-based segmentation for text without word timestamps.
//!
//! Timestamps produced here are estimates: each span's share of the total
//! duration is proportional to its share of the non-whitespace characters.

use crate::id::IdGenerator;
use crate::splitter::Segmenter;
use crate::types::{SubtitleSegment, count_chars};
use regex::Regex;

impl<R, G: IdGenerator> Segmenter<R, G> {
    /// Segment plain text by distributing `total_duration` across sentences
    /// proportionally to character count, then merge short results.
    ///
    /// Sentences whose estimate exceeds the maximum duration are subdivided
    /// at natural breaks first, then by word count. Output segments carry no
    /// word timestamps. Empty text or a non-positive duration yields an
    /// empty sequence.
    pub fn segment_text(&mut self, text: &str, total_duration: f32) -> Vec<SubtitleSegment> {
        let sentences = split_sentences(text, &self.options.sentence_delimiters);
        let total_chars: usize = sentences.iter().map(|s| count_chars(s)).sum();

        if total_chars == 0 || total_duration <= 0.0 {
            tracing::warn!(total_chars, total_duration, "nothing to segment");
            return Vec::new();
        }

        let chars_per_sec = total_chars as f32 / total_duration;

        let mut segments = Vec::new();
        let mut current = 0.0f32;

        for sentence in &sentences {
            let estimate = count_chars(sentence) as f32 / chars_per_sec;
            self.emit_span(sentence, current, estimate, &mut segments);
            current += estimate;
        }

        self.merge_short(segments)
    }

    /// Emit one or more segments covering `text` over `[start, start + duration)`.
    fn emit_span(
        &mut self,
        text: &str,
        start: f32,
        duration: f32,
        out: &mut Vec<SubtitleSegment>,
    ) {
        if duration <= self.options.max_duration {
            out.push(self.estimated_segment(text, start, start + duration));
            return;
        }

        let parts = split_on_breaks(text, &self.options.natural_break);
        if parts.len() <= 1 {
            self.split_by_words(text, start, duration, out);
            return;
        }

        let part_chars: usize = parts.iter().map(|p| count_chars(p)).sum();
        if part_chars == 0 {
            out.push(self.estimated_segment(text, start, start + duration));
            return;
        }

        let mut t = start;
        for part in &parts {
            let share = duration * count_chars(part) as f32 / part_chars as f32;

            if share > self.options.max_duration {
                self.split_by_words(part, t, share, out);
            } else {
                out.push(self.estimated_segment(part, t, t + share));
            }

            t += share;
        }
    }

    /// Chunk `text` into word runs sized toward the target duration.
    fn split_by_words(&mut self, text: &str, start: f32, duration: f32, out: &mut Vec<SubtitleSegment>) {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            return;
        }

        let per_word = duration / words.len() as f32;
        if !(per_word > 0.0) {
            out.push(self.estimated_segment(text, start, start + duration));
            return;
        }

        let per_chunk = ((self.options.target_duration / per_word).ceil() as usize).max(1);

        let mut t = start;
        for run in words.chunks(per_chunk) {
            let span = per_word * run.len() as f32;
            out.push(self.estimated_segment(&run.join(" "), t, t + span));
            t += span;
        }
    }

    fn estimated_segment(&mut self, text: &str, start: f32, end: f32) -> SubtitleSegment {
        SubtitleSegment {
            id: self.ids.next_id(),
            text: text.trim().to_string(),
            start,
            end,
            words: Vec::new(),
        }
    }
}

/// Split text after sentence-final punctuation, keeping the punctuation
/// attached to its sentence.
///
/// Cuts only where the delimiter is followed by whitespace or end of text,
/// so decimals and run-on punctuation stay together.
fn split_sentences(text: &str, delimiters: &Regex) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut last = 0;

    for m in delimiters.find_iter(text) {
        let end = m.end();
        let at_boundary = text[end..].chars().next().is_none_or(char::is_whitespace);
        if !at_boundary {
            continue;
        }

        let sentence = text[last..end].trim();
        if !sentence.is_empty() {
            sentences.push(sentence.to_string());
        }
        last = end;
    }

    let tail = text[last..].trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Split text at natural breaks.
///
/// Punctuation breaks stay attached to the left part; a conjunction match
/// (which starts with its leading whitespace) opens the next part.
fn split_on_breaks(text: &str, pattern: &Regex) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;

    for m in pattern.find_iter(text) {
        let cut = if m.as_str().starts_with(char::is_whitespace) {
            m.start()
        } else {
            m.end()
        };

        if cut <= last {
            continue;
        }

        let part = text[last..cut].trim();
        if !part.is_empty() {
            parts.push(part.to_string());
        }
        last = cut;
    }

    let tail = text[last..].trim();
    if !tail.is_empty() {
        parts.push(tail.to_string());
    }

    parts
}
