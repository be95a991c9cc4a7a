//! Word-stream splitter producing caption-length segments.

use crate::boundary::{BoundaryRules, Korean};
use crate::id::{IdGenerator, UuidIds};
use crate::options::SplitterOptions;
use crate::types::{SttResult, SubtitleSegment, WordTimestamp, count_chars};

/// Why the splitter closed a segment at a given word.
///
/// Variants are listed in evaluation priority; the first matching rule wins.
/// Hard ceilings outrank linguistic cues so an overlong run can never escape
/// through a weaker rule, and soft cues only fire once the relevant duration
/// threshold is met.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitReason {
    /// Final word of the stream, the buffer must flush
    LastWord,
    /// Elapsed time reached the hard duration ceiling
    MaxDuration,
    /// Buffered text reached the character ceiling
    MaxCharacters,
    /// Word closes a sentence and the minimum duration is met
    SentenceEnd,
    /// Buffered text hit a natural break past the target duration
    NaturalBreak,
    /// Silence before the next word with the minimum duration met
    SilenceGap,
    /// Next word opens a clause past the target duration
    ClauseStart,
}

/// Splits a chronological word stream into subtitle segments.
///
/// Generic over the language [`BoundaryRules`] and the [`IdGenerator`] used
/// for created segments.
pub struct Segmenter<R = Korean, G = UuidIds> {
    pub options: SplitterOptions,
    pub(crate) rules: R,
    pub(crate) ids: G,
}

impl Segmenter {
    /// Segmenter with Korean boundary rules and UUID ids.
    pub fn new(options: SplitterOptions) -> Self {
        Self::from_parts(options, Korean, UuidIds)
    }
}

impl<R, G> Segmenter<R, G> {
    /// Segmenter with explicit boundary rules and id generator.
    pub fn from_parts(options: SplitterOptions, rules: R, ids: G) -> Self {
        Self { options, rules, ids }
    }
}

impl<R: BoundaryRules, G: IdGenerator> Segmenter<R, G> {
    /// Segment a transcription result end to end: split the word stream,
    /// then merge runs below the minimum duration.
    ///
    /// Falls back to [`segment_text`](Self::segment_text) when the engine
    /// reported no word-level timestamps. Empty input yields an empty output.
    pub fn segment_result(&mut self, result: &SttResult) -> Vec<SubtitleSegment> {
        if result.words.is_empty() {
            if result.text.trim().is_empty() {
                return Vec::new();
            }
            return self.segment_text(&result.text, result.duration);
        }

        let draft = self.segment(&result.words);
        self.merge_short(draft)
    }

    /// Split a word stream into segments.
    ///
    /// Words must be in chronological order. Every input word lands in
    /// exactly one output segment, in order; an empty input returns an empty
    /// sequence.
    pub fn segment(&mut self, words: &[WordTimestamp]) -> Vec<SubtitleSegment> {
        let Some(first) = words.first() else {
            return Vec::new();
        };

        let mut segments = Vec::new();
        let mut buffer: Vec<WordTimestamp> = Vec::new();
        let mut start = first.start;

        for (i, word) in words.iter().enumerate() {
            buffer.push(word.clone());

            let next = words.get(i + 1);
            let elapsed = word.end - start;
            let text = join_words(&buffer);
            let chars = count_chars(&text);

            if let Some(reason) = self.split_reason(elapsed, chars, &text, word, next) {
                tracing::trace!(?reason, text = %text, "closing segment");
                segments.push(self.build_segment(&mut buffer, start, text));
                if let Some(next) = next {
                    start = next.start;
                }
            }
        }

        // The last-word rule flushes the final run inside the loop; a
        // non-empty buffer here means the policy changed, flush it rather
        // than drop words.
        if !buffer.is_empty() {
            let text = join_words(&buffer);
            segments.push(self.build_segment(&mut buffer, start, text));
        }

        segments
    }

    /// Evaluate the split rules in priority order.
    fn split_reason(
        &self,
        elapsed: f32,
        chars: usize,
        text: &str,
        word: &WordTimestamp,
        next: Option<&WordTimestamp>,
    ) -> Option<SplitReason> {
        let opts = &self.options;

        let next = match next {
            None => return Some(SplitReason::LastWord),
            Some(next) => next,
        };

        if elapsed >= opts.max_duration {
            return Some(SplitReason::MaxDuration);
        }

        if chars >= opts.max_characters {
            return Some(SplitReason::MaxCharacters);
        }

        let sentence_end =
            opts.sentence_delimiters.is_match(&word.word) || self.rules.is_sentence_end(&word.word);
        if sentence_end && elapsed >= opts.min_duration {
            return Some(SplitReason::SentenceEnd);
        }

        if opts.natural_break.is_match(text) && elapsed >= opts.target_duration {
            return Some(SplitReason::NaturalBreak);
        }

        if next.start - word.end >= opts.silence_gap && elapsed >= opts.min_duration {
            return Some(SplitReason::SilenceGap);
        }

        if elapsed >= opts.target_duration && self.rules.is_clause_start(&next.word) {
            return Some(SplitReason::ClauseStart);
        }

        None
    }

    fn build_segment(
        &mut self,
        buffer: &mut Vec<WordTimestamp>,
        start: f32,
        text: String,
    ) -> SubtitleSegment {
        let words = std::mem::take(buffer);
        let end = words.last().map_or(start, |w| w.end);

        SubtitleSegment {
            id: self.ids.next_id(),
            text,
            start,
            end,
            words,
        }
    }
}

/// Join word tokens with single spaces, trimmed.
fn join_words(words: &[WordTimestamp]) -> String {
    words
        .iter()
        .map(|w| w.word.trim())
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
