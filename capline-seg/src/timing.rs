//! Timestamp recalculation after manual text edits.

use crate::splitter::Segmenter;
use crate::types::SubtitleSegment;

impl<R, G> Segmenter<R, G> {
    /// Reassign contiguous timestamps across `segments` proportionally to
    /// character count, covering exactly `total_duration`.
    ///
    /// Used after text edits invalidate prior timings: the timeline restarts
    /// at zero, each segment's span is its share of the non-whitespace
    /// characters, and the final end is pinned to the total so rounding
    /// cannot drift past it. Ids and words are preserved.
    ///
    /// Returns the input unchanged when there are no characters to apportion
    /// or the duration is not positive.
    pub fn recalculate_timings(
        &self,
        segments: Vec<SubtitleSegment>,
        total_duration: f32,
    ) -> Vec<SubtitleSegment> {
        let total_chars: usize = segments.iter().map(|s| s.char_count()).sum();

        if total_chars == 0 || total_duration <= 0.0 {
            tracing::warn!(total_chars, total_duration, "cannot apportion time, keeping input timings");
            return segments;
        }

        let per_char = total_duration / total_chars as f32;
        let count = segments.len();

        let mut current = 0.0f32;
        segments
            .into_iter()
            .enumerate()
            .map(|(i, mut segment)| {
                let span = segment.char_count() as f32 * per_char;
                segment.start = current;
                segment.end = if i + 1 == count {
                    total_duration
                } else {
                    current + span
                };
                current += span;
                segment
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::SplitterOptions;
    use crate::splitter::Segmenter;

    fn seg(start: f32, end: f32, text: &str) -> SubtitleSegment {
        SubtitleSegment {
            id: format!("fixture-{start}"),
            text: text.to_string(),
            start,
            end,
            words: Vec::new(),
        }
    }

    #[test]
    fn produces_contiguous_proportional_timeline() {
        let segments = vec![seg(0.0, 1.0, "hello world"), seg(3.0, 3.5, "hi")];

        let result = Segmenter::new(SplitterOptions::default()).recalculate_timings(segments, 6.0);

        // 10 chars vs 2 chars over 6 seconds
        assert!((result[0].start - 0.0).abs() < 1e-6);
        assert!((result[0].end - 5.0).abs() < 1e-4);
        assert!((result[1].start - 5.0).abs() < 1e-4);
        assert!((result[1].end - 6.0).abs() < 1e-6);
    }

    #[test]
    fn final_end_is_pinned_to_total() {
        let segments = vec![
            seg(0.0, 1.0, "셋"),
            seg(1.0, 2.0, "셋셋"),
            seg(2.0, 3.0, "셋셋"),
        ];

        let result = Segmenter::new(SplitterOptions::default()).recalculate_timings(segments, 7.0);

        assert_eq!(result.last().map(|s| s.end), Some(7.0));
        for pair in result.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_characters_keeps_input_unchanged() {
        let segments = vec![seg(0.0, 1.0, ""), seg(1.0, 2.0, "   ")];

        let result =
            Segmenter::new(SplitterOptions::default()).recalculate_timings(segments.clone(), 5.0);

        assert_eq!(result, segments);
    }

    #[test]
    fn non_positive_duration_keeps_input_unchanged() {
        let segments = vec![seg(0.0, 1.0, "텍스트")];

        let result =
            Segmenter::new(SplitterOptions::default()).recalculate_timings(segments.clone(), 0.0);

        assert_eq!(result, segments);
    }

    #[test]
    fn ids_survive_recalculation() {
        let segments = vec![seg(0.0, 1.0, "하나"), seg(1.0, 2.0, "둘")];

        let result = Segmenter::new(SplitterOptions::default()).recalculate_timings(segments, 4.0);

        assert_eq!(result[0].id, "fixture-0");
        assert_eq!(result[1].id, "fixture-1");
    }
}
