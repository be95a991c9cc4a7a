//! Post-pass merging of segments below the minimum duration.

use crate::id::IdGenerator;
use crate::splitter::Segmenter;
use crate::types::SubtitleSegment;

impl<R, G: IdGenerator> Segmenter<R, G> {
    /// Fuse segments shorter than the minimum duration into their right
    /// neighbor, never letting the fused pair exceed the maximum duration.
    ///
    /// Single greedy left-to-right pass: a fused pair is consumed whole and
    /// not re-examined, so a run of three or more short segments can leave a
    /// short remainder. Use
    /// [`merge_until_stable`](Self::merge_until_stable) when full
    /// convergence matters.
    pub fn merge_short(&mut self, segments: Vec<SubtitleSegment>) -> Vec<SubtitleSegment> {
        if segments.len() <= 1 {
            return segments;
        }

        let min = self.options.min_duration;
        let max = self.options.max_duration;

        let mut merged = Vec::with_capacity(segments.len());
        let mut i = 0;

        while i < segments.len() {
            let current = &segments[i];

            match segments.get(i + 1) {
                Some(next)
                    if current.duration() < min
                        && current.duration() + next.duration() <= max =>
                {
                    tracing::trace!(left = %current.id, right = %next.id, "fusing short segment");
                    merged.push(self.fuse(current, next));
                    i += 2;
                }
                _ => {
                    merged.push(current.clone());
                    i += 1;
                }
            }
        }

        merged
    }

    /// Re-run [`merge_short`](Self::merge_short) until the sequence stops
    /// changing.
    ///
    /// Each pass strictly shrinks the sequence or leaves it untouched, so
    /// this terminates.
    pub fn merge_until_stable(&mut self, mut segments: Vec<SubtitleSegment>) -> Vec<SubtitleSegment> {
        loop {
            let before = segments.len();
            segments = self.merge_short(segments);

            if segments.len() == before {
                return segments;
            }
        }
    }

    fn fuse(&mut self, left: &SubtitleSegment, right: &SubtitleSegment) -> SubtitleSegment {
        let mut words = left.words.clone();
        words.extend(right.words.iter().cloned());

        SubtitleSegment {
            id: self.ids.next_id(),
            text: format!("{} {}", left.text, right.text).trim().to_string(),
            start: left.start,
            end: right.end,
            words,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Korean;
    use crate::id::SequentialIds;
    use crate::options::SplitterOptions;
    use crate::types::WordTimestamp;

    fn segmenter() -> Segmenter<Korean, SequentialIds> {
        Segmenter::from_parts(SplitterOptions::default(), Korean, SequentialIds::default())
    }

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
    fn merges_adjacent_short_pair() {
        let segments = vec![seg(0.0, 0.8, "잠깐"), seg(0.8, 1.7, "만요")];

        let merged = segmenter().merge_short(segments);

        match &merged[..] {
            [single] => {
                assert_eq!(single.text, "잠깐 만요");
                assert!((single.duration() - 1.7).abs() < 1e-6);
            }
            _ => panic!("expected 1 segment, got {}", merged.len()),
        }
    }

    #[test]
    fn keeps_pair_that_would_exceed_max_duration() {
        let segments = vec![seg(0.0, 1.0, "짧은"), seg(1.0, 4.0, "아주 긴 다음 구간")];

        let merged = segmenter().merge_short(segments);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].text, "짧은");
    }

    #[test]
    fn single_segment_passes_through() {
        let segments = vec![seg(0.0, 0.5, "하나")];

        let merged = segmenter().merge_short(segments);

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].id, "fixture-0");
    }

    #[test]
    fn one_pass_leaves_short_remainder_in_triple() {
        let segments = vec![
            seg(0.0, 0.5, "하나"),
            seg(0.5, 1.1, "둘"),
            seg(1.1, 1.8, "셋"),
        ];

        let merged = segmenter().merge_short(segments);

        // first pair fuses, the third stays short
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].text, "하나 둘");
        assert!(merged[1].duration() < 1.5);
    }

    #[test]
    fn stable_merge_converges_the_triple() {
        let segments = vec![
            seg(0.0, 0.5, "하나"),
            seg(0.5, 1.1, "둘"),
            seg(1.1, 1.8, "셋"),
        ];

        let merged = segmenter().merge_until_stable(segments);

        match &merged[..] {
            [single] => {
                assert_eq!(single.text, "하나 둘 셋");
                assert!((single.duration() - 1.8).abs() < 1e-6);
            }
            _ => panic!("expected 1 segment, got {}", merged.len()),
        }
    }

    #[test]
    fn fused_segment_concatenates_words() {
        let word_a = WordTimestamp::new("잠깐", 0.0, 0.8);
        let word_b = WordTimestamp::new("만요", 0.8, 1.7);

        let mut left = seg(0.0, 0.8, "잠깐");
        left.words = vec![word_a.clone()];
        let mut right = seg(0.8, 1.7, "만요");
        right.words = vec![word_b.clone()];

        let merged = segmenter().merge_short(vec![left, right]);

        assert_eq!(merged[0].words, vec![word_a, word_b]);
    }

    #[test]
    fn long_segments_pass_unchanged() {
        let segments = vec![seg(0.0, 2.0, "충분히 긴 구간"), seg(2.0, 4.5, "이것도 길다")];

        let merged = segmenter().merge_short(segments);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].id, "fixture-0");
        assert_eq!(merged[1].id, "fixture-2");
    }
}
