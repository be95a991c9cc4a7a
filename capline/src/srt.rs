//! SRT subtitle rendering.

use capline_seg::types::SubtitleSegment;
use srtlib::{Subtitle, Timestamp};

/// Convert segments to numbered SRT subtitles.
pub fn to_subtitles(segments: &[SubtitleSegment]) -> Vec<Subtitle> {
    segments
        .iter()
        .zip(1..)
        .map(|(segment, index)| {
            Subtitle::new(
                index,
                secs_to_timestamp(segment.start),
                secs_to_timestamp(segment.end),
                segment.text.clone(),
            )
        })
        .collect()
}

/// Convert seconds to an SRT timestamp.
fn secs_to_timestamp(secs: f32) -> Timestamp {
    Timestamp::from_milliseconds((secs * 1000.0) as u32)
}

/// Render segments as SRT file content.
pub fn render(segments: &[SubtitleSegment]) -> String {
    join_subtitles(&to_subtitles(segments))
}

/// Display preview of segments (first and last cues).
pub fn preview(segments: &[SubtitleSegment], head_count: usize, tail_count: usize) -> String {
    let subtitles = to_subtitles(segments);
    let total = subtitles.len();

    if total <= head_count + tail_count {
        return join_subtitles(&subtitles);
    }

    let mut out: Vec<String> = subtitles[..head_count].iter().map(|s| s.to_string()).collect();
    out.push("...".to_string());
    out.extend(subtitles[total - tail_count..].iter().map(|s| s.to_string()));
    out.join("\n\n")
}

fn join_subtitles(subtitles: &[Subtitle]) -> String {
    subtitles
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn numbers_cues_from_one() {
        let segments = vec![seg(0.0, 1.1, "안녕하세요."), seg(1.5, 3.1, "반갑습니다.")];

        let subtitles = to_subtitles(&segments);

        assert_eq!(subtitles.len(), 2);
        assert_eq!(subtitles[0].text, "안녕하세요.");
        assert_eq!(subtitles[1].text, "반갑습니다.");

        let rendered = render(&segments);
        assert!(rendered.starts_with('1'));
        assert!(rendered.contains("-->"));
    }

    #[test]
    fn renders_empty_input_to_empty_string() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn preview_elides_the_middle() {
        let segments: Vec<SubtitleSegment> = (0..10)
            .map(|i| seg(i as f32, i as f32 + 1.0, &format!("구간 {i}")))
            .collect();

        let text = preview(&segments, 2, 2);

        assert!(text.contains("구간 0"));
        assert!(text.contains("..."));
        assert!(text.contains("구간 9"));
        assert!(!text.contains("구간 5"));
    }

    #[test]
    fn short_preview_shows_everything() {
        let segments = vec![seg(0.0, 1.0, "하나")];

        let text = preview(&segments, 3, 3);

        assert!(text.contains("하나"));
        assert!(!text.contains("..."));
    }
}
