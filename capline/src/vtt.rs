//! WebVTT subtitle rendering.

use capline_seg::types::SubtitleSegment;
use std::fmt::Write;

/// Render segments as a WebVTT document.
pub fn render(segments: &[SubtitleSegment]) -> String {
    let mut out = String::from("WEBVTT\n\n");

    for (i, segment) in segments.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}\n{} --> {}\n{}\n",
            i + 1,
            format_cue_time(segment.start),
            format_cue_time(segment.end),
            segment.text.trim()
        );
    }

    out
}

/// Format seconds as a VTT cue time (HH:MM:SS.mmm).
fn format_cue_time(seconds: f32) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let hours = total_ms / 3_600_000;
    let minutes = (total_ms % 3_600_000) / 60_000;
    let secs = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;

    format!("{hours:02}:{minutes:02}:{secs:02}.{ms:03}")
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
    fn formats_cue_times() {
        assert_eq!(format_cue_time(0.0), "00:00:00.000");
        assert_eq!(format_cue_time(1.5), "00:00:01.500");
        assert_eq!(format_cue_time(61.234), "00:01:01.234");
        assert_eq!(format_cue_time(3661.25), "01:01:01.250");
    }

    #[test]
    fn renders_header_and_cues() {
        let segments = vec![seg(0.0, 2.5, "안녕하세요."), seg(2.5, 5.0, "반갑습니다.")];

        let vtt = render(&segments);

        assert!(vtt.starts_with("WEBVTT\n"));
        assert!(vtt.contains("1\n00:00:00.000 --> 00:00:02.500\n안녕하세요."));
        assert!(vtt.contains("2\n00:00:02.500 --> 00:00:05.000\n반갑습니다."));
    }

    #[test]
    fn renders_empty_input_as_bare_header() {
        assert_eq!(render(&[]), "WEBVTT\n\n");
    }
}
