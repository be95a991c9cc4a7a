//! Subtitle file writing shared by subcommands.

use crate::cli::Format;
use crate::{srt, vtt};
use capline_seg::types::SubtitleSegment;
use eyre::{Context, Result};
use std::path::Path;

/// Render `segments` in `format`, write to `path`, and optionally print a
/// preview to stdout.
pub fn write_segments(
    segments: &[SubtitleSegment],
    path: &Path,
    format: Format,
    preview: bool,
) -> Result<()> {
    let rendered = match format {
        Format::Srt => srt::render(segments),
        Format::Vtt => vtt::render(segments),
    };

    tracing::info!(path = ?path.display(), count = segments.len(), "writing subtitles");

    std::fs::write(path, &rendered)
        .wrap_err_with(|| format!("failed to write subtitles: {:?}", path.display()))?;

    if preview {
        match format {
            Format::Srt => println!("{}", srt::preview(segments, 3, 3)),
            Format::Vtt => println!("{rendered}"),
        }
    }

    Ok(())
}
