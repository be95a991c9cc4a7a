//! Seg subcommand - segment a word-timestamped transcript into subtitles.

use crate::cli::{Format, Language, OutputArgs, SplitArgs};
use crate::output;
use capline_seg::boundary::{English, Korean};
use capline_seg::id::UuidIds;
use capline_seg::options::SplitterOptions;
use capline_seg::splitter::Segmenter;
use capline_seg::types::{SttResult, SubtitleSegment};
use eyre::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for transcript segmentation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to transcript JSON with word-level timestamps
    pub path: PathBuf,

    /// Output subtitle path (default: input path with the format extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub split: SplitArgs,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Resolved configuration for transcript segmentation.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub options: SplitterOptions,
    pub language: Language,
    pub format: Format,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let language = args.split.language;

        Ok(Self {
            path: args.path,
            output: args.output,
            options: args.split.try_into()?,
            language,
            format: args.out.format,
            preview: args.out.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let output = config
        .output
        .unwrap_or_else(|| config.path.with_extension(config.format.extension()));

    tracing::info!(
        input = ?config.path.display(),
        output = ?output.display(),
        "segmenting transcript"
    );

    let raw = std::fs::read_to_string(&config.path)
        .wrap_err_with(|| format!("failed to read transcript: {:?}", config.path.display()))?;

    let transcript: SttResult = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("invalid transcript json: {:?}", config.path.display()))?;

    tracing::info!(
        words = transcript.words.len(),
        duration = transcript.duration,
        "transcript loaded"
    );

    let segments = segment_transcript(&transcript, config.options, config.language);

    tracing::info!(count = segments.len(), "segments produced");

    output::write_segments(&segments, &output, config.format, config.preview)
}

/// Run split + merge with the boundary rules for `language`.
pub fn segment_transcript(
    transcript: &SttResult,
    options: SplitterOptions,
    language: Language,
) -> Vec<SubtitleSegment> {
    match language {
        Language::Korean => {
            Segmenter::from_parts(options, Korean, UuidIds).segment_result(transcript)
        }
        Language::English => {
            Segmenter::from_parts(options, English, UuidIds).segment_result(transcript)
        }
    }
}
