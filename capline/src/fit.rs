//! Fit subcommand - fit plain text into a duration as subtitles.

use crate::cli::{Format, OutputArgs, SplitArgs};
use crate::output;
use capline_seg::options::SplitterOptions;
use capline_seg::splitter::Segmenter;
use color_eyre::Section;
use eyre::{Context, Result, eyre};
use std::path::PathBuf;

/// CLI arguments for duration-based segmentation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to a plain text file
    pub path: PathBuf,

    /// Total duration in seconds to distribute across the text
    #[arg(short, long)]
    pub duration: f32,

    /// Output subtitle path (default: input path with the format extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub split: SplitArgs,

    #[command(flatten)]
    pub out: OutputArgs,
}

/// Resolved configuration for duration-based segmentation.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub duration: f32,
    pub output: Option<PathBuf>,
    pub options: SplitterOptions,
    pub format: Format,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        if !(args.duration > 0.0) {
            return Err(eyre!("duration must be positive, got {}s", args.duration)
                .suggestion("pass the audio length in seconds via --duration"));
        }

        Ok(Self {
            path: args.path,
            duration: args.duration,
            output: args.output,
            options: args.split.try_into()?,
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
        duration = config.duration,
        "fitting text to duration"
    );

    let text = std::fs::read_to_string(&config.path)
        .wrap_err_with(|| format!("failed to read text: {:?}", config.path.display()))?;

    // Timestamps are estimated from character shares; the boundary rules
    // play no role in this path.
    let segments = Segmenter::new(config.options).segment_text(&text, config.duration);

    tracing::info!(count = segments.len(), "segments produced");

    output::write_segments(&segments, &output, config.format, config.preview)
}
