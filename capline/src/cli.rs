//! CLI argument definitions using clap.

use capline_seg::options::{
    DEFAULT_MAX_CHARACTERS, DEFAULT_MAX_DURATION, DEFAULT_MIN_DURATION, DEFAULT_SILENCE_GAP,
    DEFAULT_TARGET_DURATION,
};
use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "cap")]
#[command(about = "Transcript segmentation and subtitle tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment a word-timestamped transcript into subtitles
    Seg(crate::seg::Args),

    /// Fit plain text into a duration as subtitles
    Fit(crate::fit::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Seg(args) => crate::seg::execute(args.try_into()?),
        Commands::Fit(args) => crate::fit::execute(args.try_into()?),
    }
}

/// Splitter threshold flags shared by subcommands.
#[derive(clap::Args, Clone, Debug)]
pub struct SplitArgs {
    /// Minimum segment duration in seconds
    #[arg(long, default_value_t = DEFAULT_MIN_DURATION)]
    pub min_duration: f32,

    /// Target segment duration in seconds
    #[arg(long, default_value_t = DEFAULT_TARGET_DURATION)]
    pub target_duration: f32,

    /// Maximum segment duration in seconds
    #[arg(long, default_value_t = DEFAULT_MAX_DURATION)]
    pub max_duration: f32,

    /// Maximum characters per segment, whitespace excluded
    #[arg(long, default_value_t = DEFAULT_MAX_CHARACTERS)]
    pub max_characters: usize,

    /// Silence gap in seconds treated as a split boundary
    #[arg(long, default_value_t = DEFAULT_SILENCE_GAP)]
    pub silence_gap: f32,

    /// Boundary rules to apply
    #[arg(long, value_enum, default_value_t = Language::Korean)]
    pub language: Language,
}

/// Boundary rule language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Language {
    Korean,
    English,
}

/// Output format and preview flags shared by subcommands.
#[derive(clap::Args, Clone, Debug)]
pub struct OutputArgs {
    /// Subtitle format to write
    #[arg(short, long, value_enum, default_value_t = Format::Srt)]
    pub format: Format,

    /// Print a head/tail preview of the result to stdout
    #[arg(short, long)]
    pub preview: bool,
}

/// Subtitle file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Srt,
    Vtt,
}

impl Format {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Srt => "srt",
            Format::Vtt => "vtt",
        }
    }
}
