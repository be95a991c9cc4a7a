//! Conversion from CLI flags to resolved splitter options.
//!
//! Args structs (for CLI parsing) live in cli.rs and the subcommand
//! modules; threshold resolution and validation happen here.

use crate::cli::SplitArgs;
use capline_seg::options::SplitterOptions;
use eyre::Result;

impl TryFrom<SplitArgs> for SplitterOptions {
    type Error = eyre::Error;

    fn try_from(args: SplitArgs) -> Result<Self> {
        let options = SplitterOptions {
            min_duration: args.min_duration,
            target_duration: args.target_duration,
            max_duration: args.max_duration,
            max_characters: args.max_characters,
            silence_gap: args.silence_gap,
            ..SplitterOptions::default()
        };

        options.validate()?;

        Ok(options)
    }
}
