// src/cli/args.rs
use clap::{ArgAction, Parser};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "freq_count",
    version = crate::VERSION,
    about = "Print how often each value occurs in the built-in sequence (1, 3, 9, 4, 1, 2, 5, 2, 5, 3)"
)]
pub struct Args {
    /// Report format
    #[arg(long, value_enum, default_value = "tsv")]
    pub format: CliOutputFormat,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
