// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use freq_count_infra::{BuiltinSequence, StreamReportWriter};
use freq_count_usecase::{TallyOutput, TallySequence};

use crate::config::Config;

/// Tally the built-in sequence and print the report to stdout.
pub fn run(config: &Config) -> Result<()> {
    let mut writer = StreamReportWriter::stdout(config.format);
    let output = tally_into(config, &mut writer)?;
    log::info!(
        "reported {} distinct values over {} elements",
        output.summary.distinct,
        output.summary.total
    );
    Ok(())
}

/// Same as [`run`], writing to `out` and returning the tally.
pub fn run_to<W: Write>(config: &Config, out: W) -> Result<TallyOutput> {
    let mut writer = StreamReportWriter::new(out, config.format);
    tally_into(config, &mut writer)
}

fn tally_into<W: Write>(config: &Config, writer: &mut StreamReportWriter<W>) -> Result<TallyOutput> {
    let source = BuiltinSequence::new();
    TallySequence::new(&source, config.range)
        .report(writer)
        .context("failed to report frequencies")
}
