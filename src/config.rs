// src/config.rs
use derive_builder::Builder;
use freq_count_domain::{OutputFormat, ValueRange};
use freq_count_shared_kernel::{PresentationError, PresentationResult};
use log::LevelFilter;

use crate::cli::Args;

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub format: OutputFormat,
    /// Accepted values; `None` sizes the table by whatever values occur.
    #[builder(default = "Some(ValueRange::DIGITS)")]
    pub range: Option<ValueRange>,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self { format: OutputFormat::default(), range: Some(ValueRange::DIGITS), log_level: LevelFilter::Warn }
    }
}

impl TryFrom<&Args> for Config {
    type Error = PresentationError;

    fn try_from(args: &Args) -> PresentationResult<Self> {
        ConfigBuilder::default()
            .format(args.format)
            .log_level(log_level(args.verbose, args.quiet))
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config_for(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(argv).unwrap();
        Config::try_from(&args).unwrap()
    }

    #[test]
    fn defaults_match_plain_invocation() {
        assert_eq!(config_for(&["freq_count"]), Config::default());
    }

    #[test]
    fn maps_format_and_verbosity() {
        let config = config_for(&["freq_count", "--format", "yaml", "-vvv"]);
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.log_level, LevelFilter::Trace);
        assert_eq!(config.range, Some(ValueRange::DIGITS));
    }

    #[test]
    fn quiet_turns_logging_off() {
        assert_eq!(config_for(&["freq_count", "-q"]).log_level, LevelFilter::Off);
    }

    #[test]
    fn builder_accepts_unbounded_range() {
        let config = ConfigBuilder::default().range(None::<ValueRange>).build().unwrap();
        assert_eq!(config.range, None);
        assert_eq!(config.format, OutputFormat::Tsv);
    }
}
