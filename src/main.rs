// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use freq_count::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(config.log_level) {
        eprintln!("Logging disabled: {e}");
    }

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {e:?}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
