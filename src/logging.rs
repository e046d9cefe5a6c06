// src/logging.rs
use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};

/// Install the stderr logger. `RUST_LOG` takes precedence over `level`.
///
/// # Errors
/// Fails when a global logger is already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let env = Env::default().default_filter_or(level.as_str());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None).format_target(false);
    builder.try_init()
}
