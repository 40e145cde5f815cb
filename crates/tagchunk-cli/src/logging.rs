//! Structured logging for the command line tool.
//!
//! Logs are written to stderr so that chunk output on stdout stays clean.
//! Records emitted by the libraries through the `log` facade are forwarded to
//! the same subscriber.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `TAGCHUNK_LOG_LEVEL`
/// 3. Default configuration value
///
/// A second call is a no-op; the first subscriber wins.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
