//! `tagchunk`: extract part-of-speech chunks from tagged documents.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use tagchunk_cli::cli::{Cli, run};
use tagchunk_cli::config::CliConfig;
use tagchunk_cli::error::CliError;
use tagchunk_cli::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "starting tagchunk");

    let mut stdout = io::stdout().lock();
    match run(cli.command(), &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) if report.downcast_ref::<CliError>().is_some() => {
            tracing::error!("{report}");
            ExitCode::from(2)
        }
        Err(report) => {
            tracing::error!("{report:#}");
            ExitCode::FAILURE
        }
    }
}
