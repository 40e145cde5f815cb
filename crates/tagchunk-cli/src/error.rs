//! Errors that stop the command before any document is chunked.

use tagchunk::ChunkerError;
use thiserror::Error;

/// Invalid command configuration.
///
/// The binary exits with status 2 for these errors and 1 for every other
/// failure.
#[derive(Debug, Error)]
pub enum CliError {
    /// An environment variable or flag holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A configured grammar failed to compile.
    #[error(transparent)]
    Grammar(#[from] ChunkerError),
}
