//! Command line front end for the `tagchunk` chunker.
//!
//! The binary reads a tagged JSON document, applies the configured tag
//! grammars and prints one chunk per line, or a JSON array with `--json`.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
mod output;
