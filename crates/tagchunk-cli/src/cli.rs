//! Command parsing and dispatch for the `tagchunk` binary.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use tagchunk::Chunker;
use tracing::{debug, info};

use crate::config::{CliConfig, LogLevel};
use crate::error::CliError;
use crate::input::TaggedDocument;
use crate::output::{write_json, write_plans, write_rows};

/// Extract chunks from part-of-speech tagged text using tag grammars.
#[derive(Parser, Debug)]
#[command(name = "tagchunk", author, version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

impl Cli {
    /// The selected command.
    #[must_use]
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Grammars given on the command line, if any.
    #[must_use]
    pub fn grammars(&self) -> &[String] {
        match &self.command {
            Commands::Chunk(args) => &args.grammar.grammars,
            Commands::Check(args) => &args.grammar.grammars,
        }
    }

    /// Environment configuration with this invocation's flags applied.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` when the environment holds invalid
    /// values.
    pub fn config(&self) -> Result<CliConfig, CliError> {
        Ok(CliConfig::from_env()?.apply_overrides(self.log_level, self.grammars()))
    }
}

/// Supported commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chunk a tagged JSON document.
    Chunk(ChunkArgs),
    /// Validate grammars and print their canonical form.
    Check(CheckArgs),
}

/// Grammar selection shared by every command.
#[derive(Args, Debug)]
pub struct GrammarArgs {
    /// Tag grammar such as `<DT>?<JJ>*<NN>+`; repeat in priority order.
    #[arg(long = "grammar", short = 'g', value_name = "GRAMMAR")]
    pub(crate) grammars: Vec<String>,
}

/// Arguments for `tagchunk chunk`.
#[derive(Args, Debug)]
pub struct ChunkArgs {
    #[command(flatten)]
    pub(crate) grammar: GrammarArgs,
    /// Tagged document to read; stdin when omitted.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub(crate) input: Option<PathBuf>,
    /// Emit a JSON array of annotations instead of rows.
    #[arg(long)]
    pub(crate) json: bool,
}

/// Arguments for `tagchunk check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub(crate) grammar: GrammarArgs,
}

/// Run `command` with `config`, writing results to `out`.
///
/// # Errors
///
/// Fails with a [`CliError`] inside the report when a grammar does not
/// compile, and with other errors when input cannot be read, parsed or
/// chunked.
pub fn run(command: &Commands, config: &CliConfig, out: &mut dyn Write) -> Result<()> {
    let chunker = build_chunker(config)?;
    match command {
        Commands::Chunk(args) => handle_chunk(args, &chunker, out)?,
        Commands::Check(_) => write_plans(out, chunker.plans())?,
    }
    out.flush().wrap_err("failed to flush output")
}

fn build_chunker(config: &CliConfig) -> Result<Chunker, CliError> {
    let chunker = config.chunker_config().build()?;
    debug!(grammars = chunker.plans().len(), "chunker ready");
    Ok(chunker)
}

fn handle_chunk(args: &ChunkArgs, chunker: &Chunker, out: &mut dyn Write) -> Result<()> {
    let document = TaggedDocument::read(args.input.as_deref())?;
    let annotations = document
        .chunk(chunker)
        .wrap_err("tagged document breaks the input contract")?;
    info!(chunks = annotations.len(), "chunked document");
    if args.json {
        write_json(out, &annotations)
    } else {
        write_rows(out, &annotations)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn config(grammars: &[&str]) -> CliConfig {
        CliConfig {
            grammars: grammars.iter().map(ToString::to_string).collect(),
            ..CliConfig::default()
        }
    }

    #[test]
    fn parses_repeated_grammar_flags() {
        let cli = Cli::try_parse_from(["tagchunk", "check", "-g", "<NNP>+", "--grammar", "<NNS>"])
            .unwrap();
        assert_eq!(cli.grammars(), ["<NNP>+", "<NNS>"]);
    }

    #[test]
    fn parses_global_log_level_after_subcommand() {
        let cli = Cli::try_parse_from(["tagchunk", "chunk", "--json", "--log-level", "debug"])
            .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(cli.command, Commands::Chunk(ChunkArgs { json: true, .. })));
    }

    #[rstest]
    #[case(&["<NNP>+", "<JJ>* <NNS>"], "<NNP>+\n<JJ>*<NNS>\n")]
    #[case(&[], "")]
    fn check_prints_canonical_grammars(#[case] grammars: &[&str], #[case] expected: &str) {
        let command = Commands::Check(CheckArgs {
            grammar: GrammarArgs { grammars: Vec::new() },
        });
        let mut out = Vec::new();
        run(&command, &config(grammars), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn malformed_grammar_is_a_configuration_error() {
        let command = Commands::Check(CheckArgs {
            grammar: GrammarArgs { grammars: Vec::new() },
        });
        let report = run(&command, &config(&["<NNP"]), &mut Vec::new()).unwrap_err();
        assert!(report.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn chunks_a_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(
            &path,
            r#"{"text":"Dogs bark","sentences":[{"index":0,"tokens":[
                {"text":"Dogs","tag":"NNS","begin":0,"end":3},
                {"text":"bark","tag":"VBP","begin":5,"end":8}]}]}"#,
        )
        .unwrap();
        let command = Commands::Chunk(ChunkArgs {
            grammar: GrammarArgs { grammars: Vec::new() },
            input: Some(path),
            json: false,
        });
        let mut out = Vec::new();
        run(&command, &config(&["<NNS>"]), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "chunk 0 3 Dogs chunk=0 sentence=0\n"
        );
    }
}
