//! Command configuration parsed from environment variables.
//!
//! Settings come from variables prefixed with `TAGCHUNK_` and may then be
//! overridden by command line flags.

use std::env;
use std::str::FromStr;

use tagchunk::ChunkerConfig;

use crate::error::CliError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "TAGCHUNK_LOG_LEVEL";
/// Environment variable holding `;`-separated grammars.
pub const GRAMMARS_VAR: &str = "TAGCHUNK_GRAMMARS";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that only problems reach stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Every match attempt.
    Trace,
    /// Grammar compilation and per-sentence summaries.
    Debug,
    /// One line per processed document.
    Info,
    /// Potential problems only.
    #[default]
    Warn,
    /// Failures only.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for one `tagchunk` invocation.
///
/// # Environment Variables
///
/// - `TAGCHUNK_LOG_LEVEL`: trace, debug, info, warn or error
/// - `TAGCHUNK_GRAMMARS`: grammars separated by `;`, used when no
///   `--grammar` flag is given
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level for the stderr subscriber.
    pub log_level: LogLevel,
    /// Grammars in priority order.
    pub grammars: Vec<String>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };
        let grammars = lookup(GRAMMARS_VAR)
            .map(|val| split_grammars(&val))
            .unwrap_or_default();
        Ok(Self {
            log_level,
            grammars,
        })
    }

    /// Apply command line overrides.
    ///
    /// A non-empty `grammars` list replaces the environment's grammars
    /// entirely.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, grammars: &[String]) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if !grammars.is_empty() {
            self.grammars = grammars.to_vec();
        }
        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Chunker configuration for the selected grammars.
    #[must_use]
    pub fn chunker_config(&self) -> ChunkerConfig {
        ChunkerConfig::new(self.grammars.iter().cloned())
    }
}

fn split_grammars(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|grammar| !grammar.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("Debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case(" error ", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] raw: &str, #[case] expected: LogLevel) {
        assert_eq!(raw.parse::<LogLevel>().unwrap(), expected);
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let err = "loud".parse::<LogLevel>().unwrap_err();
        assert!(err.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn defaults_without_environment() {
        let config = CliConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn reads_grammars_and_level_from_environment() {
        let config = CliConfig::from_lookup(lookup(&[
            (GRAMMARS_VAR, "<NNP>+; <NNS>+ ;;"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.grammars, ["<NNP>+", "<NNS>+"]);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn rejects_bad_log_level_in_environment() {
        let result = CliConfig::from_lookup(lookup(&[(LOG_LEVEL_VAR, "chatty")]));
        assert!(matches!(result, Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn flags_override_environment() {
        let config = CliConfig::from_lookup(lookup(&[(GRAMMARS_VAR, "<NNP>+")]))
            .unwrap()
            .apply_overrides(Some(LogLevel::Trace), &["<JJ>".to_string()]);
        assert_eq!(config.grammars, ["<JJ>"]);
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn empty_flags_keep_environment_grammars() {
        let config = CliConfig::from_lookup(lookup(&[(GRAMMARS_VAR, "<NNP>+")]))
            .unwrap()
            .apply_overrides(None, &[]);
        assert_eq!(config.grammars, ["<NNP>+"]);
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn chunker_config_keeps_grammar_order() {
        let config = CliConfig {
            grammars: vec!["<NNS>".into(), "<NNP>".into()],
            ..CliConfig::default()
        };
        assert_eq!(config.chunker_config().regex_parsers(), ["<NNS>", "<NNP>"]);
    }
}
