//! Typed chunker configuration, validated when a [`Chunker`] is built.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chunker::Chunker;
use crate::error::ChunkerError;

/// Configuration for a [`Chunker`].
///
/// `regex_parsers` lists the tag grammars in priority order; when two
/// grammars match at the same position the earlier one wins.
///
/// # Examples
/// ```
/// use tagchunk::ChunkerConfig;
/// # fn main() -> Result<(), tagchunk::ChunkerError> {
/// let chunker = ChunkerConfig::default()
///     .with_regex_parsers(["<NNP>+", "<NNS>+"])
///     .build()?;
/// assert_eq!(chunker.plans().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ChunkerConfig {
    /// Tag grammars such as `<DT>?<JJ>*<NN>+`.
    pub regex_parsers: Vec<String>,
}

impl ChunkerConfig {
    /// Create a configuration from grammar strings.
    #[must_use]
    pub fn new<I, S>(regex_parsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_regex_parsers(regex_parsers)
    }

    /// Replace the configured grammars.
    #[must_use]
    pub fn with_regex_parsers<I, S>(mut self, regex_parsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regex_parsers = regex_parsers.into_iter().map(Into::into).collect();
        self
    }

    /// Append one grammar with the lowest priority so far.
    #[must_use]
    pub fn with_regex_parser(mut self, grammar: impl Into<String>) -> Self {
        self.regex_parsers.push(grammar.into());
        self
    }

    /// Configured grammars in priority order.
    #[must_use]
    pub fn regex_parsers(&self) -> &[String] {
        &self.regex_parsers
    }

    /// Compile the grammars into a ready-to-use [`Chunker`].
    ///
    /// # Errors
    /// Returns [`ChunkerError::Grammar`] for the first grammar that fails to
    /// compile.
    pub fn build(self) -> Result<Chunker, ChunkerError> {
        Chunker::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let config = ChunkerConfig::new(["<NNS>+"]).with_regex_parser("<NNP>+");
        assert_eq!(config.regex_parsers(), ["<NNS>+", "<NNP>+"]);
    }

    #[test]
    fn with_regex_parsers_replaces_existing() {
        let config = ChunkerConfig::new(["<DT>"]).with_regex_parsers(vec![String::from("<NN>")]);
        assert_eq!(config.regex_parsers(), ["<NN>"]);
    }

    #[test]
    fn default_has_no_grammars() {
        assert!(ChunkerConfig::default().regex_parsers().is_empty());
    }

    #[test]
    fn build_rejects_malformed_grammar() {
        let Err(err) = ChunkerConfig::new(["<NNP>+", "<NNP"]).build() else {
            panic!("malformed grammar should be rejected");
        };
        assert!(matches!(err, ChunkerError::Grammar { ref grammar, .. } if grammar == "<NNP"));
    }
}
