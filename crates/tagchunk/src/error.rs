//! Error types for chunker configuration and input validation.

use tagchunk_grammar::GrammarSyntaxError;
use thiserror::Error;

/// Tagged input that breaks the ordering or tag invariants the chunker relies
/// on.
///
/// Offsets in messages are character offsets into the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputContractError {
    /// A token ends before it begins.
    #[error("token {token} in sentence {sentence} has begin {begin} after end {end}")]
    InvertedOffsets {
        /// Owning sentence index.
        sentence: usize,
        /// Token position within the sentence.
        token: usize,
        /// Begin offset.
        begin: usize,
        /// End offset (inclusive).
        end: usize,
    },
    /// A token starts at or before the end of the preceding token.
    #[error(
        "token {token} in sentence {sentence} begins at {begin}, overlapping the previous token ending at {previous_end}"
    )]
    OverlappingTokens {
        /// Owning sentence index.
        sentence: usize,
        /// Token position within the sentence.
        token: usize,
        /// Begin offset of the offending token.
        begin: usize,
        /// End offset of the preceding token.
        previous_end: usize,
    },
    /// A token extends past the end of the document.
    #[error(
        "token {token} in sentence {sentence} ends at {end}, beyond the document length of {length} characters"
    )]
    OutOfBounds {
        /// Owning sentence index.
        sentence: usize,
        /// Token position within the sentence.
        token: usize,
        /// End offset (inclusive).
        end: usize,
        /// Document length in characters.
        length: usize,
    },
    /// A token carries an empty tag.
    #[error("token {token} in sentence {sentence} has an empty tag")]
    EmptyTag {
        /// Owning sentence index.
        sentence: usize,
        /// Token position within the sentence.
        token: usize,
    },
    /// A tag contains `<` or `>`, which would corrupt bracketed tag matching.
    #[error("token {token} in sentence {sentence} has tag `{tag}` containing an angle bracket")]
    BracketInTag {
        /// Owning sentence index.
        sentence: usize,
        /// Token position within the sentence.
        token: usize,
        /// The offending tag.
        tag: String,
    },
    /// A part-of-speech annotation lacks a usable `sentence` metadata value.
    #[error("pos annotation at {begin}..={end} has invalid sentence metadata: {value:?}")]
    SentenceMetadata {
        /// Begin offset of the annotation.
        begin: usize,
        /// End offset of the annotation.
        end: usize,
        /// The raw metadata value, when present.
        value: Option<String>,
    },
}

/// Errors surfaced by the chunker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkerError {
    /// A configured grammar failed to compile.
    #[error("invalid chunk grammar `{grammar}`: {source}")]
    Grammar {
        /// The grammar string as configured.
        grammar: String,
        /// The underlying syntax error.
        #[source]
        source: GrammarSyntaxError,
    },
    /// Tagged input violated the chunker's input contract.
    #[error(transparent)]
    Input(#[from] InputContractError),
}
