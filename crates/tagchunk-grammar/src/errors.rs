//! Error types shared by the grammar parsing modules.

use thiserror::Error;

/// Errors surfaced while compiling tag grammars into matcher plans.
///
/// Positions are zero-based byte offsets into the grammar string.
///
/// # Examples
/// ```
/// use tagchunk_grammar::{GrammarSyntaxError, compile_grammar};
/// let Err(err) = compile_grammar("<NNP") else {
///     panic!("grammar should be rejected");
/// };
/// assert_eq!(err, GrammarSyntaxError::UnclosedGroup { position: 0 });
/// assert_eq!(err.to_string(), "unmatched '<' in tag grammar at byte 0 (zero-based)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarSyntaxError {
    /// The grammar string is empty or contains only whitespace.
    #[error("tag grammar is empty")]
    EmptyGrammar,
    /// A `<` was never closed by a matching `>`.
    #[error("unmatched '<' in tag grammar at byte {position} (zero-based)")]
    UnclosedGroup {
        /// Offset of the unmatched `<`.
        position: usize,
    },
    /// A `<` appeared inside a group that was still open.
    #[error("nested '<' inside tag group opened at byte {open} (found at byte {position})")]
    NestedGroup {
        /// Offset of the group's opening `<`.
        open: usize,
        /// Offset of the nested `<`.
        position: usize,
    },
    /// A `>` appeared without an open group.
    #[error("unmatched '>' in tag grammar at byte {position} (zero-based)")]
    UnmatchedClose {
        /// Offset of the stray `>`.
        position: usize,
    },
    /// A group contained no tag.
    #[error("empty tag group at byte {position} (zero-based)")]
    EmptyGroup {
        /// Offset of the group's opening `<`.
        position: usize,
    },
    /// The character following a group is not a repetition operator.
    #[error("unknown repetition operator `{operator}` at byte {position} (zero-based)")]
    UnknownOperator {
        /// The offending character.
        operator: char,
        /// Offset of the offending character.
        position: usize,
    },
    /// A repetition operator that does not directly follow a group.
    #[error("repetition operator `{operator}` at byte {position} does not follow a tag group")]
    DanglingOperator {
        /// The operator character.
        operator: char,
        /// Offset of the operator.
        position: usize,
    },
    /// Text outside any tag group.
    #[error("unexpected `{found}` outside a tag group at byte {position} (zero-based)")]
    StrayText {
        /// The offending character.
        found: char,
        /// Offset of the offending character.
        position: usize,
    },
    /// A tag expression such as `<NN.*>` is not a valid regular expression.
    #[error("invalid tag expression `{body}` at byte {position}: {reason}")]
    TagExpression {
        /// The group body as written.
        body: String,
        /// Offset of the group's opening `<`.
        position: usize,
        /// Message reported by the regex engine.
        reason: String,
    },
}

impl GrammarSyntaxError {
    /// Byte offset the error refers to, when it refers to one.
    #[must_use]
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyGrammar => None,
            Self::UnclosedGroup { position }
            | Self::NestedGroup { position, .. }
            | Self::UnmatchedClose { position }
            | Self::EmptyGroup { position }
            | Self::UnknownOperator { position, .. }
            | Self::DanglingOperator { position, .. }
            | Self::StrayText { position, .. }
            | Self::TagExpression { position, .. } => Some(*position),
        }
    }
}

pub(crate) fn tag_expression_error(
    body: &str,
    position: usize,
    source: &regex::Error,
) -> GrammarSyntaxError {
    GrammarSyntaxError::TagExpression {
        body: body.to_string(),
        position,
        reason: source.to_string(),
    }
}
