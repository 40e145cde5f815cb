//! Grammar lexer converting grammar strings into semantic tokens.

use crate::errors::GrammarSyntaxError;

use super::group::{GroupSpec, scan_group};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Group {
        open: usize,
        close: usize,
        body: String,
    },
    Operator {
        index: usize,
        op: char,
    },
    Stray {
        index: usize,
        ch: char,
    },
}

impl Token {
    /// Byte offset just past the token.
    pub(crate) fn end(&self) -> usize {
        match self {
            Self::Group { close, .. } => close + 1,
            Self::Operator { index, op } => index + op.len_utf8(),
            Self::Stray { index, ch } => index + ch.len_utf8(),
        }
    }
}

/// Split a grammar into groups, operators, and stray characters.
///
/// Whitespace between tokens is skipped; callers use token offsets to detect
/// adjacency.
pub(crate) fn lex_grammar(grammar: &str) -> Result<Vec<Token>, GrammarSyntaxError> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(ch) = grammar.get(pos..).and_then(|rest| rest.chars().next()) {
        match ch {
            '<' => {
                let (next_pos, GroupSpec { body, open, close }) = scan_group(grammar, pos)?;
                tokens.push(Token::Group { open, close, body });
                pos = next_pos;
            }
            '>' => return Err(GrammarSyntaxError::UnmatchedClose { position: pos }),
            '?' | '*' | '+' => {
                tokens.push(Token::Operator { index: pos, op: ch });
                pos += 1;
            }
            c if c.is_whitespace() => pos += c.len_utf8(),
            c => {
                tokens.push(Token::Stray { index: pos, ch: c });
                pos += c.len_utf8();
            }
        }
    }

    Ok(tokens)
}
