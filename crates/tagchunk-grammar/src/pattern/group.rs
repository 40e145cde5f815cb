//! Tag group scanning and body classification used by the lexer.

use regex::Regex;

use crate::errors::{GrammarSyntaxError, tag_expression_error};
use crate::tag::TagPattern;

/// Characters that turn a group body into a tag expression.
///
/// `.` and `$` are deliberately absent: Penn tags such as `.` and `PRP$`
/// must stay literal.
const EXPRESSION_CHARS: &[char] = &['|', '*', '+', '?', '(', ')', '[', ']', '^', '\\'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupSpec {
    pub body: String,
    pub open: usize,
    pub close: usize,
}

/// Scan a group starting at the `<` located at `open`.
///
/// Returns the byte offset just past the closing `>` together with the raw
/// group body.
pub(crate) fn scan_group(src: &str, open: usize) -> Result<(usize, GroupSpec), GrammarSyntaxError> {
    let rest = src
        .get(open + 1..)
        .ok_or(GrammarSyntaxError::UnclosedGroup { position: open })?;
    for (offset, ch) in rest.char_indices() {
        let position = open + 1 + offset;
        match ch {
            '<' => return Err(GrammarSyntaxError::NestedGroup { open, position }),
            '>' => {
                let body = rest.get(..offset).unwrap_or_default().to_string();
                return Ok((
                    position + 1,
                    GroupSpec {
                        body,
                        open,
                        close: position,
                    },
                ));
            }
            _ => {}
        }
    }
    Err(GrammarSyntaxError::UnclosedGroup { position: open })
}

/// Classify and compile a group body into a [`TagPattern`].
pub(crate) fn parse_tag_pattern(body: &str, open: usize) -> Result<TagPattern, GrammarSyntaxError> {
    let body = body.trim();
    if body.is_empty() {
        return Err(GrammarSyntaxError::EmptyGroup { position: open });
    }
    if body == "*" || body == ".*" {
        return Ok(TagPattern::Any);
    }
    if body.contains(EXPRESSION_CHARS) {
        let regex = Regex::new(&format!("^(?:{body})$"))
            .map_err(|err| tag_expression_error(body, open, &err))?;
        return Ok(TagPattern::Expression {
            source: body.to_string(),
            regex,
        });
    }
    Ok(TagPattern::Literal(body.to_string()))
}
