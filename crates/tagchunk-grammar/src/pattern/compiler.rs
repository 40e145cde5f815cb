//! Convert lexed tokens into compiled grammar plans.

use crate::errors::GrammarSyntaxError;
use crate::plan::{GrammarPlan, Group};
use crate::tag::Repetition;

use super::group::parse_tag_pattern;
use super::lexer::{Token, lex_grammar};

/// Kind and end offset of the token preceding the current one.
#[derive(Clone, Copy)]
enum Previous {
    Nothing,
    Group { end: usize },
    Operator { end: usize },
}

/// Compile one grammar string into an immutable [`GrammarPlan`].
///
/// # Errors
/// Returns [`GrammarSyntaxError`] when the grammar is empty, a bracket is
/// unbalanced, a group is empty, text appears outside a group, or a group is
/// followed by something other than `+`, `*`, or `?`.
///
/// # Examples
/// ```
/// use tagchunk_grammar::{Repetition, compile_grammar};
/// # fn main() -> Result<(), tagchunk_grammar::GrammarSyntaxError> {
/// let plan = compile_grammar("<NNP>+")?;
/// let group = plan.groups().first().ok_or(tagchunk_grammar::GrammarSyntaxError::EmptyGrammar)?;
/// assert_eq!(group.pattern().as_str(), "NNP");
/// assert_eq!(group.repetition(), Repetition::OneOrMore);
/// # Ok(())
/// # }
/// ```
pub fn compile_grammar(grammar: &str) -> Result<GrammarPlan, GrammarSyntaxError> {
    if grammar.trim().is_empty() {
        return Err(GrammarSyntaxError::EmptyGrammar);
    }

    let tokens = lex_grammar(grammar)?;
    let mut groups: Vec<Group> = Vec::with_capacity(tokens.len());
    let mut previous = Previous::Nothing;

    for token in tokens {
        let end = token.end();
        match token {
            Token::Group { open, body, .. } => {
                let pattern = parse_tag_pattern(&body, open)?;
                groups.push(Group::new(pattern, Repetition::Once));
                previous = Previous::Group { end };
            }
            Token::Operator { index, op } => {
                match previous {
                    Previous::Group { end: group_end } if group_end == index => {
                        let repetition = Repetition::from_operator(op)
                            .ok_or(GrammarSyntaxError::UnknownOperator {
                                operator: op,
                                position: index,
                            })?;
                        if let Some(last) = groups.last_mut() {
                            last.set_repetition(repetition);
                        }
                    }
                    Previous::Operator { end: op_end } if op_end == index => {
                        return Err(GrammarSyntaxError::UnknownOperator {
                            operator: op,
                            position: index,
                        });
                    }
                    _ => {
                        return Err(GrammarSyntaxError::DanglingOperator {
                            operator: op,
                            position: index,
                        });
                    }
                }
                previous = Previous::Operator { end };
            }
            Token::Stray { index, ch } => {
                let follows_group = matches!(
                    previous,
                    Previous::Group { end } | Previous::Operator { end } if end == index
                );
                return Err(if follows_group {
                    GrammarSyntaxError::UnknownOperator {
                        operator: ch,
                        position: index,
                    }
                } else {
                    GrammarSyntaxError::StrayText {
                        found: ch,
                        position: index,
                    }
                });
            }
        }
    }

    Ok(GrammarPlan::new(grammar, groups))
}
