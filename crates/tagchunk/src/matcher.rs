//! Left-to-right chunk matching over a sentence's tag sequence.
//!
//! The sweep tries every grammar, in configured order, at each uncovered
//! position. The first grammar that matches wins the position; the scan then
//! resumes just past the match, so matches never overlap.

use tagchunk_grammar::GrammarPlan;

/// A matched run of tokens, as inclusive token indices within a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchedSpan {
    /// Index of the first token in the match.
    pub first: usize,
    /// Index of the last token in the match (inclusive).
    pub last: usize,
    /// Position of the grammar that produced the match.
    pub grammar: usize,
}

impl MatchedSpan {
    /// Number of tokens covered; always at least one.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.last - self.first + 1
    }
}

/// Find the first plan that matches at the front of `tags`.
///
/// Returns the plan position and the number of tags consumed.
fn first_match_at<S: AsRef<str>>(plans: &[GrammarPlan], tags: &[S]) -> Option<(usize, usize)> {
    plans
        .iter()
        .enumerate()
        .find_map(|(grammar, plan)| plan.match_prefix(tags).map(|len| (grammar, len)))
}

/// Find all non-overlapping matches in `tags`, leftmost first.
///
/// # Examples
/// ```
/// use tagchunk::matcher::{MatchedSpan, find_matches};
/// use tagchunk_grammar::compile_grammars;
/// # fn main() -> Result<(), tagchunk_grammar::GrammarSyntaxError> {
/// let plans = compile_grammars(&["<NNP>+"])?;
/// let spans = find_matches(&plans, &["NNP", "NNP", "NNS", "VBP"]);
/// assert_eq!(spans, [MatchedSpan { first: 0, last: 1, grammar: 0 }]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn find_matches<S: AsRef<str>>(plans: &[GrammarPlan], tags: &[S]) -> Vec<MatchedSpan> {
    let mut spans = Vec::new();
    if plans.is_empty() {
        return spans;
    }

    let mut cursor = 0usize;
    while let Some(rest) = tags.get(cursor..) {
        if rest.is_empty() {
            break;
        }
        match first_match_at(plans, rest) {
            Some((grammar, len)) => {
                let last = cursor + len - 1;
                log::trace!("grammar {grammar} matched tokens {cursor}..={last}");
                spans.push(MatchedSpan {
                    first: cursor,
                    last,
                    grammar,
                });
                cursor = last + 1;
            }
            None => cursor += 1,
        }
    }
    spans
}
