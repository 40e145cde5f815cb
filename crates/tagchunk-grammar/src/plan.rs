//! Compiled grammar plans consumed by the matching engine.

use std::fmt;

use crate::tag::{Repetition, TagPattern};

/// One tag group with its multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pattern: TagPattern,
    repetition: Repetition,
}

impl Group {
    /// Create a group from a tag pattern and repetition.
    #[must_use]
    pub fn new(pattern: TagPattern, repetition: Repetition) -> Self {
        Self {
            pattern,
            repetition,
        }
    }

    /// The tag predicate for this group.
    #[must_use]
    pub fn pattern(&self) -> &TagPattern {
        &self.pattern
    }

    /// How many tags the group may consume.
    #[must_use]
    pub fn repetition(&self) -> Repetition {
        self.repetition
    }

    pub(crate) fn set_repetition(&mut self, repetition: Repetition) {
        self.repetition = repetition;
    }

    /// Count how many tags this group consumes from the front of `tags`.
    ///
    /// Unbounded groups are greedy and take the whole leading run of matching
    /// tags. Returns `None` when the group requires a tag that is not there.
    ///
    /// # Examples
    /// ```
    /// use tagchunk_grammar::{Group, Repetition, TagPattern};
    /// let group = Group::new(TagPattern::Literal("NNP".into()), Repetition::OneOrMore);
    /// assert_eq!(group.consume(&["NNP", "NNP", "VBZ"]), Some(2));
    /// assert_eq!(group.consume(&["VBZ"]), None);
    /// ```
    #[must_use]
    pub fn consume<S: AsRef<str>>(&self, tags: &[S]) -> Option<usize> {
        let matching = |tag: &S| self.pattern.matches(tag.as_ref());
        let taken = if self.repetition.is_unbounded() {
            tags.iter().take_while(|tag| matching(*tag)).count()
        } else {
            usize::from(tags.first().is_some_and(matching))
        };
        (taken >= self.repetition.min()).then_some(taken)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>{}", self.pattern, self.repetition)
    }
}

/// An immutable, compiled tag grammar.
///
/// Plans are produced by [`compile_grammar`](crate::compile_grammar) and are
/// safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarPlan {
    source: String,
    groups: Vec<Group>,
}

impl GrammarPlan {
    pub(crate) fn new(source: &str, groups: Vec<Group>) -> Self {
        Self {
            source: source.to_string(),
            groups,
        }
    }

    /// The grammar string this plan was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Groups in match order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Minimum number of tags any match of this plan spans.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.repetition().min())
            .sum()
    }

    /// Match the plan against the front of `tags`, group by group.
    ///
    /// Each group consumes greedily and the engine never backtracks into an
    /// earlier group. Returns the number of tags consumed, or `None` when the
    /// plan fails or would consume nothing.
    ///
    /// # Examples
    /// ```
    /// use tagchunk_grammar::compile_grammar;
    /// # fn main() -> Result<(), tagchunk_grammar::GrammarSyntaxError> {
    /// let plan = compile_grammar("<DT>?<JJ>*<NN>+")?;
    /// assert_eq!(plan.match_prefix(&["DT", "JJ", "JJ", "NN", "VBZ"]), Some(4));
    /// assert_eq!(plan.match_prefix(&["VBZ", "NN"]), None);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn match_prefix<S: AsRef<str>>(&self, tags: &[S]) -> Option<usize> {
        let mut cursor = 0usize;
        for group in &self.groups {
            let remaining = tags.get(cursor..)?;
            cursor += group.consume(remaining)?;
        }
        (cursor > 0).then_some(cursor)
    }
}

impl fmt::Display for GrammarPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.groups
            .iter()
            .try_for_each(|group| write!(f, "{group}"))
    }
}
