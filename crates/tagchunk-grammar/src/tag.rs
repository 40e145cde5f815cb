//! Tag patterns and repetition operators used by compiled groups.

use std::fmt;

use regex::Regex;

/// Predicate a group applies to a single part-of-speech tag.
#[derive(Debug, Clone)]
pub enum TagPattern {
    /// Matches exactly one tag, compared verbatim.
    Literal(String),
    /// Matches any tag. Written `<*>` or `<.*>`.
    Any,
    /// Matches tags accepted by an anchored regular expression, e.g. `<NN.*>`.
    Expression {
        /// The group body as written in the grammar.
        source: String,
        /// Compiled whole-tag matcher.
        regex: Regex,
    },
}

impl TagPattern {
    /// Report whether `tag` satisfies this pattern.
    ///
    /// # Examples
    /// ```
    /// use tagchunk_grammar::TagPattern;
    /// let pattern = TagPattern::Literal("NNP".into());
    /// assert!(pattern.matches("NNP"));
    /// assert!(!pattern.matches("NNPS"));
    /// assert!(TagPattern::Any.matches("VBZ"));
    /// ```
    #[must_use]
    pub fn matches(&self, tag: &str) -> bool {
        match self {
            Self::Literal(expected) => expected == tag,
            Self::Any => true,
            Self::Expression { regex, .. } => regex.is_match(tag),
        }
    }

    /// The group body this pattern was compiled from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(tag) => tag,
            Self::Any => "*",
            Self::Expression { source, .. } => source,
        }
    }
}

impl PartialEq for TagPattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Any, Self::Any) => true,
            (Self::Expression { source: a, .. }, Self::Expression { source: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for TagPattern {}

impl fmt::Display for TagPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multiplicity attached to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Repetition {
    /// No operator: exactly one tag.
    #[default]
    Once,
    /// `?`: zero or one tag.
    Optional,
    /// `*`: zero or more tags.
    ZeroOrMore,
    /// `+`: one or more tags.
    OneOrMore,
}

impl Repetition {
    /// Map an operator character onto a repetition.
    ///
    /// # Examples
    /// ```
    /// use tagchunk_grammar::Repetition;
    /// assert_eq!(Repetition::from_operator('+'), Some(Repetition::OneOrMore));
    /// assert_eq!(Repetition::from_operator('{'), None);
    /// ```
    #[must_use]
    pub fn from_operator(op: char) -> Option<Self> {
        match op {
            '?' => Some(Self::Optional),
            '*' => Some(Self::ZeroOrMore),
            '+' => Some(Self::OneOrMore),
            _ => None,
        }
    }

    /// The operator as written in a grammar; empty for [`Repetition::Once`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Once => "",
            Self::Optional => "?",
            Self::ZeroOrMore => "*",
            Self::OneOrMore => "+",
        }
    }

    /// Minimum number of tags the group must consume.
    #[must_use]
    pub const fn min(self) -> usize {
        match self {
            Self::Once | Self::OneOrMore => 1,
            Self::Optional | Self::ZeroOrMore => 0,
        }
    }

    /// Whether the group may consume more than one tag.
    #[must_use]
    pub const fn is_unbounded(self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case('?', Repetition::Optional)]
    #[case('*', Repetition::ZeroOrMore)]
    #[case('+', Repetition::OneOrMore)]
    fn parses_known_operators(#[case] op: char, #[case] expected: Repetition) {
        assert_eq!(Repetition::from_operator(op), Some(expected));
        assert_eq!(expected.as_str(), op.to_string());
    }

    #[rstest]
    #[case('{')]
    #[case('>')]
    #[case('N')]
    fn rejects_unknown_operators(#[case] op: char) {
        assert_eq!(Repetition::from_operator(op), None);
    }

    #[test]
    fn reports_bounds() {
        assert_eq!(Repetition::Once.min(), 1);
        assert_eq!(Repetition::Optional.min(), 0);
        assert!(!Repetition::Optional.is_unbounded());
        assert!(Repetition::ZeroOrMore.is_unbounded());
        assert!(Repetition::OneOrMore.is_unbounded());
    }

    #[test]
    fn expression_patterns_compare_by_source() {
        #[expect(clippy::expect_used, reason = "test regex is a constant")]
        let regex = Regex::new("^(?:NN.*)$").expect("test regex must compile");
        let a = TagPattern::Expression {
            source: "NN.*".into(),
            regex: regex.clone(),
        };
        let b = TagPattern::Expression {
            source: "NN.*".into(),
            regex,
        };
        assert_eq!(a, b);
        assert_ne!(a, TagPattern::Literal("NN.*".into()));
        assert!(a.matches("NNS"));
        assert!(!a.matches("VBN"));
    }
}
