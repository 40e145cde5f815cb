//! Tagged tokens and sentences supplied by upstream tokenizers and taggers.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InputContractError;

/// A token with its part-of-speech tag and inclusive character offsets.
///
/// # Examples
/// ```
/// use tagchunk::TaggedToken;
/// let token = TaggedToken::new("Peter", "NNP", 0, 4);
/// assert_eq!(token.tag(), "NNP");
/// assert_eq!(token.end(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedToken {
    text: String,
    tag: String,
    begin: usize,
    end: usize,
}

impl TaggedToken {
    /// Create a token spanning `begin..=end` in the document.
    #[must_use]
    pub fn new(text: impl Into<String>, tag: impl Into<String>, begin: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            begin,
            end,
        }
    }

    /// Token text as produced by the tokenizer.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Part-of-speech tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Character offset of the first character.
    #[must_use]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Character offset of the last character (inclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }
}

/// An ordered run of tagged tokens belonging to one sentence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sentence {
    index: usize,
    tokens: Vec<TaggedToken>,
}

impl Sentence {
    /// Create a sentence with the given identifier.
    #[must_use]
    pub fn new(index: usize, tokens: Vec<TaggedToken>) -> Self {
        Self { index, tokens }
    }

    /// Sentence identifier, propagated to every chunk found in it.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Tokens in document order.
    #[must_use]
    pub fn tokens(&self) -> &[TaggedToken] {
        &self.tokens
    }

    /// Append a token.
    pub fn push(&mut self, token: TaggedToken) {
        self.tokens.push(token);
    }

    /// Tags in token order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(TaggedToken::tag)
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sentence has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check offsets and tags against a document of `doc_len` characters.
    ///
    /// # Errors
    /// Returns [`InputContractError`] for inverted, overlapping, or
    /// out-of-range offsets, and for empty or bracketed tags.
    pub fn validate(&self, doc_len: usize) -> Result<(), InputContractError> {
        let sentence = self.index;
        let mut previous_end: Option<usize> = None;
        for (token, item) in self.tokens.iter().enumerate() {
            if item.tag.is_empty() {
                return Err(InputContractError::EmptyTag { sentence, token });
            }
            if item.tag.contains(['<', '>']) {
                return Err(InputContractError::BracketInTag {
                    sentence,
                    token,
                    tag: item.tag.clone(),
                });
            }
            if item.begin > item.end {
                return Err(InputContractError::InvertedOffsets {
                    sentence,
                    token,
                    begin: item.begin,
                    end: item.end,
                });
            }
            if let Some(previous_end) = previous_end
                && item.begin <= previous_end
            {
                return Err(InputContractError::OverlappingTokens {
                    sentence,
                    token,
                    begin: item.begin,
                    previous_end,
                });
            }
            if item.end >= doc_len {
                return Err(InputContractError::OutOfBounds {
                    sentence,
                    token,
                    end: item.end,
                    length: doc_len,
                });
            }
            previous_end = Some(item.end);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn sentence() -> Sentence {
        // "New York is big"
        Sentence::new(
            2,
            vec![
                TaggedToken::new("New", "NNP", 0, 2),
                TaggedToken::new("York", "NNP", 4, 7),
                TaggedToken::new("is", "VBZ", 9, 10),
                TaggedToken::new("big", "JJ", 12, 14),
            ],
        )
    }

    #[rstest]
    fn exposes_tags_in_order(sentence: Sentence) {
        let tags: Vec<_> = sentence.tags().collect();
        assert_eq!(tags, ["NNP", "NNP", "VBZ", "JJ"]);
        assert_eq!(sentence.index(), 2);
        assert_eq!(sentence.len(), 4);
    }

    #[rstest]
    fn accepts_well_formed_sentence(sentence: Sentence) {
        assert_eq!(sentence.validate(15), Ok(()));
    }

    #[rstest]
    fn rejects_tokens_past_document_end(sentence: Sentence) {
        assert_eq!(
            sentence.validate(14),
            Err(InputContractError::OutOfBounds {
                sentence: 2,
                token: 3,
                end: 14,
                length: 14,
            })
        );
    }

    #[rstest]
    fn rejects_overlapping_tokens(mut sentence: Sentence) {
        sentence.push(TaggedToken::new("g", "NN", 14, 14));
        assert_eq!(
            sentence.validate(20),
            Err(InputContractError::OverlappingTokens {
                sentence: 2,
                token: 4,
                begin: 14,
                previous_end: 14,
            })
        );
    }

    #[test]
    fn rejects_inverted_offsets() {
        let sentence = Sentence::new(0, vec![TaggedToken::new("x", "NN", 5, 4)]);
        assert!(matches!(
            sentence.validate(10),
            Err(InputContractError::InvertedOffsets { token: 0, .. })
        ));
    }

    #[rstest]
    #[case("")]
    #[case("<NN>")]
    #[case("NN>")]
    fn rejects_unusable_tags(#[case] tag: &str) {
        let sentence = Sentence::new(0, vec![TaggedToken::new("x", tag, 0, 0)]);
        assert!(sentence.validate(1).is_err());
    }

    #[test]
    fn empty_sentence_is_valid() {
        assert_eq!(Sentence::new(0, Vec::new()).validate(0), Ok(()));
    }
}
