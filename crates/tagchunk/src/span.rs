//! Rebuild chunk offsets and surface text from matched token ranges.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::annotation::{Annotation, AnnotatorType};
use crate::matcher::MatchedSpan;
use crate::token::Sentence;

/// Metadata key carrying the owning sentence index.
pub const SENTENCE_KEY: &str = "sentence";
/// Metadata key carrying the chunk index within its sentence.
pub const CHUNK_KEY: &str = "chunk";

/// A document indexed by character so inclusive character offsets can be
/// turned back into string slices.
#[derive(Debug, Clone)]
pub struct DocumentText<'a> {
    text: &'a str,
    /// Byte offset of every character, followed by the text length.
    boundaries: Vec<usize>,
}

impl<'a> DocumentText<'a> {
    /// Index `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let boundaries = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        Self { text, boundaries }
    }

    /// The full document.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// The substring covering characters `begin..=end`.
    ///
    /// Returns `None` when the range is inverted or exceeds the document.
    ///
    /// # Examples
    /// ```
    /// use tagchunk::DocumentText;
    /// let doc = DocumentText::new("Émile Zola wrote");
    /// assert_eq!(doc.slice(0, 9), Some("Émile Zola"));
    /// assert_eq!(doc.slice(11, 20), None);
    /// ```
    #[must_use]
    pub fn slice(&self, begin: usize, end: usize) -> Option<&'a str> {
        if begin > end {
            return None;
        }
        let start = *self.boundaries.get(begin)?;
        let stop = *self.boundaries.get(end.checked_add(1)?)?;
        self.text.get(start..stop)
    }
}

/// A chunk found in one sentence, with offsets into the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkMatch {
    /// Character offset of the first token's first character.
    pub begin: usize,
    /// Character offset of the last token's last character (inclusive).
    pub end: usize,
    /// Document text between `begin` and `end`, spacing preserved.
    pub text: String,
    /// Owning sentence index.
    pub sentence: usize,
    /// Position among the chunks of the same sentence.
    pub chunk: usize,
    /// Index of the first token within the sentence.
    pub first_token: usize,
    /// Index of the last token within the sentence (inclusive).
    pub last_token: usize,
    /// Position of the grammar that produced this chunk.
    pub grammar: usize,
}

impl ChunkMatch {
    /// Convert into the annotation record handed to the sink.
    ///
    /// # Examples
    /// ```
    /// use tagchunk::{AnnotatorType, ChunkMatch};
    /// let chunk = ChunkMatch {
    ///     begin: 0,
    ///     end: 11,
    ///     text: "Peter Pipers".into(),
    ///     sentence: 0,
    ///     chunk: 0,
    ///     first_token: 0,
    ///     last_token: 1,
    ///     grammar: 0,
    /// };
    /// let annotation = chunk.to_annotation();
    /// assert_eq!(annotation.annotator_type, AnnotatorType::Chunk);
    /// assert_eq!(annotation.metadata.get("chunk").map(String::as_str), Some("0"));
    /// ```
    #[must_use]
    pub fn to_annotation(&self) -> Annotation {
        let metadata = BTreeMap::from([
            (SENTENCE_KEY.to_string(), self.sentence.to_string()),
            (CHUNK_KEY.to_string(), self.chunk.to_string()),
        ]);
        Annotation {
            annotator_type: AnnotatorType::Chunk,
            begin: self.begin,
            end: self.end,
            result: self.text.clone(),
            metadata,
        }
    }
}

/// Turn matched token ranges into chunk records for `sentence`.
///
/// Spans must come from matching this sentence's tags; spans that fall
/// outside the sentence or the document are skipped.
#[must_use]
pub fn reconstruct(
    document: &DocumentText<'_>,
    sentence: &Sentence,
    spans: &[MatchedSpan],
) -> Vec<ChunkMatch> {
    let tokens = sentence.tokens();
    spans
        .iter()
        .filter_map(|span| {
            let first = tokens.get(span.first)?;
            let last = tokens.get(span.last)?;
            let text = document.slice(first.begin(), last.end())?;
            Some((span, first.begin(), last.end(), text))
        })
        .enumerate()
        .map(|(chunk, (span, begin, end, text))| ChunkMatch {
            begin,
            end,
            text: text.to_string(),
            sentence: sentence.index(),
            chunk,
            first_token: span.first,
            last_token: span.last,
            grammar: span.grammar,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TaggedToken;
    use rstest::rstest;

    const TEXT: &str = "Peter  Pipers, employees";

    fn sentence() -> Sentence {
        Sentence::new(
            4,
            vec![
                TaggedToken::new("Peter", "NNP", 0, 4),
                TaggedToken::new("Pipers", "NNP", 7, 12),
                TaggedToken::new(",", ",", 13, 13),
                TaggedToken::new("employees", "NNS", 15, 23),
            ],
        )
    }

    #[rstest]
    #[case(0, 4, Some("Peter"))]
    #[case(0, 0, Some("P"))]
    #[case(23, 23, Some("s"))]
    #[case(15, 24, None)]
    #[case(5, 4, None)]
    fn slices_by_inclusive_char_offsets(
        #[case] begin: usize,
        #[case] end: usize,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(DocumentText::new(TEXT).slice(begin, end), expected);
    }

    #[test]
    fn slices_multibyte_text_by_character() {
        let doc = DocumentText::new("naïve café");
        assert_eq!(doc.char_len(), 10);
        assert_eq!(doc.slice(6, 9), Some("café"));
        assert_eq!(doc.slice(0, 4), Some("naïve"));
    }

    #[test]
    fn preserves_original_spacing_and_punctuation() {
        let doc = DocumentText::new(TEXT);
        let spans = [MatchedSpan {
            first: 0,
            last: 2,
            grammar: 1,
        }];
        let chunks = reconstruct(&doc, &sentence(), &spans);
        assert_eq!(
            chunks,
            [ChunkMatch {
                begin: 0,
                end: 13,
                text: "Peter  Pipers,".into(),
                sentence: 4,
                chunk: 0,
                first_token: 0,
                last_token: 2,
                grammar: 1,
            }]
        );
    }

    #[test]
    fn numbers_chunks_within_sentence() {
        let doc = DocumentText::new(TEXT);
        let spans = [
            MatchedSpan {
                first: 0,
                last: 1,
                grammar: 0,
            },
            MatchedSpan {
                first: 3,
                last: 3,
                grammar: 0,
            },
        ];
        let chunks = reconstruct(&doc, &sentence(), &spans);
        let summary: Vec<_> = chunks
            .iter()
            .map(|c| (c.chunk, c.begin, c.end, c.text.as_str()))
            .collect();
        assert_eq!(summary, [(0, 0, 12, "Peter  Pipers"), (1, 15, 23, "employees")]);
    }

    #[test]
    fn annotation_carries_sentence_and_chunk_metadata() {
        let doc = DocumentText::new(TEXT);
        let spans = [MatchedSpan {
            first: 3,
            last: 3,
            grammar: 0,
        }];
        let annotation = reconstruct(&doc, &sentence(), &spans)
            .first()
            .map(ChunkMatch::to_annotation)
            .unwrap_or_else(|| panic!("expected one chunk"));
        assert_eq!(annotation.result, "employees");
        assert_eq!(
            annotation.metadata.get(SENTENCE_KEY).map(String::as_str),
            Some("4")
        );
        assert_eq!(
            annotation.metadata.get(CHUNK_KEY).map(String::as_str),
            Some("0")
        );
    }
}
