//! Pipeline annotation records consumed and produced by the chunker.
//!
//! Annotations mirror the rows exchanged between pipeline stages: a type,
//! inclusive character offsets, a result string, and string metadata. The
//! chunker reads `pos` annotations (the result is the tag) and emits `chunk`
//! annotations carrying `sentence` and `chunk` metadata.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InputContractError;
use crate::span::{DocumentText, SENTENCE_KEY};
use crate::token::{Sentence, TaggedToken};

/// Metadata key holding a token's surface form on `pos` annotations.
pub const WORD_KEY: &str = "word";

/// Kind of annotation flowing between pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AnnotatorType {
    /// Whole document.
    Document,
    /// Sentence boundary.
    Sentence,
    /// Token boundary.
    Token,
    /// Part-of-speech tag for one token.
    Pos,
    /// Chunk found by a tag grammar.
    Chunk,
}

impl AnnotatorType {
    /// Lower-case name used in pipeline rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Sentence => "sentence",
            Self::Token => "token",
            Self::Pos => "pos",
            Self::Chunk => "chunk",
        }
    }
}

impl fmt::Display for AnnotatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One annotation row.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Annotation {
    /// Kind of annotation.
    pub annotator_type: AnnotatorType,
    /// Character offset of the first character.
    pub begin: usize,
    /// Character offset of the last character (inclusive).
    pub end: usize,
    /// Annotation payload: the tag for `pos`, the surface text for `chunk`.
    pub result: String,
    /// String metadata such as `sentence` and `chunk` indices.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: BTreeMap<String, String>,
}

impl Annotation {
    /// Build a `pos` annotation for a token in sentence `sentence`.
    ///
    /// # Examples
    /// ```
    /// use tagchunk::{Annotation, AnnotatorType};
    /// let pos = Annotation::pos("Peter", "NNP", 0, 4, 0);
    /// assert_eq!(pos.annotator_type, AnnotatorType::Pos);
    /// assert_eq!(pos.result, "NNP");
    /// ```
    #[must_use]
    pub fn pos(word: &str, tag: &str, begin: usize, end: usize, sentence: usize) -> Self {
        Self {
            annotator_type: AnnotatorType::Pos,
            begin,
            end,
            result: tag.to_string(),
            metadata: BTreeMap::from([
                (SENTENCE_KEY.to_string(), sentence.to_string()),
                (WORD_KEY.to_string(), word.to_string()),
            ]),
        }
    }

    fn sentence_index(&self) -> Result<usize, InputContractError> {
        let raw = self.metadata.get(SENTENCE_KEY);
        raw.and_then(|value| value.trim().parse().ok())
            .ok_or_else(|| InputContractError::SentenceMetadata {
                begin: self.begin,
                end: self.end,
                value: raw.cloned(),
            })
    }
}

impl fmt::Display for Annotation {
    /// Render as a pipeline row: `chunk 0 11 Peter Pipers chunk=0 sentence=0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.annotator_type, self.begin, self.end, self.result
        )?;
        for (key, value) in &self.metadata {
            write!(f, " {key}={value}")?;
        }
        Ok(())
    }
}

/// Group `pos` annotations into sentences, in order of first appearance.
///
/// Annotations of other types are ignored. Token text comes from the `word`
/// metadata, falling back to the document slice the annotation covers.
///
/// # Errors
/// Returns [`InputContractError::SentenceMetadata`] when a `pos` annotation
/// lacks a numeric `sentence` metadata value.
pub fn sentences_from_pos(
    document: &DocumentText<'_>,
    annotations: &[Annotation],
) -> Result<Vec<Sentence>, InputContractError> {
    let mut sentences: Vec<Sentence> = Vec::new();
    for annotation in annotations {
        if annotation.annotator_type != AnnotatorType::Pos {
            log::trace!(
                "skipping {} annotation at {}..={}",
                annotation.annotator_type,
                annotation.begin,
                annotation.end
            );
            continue;
        }
        let index = annotation.sentence_index()?;
        let word = annotation
            .metadata
            .get(WORD_KEY)
            .map(String::as_str)
            .or_else(|| document.slice(annotation.begin, annotation.end))
            .unwrap_or_default();
        let token = TaggedToken::new(
            word,
            annotation.result.as_str(),
            annotation.begin,
            annotation.end,
        );
        if let Some(sentence) = sentences.iter_mut().find(|sentence| sentence.index() == index) {
            sentence.push(token);
            continue;
        }
        sentences.push(Sentence::new(index, vec![token]));
    }
    Ok(sentences)
}
