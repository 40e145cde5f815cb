//! Tagged documents read from JSON.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use eyre::{Context, Result};
use serde::Deserialize;
use tagchunk::{Annotation, ChunkMatch, Chunker, ChunkerError, Sentence};

/// A document with its tagged sentences.
///
/// Tokens arrive either as `sentences` or as a flat list of `pos`
/// annotations; when both are present the annotations are used.
///
/// ```json
/// {
///   "text": "Peter Pipers employees",
///   "sentences": [{
///     "index": 0,
///     "tokens": [{ "text": "Peter", "tag": "NNP", "begin": 0, "end": 4 }]
///   }]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaggedDocument {
    /// Full document text that token offsets index into.
    pub text: String,
    /// Sentences of tagged tokens.
    #[serde(default)]
    pub sentences: Vec<Sentence>,
    /// `pos` annotations, grouped into sentences by their metadata.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl TaggedDocument {
    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not a valid tagged document.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).wrap_err("failed to parse tagged document JSON")
    }

    /// Read a document from `path`, or from stdin when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error when the input cannot be read or parsed.
    pub fn read(path: Option<&Path>) -> Result<Self> {
        let raw = match path {
            Some(path) => fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut raw = String::new();
                io::stdin()
                    .read_to_string(&mut raw)
                    .wrap_err("failed to read tagged document from stdin")?;
                raw
            }
        };
        Self::from_json(&raw)
    }

    /// Chunk every sentence and return the resulting `chunk` annotations.
    ///
    /// # Errors
    ///
    /// Returns [`ChunkerError::Input`] when the tokens break the input
    /// contract.
    pub fn chunk(&self, chunker: &Chunker) -> Result<Vec<Annotation>, ChunkerError> {
        if !self.annotations.is_empty() {
            return chunker.annotate(&self.text, &self.annotations);
        }
        let chunks = chunker.chunk_sentences(&self.text, &self.sentences)?;
        Ok(chunks.iter().map(ChunkMatch::to_annotation).collect())
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use tagchunk::ChunkerConfig;

    const SENTENCES: &str = r#"{
        "text": "Dogs bark",
        "sentences": [{ "index": 0, "tokens": [
            { "text": "Dogs", "tag": "NNS", "begin": 0, "end": 3 },
            { "text": "bark", "tag": "VBP", "begin": 5, "end": 8 }
        ]}]
    }"#;

    const ANNOTATIONS: &str = r#"{
        "text": "Dogs bark",
        "annotations": [
            { "annotator_type": "pos", "begin": 0, "end": 3, "result": "NNS",
              "metadata": { "sentence": "0", "word": "Dogs" } },
            { "annotator_type": "pos", "begin": 5, "end": 8, "result": "VBP",
              "metadata": { "sentence": "0", "word": "bark" } }
        ]
    }"#;

    fn rows(raw: &str) -> Vec<String> {
        let chunker = ChunkerConfig::new(["<NNS>"]).build().unwrap();
        TaggedDocument::from_json(raw)
            .unwrap()
            .chunk(&chunker)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn chunks_sentence_input() {
        assert_eq!(rows(SENTENCES), ["chunk 0 3 Dogs chunk=0 sentence=0"]);
    }

    #[test]
    fn chunks_annotation_input() {
        assert_eq!(rows(ANNOTATIONS), ["chunk 0 3 Dogs chunk=0 sentence=0"]);
    }

    #[test]
    fn rejects_document_without_text() {
        let err = TaggedDocument::from_json(r#"{ "sentences": [] }"#).unwrap_err();
        assert!(format!("{err:#}").contains("missing field `text`"));
    }
}
