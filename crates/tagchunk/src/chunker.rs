//! The chunk annotator: compiled grammars applied to tagged sentences.

use tagchunk_grammar::{GrammarPlan, compile_grammar};

use crate::annotation::{Annotation, sentences_from_pos};
use crate::config::ChunkerConfig;
use crate::error::ChunkerError;
use crate::matcher::find_matches;
use crate::span::{ChunkMatch, DocumentText, reconstruct};
use crate::token::Sentence;

/// Applies configured tag grammars to tagged sentences.
///
/// Grammars are compiled once, when the chunker is built, and are read-only
/// afterwards, so one chunker can serve many threads at once.
///
/// # Examples
/// ```
/// use tagchunk::{Chunker, ChunkerConfig, Sentence, TaggedToken};
/// # fn main() -> Result<(), tagchunk::ChunkerError> {
/// let chunker = Chunker::new(ChunkerConfig::new(["<NNP>+"]))?;
/// let text = "Peter Pipers picked";
/// let sentence = Sentence::new(0, vec![
///     TaggedToken::new("Peter", "NNP", 0, 4),
///     TaggedToken::new("Pipers", "NNP", 6, 11),
///     TaggedToken::new("picked", "VBD", 13, 18),
/// ]);
/// let chunks = chunker.chunk_sentence(text, &sentence)?;
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].text, "Peter Pipers");
/// assert_eq!((chunks[0].begin, chunks[0].end), (0, 11));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkerConfig,
    plans: Vec<GrammarPlan>,
}

impl Chunker {
    /// Compile `config` into a chunker.
    ///
    /// # Errors
    /// Returns [`ChunkerError::Grammar`] naming the first grammar that fails
    /// to compile.
    pub fn new(config: ChunkerConfig) -> Result<Self, ChunkerError> {
        let plans = config
            .regex_parsers()
            .iter()
            .map(|grammar| {
                compile_grammar(grammar).map_err(|source| ChunkerError::Grammar {
                    grammar: grammar.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("compiled {} chunk grammars", plans.len());
        Ok(Self { config, plans })
    }

    /// The configuration this chunker was built from.
    #[must_use]
    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    /// Compiled grammars in priority order.
    #[must_use]
    pub fn plans(&self) -> &[GrammarPlan] {
        &self.plans
    }

    /// Find the chunks of one sentence of `document`.
    ///
    /// # Errors
    /// Returns [`ChunkerError::Input`] when the sentence's offsets or tags
    /// break the input contract.
    pub fn chunk_sentence(
        &self,
        document: &str,
        sentence: &Sentence,
    ) -> Result<Vec<ChunkMatch>, ChunkerError> {
        self.chunk_indexed(&DocumentText::new(document), sentence)
    }

    /// Find the chunks of every sentence, in sentence order.
    ///
    /// Chunk indices restart at zero for each sentence.
    ///
    /// # Errors
    /// Returns [`ChunkerError::Input`] for the first sentence that breaks the
    /// input contract.
    pub fn chunk_sentences(
        &self,
        document: &str,
        sentences: &[Sentence],
    ) -> Result<Vec<ChunkMatch>, ChunkerError> {
        let indexed = DocumentText::new(document);
        let mut chunks = Vec::new();
        for sentence in sentences {
            chunks.extend(self.chunk_indexed(&indexed, sentence)?);
        }
        Ok(chunks)
    }

    /// Turn `pos` annotations over `document` into `chunk` annotations.
    ///
    /// # Errors
    /// Returns [`ChunkerError::Input`] when an annotation lacks sentence
    /// metadata or the grouped tokens break the input contract.
    pub fn annotate(
        &self,
        document: &str,
        annotations: &[Annotation],
    ) -> Result<Vec<Annotation>, ChunkerError> {
        let indexed = DocumentText::new(document);
        let sentences = sentences_from_pos(&indexed, annotations)?;
        let mut chunks = Vec::new();
        for sentence in &sentences {
            chunks.extend(
                self.chunk_indexed(&indexed, sentence)?
                    .iter()
                    .map(ChunkMatch::to_annotation),
            );
        }
        Ok(chunks)
    }

    fn chunk_indexed(
        &self,
        document: &DocumentText<'_>,
        sentence: &Sentence,
    ) -> Result<Vec<ChunkMatch>, ChunkerError> {
        sentence.validate(document.char_len())?;
        let tags: Vec<&str> = sentence.tags().collect();
        let spans = find_matches(&self.plans, &tags);
        let chunks = reconstruct(document, sentence, &spans);
        log::trace!(
            "sentence {} yielded {} chunks from {} tokens",
            sentence.index(),
            chunks.len(),
            sentence.len()
        );
        Ok(chunks)
    }
}
