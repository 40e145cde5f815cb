//! Part-of-speech tag chunking.
//!
//! A [`Chunker`] compiles tag grammars such as `<NNP>+` or `<DT>?<JJ>*<NN>+`
//! once and then sweeps each tagged sentence left to right, emitting
//! non-overlapping [`ChunkMatch`]es with inclusive character offsets into the
//! document. At each token position the first configured grammar that
//! matches wins.
//!
//! ```
//! use tagchunk::{ChunkerConfig, Sentence, TaggedToken};
//! # fn main() -> Result<(), tagchunk::ChunkerError> {
//! let chunker = ChunkerConfig::new(["<NNP>+", "<NNS>+"]).build()?;
//! let text = "Peter Pipers employees";
//! let sentence = Sentence::new(0, vec![
//!     TaggedToken::new("Peter", "NNP", 0, 4),
//!     TaggedToken::new("Pipers", "NNP", 6, 11),
//!     TaggedToken::new("employees", "NNS", 13, 21),
//! ]);
//! let rows: Vec<String> = chunker
//!     .chunk_sentence(text, &sentence)?
//!     .iter()
//!     .map(|chunk| chunk.to_annotation().to_string())
//!     .collect();
//! assert_eq!(rows, [
//!     "chunk 0 11 Peter Pipers chunk=0 sentence=0",
//!     "chunk 13 21 employees chunk=1 sentence=0",
//! ]);
//! # Ok(())
//! # }
//! ```

mod annotation;
mod chunker;
mod config;
mod error;
pub mod matcher;
mod span;
mod token;

pub use annotation::{Annotation, AnnotatorType, WORD_KEY, sentences_from_pos};
pub use chunker::Chunker;
pub use config::ChunkerConfig;
pub use error::{ChunkerError, InputContractError};
pub use span::{CHUNK_KEY, ChunkMatch, DocumentText, SENTENCE_KEY, reconstruct};
pub use tagchunk_grammar::{
    GrammarPlan, GrammarSyntaxError, Group, Repetition, TagPattern, compile_grammar,
};
pub use token::{Sentence, TaggedToken};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<Chunker>();
        assert_send_sync::<ChunkMatch>();
        assert_send_sync::<ChunkerError>();
    }

    #[test]
    fn shared_chunker_matches_across_threads() {
        let chunker = Arc::new(
            ChunkerConfig::new(["<NNS>"])
                .build()
                .unwrap_or_else(|err| panic!("grammar should compile: {err}")),
        );
        let text = "Dogs bark";
        let sentence = Sentence::new(
            0,
            vec![
                TaggedToken::new("Dogs", "NNS", 0, 3),
                TaggedToken::new("bark", "VBP", 5, 8),
            ],
        );
        let counts: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let chunker = Arc::clone(&chunker);
                    let sentence = &sentence;
                    scope.spawn(move || {
                        chunker
                            .chunk_sentence(text, sentence)
                            .map_or(0, |chunks| chunks.len())
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_default())
                .collect()
        });
        assert_eq!(counts, [1, 1, 1, 1]);
    }
}
