//! JSON shape of annotator records and configuration.

use serde_json::json;
use tagchunk::{Annotation, AnnotatorType, ChunkerConfig, Sentence};

#[test]
fn chunk_annotation_serialises_as_pipeline_row() {
    let chunker = ChunkerConfig::new(["<NNS>"])
        .build()
        .unwrap_or_else(|err| panic!("grammar should compile: {err}"));
    let annotations = [
        Annotation::pos("Dogs", "NNS", 0, 3, 0),
        Annotation::pos("bark", "VBP", 5, 8, 0),
    ];
    let chunks = chunker
        .annotate("Dogs bark", &annotations)
        .unwrap_or_else(|err| panic!("annotations should chunk: {err}"));
    let value = serde_json::to_value(&chunks)
        .unwrap_or_else(|err| panic!("annotations should serialise: {err}"));
    assert_eq!(
        value,
        json!([{
            "annotator_type": "chunk",
            "begin": 0,
            "end": 3,
            "result": "Dogs",
            "metadata": { "chunk": "0", "sentence": "0" }
        }])
    );
}

#[test]
fn pos_annotations_deserialise_without_word_metadata() {
    let raw = json!([
        { "annotator_type": "document", "begin": 0, "end": 8, "result": "Dogs bark" },
        { "annotator_type": "pos", "begin": 0, "end": 3, "result": "NNS",
          "metadata": { "sentence": "0" } }
    ]);
    let annotations: Vec<Annotation> = serde_json::from_value(raw)
        .unwrap_or_else(|err| panic!("annotations should deserialise: {err}"));
    assert_eq!(annotations.first().map(|a| a.annotator_type), Some(AnnotatorType::Document));
    assert!(annotations.first().is_some_and(|a| a.metadata.is_empty()));

    let chunker = ChunkerConfig::new(["<NNS>"])
        .build()
        .unwrap_or_else(|err| panic!("grammar should compile: {err}"));
    let chunks = chunker
        .annotate("Dogs bark", &annotations)
        .unwrap_or_else(|err| panic!("annotations should chunk: {err}"));
    assert_eq!(chunks.first().map(|c| c.result.as_str()), Some("Dogs"));
}

#[test]
fn config_reads_camel_case_grammar_list() {
    let config: ChunkerConfig = serde_json::from_value(json!({ "regexParsers": ["<NNP>+", "<NNS>+"] }))
        .unwrap_or_else(|err| panic!("config should deserialise: {err}"));
    assert_eq!(config.regex_parsers(), ["<NNP>+", "<NNS>+"]);

    let empty: ChunkerConfig = serde_json::from_value(json!({}))
        .unwrap_or_else(|err| panic!("config should deserialise: {err}"));
    assert!(empty.regex_parsers().is_empty());
}

#[test]
fn sentence_reads_tagged_tokens() {
    let raw = json!({
        "index": 2,
        "tokens": [
            { "text": "Peter", "tag": "NNP", "begin": 0, "end": 4 },
            { "text": "Pipers", "tag": "NNP", "begin": 6, "end": 11 }
        ]
    });
    let sentence: Sentence = serde_json::from_value(raw)
        .unwrap_or_else(|err| panic!("sentence should deserialise: {err}"));
    assert_eq!(sentence.index(), 2);
    assert_eq!(sentence.tags().collect::<Vec<_>>(), ["NNP", "NNP"]);
}
