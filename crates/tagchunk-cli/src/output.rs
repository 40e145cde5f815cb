//! Helpers for rendering command output.

use std::io::Write;

use eyre::{Context, Result};
use tagchunk::{Annotation, GrammarPlan};

/// Write one pipeline row per annotation.
pub(crate) fn write_rows(writer: &mut dyn Write, annotations: &[Annotation]) -> Result<()> {
    for annotation in annotations {
        writeln!(writer, "{annotation}").wrap_err_with(|| {
            format!(
                "failed to write chunk at {}..={}",
                annotation.begin, annotation.end
            )
        })?;
    }
    Ok(())
}

/// Write the annotations as one JSON array followed by a newline.
pub(crate) fn write_json(writer: &mut dyn Write, annotations: &[Annotation]) -> Result<()> {
    serde_json::to_writer(&mut *writer, annotations)
        .wrap_err("failed to serialize chunks to JSON")?;
    writer
        .write_all(b"\n")
        .wrap_err("failed to terminate JSON output with newline")
}

/// Write each compiled grammar in canonical form.
pub(crate) fn write_plans(writer: &mut dyn Write, plans: &[GrammarPlan]) -> Result<()> {
    for plan in plans {
        writeln!(writer, "{plan}")
            .wrap_err_with(|| format!("failed to write grammar `{}`", plan.source()))?;
    }
    Ok(())
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use tagchunk::compile_grammar;

    fn chunk(begin: usize, end: usize, text: &str) -> Annotation {
        let mut annotation = Annotation::pos(text, "NNS", begin, end, 0);
        annotation.annotator_type = tagchunk::AnnotatorType::Chunk;
        annotation.result = text.to_string();
        annotation.metadata.remove(tagchunk::WORD_KEY);
        annotation
            .metadata
            .insert(tagchunk::CHUNK_KEY.to_string(), "0".to_string());
        annotation
    }

    #[test]
    fn rows_are_newline_terminated() {
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &[chunk(0, 3, "Dogs")]).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "chunk 0 3 Dogs chunk=0 sentence=0\n"
        );
    }

    #[test]
    fn json_is_a_single_array() -> eyre::Result<()> {
        let mut buffer = Vec::new();
        write_json(&mut buffer, &[chunk(0, 3, "Dogs"), chunk(5, 8, "cats")])?;
        let parsed: serde_json::Value = serde_json::from_slice(&buffer)?;
        let results: Vec<_> = parsed
            .as_array()
            .ok_or_else(|| eyre::eyre!("expected an array"))?
            .iter()
            .filter_map(|entry| entry.get("result").and_then(serde_json::Value::as_str))
            .collect();
        assert_eq!(results, ["Dogs", "cats"]);
        Ok(())
    }

    #[test]
    fn plans_render_canonically() {
        let plans = [
            compile_grammar("<DT>? <JJ>*  <NN>+").unwrap(),
            compile_grammar("<NN.*>").unwrap(),
        ];
        let mut buffer = Vec::new();
        write_plans(&mut buffer, &plans).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<DT>?<JJ>*<NN>+\n<NN.*>\n"
        );
    }
}
