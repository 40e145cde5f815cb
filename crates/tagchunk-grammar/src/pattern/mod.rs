//! Tag grammar lexing and compilation helpers.

mod compiler;
mod group;
mod lexer;
#[cfg(test)]
pub(crate) mod test_support;

use crate::errors::GrammarSyntaxError;
use crate::plan::GrammarPlan;

pub use compiler::compile_grammar;

/// Compile an ordered list of grammars, preserving their priority order.
///
/// An empty list is valid and yields no plans.
///
/// # Errors
/// Returns the first [`GrammarSyntaxError`] encountered; later grammars are
/// not compiled.
///
/// # Examples
/// ```
/// use tagchunk_grammar::compile_grammars;
/// # fn main() -> Result<(), tagchunk_grammar::GrammarSyntaxError> {
/// let plans = compile_grammars(&["<NNP>+", "<NNS>+"])?;
/// assert_eq!(plans.len(), 2);
/// assert!(compile_grammars::<&str>(&[])?.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn compile_grammars<S: AsRef<str>>(
    grammars: &[S],
) -> Result<Vec<GrammarPlan>, GrammarSyntaxError> {
    grammars
        .iter()
        .map(|grammar| compile_grammar(grammar.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::compile_grammars;
    use crate::errors::GrammarSyntaxError;
    use std::fmt::Display;

    fn expect_ok<T, E: Display>(result: Result<T, E>, context: &str) -> T {
        match result {
            Ok(value) => value,
            Err(err) => panic!("{context}: {err}"),
        }
    }

    fn expect_err<T, E: Display>(result: Result<T, E>, context: &str) -> E {
        match result {
            Ok(_) => panic!("{context}: expected error"),
            Err(err) => err,
        }
    }

    #[test]
    fn preserves_grammar_order() {
        let plans = expect_ok(
            compile_grammars(&["<NNS>+", "<NNP>+"]),
            "grammars should compile",
        );
        let sources: Vec<_> = plans.iter().map(|plan| plan.source()).collect();
        assert_eq!(sources, ["<NNS>+", "<NNP>+"]);
    }

    #[test]
    fn accepts_owned_strings() {
        let grammars = vec![String::from("<DT>?<NN>")];
        let plans = expect_ok(compile_grammars(&grammars), "grammars should compile");
        assert_eq!(plans.len(), 1);
    }

    #[test]
    fn stops_at_first_malformed_grammar() {
        let err = expect_err(
            compile_grammars(&["<NNP>+", "<NNS", "<>"]),
            "second grammar should fail",
        );
        assert_eq!(err, GrammarSyntaxError::UnclosedGroup { position: 0 });
    }
}
