//! Tag grammar parsing utilities for tagchunk.
//!
//! A grammar is a sequence of angle-bracket tag groups such as `<DT>?<JJ>*<NN>+`.
//! This crate lexes and validates grammar strings and compiles them into
//! immutable [`GrammarPlan`]s that the matching engine walks over tag
//! sequences.

mod errors;
mod pattern;
mod plan;
mod tag;

pub use errors::GrammarSyntaxError;
pub use pattern::{compile_grammar, compile_grammars};
pub use plan::{GrammarPlan, Group};
pub use tag::{Repetition, TagPattern};
