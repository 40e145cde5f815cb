//! Public API tests for grammar compilation.
#![expect(clippy::expect_used, reason = "tests assert compilation outcomes")]

use rstest::rstest;
use tagchunk_grammar::{
    GrammarSyntaxError, Group, Repetition, TagPattern, compile_grammar, compile_grammars,
};

#[test]
fn compile_grammar_smoke_test() {
    let plan = compile_grammar("<NNP>+").expect("grammar should compile");
    assert_eq!(plan.match_prefix(&["NNP", "NNP", "NNS"]), Some(2));

    assert!(
        compile_grammar("<NNP").is_err(),
        "unbalanced grammar should fail to compile"
    );
}

#[test]
fn exposes_group_structure() {
    let plan = compile_grammar("<DT>?<JJ>*<NN.*>+").expect("grammar should compile");
    let repetitions: Vec<_> = plan.groups().iter().map(Group::repetition).collect();
    assert_eq!(
        repetitions,
        [
            Repetition::Optional,
            Repetition::ZeroOrMore,
            Repetition::OneOrMore
        ]
    );
    let last = plan.groups().last().expect("plan has groups");
    assert!(matches!(last.pattern(), TagPattern::Expression { .. }));
    assert_eq!(plan.min_len(), 1);
}

#[test]
fn wildcard_groups_match_any_tag() {
    let plan = compile_grammar("<DT><*><NN>").expect("grammar should compile");
    assert_eq!(plan.match_prefix(&["DT", "JJ", "NN"]), Some(3));
    assert_eq!(plan.match_prefix(&["DT", "VBG", "NN"]), Some(3));
    assert_eq!(plan.match_prefix(&["DT", "NN"]), None);
}

#[test]
fn penn_punctuation_tags_stay_literal() {
    let plan = compile_grammar("<.>").expect("grammar should compile");
    assert_eq!(plan.match_prefix(&["."]), Some(1));
    assert_eq!(plan.match_prefix(&[","]), None);

    let possessive = compile_grammar("<PRP$><NN>").expect("grammar should compile");
    assert_eq!(possessive.match_prefix(&["PRP$", "NN"]), Some(2));
}

#[test]
fn alternation_matches_whole_tags_only() {
    let plan = compile_grammar("<JJ|RB>+").expect("grammar should compile");
    assert_eq!(plan.match_prefix(&["JJ", "RB", "NN"]), Some(2));
    assert_eq!(plan.match_prefix(&["JJR"]), None);
}

#[rstest]
#[case("<NNP")]
#[case("<NNP>>")]
#[case("<>")]
#[case("<NNP>{1,2}")]
#[case("")]
#[case("NNP")]
#[case("<NN(>")]
fn malformed_grammars_are_rejected(#[case] grammar: &str) {
    assert!(compile_grammar(grammar).is_err(), "{grammar:?} should fail");
}

#[test]
fn reports_error_positions() {
    let Err(err) = compile_grammars(&["<DT>", "<JJ><NN"]) else {
        panic!("expected grammar error");
    };
    assert_eq!(err, GrammarSyntaxError::UnclosedGroup { position: 4 });
    assert_eq!(err.position(), Some(4));
    assert!(err.to_string().contains("unmatched '<'"));
}

#[test]
fn plans_can_be_shared_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<tagchunk_grammar::GrammarPlan>();
}
