//! Parameterized diff and path-query cases
//!
//! The alignment cases mirror the classic single-edit scenarios: same
//! sequence, one substitution, one deletion at either end, and the
//! multi-deletion sentence pair.

use rstest::rstest;

use plisp::plisp::ast::{path, PathStep};
use plisp::plisp::diff::{align, windowed_diff, windowed_diff_sources, AlignmentConfig, WindowedOptions};
use plisp::plisp::testing::factories::{mk_tokens, parse_str};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[rstest]
#[case("I am from Canada.")]
#[case("(define (domain gripper))")]
#[case("")]
fn alignment_is_reflexive(#[case] text: &str) {
    let sequence = chars(text);
    let result = align(&sequence, &sequence, &AlignmentConfig::default());
    assert_eq!(result.penalty, 0);
    assert_eq!(result.row_a, result.row_b);
    let restored: String = result.row_a.iter().flatten().collect();
    assert_eq!(restored, text);
}

#[rstest]
#[case("I am from Canada.", "I am from Canada!", 1)]
#[case("I am from Canada", "I am from Canad", 1)]
#[case("I am from Canada.", "am from Canada.", 2)]
#[case("I am from Canada.", "I am not from Canada!", 5)]
fn alignment_penalties(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
    let result = align(&chars(a), &chars(b), &AlignmentConfig::default());
    assert_eq!(result.penalty, expected);
}

#[rstest]
#[case("I am from Canada.", "I am not from Canada!")]
#[case("(a (b c))", "(a (b c d))")]
#[case("abc", "xyz")]
fn alignment_cost_is_symmetric(#[case] a: &str, #[case] b: &str) {
    let config = AlignmentConfig::default();
    let forward = align(&chars(a), &chars(b), &config);
    let backward = align(&chars(b), &chars(a), &config);
    assert_eq!(forward.penalty, backward.penalty);
}

/// A substitution between equal-length sequences costs exactly the
/// substitution penalty, nothing more.
#[rstest]
#[case("(at ball1 rooma)", "(at ball2 rooma)")]
#[case("(room rooma)", "(room roomb)")]
fn single_token_substitution_costs_one(#[case] a: &str, #[case] b: &str) {
    use plisp::plisp::lexing::tokenize;

    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);
    let result = align(&tokens_a, &tokens_b, &AlignmentConfig::default());
    assert_eq!(result.penalty, 1);
    assert!(result.row_a.iter().all(Option::is_some));
    assert!(result.row_b.iter().all(Option::is_some));
}

#[test]
fn multi_deletion_alignment_places_gap_for_not() {
    let result = align(
        &chars("I am from Canada."),
        &chars("I am not from Canada!"),
        &AlignmentConfig::default(),
    );
    assert_eq!(result.penalty, 5);

    let (row_a, row_b) = result.rows_with("_", "");
    assert_eq!(row_a, "I am____ from Canada.");
    assert_eq!(row_b, "I am not from Canada!");
}

#[test]
fn windowed_diff_over_token_fixtures() {
    let baseline = mk_tokens(&["(", "sum", "1", ")"]);
    let generated = mk_tokens(&["(", "sum", "2", ")"]);
    let report = windowed_diff(&baseline, &generated, &WindowedOptions::default());
    assert!(!report.identical());
    assert!(report.lengths_match());
    assert_eq!(report.mismatches[0].baseline_position, 2);
}

#[rstest]
#[case("(sum 1 2)", "(sum 1 2)", true)]
#[case("(sum 1 2) ; comment", "(sum\n  1 2)", true)]
#[case("(sum 1 2)", "(sum 1 3)", false)]
#[case("(sum 1 2)", "(sum 1 2) extra", false)]
fn windowed_diff_verdicts(#[case] a: &str, #[case] b: &str, #[case] identical: bool) {
    let report = windowed_diff_sources(a, b, &WindowedOptions::default());
    assert_eq!(report.identical(), identical);
}

#[rstest]
#[case(0, "1")]
#[case(1, "2")]
#[case(2, "3")]
fn indexed_path_selectors_pick_occurrences(#[case] index: usize, #[case] expected: &str) {
    let tree = parse_str("(p (X 1) (X 2) (X 3))");
    let p = tree.sole_form().unwrap();
    let found = tree.seek(p, &[PathStep::from(("X", index))]).unwrap();
    let leaf = tree.first_child(found).unwrap();
    assert_eq!(tree.name(leaf), expected);
}

#[test]
fn indexed_path_selector_past_last_occurrence_misses() {
    let tree = parse_str("(p (X 1) (X 2) (X 3))");
    let p = tree.sole_form().unwrap();
    assert_eq!(tree.seek(p, &[PathStep::from(("X", 3))]), None);
}

#[test]
fn plain_name_path_returns_first_of_repeated_siblings() {
    let tree = parse_str("(p (X 1) (X 2) (X 3))");
    let p = tree.sole_form().unwrap();
    let found = tree.seek(p, &path(&["X"])).unwrap();
    assert_eq!(tree.name(tree.first_child(found).unwrap()), "1");
}
