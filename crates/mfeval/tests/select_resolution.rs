//! Integration tests for select case resolution.

mod common;

use common::{lit, pcase, plural, scase, select, text};
use mfeval::{EvalError, Token, components, evaluate, values};

// =============================================================================
// Basic Selection
// =============================================================================

#[test]
fn exact_match_wins() {
    // "{V, select, true{T} other{F}}"
    let tokens = vec![select(
        "V",
        vec![scase("true", vec![lit("T")]), scase("other", vec![lit("F")])],
    )];
    let result = evaluate(&tokens, "en", &values! { "V" => "true" }, &components! {}).unwrap();
    assert_eq!(result, text(&["T"]));
}

#[test]
fn unmatched_value_falls_to_other() {
    let tokens = vec![select(
        "V",
        vec![scase("true", vec![lit("T")]), scase("other", vec![lit("F")])],
    )];
    let result = evaluate(&tokens, "en", &values! { "V" => "nope" }, &components! {}).unwrap();
    assert_eq!(result, text(&["F"]));
}

#[test]
fn a_value_named_other_selects_the_other_case() {
    let tokens = vec![select(
        "V",
        vec![scase("a", vec![lit("A")]), scase("other", vec![lit("O")])],
    )];
    let result = evaluate(&tokens, "en", &values! { "V" => "other" }, &components! {}).unwrap();
    assert_eq!(result, text(&["O"]));
}

// =============================================================================
// Tie-Breaks: Last Match Wins
// =============================================================================

#[test]
fn duplicate_matching_keys_keep_the_last() {
    let tokens = vec![select(
        "V",
        vec![
            scase("on", vec![lit("first")]),
            scase("on", vec![lit("second")]),
            scase("other", vec![lit("other")]),
        ],
    )];
    let result = evaluate(&tokens, "en", &values! { "V" => "on" }, &components! {}).unwrap();
    assert_eq!(result, text(&["second"]));
}

#[test]
fn duplicate_other_cases_keep_the_last() {
    let tokens = vec![select(
        "V",
        vec![
            scase("other", vec![lit("first other")]),
            scase("other", vec![lit("last other")]),
        ],
    )];
    let result = evaluate(&tokens, "en", &values! { "V" => "x" }, &components! {}).unwrap();
    assert_eq!(result, text(&["last other"]));
}

#[test]
fn value_match_wins_even_when_other_comes_later() {
    let tokens = vec![select(
        "V",
        vec![
            scase("hit", vec![lit("hit")]),
            scase("other", vec![lit("miss")]),
        ],
    )];
    let result = evaluate(&tokens, "en", &values! { "V" => "hit" }, &components! {}).unwrap();
    assert_eq!(result, text(&["hit"]));
}

// =============================================================================
// Numeric Context Scoping
// =============================================================================

#[test]
fn select_preserves_the_enclosing_plural_context() {
    // "{N, plural, other{{V, select, other{#}}}}": the octothorpe inside
    // the select still sees the plural's adjusted value.
    let tokens = vec![plural(
        "N",
        "1",
        vec![pcase(
            "other",
            vec![select("V", vec![scase("other", vec![Token::Octothorpe])])],
        )],
    )];
    let result = evaluate(
        &tokens,
        "en",
        &values! { "N" => 5, "V" => "anything" },
        &components! {},
    )
    .unwrap();
    assert_eq!(result, text(&["4"]));
}

#[test]
fn octothorpe_inside_top_level_select_is_an_error() {
    let tokens = vec![select("V", vec![scase("other", vec![Token::Octothorpe])])];
    let err = evaluate(&tokens, "en", &values! { "V" => "x" }, &components! {}).unwrap_err();
    assert!(
        matches!(err, EvalError::UnexpectedOctothorpe),
        "expected UnexpectedOctothorpe, got: {err:?}"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn missing_other_case_is_an_error() {
    let tokens = vec![select(
        "V",
        vec![scase("a", vec![lit("A")]), scase("b", vec![lit("B")])],
    )];
    let err = evaluate(&tokens, "en", &values! { "V" => "a" }, &components! {}).unwrap_err();
    assert!(
        matches!(err, EvalError::MissingOtherCase { ref arg } if arg == "V"),
        "expected MissingOtherCase, got: {err:?}"
    );
}

#[test]
fn non_string_argument_is_a_type_mismatch() {
    let tokens = vec![select("V", vec![scase("other", vec![lit("F")])])];
    let err = evaluate(&tokens, "en", &values! { "V" => 1 }, &components! {}).unwrap_err();
    assert!(
        matches!(err, EvalError::TypeMismatch { ref name, expected } if name == "V" && expected == "string"),
        "expected TypeMismatch, got: {err:?}"
    );
}
