//! Integration tests for selectordinal case selection.

mod common;

use common::{lit, ordinal, pcase, plural, text};
use mfeval::{Token, components, evaluate, values};

/// "{N, selectordinal, one{1st} two{2nd} few{3rd} other{#th}}"
fn english_ordinals() -> Vec<Token> {
    vec![ordinal(
        "N",
        vec![
            pcase("one", vec![lit("1st")]),
            pcase("two", vec![lit("2nd")]),
            pcase("few", vec![lit("3rd")]),
            pcase("other", vec![Token::Octothorpe, lit("th")]),
        ],
    )]
}

// =============================================================================
// English Ordinal Boundaries
// =============================================================================

#[test]
fn first_second_third() {
    let tokens = english_ordinals();
    let first = evaluate(&tokens, "en", &values! { "N" => 1 }, &components! {}).unwrap();
    assert_eq!(first, text(&["1st"]));
    let second = evaluate(&tokens, "en", &values! { "N" => 2 }, &components! {}).unwrap();
    assert_eq!(second, text(&["2nd"]));
    let third = evaluate(&tokens, "en", &values! { "N" => 3 }, &components! {}).unwrap();
    assert_eq!(third, text(&["3rd"]));
}

#[test]
fn fourth_stays_two_output_elements() {
    // The "other" branch has two leaves (octothorpe, literal); the top
    // level is never joined into one string.
    let tokens = english_ordinals();
    let fourth = evaluate(&tokens, "en", &values! { "N" => 4 }, &components! {}).unwrap();
    assert_eq!(fourth, text(&["4", "th"]));
}

#[test]
fn twenty_first_uses_one_again() {
    let tokens = english_ordinals();
    let result = evaluate(&tokens, "en", &values! { "N" => 21 }, &components! {}).unwrap();
    assert_eq!(result, text(&["1st"]));
}

// =============================================================================
// Ordinal vs Cardinal Rules
// =============================================================================

#[test]
fn ordinal_and_cardinal_rules_differ_for_english_two() {
    let cases = vec![
        pcase("two", vec![lit("pair")]),
        pcase("other", vec![lit("not two")]),
    ];
    let as_ordinal = vec![ordinal("N", cases.clone())];
    let as_cardinal = vec![plural("N", "0", cases)];

    // English ordinal rules put 2 in "two"; cardinal rules do not.
    let ord = evaluate(&as_ordinal, "en", &values! { "N" => 2 }, &components! {}).unwrap();
    assert_eq!(ord, text(&["pair"]));
    let card = evaluate(&as_cardinal, "en", &values! { "N" => 2 }, &components! {}).unwrap();
    assert_eq!(card, text(&["not two"]));
}

#[test]
fn exact_numeral_beats_ordinal_category() {
    let tokens = vec![ordinal(
        "N",
        vec![
            pcase("2", vec![lit("exactly two")]),
            pcase("two", vec![lit("category two")]),
            pcase("other", vec![lit("other")]),
        ],
    )];
    let result = evaluate(&tokens, "en", &values! { "N" => 2 }, &components! {}).unwrap();
    assert_eq!(result, text(&["exactly two"]));
}
