//! Tests for the serialized token-tree interchange format.
//!
//! An external parser may hand token trees across a process boundary;
//! these tests pin the wire shape and the round trip.

use insta::assert_snapshot;
use mfeval::{PluralCase, Token};

fn sample_tree() -> Vec<Token> {
    vec![Token::Plural {
        arg: "N".to_string(),
        offset: "0".to_string(),
        cases: vec![PluralCase {
            key: "other".to_string(),
            tokens: vec![Token::Octothorpe, Token::Literal(" items".to_string())],
        }],
    }]
}

#[test]
fn token_tree_wire_shape() {
    let json = serde_json::to_string(&sample_tree()).unwrap();
    assert_snapshot!(json, @r#"[{"Plural":{"arg":"N","offset":"0","cases":[{"key":"other","tokens":["Octothorpe",{"Literal":" items"}]}]}}]"#);
}

#[test]
fn token_tree_round_trips() {
    let tree = sample_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let back: Vec<Token> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}
