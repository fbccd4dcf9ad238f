//! Shared builders for assembling token trees in tests.
//!
//! Integration tests construct token trees by hand (the parser is an
//! external collaborator); these helpers keep the trees readable.

use mfeval::{OutputValue, PluralCase, PropCase, SelectCase, Token};

pub fn lit(text: &str) -> Token {
    Token::Literal(text.to_string())
}

pub fn arg(name: &str) -> Token {
    Token::Argument {
        arg: name.to_string(),
    }
}

pub fn plural(name: &str, offset: &str, cases: Vec<PluralCase>) -> Token {
    Token::Plural {
        arg: name.to_string(),
        offset: offset.to_string(),
        cases,
    }
}

pub fn ordinal(name: &str, cases: Vec<PluralCase>) -> Token {
    Token::SelectOrdinal {
        arg: name.to_string(),
        offset: "0".to_string(),
        cases,
    }
}

pub fn select(name: &str, cases: Vec<SelectCase>) -> Token {
    Token::Select {
        arg: name.to_string(),
        cases,
    }
}

pub fn rich(name: &str, props: Vec<PropCase>) -> Token {
    Token::RichContent {
        arg: name.to_string(),
        props,
    }
}

pub fn pcase(key: &str, tokens: Vec<Token>) -> PluralCase {
    PluralCase {
        key: key.to_string(),
        tokens,
    }
}

pub fn scase(key: &str, tokens: Vec<Token>) -> SelectCase {
    SelectCase {
        key: key.to_string(),
        tokens,
    }
}

pub fn prop(key: &str, tokens: Vec<Token>) -> PropCase {
    PropCase {
        key: key.to_string(),
        tokens,
    }
}

/// Expected all-string output sequence.
pub fn text(parts: &[&str]) -> Vec<OutputValue> {
    parts.iter().map(|part| OutputValue::from(*part)).collect()
}
