//! Token tree for parsed ICU MessageFormat messages.
//!
//! These types describe the output shape of an external message parser.
//! The evaluator consumes them as-is and does not re-validate parser-level
//! syntax. They are public (and serde-enabled) so that a parser living in
//! another crate or process can hand trees across the boundary.

use serde::{Deserialize, Serialize};

/// A single node in a parsed message.
///
/// Case bodies reuse `Vec<Token>` rather than a restricted sub-type;
/// the evaluator enforces at runtime that [`Token::Octothorpe`] only
/// appears under an enclosing plural or selectordinal scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Literal message text, emitted verbatim.
    Literal(String),
    /// Argument interpolation: `{name}`.
    Argument { arg: String },
    /// Cardinal plural directive: `{n, plural, offset:1 one{...} other{...}}`.
    Plural {
        arg: String,
        /// Offset text as written in the source, e.g. `"0"` or `"1"`.
        offset: String,
        cases: Vec<PluralCase>,
    },
    /// Ordinal plural directive: `{n, selectordinal, one{...} other{...}}`.
    SelectOrdinal {
        arg: String,
        offset: String,
        cases: Vec<PluralCase>,
    },
    /// String selection directive: `{v, select, a{...} other{...}}`.
    Select { arg: String, cases: Vec<SelectCase> },
    /// Embedded rich-content directive with one block per prop name.
    RichContent { arg: String, props: Vec<PropCase> },
    /// The `#` placeholder for the nearest enclosing plural value.
    Octothorpe,
}

/// One case of a plural or selectordinal directive.
///
/// The key is either a CLDR category name (`zero`, `one`, `two`, `few`,
/// `many`, `other`) or an exact numeral form. Parsers store exact keys
/// without the `=` sign, so `=4{...}` arrives as key `"4"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluralCase {
    pub key: String,
    pub tokens: Vec<Token>,
}

/// One case of a select directive, keyed by exact string match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectCase {
    pub key: String,
    pub tokens: Vec<Token>,
}

/// One named prop block of a rich-content directive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropCase {
    pub key: String,
    pub tokens: Vec<Token>,
}
