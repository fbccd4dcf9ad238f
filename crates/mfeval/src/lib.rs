//! Evaluator for parsed ICU MessageFormat message trees.
//!
//! Given a token tree produced by an external message parser, a locale,
//! an argument map, and a map of embeddable content types, [`evaluate`]
//! produces an ordered sequence of strings, pass-through values, and
//! structured content nodes. It handles argument interpolation,
//! plural/selectordinal/select case selection under CLDR rules, the `#`
//! placeholder, and arbitrarily nested rich-content directives.
//!
//! Evaluation is pure and synchronous: no I/O, no caching across calls,
//! no internal error recovery. Parsing message source text and turning
//! content nodes into visible UI both belong to external layers.
//!
//! # Example
//!
//! ```
//! use mfeval::{OutputValue, PluralCase, Token, components, evaluate, values};
//!
//! // "{N, plural, one{# item} other{# items}}"
//! let tokens = vec![Token::Plural {
//!     arg: "N".to_string(),
//!     offset: "0".to_string(),
//!     cases: vec![
//!         PluralCase {
//!             key: "one".to_string(),
//!             tokens: vec![Token::Octothorpe, Token::Literal(" item".to_string())],
//!         },
//!         PluralCase {
//!             key: "other".to_string(),
//!             tokens: vec![Token::Octothorpe, Token::Literal(" items".to_string())],
//!         },
//!     ],
//! }];
//!
//! let output = evaluate(&tokens, "en", &values! { "N" => 3 }, &components! {}).unwrap();
//! assert_eq!(
//!     output,
//!     vec![
//!         OutputValue::String("3".to_string()),
//!         OutputValue::String(" items".to_string()),
//!     ]
//! );
//! ```

pub mod ast;
pub mod interpreter;
pub mod types;

pub use ast::{PluralCase, PropCase, SelectCase, Token};
pub use interpreter::{
    Components, EvalError, Values, compute_suggestions, evaluate, plural_category,
};
pub use types::{ContentNode, ContentType, Opaque, OutputValue, PropValue, Value};

/// Creates a [`Values`] argument map from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can
/// pass integers, floats, strings, opaque payloads, or content nodes
/// directly.
///
/// # Example
///
/// ```
/// use mfeval::values;
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

/// Creates a [`Components`] content-type map from key-value pairs.
///
/// Values are automatically converted via `Into<ContentType>`, so you
/// can pass intrinsic tag names as strings or external descriptors as
/// [`Opaque`] payloads.
///
/// # Example
///
/// ```
/// use mfeval::components;
///
/// let c = components! { "Link" => "a" };
/// assert_eq!(c["Link"].as_intrinsic(), Some("a"));
/// ```
#[macro_export]
macro_rules! components {
    {} => {
        ::std::collections::HashMap::<String, $crate::ContentType>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::ContentType>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::ContentType>::into($value));
            )+
            map
        }
    };
}
