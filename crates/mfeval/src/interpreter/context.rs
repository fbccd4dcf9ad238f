//! Evaluation context for argument and component lookup.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

use fixed_decimal::Decimal;
use icu_plurals::PluralOperands;

use crate::interpreter::EvalError;
use crate::interpreter::error::compute_suggestions;
use crate::types::{ContentType, Value};

/// Default bound on message nesting depth.
///
/// Well-formed messages nest a handful of levels at most; the guard
/// only exists to turn runaway recursion into an error instead of a
/// stack overflow.
const DEFAULT_MAX_DEPTH: usize = 64;

/// Evaluation context carrying per-call state through recursion.
///
/// The context borrows the caller's locale, argument map, and component
/// map for the duration of one `evaluate` call and tracks the current
/// recursion depth. It holds no state across calls.
pub(crate) struct EvalContext<'a> {
    /// Locale code for plural rule resolution, e.g. `"en"`, `"ru"`.
    locale: &'a str,
    /// Arguments available during evaluation.
    values: &'a HashMap<String, Value>,
    /// Embeddable content types available to rich-content directives.
    components: &'a HashMap<String, ContentType>,
    /// Current recursion depth.
    depth: usize,
    /// Maximum allowed depth.
    max_depth: usize,
}

impl<'a> EvalContext<'a> {
    /// Create a new context for one evaluation call.
    pub(crate) fn new(
        locale: &'a str,
        values: &'a HashMap<String, Value>,
        components: &'a HashMap<String, ContentType>,
    ) -> Self {
        Self {
            locale,
            values,
            components,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Get the locale this call formats for.
    pub(crate) fn locale(&self) -> &str {
        self.locale
    }

    /// Look up an argument value.
    pub(crate) fn value(&self, name: &str) -> Result<&Value, EvalError> {
        self.values.get(name).ok_or_else(|| {
            let mut available: Vec<String> = self.values.keys().cloned().collect();
            available.sort();
            EvalError::MissingValue {
                name: name.to_string(),
                suggestions: compute_suggestions(name, &available),
            }
        })
    }

    /// Look up an argument that must be numeric.
    pub(crate) fn number(&self, name: &str) -> Result<Num, EvalError> {
        match self.value(name)? {
            Value::Number(n) => Ok(Num::Int(*n)),
            Value::Float(f) => Ok(Num::Float(*f)),
            _ => Err(EvalError::TypeMismatch {
                name: name.to_string(),
                expected: "number",
            }),
        }
    }

    /// Look up an argument that must be a string.
    pub(crate) fn string(&self, name: &str) -> Result<&str, EvalError> {
        match self.value(name)? {
            Value::String(s) => Ok(s),
            _ => Err(EvalError::TypeMismatch {
                name: name.to_string(),
                expected: "string",
            }),
        }
    }

    /// Resolve a rich-content identifier to a content type.
    ///
    /// Identifiers absent from the component map fall back to an
    /// intrinsic content kind when their first character is not
    /// uppercase; host toolkits reserve such names for built-in tags.
    pub(crate) fn component(&self, name: &str) -> Result<ContentType, EvalError> {
        if let Some(content_type) = self.components.get(name) {
            return Ok(content_type.clone());
        }
        if name.chars().next().is_some_and(|c| !c.is_uppercase()) {
            return Ok(ContentType::Intrinsic(name.to_string()));
        }
        let mut available: Vec<String> = self.components.keys().cloned().collect();
        available.sort();
        Err(EvalError::UnknownComponent {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &available),
        })
    }

    /// Enter a nested directive scope.
    pub(crate) fn enter(&mut self) -> Result<(), EvalError> {
        if self.depth >= self.max_depth {
            return Err(EvalError::RecursionLimitExceeded {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a nested directive scope.
    pub(crate) fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// A numeric argument value, integer or floating point.
///
/// This is the "current numeric context" threaded through recursive
/// evaluation for `#` placeholders: plural and selectordinal directives
/// replace it with their offset-adjusted value for the matched branch,
/// select directives leave it untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    /// Subtract a directive offset, preserving the numeric kind.
    ///
    /// Integer subtraction saturates at the `i64` bounds rather than
    /// panicking on extreme argument/offset pairs.
    pub(crate) fn offset_by(self, offset: i64) -> Num {
        match self {
            Num::Int(n) => Num::Int(n.saturating_sub(offset)),
            Num::Float(f) => Num::Float(f - offset as f64),
        }
    }

    /// Operands for CLDR category lookup.
    ///
    /// Floats convert through their decimal string form so that visible
    /// fraction digits reach the rules: English cardinal `1.5` is
    /// `"other"`, not `"one"`.
    pub(crate) fn plural_operands(self) -> PluralOperands {
        match self {
            Num::Int(n) => n.into(),
            Num::Float(f) => match self.to_string().parse::<Decimal>() {
                Ok(dec) => PluralOperands::from(&dec),
                // Non-finite floats have no decimal form.
                Err(_) => (f as i64).into(),
            },
        }
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Num::Int(n) => write!(f, "{n}"),
            Num::Float(x) => write!(f, "{x}"),
        }
    }
}
