//! Error types for message evaluation.

use thiserror::Error;

/// An error that occurred during message evaluation.
///
/// Every error aborts the whole `evaluate` call; the evaluator never
/// recovers internally or produces partial output. Fallback behavior
/// (empty strings, logging, development-mode surfacing) belongs to the
/// external binding layer.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Argument identifier absent from the value map.
    #[error("missing value for argument '{name}'{}", render_suggestions(suggestions))]
    MissingValue {
        name: String,
        suggestions: Vec<String>,
    },

    /// Argument has the wrong type for the directive that consumed it.
    #[error("expected argument '{name}' to be a {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
    },

    /// Plural/selectordinal/select case list lacks an `"other"` entry.
    #[error("no 'other' case in directive for argument '{arg}'")]
    MissingOtherCase { arg: String },

    /// Plural/selectordinal offset text is not a base-10 integer.
    #[error("invalid offset '{offset}' in directive for argument '{arg}'")]
    InvalidOffset { arg: String, offset: String },

    /// No plural-rule entry exists for the requested locale.
    #[error("unsupported locale '{locale}'")]
    UnsupportedLocale { locale: String },

    /// `#` encountered with no enclosing plural or selectordinal scope.
    #[error("unexpected '#' outside of a plural scope")]
    UnexpectedOctothorpe,

    /// Rich-content identifier not found in the component map and not a
    /// valid intrinsic name.
    #[error("unknown component '{name}'{}", render_suggestions(suggestions))]
    UnknownComponent {
        name: String,
        suggestions: Vec<String>,
    },

    /// Message nesting exceeded the evaluation depth guard.
    #[error("maximum recursion depth of {limit} exceeded")]
    RecursionLimitExceeded { limit: usize },
}

/// Format a suggestion list as a `, did you mean ...?` message suffix.
fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let quoted: Vec<String> = suggestions.iter().map(|s| format!("'{s}'")).collect();
    format!(", did you mean {}?", quoted.join(", "))
}

/// Compute "did you mean" suggestions for an unresolved name.
///
/// Candidates within Levenshtein distance 2 of `input` (distance 1 for
/// inputs of three characters or fewer) are returned closest-first,
/// limited to three entries.
pub fn compute_suggestions(input: &str, available: &[String]) -> Vec<String> {
    let max_distance = if input.len() > 3 { 2 } else { 1 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (strsim::levenshtein(input, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
