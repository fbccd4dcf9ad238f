//! Recursive evaluation of parsed message token trees.
//!
//! This module provides the core evaluation logic that turns a token
//! tree plus a locale, an argument map, and a component map into an
//! ordered output sequence. Directive dispatch is an exhaustive match
//! over [`Token`]; case selection for plural/selectordinal/select
//! directives lives here as well, together with the rich-content
//! builder. The internal value tree it produces is handed to
//! [`normalize`](crate::interpreter::normalize) before anything leaves
//! the crate.

use std::collections::HashMap;

use crate::ast::{PluralCase, PropCase, SelectCase, Token};
use crate::interpreter::EvalError;
use crate::interpreter::context::{EvalContext, Num};
use crate::interpreter::normalize;
use crate::interpreter::plural::plural_category;
use crate::types::{ContentNode, ContentType, Opaque, OutputValue, Value};

/// Argument map for one evaluation call.
pub type Values = HashMap<String, Value>;

/// Component map for one evaluation call.
pub type Components = HashMap<String, ContentType>;

/// Evaluate a parsed message against a locale, arguments, and components.
///
/// This is the single public entry point. Evaluation is a pure function
/// of its inputs: it performs no I/O, caches nothing across calls, and
/// is safe to invoke concurrently for independent calls. The output is
/// always a flat ordered sequence; callers that require a single string
/// must check the sequence themselves.
///
/// # Errors
///
/// Returns an error if:
/// - An argument is missing from `values` or has the wrong type
/// - A directive's case list lacks an `"other"` entry
/// - A plural offset is not a base-10 integer
/// - The locale has no plural rule entry
/// - `#` appears outside any plural scope
/// - A rich-content identifier cannot be resolved
///
/// # Example
///
/// ```
/// use mfeval::{OutputValue, Token, components, evaluate, values};
///
/// let tokens = vec![
///     Token::Literal("Hello, ".to_string()),
///     Token::Argument { arg: "name".to_string() },
///     Token::Literal("!".to_string()),
/// ];
/// let output = evaluate(&tokens, "en", &values! { "name" => "May" }, &components! {}).unwrap();
/// assert_eq!(
///     output,
///     vec![
///         OutputValue::String("Hello, ".to_string()),
///         OutputValue::String("May".to_string()),
///         OutputValue::String("!".to_string()),
///     ]
/// );
/// ```
pub fn evaluate(
    tokens: &[Token],
    locale: &str,
    values: &Values,
    components: &Components,
) -> Result<Vec<OutputValue>, EvalError> {
    let mut ctx = EvalContext::new(locale, values, components);
    let tree = eval_tokens(tokens, &mut ctx, None)?;
    Ok(normalize::normalize(tree))
}

/// Working value tree built during evaluation.
///
/// Plural/select resolution introduces one `Seq` nesting level per
/// directive; rich-content directives become `Rich` nodes with
/// unnormalized prop sequences. The tree is rebuilt fresh per call and
/// never exposed to callers.
#[derive(Debug, Clone)]
pub(crate) enum InternalValue {
    Str(String),
    Num(Num),
    Opaque(Opaque),
    Node(ContentNode),
    Seq(Vec<InternalValue>),
    Rich(RichNode),
}

/// A rich-content node before prop normalization.
///
/// Props keep their source order; duplicate names resolve
/// last-one-wins at materialization.
#[derive(Debug, Clone)]
pub(crate) struct RichNode {
    pub(crate) content_type: ContentType,
    pub(crate) props: Vec<(String, Vec<InternalValue>)>,
}

impl From<Value> for InternalValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => InternalValue::Str(s),
            Value::Number(n) => InternalValue::Num(Num::Int(n)),
            Value::Float(f) => InternalValue::Num(Num::Float(f)),
            Value::Opaque(o) => InternalValue::Opaque(o),
            Value::Node(n) => InternalValue::Node(n),
        }
    }
}

/// Evaluate a token list into the internal value tree.
///
/// `current` is the numeric context visible to `#` placeholders: `None`
/// outside any plural scope, otherwise the offset-adjusted value of the
/// nearest enclosing plural or selectordinal directive.
fn eval_tokens(
    tokens: &[Token],
    ctx: &mut EvalContext<'_>,
    current: Option<Num>,
) -> Result<Vec<InternalValue>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Literal(text) => output.push(InternalValue::Str(text.clone())),
            Token::Argument { arg } => {
                // Raw value, no stringification at this stage.
                output.push(ctx.value(arg)?.clone().into());
            }
            Token::Plural { arg, offset, cases } => {
                let (case, adjusted) = resolve_plural_case(arg, offset, cases, false, ctx)?;
                ctx.enter()?;
                let nested = eval_tokens(&case.tokens, ctx, Some(adjusted))?;
                ctx.exit();
                output.push(InternalValue::Seq(nested));
            }
            Token::SelectOrdinal { arg, offset, cases } => {
                let (case, adjusted) = resolve_plural_case(arg, offset, cases, true, ctx)?;
                ctx.enter()?;
                let nested = eval_tokens(&case.tokens, ctx, Some(adjusted))?;
                ctx.exit();
                output.push(InternalValue::Seq(nested));
            }
            Token::Select { arg, cases } => {
                let case = resolve_select_case(arg, cases, ctx)?;
                // Select does not change the numeric context.
                ctx.enter()?;
                let nested = eval_tokens(&case.tokens, ctx, current)?;
                ctx.exit();
                output.push(InternalValue::Seq(nested));
            }
            Token::RichContent { arg, props } => {
                output.push(InternalValue::Rich(eval_rich_content(
                    arg, props, ctx, current,
                )?));
            }
            Token::Octothorpe => match current {
                Some(n) => output.push(InternalValue::Num(n)),
                None => return Err(EvalError::UnexpectedOctothorpe),
            },
        }
    }
    Ok(output)
}

/// Pick the winning case of a select directive.
///
/// One pass over the case list, tracking the last `"other"` case and
/// the last case whose key equals the argument value. Later entries
/// overwrite earlier matches for both roles; a value match wins over
/// `"other"` regardless of position.
fn resolve_select_case<'t>(
    arg: &str,
    cases: &'t [SelectCase],
    ctx: &EvalContext<'_>,
) -> Result<&'t SelectCase, EvalError> {
    let value = ctx.string(arg)?;
    let mut target = None;
    let mut other = None;
    for case in cases {
        if case.key == "other" {
            other = Some(case);
        }
        if case.key == value {
            target = Some(case);
        }
    }
    let other = other.ok_or_else(|| EvalError::MissingOtherCase {
        arg: arg.to_string(),
    })?;
    Ok(target.unwrap_or(other))
}

/// Pick the winning case of a plural or selectordinal directive.
///
/// The offset-adjusted value selects the CLDR category; case matching
/// is one pass tracking the last `"other"` case and the *first* case
/// whose key equals either the exact decimal form of the raw value or
/// the resolved category. Once set, the target is never overwritten, so
/// list order alone decides between an exact-numeral case and a
/// category case that would both match.
///
/// Note the asymmetry with [`resolve_select_case`]: select is
/// last-match-wins, plural is first-match-wins. Both policies are
/// load-bearing for messages with duplicate case keys.
///
/// Returns the winning case plus the adjusted value, which becomes the
/// numeric context for the nested token list.
fn resolve_plural_case<'t>(
    arg: &str,
    offset: &str,
    cases: &'t [PluralCase],
    ordinal: bool,
    ctx: &EvalContext<'_>,
) -> Result<(&'t PluralCase, Num), EvalError> {
    let offset_value: i64 = offset.parse().map_err(|_| EvalError::InvalidOffset {
        arg: arg.to_string(),
        offset: offset.to_string(),
    })?;
    let raw = ctx.number(arg)?;
    let adjusted = raw.offset_by(offset_value);
    let category = plural_category(ctx.locale(), adjusted.plural_operands(), ordinal)?;
    // Exact-numeral keys match against the raw value, not the adjusted one.
    let exact = raw.to_string();
    let mut target = None;
    let mut other = None;
    for case in cases {
        if case.key == "other" {
            other = Some(case);
        }
        if target.is_none() && (case.key == exact || case.key == category) {
            target = Some(case);
        }
    }
    let other = other.ok_or_else(|| EvalError::MissingOtherCase {
        arg: arg.to_string(),
    })?;
    Ok((target.unwrap_or(other), adjusted))
}

/// Build a rich-content node from a directive's prop blocks.
///
/// The identifier resolves against the component map (with the
/// intrinsic fallback, see [`EvalContext::component`]); each prop block
/// is evaluated with the unchanged numeric context, so `#` inside a
/// prop still refers to the enclosing plural. Prop blocks may nest
/// further rich-content directives.
fn eval_rich_content(
    arg: &str,
    props: &[PropCase],
    ctx: &mut EvalContext<'_>,
    current: Option<Num>,
) -> Result<RichNode, EvalError> {
    let content_type = ctx.component(arg)?;
    let mut evaluated = Vec::with_capacity(props.len());
    for prop in props {
        ctx.enter()?;
        let tokens = eval_tokens(&prop.tokens, ctx, current)?;
        ctx.exit();
        evaluated.push((prop.key.clone(), tokens));
    }
    Ok(RichNode {
        content_type,
        props: evaluated,
    })
}
