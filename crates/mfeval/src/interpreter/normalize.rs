//! Output normalization: flatten nested sequences, then collapse.
//!
//! Evaluation introduces one level of sequence nesting per resolved
//! plural/selectordinal/select directive. Normalization removes that
//! nesting, stringifies numeric leaves, and reduces every rich-node
//! prop sequence to its smallest faithful representation. The top-level
//! sequence itself is flattened and materialized but never collapsed:
//! `evaluate` always returns an ordered sequence.

use std::collections::HashMap;

use crate::interpreter::evaluator::{InternalValue, RichNode};
use crate::types::{ContentNode, OutputValue, PropValue};

/// Normalize a finished internal value tree into the output sequence.
pub(crate) fn normalize(values: Vec<InternalValue>) -> Vec<OutputValue> {
    materialize(flatten(values))
}

/// Recursively splice nested sequences into their parent's sequence.
///
/// Rich nodes stay in place but have each of their prop sequences
/// flattened the same way. After this pass the result is a flat
/// sequence of leaf values and rich nodes.
fn flatten(values: Vec<InternalValue>) -> Vec<InternalValue> {
    let mut output = Vec::with_capacity(values.len());
    for value in values {
        match value {
            InternalValue::Seq(nested) => output.extend(flatten(nested)),
            InternalValue::Rich(rich) => {
                let props = rich
                    .props
                    .into_iter()
                    .map(|(key, seq)| (key, flatten(seq)))
                    .collect();
                output.push(InternalValue::Rich(RichNode {
                    content_type: rich.content_type,
                    props,
                }));
            }
            leaf => output.push(leaf),
        }
    }
    output
}

/// Turn flattened internal values into output values.
///
/// Numeric leaves are stringified here and nowhere earlier; strings,
/// opaque payloads, and pre-built content nodes pass through unchanged;
/// rich nodes become content nodes with collapsed props.
fn materialize(values: Vec<InternalValue>) -> Vec<OutputValue> {
    let mut output = Vec::with_capacity(values.len());
    for value in values {
        match value {
            InternalValue::Str(s) => output.push(OutputValue::String(s)),
            InternalValue::Num(n) => output.push(OutputValue::String(n.to_string())),
            InternalValue::Opaque(o) => output.push(OutputValue::Opaque(o)),
            InternalValue::Node(node) => output.push(OutputValue::Node(node)),
            InternalValue::Seq(nested) => output.extend(materialize(flatten(nested))),
            InternalValue::Rich(rich) => output.push(OutputValue::Node(materialize_rich(rich))),
        }
    }
    output
}

/// Materialize a rich node, collapsing each prop sequence.
///
/// Duplicate prop names resolve last-one-wins, matching source order.
fn materialize_rich(rich: RichNode) -> ContentNode {
    let mut props = HashMap::with_capacity(rich.props.len());
    for (key, seq) in rich.props {
        props.insert(key, collapse(materialize(seq)));
    }
    ContentNode::builder()
        .content_type(rich.content_type)
        .props(props)
        .build()
}

/// Collapse a prop sequence to its smallest faithful representation.
///
/// All strings (including the empty sequence) join into a single
/// string; a one-element sequence unwraps to its element; anything else
/// stays a list.
fn collapse(values: Vec<OutputValue>) -> PropValue {
    if values
        .iter()
        .all(|value| matches!(value, OutputValue::String(_)))
    {
        let joined: String = values.iter().filter_map(OutputValue::as_str).collect();
        return PropValue::Single(OutputValue::String(joined));
    }
    let mut values = values;
    if values.len() == 1 {
        return PropValue::Single(values.remove(0));
    }
    PropValue::List(values)
}
