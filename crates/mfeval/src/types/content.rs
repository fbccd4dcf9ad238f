use std::collections::HashMap;

use bon::Builder;

use super::Opaque;

/// The target a rich-content directive resolves to.
///
/// A directive identifier either names an entry in the component map or,
/// when absent and the identifier does not start with an uppercase
/// character, falls back to an intrinsic content kind named by the
/// identifier itself (host toolkits conventionally reserve lowercase
/// names for built-in tags). Identifiers outside both rules are
/// evaluation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentType {
    /// A built-in content kind, e.g. an HTML-like tag name.
    Intrinsic(String),
    /// A caller-supplied content descriptor, e.g. an external factory.
    External(Opaque),
}

impl ContentType {
    /// Get the intrinsic tag name, if this is an intrinsic kind.
    pub fn as_intrinsic(&self) -> Option<&str> {
        match self {
            ContentType::Intrinsic(name) => Some(name),
            ContentType::External(_) => None,
        }
    }
}

impl From<&str> for ContentType {
    fn from(name: &str) -> Self {
        ContentType::Intrinsic(name.to_string())
    }
}

impl From<String> for ContentType {
    fn from(name: String) -> Self {
        ContentType::Intrinsic(name)
    }
}

impl From<Opaque> for ContentType {
    fn from(descriptor: Opaque) -> Self {
        ContentType::External(descriptor)
    }
}

/// An abstract content node produced for an embeddable rich-content
/// directive.
///
/// The node is not a renderable element: the external binding layer
/// decides how to materialize `content_type` and `props` into real UI.
/// A prop named `children` conventionally carries the node's primary
/// content, but that convention belongs to the materializer; the
/// evaluator stores it like any other prop.
///
/// # Example
///
/// ```
/// use mfeval::{ContentNode, ContentType, OutputValue, PropValue};
/// use std::collections::HashMap;
///
/// let link = ContentNode::builder()
///     .content_type(ContentType::Intrinsic("a".to_string()))
///     .props(HashMap::from([(
///         "href".to_string(),
///         PropValue::Single(OutputValue::String("https://example.com".to_string())),
///     )]))
///     .build();
///
/// assert_eq!(link.prop("href").and_then(PropValue::as_str), Some("https://example.com"));
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ContentNode {
    /// What this node materializes into.
    pub content_type: ContentType,

    /// Prop name to collapsed prop value mapping.
    #[builder(default)]
    pub props: HashMap<String, PropValue>,
}

impl ContentNode {
    /// Get a prop by name.
    pub fn prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }
}

/// A collapsed prop value: the smallest faithful representation of an
/// evaluated prop sequence.
///
/// An all-string sequence collapses to a single joined string, a
/// one-element sequence unwraps to its element, and anything else stays
/// a list.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// A single value (including the joined-string case).
    Single(OutputValue),
    /// Two or more values of mixed kinds.
    List(Vec<OutputValue>),
}

impl PropValue {
    /// Get this prop as a string, if it collapsed to one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Single(value) => value.as_str(),
            PropValue::List(_) => None,
        }
    }

    /// Get this prop as a single value, if it collapsed to one.
    pub fn as_single(&self) -> Option<&OutputValue> {
        match self {
            PropValue::Single(value) => Some(value),
            PropValue::List(_) => None,
        }
    }

    /// Get this prop as a list, if it stayed one.
    pub fn as_list(&self) -> Option<&[OutputValue]> {
        match self {
            PropValue::List(values) => Some(values),
            PropValue::Single(_) => None,
        }
    }
}

/// One element of the evaluator's output sequence.
///
/// Numbers have already been stringified by the time values reach this
/// type; opaque payloads and pre-built nodes pass through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputValue {
    /// Message text, including stringified numeric values.
    String(String),
    /// A caller payload returned unchanged.
    Opaque(Opaque),
    /// A materialized content node with collapsed props.
    Node(ContentNode),
}

impl OutputValue {
    /// Get this element as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OutputValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this element as an opaque payload, if it is one.
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            OutputValue::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Get this element as a content node, if it is one.
    pub fn as_node(&self) -> Option<&ContentNode> {
        match self {
            OutputValue::Node(n) => Some(n),
            _ => None,
        }
    }
}

impl From<&str> for OutputValue {
    fn from(s: &str) -> Self {
        OutputValue::String(s.to_string())
    }
}

impl From<String> for OutputValue {
    fn from(s: String) -> Self {
        OutputValue::String(s)
    }
}
