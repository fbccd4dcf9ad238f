use std::any::Any;
use std::fmt::{self, Formatter};
use std::sync::Arc;

use super::ContentNode;

/// A runtime value supplied for a message argument.
///
/// The `Value` enum provides a dynamic type system for the argument map,
/// allowing numbers, floats, strings, opaque payloads, and previously
/// materialized content nodes to be passed interchangeably.
///
/// # Example
///
/// ```
/// use mfeval::Value;
///
/// // Numbers become Value::Number
/// let count: Value = 42.into();
///
/// // Strings become Value::String
/// let name: Value = "Alice".into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value (required by select directives).
    String(String),

    /// An integer number (required by plural directives).
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// An arbitrary caller payload, passed through evaluation unchanged.
    Opaque(Opaque),

    /// A content node produced by a prior evaluation, passed through as-is.
    Node(ContentNode),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, if it is numeric.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as an opaque payload, if it is one.
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// Get this value as a content node, if it is one.
    pub fn as_node(&self) -> Option<&ContentNode> {
        match self {
            Value::Node(n) => Some(n),
            _ => None,
        }
    }
}

/// An opaque caller payload carried through evaluation untouched.
///
/// Payloads are reference-counted, so cloning an `Opaque` during
/// evaluation never copies the underlying data: the value that comes
/// out of the output sequence is pointer-identical to the one that
/// went into the argument map.
///
/// # Example
///
/// ```
/// use mfeval::Opaque;
///
/// let payload = Opaque::new(vec![1_u8, 2, 3]);
/// assert_eq!(payload.downcast_ref::<Vec<u8>>(), Some(&vec![1, 2, 3]));
/// assert!(!payload.is::<String>());
/// ```
#[derive(Clone)]
pub struct Opaque(Arc<dyn Any + Send + Sync>);

impl Opaque {
    /// Wrap an arbitrary payload.
    pub fn new<T: Any + Send + Sync>(payload: T) -> Self {
        Self(Arc::new(payload))
    }

    /// Borrow the payload as `T`, if that is its concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref()
    }

    /// Check whether the payload has concrete type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Opaque(..)")
    }
}

/// Opaque payloads compare by identity: two handles are equal exactly
/// when they share the same underlying allocation.
impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Opaque> for Value {
    fn from(o: Opaque) -> Self {
        Value::Opaque(o)
    }
}

impl From<ContentNode> for Value {
    fn from(n: ContentNode) -> Self {
        Value::Node(n)
    }
}
