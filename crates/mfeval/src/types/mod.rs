//! Public value and content types shared across evaluation.

mod content;
mod value;

pub use content::{ContentNode, ContentType, OutputValue, PropValue};
pub use value::{Opaque, Value};
