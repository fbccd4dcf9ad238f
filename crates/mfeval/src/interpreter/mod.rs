//! Message evaluation engine.
//!
//! This module walks parsed token trees, resolves directive cases under
//! locale-specific pluralization rules, builds rich-content nodes, and
//! normalizes the result into the output sequence.

mod context;
mod error;
mod evaluator;
mod normalize;
mod plural;

pub use error::{EvalError, compute_suggestions};
pub use evaluator::{Components, Values, evaluate};
pub use plural::plural_category;
