//! Tree-building parser.

/// Per-element state machine.
mod builder;
/// Parse errors.
pub mod error;
/// Token-driven tree builder.
pub mod tree_builder;

pub use error::ParseError;
pub use tree_builder::{TreeBuilder, parse, parse_tokens};
