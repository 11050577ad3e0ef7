//! HTML tokenizer and tree-building parser for scrawl.
//!
//! # Scope
//!
//! - **Tokenizer**: scans the input once with an ordered list of matchers and
//!   produces a flat [`Token`] sequence terminated by [`Token::EndOfFile`].
//!   Text runs are entity-decoded on the way out.
//! - **Parser**: feeds those tokens through a per-element state machine and
//!   returns an immutable [`scrawl_tree::Node`] tree.
//!
//! This is not an HTML5 parser. There are no insertion modes, no implied
//! tags and no error recovery: malformed markup is reported as a
//! [`ParseError`].

/// Tree-building parser.
pub mod parser;
/// Tokenizer and entity decoding.
pub mod tokenizer;

pub use parser::{ParseError, TreeBuilder, parse, parse_tokens};
pub use tokenizer::{Token, TokenizeError, Tokenizer, decode_entities, tokenize};
