//! Tokenizer module.

/// Input cursor used by the matchers.
pub mod cursor;
/// Fixed table of HTML character references.
pub mod entities;
/// Tokenizer driver and token matchers.
pub mod lexer;
/// Token types produced by the tokenizer.
pub mod token;

pub use entities::decode_entities;
pub use lexer::{TokenizeError, Tokenizer, tokenize};
pub use token::Token;
