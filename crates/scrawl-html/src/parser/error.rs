use thiserror::Error;

use crate::tokenizer::{Token, TokenizeError};

/// Why a document could not be turned into a tree.
///
/// Every variant is fatal: the parser never repairs markup, so the same
/// input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token arrived that the current element state has no transition for.
    #[error("unexpected {token} while in state {state}")]
    UnexpectedToken {
        /// Name of the state that refused the token (`Root` at top level).
        state: &'static str,
        /// The offending token.
        token: Token,
    },

    /// A closing tag named a different element than the one it closes.
    #[error("closing tag </{closing}> does not match <{opening}>")]
    MismatchedTags {
        /// Name from the opening tag.
        opening: String,
        /// Name from the closing tag.
        closing: String,
    },

    /// Input ended inside a tag or with an element still open.
    #[error("input ended before <{tag}> was closed")]
    UnterminatedInput {
        /// Name of the innermost unfinished element; empty if the input
        /// ended before its name was read.
        tag: String,
    },

    /// The tokenizer rejected the input.
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}
