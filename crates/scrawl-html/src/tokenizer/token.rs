use std::fmt;

use serde::Serialize;
use strum_macros::IntoStaticStr;

/// A lexical unit of the input.
///
/// Every variant except [`Token::EndOfFile`] carries the text it consumed,
/// so the input can be reconstructed from the token sequence. The one
/// exception is [`Token::Text`], whose text has already been entity-decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, IntoStaticStr)]
pub enum Token {
    /// `<`
    OpeningTagStart(String),
    /// `</`, possibly with whitespace between the two characters (`< /`).
    ClosingTagStart(String),
    /// `>`
    TagEnd(String),
    /// `/>`, possibly with whitespace between the two characters (`/ >`).
    AutoClosingTagEnd(String),
    /// `=`
    EqualsSign(String),
    /// A single `'` or `"`.
    Quote(String),
    /// A run of whitespace.
    Whitespace(String),
    /// A run of anything else, entity-decoded.
    Text(String),
    /// Always the last token of a successful tokenize call.
    EndOfFile,
}

impl Token {
    /// Create a text token.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Create a whitespace token.
    #[must_use]
    pub fn whitespace(value: impl Into<String>) -> Self {
        Self::Whitespace(value.into())
    }

    /// The text this token carries; empty for end-of-file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::OpeningTagStart(s)
            | Self::ClosingTagStart(s)
            | Self::TagEnd(s)
            | Self::AutoClosingTagEnd(s)
            | Self::EqualsSign(s)
            | Self::Quote(s)
            | Self::Whitespace(s)
            | Self::Text(s) => s,
            Self::EndOfFile => "",
        }
    }

    /// Variant name, for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }

    /// Returns true for either kind of tag start.
    #[must_use]
    pub const fn is_tag_start(&self) -> bool {
        matches!(self, Self::OpeningTagStart(_) | Self::ClosingTagStart(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfFile => write!(f, "EndOfFile"),
            other => write!(f, "{}({:?})", other.kind(), other.as_str()),
        }
    }
}
