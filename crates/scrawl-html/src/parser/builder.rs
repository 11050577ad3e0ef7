//! Mutable per-element state used while the tree is being built.
//!
//! An element builder walks through the `Opening*` states while its start
//! tag is read, sits in `Opened` while its content arrives, then walks the
//! `Closing*` states to `Closed`. Text runs are accumulated in place.

use std::mem;

use scrawl_common::warning::warn_once;
use scrawl_tree::AttributesMap;
use strum_macros::IntoStaticStr;

use super::error::ParseError;
use crate::tokenizer::Token;

/// Elements that never have content and close on their start tag's `>`.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// ASCII case-insensitive membership in [`VOID_ELEMENTS`].
pub(crate) fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

/// A child slot of the root or of an element.
#[derive(Debug)]
pub(crate) enum Builder {
    /// Raw text of every token fed to this run so far.
    Text(String),
    /// Index of an element builder in the arena.
    Element(usize),
}

/// An element under construction.
#[derive(Debug)]
pub(crate) struct ElementBuilder {
    pub(crate) state: ElementState,
    pub(crate) children: Vec<Builder>,
}

impl ElementBuilder {
    /// A builder that has just seen `<`.
    pub(crate) const fn new() -> Self {
        Self {
            state: ElementState::Opening,
            children: Vec::new(),
        }
    }

    /// Feed a token to the state machine.
    pub(crate) fn advance(&mut self, token: &Token) -> Result<(), ParseError> {
        let state = mem::replace(&mut self.state, ElementState::Opening);
        self.state = state.advance(token)?;
        Ok(())
    }
}

/// Where an element builder is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub(crate) enum ElementState {
    Opening,
    OpeningWithName {
        name: String,
        attributes: AttributesMap,
    },
    OpeningMaybeAttribute {
        name: String,
        attributes: AttributesMap,
    },
    OpeningAttributeName {
        name: String,
        attributes: AttributesMap,
        attribute: String,
    },
    OpeningAttributeNameEquals {
        name: String,
        attributes: AttributesMap,
        attribute: String,
    },
    OpeningAttributeValueQuoted {
        name: String,
        attributes: AttributesMap,
        attribute: String,
        value: String,
        quote: String,
    },
    Opened {
        name: String,
        attributes: AttributesMap,
    },
    Closing {
        name: String,
        attributes: AttributesMap,
    },
    ClosingWithName {
        name: String,
        closing_name: String,
        attributes: AttributesMap,
    },
    Closed {
        name: String,
        attributes: AttributesMap,
    },
}

impl ElementState {
    /// State name, for diagnostics.
    pub(crate) fn name(&self) -> &'static str {
        self.into()
    }

    /// Tag name read so far, if any.
    pub(crate) fn tag_name(&self) -> Option<&str> {
        match self {
            Self::Opening => None,
            Self::OpeningWithName { name, .. }
            | Self::OpeningMaybeAttribute { name, .. }
            | Self::OpeningAttributeName { name, .. }
            | Self::OpeningAttributeNameEquals { name, .. }
            | Self::OpeningAttributeValueQuoted { name, .. }
            | Self::Opened { name, .. }
            | Self::Closing { name, .. }
            | Self::ClosingWithName { name, .. }
            | Self::Closed { name, .. } => Some(name),
        }
    }

    /// True while a start or end tag is being read.
    pub(crate) const fn is_in_tag(&self) -> bool {
        !matches!(self, Self::Opened { .. } | Self::Closed { .. })
    }

    pub(crate) const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed { .. })
    }

    /// Apply one token.
    ///
    /// Handles every state except `Closed`, which never changes. In `Opened`
    /// the only token that reaches the element itself is `</`; content
    /// tokens are routed to children by the tree builder.
    fn advance(self, token: &Token) -> Result<Self, ParseError> {
        if token.is_eof() {
            return Err(ParseError::UnterminatedInput {
                tag: self.tag_name().unwrap_or_default().to_string(),
            });
        }

        let state_name = self.name();
        let next = match (self, token) {
            // Whitespace between the parts of a tag is insignificant.
            (
                state @ (Self::Opening
                | Self::OpeningMaybeAttribute { .. }
                | Self::OpeningAttributeName { .. }
                | Self::OpeningAttributeNameEquals { .. }
                | Self::Closing { .. }
                | Self::ClosingWithName { .. }),
                Token::Whitespace(_),
            ) => state,

            (Self::Opening, Token::Text(text)) => Self::OpeningWithName {
                name: text.clone(),
                attributes: AttributesMap::new(),
            },

            (Self::OpeningWithName { name, attributes }, Token::Whitespace(_)) => {
                Self::OpeningMaybeAttribute { name, attributes }
            }
            (
                Self::OpeningWithName {
                    mut name,
                    attributes,
                },
                Token::Text(text),
            ) => {
                name.push_str(text);
                Self::OpeningWithName { name, attributes }
            }
            (
                Self::OpeningWithName { name, attributes }
                | Self::OpeningMaybeAttribute { name, attributes },
                Token::TagEnd(_),
            ) => {
                if is_void_element(&name) {
                    Self::Closed { name, attributes }
                } else {
                    Self::Opened { name, attributes }
                }
            }
            (
                Self::OpeningWithName { name, attributes }
                | Self::OpeningMaybeAttribute { name, attributes },
                Token::AutoClosingTagEnd(_),
            ) => Self::Closed { name, attributes },

            (Self::OpeningMaybeAttribute { name, attributes }, Token::Text(text)) => {
                Self::OpeningAttributeName {
                    name,
                    attributes,
                    attribute: text.clone(),
                }
            }

            (
                Self::OpeningAttributeName {
                    name,
                    attributes,
                    mut attribute,
                },
                Token::Text(text),
            ) => {
                attribute.push_str(text);
                Self::OpeningAttributeName {
                    name,
                    attributes,
                    attribute,
                }
            }
            (
                Self::OpeningAttributeName {
                    name,
                    attributes,
                    attribute,
                },
                Token::EqualsSign(_),
            ) => Self::OpeningAttributeNameEquals {
                name,
                attributes,
                attribute,
            },

            (
                Self::OpeningAttributeNameEquals {
                    name,
                    attributes,
                    attribute,
                },
                Token::Quote(quote),
            ) => Self::OpeningAttributeValueQuoted {
                name,
                attributes,
                attribute,
                value: String::new(),
                quote: quote.clone(),
            },

            (
                Self::OpeningAttributeValueQuoted {
                    name,
                    mut attributes,
                    attribute,
                    value,
                    quote,
                },
                Token::Quote(q),
            ) if *q == quote => {
                if attributes.contains_key(&attribute) {
                    warn_once(
                        "HTML Parser",
                        &format!("repeated attribute '{attribute}' on <{name}>, keeping the last value"),
                    );
                }
                let _ = attributes.insert(attribute, value);
                Self::OpeningWithName { name, attributes }
            }
            (
                Self::OpeningAttributeValueQuoted {
                    name,
                    attributes,
                    attribute,
                    mut value,
                    quote,
                },
                Token::Whitespace(text)
                | Token::Text(text)
                | Token::EqualsSign(text)
                | Token::Quote(text)
                | Token::TagEnd(text)
                | Token::AutoClosingTagEnd(text)
                | Token::OpeningTagStart(text)
                | Token::ClosingTagStart(text),
            ) => {
                value.push_str(text);
                Self::OpeningAttributeValueQuoted {
                    name,
                    attributes,
                    attribute,
                    value,
                    quote,
                }
            }

            (Self::Opened { name, attributes }, Token::ClosingTagStart(_)) => {
                Self::Closing { name, attributes }
            }

            (Self::Closing { name, attributes }, Token::Text(text)) => Self::ClosingWithName {
                name,
                closing_name: text.clone(),
                attributes,
            },

            (
                Self::ClosingWithName {
                    name,
                    mut closing_name,
                    attributes,
                },
                Token::Text(text),
            ) => {
                closing_name.push_str(text);
                Self::ClosingWithName {
                    name,
                    closing_name,
                    attributes,
                }
            }
            (
                Self::ClosingWithName {
                    name,
                    closing_name,
                    attributes,
                },
                Token::TagEnd(_),
            ) => {
                if !name.eq_ignore_ascii_case(&closing_name) {
                    return Err(ParseError::MismatchedTags {
                        opening: name,
                        closing: closing_name,
                    });
                }
                Self::Closed { name, attributes }
            }

            _ => {
                return Err(ParseError::UnexpectedToken {
                    state: state_name,
                    token: token.clone(),
                });
            }
        };
        Ok(next)
    }
}
