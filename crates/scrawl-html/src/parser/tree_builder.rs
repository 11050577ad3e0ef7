//! Token-driven tree construction.
//!
//! Each token goes to the innermost open element (or to the root when no
//! element is open). That element first offers the token to its last
//! child; if the child refuses, the element grows a new child or, for `</`,
//! starts closing itself. Open elements are tracked on an explicit stack,
//! so deeply nested input does not grow the native call stack.

use scrawl_tree::{Node, Tag};

use super::builder::{Builder, ElementBuilder, ElementState};
use super::error::ParseError;
use crate::tokenizer::{Token, tokenize};

/// State name reported when the document root refuses a token.
const ROOT_STATE: &str = "Root";

/// Incremental builder for one document.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    /// Every element builder, in creation order. A child always has a
    /// larger index than its parent.
    elements: Vec<ElementBuilder>,
    /// Children of the document root.
    root: Vec<Builder>,
    /// Indices of elements that are not yet `Closed`, innermost last.
    stack_of_open_elements: Vec<usize>,
}

impl TreeBuilder {
    /// Create a builder for an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            root: Vec::new(),
            stack_of_open_elements: Vec::new(),
        }
    }

    /// Feed one token.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the token is illegal where it appears.
    /// The builder should be discarded after an error.
    pub fn process(&mut self, token: &Token) -> Result<(), ParseError> {
        let current = self.stack_of_open_elements.last().copied();

        if let Some(index) = current
            && self.elements[index].state.is_in_tag()
        {
            self.elements[index].advance(token)?;
            if self.elements[index].state.is_closed() {
                let _ = self.stack_of_open_elements.pop();
            }
            return Ok(());
        }

        if self.last_child_accepts(current, token) {
            if let Some(Builder::Text(accumulated)) = self.children_mut(current).last_mut() {
                accumulated.push_str(token.as_str());
            }
            return Ok(());
        }

        match (token, current) {
            (Token::OpeningTagStart(_), _) => {
                let index = self.elements.len();
                self.elements.push(ElementBuilder::new());
                self.children_mut(current).push(Builder::Element(index));
                self.stack_of_open_elements.push(index);
            }
            (Token::EndOfFile, _) => {}
            (Token::ClosingTagStart(_), Some(index)) => self.elements[index].advance(token)?,
            (Token::ClosingTagStart(_), None) => {
                return Err(ParseError::UnexpectedToken {
                    state: ROOT_STATE,
                    token: token.clone(),
                });
            }
            (other, _) => self
                .children_mut(current)
                .push(Builder::Text(other.as_str().to_string())),
        }
        Ok(())
    }

    /// Convert the finished builders into an immutable tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnterminatedInput`] if any element is still
    /// open or still inside its tag.
    pub fn finish(self) -> Result<Node, ParseError> {
        if let Some(&index) = self.stack_of_open_elements.last() {
            return Err(ParseError::UnterminatedInput {
                tag: self.elements[index]
                    .state
                    .tag_name()
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        let Self { elements, root, .. } = self;

        // Children are created after their parents, so walking the arena
        // backwards builds every subtree before it is needed.
        let mut built: Vec<Option<Node>> = vec![None; elements.len()];
        for (index, element) in elements.into_iter().enumerate().rev() {
            let children = take_children(&mut built, element.children);
            let node = match element.state {
                ElementState::Closed { name, attributes } => {
                    Node::element(Tag::new(name, attributes), children)
                }
                other => {
                    return Err(ParseError::UnterminatedInput {
                        tag: other.tag_name().unwrap_or_default().to_string(),
                    });
                }
            };
            built[index] = Some(node);
        }

        Ok(Node::root(take_children(&mut built, root)))
    }

    /// Whether the last child of `parent` swallows `token`.
    ///
    /// A text run takes anything but a tag start. A closed element takes
    /// only end-of-file, as a no-op.
    fn last_child_accepts(&self, parent: Option<usize>, token: &Token) -> bool {
        match self.children(parent).last() {
            Some(Builder::Text(_)) => !token.is_tag_start(),
            Some(Builder::Element(index)) => {
                self.elements[*index].state.is_closed() && token.is_eof()
            }
            None => false,
        }
    }

    fn children(&self, parent: Option<usize>) -> &[Builder] {
        match parent {
            Some(index) => &self.elements[index].children,
            None => &self.root,
        }
    }

    fn children_mut(&mut self, parent: Option<usize>) -> &mut Vec<Builder> {
        match parent {
            Some(index) => &mut self.elements[index].children,
            None => &mut self.root,
        }
    }
}

fn take_children(built: &mut [Option<Node>], children: Vec<Builder>) -> Vec<Node> {
    children
        .into_iter()
        .filter_map(|child| match child {
            Builder::Text(value) => Some(Node::text(value)),
            Builder::Element(index) => built[index].take(),
        })
        .collect()
}

/// Build a tree from an already tokenized document.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse_tokens(tokens: &[Token]) -> Result<Node, ParseError> {
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.process(token)?;
    }
    builder.finish()
}

/// Tokenize and parse `html` into a content tree.
///
/// # Errors
///
/// Returns [`ParseError::Tokenize`] if tokenizing fails, or the first
/// structural error found while building the tree.
pub fn parse(html: &str) -> Result<Node, ParseError> {
    parse_tokens(&tokenize(html)?)
}
