//! Immutable content tree for the scrawl converter.
//!
//! The parser produces exactly one [`Node::Root`] per document. Every
//! [`Node::Element`] owns its children outright; there are no parent
//! pointers and the tree is never mutated after construction.
//!
//! Dropping a tree does not recurse, so a document nested deeper than the
//! native stack can be parsed and freed safely.

use std::collections::{HashMap, HashSet};
use std::{fmt, mem};

use serde::Serialize;

/// Map of attribute names to values for a tag.
pub type AttributesMap = HashMap<String, String>;

/// An element's name and attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Tag name exactly as written in the source.
    pub name: String,
    /// Attribute keys are unique; a repeated attribute keeps its last value.
    pub attributes: AttributesMap,
}

impl Tag {
    /// Create a tag with the given name and attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, attributes: AttributesMap) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// ASCII case-insensitive comparison of the tag name.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Value of the named attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns the set of class names from the class attribute.
    ///
    /// The attribute value is split on any whitespace, so runs of spaces or
    /// newlines between class names produce no empty entries.
    #[must_use]
    pub fn classes(&self) -> HashSet<&str> {
        self.attribute("class")
            .map(|list| list.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// A node of the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// The synthetic document root.
    Root {
        /// Top-level nodes in document order.
        children: Vec<Node>,
    },
    /// An element and the subtree it owns.
    Element {
        /// Name and attributes.
        tag: Tag,
        /// Child nodes in document order.
        children: Vec<Node>,
    },
    /// A run of text with entities already decoded.
    Text {
        /// Decoded text.
        value: String,
    },
}

impl Node {
    /// Create a root node.
    #[must_use]
    pub const fn root(children: Vec<Self>) -> Self {
        Self::Root { children }
    }

    /// Create an element node.
    #[must_use]
    pub const fn element(tag: Tag, children: Vec<Self>) -> Self {
        Self::Element { tag, children }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Child nodes; empty for text.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Root { children } | Self::Element { children, .. } => children,
            Self::Text { .. } => &[],
        }
    }

    /// The tag, for element nodes.
    #[must_use]
    pub const fn tag(&self) -> Option<&Tag> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// True when nothing but whitespace would be left of this subtree.
    ///
    /// Text is blank when it trims to nothing. Root and element nodes are
    /// blank when every child is, so an element without children is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text { value } => value.trim().is_empty(),
            Self::Root { children } | Self::Element { children, .. } => {
                children.iter().all(Self::is_blank)
            }
        }
    }

    fn write_outline(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::Root { .. } => writeln!(f, "{prefix}Root")?,
            Self::Element { tag, .. } => {
                if tag.attributes.is_empty() {
                    writeln!(f, "{prefix}<{}>", tag.name)?;
                } else {
                    let mut attrs: Vec<(&String, &String)> = tag.attributes.iter().collect();
                    attrs.sort();
                    let attrs: Vec<String> = attrs
                        .into_iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    writeln!(f, "{prefix}<{} {}>", tag.name, attrs.join(" "))?;
                }
            }
            Self::Text { value } => {
                let display = value.replace('\n', "\\n").replace(' ', "\u{00B7}");
                writeln!(f, "{prefix}\"{display}\"")?;
            }
        }
        for child in self.children() {
            child.write_outline(f, indent + 1)?;
        }
        Ok(())
    }
}

/// Indented debug outline, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_outline(f, 0)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = match self {
            Self::Root { children } | Self::Element { children, .. } => mem::take(children),
            Self::Text { .. } => return,
        };
        while let Some(mut node) = pending.pop() {
            if let Self::Root { children } | Self::Element { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}
