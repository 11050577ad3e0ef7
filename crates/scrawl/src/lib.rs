//! High-level conversion API for scrawl.
//!
//! # Scope
//!
//! - **Document Loading** - read HTML from a file or take it from a string
//! - **Parsing** - tokenize and build the content tree
//! - **Rendering** - Markdown or plain text output
//!
//! The lower-level crates are re-exported as [`html`], [`render`] and
//! [`tree`] for callers that want the tokens or the tree themselves.

pub use scrawl_html as html;
pub use scrawl_render as render;
pub use scrawl_tree as tree;

pub use scrawl_html::ParseError;
pub use scrawl_render::{RenderMode, RenderOptions};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use scrawl_html::{Token, parse_tokens, tokenize};
use scrawl_tree::Node;
use thiserror::Error;

/// A parsed document, with the intermediate results kept for inspection.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Original HTML source
    pub html_source: String,

    /// Source path, empty for documents parsed from a string
    pub source_path: String,

    /// Tokens (for debugging)
    pub tokens: Vec<Token>,

    /// Content tree
    pub tree: Node,
}

impl LoadedDocument {
    /// Render the tree in the given mode.
    #[must_use]
    pub fn render(&self, mode: RenderMode, options: RenderOptions) -> String {
        scrawl_render::render(&self.tree, mode, options)
    }

    /// Render the tree as Markdown.
    #[must_use]
    pub fn to_markdown(&self, options: RenderOptions) -> String {
        self.render(RenderMode::Markdown, options)
    }

    /// Render the tree as plain text.
    #[must_use]
    pub fn to_raw_text(&self, options: RenderOptions) -> String {
        self.render(RenderMode::RawText, options)
    }
}

/// Error type for document loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file
    #[error("failed to read '{}': {source}", path.display())]
    File {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The document could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Load and parse a document from a file.
///
/// # Errors
///
/// Returns [`LoadError::File`] if the file cannot be read and
/// [`LoadError::Parse`] if its contents are not well-formed enough to parse.
pub fn load_document(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    let html = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc = parse_html_string(&html)?;
    doc.source_path = path.display().to_string();
    Ok(doc)
}

/// Parse an HTML string into a [`LoadedDocument`].
///
/// # Errors
///
/// Returns the [`ParseError`] from tokenizing or tree building.
pub fn parse_html_string(html: &str) -> Result<LoadedDocument, ParseError> {
    let tokens = tokenize(html)?;
    let tree = parse_tokens(&tokens)?;

    Ok(LoadedDocument {
        html_source: html.to_string(),
        source_path: String::new(),
        tokens,
        tree,
    })
}

/// Convert HTML to Markdown in one call.
///
/// # Errors
///
/// Returns the [`ParseError`] if `html` cannot be parsed.
pub fn html_to_markdown(html: &str, options: RenderOptions) -> Result<String, ParseError> {
    let tree = scrawl_html::parse(html)?;
    Ok(scrawl_render::to_markdown(&tree, options))
}

/// Convert HTML to plain text in one call.
///
/// # Errors
///
/// Returns the [`ParseError`] if `html` cannot be parsed.
pub fn html_to_raw_text(html: &str, options: RenderOptions) -> Result<String, ParseError> {
    let tree = scrawl_html::parse(html)?;
    Ok(scrawl_render::to_raw_text(&tree, options))
}
