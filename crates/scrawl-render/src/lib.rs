//! Renders a scrawl content tree as Markdown or as plain text.
//!
//! The walk is depth-first and threads an [`OutputContext`] down to every
//! node: where it sits among its rendered siblings, whether it is inside a
//! list, and whether it is inside preformatted text or code. Output never
//! fails; see [`render`].

/// Bit sets describing a node's position while rendering.
pub mod context;
/// Caller-facing rendering switches.
pub mod options;
/// The tree walker.
pub mod renderer;
/// Whitespace, newline and escaping helpers.
pub mod text;

pub use context::OutputContext;
pub use options::{RenderMode, RenderOptions};
pub use renderer::{render, to_markdown, to_raw_text};
