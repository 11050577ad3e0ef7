//! Depth-first renderer shared by the Markdown and raw text modes.
//!
//! Every parent filters its children down to the ones that produce output
//! (see [`should_render`]) before computing first/final positions, so a
//! whitespace-only text node between two paragraphs does not stop the
//! second paragraph from being the final child.

use scrawl_tree::{Node, Tag};

use crate::context::OutputContext;
use crate::options::{RenderMode, RenderOptions};
use crate::text::{collapse_newlines, collapse_whitespace, escape_markdown, hoist_spaces};

/// Appended to spans marked `ellipsis` in site quirk mode.
const ELLIPSIS: &str = "\u{2026}";

/// Bullet used with [`RenderOptions::UNORDERED_LIST_BULLETS`] and in raw text.
const BULLET: &str = "\u{2022}";

/// Render `node` in the given mode.
///
/// After the walk, runs of three or more newlines are reduced to two and
/// surrounding whitespace is trimmed. Rendering cannot fail.
#[must_use]
pub fn render(node: &Node, mode: RenderMode, options: RenderOptions) -> String {
    let renderer = Renderer { mode, options };
    let output = renderer.render_node(node, OutputContext::EMPTY, 0);
    collapse_newlines(&output).trim().to_string()
}

/// Render `node` as Markdown.
#[must_use]
pub fn to_markdown(node: &Node, options: RenderOptions) -> String {
    render(node, RenderMode::Markdown, options)
}

/// Render `node` as plain text.
#[must_use]
pub fn to_raw_text(node: &Node, options: RenderOptions) -> String {
    render(node, RenderMode::RawText, options)
}

/// Whether `node` contributes anything to the output.
///
/// Text must contain something besides whitespace. An element needs some
/// non-blank text below it, except `br`, which always renders.
#[must_use]
pub fn should_render(node: &Node) -> bool {
    node.tag().is_some_and(|tag| tag.is("br")) || !node.is_blank()
}

struct Renderer {
    mode: RenderMode,
    options: RenderOptions,
}

impl Renderer {
    const fn is_markdown(&self) -> bool {
        matches!(self.mode, RenderMode::Markdown)
    }

    fn render_node(&self, node: &Node, context: OutputContext, index: usize) -> String {
        match node {
            Node::Root { children } => self.render_root(children),
            Node::Element { tag, children } => self.render_element(tag, children, context, index),
            Node::Text { value } => self.render_text(value, context),
        }
    }

    fn render_root(&self, children: &[Node]) -> String {
        let visible: Vec<&Node> = children.iter().filter(|n| should_render(n)).collect();
        let count = visible.len();

        let mut out = String::new();
        for (index, child) in visible.into_iter().enumerate() {
            let mut context = OutputContext::for_position(index, count);
            if count == 1 {
                context |= OutputContext::SINGLE_CHILD_IN_ROOT;
            }
            out.push_str(&self.render_node(child, context, index));
        }
        out
    }

    /// Render the renderable `children`, each with `inherited` plus its own
    /// position flags.
    fn render_children(&self, children: &[Node], inherited: OutputContext) -> String {
        let visible: Vec<&Node> = children.iter().filter(|n| should_render(n)).collect();
        let count = visible.len();

        let mut out = String::new();
        for (index, child) in visible.into_iter().enumerate() {
            let context = inherited | OutputContext::for_position(index, count);
            out.push_str(&self.render_node(child, context, index));
        }
        out
    }

    fn render_element(
        &self,
        tag: &Tag,
        children: &[Node],
        context: OutputContext,
        index: usize,
    ) -> String {
        let inherited = context.intersection(OutputContext::INHERITED);
        let name = tag.name.to_ascii_lowercase();

        match name.as_str() {
            "p" => self.render_paragraph(children, context, inherited),
            "br" => self.render_line_break(context),
            "em" | "i" => self.render_emphasis(children, inherited, "*"),
            "strong" | "b" => self.render_emphasis(children, inherited, "**"),
            "s" | "del" | "strike" => self.render_emphasis(children, inherited, "~~"),
            "a" => self.render_anchor(tag, children, inherited),
            "ul" => self.render_list(children, context, inherited | OutputContext::UNORDERED_LIST),
            "ol" => self.render_list(children, context, inherited | OutputContext::ORDERED_LIST),
            "li" => self.render_list_item(children, context, inherited, index),
            "pre" => self.render_preformatted(children, context, inherited),
            "code" => self.render_code(children, context, inherited),
            "span" => self.render_span(tag, children, inherited),
            _ => self.render_children(children, inherited),
        }
    }

    fn render_paragraph(
        &self,
        children: &[Node],
        context: OutputContext,
        inherited: OutputContext,
    ) -> String {
        let standalone = context.contains(OutputContext::SINGLE_CHILD_IN_ROOT);
        let mut out = String::new();
        if !standalone && !context.contains(OutputContext::FIRST_CHILD) {
            out.push('\n');
        }
        out.push_str(self.render_children(children, inherited).trim());
        if !standalone && !context.contains(OutputContext::FINAL_CHILD) {
            out.push('\n');
        }
        out
    }

    fn render_line_break(&self, context: OutputContext) -> String {
        if context.contains(OutputContext::FINAL_CHILD) {
            String::new()
        } else if self.is_markdown() {
            // Two trailing spaces make a hard break.
            "  \n".to_string()
        } else {
            "\n".to_string()
        }
    }

    fn render_emphasis(&self, children: &[Node], inherited: OutputContext, marker: &str) -> String {
        let inner = self.render_children(children, inherited);
        let (prefix, text, postfix) = hoist_spaces(&inner);
        if self.is_markdown() {
            format!("{prefix}{marker}{text}{marker}{postfix}")
        } else {
            format!("{prefix}{text}{postfix}")
        }
    }

    fn render_anchor(&self, tag: &Tag, children: &[Node], inherited: OutputContext) -> String {
        let inner = self.render_children(children, inherited);
        let Some(href) = tag.attribute("href").filter(|href| !href.is_empty()) else {
            return inner;
        };

        match self.mode {
            RenderMode::Markdown => format!("[{inner}]({href})"),
            RenderMode::RawText if self.options.contains(RenderOptions::KEEP_LINK_TEXT) => inner,
            RenderMode::RawText => href.to_string(),
        }
    }

    fn render_list(
        &self,
        children: &[Node],
        context: OutputContext,
        child_context: OutputContext,
    ) -> String {
        let mut out = String::new();
        if !context.contains(OutputContext::FIRST_CHILD) {
            out.push_str("\n\n");
        }
        out.push_str(&self.render_children(children, child_context));
        if !context.contains(OutputContext::FINAL_CHILD) {
            out.push_str("\n\n");
        }
        out
    }

    fn render_list_item(
        &self,
        children: &[Node],
        context: OutputContext,
        inherited: OutputContext,
        index: usize,
    ) -> String {
        let mut out = String::new();
        if context.contains(OutputContext::UNORDERED_LIST) {
            let bullet = if self.is_markdown()
                && !self.options.contains(RenderOptions::UNORDERED_LIST_BULLETS)
            {
                "*"
            } else {
                BULLET
            };
            out.push_str(bullet);
            out.push(' ');
        } else if context.contains(OutputContext::ORDERED_LIST) {
            out.push_str(&format!("{}. ", index + 1));
        }
        out.push_str(&self.render_children(children, inherited));
        if !context.contains(OutputContext::FINAL_CHILD) {
            out.push('\n');
        }
        out
    }

    fn render_preformatted(
        &self,
        children: &[Node],
        context: OutputContext,
        inherited: OutputContext,
    ) -> String {
        let inner = self.render_children(children, inherited | OutputContext::PREFORMATTED);
        let body = inner.trim_start_matches(['\n', '\r']).trim_end();

        let mut out = String::new();
        if !context.contains(OutputContext::FIRST_CHILD) {
            out.push_str("\n\n");
        }
        if self.is_markdown() {
            out.push_str("```\n");
            out.push_str(body);
            out.push_str("\n```");
        } else {
            out.push_str(body);
        }
        if !context.contains(OutputContext::FINAL_CHILD) {
            out.push_str("\n\n");
        }
        out
    }

    fn render_code(
        &self,
        children: &[Node],
        context: OutputContext,
        inherited: OutputContext,
    ) -> String {
        let nested = context.intersects(OutputContext::INHERITED);
        let inner = self.render_children(children, inherited | OutputContext::CODE);
        if nested || !self.is_markdown() {
            inner
        } else {
            format!("`{inner}`")
        }
    }

    fn render_span(&self, tag: &Tag, children: &[Node], inherited: OutputContext) -> String {
        if self.options.contains(RenderOptions::SITE_QUIRKS) {
            let classes = tag.classes();
            if classes.contains("invisible") {
                return String::new();
            }
            if classes.contains("ellipsis") {
                return self.render_children(children, inherited) + ELLIPSIS;
            }
        }
        self.render_children(children, inherited)
    }

    fn render_text(&self, value: &str, context: OutputContext) -> String {
        if context.contains(OutputContext::PREFORMATTED) {
            return value.to_string();
        }
        let text = collapse_whitespace(value);
        if self.is_markdown()
            && self.options.contains(RenderOptions::ESCAPE_MARKDOWN)
            && !context.contains(OutputContext::CODE)
        {
            escape_markdown(&text)
        } else {
            text
        }
    }
}
