//! Tests for the context and option bit sets and the text helpers.

use scrawl_render::text::{collapse_newlines, collapse_whitespace, escape_markdown, hoist_spaces};
use scrawl_render::{OutputContext, RenderMode, RenderOptions};

// ========== OutputContext ==========

#[test]
fn test_context_union_and_contains() {
    let context = OutputContext::FIRST_CHILD | OutputContext::PREFORMATTED;
    assert!(context.contains(OutputContext::FIRST_CHILD));
    assert!(context.contains(OutputContext::PREFORMATTED));
    assert!(!context.contains(OutputContext::FINAL_CHILD));
    assert!(context.contains(OutputContext::EMPTY));
}

#[test]
fn test_context_inherited_flags() {
    let context = OutputContext::FIRST_CHILD | OutputContext::CODE | OutputContext::ORDERED_LIST;
    assert_eq!(
        context.intersection(OutputContext::INHERITED),
        OutputContext::CODE
    );
    assert!(context.intersects(OutputContext::INHERITED));
    assert!(!OutputContext::FIRST_CHILD.intersects(OutputContext::INHERITED));
}

#[test]
fn test_context_for_position() {
    assert_eq!(
        OutputContext::for_position(0, 1),
        OutputContext::FIRST_CHILD | OutputContext::FINAL_CHILD
    );
    assert_eq!(OutputContext::for_position(0, 3), OutputContext::FIRST_CHILD);
    assert_eq!(OutputContext::for_position(1, 3), OutputContext::EMPTY);
    assert_eq!(OutputContext::for_position(2, 3), OutputContext::FINAL_CHILD);
}

#[test]
fn test_context_bits_are_distinct() {
    let all = [
        OutputContext::SINGLE_CHILD_IN_ROOT,
        OutputContext::FIRST_CHILD,
        OutputContext::FINAL_CHILD,
        OutputContext::UNORDERED_LIST,
        OutputContext::ORDERED_LIST,
        OutputContext::PREFORMATTED,
        OutputContext::CODE,
    ];
    let mut combined = OutputContext::EMPTY;
    for flag in all {
        assert!(!combined.intersects(flag));
        combined |= flag;
    }
    assert_eq!(combined.bits().count_ones(), 7);
}

// ========== RenderOptions ==========

#[test]
fn test_options_combine_freely() {
    let options = RenderOptions::ESCAPE_MARKDOWN | RenderOptions::SITE_QUIRKS;
    assert!(options.contains(RenderOptions::ESCAPE_MARKDOWN));
    assert!(options.contains(RenderOptions::SITE_QUIRKS));
    assert!(!options.contains(RenderOptions::KEEP_LINK_TEXT));
    assert_eq!(RenderOptions::default(), RenderOptions::NONE);
}

#[test]
fn test_options_with() {
    let options = RenderOptions::NONE
        .with(RenderOptions::UNORDERED_LIST_BULLETS, true)
        .with(RenderOptions::KEEP_LINK_TEXT, false);
    assert_eq!(options, RenderOptions::UNORDERED_LIST_BULLETS);
    assert_eq!(
        options.with(RenderOptions::UNORDERED_LIST_BULLETS, false),
        RenderOptions::NONE
    );
}

#[test]
fn test_render_mode_names() {
    assert_eq!(RenderMode::Markdown.to_string(), "markdown");
    assert_eq!(RenderMode::RawText.to_string(), "raw-text");
    assert_eq!("raw-text".parse::<RenderMode>(), Ok(RenderMode::RawText));
    assert!("html".parse::<RenderMode>().is_err());
    assert_eq!(RenderMode::default(), RenderMode::Markdown);
}

// ========== Text helpers ==========

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("a\t\n\u{3000}\r b"), "a b");
    assert_eq!(collapse_whitespace("\u{00A0}x\u{00A0}"), " x ");
    assert_eq!(collapse_whitespace("plain"), "plain");
}

#[test]
fn test_collapse_newlines() {
    assert_eq!(collapse_newlines("a\n\n\n\nb"), "a\n\nb");
    assert_eq!(collapse_newlines("a\n\nb\nc"), "a\n\nb\nc");
}

#[test]
fn test_escape_markdown() {
    assert_eq!(escape_markdown("*[]`_"), "\\*\\[\\]\\`\\_");
    assert_eq!(escape_markdown("# plain - text"), "# plain - text");
}

#[test]
fn test_hoist_spaces() {
    assert_eq!(hoist_spaces(" two "), (" ", "two", " "));
    assert_eq!(hoist_spaces("  two"), (" ", "two", ""));
    assert_eq!(hoist_spaces("two\t"), ("", "two", " "));
    assert_eq!(hoist_spaces("two"), ("", "two", ""));
}
