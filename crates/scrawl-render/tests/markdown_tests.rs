//! Integration tests for Markdown rendering.

use scrawl_html::parse;
use scrawl_render::{RenderOptions, to_markdown};

/// Helper to parse and render with no options
fn markdown(html: &str) -> String {
    markdown_with(html, RenderOptions::NONE)
}

/// Helper to parse and render with the given options
fn markdown_with(html: &str, options: RenderOptions) -> String {
    to_markdown(&parse(html).unwrap(), options)
}

// ========== Text ==========

#[test]
fn test_plain_string() {
    assert_eq!(markdown("hello"), "hello");
}

#[test]
fn test_empty_document() {
    assert_eq!(markdown(""), "");
    assert_eq!(markdown("  \n "), "");
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(markdown("a\t\n\u{3000}\r b"), "a b");
    assert_eq!(markdown("a&nbsp;&nbsp;b"), "a b");
    assert_eq!(markdown("<p>one\n   two</p>"), "one two");
}

#[test]
fn test_entities_render_decoded() {
    assert_eq!(markdown("&amp;"), "&");
    assert_eq!(markdown("&lt;b&gt; &copy; caf&eacute;"), "<b> © café");
}

#[test]
fn test_markdown_characters_pass_through_by_default() {
    assert_eq!(markdown("<p>*a* [b] `c` _d_</p>"), "*a* [b] `c` _d_");
}

#[test]
fn test_escape_markdown() {
    assert_eq!(
        markdown_with("<p>*a* [b] `c` _d_</p>", RenderOptions::ESCAPE_MARKDOWN),
        "\\*a\\* \\[b\\] \\`c\\` \\_d\\_"
    );
}

// ========== Paragraphs and breaks ==========

#[test]
fn test_one_paragraph() {
    assert_eq!(markdown("<p>hello</p>"), "hello");
    assert_eq!(markdown("<p>  hello  </p>"), "hello");
}

#[test]
fn test_two_paragraphs() {
    assert_eq!(markdown("<p>hello</p><p>world</p>"), "hello\n\nworld");
    assert_eq!(markdown("<p>hello</p>\n  <p>world</p>\n"), "hello\n\nworld");
}

#[test]
fn test_paragraph_after_text() {
    assert_eq!(markdown("intro<p>body</p>outro"), "intro\nbody\noutro");
}

#[test]
fn test_line_break() {
    assert_eq!(markdown("hello<br/>world"), "hello  \nworld");
    assert_eq!(markdown("hello<br>world"), "hello  \nworld");
}

#[test]
fn test_trailing_line_break_dropped() {
    assert_eq!(markdown("<p>hello<br/></p><p>world</p>"), "hello\n\nworld");
    assert_eq!(markdown("<br>"), "");
}

// ========== Inline formatting ==========

#[test]
fn test_emphasis() {
    assert_eq!(markdown("<em>hello</em>"), "*hello*");
    assert_eq!(markdown("<i>hello</i>"), "*hello*");
}

#[test]
fn test_strong() {
    assert_eq!(markdown("<strong>hello</strong>"), "**hello**");
    assert_eq!(markdown("<B>hello</B>"), "**hello**");
}

#[test]
fn test_strikethrough() {
    assert_eq!(markdown("a <s>gone</s> b"), "a ~~gone~~ b");
    assert_eq!(markdown("<del>x</del>"), "~~x~~");
    assert_eq!(markdown("<strike>x</strike>"), "~~x~~");
}

#[test]
fn test_emphasis_spaces_are_hoisted() {
    assert_eq!(markdown("one<strong> two </strong>three"), "one **two** three");
    assert_eq!(markdown("one<em> two</em>"), "one *two*");
    assert_eq!(markdown("<em>one </em>two"), "*one* two");
}

#[test]
fn test_nested_emphasis() {
    assert_eq!(markdown("<strong><em>x</em></strong>"), "***x***");
}

#[test]
fn test_inline_code() {
    assert_eq!(markdown("use <code>x_y</code> here"), "use `x_y` here");
    assert_eq!(
        markdown_with("use <code>x_y</code> here", RenderOptions::ESCAPE_MARKDOWN),
        "use `x_y` here"
    );
}

// ========== Links ==========

#[test]
fn test_anchor() {
    assert_eq!(
        markdown("<a href=\"https://daringsnowball.net/\">link</a>"),
        "[link](https://daringsnowball.net/)"
    );
}

#[test]
fn test_anchor_without_href_attribute() {
    assert_eq!(
        markdown("<a ref=\"https://daringsnowball.net/\">link</a>"),
        "link"
    );
}

#[test]
fn test_anchor_with_empty_href() {
    assert_eq!(markdown("<a href=\"\">link</a>"), "link");
}

#[test]
fn test_anchor_with_formatted_text() {
    assert_eq!(
        markdown("see <a href=\"/x\"><em>this</em></a>"),
        "see [*this*](/x)"
    );
}

// ========== Lists ==========

#[test]
fn test_unordered_list() {
    assert_eq!(
        markdown("<ul><li>one</li><li>two</li><li>three</li></ul>"),
        "* one\n* two\n* three"
    );
}

#[test]
fn test_unordered_list_with_text_before() {
    assert_eq!(
        markdown("text<ul><li>one</li><li>two</li><li>three</li></ul>"),
        "text\n\n* one\n* two\n* three"
    );
}

#[test]
fn test_unordered_list_with_text_after() {
    assert_eq!(
        markdown("<ul><li>one</li><li>two</li><li>three</li></ul>text"),
        "* one\n* two\n* three\n\ntext"
    );
}

#[test]
fn test_unordered_list_bullets() {
    assert_eq!(
        markdown_with(
            "<ul><li>one</li><li>two</li></ul>",
            RenderOptions::UNORDERED_LIST_BULLETS
        ),
        "\u{2022} one\n\u{2022} two"
    );
}

#[test]
fn test_ordered_list() {
    assert_eq!(
        markdown("<ol><li>one</li><li>two</li><li>three</li></ol>"),
        "1. one\n2. two\n3. three"
    );
}

#[test]
fn test_ordered_list_with_text_around() {
    assert_eq!(
        markdown("text<ol><li>one</li><li>two</li></ol>more"),
        "text\n\n1. one\n2. two\n\nmore"
    );
}

#[test]
fn test_list_ignores_whitespace_between_items() {
    assert_eq!(
        markdown("<ol>\n  <li>one</li>\n  <li>two</li>\n</ol>"),
        "1. one\n2. two"
    );
}

#[test]
fn test_list_after_paragraph_keeps_one_blank_line() {
    assert_eq!(markdown("<p>a</p><ul><li>b</li></ul>"), "a\n\n* b");
}

#[test]
fn test_list_item_outside_list() {
    assert_eq!(markdown("<li>loose</li>"), "loose");
}

// ========== Preformatted ==========

#[test]
fn test_preformatted_block() {
    assert_eq!(
        markdown("<pre>  let x = 1;\n  let y = 2;</pre>"),
        "```\n  let x = 1;\n  let y = 2;\n```"
    );
}

#[test]
fn test_preformatted_block_between_text() {
    assert_eq!(
        markdown("intro<pre>code</pre>outro"),
        "intro\n\n```\ncode\n```\n\noutro"
    );
}

#[test]
fn test_code_inside_pre_is_not_backticked() {
    assert_eq!(
        markdown_with(
            "<pre><code>a *b*  c</code></pre>",
            RenderOptions::ESCAPE_MARKDOWN
        ),
        "```\na *b*  c\n```"
    );
}

// ========== Passthrough and elision ==========

#[test]
fn test_inert_tags() {
    for tag in ["span", "div", "section", "font"] {
        assert_eq!(markdown(&format!("<{tag}>text</{tag}>")), "text", "{tag}");
    }
}

#[test]
fn test_empty_elements_are_elided() {
    assert_eq!(markdown("<span class=\"x\"></span>"), "");
    assert_eq!(markdown("<p> </p><p>x</p><p></p>"), "x");
}

#[test]
fn test_tag_names_are_case_insensitive() {
    assert_eq!(markdown("<P>a</P><P>b</P>"), "a\n\nb");
    assert_eq!(markdown("<UL><LI>a</LI></UL>"), "* a");
}
