//! Text clean-up shared by both render modes.
//!
//! The patterns are compiled once. If one fails to compile the affected
//! function returns its input unchanged and a warning is printed once.

use std::sync::LazyLock;

use regex::Regex;
use scrawl_common::warning::warn_once;

type Pattern = LazyLock<Result<Regex, regex::Error>>;

/// Runs of ideographic space, no-break space, space, tab, LF or CR.
static WHITESPACE_RUN: Pattern = LazyLock::new(|| Regex::new(r"[\x{3000}\x{00A0} \t\n\r]+"));

/// Three or more consecutive newlines.
static EXCESS_NEWLINES: Pattern = LazyLock::new(|| Regex::new(r"\n{3,}"));

/// Characters escaped by [`escape_markdown`].
const MARKDOWN_SPECIALS: &[char] = &['*', '[', ']', '`', '_'];

fn replace_all(pattern: &Pattern, name: &str, text: &str, replacement: &str) -> String {
    match &**pattern {
        Ok(regex) => regex.replace_all(text, replacement).into_owned(),
        Err(err) => {
            warn_once("Renderer", &format!("{name} pattern unavailable: {err}"));
            text.to_string()
        }
    }
}

/// Collapse every whitespace run to a single ordinary space.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    replace_all(&WHITESPACE_RUN, "whitespace", text, " ")
}

/// Limit blank lines to one: three or more newlines become two.
#[must_use]
pub fn collapse_newlines(text: &str) -> String {
    replace_all(&EXCESS_NEWLINES, "newline", text, "\n\n")
}

/// Backslash-escape characters Markdown would otherwise interpret.
#[must_use]
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIALS.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Split one leading and one trailing run of spaces off `inner`.
///
/// Emphasis markers only take effect in most Markdown dialects when they
/// hug the text, so `" word "` must render as `" *word* "`.
#[must_use]
pub fn hoist_spaces(inner: &str) -> (&'static str, &str, &'static str) {
    const INLINE_SPACE: [char; 2] = [' ', '\t'];

    let prefix = if inner.starts_with(INLINE_SPACE) { " " } else { "" };
    let postfix = if inner.ends_with(INLINE_SPACE) { " " } else { "" };
    (prefix, inner.trim_matches(INLINE_SPACE), postfix)
}
