//! Character reference decoding.
//!
//! Only a fixed table of references is understood: the markup-significant
//! characters, the non-breaking space, a few currency and copyright signs
//! and two accented Latin letters. Anything else is left as written.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Longest reference name in the table, used to bound the `;` search.
const MAX_REFERENCE_LEN: usize = 6;

/// Maps a reference name (between `&` and `;`) to its replacement.
static ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("quot", "\""),
        ("#34", "\""),
        ("amp", "&"),
        ("#38", "&"),
        ("apos", "'"),
        ("#39", "'"),
        ("lt", "<"),
        ("#60", "<"),
        ("gt", ">"),
        ("#62", ">"),
        ("nbsp", "\u{00A0}"),
        ("#160", "\u{00A0}"),
        // Windows-1252 position of the euro sign.
        ("euro", "\u{20AC}"),
        ("#128", "\u{20AC}"),
        ("pound", "\u{00A3}"),
        ("#163", "\u{00A3}"),
        ("copy", "\u{00A9}"),
        ("#169", "\u{00A9}"),
        ("eacute", "\u{00E9}"),
        ("#233", "\u{00E9}"),
        ("Eacute", "\u{00C9}"),
        ("#201", "\u{00C9}"),
    ])
});

/// Look up a reference by name, without the `&` and `;`.
///
/// # Example
/// ```ignore
/// lookup_entity("amp")   // Some("&")
/// lookup_entity("#169")  // Some("©")
/// lookup_entity("hellip") // None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    ENTITIES.get(name).copied()
}

/// Replace every known `&name;` reference in `text`.
///
/// The scan is a single left-to-right pass, so a decoded `&` never starts
/// a new reference: `&amp;lt;` decodes to `&lt;`, not `<`.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp + 1..];
        let replacement = candidate
            .char_indices()
            .take(MAX_REFERENCE_LEN + 1)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| Some((semi, lookup_entity(&candidate[..semi])?)));

        if let Some((semi, replacement)) = replacement {
            out.push_str(replacement);
            rest = &candidate[semi + 1..];
        } else {
            out.push('&');
            rest = candidate;
        }
    }
    out.push_str(rest);
    out
}
