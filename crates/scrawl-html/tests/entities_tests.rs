//! Integration tests for character reference decoding.

use scrawl_html::decode_entities;
use scrawl_html::tokenizer::entities::lookup_entity;

#[test]
fn test_lookup_named_references() {
    assert_eq!(lookup_entity("amp"), Some("&"));
    assert_eq!(lookup_entity("lt"), Some("<"));
    assert_eq!(lookup_entity("gt"), Some(">"));
    assert_eq!(lookup_entity("quot"), Some("\""));
    assert_eq!(lookup_entity("apos"), Some("'"));
    assert_eq!(lookup_entity("nbsp"), Some("\u{00A0}"));
    assert_eq!(lookup_entity("Eacute"), Some("É"));
}

#[test]
fn test_lookup_numeric_references() {
    assert_eq!(lookup_entity("#38"), Some("&"));
    assert_eq!(lookup_entity("#128"), Some("€"));
    assert_eq!(lookup_entity("#163"), Some("£"));
    assert_eq!(lookup_entity("#169"), Some("©"));
    assert_eq!(lookup_entity("#233"), Some("é"));
}

#[test]
fn test_lookup_unknown_reference() {
    assert_eq!(lookup_entity("hellip"), None);
    assert_eq!(lookup_entity("#8230"), None);
    assert_eq!(lookup_entity(""), None);
}

#[test]
fn test_decode_mixed_text() {
    assert_eq!(
        decode_entities("&quot;caf&eacute;&quot; &copy; 2024 &euro;5 &pound;4"),
        "\"café\" © 2024 €5 £4"
    );
}

#[test]
fn test_decode_leaves_unknown_and_bare_ampersands() {
    assert_eq!(decode_entities("fish & chips"), "fish & chips");
    assert_eq!(decode_entities("&hellip;"), "&hellip;");
    assert_eq!(decode_entities("&amp"), "&amp");
    assert_eq!(decode_entities("a&&amp;b"), "a&&b");
    assert_eq!(decode_entities("&"), "&");
}

#[test]
fn test_decode_is_single_pass() {
    assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    assert_eq!(decode_entities("&amp;amp;"), "&amp;");
}

#[test]
fn test_decode_is_case_sensitive() {
    assert_eq!(decode_entities("&eacute;&Eacute;"), "éÉ");
    assert_eq!(decode_entities("&AMP;"), "&AMP;");
}

#[test]
fn test_decode_without_references_is_identity() {
    assert_eq!(decode_entities("plain text"), "plain text");
    assert_eq!(decode_entities(""), "");
}
