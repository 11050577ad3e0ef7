//! Tokenizer driver and the ordered list of token matchers.
//!
//! At every position the matchers in [`MATCHERS`] are tried in order and
//! the first one to consume at least one character wins. A matcher that
//! gives up must leave the cursor where it found it.

use thiserror::Error;

use super::cursor::Cursor;
use super::entities::decode_entities;
use super::token::Token;

/// Errors produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenizeError {
    /// No matcher could consume the input at this point. Carries the
    /// unconsumed remainder.
    #[error("no token matches the input starting at {0:?}")]
    UnclaimedInput(String),
}

/// A token matcher. Returns `None`, with the cursor untouched, when the
/// input at the cursor is not its kind of token.
type Matcher = fn(&mut Cursor<'_>) -> Option<Token>;

/// Matchers in priority order. Later entries only see input the earlier
/// ones declined, which is how a lone `/` ends up as text.
const MATCHERS: [Matcher; 7] = [
    match_tag_start,
    match_tag_end,
    match_auto_closing_tag_end,
    match_equals_sign,
    match_quote,
    match_whitespace,
    match_text,
];

/// Characters that may not start a text run.
const TEXT_START_RESERVED: &[char] = &['<', '>', '\'', '=', '"'];

/// Characters that end a text run. Unlike the start set this includes `/`.
const TEXT_RESERVED: &[char] = &['<', '>', '/', '=', '\'', '"'];

/// Eager, single-pass tokenizer.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizeError::UnclaimedInput`] if some character is not
    /// claimed by any matcher. No partial token list is returned.
    pub fn run(mut self) -> Result<Vec<Token>, TokenizeError> {
        while !self.cursor.is_at_end() {
            let token = MATCHERS
                .iter()
                .find_map(|matcher| matcher(&mut self.cursor))
                .ok_or_else(|| {
                    TokenizeError::UnclaimedInput(self.cursor.remaining().to_string())
                })?;
            self.tokens.push(token);
        }
        self.tokens.push(Token::EndOfFile);
        Ok(self.tokens)
    }
}

/// Tokenize `input` into a token sequence ending in [`Token::EndOfFile`].
///
/// # Errors
///
/// See [`Tokenizer::run`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, TokenizeError> {
    Tokenizer::new(input).run()
}

// =============================================================================
// Matchers
// =============================================================================

/// `<` or `</`, allowing whitespace in between for the closing form.
fn match_tag_start(cursor: &mut Cursor<'_>) -> Option<Token> {
    let start = cursor.position();
    if !cursor.consume_char('<') {
        return None;
    }
    let after_bracket = cursor.position();

    let _ = cursor.consume_while(char::is_whitespace);
    if cursor.consume_char('/') {
        return Some(Token::ClosingTagStart(
            cursor.consumed_since(start).to_string(),
        ));
    }

    // Not a closing tag: give the whitespace back.
    cursor.rewind(after_bracket);
    Some(Token::OpeningTagStart("<".to_string()))
}

fn match_tag_end(cursor: &mut Cursor<'_>) -> Option<Token> {
    cursor
        .consume_char('>')
        .then(|| Token::TagEnd(">".to_string()))
}

/// `/`, optional whitespace, `>`. Rewinds completely if the `>` is missing.
fn match_auto_closing_tag_end(cursor: &mut Cursor<'_>) -> Option<Token> {
    let start = cursor.position();
    if !cursor.consume_char('/') {
        return None;
    }
    let _ = cursor.consume_while(char::is_whitespace);
    if cursor.consume_char('>') {
        return Some(Token::AutoClosingTagEnd(
            cursor.consumed_since(start).to_string(),
        ));
    }
    cursor.rewind(start);
    None
}

fn match_equals_sign(cursor: &mut Cursor<'_>) -> Option<Token> {
    cursor
        .consume_char('=')
        .then(|| Token::EqualsSign("=".to_string()))
}

fn match_quote(cursor: &mut Cursor<'_>) -> Option<Token> {
    cursor
        .consume_if(|c| c == '"' || c == '\'')
        .map(|q| Token::Quote(q.to_string()))
}

fn match_whitespace(cursor: &mut Cursor<'_>) -> Option<Token> {
    let run = cursor.consume_while(char::is_whitespace);
    (!run.is_empty()).then(|| Token::whitespace(run))
}

/// A run of ordinary characters. A `/` may start a run but never continue
/// one, so `h/` becomes two text tokens.
fn match_text(cursor: &mut Cursor<'_>) -> Option<Token> {
    let start = cursor.position();
    let _ = cursor.consume_if(|c| !c.is_whitespace() && !TEXT_START_RESERVED.contains(&c))?;
    let _ = cursor.consume_while(|c| !c.is_whitespace() && !TEXT_RESERVED.contains(&c));
    Some(Token::Text(decode_entities(cursor.consumed_since(start))))
}
