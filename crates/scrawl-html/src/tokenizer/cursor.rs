//! Byte-position cursor over the tokenizer input.
//!
//! Matchers save [`Cursor::position`] before they start and
//! [`Cursor::rewind`] to it when they give up, which is all the
//! backtracking the tokenizer needs.

/// A position in a borrowed input string.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Start at the beginning of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Move back to an offset previously returned by [`Cursor::position`].
    pub const fn rewind(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// True once every character has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Everything not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The input consumed since `start`.
    #[must_use]
    pub fn consumed_since(&self, start: usize) -> &'a str {
        &self.input[start..self.pos]
    }

    /// Look at the next character without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume the next character.
    pub fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume the next character if it is `expected`.
    pub fn consume_char(&mut self, expected: char) -> bool {
        self.consume_if(|c| c == expected).is_some()
    }

    /// Consume the next character if it satisfies `pred`.
    pub fn consume_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.consume(),
            _ => None,
        }
    }

    /// Consume characters while `pred` holds and return them.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while self.consume_if(&pred).is_some() {}
        self.consumed_since(start)
    }
}
