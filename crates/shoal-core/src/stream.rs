//! Position-tracking character stream.
//!
//! The stream is the single source of truth the parser reads from. It
//! normalizes line endings, silently drops `;` comments, and keeps the
//! current line/column up to date as characters are consumed.
//!
//! # Normalization
//!
//! - `\n`, `\r` and `\r\n` are each exposed as one logical `'\n'`; a raw
//!   `\r` is never visible to callers.
//! - While comment skipping is active (the default), a `;` discards the
//!   rest of the physical line. The terminating newline is not part of the
//!   comment and is still delivered.
//!
//! Peeking never moves the cursor; only `read`/`skip` advance the position.
//! The stream itself never fails — malformed input is detected by callers
//! from the characters and positions it reports.

use crate::position::StreamPosition;
use memchr::memchr2;

/// Character cursor over the input with bounded lookahead.
pub struct Stream<'a> {
    /// The complete input text.
    input: &'a str,
    /// Input as bytes for efficient comment-line scanning.
    bytes: &'a [u8],
    /// Current byte offset.
    offset: usize,
    /// Position of the next unconsumed character.
    position: StreamPosition,
    /// Whether `;` starts a comment (true) or is an ordinary character.
    skip_comments: bool,
}

impl<'a> Stream<'a> {
    /// Create a stream over the given input.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            offset: 0,
            position: StreamPosition::start(),
            skip_comments: true,
        }
    }

    /// The position of the next unconsumed character.
    #[inline]
    pub fn position(&self) -> StreamPosition {
        self.position
    }

    /// Check if all input has been consumed.
    ///
    /// A trailing comment with no newline counts as consumed input.
    #[inline]
    pub fn at_end(&self) -> bool {
        self.next_logical(self.offset).is_none()
    }

    /// Toggle comment handling.
    ///
    /// Callers disabling comments are responsible for restoring them on
    /// every exit path; see [`Stream::without_comments`].
    #[inline]
    pub fn set_skip_comments(&mut self, enabled: bool) {
        self.skip_comments = enabled;
    }

    /// Run `f` with comment skipping disabled, restoring the previous
    /// state afterwards regardless of how `f` returns.
    pub fn without_comments<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.skip_comments;
        self.skip_comments = false;
        let result = f(self);
        self.skip_comments = previous;
        result
    }

    /// Peek at the next logical character without consuming it.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        self.next_logical(self.offset).map(|(ch, _)| ch)
    }

    /// Peek at up to `n` logical characters without consuming them.
    ///
    /// Returns fewer characters (possibly none) at end of input.
    pub fn peek(&self, n: usize) -> String {
        let mut result = String::new();
        let mut offset = self.offset;
        for _ in 0..n {
            match self.next_logical(offset) {
                Some((ch, next)) => {
                    result.push(ch);
                    offset = next;
                }
                None => break,
            }
        }
        result
    }

    /// Consume and return the next logical character.
    #[inline]
    pub fn read_char(&mut self) -> Option<char> {
        let (ch, next) = self.next_logical(self.offset)?;
        self.offset = next;
        self.position.advance(ch);
        Some(ch)
    }

    /// Consume and return up to `n` logical characters.
    pub fn read(&mut self, n: usize) -> String {
        let mut result = String::new();
        for _ in 0..n {
            match self.read_char() {
                Some(ch) => result.push(ch),
                None => break,
            }
        }
        result
    }

    /// Consume up to `n` logical characters, discarding them.
    #[inline]
    pub fn skip(&mut self, n: usize) {
        let _ = self.read(n);
    }

    /// Consume exactly one normalized newline at the current position, if
    /// present.
    ///
    /// Used to drop a newline immediately following an opening quote so it
    /// does not become the first character of the string value.
    #[inline]
    pub fn skip_line_separator(&mut self) {
        if self.peek_char() == Some('\n') {
            self.skip(1);
        }
    }

    /// Resolve the next logical character starting at `offset`.
    ///
    /// Returns the character and the byte offset just past it, applying
    /// comment skipping and newline normalization. Does not touch the
    /// cursor or position.
    fn next_logical(&self, mut offset: usize) -> Option<(char, usize)> {
        loop {
            let ch = self.input[offset..].chars().next()?;
            match ch {
                ';' if self.skip_comments => {
                    // Jump to the end of the physical line; the newline
                    // itself is delivered on the next iteration.
                    offset += match memchr2(b'\r', b'\n', &self.bytes[offset..]) {
                        Some(at) => at,
                        None => self.bytes.len() - offset,
                    };
                }
                '\r' => {
                    let after = offset + 1;
                    let after = if self.bytes.get(after) == Some(&b'\n') {
                        after + 1
                    } else {
                        after
                    };
                    return Some(('\n', after));
                }
                _ => return Some((ch, offset + ch.len_utf8())),
            }
        }
    }
}

