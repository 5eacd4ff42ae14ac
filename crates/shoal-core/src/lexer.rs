//! Lexical primitives shared by the parameter and node parsers.
//!
//! These are thin loops over [`Stream`]: classification, "read until a stop
//! character" accumulation, and quoted-string reading. None of them consume
//! the character they stop at.

use crate::error::ConfigError;
use crate::stream::Stream;

/// Quote characters accepted interchangeably for string values.
pub const QUOTATION_MARKS: [char; 3] = ['\'', '"', '`'];

/// Whitespace classification used throughout the format.
#[inline]
pub fn is_space(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Check if a string is empty or contains only whitespace.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_space)
}

/// Skip whitespace characters, optionally stopping at newlines.
pub fn skip_whitespace(stream: &mut Stream, with_newline: bool) {
    while let Some(ch) = stream.peek_char() {
        if !with_newline && ch == '\n' {
            return;
        }
        if is_space(ch) {
            stream.skip(1);
        } else {
            return;
        }
    }
}

/// Accumulate characters until the predicate matches the next character or
/// input ends. The stop character is not consumed.
pub fn read_until(stream: &mut Stream, stop: impl Fn(char) -> bool) -> String {
    let mut result = String::new();
    while let Some(ch) = stream.peek_char() {
        if stop(ch) {
            break;
        }
        stream.skip(1);
        result.push(ch);
    }
    result
}

/// Read a word, stopping at whitespace or any character in `stop_chars`.
pub fn read_word(stream: &mut Stream, stop_chars: &str) -> String {
    read_until(stream, |ch| is_space(ch) || stop_chars.contains(ch))
}

/// Read a quoted string if the next character is a quotation mark.
///
/// Returns `Ok(None)` when the next character is not a quote. Otherwise the
/// opener is consumed, one immediately-following newline is dropped, and raw
/// characters (newlines included, comments inert) are accumulated until the
/// same quote character recurs. The closing quote is consumed but not
/// included. Fails if input ends before the string is closed, reporting the
/// opening quote's position.
pub fn read_quoted_string(stream: &mut Stream) -> Result<Option<String>, ConfigError> {
    let quotation_mark = match stream.peek_char() {
        Some(ch) if QUOTATION_MARKS.contains(&ch) => ch,
        _ => return Ok(None),
    };

    stream.without_comments(|stream| {
        let pos = stream.position();
        stream.skip(1);
        stream.skip_line_separator();

        let mut result = String::new();
        while let Some(ch) = stream.read_char() {
            if ch == quotation_mark {
                return Ok(Some(result));
            }
            result.push(ch);
        }
        Err(ConfigError::unterminated_string(pos))
    })
}
