//! Source location tracking for parsed entries and errors.
//!
//! Shoal positions are line/column based rather than byte based: error
//! messages quote the position where the offending token starts, and the
//! column rules (tab = 4 columns) are part of the format surface.

use std::fmt;

/// A line/column position in the source text.
///
/// Lines and columns are 1-based at the start of the document. Consuming a
/// character advances the column by 1 (a tab by 4); consuming a newline
/// advances the line and resets the column to 1.
///
/// # Example
///
/// ```rust
/// use shoal_core::position::StreamPosition;
///
/// let mut pos = StreamPosition::start();
/// pos.advance('a');
/// pos.advance('\n');
/// assert_eq!(pos, StreamPosition::new(2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamPosition {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

impl StreamPosition {
    /// Create a position from explicit line/column numbers.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the first character of a document.
    #[inline]
    pub const fn start() -> Self {
        Self::new(1, 1)
    }

    /// Advance past one consumed character.
    ///
    /// The character must already be newline-normalized (`\r` and `\r\n`
    /// never reach this point).
    #[inline]
    pub fn advance(&mut self, ch: char) {
        match ch {
            '\n' => {
                self.line += 1;
                self.column = 1;
            }
            '\t' => self.column += 4,
            _ => self.column += 1,
        }
    }
}

impl Default for StreamPosition {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for StreamPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line:{}, column:{}", self.line, self.column)
    }
}
