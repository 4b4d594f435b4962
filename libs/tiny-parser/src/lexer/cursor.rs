//! # Character Cursor
//!
//! Peekable character cursor for the lexer.
//! Tracks position (byte offset, 1-based line and column) as it advances.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::Cursor;
//!
//! let mut cursor = Cursor::new("hello");
//! assert_eq!(cursor.peek(), Some('h'));
//! cursor.advance();
//! assert_eq!(cursor.peek(), Some('e'));
//! ```

use tiny_ast::Position;

// =============================================================================
// CURSOR
// =============================================================================

/// Character cursor with position tracking.
pub struct Cursor<'a> {
    /// Source text.
    source: &'a str,
    /// Current byte offset.
    offset: usize,
    /// Current line (1-based).
    line: usize,
    /// Current column (1-based).
    column: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current position.
    ///
    /// ```rust
    /// use tiny_parser::lexer::Cursor;
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!((cursor.position().line, cursor.position().column), (2, 1));
    /// ```
    pub fn position(&self) -> Position {
        Position::new(self.offset, self.line, self.column)
    }

    /// Check if at end of input.
    pub fn is_eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Character after the current one.
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.offset..].chars();
        chars.next();
        chars.next()
    }

    /// Consume one character.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Advance while `predicate` holds.
    pub fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    /// Source text between `start` and the current position.
    pub fn slice_from(&self, start: Position) -> &'a str {
        &self.source[start.offset..self.offset]
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_cursor_peek_does_not_advance() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek(), Some('a'));
        assert_eq!(cursor.peek_next(), Some('b'));
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.position(), Position::new(1, 1, 2));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_newline_resets_column() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(2, 2, 1));
    }

    #[test]
    fn test_cursor_advance_while_and_slice() {
        let mut cursor = Cursor::new("abc123");
        let start = cursor.position();
        cursor.advance_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.peek(), Some('1'));
        assert_eq!(cursor.slice_from(start), "abc");
    }

    #[test]
    fn test_cursor_utf8() {
        let mut cursor = Cursor::new("é");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position().offset, 2);
        assert_eq!(cursor.position().column, 2);
    }
}
