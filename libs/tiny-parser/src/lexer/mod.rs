//! # Tiny Lexer
//!
//! Tokenizes Tiny source code. Characters no token starts with become
//! [`TokenKind::Error`] tokens; the parser reports them when it reaches them.
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("x = 10;").tokenize();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
//! ```

mod cursor;
mod token;

pub use cursor::Cursor;
pub use token::{Token, TokenKind};

use tiny_ast::{Location, Position};

// =============================================================================
// LEXER
// =============================================================================

/// Tiny lexer.
pub struct Lexer<'a> {
    /// Character cursor.
    cursor: Cursor<'a>,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// The result always ends with exactly one [`TokenKind::Eof`] token.
    pub fn tokenize(mut self) -> Vec<Token> {
        loop {
            if let Err(start) = self.skip_whitespace_and_comments() {
                let location = Location::new(start, self.cursor.position());
                self.tokens
                    .push(Token::new(TokenKind::UnterminatedComment, location, "/*"));
                break;
            }
            if self.cursor.is_eof() {
                break;
            }
            self.scan_token();
        }

        let eof = self.cursor.position();
        self.tokens
            .push(Token::new(TokenKind::Eof, Location::new(eof, eof), String::new()));
        self.tokens
    }

    /// Skip whitespace and comments. Returns the start of a block comment
    /// that never closes.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), Position> {
        loop {
            self.cursor.advance_while(char::is_whitespace);

            match (self.cursor.peek(), self.cursor.peek_next()) {
                (Some('/'), Some('/')) => {
                    self.cursor.advance_while(|c| c != '\n');
                }
                (Some('/'), Some('*')) => {
                    let start = self.cursor.position();
                    self.cursor.advance(); // /
                    self.cursor.advance(); // *
                    loop {
                        match (self.cursor.peek(), self.cursor.peek_next()) {
                            (Some('*'), Some('/')) => {
                                self.cursor.advance();
                                self.cursor.advance();
                                break;
                            }
                            (Some(_), _) => {
                                self.cursor.advance();
                            }
                            (None, _) => return Err(start),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Push a token spanning from `start` to the cursor.
    fn push(&mut self, kind: TokenKind, start: Position) {
        let text = self.cursor.slice_from(start);
        let location = Location::new(start, self.cursor.position());
        self.tokens.push(Token::new(kind, location, text));
    }

    /// Consume `second` if it follows, choosing between two token kinds.
    fn either(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.peek() == Some(second) {
            self.cursor.advance();
            double
        } else {
            single
        }
    }

    /// Scan a single token.
    fn scan_token(&mut self) {
        let start = self.cursor.position();
        let c = match self.cursor.advance() {
            Some(c) => c,
            None => return,
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,

            '=' => self.either('=', TokenKind::EqEq, TokenKind::Eq),
            '!' => self.either('=', TokenKind::BangEq, TokenKind::Bang),
            '<' => self.either('=', TokenKind::LtEq, TokenKind::Lt),
            '>' => self.either('=', TokenKind::GtEq, TokenKind::Gt),
            '&' => self.either('&', TokenKind::AmpAmp, TokenKind::Error),
            '|' => self.either('|', TokenKind::PipePipe, TokenKind::Error),

            '0'..='9' => {
                self.cursor.advance_while(|c| c.is_ascii_digit());
                TokenKind::Number
            }

            'a'..='z' | 'A'..='Z' | '_' => {
                self.cursor
                    .advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
                TokenKind::keyword(self.cursor.slice_from(start)).unwrap_or(TokenKind::Identifier)
            }

            _ => TokenKind::Error,
        };

        self.push(kind, start);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::new(source).tokenize().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_tokenize_assignment() {
        let tokens = Lexer::new("x = 10;").tokenize();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].text, "x");
        assert_eq!(tokens[1].kind, TokenKind::Eq);
        assert_eq!(tokens[2].kind, TokenKind::Number);
        assert_eq!(tokens[2].text, "10");
        assert_eq!(tokens[3].kind, TokenKind::Semicolon);
        assert_eq!(tokens[4].kind, TokenKind::Eof);
    }

    #[test]
    fn test_tokenize_keywords() {
        assert_eq!(
            kinds("integer boolean read output while if else true false"),
            vec![
                TokenKind::IntegerType,
                TokenKind::BooleanType,
                TokenKind::Read,
                TokenKind::Output,
                TokenKind::While,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::True,
                TokenKind::False,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(kinds("iffy"), vec![TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn test_tokenize_operators() {
        assert_eq!(
            kinds("== != <= >= && || < > ! ="),
            vec![
                TokenKind::EqEq,
                TokenKind::BangEq,
                TokenKind::LtEq,
                TokenKind::GtEq,
                TokenKind::AmpAmp,
                TokenKind::PipePipe,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Bang,
                TokenKind::Eq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            kinds("// line\nx /* block\n spanning */ ;"),
            vec![TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Eof]
        );
    }

    #[test]
    fn test_unterminated_comment() {
        let tokens = Lexer::new("x /* open").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::UnterminatedComment);
        assert_eq!(tokens[1].location.start, Position::new(2, 1, 3));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
    }

    #[test]
    fn test_single_ampersand_is_error() {
        let tokens = Lexer::new("a & b").tokenize();
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].text, "&");
    }

    #[test]
    fn test_token_locations() {
        let tokens = Lexer::new("{\n  output x;\n}").tokenize();
        let output = &tokens[1];
        assert_eq!(output.kind, TokenKind::Output);
        assert_eq!(output.location.start, Position::new(4, 2, 3));
        assert_eq!(output.location.end, Position::new(10, 2, 9));
    }
}
