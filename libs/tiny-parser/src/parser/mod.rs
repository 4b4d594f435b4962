//! # Tiny Parser
//!
//! Recursive descent parser over the token stream. Builds source trees
//! through [`tiny_ast::build`] and stops at the first syntax error.
//!
//! ## Grammar
//!
//! ```text
//! program     = declaration* block EOF
//! declaration = ("integer" | "boolean") ident ("," ident)* ";"
//! block       = "{" statement* "}"
//! statement   = block
//!             | ident "=" expression ";"
//!             | "output" expression ";"
//!             | "while" "(" expression ")" statement
//!             | "if" "(" expression ")" branch ("else" branch)?
//! branch      = ";" | statement
//! ```

mod operators;
mod primaries;
mod statements;

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::ParseOptions;
use tiny_ast::{field, Location, Position, Tree};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser for Tiny.
pub(crate) struct Parser {
    /// Token stream, terminated by `Eof`.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Output options.
    options: ParseOptions,
}

impl Parser {
    /// Create a parser over a lexer's output.
    pub(crate) fn new(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self {
            tokens,
            current: 0,
            options,
        }
    }

    /// Parse a whole program.
    pub(crate) fn parse(&mut self) -> Result<Tree, ParseError> {
        self.parse_program()
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Current token. Past the end this stays on `Eof`.
    fn peek(&self) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.current.min(last)]
    }

    fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    fn is_at_end(&self) -> bool {
        self.peek_kind() == TokenKind::Eof
    }

    fn current_position(&self) -> Position {
        self.peek().location.start
    }

    /// Consume the current token and return it.
    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    /// End of the last consumed token.
    fn previous_end(&self) -> Position {
        match self.current.checked_sub(1) {
            Some(index) => self.tokens[index].location.end,
            None => self.current_position(),
        }
    }

    /// Consume a token of `kind` or fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(kind.display()))
        }
    }

    /// Consume the current token if it is `kind`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    /// Error for the current token, which is not what the grammar wants.
    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.peek();
        let kind = match token.kind {
            TokenKind::Eof => ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            },
            TokenKind::Error => ParseErrorKind::InvalidCharacter {
                text: token.text.clone(),
            },
            TokenKind::UnterminatedComment => ParseErrorKind::UnterminatedComment,
            _ => ParseErrorKind::UnexpectedToken {
                found: token.text.clone(),
                expected: expected.to_string(),
            },
        };
        ParseError::new(kind, token.location.start)
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    /// Attach a `location` leaf from `start` to the last consumed token, when
    /// locations are enabled.
    fn located(&self, tree: Tree, start: Position) -> Tree {
        if !self.options.location {
            return tree;
        }
        match tree {
            Tree::Node(node) => {
                let location = Location::new(start, self.previous_end());
                node.with(field::LOCATION, Tree::leaf(location)).into()
            }
            other => other,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parser(source: &str) -> Parser {
        Parser::new(Lexer::new(source).tokenize(), ParseOptions::default())
    }

    #[test]
    fn test_advance_stops_at_eof() {
        let mut p = parser("x");
        assert_eq!(p.advance().kind, TokenKind::Identifier);
        assert_eq!(p.advance().kind, TokenKind::Eof);
        assert_eq!(p.advance().kind, TokenKind::Eof);
        assert!(p.is_at_end());
    }

    #[test]
    fn test_expect_reports_found_token() {
        let mut p = parser("x ;");
        let err = p.expect(TokenKind::LBrace).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedToken {
                found: "x".to_string(),
                expected: "'{'".to_string(),
            }
        );
        assert_eq!(err.position, Position::new(0, 1, 1));
    }

    #[test]
    fn test_expect_at_eof() {
        let mut p = parser("");
        let err = p.expect(TokenKind::Semicolon).unwrap_err();
        assert_eq!(
            err.kind,
            ParseErrorKind::UnexpectedEof {
                expected: "';'".to_string()
            }
        );
    }
}
