//! # Primary Expression Parsing
//!
//! Integer and boolean literals, `read`, identifiers and parenthesised
//! expressions.

use super::Parser;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::TokenKind;
use tiny_ast::{build, Tree};

impl Parser {
    /// ```text
    /// primary = integer | "true" | "false" | "read" | ident | "(" expression ")"
    /// ```
    pub(super) fn parse_primary(&mut self) -> Result<Tree, ParseError> {
        let start = self.current_position();
        match self.peek_kind() {
            TokenKind::Number => {
                let token = self.advance();
                let value: i64 = token.text.parse().map_err(|_| {
                    ParseError::new(ParseErrorKind::InvalidNumber { text: token.text.clone() }, start)
                })?;
                Ok(self.located(build::literal(value), start))
            }
            TokenKind::True | TokenKind::False => {
                let value = self.advance().kind == TokenKind::True;
                Ok(self.located(build::literal(value), start))
            }
            TokenKind::Read => {
                self.advance();
                Ok(self.located(build::read_expression(), start))
            }
            TokenKind::Identifier => self.parse_identifier(),
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
