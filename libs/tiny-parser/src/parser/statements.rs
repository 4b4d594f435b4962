//! # Statement Parsing
//!
//! Program, declarations, blocks and statements.

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use tiny_ast::{build, Tree, ValueType};

impl Parser {
    /// ```text
    /// program = declaration* block EOF
    /// ```
    pub(super) fn parse_program(&mut self) -> Result<Tree, ParseError> {
        let start = self.current_position();
        let mut declarations = Vec::new();
        while matches!(self.peek_kind(), TokenKind::IntegerType | TokenKind::BooleanType) {
            declarations.push(self.parse_declaration()?);
        }
        let body = self.parse_block()?;
        if !self.is_at_end() {
            return Err(self.unexpected(TokenKind::Eof.display()));
        }
        Ok(self.located(build::tiny(declarations, body), start))
    }

    /// ```text
    /// declaration = ("integer" | "boolean") ident ("," ident)* ";"
    /// ```
    fn parse_declaration(&mut self) -> Result<Tree, ParseError> {
        let start = self.current_position();
        let value_type = match self.advance().kind {
            TokenKind::BooleanType => ValueType::Boolean,
            _ => ValueType::Integer,
        };
        let mut ids = vec![self.parse_identifier()?];
        while self.match_token(TokenKind::Comma) {
            ids.push(self.parse_identifier()?);
        }
        self.expect(TokenKind::Semicolon)?;
        Ok(self.located(build::declaration(ids, value_type), start))
    }

    /// ```text
    /// block = "{" statement* "}"
    /// ```
    fn parse_block(&mut self) -> Result<Tree, ParseError> {
        let start = self.current_position();
        self.expect(TokenKind::LBrace)?;
        let mut body = Vec::new();
        while !self.check(TokenKind::RBrace) {
            if self.is_at_end() {
                return Err(self.unexpected(TokenKind::RBrace.display()));
            }
            body.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(self.located(build::block_statement(body), start))
    }

    /// Parse one statement.
    pub(super) fn parse_statement(&mut self) -> Result<Tree, ParseError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let start = self.current_position();
            match self.peek_kind() {
                TokenKind::LBrace => self.parse_block(),
                TokenKind::Identifier => {
                    let left = self.parse_identifier()?;
                    self.expect(TokenKind::Eq)?;
                    let right = self.parse_expression()?;
                    self.expect(TokenKind::Semicolon)?;
                    Ok(self.located(build::assignment_statement(left, right), start))
                }
                TokenKind::Output => {
                    self.advance();
                    let value = self.parse_expression()?;
                    self.expect(TokenKind::Semicolon)?;
                    Ok(self.located(build::output_statement(value), start))
                }
                TokenKind::While => {
                    self.advance();
                    let test = self.parse_condition()?;
                    let body = self.parse_statement()?;
                    Ok(self.located(build::while_statement(test, body), start))
                }
                TokenKind::If => {
                    self.advance();
                    let test = self.parse_condition()?;
                    let consequent = self.parse_branch()?;
                    let alternate = if self.match_token(TokenKind::Else) {
                        self.parse_branch()?
                    } else {
                        None
                    };
                    Ok(self.located(build::if_statement(test, consequent, alternate), start))
                }
                _ => Err(self.unexpected("statement")),
            }
        })
    }

    /// `"(" expression ")"`
    fn parse_condition(&mut self) -> Result<Tree, ParseError> {
        self.expect(TokenKind::LParen)?;
        let test = self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        Ok(test)
    }

    /// An `if` branch: a lone `;` leaves it absent.
    fn parse_branch(&mut self) -> Result<Option<Tree>, ParseError> {
        if self.match_token(TokenKind::Semicolon) {
            Ok(None)
        } else {
            self.parse_statement().map(Some)
        }
    }

    /// A variable name.
    pub(super) fn parse_identifier(&mut self) -> Result<Tree, ParseError> {
        let start = self.current_position();
        let token = self.expect(TokenKind::Identifier)?;
        Ok(self.located(build::identifier(token.text), start))
    }
}

// =============================================================================
// TESTS
// =============================================================================
