//! # Parse Errors
//!
//! Error types for the Tiny parser.
//!
//! ## Example
//!
//! ```rust
//! use tiny_ast::Position;
//! use tiny_parser::error::{ParseError, ParseErrorKind};
//!
//! let error = ParseError::new(
//!     ParseErrorKind::UnexpectedEof { expected: "'}'".to_string() },
//!     Position::new(9, 2, 1),
//! );
//! assert_eq!(
//!     error.to_string(),
//!     "Syntax error on line 2, column 1: unexpected end of input, expected '}'"
//! );
//! ```

use thiserror::Error;
use tiny_ast::Position;

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A syntax error with the position it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Syntax error on line {}, column {}: {}", .position.line, .position.column, .kind)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Where the offending token starts.
    pub position: Position,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// 1-based line of the error.
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 1-based column of the error.
    pub fn column(&self) -> usize {
        self.position.column
    }
}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Found a token the grammar does not allow here.
    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Input ended early.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof {
        /// Description of what was expected.
        expected: String,
    },

    /// Integer literal outside the 64-bit range.
    #[error("invalid integer literal '{text}'")]
    InvalidNumber {
        /// The literal as written.
        text: String,
    },

    /// A character no token starts with.
    #[error("unexpected character '{text}'")]
    InvalidCharacter {
        /// The offending text.
        text: String,
    },

    /// `/*` without a closing `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

// =============================================================================
// TESTS
// =============================================================================
