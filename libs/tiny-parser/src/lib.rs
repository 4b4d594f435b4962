//! # Tiny Parser
//!
//! Parses Tiny source text into a [`tiny_ast::Tree`].
//!
//! ## Architecture
//!
//! ```text
//! Source Text → Lexer → Tokens → Parser → Tree
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tiny_parser::{parse, ParseOptions};
//!
//! let tree = parse("integer x; { x = 1; }", ParseOptions::default()).unwrap();
//! assert_eq!(tree.node_count(), 7);
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! tiny-parser → tiny-ast → tiny-transform → js-ast → tiny-cli
//! ```

pub mod error;
pub mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};

use log::debug;
use tiny_ast::Tree;

/// Output options for [`parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Attach a `location` leaf to every node.
    pub location: bool,
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse a Tiny program.
///
/// ## Errors
///
/// The first syntax error, with its 1-based line and column.
///
/// ```rust
/// use tiny_parser::{parse, ParseOptions};
///
/// let err = parse("{ x = ; }", ParseOptions::default()).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Syntax error on line 1, column 7: unexpected token ';', expected expression"
/// );
/// ```
pub fn parse(source: &str, options: ParseOptions) -> Result<Tree, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize();
    debug!("lexed {} token(s)", tokens.len());
    let tree = parser::Parser::new(tokens, options).parse()?;
    debug!("parsed {} node(s)", tree.node_count());
    Ok(tree)
}

// =============================================================================
// TESTS
// =============================================================================
