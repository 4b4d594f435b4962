//! # Operator Parsing
//!
//! Binary and unary operators by precedence climbing.
//!
//! | Precedence | Operators | Associativity |
//! |------------|-----------|---------------|
//! | 1 | \|\| | Left |
//! | 2 | && | Left |
//! | 3 | == != | Left |
//! | 4 | < <= > >= | Left |
//! | 5 | + - | Left |
//! | 6 | * / % | Left |
//! | 7 | ! - (unary) | Right |
//!
//! Operator text goes into the tree exactly as written.

use super::Parser;
use crate::error::ParseError;
use crate::lexer::TokenKind;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use tiny_ast::{build, Tree};

// =============================================================================
// PRECEDENCE
// =============================================================================

/// Binary precedence levels; higher binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(super) enum Precedence {
    /// `||`
    Or = 1,
    /// `&&`
    And = 2,
    /// `== !=`
    Equality = 3,
    /// `< <= > >=`
    Comparison = 4,
    /// `+ -`
    Term = 5,
    /// `* / %`
    Factor = 6,
    /// Above every binary operator.
    Unary = 7,
}

impl Precedence {
    /// Precedence of a binary operator token.
    pub(super) fn of_binary(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::PipePipe => Some(Self::Or),
            TokenKind::AmpAmp => Some(Self::And),
            TokenKind::EqEq | TokenKind::BangEq => Some(Self::Equality),
            TokenKind::Lt | TokenKind::LtEq | TokenKind::Gt | TokenKind::GtEq => {
                Some(Self::Comparison)
            }
            TokenKind::Plus | TokenKind::Minus => Some(Self::Term),
            TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some(Self::Factor),
            _ => None,
        }
    }

    /// Next tighter level, for left-associative operands.
    pub(super) fn next(self) -> Self {
        match self {
            Self::Or => Self::And,
            Self::And => Self::Equality,
            Self::Equality => Self::Comparison,
            Self::Comparison => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor | Self::Unary => Self::Unary,
        }
    }
}

// =============================================================================
// OPERATOR PARSING
// =============================================================================

impl Parser {
    /// Parse a full expression.
    pub(super) fn parse_expression(&mut self) -> Result<Tree, ParseError> {
        self.parse_precedence(Precedence::Or)
    }

    /// Parse operators binding at least as tight as `min_prec`.
    fn parse_precedence(&mut self, min_prec: Precedence) -> Result<Tree, ParseError> {
        let start = self.current_position();
        let mut left = self.parse_unary()?;

        while let Some(prec) = Precedence::of_binary(self.peek_kind()) {
            if prec < min_prec {
                break;
            }
            let op = self.advance();
            let right = self.parse_precedence(prec.next())?;
            left = self.located(build::binary_expression(&op.text, left, right), start);
        }

        Ok(left)
    }

    /// ```text
    /// unary = ("!" | "-") unary | primary
    /// ```
    fn parse_unary(&mut self) -> Result<Tree, ParseError> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            if matches!(self.peek_kind(), TokenKind::Bang | TokenKind::Minus) {
                let start = self.current_position();
                let op = self.advance();
                let argument = self.parse_unary()?;
                return Ok(self.located(build::unary_expression(&op.text, argument), start));
            }
            self.parse_primary()
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{parse, ParseOptions};
    use tiny_ast::Tree;

    /// Parse `output <source>;` and render the expression fully parenthesised.
    fn shape(source: &str) -> String {
        let program = format!("{{ output {source}; }}");
        let tree = parse(&program, ParseOptions::default()).unwrap();
        let stmt = &tree.as_node().unwrap().field("body").unwrap().as_node().unwrap()
            .field("body").unwrap().as_seq().unwrap()[0];
        render(stmt.as_node().unwrap().field("value").unwrap())
    }

    fn render(tree: &Tree) -> String {
        let node = tree.as_node().unwrap();
        let text = |name: &str| node.field(name).and_then(Tree::as_str).unwrap_or_default().to_string();
        match node.tag() {
            "BinaryExpression" => format!(
                "({} {} {})",
                render(node.field("left").unwrap()),
                text("operator"),
                render(node.field("right").unwrap())
            ),
            "UnaryExpression" => format!("({}{})", text("operator"), render(node.field("argument").unwrap())),
            "Identifier" => text("name"),
            "Literal" => node.field("value").map(|v| serde_json::to_string(v).unwrap()).unwrap(),
            "ReadExpression" => "read".to_string(),
            other => panic!("unexpected {other}"),
        }
    }

    #[test]
    fn test_factor_binds_tighter_than_term() {
        assert_eq!(shape("1 + 2 * 3"), "(1 + (2 * 3))");
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(shape("a - b - c"), "((a - b) - c)");
        assert_eq!(shape("a / b % c"), "((a / b) % c)");
    }

    #[test]
    fn test_logical_levels() {
        assert_eq!(shape("a || b && c == d"), "(a || (b && (c == d)))");
        assert_eq!(shape("a < b == c >= d"), "((a < b) == (c >= d))");
    }

    #[test]
    fn test_unary_chain() {
        assert_eq!(shape("- -x"), "(-(-x))");
        assert_eq!(shape("!a && b"), "((!a) && b)");
    }

    #[test]
    fn test_parentheses_override() {
        assert_eq!(shape("(1 + 2) * read"), "((1 + 2) * read)");
    }
}
