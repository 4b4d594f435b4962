//! # Tree Builders
//!
//! One constructor per source tag. The parser builds every node through these,
//! and tests use them to write trees by hand.
//!
//! ## Example
//!
//! ```rust
//! use tiny_ast::build::*;
//!
//! // x = x + 1;
//! let stmt = assignment_statement(
//!     identifier("x"),
//!     binary_expression("+", identifier("x"), literal(1)),
//! );
//! assert_eq!(stmt.node_count(), 5);
//! ```

use crate::field;
use crate::tag::{Tag, ValueType};
use crate::tree::{Node, Tree};
use serde_json::Value;

/// Program root.
pub fn tiny(declarations: Vec<Tree>, body: Tree) -> Tree {
    Node::of(Tag::Tiny)
        .with(field::DECLARATIONS, declarations)
        .with(field::BODY, body)
        .into()
}

/// `integer a, b;`
pub fn declaration(ids: Vec<Tree>, value_type: ValueType) -> Tree {
    Node::of(Tag::Declaration)
        .with(field::IDS, ids)
        .with(field::VALUE_TYPE, value_type.as_str())
        .into()
}

/// `{ ... }`
pub fn block_statement(body: Vec<Tree>) -> Tree {
    Node::of(Tag::BlockStatement).with(field::BODY, body).into()
}

/// A variable reference.
pub fn identifier(name: impl Into<String>) -> Tree {
    let name: String = name.into();
    Node::of(Tag::Identifier).with(field::NAME, name).into()
}

/// A scalar constant.
pub fn literal(value: impl Into<Value>) -> Tree {
    Node::of(Tag::Literal)
        .with(field::VALUE, Tree::leaf(value))
        .into()
}

/// `left = right;`
pub fn assignment_statement(left: Tree, right: Tree) -> Tree {
    Node::of(Tag::AssignmentStatement)
        .with(field::LEFT, left)
        .with(field::RIGHT, right)
        .into()
}

/// `read`
pub fn read_expression() -> Tree {
    Node::of(Tag::ReadExpression).into()
}

/// `output value;`
pub fn output_statement(value: Tree) -> Tree {
    Node::of(Tag::OutputStatement).with(field::VALUE, value).into()
}

/// Prefix operator application.
pub fn unary_expression(operator: &str, argument: Tree) -> Tree {
    Node::of(Tag::UnaryExpression)
        .with(field::OPERATOR, operator)
        .with(field::ARGUMENT, argument)
        .into()
}

/// Infix operator application.
pub fn binary_expression(operator: &str, left: Tree, right: Tree) -> Tree {
    Node::of(Tag::BinaryExpression)
        .with(field::OPERATOR, operator)
        .with(field::LEFT, left)
        .with(field::RIGHT, right)
        .into()
}

/// `while (test) body`
pub fn while_statement(test: Tree, body: Tree) -> Tree {
    Node::of(Tag::WhileStatement)
        .with(field::TEST, test)
        .with(field::BODY, body)
        .into()
}

/// `if (test) consequent else alternate`; absent branches become null leaves.
pub fn if_statement(test: Tree, consequent: Option<Tree>, alternate: Option<Tree>) -> Tree {
    Node::of(Tag::IfStatement)
        .with(field::TEST, test)
        .with(field::CONSEQUENT, consequent)
        .with(field::ALTERNATE, alternate)
        .into()
}
