//! # JS AST Crate
//!
//! The target tree of the Tiny compiler: a small ESTree subset, the builders
//! the transform constructs it with, and the printer that turns it into text.
//!
//! ## Architecture
//!
//! ```text
//! tiny-transform → builders → Program → printer → JavaScript text
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use js_ast::builders::*;
//! use js_ast::printer::print;
//!
//! let program = program(vec![expression_statement(assignment_expression(
//!     "=",
//!     identifier("x"),
//!     literal(1),
//! ))]);
//! assert_eq!(print(&program), "x = 1;\n");
//! ```
//!
//! ## Design Principles
//!
//! - **Construct Only**: nodes are built once through [`builders`] and never
//!   patched afterwards
//! - **Operators As Text**: operator tokens are carried verbatim
//! - **Printer Owns Syntax**: parentheses and layout are decided when printing

pub mod ast;
pub mod builders;
pub mod printer;

pub use ast::{
    DeclarationKind, Expression, Identifier, Literal, Program, Statement, VariableDeclaration,
    VariableDeclarator,
};
pub use printer::{print, Printer};
