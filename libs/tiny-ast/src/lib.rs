//! # Tiny AST Crate
//!
//! The source syntax tree for Tiny programs, as produced by `tiny-parser` or by
//! any external parser that emits the JSON form.
//!
//! ## Architecture
//!
//! ```text
//! Tiny Source → tiny-parser → Tree ─┐
//! JSON (external parser) → Tree ────┴→ tiny-transform → js-ast
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tiny_ast::{build, Tag, Tree, ValueType};
//!
//! let program = build::tiny(
//!     vec![build::declaration(vec![build::identifier("x")], ValueType::Integer)],
//!     build::block_statement(vec![]),
//! );
//! assert_eq!(program.as_node().and_then(|n| n.kind()), Some(Tag::Tiny));
//! ```
//!
//! ## Design Principles
//!
//! - **Explicit Shape**: sequences, tagged nodes and leaves are distinct variants
//! - **Open Tags, Closed Kinds**: a node keeps its tag as text so foreign trees
//!   load; [`Tag`] is the closed set the compiler understands
//! - **Immutable**: nothing in this crate mutates an existing tree

pub mod build;
pub mod field;
pub mod location;
pub mod tag;
pub mod tree;

pub use location::{Location, Position};
pub use tag::{Tag, UnknownTag, UnknownValueType, ValueType};
pub use tree::{Node, Tree, TAG_KEY};
