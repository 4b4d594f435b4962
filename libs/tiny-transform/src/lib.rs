//! # Tiny Transform Crate
//!
//! Rewrites a Tiny source tree into a JavaScript target tree.
//!
//! ## Architecture
//!
//! ```text
//! Tree ─→ walker (post-order) ─→ registry (one rule per tag) ─→ Target
//!                                     │
//!                                     └─→ continuation (statement sequences)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tiny_ast::{build, ValueType};
//! use tiny_transform::transform_program;
//!
//! let tree = build::tiny(
//!     vec![build::declaration(vec![build::identifier("x")], ValueType::Integer)],
//!     build::block_statement(vec![build::assignment_statement(
//!         build::identifier("x"),
//!         build::literal(1),
//!     )]),
//! );
//! let program = transform_program(&tree).unwrap();
//! assert_eq!(
//!     js_ast::print(&program),
//!     "var runtime = require(\"./runtime\");\nvar tiny$x = 0;\n{\n  tiny$x = 1;\n}\n"
//! );
//! ```
//!
//! ## Design Principles
//!
//! - **Borrowed Input**: the source tree is never modified
//! - **All Or Nothing**: the first error aborts the transform
//! - **Closed Rules**: every tag has exactly one rule, checked at compile time

pub mod continuation;
pub mod error;
pub mod registry;
pub mod target;
pub mod walker;

pub use error::TransformError;
pub use target::Target;

use config::constants::CompilerConfig;
use js_ast::Program;
use log::debug;
use tiny_ast::Tree;
use walker::{traverse, Walked};

/// Transform `tree` with the default configuration.
///
/// Any tagged node may be the root; the result is whatever its rule builds.
pub fn transform(tree: &Tree) -> Result<Target, TransformError> {
    transform_with(tree, &CompilerConfig::default())
}

/// Transform `tree` with an explicit configuration.
///
/// ## Errors
///
/// [`TransformError::UnexpectedRoot`] when the root is a sequence or a leaf,
/// otherwise the first error raised by a rewrite rule.
pub fn transform_with(tree: &Tree, config: &CompilerConfig) -> Result<Target, TransformError> {
    debug!("transforming tree of {} node(s)", tree.node_count());
    match traverse(tree, &mut |node| registry::rewrite(node, config))? {
        Walked::Node(target) => {
            debug!("transform produced a {}", target.kind_name());
            Ok(target)
        }
        other => Err(TransformError::UnexpectedRoot {
            expected: "a node",
            found: other.shape_name(),
        }),
    }
}

/// Transform a whole program with the default configuration.
pub fn transform_program(tree: &Tree) -> Result<Program, TransformError> {
    transform_program_with(tree, &CompilerConfig::default())
}

/// Transform a whole program; the root must be a `Tiny` node.
pub fn transform_program_with(tree: &Tree, config: &CompilerConfig) -> Result<Program, TransformError> {
    match transform_with(tree, config)? {
        Target::Program(program) => Ok(program),
        other => Err(TransformError::UnexpectedRoot {
            expected: "program",
            found: other.kind_name(),
        }),
    }
}
