//! # Generic Tree Walker
//!
//! Structural post-order traversal over a [`Tree`]. The walker knows nothing
//! about specific tags: it rebuilds sequences element by element, hands every
//! tagged node to the rewrite function after its fields have been walked, and
//! returns leaves as they are.
//!
//! ## Example
//!
//! ```rust
//! use tiny_ast::build;
//! use tiny_transform::walker::{traverse, Walked};
//!
//! // Count nodes bottom-up: each node is 1 + the counts of its children.
//! let tree = build::binary_expression("+", build::literal(1), build::literal(2));
//! let walked = traverse(&tree, &mut |node| {
//!     let children: usize = node.fields.values().map(|w| match w {
//!         Walked::Node(n) => *n,
//!         _ => 0,
//!     }).sum();
//!     Ok::<_, ()>(1 + children)
//! });
//! assert_eq!(walked, Ok(Walked::Node(3)));
//! ```

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use indexmap::IndexMap;
use serde_json::Value;
use stacker::maybe_grow;
use tiny_ast::Tree;

// =============================================================================
// TYPES
// =============================================================================

/// A tree after rewriting: the same shape, with every tagged node replaced by
/// the rewrite function's output.
#[derive(Debug, Clone, PartialEq)]
pub enum Walked<T> {
    /// Rewritten sequence, same order and length as the input.
    Seq(Vec<Walked<T>>),
    /// Output of the rewrite for a tagged node.
    Node(T),
    /// Untouched leaf.
    Leaf(Value),
}

impl<T> Walked<T> {
    /// Returns the rewritten node, if this is one.
    pub fn into_node(self) -> Option<T> {
        match self {
            Walked::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Short name of the shape, for diagnostics.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Walked::Seq(_) => "sequence",
            Walked::Node(_) => "node",
            Walked::Leaf(_) => "leaf",
        }
    }
}

/// A tagged node whose fields have already been walked.
#[derive(Debug)]
pub struct Rewritten<'t, T> {
    /// Tag text of the source node.
    pub tag: &'t str,
    /// Walked fields in source order.
    pub fields: IndexMap<String, Walked<T>>,
}

// =============================================================================
// TRAVERSAL
// =============================================================================

/// Walk `tree` post-order, applying `rewrite` to every tagged node.
///
/// The input is only borrowed; the result is built fresh. The first error
/// returned by `rewrite` stops the walk and is passed through unchanged.
pub fn traverse<'t, T, E, F>(tree: &'t Tree, rewrite: &mut F) -> Result<Walked<T>, E>
where
    F: FnMut(Rewritten<'t, T>) -> Result<T, E>,
{
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match tree {
        Tree::Seq(items) => items
            .iter()
            .map(|item| traverse(item, rewrite))
            .collect::<Result<Vec<_>, E>>()
            .map(Walked::Seq),
        Tree::Node(node) => {
            let mut fields = IndexMap::with_capacity(node.field_count());
            for (name, value) in node.fields() {
                fields.insert(name.to_string(), traverse(value, rewrite)?);
            }
            rewrite(Rewritten {
                tag: node.tag(),
                fields,
            })
            .map(Walked::Node)
        }
        Tree::Leaf(value) => Ok(Walked::Leaf(value.clone())),
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tiny_ast::build;

    /// Rewrite that records visit order and returns the tag.
    fn tags(tree: &Tree) -> (Walked<String>, Vec<String>) {
        let mut order = Vec::new();
        let walked = traverse(tree, &mut |node| {
            order.push(node.tag.to_string());
            Ok::<_, ()>(node.tag.to_string())
        })
        .unwrap();
        (walked, order)
    }

    #[test]
    fn test_children_before_parent() {
        let tree = build::output_statement(build::unary_expression("-", build::literal(1)));
        let (_, order) = tags(&tree);
        assert_eq!(order, vec!["Literal", "UnaryExpression", "OutputStatement"]);
    }

    #[test]
    fn test_sequence_order_and_length_preserved() {
        let tree = Tree::Seq(vec![build::identifier("a"), Tree::leaf(7), build::identifier("b")]);
        let (walked, _) = tags(&tree);
        assert_eq!(
            walked,
            Walked::Seq(vec![
                Walked::Node("Identifier".to_string()),
                Walked::Leaf(json!(7)),
                Walked::Node("Identifier".to_string()),
            ])
        );
    }

    #[test]
    fn test_leaf_returned_unchanged() {
        let leaf = Tree::leaf(json!({"start": {"line": 1}}));
        let (walked, order) = tags(&leaf);
        assert_eq!(walked, Walked::Leaf(json!({"start": {"line": 1}})));
        assert!(order.is_empty());
    }

    #[test]
    fn test_rewrite_sees_walked_fields() {
        let tree = build::assignment_statement(build::identifier("x"), build::literal(5));
        let walked = traverse(&tree, &mut |node| {
            let names: Vec<String> = node.fields.keys().cloned().collect();
            Ok::<_, ()>(names.join(","))
        })
        .unwrap();
        assert_eq!(walked, Walked::Node("left,right".to_string()));
    }

    #[test]
    fn test_first_error_stops_walk() {
        let tree = Tree::Seq(vec![build::identifier("a"), build::identifier("b")]);
        let mut visited = 0;
        let result: Result<Walked<()>, &str> = traverse(&tree, &mut |_| {
            visited += 1;
            Err("stop")
        });
        assert_eq!(result, Err("stop"));
        assert_eq!(visited, 1);
    }

    #[test]
    fn test_input_is_not_modified() {
        let tree = build::while_statement(build::literal(true), build::block_statement(vec![]));
        let before = tree.clone();
        let _ = tags(&tree);
        assert_eq!(tree, before);
    }

    #[test]
    fn test_shape_name() {
        assert_eq!(Walked::<()>::Seq(vec![]).shape_name(), "sequence");
        assert_eq!(Walked::Node(()).shape_name(), "node");
        assert_eq!(Walked::<()>::Leaf(Value::Null).shape_name(), "leaf");
    }
}
