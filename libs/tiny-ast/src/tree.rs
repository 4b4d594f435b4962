//! # Source Tree
//!
//! A heterogeneous tree with three explicit shapes: ordered sequences, tagged
//! nodes and leaves. Leaves are anything without a tag (scalars, null, and
//! untagged objects such as location metadata) and are never looked into.
//!
//! ## JSON Form
//!
//! ```text
//! [ ... ]                         → Tree::Seq
//! { "type": "Identifier", ... }   → Tree::Node
//! 1, "+", null, { "line": 1 }     → Tree::Leaf
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tiny_ast::Tree;
//!
//! let tree: Tree = serde_json::from_str(r#"{"type": "Identifier", "name": "x"}"#).unwrap();
//! let node = tree.as_node().unwrap();
//! assert_eq!(node.tag(), "Identifier");
//! assert_eq!(node.field("name").and_then(|t| t.as_str()), Some("x"));
//! ```

use crate::tag::Tag;
use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stacker::maybe_grow;

/// JSON member holding a node's tag.
pub const TAG_KEY: &str = "type";

// =============================================================================
// TREE
// =============================================================================

/// A source tree value.
///
/// Conversion, cloning, comparison, counting and serialization recurse through
/// `maybe_grow`, and dropping a [`Node`] is iterative, so trees nested far
/// deeper than the native stack allows are still handled.
#[derive(Debug, Deserialize)]
#[serde(from = "Value")]
pub enum Tree {
    /// Ordered sequence; order is execution order for statement lists.
    Seq(Vec<Tree>),
    /// A tagged node.
    Node(Node),
    /// An atomic value.
    Leaf(Value),
}

impl Tree {
    /// Wraps a JSON value as a leaf without interpreting it.
    ///
    /// ```rust
    /// use tiny_ast::Tree;
    /// let leaf = Tree::leaf(serde_json::json!({"type": "NotANode"}));
    /// assert!(leaf.as_node().is_none());
    /// ```
    pub fn leaf(value: impl Into<Value>) -> Self {
        Tree::Leaf(value.into())
    }

    /// The null leaf, used for absent optional children.
    pub fn null() -> Self {
        Tree::Leaf(Value::Null)
    }

    /// Returns the node if this is a tagged node.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Tree::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence.
    pub fn as_seq(&self) -> Option<&[Tree]> {
        match self {
            Tree::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the text of a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tree::Leaf(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns true for the null leaf.
    pub fn is_null(&self) -> bool {
        matches!(self, Tree::Leaf(Value::Null))
    }

    /// Number of tagged nodes in the tree, including this one.
    ///
    /// ```rust
    /// use tiny_ast::build;
    /// let sum = build::binary_expression("+", build::literal(1), build::literal(2));
    /// assert_eq!(sum.node_count(), 3);
    /// ```
    pub fn node_count(&self) -> usize {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Tree::Seq(items) => items.iter().map(Tree::node_count).sum(),
            Tree::Node(node) => 1 + node.fields.values().map(Tree::node_count).sum::<usize>(),
            Tree::Leaf(_) => 0,
        })
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Tree::Seq(items) => Tree::Seq(items.clone()),
            Tree::Node(node) => Tree::Node(node.clone()),
            Tree::Leaf(value) => Tree::Leaf(value.clone()),
        })
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match (self, other) {
            (Tree::Seq(a), Tree::Seq(b)) => a == b,
            (Tree::Node(a), Tree::Node(b)) => a == b,
            (Tree::Leaf(a), Tree::Leaf(b)) => a == b,
            _ => false,
        })
    }
}

impl Serialize for Tree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match self {
            Tree::Seq(items) => serializer.collect_seq(items),
            Tree::Node(node) => node.serialize(serializer),
            Tree::Leaf(value) => value.serialize(serializer),
        })
    }
}

/// Any object with a `type` member is a node, whatever the member holds.
impl From<Value> for Tree {
    fn from(value: Value) -> Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match value {
            Value::Array(items) => Tree::Seq(items.into_iter().map(Tree::from).collect()),
            Value::Object(map) if map.contains_key(TAG_KEY) => Tree::Node(Node::from_object(map)),
            other => Tree::Leaf(other),
        })
    }
}

impl From<Tree> for Value {
    fn from(tree: Tree) -> Self {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || match tree {
            Tree::Seq(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Tree::Node(node) => Value::Object(node.into_object()),
            Tree::Leaf(value) => value,
        })
    }
}

impl From<Node> for Tree {
    fn from(node: Node) -> Self {
        Tree::Node(node)
    }
}

impl From<Vec<Tree>> for Tree {
    fn from(items: Vec<Tree>) -> Self {
        Tree::Seq(items)
    }
}

impl From<&str> for Tree {
    fn from(text: &str) -> Self {
        Tree::leaf(text)
    }
}

impl From<String> for Tree {
    fn from(text: String) -> Self {
        Tree::leaf(text)
    }
}

impl From<i64> for Tree {
    fn from(n: i64) -> Self {
        Tree::leaf(n)
    }
}

impl From<bool> for Tree {
    fn from(b: bool) -> Self {
        Tree::leaf(b)
    }
}

impl From<Option<Tree>> for Tree {
    fn from(tree: Option<Tree>) -> Self {
        tree.unwrap_or_else(Tree::null)
    }
}

// =============================================================================
// NODE
// =============================================================================

/// A tagged node: a tag plus named fields in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    tag: String,
    fields: IndexMap<String, Tree>,
}

impl Node {
    /// Creates a node with an arbitrary tag and no fields.
    ///
    /// Tags outside [`Tag`] are allowed here; the transform rejects them.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            fields: IndexMap::new(),
        }
    }

    /// Creates a node for a known tag.
    pub fn of(tag: Tag) -> Self {
        Self::new(tag.as_str())
    }

    /// Builder: adds or replaces a field.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Tree>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The raw tag text.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The tag, if it belongs to the closed set.
    pub fn kind(&self) -> Option<Tag> {
        self.tag.parse().ok()
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&Tree> {
        self.fields.get(name)
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// A `type` member that is not a string keeps its JSON text as the tag,
    /// so `{"type": 7}` is a node tagged `7`.
    fn from_object(map: Map<String, Value>) -> Self {
        let mut tag = String::new();
        let mut fields = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            if key == TAG_KEY {
                tag = match value {
                    Value::String(text) => text,
                    other => other.to_string(),
                };
            } else {
                fields.insert(key, Tree::from(value));
            }
        }
        Self { tag, fields }
    }

    fn into_object(mut self) -> Map<String, Value> {
        let fields = std::mem::take(&mut self.fields);
        let mut map = Map::with_capacity(fields.len() + 1);
        map.insert(TAG_KEY.to_string(), Value::String(std::mem::take(&mut self.tag)));
        for (key, value) in fields {
            map.insert(key, Value::from(value));
        }
        map
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(TAG_KEY, &self.tag)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// Children are moved onto a heap worklist and emptied one at a time, so
// dropping a deep tree never nests drop calls.
impl Drop for Node {
    fn drop(&mut self) {
        if self.fields.is_empty() {
            return;
        }
        let mut pending: Vec<Tree> = std::mem::take(&mut self.fields).into_values().collect();
        while let Some(tree) = pending.pop() {
            match tree {
                Tree::Seq(items) => pending.extend(items),
                Tree::Node(mut node) => pending.extend(std::mem::take(&mut node.fields).into_values()),
                Tree::Leaf(_) => {}
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_array_is_sequence() {
        let tree = Tree::from(json!([1, 2]));
        assert_eq!(tree, Tree::Seq(vec![Tree::leaf(1), Tree::leaf(2)]));
    }

    #[test]
    fn test_tagged_object_is_node() {
        let tree = Tree::from(json!({"type": "Literal", "value": 3}));
        let node = tree.as_node().unwrap();
        assert_eq!(node.kind(), Some(Tag::Literal));
        assert_eq!(node.field("value"), Some(&Tree::leaf(3)));
        assert_eq!(node.field_count(), 1);
    }

    #[test]
    fn test_untagged_object_is_leaf() {
        let tree = Tree::from(json!({"line": 1, "column": 2}));
        assert!(matches!(tree, Tree::Leaf(Value::Object(_))));
    }

    #[test]
    fn test_non_string_type_is_node() {
        let tree = Tree::from(json!({"type": 7, "name": "x"}));
        let node = tree.as_node().unwrap();
        assert_eq!(node.tag(), "7");
        assert_eq!(node.kind(), None);
        assert_eq!(node.field_count(), 1);
    }

    #[test]
    fn test_unknown_tag_is_kept() {
        let tree = Tree::from(json!({"type": "Bogus"}));
        let node = tree.as_node().unwrap();
        assert_eq!(node.tag(), "Bogus");
        assert_eq!(node.kind(), None);
    }

    #[test]
    fn test_node_to_json_puts_type_first() {
        let node = Node::of(Tag::Identifier).with("name", "x");
        let value = Value::from(Tree::from(node));
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["type", "name"]);
    }

    #[test]
    fn test_with_replaces_field() {
        let node = Node::of(Tag::Identifier).with("name", "x").with("name", "y");
        assert_eq!(node.field("name").and_then(Tree::as_str), Some("y"));
        assert_eq!(node.field_count(), 1);
    }

    #[test]
    fn test_option_none_is_null() {
        assert!(Tree::from(None::<Tree>).is_null());
    }

    fn nested(depth: usize) -> Tree {
        let mut tree = Tree::null();
        for _ in 0..depth {
            tree = Node::new("BlockStatement").with("body", vec![tree]).into();
        }
        tree
    }

    #[test]
    fn test_deep_tree_counts_clones_and_drops() {
        let tree = nested(100_000);
        assert_eq!(tree.node_count(), 100_000);
        let copy = tree.clone();
        assert_eq!(copy, tree);
        drop(copy);
        drop(tree);
    }

    #[test]
    fn test_deep_tree_serializes() {
        let tree = nested(100_000);
        let mut out = Vec::new();
        serde_json::to_writer(&mut out, &tree).unwrap();
        assert!(out.starts_with(br#"{"type":"BlockStatement","body":[{"#));
        assert_eq!(out.iter().filter(|&&b| b == b'[').count(), 100_000);
    }

    #[test]
    fn test_deep_tree_value_conversions() {
        let value = Value::from(nested(100_000));
        let tree = Tree::from(value);
        assert_eq!(tree.node_count(), 100_000);
    }
}
