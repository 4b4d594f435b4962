//! # Transform Errors
//!
//! Error types for the tree rewrite.

use thiserror::Error;
use tiny_ast::Tag;

/// Errors that abort a transform.
///
/// Any error discards the whole tree; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A node's tag has no rewrite rule.
    #[error("No transformer for node type: {0}")]
    UnknownNodeType(String),

    /// A required field is absent.
    #[error("{tag} is missing field `{field}`")]
    MissingField {
        /// Tag of the node being rewritten.
        tag: Tag,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A field holds the wrong kind of value.
    #[error("{tag}.{field} must be {expected}")]
    UnexpectedShape {
        /// Tag of the node being rewritten.
        tag: Tag,
        /// Name of the offending field.
        field: &'static str,
        /// What the rule needed.
        expected: &'static str,
    },

    /// A declaration names a type with no default value.
    #[error("unsupported value type `{0}`, expected integer or boolean")]
    UnsupportedValueType(String),

    /// A declaration with an empty `ids` list.
    #[error("declaration lists no identifiers")]
    EmptyDeclaration,

    /// The root of the input does not produce the requested target.
    #[error("expected {expected} at the root, found {found}")]
    UnexpectedRoot {
        /// Requested root kind.
        expected: &'static str,
        /// Kind actually produced.
        found: &'static str,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_node_type_display() {
        let err = TransformError::UnknownNodeType("Bogus".to_string());
        assert_eq!(err.to_string(), "No transformer for node type: Bogus");
    }

    #[test]
    fn test_shape_error_names_field() {
        let err = TransformError::UnexpectedShape {
            tag: Tag::Identifier,
            field: "name",
            expected: "a string",
        };
        assert_eq!(err.to_string(), "Identifier.name must be a string");
    }
}
