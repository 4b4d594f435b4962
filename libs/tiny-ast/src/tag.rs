//! # Node Tags
//!
//! The closed set of source node variants and the declared value types.
//!
//! ## Usage
//!
//! ```rust
//! use tiny_ast::{Tag, ValueType};
//!
//! assert_eq!("WhileStatement".parse::<Tag>(), Ok(Tag::WhileStatement));
//! assert!("Bogus".parse::<Tag>().is_err());
//! assert_eq!("boolean".parse::<ValueType>(), Ok(ValueType::Boolean));
//! ```

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// TAG
// =============================================================================

/// Discriminator of a source node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Program root: declarations followed by a body block.
    Tiny,
    /// `integer a, b;`
    Declaration,
    /// `{ ... }`
    BlockStatement,
    /// A variable reference.
    Identifier,
    /// An integer or boolean constant.
    Literal,
    /// `x = e;`
    AssignmentStatement,
    /// `read`
    ReadExpression,
    /// `output e;`
    OutputStatement,
    /// `!e`, `-e`
    UnaryExpression,
    /// `a + b` and friends.
    BinaryExpression,
    /// `while (e) s`
    WhileStatement,
    /// `if (e) s else s`
    IfStatement,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 12] = [
        Tag::Tiny,
        Tag::Declaration,
        Tag::BlockStatement,
        Tag::Identifier,
        Tag::Literal,
        Tag::AssignmentStatement,
        Tag::ReadExpression,
        Tag::OutputStatement,
        Tag::UnaryExpression,
        Tag::BinaryExpression,
        Tag::WhileStatement,
        Tag::IfStatement,
    ];

    /// Tag text as it appears in the `"type"` member.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tiny => "Tiny",
            Self::Declaration => "Declaration",
            Self::BlockStatement => "BlockStatement",
            Self::Identifier => "Identifier",
            Self::Literal => "Literal",
            Self::AssignmentStatement => "AssignmentStatement",
            Self::ReadExpression => "ReadExpression",
            Self::OutputStatement => "OutputStatement",
            Self::UnaryExpression => "UnaryExpression",
            Self::BinaryExpression => "BinaryExpression",
            Self::WhileStatement => "WhileStatement",
            Self::IfStatement => "IfStatement",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// A tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node type: {0}")]
pub struct UnknownTag(pub String);

// =============================================================================
// VALUE TYPE
// =============================================================================

/// Type named by a `Declaration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `integer`, defaults to `0`.
    Integer,
    /// `boolean`, defaults to `false`.
    Boolean,
}

impl ValueType {
    /// Type name as written in source and in the JSON form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = UnknownValueType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "integer" => Ok(Self::Integer),
            "boolean" => Ok(Self::Boolean),
            other => Err(UnknownValueType(other.to_string())),
        }
    }
}

/// A declared type other than `integer` or `boolean`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value type: {0}")]
pub struct UnknownValueType(pub String);

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip_all() {
        for tag in Tag::ALL {
            assert_eq!(tag.as_str().parse::<Tag>(), Ok(tag));
        }
    }

    #[test]
    fn test_tag_is_case_sensitive() {
        assert_eq!(
            "identifier".parse::<Tag>(),
            Err(UnknownTag("identifier".to_string()))
        );
    }

    #[test]
    fn test_unknown_tag_display() {
        let err = "Bogus".parse::<Tag>().unwrap_err();
        assert_eq!(err.to_string(), "unknown node type: Bogus");
    }

    #[test]
    fn test_value_type_parse() {
        assert_eq!("integer".parse::<ValueType>(), Ok(ValueType::Integer));
        assert_eq!("boolean".parse::<ValueType>(), Ok(ValueType::Boolean));
        assert!("string".parse::<ValueType>().is_err());
    }
}
