//! Field names of the source tree, shared by builders, parser and transform.
//!
//! The names follow the JSON form external parsers emit.

/// Top-level declarations of a `Tiny` program.
pub const DECLARATIONS: &str = "declarations";
/// Body of a program, block or loop.
pub const BODY: &str = "body";
/// Identifiers introduced by a `Declaration`.
pub const IDS: &str = "ids";
/// Declared type of a `Declaration`.
pub const VALUE_TYPE: &str = "valueType";
/// Name of an `Identifier`.
pub const NAME: &str = "name";
/// Scalar of a `Literal`, or the operand of an `OutputStatement`.
pub const VALUE: &str = "value";
/// Left operand or assignment target.
pub const LEFT: &str = "left";
/// Right operand or assigned value.
pub const RIGHT: &str = "right";
/// Operator token of a unary or binary expression.
pub const OPERATOR: &str = "operator";
/// Operand of a `UnaryExpression`.
pub const ARGUMENT: &str = "argument";
/// Condition of a loop or conditional.
pub const TEST: &str = "test";
/// Then-branch of an `IfStatement`.
pub const CONSEQUENT: &str = "consequent";
/// Else-branch of an `IfStatement`.
pub const ALTERNATE: &str = "alternate";
/// Optional source location metadata.
pub const LOCATION: &str = "location";
