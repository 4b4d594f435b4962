//! # Rewrite Targets
//!
//! What a rewrite rule produces for one source node, and typed access to the
//! already-rewritten fields a rule consumes.

use crate::continuation::{Step, Suspension};
use crate::error::TransformError;
use crate::walker::Walked;
use indexmap::IndexMap;
use js_ast::{Expression, Identifier, Program, Statement};
use serde_json::Value;
use tiny_ast::Tag;

// =============================================================================
// TARGET
// =============================================================================

/// Target-tree fragment built for one source node.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// A whole program (from `Tiny`).
    Program(Program),
    /// A statement.
    Statement(Statement),
    /// An expression.
    Expression(Expression),
    /// A suspending statement still waiting for its continuation.
    Suspend(Suspension),
}

impl Target {
    /// Short name of the fragment kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Target::Program(_) => "program",
            Target::Statement(_) => "statement",
            Target::Expression(_) => "expression",
            Target::Suspend(_) => "suspension",
        }
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// Walked fields of one node, taken out by name with shape checks.
pub(crate) struct Fields {
    tag: Tag,
    map: IndexMap<String, Walked<Target>>,
}

impl Fields {
    pub(crate) fn new(tag: Tag, map: IndexMap<String, Walked<Target>>) -> Self {
        Self { tag, map }
    }

    fn shape(&self, field: &'static str, expected: &'static str) -> TransformError {
        TransformError::UnexpectedShape {
            tag: self.tag,
            field,
            expected,
        }
    }

    fn take(&mut self, field: &'static str) -> Result<Walked<Target>, TransformError> {
        self.map
            .shift_remove(field)
            .ok_or(TransformError::MissingField { tag: self.tag, field })
    }

    /// A leaf holding a string.
    pub(crate) fn text(&mut self, field: &'static str) -> Result<String, TransformError> {
        match self.take(field)? {
            Walked::Leaf(Value::String(text)) => Ok(text),
            _ => Err(self.shape(field, "a string")),
        }
    }

    /// A scalar leaf (null, boolean, number or string).
    pub(crate) fn scalar(&mut self, field: &'static str) -> Result<Value, TransformError> {
        match self.take(field)? {
            Walked::Leaf(value @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))) => {
                Ok(value)
            }
            _ => Err(self.shape(field, "a scalar")),
        }
    }

    pub(crate) fn expression(&mut self, field: &'static str) -> Result<Expression, TransformError> {
        match self.take(field)? {
            Walked::Node(Target::Expression(expr)) => Ok(expr),
            _ => Err(self.shape(field, "an expression")),
        }
    }

    pub(crate) fn statement(&mut self, field: &'static str) -> Result<Statement, TransformError> {
        let walked = self.take(field)?;
        self.to_statement(field, walked)
    }

    /// Like [`statement`](Self::statement), but absent and null mean `None`.
    pub(crate) fn optional_statement(
        &mut self,
        field: &'static str,
    ) -> Result<Option<Statement>, TransformError> {
        match self.map.shift_remove(field) {
            None | Some(Walked::Leaf(Value::Null)) => Ok(None),
            Some(walked) => self.to_statement(field, walked).map(Some),
        }
    }

    /// A single statement position that may suspend.
    pub(crate) fn step(&mut self, field: &'static str) -> Result<Step, TransformError> {
        let walked = self.take(field)?;
        self.to_step(field, walked)
    }

    /// A sequence of statements that may suspend.
    pub(crate) fn steps(&mut self, field: &'static str) -> Result<Vec<Step>, TransformError> {
        match self.take(field)? {
            Walked::Seq(items) => items
                .into_iter()
                .map(|item| self.to_step(field, item))
                .collect(),
            _ => Err(self.shape(field, "a sequence of statements")),
        }
    }

    /// A sequence of plain statements.
    pub(crate) fn statements(&mut self, field: &'static str) -> Result<Vec<Statement>, TransformError> {
        match self.take(field)? {
            Walked::Seq(items) => items
                .into_iter()
                .map(|item| self.to_statement(field, item))
                .collect(),
            _ => Err(self.shape(field, "a sequence of statements")),
        }
    }

    /// A sequence of identifiers.
    pub(crate) fn identifiers(&mut self, field: &'static str) -> Result<Vec<Identifier>, TransformError> {
        match self.take(field)? {
            Walked::Seq(items) => items
                .into_iter()
                .map(|item| match item {
                    Walked::Node(Target::Expression(Expression::Identifier(ref id))) => Ok(id.clone()),
                    _ => Err(self.shape(field, "a sequence of identifiers")),
                })
                .collect(),
            _ => Err(self.shape(field, "a sequence of identifiers")),
        }
    }

    fn to_step(&self, field: &'static str, walked: Walked<Target>) -> Result<Step, TransformError> {
        match walked {
            Walked::Node(Target::Statement(stmt)) => Ok(Step::Sync(stmt)),
            Walked::Node(Target::Suspend(suspension)) => Ok(Step::Suspend(suspension)),
            _ => Err(self.shape(field, "a statement")),
        }
    }

    /// A suspension in a lone statement position has nothing after it, so it
    /// resumes with an empty continuation.
    fn to_statement(&self, field: &'static str, walked: Walked<Target>) -> Result<Statement, TransformError> {
        match self.to_step(field, walked)? {
            Step::Sync(stmt) => Ok(stmt),
            Step::Suspend(suspension) => Ok(suspension.resume(Vec::new())),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
