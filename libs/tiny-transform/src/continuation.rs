//! # Continuation Expansion
//!
//! Rewrites a statement sequence so that a suspending statement owns the rest
//! of its sequence as a continuation.
//!
//! ```text
//! [a, S, b, c]  →  [a, S(function () { b; c; })]
//! ```
//!
//! The remainder is expanded recursively, so a later suspension inside it
//! nests one level deeper. Statements before the first suspension are
//! synchronous by construction and are kept as they are.
//!
//! No rewrite rule produces a [`Suspension`] yet; blocks and programs still run
//! their bodies through [`expand`], which is then the identity.

use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use js_ast::builders::{call_expression, expression_statement, function_expression};
use js_ast::{Expression, Identifier, Statement};
use stacker::maybe_grow;

// =============================================================================
// TYPES
// =============================================================================

/// One element of a statement sequence awaiting expansion.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// A statement that completes before the next one starts.
    Sync(Statement),
    /// A statement that must wait for an external event.
    Suspend(Suspension),
}

impl From<Statement> for Step {
    fn from(stmt: Statement) -> Self {
        Step::Sync(stmt)
    }
}

impl From<Suspension> for Step {
    fn from(suspension: Suspension) -> Self {
        Step::Suspend(suspension)
    }
}

/// A suspending call: `callee(arguments..., function (binding) { continuation })`.
///
/// ## Example
///
/// ```rust
/// use js_ast::builders::*;
/// use tiny_transform::continuation::Suspension;
///
/// let wait = Suspension::new(member_expression(identifier("runtime"), "readAsync"), vec![])
///     .with_binding(ident("value"));
/// let stmt = wait.resume(vec![expression_statement(identifier("value"))]);
/// assert_eq!(
///     js_ast::print(&program(vec![stmt])),
///     "runtime.readAsync(function (value) {\n  value;\n});\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Suspension {
    callee: Expression,
    arguments: Vec<Expression>,
    binding: Option<Identifier>,
    continuation: Vec<Statement>,
}

impl Suspension {
    /// A suspension with no binding and an empty continuation.
    pub fn new(callee: Expression, arguments: Vec<Expression>) -> Self {
        Self {
            callee,
            arguments,
            binding: None,
            continuation: Vec::new(),
        }
    }

    /// Names the value the external event delivers to the continuation.
    pub fn with_binding(mut self, binding: Identifier) -> Self {
        self.binding = Some(binding);
        self
    }

    /// Statements that run once the event completes.
    pub fn continuation(&self) -> &[Statement] {
        &self.continuation
    }

    /// Appends `rest` to the continuation.
    pub fn attach(mut self, rest: Vec<Statement>) -> Self {
        self.continuation.extend(rest);
        self
    }

    /// Lowers the suspension into a call taking its continuation as callback.
    pub fn into_statement(self) -> Statement {
        let callback = function_expression(self.binding.into_iter().collect(), self.continuation);
        let mut arguments = self.arguments;
        arguments.push(callback);
        expression_statement(call_expression(self.callee, arguments))
    }

    /// [`attach`](Self::attach) then [`into_statement`](Self::into_statement).
    pub fn resume(self, rest: Vec<Statement>) -> Statement {
        self.attach(rest).into_statement()
    }
}

// =============================================================================
// EXPANSION
// =============================================================================

/// Expand a sequence: the first suspension takes every later step as its
/// continuation and ends the sequence. Without a suspension this is the
/// identity.
pub fn expand(steps: Vec<Step>) -> Vec<Statement> {
    maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
        let mut steps = steps.into_iter();
        let mut out = Vec::with_capacity(steps.len());
        while let Some(step) = steps.next() {
            match step {
                Step::Sync(stmt) => out.push(stmt),
                Step::Suspend(suspension) => {
                    let rest = expand(steps.collect());
                    out.push(suspension.resume(rest));
                    break;
                }
            }
        }
        out
    })
}

// =============================================================================
// TESTS
// =============================================================================
