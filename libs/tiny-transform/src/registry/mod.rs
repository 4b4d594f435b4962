//! # Rewrite Registry
//!
//! One rewrite rule per source tag. [`rewrite`] is the dispatch: it resolves
//! the tag text to a [`Tag`] and matches on it, so adding a tag without a rule
//! does not compile.
//!
//! Every rule receives its node with all fields already rewritten and builds
//! a fresh target fragment; nothing is patched in place.
//!
//! | Tag | Result |
//! |-----|--------|
//! | `Tiny` | runtime import, declarations, expanded body |
//! | `Declaration` | `var` with one declarator per id, set to the type default |
//! | `BlockStatement` | block over the expanded body |
//! | `Identifier` | name with the namespace prefix |
//! | `ReadExpression` | `runtime.read()` |
//! | `OutputStatement` | `runtime.output(value);` |
//! | others | same structure, operators passed through |

use crate::continuation::{expand, Step};
use crate::error::TransformError;
use crate::target::{Fields, Target};
use crate::walker::Rewritten;
use config::constants::{CompilerConfig, RUNTIME_LOADER, RUNTIME_OUTPUT, RUNTIME_READ};
use js_ast::builders::*;
use js_ast::{DeclarationKind, Expression, Literal, Program, Statement};
use log::trace;
use serde_json::Value;
use tiny_ast::field::*;
use tiny_ast::{Tag, ValueType};


// =============================================================================
// DISPATCH
// =============================================================================

/// Rewrite one node whose fields have already been rewritten.
///
/// ## Errors
///
/// [`TransformError::UnknownNodeType`] when the tag is outside the closed
/// set; shape errors when a field does not hold what the rule needs.
pub fn rewrite(node: Rewritten<'_, Target>, config: &CompilerConfig) -> Result<Target, TransformError> {
    let tag: Tag = node
        .tag
        .parse()
        .map_err(|_| TransformError::UnknownNodeType(node.tag.to_string()))?;
    trace!("rewriting {tag}");

    let mut fields = Fields::new(tag, node.fields);
    match tag {
        Tag::Tiny => tiny(&mut fields, config).map(Target::Program),
        Tag::Declaration => declaration(&mut fields, config).map(Target::Statement),
        Tag::BlockStatement => {
            let body = fields.steps(BODY)?;
            Ok(Target::Statement(block_statement(expand(body))))
        }
        Tag::Identifier => {
            let name = fields.text(NAME)?;
            Ok(Target::Expression(identifier(config.prefixed(&name))))
        }
        Tag::Literal => literal_value(&mut fields).map(|lit| Target::Expression(literal(lit))),
        Tag::AssignmentStatement => {
            let left = fields.expression(LEFT)?;
            let right = fields.expression(RIGHT)?;
            Ok(Target::Statement(expression_statement(assignment_expression(
                "=", left, right,
            ))))
        }
        Tag::ReadExpression => Ok(Target::Expression(runtime_call(config, RUNTIME_READ, vec![]))),
        Tag::OutputStatement => {
            let value = fields.expression(VALUE)?;
            Ok(Target::Statement(expression_statement(runtime_call(
                config,
                RUNTIME_OUTPUT,
                vec![value],
            ))))
        }
        Tag::UnaryExpression => {
            let operator = fields.text(OPERATOR)?;
            let argument = fields.expression(ARGUMENT)?;
            Ok(Target::Expression(unary_expression(operator, argument, true)))
        }
        Tag::BinaryExpression => {
            let operator = fields.text(OPERATOR)?;
            let left = fields.expression(LEFT)?;
            let right = fields.expression(RIGHT)?;
            Ok(Target::Expression(binary_expression(operator, left, right)))
        }
        Tag::WhileStatement => {
            let test = fields.expression(TEST)?;
            let body = fields.statement(BODY)?;
            Ok(Target::Statement(while_statement(test, body)))
        }
        Tag::IfStatement => {
            let test = fields.expression(TEST)?;
            let consequent = fields.optional_statement(CONSEQUENT)?.unwrap_or_else(empty_statement);
            let alternate = fields.optional_statement(ALTERNATE)?.unwrap_or_else(empty_statement);
            Ok(Target::Statement(if_statement(test, consequent, Some(alternate))))
        }
    }
}

// =============================================================================
// RULES
// =============================================================================

fn tiny(fields: &mut Fields, config: &CompilerConfig) -> Result<Program, TransformError> {
    let declarations = fields.statements(DECLARATIONS)?;
    let body: Step = fields.step(BODY)?;

    let mut out = Vec::with_capacity(declarations.len() + 2);
    out.push(runtime_import(config));
    out.extend(declarations);
    out.extend(expand(vec![body]));
    Ok(program(out))
}

fn declaration(fields: &mut Fields, config: &CompilerConfig) -> Result<Statement, TransformError> {
    let ids = fields.identifiers(IDS)?;
    let value_type: ValueType = fields
        .text(VALUE_TYPE)?
        .parse()
        .map_err(|err: tiny_ast::UnknownValueType| TransformError::UnsupportedValueType(err.0))?;
    if ids.is_empty() {
        return Err(TransformError::EmptyDeclaration);
    }
    trace!("declaring {} {value_type} variable(s) under `{}`", ids.len(), config.identifier_prefix);

    let declarators = ids
        .into_iter()
        .map(|id| variable_declarator(id, Some(literal(default_value(value_type)))))
        .collect();
    Ok(variable_declaration(DeclarationKind::Var, declarators))
}

/// Initial value of a freshly declared variable.
fn default_value(value_type: ValueType) -> Literal {
    match value_type {
        ValueType::Integer => Literal::Integer(0),
        ValueType::Boolean => Literal::Boolean(false),
    }
}

fn literal_value(fields: &mut Fields) -> Result<Literal, TransformError> {
    Ok(match fields.scalar(VALUE)? {
        Value::Null => Literal::Null,
        Value::Bool(b) => Literal::Boolean(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Literal::Integer(i),
            None => Literal::Number(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Literal::String(s),
        // scalar() only yields the four kinds above
        Value::Array(_) | Value::Object(_) => Literal::Null,
    })
}

// =============================================================================
// RUNTIME
// =============================================================================

/// `var runtime = require("./runtime");`
fn runtime_import(config: &CompilerConfig) -> Statement {
    let load = call_expression(
        identifier(RUNTIME_LOADER),
        vec![literal(config.runtime_module.as_str())],
    );
    variable_declaration(
        DeclarationKind::Var,
        vec![variable_declarator(ident(config.runtime_binding.as_str()), Some(load))],
    )
}

/// `runtime.<method>(arguments...)`
fn runtime_call(config: &CompilerConfig, method: &str, arguments: Vec<Expression>) -> Expression {
    call_expression(
        member_expression(identifier(config.runtime_binding.as_str()), method),
        arguments,
    )
}
