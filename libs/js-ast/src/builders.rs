//! # AST Builders
//!
//! Free functions mirroring the ESTree builder API. Callers construct the
//! target tree exclusively through these.
//!
//! ## Example
//!
//! ```rust
//! use js_ast::builders::*;
//! use js_ast::Expression;
//!
//! let read = call_expression(member_expression(identifier("runtime"), "read"), vec![]);
//! assert!(matches!(read, Expression::Call { .. }));
//! ```

use crate::ast::*;

/// Program from top-level statements.
pub fn program(body: Vec<Statement>) -> Program {
    Program { body }
}

/// Identifier expression.
pub fn identifier(name: impl Into<String>) -> Expression {
    Expression::Identifier(ident(name))
}

/// Bare identifier, for declarators, properties and parameters.
pub fn ident(name: impl Into<String>) -> Identifier {
    Identifier { name: name.into() }
}

/// Literal expression.
pub fn literal(value: impl Into<Literal>) -> Expression {
    Expression::Literal(value.into())
}

/// `kind id = init, ...;`
pub fn variable_declaration(
    kind: DeclarationKind,
    declarations: Vec<VariableDeclarator>,
) -> Statement {
    Statement::VariableDeclaration(VariableDeclaration { kind, declarations })
}

/// `id = init`
pub fn variable_declarator(id: Identifier, init: Option<Expression>) -> VariableDeclarator {
    VariableDeclarator { id, init }
}

/// `callee(arguments...)`
pub fn call_expression(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        callee: Box::new(callee),
        arguments,
    }
}

/// `object.property`
pub fn member_expression(object: Expression, property: impl Into<String>) -> Expression {
    Expression::Member {
        object: Box::new(object),
        property: ident(property),
    }
}

/// `left operator right`
pub fn assignment_expression(
    operator: impl Into<String>,
    left: Expression,
    right: Expression,
) -> Expression {
    Expression::Assignment {
        operator: operator.into(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// Unary operator application.
pub fn unary_expression(operator: impl Into<String>, argument: Expression, prefix: bool) -> Expression {
    Expression::Unary {
        operator: operator.into(),
        argument: Box::new(argument),
        prefix,
    }
}

/// Binary operator application.
pub fn binary_expression(
    operator: impl Into<String>,
    left: Expression,
    right: Expression,
) -> Expression {
    Expression::Binary {
        operator: operator.into(),
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// Anonymous function expression.
pub fn function_expression(params: Vec<Identifier>, body: Vec<Statement>) -> Expression {
    Expression::Function { params, body }
}

/// Expression evaluated for effect.
pub fn expression_statement(expression: Expression) -> Statement {
    Statement::Expression(expression)
}

/// `{ body }`
pub fn block_statement(body: Vec<Statement>) -> Statement {
    Statement::Block(body)
}

/// `while (test) body`
pub fn while_statement(test: Expression, body: Statement) -> Statement {
    Statement::While {
        test,
        body: Box::new(body),
    }
}

/// `if (test) consequent [else alternate]`
pub fn if_statement(test: Expression, consequent: Statement, alternate: Option<Statement>) -> Statement {
    Statement::If {
        test,
        consequent: Box::new(consequent),
        alternate: alternate.map(Box::new),
    }
}

/// `;`
pub fn empty_statement() -> Statement {
    Statement::Empty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_property_is_identifier() {
        let member = member_expression(identifier("runtime"), "output");
        match &member {
            Expression::Member { property, .. } => assert_eq!(property.name, "output"),
            other => panic!("expected member, got {other:?}"),
        }
    }

    #[test]
    fn test_if_statement_boxes_branches() {
        let stmt = if_statement(literal(true), empty_statement(), Some(empty_statement()));
        match &stmt {
            Statement::If { alternate, .. } => assert_eq!(alternate.as_deref(), Some(&Statement::Empty)),
            other => panic!("expected if, got {other:?}"),
        }
    }
}
