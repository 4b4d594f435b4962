//! # Target AST Types
//!
//! ESTree-shaped nodes for the generated program. Only the node kinds the Tiny
//! compiler emits are modelled.

// =============================================================================
// PROGRAM
// =============================================================================

/// A complete generated program.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in execution order.
    pub body: Vec<Statement>,
}

// =============================================================================
// STATEMENTS
// =============================================================================

/// Statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var a = 0, b = 0;`
    VariableDeclaration(VariableDeclaration),
    /// An expression evaluated for effect.
    Expression(Expression),
    /// `{ ... }`
    Block(Vec<Statement>),
    /// `while (test) body`
    While {
        /// Loop condition.
        test: Expression,
        /// Loop body.
        body: Box<Statement>,
    },
    /// `if (test) consequent else alternate`
    If {
        /// Condition.
        test: Expression,
        /// Then-branch.
        consequent: Box<Statement>,
        /// Else-branch.
        alternate: Option<Box<Statement>>,
    },
    /// `;`
    Empty,
}

/// Declaration keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    /// `var`
    Var,
    /// `let`
    Let,
    /// `const`
    Const,
}

impl DeclarationKind {
    /// Keyword text.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

/// `var` statement with one or more declarators.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    /// Declaration keyword.
    pub kind: DeclarationKind,
    /// Declared bindings.
    pub declarations: Vec<VariableDeclarator>,
}

/// A single `name = init` binding.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    /// Bound name.
    pub id: Identifier,
    /// Initial value, if any.
    pub init: Option<Expression>,
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// A name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Identifier text.
    pub name: String,
}

/// Literal constant.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean(bool),
    /// Integral number.
    Integer(i64),
    /// Any other number.
    Number(f64),
    /// Double-quoted string.
    String(String),
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Integer(i64::from(n))
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Integer(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A name reference.
    Identifier(Identifier),
    /// A constant.
    Literal(Literal),
    /// `callee(arguments...)`
    Call {
        /// Called expression.
        callee: Box<Expression>,
        /// Arguments in order.
        arguments: Vec<Expression>,
    },
    /// `object.property`
    Member {
        /// Accessed object.
        object: Box<Expression>,
        /// Property name.
        property: Identifier,
    },
    /// `left op right`, e.g. `x = 1`
    Assignment {
        /// Assignment operator token.
        operator: String,
        /// Target.
        left: Box<Expression>,
        /// Assigned value.
        right: Box<Expression>,
    },
    /// `op argument` (or `argument op` when not prefix).
    Unary {
        /// Operator token.
        operator: String,
        /// Operand.
        argument: Box<Expression>,
        /// Whether the operator precedes its operand.
        prefix: bool,
    },
    /// `left op right`
    Binary {
        /// Operator token.
        operator: String,
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
    },
    /// `function (params) { body }`
    Function {
        /// Parameter names.
        params: Vec<Identifier>,
        /// Function body.
        body: Vec<Statement>,
    },
}

// =============================================================================
// DROP
// =============================================================================

// Dropping a statement or expression empties its children into a heap
// worklist instead of letting each box drop the next one.

enum Detached {
    Statement(Statement),
    Expression(Expression),
}

fn detach_statement(stmt: &mut Statement, pending: &mut Vec<Detached>) {
    match stmt {
        Statement::VariableDeclaration(decl) => pending.extend(
            decl.declarations
                .iter_mut()
                .filter_map(|d| d.init.take())
                .map(Detached::Expression),
        ),
        Statement::Expression(expr) => take_expression(expr, pending),
        Statement::Block(body) => pending.extend(body.drain(..).map(Detached::Statement)),
        Statement::While { test, body } => {
            take_expression(test, pending);
            take_statement(body, pending);
        }
        Statement::If {
            test,
            consequent,
            alternate,
        } => {
            take_expression(test, pending);
            take_statement(consequent, pending);
            if let Some(alternate) = alternate {
                take_statement(alternate, pending);
            }
        }
        Statement::Empty => {}
    }
}

fn detach_expression(expr: &mut Expression, pending: &mut Vec<Detached>) {
    match expr {
        Expression::Identifier(_) | Expression::Literal(_) => {}
        Expression::Call { callee, arguments } => {
            take_expression(callee, pending);
            pending.extend(arguments.drain(..).map(Detached::Expression));
        }
        Expression::Member { object, .. } => take_expression(object, pending),
        Expression::Assignment { left, right, .. } | Expression::Binary { left, right, .. } => {
            take_expression(left, pending);
            take_expression(right, pending);
        }
        Expression::Unary { argument, .. } => take_expression(argument, pending),
        Expression::Function { body, .. } => {
            pending.extend(body.drain(..).map(Detached::Statement))
        }
    }
}

fn take_statement(slot: &mut Statement, pending: &mut Vec<Detached>) {
    if !matches!(slot, Statement::Empty) {
        pending.push(Detached::Statement(std::mem::replace(slot, Statement::Empty)));
    }
}

fn take_expression(slot: &mut Expression, pending: &mut Vec<Detached>) {
    if !matches!(slot, Expression::Identifier(_) | Expression::Literal(_)) {
        let leaf = Expression::Literal(Literal::Null);
        pending.push(Detached::Expression(std::mem::replace(slot, leaf)));
    }
}

fn drain(mut pending: Vec<Detached>) {
    while let Some(item) = pending.pop() {
        match item {
            Detached::Statement(mut stmt) => detach_statement(&mut stmt, &mut pending),
            Detached::Expression(mut expr) => detach_expression(&mut expr, &mut pending),
        }
    }
}

impl Drop for Statement {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_statement(self, &mut pending);
        if !pending.is_empty() {
            drain(pending);
        }
    }
}

impl Drop for Expression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_expression(self, &mut pending);
        if !pending.is_empty() {
            drain(pending);
        }
    }
}
