//! # Printer
//!
//! Turns a [`Program`] into JavaScript source text.
//!
//! ## Layout
//!
//! - One statement per line, blocks indented by the configured width
//! - Clause bodies that are blocks open on the same line (`while (x) {`)
//! - Parentheses only where operator precedence requires them; operators the
//!   printer does not know are always parenthesised
//!
//! ## Example
//!
//! ```rust
//! use js_ast::builders::*;
//! use js_ast::print;
//!
//! let sum = binary_expression("*", binary_expression("+", identifier("a"), identifier("b")), literal(2));
//! let program = program(vec![expression_statement(sum)]);
//! assert_eq!(print(&program), "(a + b) * 2;\n");
//! ```

use crate::ast::*;
use config::constants::{INDENT_WIDTH, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use stacker::maybe_grow;
use std::fmt::Write;

// =============================================================================
// PRECEDENCE
// =============================================================================

const ASSIGNMENT: u8 = 3;
const UNARY: u8 = 15;
const POSTFIX: u8 = 16;
const CALL: u8 = 18;
const PRIMARY: u8 = 20;

/// Operands of an unrecognised operator are parenthesised unless primary.
const ALWAYS_PAREN: u8 = PRIMARY;

/// Binding power of a binary operator, if the printer knows it.
fn binary_precedence(operator: &str) -> Option<u8> {
    let prec = match operator {
        "||" | "??" => 4,
        "&&" => 5,
        "|" => 6,
        "^" => 7,
        "&" => 8,
        "==" | "!=" | "===" | "!==" => 9,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 10,
        "<<" | ">>" | ">>>" => 11,
        "+" | "-" => 12,
        "*" | "/" | "%" => 13,
        "**" => 14,
        _ => return None,
    };
    Some(prec)
}

fn precedence(expr: &Expression) -> u8 {
    match expr {
        Expression::Identifier(_) | Expression::Literal(_) | Expression::Function { .. } => PRIMARY,
        Expression::Call { .. } | Expression::Member { .. } => CALL,
        Expression::Unary { prefix: true, .. } => UNARY,
        Expression::Unary { prefix: false, .. } => POSTFIX,
        Expression::Binary { operator, .. } => binary_precedence(operator).unwrap_or(ASSIGNMENT),
        Expression::Assignment { .. } => ASSIGNMENT,
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Print a program with the default indentation.
pub fn print(program: &Program) -> String {
    Printer::new(INDENT_WIDTH).print_program(program)
}

/// Stateful source printer.
///
/// ## Example
///
/// ```rust
/// use js_ast::{builders::*, Printer};
///
/// let program = program(vec![block_statement(vec![empty_statement()])]);
/// assert_eq!(Printer::new(4).print_program(&program), "{\n    ;\n}\n");
/// ```
#[derive(Debug)]
pub struct Printer {
    /// Spaces per level.
    indent_width: usize,
    /// Current nesting level.
    level: usize,
    /// Output buffer.
    out: String,
}

impl Printer {
    /// Create a printer with `indent_width` spaces per level.
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_width,
            level: 0,
            out: String::new(),
        }
    }

    /// Print a whole program, consuming the printer.
    pub fn print_program(mut self, program: &Program) -> String {
        for stmt in &program.body {
            self.statement(stmt);
        }
        self.out
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    fn indent(&mut self) {
        let width = self.level * self.indent_width;
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    fn statement(&mut self, stmt: &Statement) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.statement_inner(stmt)
        })
    }

    fn statement_inner(&mut self, stmt: &Statement) {
        self.indent();
        match stmt {
            Statement::VariableDeclaration(decl) => {
                self.out.push_str(decl.kind.as_str());
                self.out.push(' ');
                for (i, declarator) in decl.declarations.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(&declarator.id.name);
                    if let Some(init) = &declarator.init {
                        self.out.push_str(" = ");
                        self.expression(init, ASSIGNMENT);
                    }
                }
                self.out.push_str(";\n");
            }
            Statement::Expression(expr) => {
                let mark = self.out.len();
                self.expression(expr, 0);
                // A leading `function` or `{` would be read as a declaration or block.
                if self.out[mark..].starts_with("function") || self.out[mark..].starts_with('{') {
                    self.out.insert(mark, '(');
                    self.out.push(')');
                }
                self.out.push_str(";\n");
            }
            Statement::Block(body) => {
                self.block(body);
                self.out.push('\n');
            }
            Statement::While { test, body } => {
                self.out.push_str("while (");
                self.expression(test, 0);
                self.out.push(')');
                if self.clause(body) {
                    self.out.push('\n');
                }
            }
            Statement::If {
                test,
                consequent,
                alternate,
            } => {
                self.out.push_str("if (");
                self.expression(test, 0);
                self.out.push(')');
                let inline = self.clause(consequent);
                match alternate {
                    None => {
                        if inline {
                            self.out.push('\n');
                        }
                    }
                    Some(alternate) => {
                        if inline {
                            self.out.push_str(" else");
                        } else {
                            self.indent();
                            self.out.push_str("else");
                        }
                        if self.clause(alternate) {
                            self.out.push('\n');
                        }
                    }
                }
            }
            Statement::Empty => self.out.push_str(";\n"),
        }
    }

    /// `{`, nested statements, `}` without a trailing newline.
    fn block(&mut self, body: &[Statement]) {
        self.out.push_str("{\n");
        self.level += 1;
        for stmt in body {
            self.statement(stmt);
        }
        self.level -= 1;
        self.indent();
        self.out.push('}');
    }

    /// Body of `while`/`if`/`else`. Returns true when the output ended on
    /// the clause's own line.
    fn clause(&mut self, body: &Statement) -> bool {
        match body {
            Statement::Block(stmts) => {
                self.out.push(' ');
                self.block(stmts);
                true
            }
            Statement::Empty => {
                self.out.push(';');
                true
            }
            other => {
                self.out.push('\n');
                self.level += 1;
                self.statement(other);
                self.level -= 1;
                false
            }
        }
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    /// Print `expr`, parenthesised when it binds looser than `min`.
    fn expression(&mut self, expr: &Expression, min: u8) {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            let paren = precedence(expr) < min;
            if paren {
                self.out.push('(');
            }
            self.expression_inner(expr);
            if paren {
                self.out.push(')');
            }
        })
    }

    fn expression_inner(&mut self, expr: &Expression) {
        match expr {
            Expression::Identifier(id) => self.out.push_str(&id.name),
            Expression::Literal(lit) => self.literal(lit),
            Expression::Call { callee, arguments } => {
                self.expression(callee, CALL);
                self.out.push('(');
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expression(arg, ASSIGNMENT);
                }
                self.out.push(')');
            }
            Expression::Member { object, property } => {
                // `1.x` would lex as a number
                if let Expression::Literal(Literal::Integer(_) | Literal::Number(_)) = **object {
                    self.out.push('(');
                    self.expression(object, CALL);
                    self.out.push(')');
                } else {
                    self.expression(object, CALL);
                }
                self.out.push('.');
                self.out.push_str(&property.name);
            }
            Expression::Assignment {
                operator,
                left,
                right,
            } => {
                self.expression(left, CALL);
                let _ = write!(self.out, " {} ", operator);
                self.expression(right, ASSIGNMENT);
            }
            Expression::Unary {
                operator,
                argument,
                prefix,
            } => self.unary(operator, argument, *prefix),
            Expression::Binary {
                operator,
                left,
                right,
            } => {
                let (left_min, right_min) = match binary_precedence(operator) {
                    Some(prec) if operator == "**" => (POSTFIX, prec),
                    Some(prec) => (prec, prec + 1),
                    None => (ALWAYS_PAREN, ALWAYS_PAREN),
                };
                self.expression(left, left_min);
                let _ = write!(self.out, " {} ", operator);
                self.expression(right, right_min);
            }
            Expression::Function { params, body } => {
                self.out.push_str("function (");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.out.push_str(&param.name);
                }
                self.out.push_str(") ");
                self.block(body);
            }
        }
    }

    fn unary(&mut self, operator: &str, argument: &Expression, prefix: bool) {
        if !prefix {
            self.expression(argument, POSTFIX);
            self.out.push_str(operator);
            return;
        }
        self.out.push_str(operator);
        let mark = self.out.len();
        self.expression(argument, UNARY);
        let text = &self.out[mark..];
        let word = operator.chars().last().is_some_and(char::is_alphabetic);
        // `- -x` must not collapse into `--x`
        let clash = matches!(operator, "-" | "+")
            && (text.starts_with('-') || text.starts_with('+'));
        if clash {
            self.out.insert(mark, '(');
            self.out.push(')');
        } else if word {
            self.out.insert(mark, ' ');
        }
    }

    fn literal(&mut self, lit: &Literal) {
        match lit {
            Literal::Null => self.out.push_str("null"),
            Literal::Boolean(b) => {
                let _ = write!(self.out, "{}", b);
            }
            Literal::Integer(n) => {
                let _ = write!(self.out, "{}", n);
            }
            Literal::Number(n) => self.out.push_str(&format_number(*n)),
            Literal::String(s) => quote_into(&mut self.out, s),
        }
    }
}

// =============================================================================
// LITERAL FORMATTING
// =============================================================================

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

fn quote_into(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' | '\u{2029}' => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

// =============================================================================
// TESTS
// =============================================================================
