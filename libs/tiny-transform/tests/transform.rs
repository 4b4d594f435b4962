//! End-to-end transform tests: source trees in, target trees and printed
//! JavaScript out.

use js_ast::builders::*;
use js_ast::{print, DeclarationKind, Statement};
use serde_json::json;
use tiny_ast::{build, Tag, Tree, ValueType};
use tiny_transform::{transform, transform_program, Target, TransformError};

fn countdown() -> Tree {
    build::tiny(
        vec![build::declaration(vec![build::identifier("n")], ValueType::Integer)],
        build::block_statement(vec![
            build::assignment_statement(build::identifier("n"), build::read_expression()),
            build::while_statement(
                build::binary_expression(">", build::identifier("n"), build::literal(0)),
                build::block_statement(vec![
                    build::output_statement(build::identifier("n")),
                    build::assignment_statement(
                        build::identifier("n"),
                        build::binary_expression("-", build::identifier("n"), build::literal(1)),
                    ),
                ]),
            ),
        ]),
    )
}

#[test]
fn test_declare_and_assign() {
    let tree = build::tiny(
        vec![build::declaration(vec![build::identifier("x")], ValueType::Integer)],
        build::block_statement(vec![build::assignment_statement(
            build::identifier("x"),
            build::literal(1),
        )]),
    );
    let program = transform_program(&tree).unwrap();

    assert_eq!(
        program.body,
        vec![
            variable_declaration(
                DeclarationKind::Var,
                vec![variable_declarator(
                    ident("runtime"),
                    Some(call_expression(identifier("require"), vec![literal("./runtime")])),
                )],
            ),
            variable_declaration(
                DeclarationKind::Var,
                vec![variable_declarator(ident("tiny$x"), Some(literal(0)))],
            ),
            block_statement(vec![expression_statement(assignment_expression(
                "=",
                identifier("tiny$x"),
                literal(1),
            ))]),
        ]
    );
}

#[test]
fn test_countdown_prints() {
    let program = transform_program(&countdown()).unwrap();
    let expected = "\
var runtime = require(\"./runtime\");
var tiny$n = 0;
{
  tiny$n = runtime.read();
  while (tiny$n > 0) {
    runtime.output(tiny$n);
    tiny$n = tiny$n - 1;
  }
}
";
    assert_eq!(print(&program), expected);
}

#[test]
fn test_every_tag_transforms_standalone() {
    let x = || build::identifier("x");
    let cases = vec![
        (Tag::Tiny, countdown()),
        (Tag::Declaration, build::declaration(vec![x()], ValueType::Boolean)),
        (Tag::BlockStatement, build::block_statement(vec![])),
        (Tag::Identifier, x()),
        (Tag::Literal, build::literal(7)),
        (Tag::AssignmentStatement, build::assignment_statement(x(), build::literal(1))),
        (Tag::ReadExpression, build::read_expression()),
        (Tag::OutputStatement, build::output_statement(x())),
        (Tag::UnaryExpression, build::unary_expression("-", x())),
        (Tag::BinaryExpression, build::binary_expression("*", x(), x())),
        (Tag::WhileStatement, build::while_statement(x(), build::block_statement(vec![]))),
        (Tag::IfStatement, build::if_statement(x(), None, None)),
    ];
    assert_eq!(cases.len(), Tag::ALL.len());

    for (tag, tree) in cases {
        let target = transform(&tree).unwrap_or_else(|err| panic!("{tag}: {err}"));
        let expected = match tag {
            Tag::Tiny => "program",
            Tag::Identifier
            | Tag::Literal
            | Tag::ReadExpression
            | Tag::UnaryExpression
            | Tag::BinaryExpression => "expression",
            _ => "statement",
        };
        assert_eq!(target.kind_name(), expected, "{tag}");
    }
}

#[test]
fn test_unknown_node_type_fails() {
    let tree = Tree::from(json!({"type": "Bogus", "value": 1}));
    let err = transform(&tree).unwrap_err();
    assert_eq!(err, TransformError::UnknownNodeType("Bogus".to_string()));
    assert_eq!(err.to_string(), "No transformer for node type: Bogus");
}

#[test]
fn test_non_string_type_fails_as_unknown_node() {
    let tree = Tree::from(json!({"type": 7}));
    assert_eq!(
        transform(&tree),
        Err(TransformError::UnknownNodeType("7".to_string()))
    );
    let tree = build::tiny(
        vec![],
        build::block_statement(vec![Tree::from(json!({"type": null, "body": []}))]),
    );
    assert_eq!(
        transform_program(&tree),
        Err(TransformError::UnknownNodeType("null".to_string()))
    );
}

#[test]
fn test_unknown_node_deep_in_program_fails() {
    let tree = build::tiny(
        vec![],
        build::block_statement(vec![build::output_statement(Tree::from(
            json!({"type": "CallExpression"}),
        ))]),
    );
    assert_eq!(
        transform_program(&tree),
        Err(TransformError::UnknownNodeType("CallExpression".to_string()))
    );
}

#[test]
fn test_input_is_not_mutated() {
    let tree = countdown();
    let before = serde_json::to_value(&tree).unwrap();
    transform(&tree).unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), before);
}

#[test]
fn test_transform_is_repeatable() {
    let tree = countdown();
    assert_eq!(transform(&tree), transform(&tree));
}

#[test]
fn test_declaration_two_ids() {
    let tree = build::declaration(
        vec![build::identifier("a"), build::identifier("b")],
        ValueType::Integer,
    );
    let Ok(Target::Statement(stmt)) = transform(&tree) else {
        panic!("expected a statement");
    };
    let Statement::VariableDeclaration(decl) = &stmt else {
        panic!("expected a declaration, got {stmt:?}");
    };
    let names: Vec<_> = decl.declarations.iter().map(|d| d.id.name.as_str()).collect();
    assert_eq!(names, vec!["tiny$a", "tiny$b"]);
    assert!(decl
        .declarations
        .iter()
        .all(|d| d.init == Some(literal(0))));
}

#[test]
fn test_if_without_alternate_gets_empty() {
    let tree = build::if_statement(
        build::identifier("c"),
        Some(build::output_statement(build::literal(1))),
        None,
    );
    let Ok(Target::Statement(stmt)) = transform(&tree) else {
        panic!("expected a statement");
    };
    let Statement::If { alternate, .. } = &stmt else {
        panic!("expected an if statement, got {stmt:?}");
    };
    assert_eq!(alternate.as_deref(), Some(&Statement::Empty));
}

#[test]
fn test_unknown_value_type() {
    let tree = Tree::from(json!({
        "type": "Declaration",
        "ids": [{"type": "Identifier", "name": "s"}],
        "valueType": "string"
    }));
    assert_eq!(
        transform(&tree),
        Err(TransformError::UnsupportedValueType("string".to_string()))
    );
}

#[test]
fn test_program_requires_tiny_root() {
    assert_eq!(
        transform_program(&build::identifier("x")),
        Err(TransformError::UnexpectedRoot {
            expected: "program",
            found: "expression",
        })
    );
}

#[test]
fn test_sequence_root_rejected() {
    let tree = Tree::Seq(vec![build::identifier("x")]);
    assert_eq!(
        transform(&tree),
        Err(TransformError::UnexpectedRoot {
            expected: "a node",
            found: "sequence",
        })
    );
}

#[test]
fn test_location_fields_are_ignored() {
    let tree = Tree::from(json!({
        "type": "Identifier",
        "name": "x",
        "location": {"start": {"offset": 0, "line": 1, "column": 1},
                     "end": {"offset": 1, "line": 1, "column": 2}}
    }));
    assert_eq!(transform(&tree), Ok(Target::Expression(identifier("tiny$x"))));
}

const DEEP: usize = 100_000;

#[test]
fn test_deeply_nested_blocks() {
    let mut tree = build::output_statement(build::literal(1));
    for _ in 0..DEEP {
        tree = build::block_statement(vec![tree]);
    }
    let Ok(Target::Statement(stmt)) = transform(&tree) else {
        panic!("expected a statement");
    };
    let mut depth = 0;
    let mut current = &stmt;
    while let Statement::Block(body) = current {
        depth += 1;
        current = &body[0];
    }
    assert_eq!(depth, DEEP);
    assert!(matches!(current, Statement::Expression(_)));
    drop(stmt);
    drop(tree);
}

#[test]
fn test_deeply_nested_expression_prints() {
    let mut expr = build::identifier("x");
    for _ in 0..DEEP {
        expr = build::binary_expression("+", expr, build::literal(1));
    }
    let tree = build::tiny(vec![], build::block_statement(vec![build::output_statement(expr)]));
    let program = transform_program(&tree).unwrap();
    let text = print(&program);
    assert!(text.contains("runtime.output(tiny$x + 1 + 1"));
    assert_eq!(text.matches(" + 1").count(), DEEP);
    drop(program);
    drop(tree);
}

#[test]
fn test_deeply_nested_negation_prints() {
    let mut expr = build::literal(1);
    for _ in 0..DEEP {
        expr = build::unary_expression("-", expr);
    }
    let tree = build::tiny(vec![], build::block_statement(vec![build::output_statement(expr)]));
    let text = print(&transform_program(&tree).unwrap());
    assert_eq!(text.matches('-').count(), DEEP);
    drop(tree);
}
