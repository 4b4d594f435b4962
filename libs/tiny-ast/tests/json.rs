use serde_json::json;
use tiny_ast::{build, Tag, Tree, ValueType};

fn sample() -> Tree {
    build::tiny(
        vec![build::declaration(vec![build::identifier("x")], ValueType::Integer)],
        build::block_statement(vec![
            build::assignment_statement(build::identifier("x"), build::read_expression()),
            build::if_statement(
                build::binary_expression(">", build::identifier("x"), build::literal(0)),
                Some(build::output_statement(build::identifier("x"))),
                None,
            ),
        ]),
    )
}

#[test]
fn json_roundtrip_preserves_tree() {
    let tree = sample();
    let text = serde_json::to_string(&tree).unwrap();
    let back: Tree = serde_json::from_str(&text).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn json_matches_external_parser_shape() {
    let value = serde_json::to_value(build::declaration(
        vec![build::identifier("a")],
        ValueType::Boolean,
    ))
    .unwrap();
    assert_eq!(
        value,
        json!({
            "type": "Declaration",
            "ids": [{"type": "Identifier", "name": "a"}],
            "valueType": "boolean"
        })
    );
}

#[test]
fn location_metadata_stays_a_leaf() {
    let text = r#"{
        "type": "Identifier",
        "name": "x",
        "location": {"start": {"offset": 0, "line": 1, "column": 1},
                     "end": {"offset": 1, "line": 1, "column": 2}}
    }"#;
    let tree: Tree = serde_json::from_str(text).unwrap();
    let node = tree.as_node().unwrap();
    assert_eq!(node.kind(), Some(Tag::Identifier));
    assert!(matches!(node.field("location"), Some(Tree::Leaf(_))));
}

#[test]
fn every_builder_yields_known_tag() {
    let tree = sample();
    fn check(tree: &Tree) {
        match tree {
            Tree::Seq(items) => items.iter().for_each(check),
            Tree::Node(node) => {
                assert!(node.kind().is_some(), "unknown tag {}", node.tag());
                node.fields().for_each(|(_, child)| check(child));
            }
            Tree::Leaf(_) => {}
        }
    }
    check(&tree);
    assert_eq!(tree.node_count(), 13);
}
