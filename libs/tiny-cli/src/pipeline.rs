//! # Compile Pipeline
//!
//! Source text or a JSON source tree in, JavaScript text out.

use anyhow::{Context, Result};
use config::constants::{CompilerConfig, INDENT_WIDTH};
use js_ast::Printer;
use log::info;
use tiny_ast::Tree;
use tiny_parser::ParseOptions;

/// Parse Tiny text and render the tree as pretty JSON.
pub fn parse_to_json(source: &str, options: ParseOptions) -> Result<String> {
    let tree = tiny_parser::parse(source, options)?;
    let mut json = serde_json::to_string_pretty(&tree)?;
    json.push('\n');
    Ok(json)
}

/// Compile Tiny text to JavaScript.
///
/// Syntax errors come back unwrapped, so they print as
/// `Syntax error on line L, column C: ...`.
pub fn compile_source(source: &str, config: &CompilerConfig) -> Result<String> {
    let tree = tiny_parser::parse(source, ParseOptions::default())?;
    compile_tree(&tree, config)
}

/// Compile a JSON source tree, as produced by `tinyc parse`, to JavaScript.
pub fn compile_json(json: &str, config: &CompilerConfig) -> Result<String> {
    let tree: Tree = serde_json::from_str(json).context("input is not a JSON syntax tree")?;
    compile_tree(&tree, config)
}

/// Transform and print an already parsed tree.
pub fn compile_tree(tree: &Tree, config: &CompilerConfig) -> Result<String> {
    let program = tiny_transform::transform_program_with(tree, config)?;
    info!("compiled {} top-level statement(s)", program.body.len());
    Ok(Printer::new(INDENT_WIDTH).print_program(&program))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = "integer x; { x = read; output x * 2; }";

    #[test]
    fn test_compile_source() {
        let js = compile_source(PROGRAM, &CompilerConfig::default()).unwrap();
        assert_eq!(
            js,
            "var runtime = require(\"./runtime\");\n\
             var tiny$x = 0;\n\
             {\n  tiny$x = runtime.read();\n  runtime.output(tiny$x * 2);\n}\n"
        );
    }

    #[test]
    fn test_json_path_matches_text_path() {
        let config = CompilerConfig::default();
        let json = parse_to_json(PROGRAM, ParseOptions { location: true }).unwrap();
        assert_eq!(
            compile_json(&json, &config).unwrap(),
            compile_source(PROGRAM, &config).unwrap()
        );
    }

    #[test]
    fn test_custom_prefix() {
        let config = CompilerConfig::new("v_", "runtime", "./runtime").unwrap();
        let js = compile_source("integer n; { }", &config).unwrap();
        assert!(js.contains("var v_n = 0;"));
    }

    #[test]
    fn test_syntax_error_message() {
        let err = compile_source("{ output ; }", &CompilerConfig::default()).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "Syntax error on line 1, column 10: unexpected token ';', expected expression"
        );
    }

    #[test]
    fn test_unknown_node_message() {
        let err = compile_json(r#"{"type": "Bogus"}"#, &CompilerConfig::default()).unwrap_err();
        assert_eq!(format!("{err:#}"), "No transformer for node type: Bogus");
    }

    #[test]
    fn test_bad_json() {
        let err = compile_json("{ not json", &CompilerConfig::default()).unwrap_err();
        assert!(err.to_string().contains("not a JSON syntax tree"));
    }
}
