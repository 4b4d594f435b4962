//! # Tiny CLI
//!
//! Library half of the `tinyc` binary: the parse, compile and run stages
//! wired together, plus the process I/O around them.
//!
//! ## Architecture
//!
//! ```text
//! input (file | stdin) → pipeline → output (file | stdout)
//!                            │
//!                            └─→ exec (temp dir + runtime.js + node)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::CompilerConfig;
//! use tiny_cli::pipeline::compile_source;
//!
//! let js = compile_source("{ output 1; }", &CompilerConfig::default()).unwrap();
//! assert!(js.ends_with("{\n  runtime.output(1);\n}\n"));
//! ```

pub mod exec;
pub mod io;
pub mod pipeline;

/// Runtime library every compiled program loads, shipped next to it by `exec`.
pub const RUNTIME_JS: &str = include_str!("../runtime/runtime.js");
