//! # Config Crate
//!
//! Centralized configuration constants for the Tiny compiler pipeline.
//! Every name the generated program depends on (identifier namespace,
//! runtime binding, runtime module path) and every tunable limit is defined
//! here so the parser, transform, printer and CLI agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{CompilerConfig, IDENTIFIER_PREFIX, RUNTIME_MODULE};
//!
//! let config = CompilerConfig::default();
//! assert_eq!(config.identifier_prefix, IDENTIFIER_PREFIX);
//! assert_eq!(config.runtime_module, RUNTIME_MODULE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and plain validation
//! - **Runtime Compatible**: Names match the bundled runtime library

pub mod constants;

#[cfg(test)]
mod tests;
