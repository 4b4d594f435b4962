//! Centralized configuration values shared across the Tiny compiler pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// NAMING CONSTANTS
// =============================================================================

/// Prefix prepended to every Tiny identifier in generated code.
///
/// Keeps source names out of the host language's reserved words and
/// built-ins (`var`, `require`, `runtime`, ...).
///
/// # Examples
/// ```
/// use config::constants::IDENTIFIER_PREFIX;
/// assert_eq!(format!("{IDENTIFIER_PREFIX}x"), "tiny$x");
/// ```
pub const IDENTIFIER_PREFIX: &str = "tiny$";

/// Name the generated program binds the runtime capability object to.
///
/// # Examples
/// ```
/// use config::constants::{IDENTIFIER_PREFIX, RUNTIME_BINDING};
/// assert!(!RUNTIME_BINDING.starts_with(IDENTIFIER_PREFIX));
/// ```
pub const RUNTIME_BINDING: &str = "runtime";

/// Module path the generated program imports the runtime from.
///
/// # Examples
/// ```
/// use config::constants::RUNTIME_MODULE;
/// assert!(RUNTIME_MODULE.starts_with("./"));
/// ```
pub const RUNTIME_MODULE: &str = "./runtime";

/// Host function the generated program loads the runtime module with.
///
/// # Examples
/// ```
/// use config::constants::{RUNTIME_LOADER, RUNTIME_MODULE};
/// assert_eq!(format!("{RUNTIME_LOADER}({RUNTIME_MODULE:?})"), "require(\"./runtime\")");
/// ```
pub const RUNTIME_LOADER: &str = "require";

/// Runtime member performing a blocking integer read.
pub const RUNTIME_READ: &str = "read";

/// Runtime member writing a value to standard output.
pub const RUNTIME_OUTPUT: &str = "output";

/// File name the runtime library is written under next to generated code.
///
/// # Examples
/// ```
/// use config::constants::{RUNTIME_FILE_NAME, RUNTIME_MODULE};
/// assert!(RUNTIME_FILE_NAME.starts_with(&RUNTIME_MODULE[2..]));
/// ```
pub const RUNTIME_FILE_NAME: &str = "runtime.js";

// =============================================================================
// PRINTER CONSTANTS
// =============================================================================

/// Spaces per indentation level in generated code.
///
/// # Examples
/// ```
/// use config::constants::INDENT_WIDTH;
/// assert_eq!(" ".repeat(INDENT_WIDTH).len(), 2);
/// ```
pub const INDENT_WIDTH: usize = 2;

// =============================================================================
// RECURSION CONSTANTS
// =============================================================================

/// Remaining stack below which recursive passes switch to a fresh segment
/// through the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack space allocated for each new segment when growing recursion
/// limits using the `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

// =============================================================================
// COMPILER CONFIG
// =============================================================================

/// Naming configuration used by the transform when building the target tree.
///
/// # Examples
/// ```
/// use config::constants::CompilerConfig;
/// let config = CompilerConfig::default();
/// assert_eq!(config.runtime_binding, "runtime");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Prefix applied to every source identifier.
    pub identifier_prefix: String,
    /// Variable the runtime module is bound to.
    pub runtime_binding: String,
    /// Module path passed to `require`.
    pub runtime_module: String,
}

impl CompilerConfig {
    /// Builds a configuration, rejecting names the generated program could not
    /// use.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{CompilerConfig, ConfigError};
    /// let cfg = CompilerConfig::new("t_", "rt", "./rt").expect("valid config");
    /// assert_eq!(cfg.identifier_prefix, "t_");
    /// assert_eq!(
    ///     CompilerConfig::new("1x", "rt", "./rt").unwrap_err(),
    ///     ConfigError::InvalidPrefix("1x".to_string())
    /// );
    /// ```
    pub fn new(
        identifier_prefix: &str,
        runtime_binding: &str,
        runtime_module: &str,
    ) -> Result<Self, ConfigError> {
        if !is_identifier(identifier_prefix) {
            return Err(ConfigError::InvalidPrefix(identifier_prefix.to_string()));
        }
        if !is_identifier(runtime_binding) {
            return Err(ConfigError::InvalidBinding(runtime_binding.to_string()));
        }
        if runtime_module.trim().is_empty() {
            return Err(ConfigError::EmptyModule);
        }
        // A prefixed source name must never shadow the runtime binding.
        if runtime_binding.starts_with(identifier_prefix) {
            return Err(ConfigError::BindingShadowed {
                binding: runtime_binding.to_string(),
                prefix: identifier_prefix.to_string(),
            });
        }
        Ok(Self {
            identifier_prefix: identifier_prefix.to_string(),
            runtime_binding: runtime_binding.to_string(),
            runtime_module: runtime_module.to_string(),
        })
    }

    /// Namespaces a source identifier.
    ///
    /// # Examples
    /// ```
    /// use config::constants::CompilerConfig;
    /// assert_eq!(CompilerConfig::default().prefixed("count"), "tiny$count");
    /// ```
    pub fn prefixed(&self, name: &str) -> String {
        format!("{}{}", self.identifier_prefix, name)
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            identifier_prefix: IDENTIFIER_PREFIX.to_string(),
            runtime_binding: RUNTIME_BINDING.to_string(),
            runtime_module: RUNTIME_MODULE.to_string(),
        }
    }
}

/// Returns true when `text` matches `[A-Za-z_$][A-Za-z0-9_$]*`.
///
/// # Examples
/// ```
/// use config::constants::is_identifier;
/// assert!(is_identifier("tiny$"));
/// assert!(!is_identifier("9lives"));
/// ```
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the identifier prefix is not a valid identifier start.
    InvalidPrefix(String),
    /// Raised when the runtime binding is not a valid identifier.
    InvalidBinding(String),
    /// Raised when the runtime module path is blank.
    EmptyModule,
    /// Raised when prefixed source names could collide with the runtime binding.
    BindingShadowed {
        /// Offending binding.
        binding: String,
        /// Configured prefix.
        prefix: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrefix(value) => {
                write!(f, "identifier prefix must be a valid identifier: {value:?}")
            }
            ConfigError::InvalidBinding(value) => {
                write!(f, "runtime binding must be a valid identifier: {value:?}")
            }
            ConfigError::EmptyModule => write!(f, "runtime module path must not be empty"),
            ConfigError::BindingShadowed { binding, prefix } => {
                write!(f, "runtime binding {binding:?} starts with identifier prefix {prefix:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
