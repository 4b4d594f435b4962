//! # Tests for Config Constants
//!
//! Unit tests verifying the configuration constants agree with each other.

use crate::constants::*;

// =============================================================================
// NAMING TESTS
// =============================================================================

#[test]
fn test_prefix_is_identifier() {
    assert!(is_identifier(IDENTIFIER_PREFIX), "prefix must start an identifier");
}

#[test]
fn test_runtime_members_are_identifiers() {
    assert!(is_identifier(RUNTIME_BINDING));
    assert!(is_identifier(RUNTIME_READ));
    assert!(is_identifier(RUNTIME_OUTPUT));
}

#[test]
fn test_runtime_module_matches_file_name() {
    // require("./runtime") must resolve to the bundled file
    let stem = RUNTIME_MODULE.trim_start_matches("./");
    assert_eq!(format!("{stem}.js"), RUNTIME_FILE_NAME);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_indent_width_positive() {
    assert!(INDENT_WIDTH > 0);
}

#[test]
fn test_stack_sizes_ordered() {
    assert!(
        STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES,
        "red zone must fit inside a fresh segment"
    );
}
