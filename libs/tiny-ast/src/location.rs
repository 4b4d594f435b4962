//! # Source Location
//!
//! Location metadata the parser can attach to nodes. Locations are stored as
//! untagged leaves, so the transform never looks inside them.
//!
//! ## Usage
//!
//! ```rust
//! use tiny_ast::{Location, Position};
//!
//! let loc = Location::new(Position::new(0, 1, 1), Position::new(4, 1, 5));
//! assert_eq!(loc.start.column, 1);
//! assert_eq!(loc.len(), 4);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A point in the source text.
///
/// Line and column are 1-based, `offset` is a 0-based byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self { offset, line, column }
    }
}

/// A range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Location {
    /// Creates a location from its two endpoints.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Length of the range in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Returns true if the range covers no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Position> for Value {
    fn from(pos: Position) -> Self {
        json!({ "offset": pos.offset, "line": pos.line, "column": pos.column })
    }
}

impl From<Location> for Value {
    fn from(loc: Location) -> Self {
        json!({ "start": Value::from(loc.start), "end": Value::from(loc.end) })
    }
}
