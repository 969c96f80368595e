//! Core coordinate types for mapped resources

use serde::{Deserialize, Serialize};

/// Identifier of the frame a raw resource was loaded in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(pub String);

/// A line/column position in source text (0-indexed).
///
/// The same shape serves both coordinate spaces: positions in a virtual
/// (original) resource and positions in the raw resource that carries the
/// transformed code. Which space a value lives in is a property of the API
/// that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (0-indexed)
    pub line: u32,
    /// Column number (0-indexed)
    pub column: u32,
}

impl Position {
    /// Create a position from line and column.
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

/// A span of text from start (inclusive) to end (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRange {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}
