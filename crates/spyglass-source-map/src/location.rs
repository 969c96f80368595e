//! Translating mapped positions into raw-resource coordinates

use serde::{Deserialize, Serialize};

use crate::resource::SourceMapResource;
use crate::source_map::RawSource;
use crate::types::{Position, TextRange};

/// Back-reference from a raw location to the mapped position it was
/// translated from.
///
/// Carrying this on the raw location makes raw-to-virtual lookups possible
/// without a separate reverse index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedOrigin {
    /// URL of the virtual resource the translation started from
    pub url: String,
    /// The position in that resource that was translated
    pub position: Position,
}

/// A position in the coordinate space of the raw resource that carries the
/// transformed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLocation {
    /// The raw owner the position is expressed against
    pub source: RawSource,
    /// Line and column in the raw owner's host coordinate space
    pub position: Position,
    /// Where this location came from in the virtual resource
    pub mapped_origin: MappedOrigin,
}

/// A span in raw coordinates.
///
/// Both endpoints are translated independently and always anchor to the
/// same raw owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRange {
    /// The raw owner anchoring the range
    pub source: RawSource,
    /// Translated start of the range
    pub start: RawLocation,
    /// Translated end of the range
    pub end: RawLocation,
}

impl SourceMapResource {
    /// Translate a position in this virtual resource into the raw owner's
    /// coordinate space.
    ///
    /// The reverse lookup is line-granular: `position.column` does not
    /// participate in entry selection and the entry's recorded column
    /// stands. When the raw owner is an inline fragment, the entry's
    /// fragment-local coordinate is composed with the fragment's start
    /// offset so the result is valid in the host document.
    pub fn translate_position(&self, position: Position) -> RawLocation {
        let entry = self
            .source_map()
            .find_entry_reversed(self.url(), position.line);

        let mut raw_line = entry.line;
        let mut raw_column = entry.column;
        if let Some(range) = self.source_map().raw_source().fragment_range() {
            // Columns only shift on the fragment's first line; every later
            // line starts at column zero of the host document.
            if raw_line == 0 {
                raw_column += range.start_column;
            }
            raw_line += range.start_line;
        }

        RawLocation {
            source: self.source_map().raw_source().clone(),
            position: Position {
                line: raw_line,
                column: raw_column,
            },
            mapped_origin: MappedOrigin {
                url: self.url().to_string(),
                position,
            },
        }
    }

    /// Translate a range in this virtual resource into a raw range anchored
    /// to the raw owner.
    pub fn translate_range(&self, range: TextRange) -> RawRange {
        let start = self.translate_position(range.start);
        let end = self.translate_position(range.end);
        RawRange {
            source: self.source_map().raw_source().clone(),
            start,
            end,
        }
    }
}
