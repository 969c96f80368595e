//! In-memory source map fixture shared by the unit tests

use std::collections::HashMap;

use spyglass_util::UrlComponents;

use crate::source_map::{RawSource, SourceMap};
use crate::types::Position;

/// A [`SourceMap`] backed by hand-written tables instead of a decoder.
pub(crate) struct FixtureSourceMap {
    raw_source: RawSource,
    base_path: UrlComponents,
    inline: HashMap<String, String>,
    entries: HashMap<u32, Position>,
}

impl FixtureSourceMap {
    pub(crate) fn new(raw_source: RawSource, base_url: &str) -> Self {
        FixtureSourceMap {
            raw_source,
            base_path: UrlComponents::parse(base_url).expect("fixture base URL must parse"),
            inline: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    pub(crate) fn with_inline(mut self, url: &str, content: &str) -> Self {
        self.inline.insert(url.to_string(), content.to_string());
        self
    }

    pub(crate) fn with_entry(mut self, line: u32, raw: Position) -> Self {
        self.entries.insert(line, raw);
        self
    }
}

impl SourceMap for FixtureSourceMap {
    fn raw_source(&self) -> &RawSource {
        &self.raw_source
    }

    fn base_path_components(&self) -> &UrlComponents {
        &self.base_path
    }

    fn source_content(&self, url: &str) -> Option<String> {
        self.inline.get(url).cloned()
    }

    fn find_entry_reversed(&self, _url: &str, line: u32) -> Position {
        self.entries
            .get(&line)
            .copied()
            .unwrap_or(Position { line, column: 0 })
    }
}
