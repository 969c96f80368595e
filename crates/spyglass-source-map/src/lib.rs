//! Source-map virtual resources for Spyglass
//!
//! A source map claims that a transformed resource (minified, compiled,
//! bundled) was produced from one or more *original* files. Those originals
//! were never served to the page; they exist only because the map names
//! them. This crate models such a virtual resource: it translates positions
//! between the virtual file and the raw resource carrying the map, derives
//! the path an inspector displays for it, and materializes its text lazily,
//! at most once.
//!
//! # Overview
//!
//! The core types are:
//! - [`SourceMapResource`]: The virtual resource itself
//! - [`SourceMap`]: Narrow trait onto the decoded map (decoder lives elsewhere)
//! - [`ResourceLoader`]: Injected capability performing the actual fetch
//! - [`RawLocation`] / [`RawRange`]: Translation results in raw coordinates
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use spyglass_source_map::{Position, SourceMapResource};
//!
//! // `map` implements SourceMap, `loader` implements ResourceLoader.
//! let resource = SourceMapResource::new(
//!     "https://example.com/src/app.ts",
//!     Arc::clone(&map),
//!     Some(Arc::clone(&loader)),
//! );
//!
//! // Pure, synchronous translation into the raw owner's coordinates.
//! let raw = resource.translate_position(Position::new(5, 10));
//!
//! // Lazy, one-shot content acquisition.
//! let outcome = resource.request_content().await;
//! ```

pub mod error;
pub mod loader;
pub mod location;
pub mod resource;
pub mod source_map;
pub mod types;

#[cfg(test)]
mod fixtures;

// Re-export main types
pub use error::{LoadError, LoadFailure};
pub use loader::{LoaderError, LoaderReply, ResourceLoader};
pub use location::{MappedOrigin, RawLocation, RawRange};
pub use resource::{LoadState, ResourceContent, SourceMapResource};
pub use source_map::{FragmentRange, RawFragment, RawResource, RawSource, SourceMap};
pub use types::{FrameId, Position, TextRange};
