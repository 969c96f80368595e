//! The narrow interface onto a decoded source map
//!
//! Decoding the mapping payload (VLQ parsing, entry storage, binary search)
//! belongs to the decoder, not this crate. The model here sees the decoder
//! only through [`SourceMap`], plus the plain data describing the raw
//! resource that embeds the mapping.

use serde::{Deserialize, Serialize};
use spyglass_util::UrlComponents;

use crate::types::{FrameId, Position};

/// Start offset of an inline fragment within its host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentRange {
    /// Line in the host document where the fragment begins
    pub start_line: u32,
    /// Column on that line where the fragment begins
    pub start_column: u32,
}

/// A raw resource served over the network, carrying a source map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawResource {
    /// URL the resource was served from
    pub url: String,
    /// Synthetic MIME type recorded for the resource, if known
    pub synthetic_mime_type: Option<String>,
    /// Frame the resource was loaded in, if known
    pub frame_id: Option<FrameId>,
}

/// A script fragment embedded in a larger host document, carrying a
/// source map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFragment {
    /// URL of the host document
    pub url: String,
    /// Where the fragment starts within the host document
    pub range: FragmentRange,
}

/// The raw resource or script that embeds a source map.
///
/// Locations produced by the decoder are local to this owner. For a
/// [`Fragment`](RawSource::Fragment) they must be composed with the
/// fragment's start offset to be valid in the host document's coordinate
/// space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawSource {
    /// A full top-level resource
    Resource(RawResource),
    /// An inline fragment of a larger document
    Fragment(RawFragment),
}

impl RawSource {
    /// URL of the raw owner.
    pub fn url(&self) -> &str {
        match self {
            RawSource::Resource(resource) => &resource.url,
            RawSource::Fragment(fragment) => &fragment.url,
        }
    }

    /// Synthetic MIME type, known only for concrete resources.
    pub fn synthetic_mime_type(&self) -> Option<&str> {
        match self {
            RawSource::Resource(resource) => resource.synthetic_mime_type.as_deref(),
            RawSource::Fragment(_) => None,
        }
    }

    /// Frame the owner belongs to, known only for concrete resources.
    pub fn frame_id(&self) -> Option<&FrameId> {
        match self {
            RawSource::Resource(resource) => resource.frame_id.as_ref(),
            RawSource::Fragment(_) => None,
        }
    }

    /// Start offset within the host document, for fragment owners.
    pub fn fragment_range(&self) -> Option<FragmentRange> {
        match self {
            RawSource::Resource(_) => None,
            RawSource::Fragment(fragment) => Some(fragment.range),
        }
    }
}

/// Narrow interface onto a decoded source map.
///
/// Implementations own the mapping payload and its lookup structures; the
/// virtual-resource model consumes only these four entry points. No decoder
/// types leak through the trait, so any decoder (or a test fixture) can sit
/// behind it.
pub trait SourceMap: Send + Sync {
    /// The raw resource or script that embeds the mapping.
    fn raw_source(&self) -> &RawSource;

    /// Structured base path against which the map's source URLs are
    /// expressed.
    fn base_path_components(&self) -> &UrlComponents;

    /// Inline-embedded content for a source URL, if the map carries it.
    fn source_content(&self, url: &str) -> Option<String>;

    /// Best matching raw-owner coordinate for a line in the given source.
    ///
    /// Lookup is line-granular: the requested column never participates in
    /// entry selection, and the returned column is whatever the chosen
    /// entry recorded. Nearest-match semantics are owned by the decoder.
    fn find_entry_reversed(&self, url: &str, line: u32) -> Position;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_owner_accessors() {
        let owner = RawSource::Resource(RawResource {
            url: "https://example.com/app.min.js".to_string(),
            synthetic_mime_type: Some("application/javascript".to_string()),
            frame_id: Some(FrameId("frame-7".to_string())),
        });

        assert_eq!(owner.url(), "https://example.com/app.min.js");
        assert_eq!(owner.synthetic_mime_type(), Some("application/javascript"));
        assert_eq!(owner.frame_id(), Some(&FrameId("frame-7".to_string())));
        assert_eq!(owner.fragment_range(), None);
    }

    #[test]
    fn test_fragment_owner_accessors() {
        let owner = RawSource::Fragment(RawFragment {
            url: "https://example.com/index.html".to_string(),
            range: FragmentRange {
                start_line: 100,
                start_column: 20,
            },
        });

        assert_eq!(owner.url(), "https://example.com/index.html");
        // Fragments never contribute an inherited type or a frame.
        assert_eq!(owner.synthetic_mime_type(), None);
        assert_eq!(owner.frame_id(), None);
        assert_eq!(
            owner.fragment_range(),
            Some(FragmentRange {
                start_line: 100,
                start_column: 20,
            })
        );
    }

    #[test]
    fn test_serialization_raw_source() {
        let owner = RawSource::Fragment(RawFragment {
            url: "https://example.com/index.html".to_string(),
            range: FragmentRange {
                start_line: 3,
                start_column: 8,
            },
        });
        let json = serde_json::to_string(&owner).unwrap();
        let deserialized: RawSource = serde_json::from_str(&json).unwrap();
        assert_eq!(owner, deserialized);
    }
}
