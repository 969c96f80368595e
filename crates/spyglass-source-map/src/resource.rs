//! The virtual resource claimed by a source map
//!
//! A [`SourceMapResource`] exists only because a source map names it: the
//! "original" counterpart of a transformed resource, never served on its
//! own. Its content is materialized lazily, at most once, from the map's
//! inline store or through the injected loader.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use spyglass_util::{
    ResourceCategory, UrlComponents, category_for_mime_type, file_extension_for_url,
    mime_type_for_extension, relative_path,
};
use tokio::sync::OnceCell;

use crate::error::{LoadError, LoadFailure};
use crate::loader::ResourceLoader;
use crate::source_map::SourceMap;

/// Type assumed for resources whose extension and raw owner reveal nothing.
const DEFAULT_MIME_TYPE: &str = "text/javascript";

/// Lifecycle of a virtual resource's content.
///
/// Transitions are monotonic: `AssumedFinished` is left exactly once, for
/// `Loading`, on the first content request; `Loading` resolves exactly once
/// to `Finished` or `Failed`; both are terminal for the lifetime of the
/// resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    /// Optimistic placeholder set at construction, before any content was
    /// requested. Keeps observers from showing a pending indicator for a
    /// resource that may never be asked for.
    AssumedFinished,
    /// The first content request is in flight
    Loading,
    /// Content resolved successfully (terminal)
    Finished,
    /// Content resolution failed (terminal)
    Failed,
}

/// Content resolved for a virtual resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceContent {
    /// The resource's text
    pub content: String,
    /// The resource's resolved MIME type. The extension-derived type takes
    /// precedence over whatever the transport reported.
    pub mime_type: String,
    /// Whether `content` is base64-encoded; always `false` for text loads
    pub base64_encoded: bool,
    /// Status the content arrived with (200 for inline content)
    pub status_code: u16,
}

/// A virtual resource referenced by a source map.
pub struct SourceMapResource {
    url: String,
    url_components: Option<UrlComponents>,
    mime_type: String,
    category: ResourceCategory,
    source_map: Arc<dyn SourceMap>,
    loader: Option<Arc<dyn ResourceLoader>>,
    state: RwLock<LoadState>,
    outcome: OnceCell<Result<ResourceContent, LoadFailure>>,
}

impl SourceMapResource {
    /// Build a virtual resource for `url`, owned by `source_map`.
    ///
    /// The MIME type is resolved immediately: a strict extension match
    /// wins, then the raw owner's synthetic type, then `text/javascript`.
    /// No I/O happens here; the resource starts out marked finished so
    /// observers do not show a pending indicator for content that may
    /// never be requested.
    pub fn new(
        url: impl Into<String>,
        source_map: Arc<dyn SourceMap>,
        loader: Option<Arc<dyn ResourceLoader>>,
    ) -> Self {
        let url = url.into();

        let inherited = source_map.raw_source().synthetic_mime_type().map(str::to_owned);
        let from_extension = file_extension_for_url(&url)
            .and_then(|extension| mime_type_for_extension(&extension))
            .map(str::to_owned);

        let mime_type = from_extension
            .or(inherited)
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string());
        let category = category_for_mime_type(&mime_type);

        SourceMapResource {
            url_components: UrlComponents::parse(&url),
            url,
            mime_type,
            category,
            source_map,
            loader,
            state: RwLock::new(LoadState::AssumedFinished),
            outcome: OnceCell::new(),
        }
    }

    /// The resource's URL, unique within its owning source map.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The resolved MIME type.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// The resource category derived from the resolved MIME type.
    pub fn category(&self) -> ResourceCategory {
        self.category
    }

    /// The owning source map.
    pub fn source_map(&self) -> &dyn SourceMap {
        self.source_map.as_ref()
    }

    /// Current lifecycle state, for observers such as a sidebar.
    pub fn load_state(&self) -> LoadState {
        *self.state.read().unwrap()
    }

    /// The path shown for this resource, relative to the source map's base
    /// path.
    ///
    /// Cross-origin resources display as `host[:port]path`, since a bare
    /// relative path against a foreign base would be misleading. Same-origin
    /// resources display as the suffix under the base path, or as a
    /// `..`-climbing relative path when the mapping walked up past it.
    pub fn display_subpath(&self) -> String {
        let Some(components) = &self.url_components else {
            // No decomposable origin to compare against; show the URL as-is.
            return self.url.clone();
        };
        let base = self.source_map.base_path_components();

        if components.scheme != base.scheme || components.host != base.host {
            return format!("{}{}", components.host_with_port(), components.path);
        }

        if !components.path.starts_with(&base.path) {
            return relative_path(&components.path, &base.path);
        }

        components.path[base.path.len()..].to_string()
    }

    /// Materialize the resource's text.
    ///
    /// The first call reverts the optimistic `AssumedFinished` marker,
    /// enters `Loading`, and resolves content from the source map's inline
    /// store or through the loader. Every later call, and every concurrent
    /// call while the first is in flight, observes that single outcome;
    /// the resource is never fetched twice.
    pub async fn request_content(&self) -> Result<ResourceContent, LoadFailure> {
        self.outcome.get_or_init(|| self.load_content()).await.clone()
    }

    async fn load_content(&self) -> Result<ResourceContent, LoadFailure> {
        // Revert the optimistic marker from construction; the resource is
        // now genuinely loading.
        self.set_state(LoadState::Loading);

        // Inline content short-circuits the network entirely. It still
        // arrives through the same async channel as a fetch, so callers
        // cannot tell the two sources apart.
        if let Some(content) = self.source_map.source_content(&self.url) {
            tracing::debug!(url = %self.url, "Resolving source map resource from inline content");
            self.set_state(LoadState::Finished);
            return Ok(ResourceContent {
                content,
                mime_type: self.mime_type.clone(),
                base64_encoded: false,
                status_code: 200,
            });
        }

        let Some(loader) = &self.loader else {
            tracing::warn!(url = %self.url, "No resource loader installed");
            self.set_state(LoadState::Failed);
            return Err(LoadFailure::bare(LoadError::LoaderUnavailable));
        };

        // Fetch in the raw owner's frame when known, else the main frame.
        let frame_id = self.source_map.raw_source().frame_id();
        tracing::debug!(url = %self.url, frame = ?frame_id, "Fetching source map resource");

        match loader.load_resource(frame_id, &self.url).await {
            Ok(reply) if reply.status_code >= 400 => {
                self.set_state(LoadState::Failed);
                Err(LoadFailure {
                    error: LoadError::HttpStatus {
                        status_code: reply.status_code,
                    },
                    content: Some(reply.content),
                    mime_type: reply.mime_type,
                    status_code: Some(reply.status_code),
                })
            }
            Ok(reply) => {
                self.set_state(LoadState::Finished);
                Ok(ResourceContent {
                    content: reply.content,
                    // The resolved type wins over the transport-reported one.
                    mime_type: self.mime_type.clone(),
                    base64_encoded: false,
                    status_code: reply.status_code,
                })
            }
            Err(error) => {
                self.set_state(LoadState::Failed);
                Err(LoadFailure {
                    error: LoadError::Transport {
                        reason: error.reason,
                    },
                    content: error.content,
                    mime_type: error.mime_type,
                    status_code: error.status_code,
                })
            }
        }
    }

    fn set_state(&self, next: LoadState) {
        let mut state = self.state.write().unwrap();
        // Finished and Failed are terminal; only the single load path ever
        // gets here, so leaving a terminal state would be a logic error.
        debug_assert!(!matches!(*state, LoadState::Finished | LoadState::Failed));
        *state = next;
    }
}

impl std::fmt::Debug for SourceMapResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceMapResource")
            .field("url", &self.url)
            .field("mime_type", &self.mime_type)
            .field("category", &self.category)
            .field("load_state", &self.load_state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSourceMap;
    use crate::source_map::{FragmentRange, RawFragment, RawResource, RawSource};

    fn resource_owner(synthetic_mime_type: Option<&str>) -> RawSource {
        RawSource::Resource(RawResource {
            url: "https://example.com/a/b/app.min.js".to_string(),
            synthetic_mime_type: synthetic_mime_type.map(str::to_owned),
            frame_id: None,
        })
    }

    fn map_with_base(owner: RawSource, base: &str) -> Arc<dyn SourceMap> {
        Arc::new(FixtureSourceMap::new(owner, base))
    }

    #[test]
    fn test_mime_type_from_extension() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://example.com/a/b/main.css", map, None);

        assert_eq!(resource.mime_type(), "text/css");
        assert_eq!(resource.category(), ResourceCategory::StyleSheet);
    }

    #[test]
    fn test_mime_type_extension_beats_inherited() {
        let map = map_with_base(
            resource_owner(Some("application/javascript")),
            "https://example.com/a/b/",
        );
        let resource = SourceMapResource::new("https://example.com/a/b/theme.scss", map, None);

        assert_eq!(resource.mime_type(), "text/x-scss");
    }

    #[test]
    fn test_mime_type_inherited_when_extension_unknown() {
        let map = map_with_base(
            resource_owner(Some("application/javascript")),
            "https://example.com/a/b/",
        );
        let resource = SourceMapResource::new("https://example.com/a/b/module", map, None);

        assert_eq!(resource.mime_type(), "application/javascript");
        assert_eq!(resource.category(), ResourceCategory::Script);
    }

    #[test]
    fn test_mime_type_defaults_to_javascript() {
        // A fragment owner contributes no inherited type.
        let owner = RawSource::Fragment(RawFragment {
            url: "https://example.com/index.html".to_string(),
            range: FragmentRange {
                start_line: 0,
                start_column: 0,
            },
        });
        let map = map_with_base(owner, "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://example.com/a/b/module", map, None);

        assert_eq!(resource.mime_type(), "text/javascript");
    }

    #[test]
    fn test_starts_assumed_finished() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://example.com/a/b/c.js", map, None);

        assert_eq!(resource.load_state(), LoadState::AssumedFinished);
    }

    #[test]
    fn test_display_subpath_under_base() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://example.com/a/b/c.js", map, None);

        assert_eq!(resource.display_subpath(), "c.js");
    }

    #[test]
    fn test_display_subpath_climbs_out_of_base() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://example.com/a/x.js", map, None);

        assert_eq!(resource.display_subpath(), "../x.js");
    }

    #[test]
    fn test_display_subpath_cross_origin() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://other.example.com/a/x.js", map, None);

        assert_eq!(resource.display_subpath(), "other.example.com/a/x.js");
    }

    #[test]
    fn test_display_subpath_cross_origin_keeps_port() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://other.example.com:8443/a/x.js", map, None);

        assert_eq!(resource.display_subpath(), "other.example.com:8443/a/x.js");
    }

    #[test]
    fn test_display_subpath_falls_back_to_url() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("webpack:///src/index.ts", map, None);

        // No host to compare origins with; the full URL is the display path.
        assert_eq!(resource.display_subpath(), "webpack:///src/index.ts");
    }

    #[tokio::test]
    async fn test_inline_content_resolves_without_loader() {
        let url = "https://example.com/a/b/c.js";
        let map = FixtureSourceMap::new(resource_owner(None), "https://example.com/a/b/")
            .with_inline(url, "console.log('original');");
        let resource = SourceMapResource::new(url, Arc::new(map), None);

        let content = resource.request_content().await.unwrap();
        assert_eq!(content.content, "console.log('original');");
        assert_eq!(content.mime_type, "text/javascript");
        assert_eq!(content.status_code, 200);
        assert!(!content.base64_encoded);
        assert_eq!(resource.load_state(), LoadState::Finished);
    }

    #[tokio::test]
    async fn test_missing_loader_fails_deterministically() {
        let map = map_with_base(resource_owner(None), "https://example.com/a/b/");
        let resource = SourceMapResource::new("https://example.com/a/b/c.js", map, None);

        let failure = resource.request_content().await.unwrap_err();
        assert_eq!(failure.error, LoadError::LoaderUnavailable);
        assert_eq!(failure.content, None);
        assert_eq!(resource.load_state(), LoadState::Failed);
    }
}
