//! MIME types and resource categories

use serde::{Deserialize, Serialize};

/// Broad classification of a resource, derived from its MIME type.
///
/// Observers (sidebars, tree outlines) group and badge resources by this
/// category rather than by raw MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceCategory {
    /// Top-level or frame document (HTML, XHTML)
    Document,
    /// Script or script-like source (JavaScript, TypeScript, JSON, ...)
    Script,
    /// Style sheet source (CSS and its preprocessor dialects)
    StyleSheet,
    /// Image payload
    Image,
    /// Font payload
    Font,
    /// Anything else
    Other,
}

/// Map a file extension to a MIME type, strict matches only.
///
/// Unknown extensions return `None` rather than a `text/plain` guess so
/// callers can apply their own fallback chain.
pub fn mime_type_for_extension(extension: &str) -> Option<&'static str> {
    let lowered = extension.to_ascii_lowercase();
    Some(match lowered.as_str() {
        "js" | "mjs" | "cjs" => "text/javascript",
        "ts" => "text/x-typescript",
        "jsx" | "tsx" => "text/jsx",
        "coffee" => "text/x-coffeescript",
        "json" | "map" => "application/json",
        "css" => "text/css",
        "scss" => "text/x-scss",
        "sass" => "text/x-sass",
        "less" => "text/x-less",
        "html" | "htm" => "text/html",
        "xhtml" => "application/xhtml+xml",
        "xml" => "text/xml",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",
        "txt" | "text" => "text/plain",
        _ => return None,
    })
}

/// Classify a MIME type into a [`ResourceCategory`].
pub fn category_for_mime_type(mime_type: &str) -> ResourceCategory {
    // Parameters like "; charset=utf-8" never affect the category.
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or(mime_type)
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "text/html" | "application/xhtml+xml" => ResourceCategory::Document,
        "text/javascript"
        | "application/javascript"
        | "application/x-javascript"
        | "application/ecmascript"
        | "text/x-typescript"
        | "text/jsx"
        | "text/x-coffeescript"
        | "application/json" => ResourceCategory::Script,
        "text/css" | "text/x-scss" | "text/x-sass" | "text/x-less" => {
            ResourceCategory::StyleSheet
        }
        _ if essence.starts_with("image/") => ResourceCategory::Image,
        _ if essence.starts_with("font/") || essence.starts_with("application/font-") => {
            ResourceCategory::Font
        }
        _ => ResourceCategory::Other,
    }
}
