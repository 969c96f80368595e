//! Shared utilities for Spyglass
//!
//! URL decomposition, path arithmetic, and MIME classification used across
//! the inspector model crates.

pub mod mime;
pub mod urls;

// Re-export main types
pub use mime::{ResourceCategory, category_for_mime_type, mime_type_for_extension};
pub use urls::{UrlComponents, file_extension_for_url, relative_path};
