//! Error types for spyglass-source-map

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a content load failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LoadError {
    /// No fetch facility was installed when the resource was built.
    #[error("no resource loader is installed")]
    LoaderUnavailable,

    /// The transport answered with an error status.
    #[error("resource load failed with status {status_code}")]
    HttpStatus {
        /// The HTTP status code (>= 400)
        status_code: u16,
    },

    /// The transport itself failed before producing a full reply.
    #[error("resource load failed: {reason}")]
    Transport {
        /// Human-readable description from the transport
        reason: String,
    },
}

/// Structured record of a failed content load.
///
/// Alongside the error this keeps whatever partial body, MIME type, and
/// status the transport produced, so observers can show what did arrive.
/// Failures are surfaced as values, never panics; the resource's load state
/// is the durable record that the load failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadFailure {
    /// What went wrong
    pub error: LoadError,
    /// Partial body, if any arrived
    pub content: Option<String>,
    /// MIME type, if one was reported
    pub mime_type: Option<String>,
    /// Status code, if the response line arrived
    pub status_code: Option<u16>,
}

impl LoadFailure {
    /// A failure carrying no partial reply.
    pub fn bare(error: LoadError) -> Self {
        LoadFailure {
            error,
            content: None,
            mime_type: None,
            status_code: None,
        }
    }
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for LoadFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
