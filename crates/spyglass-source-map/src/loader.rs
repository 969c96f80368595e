//! The injected fetch capability
//!
//! The model never talks to a network stack directly. Whatever performs the
//! actual byte fetch (an inspector backend, an HTTP client, a test fake) is
//! supplied at construction behind this single-method trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::FrameId;

/// A successful transport reply for a resource fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderReply {
    /// Response body as text
    pub content: String,
    /// MIME type reported by the transport, if any
    pub mime_type: Option<String>,
    /// HTTP status code
    pub status_code: u16,
}

/// A transport-level fetch failure.
///
/// Carries whatever partial reply the transport had when it gave up, so
/// callers can still surface a body or status alongside the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderError {
    /// Human-readable description of the failure
    pub reason: String,
    /// Partial body, if any was received
    pub content: Option<String>,
    /// MIME type, if one was reported before the failure
    pub mime_type: Option<String>,
    /// Status code, if the response line arrived
    pub status_code: Option<u16>,
}

impl LoaderError {
    /// A failure with a reason and no partial reply.
    pub fn new(reason: impl Into<String>) -> Self {
        LoaderError {
            reason: reason.into(),
            content: None,
            mime_type: None,
            status_code: None,
        }
    }
}

/// Frame-scoped resource fetching.
///
/// `frame_id` of `None` targets the top-level (main) frame. Implementations
/// resolve the URL in that frame's context and return the reply as-is;
/// status-code policy (what counts as failure) belongs to the caller.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Fetch `url` in the context of the given frame.
    async fn load_resource(
        &self,
        frame_id: Option<&FrameId>,
        url: &str,
    ) -> Result<LoaderReply, LoaderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_error_new_has_no_partial_reply() {
        let error = LoaderError::new("connection reset");
        assert_eq!(error.reason, "connection reset");
        assert_eq!(error.content, None);
        assert_eq!(error.mime_type, None);
        assert_eq!(error.status_code, None);
    }

    #[test]
    fn test_serialization_reply() {
        let reply = LoaderReply {
            content: "body".to_string(),
            mime_type: Some("text/plain".to_string()),
            status_code: 200,
        };
        let json = serde_json::to_string(&reply).unwrap();
        let deserialized: LoaderReply = serde_json::from_str(&json).unwrap();
        assert_eq!(reply, deserialized);
    }
}
