use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-request context handed through by the multipart framework.
///
/// Placement resolution never depends on its contents; the correlation id
/// only shows up in log events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadRequest {
    /// Correlation id assigned by the framework, if any.
    pub request_id: Option<Uuid>,
}

impl UploadRequest {
    pub fn with_request_id(request_id: Uuid) -> Self {
        UploadRequest {
            request_id: Some(request_id),
        }
    }
}

/// Metadata for a single file in a multipart upload.
///
/// Only `original_name` participates in placement, and only its extension
/// is kept; the rest of the client-supplied name never reaches disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomingFile {
    /// Multipart form field the file arrived under.
    pub field_name: Option<String>,
    /// Filename as supplied by the client.
    pub original_name: Option<String>,
    /// Client-declared MIME type. Not validated here.
    pub content_type: Option<String>,
}

impl IncomingFile {
    pub fn with_original_name(name: impl Into<String>) -> Self {
        IncomingFile {
            original_name: Some(name.into()),
            ..Default::default()
        }
    }
}
