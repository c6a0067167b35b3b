//! Upload DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use eduhub_core::types::LibraryFileId;

/// Body of `POST /api/upload/presigned-url`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PresignRequest {
    /// Name of the file about to be uploaded.
    #[serde(rename = "fileName")]
    #[validate(length(min = 1, message = "file name is required"))]
    pub file_name: String,
    /// Content type of the upload.
    #[serde(rename = "fileType")]
    pub file_type: String,
}

/// The grant returned by the presign endpoint.
///
/// `upload_url` is a time-limited write URL for a direct `PUT`; `file_url`
/// is the durable content URL used in all subsequent metadata calls. If
/// the `PUT` never happens (or fails), the grant is simply orphaned —
/// there is no compensating cleanup call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresignGrant {
    /// Time-limited direct-upload URL.
    #[serde(rename = "uploadUrl")]
    pub upload_url: String,
    /// Durable content URL.
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Storage key, when the backend includes it.
    #[serde(default)]
    pub key: Option<String>,
}

/// An entry in the shared file library (`GET /api/upload/existing`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryFile {
    /// Unique library-entry identifier.
    pub id: LibraryFileId,
    /// Display name.
    pub name: String,
    /// Durable content URL.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Content kind tag.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Thumbnail URL.
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// A chapter marker on a video file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoChapter {
    /// Chapter label.
    pub label: String,
    /// Start offset, as entered (`mm:ss` or seconds).
    pub start: String,
    /// End offset, as entered.
    pub end: String,
}

impl VideoChapter {
    /// Whether the chapter carries a usable label.
    pub fn is_labelled(&self) -> bool {
        !self.label.trim().is_empty()
    }
}

/// Body of `POST /api/upload/save`, registering an upload in the library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveUpload {
    /// Display name.
    pub name: String,
    /// Durable content URL.
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    /// Content kind tag.
    #[serde(rename = "fileType")]
    pub file_type: String,
    /// Thumbnail URL.
    #[serde(default, rename = "thumbnailUrl")]
    pub thumbnail_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presign_round_trip() {
        let raw = r#"{"uploadUrl":"https://store.example.com/put/abc",
                      "fileUrl":"https://cdn.example.com/abc.pdf"}"#;
        let grant: PresignGrant = serde_json::from_str(raw).unwrap();
        assert!(grant.key.is_none());
        assert!(grant.upload_url.contains("/put/"));
    }

    #[test]
    fn test_chapters_filter_on_label() {
        let chapter = VideoChapter {
            label: "  ".into(),
            start: "0".into(),
            end: "60".into(),
        };
        assert!(!chapter.is_labelled());
    }
}
