//! Upload configuration.

use serde::{Deserialize, Serialize};

/// Settings for the presigned two-step upload flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum upload size in megabytes. Files larger than this are
    /// rejected client-side before a presign grant is requested.
    #[serde(default = "default_max_upload_mb")]
    pub max_upload_mb: u64,
    /// Fallback content type when none can be inferred from the file name.
    #[serde(default = "default_fallback_content_type")]
    pub fallback_content_type: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_mb: default_max_upload_mb(),
            fallback_content_type: default_fallback_content_type(),
        }
    }
}

impl UploadConfig {
    /// Maximum upload size in bytes.
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_mb * 1024 * 1024
    }
}

fn default_max_upload_mb() -> u64 {
    512
}

fn default_fallback_content_type() -> String {
    "application/octet-stream".to_string()
}
