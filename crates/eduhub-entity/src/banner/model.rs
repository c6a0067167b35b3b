//! Banner entity model.

use serde::{Deserialize, Serialize};

/// The current landing-page banner (`GET /api/banner`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    /// Image URL of the active banner.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body of the banner replacement call; the image itself goes through the
/// presigned two-step upload first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetBanner {
    /// Image URL from the presigned upload.
    pub image_url: String,
}
