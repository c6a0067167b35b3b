//! Landing-page banner endpoints.

use eduhub_core::AppResult;
use eduhub_entity::banner::{Banner, SetBanner};

use crate::client::ApiClient;

/// `/api/banner` surface.
pub struct BannerApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Banner endpoints.
    pub fn banner(&self) -> BannerApi<'_> {
        BannerApi { client: self }
    }
}

impl BannerApi<'_> {
    /// The current banner.
    pub async fn current(&self) -> AppResult<Banner> {
        self.client.get_json("/api/banner").await
    }

    /// Replace the banner with an already-uploaded image.
    pub async fn set(&self, image_url: &str) -> AppResult<()> {
        self.client
            .post_envelope(
                "/api/banner/upload",
                &SetBanner {
                    image_url: image_url.to_string(),
                },
                "set banner",
            )
            .await
    }
}
