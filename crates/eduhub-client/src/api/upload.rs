//! The presigned two-step upload flow and the shared file library.

use std::path::Path;

use bytes::Bytes;

use eduhub_core::error::ErrorKind;
use eduhub_core::{AppError, AppResult};
use eduhub_entity::upload::{LibraryFile, PresignGrant, PresignRequest, SaveUpload};

use crate::client::ApiClient;

/// The outcome of a completed two-step upload.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Durable content URL.
    pub file_url: String,
    /// Content type sent with the `PUT`.
    pub file_type: String,
    /// Original file name.
    pub file_name: String,
}

/// `/api/upload` surface plus the direct storage `PUT`.
pub struct UploadApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Upload endpoints.
    pub fn uploads(&self) -> UploadApi<'_> {
        UploadApi { client: self }
    }
}

impl UploadApi<'_> {
    /// Request a time-limited write URL for a direct storage upload.
    pub async fn presign(&self, file_name: &str, file_type: &str) -> AppResult<PresignGrant> {
        self.client
            .post_json(
                "/api/upload/presigned-url",
                &PresignRequest {
                    file_name: file_name.to_string(),
                    file_type: file_type.to_string(),
                },
            )
            .await
    }

    /// Execute the direct `PUT` against the grant.
    ///
    /// No retry, no checksum, no resumability. If this step fails the
    /// grant is simply orphaned; nothing cleans it up.
    pub async fn put_bytes(
        &self,
        grant: &PresignGrant,
        content_type: &str,
        bytes: Bytes,
    ) -> AppResult<()> {
        let response = self
            .client
            .http()
            .put(&grant.upload_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Upload, format!("Direct upload failed: {e}"), e)
            })?;
        if !response.status().is_success() {
            return Err(AppError::upload(format!(
                "Direct upload rejected with status {}",
                response.status()
            )));
        }
        Ok(())
    }

    /// Upload a local file: infer its content type, presign, `PUT`.
    pub async fn upload_path(&self, path: &Path) -> AppResult<UploadedFile> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::validation(format!("Bad file path: {}", path.display())))?
            .to_string();

        let metadata = tokio::fs::metadata(path).await?;
        let limit = self.client.config().upload.max_upload_bytes();
        if metadata.len() > limit {
            return Err(AppError::validation(format!(
                "{} is {} bytes; the limit is {} bytes",
                file_name,
                metadata.len(),
                limit
            )));
        }

        let file_type = mime_guess::from_path(path)
            .first_raw()
            .map(str::to_string)
            .unwrap_or_else(|| self.client.config().upload.fallback_content_type.clone());

        let bytes = Bytes::from(tokio::fs::read(path).await?);
        let grant = self.presign(&file_name, &file_type).await?;
        self.put_bytes(&grant, &file_type, bytes).await?;

        tracing::debug!("Uploaded {} as {}", file_name, grant.file_url);
        Ok(UploadedFile {
            file_url: grant.file_url,
            file_type,
            file_name,
        })
    }

    /// The shared file library (previous uploads available for reuse).
    pub async fn existing(&self) -> AppResult<Vec<LibraryFile>> {
        self.client.get_json("/api/upload/existing").await
    }

    /// Register an upload in the shared library.
    pub async fn save(&self, upload: &SaveUpload) -> AppResult<()> {
        self.client
            .post_envelope("/api/upload/save", upload, "save upload")
            .await
    }
}
