//! The authenticated HTTP client every API surface borrows.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use eduhub_core::config::AppConfig;
use eduhub_core::error::ErrorKind;
use eduhub_core::types::ApiEnvelope;
use eduhub_core::{AppError, AppResult};

use crate::session::Session;

/// Shared client: HTTP connection pool, backend base URL, and the injected
/// session. All per-resource API surfaces are thin views over this.
pub struct ApiClient {
    http: reqwest::Client,
    config: AppConfig,
    session: Session,
}

impl ApiClient {
    /// Build a client from configuration, loading any persisted session.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let session = Session::from_config(&config.auth)?;
        Self::with_session(config, session)
    }

    /// Build a client around an explicit session (used by tests).
    pub fn with_session(config: AppConfig, session: Session) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Network, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            http,
            config,
            session,
        })
    }

    /// The active session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The raw HTTP client, for requests outside the backend (the direct
    /// presigned `PUT`).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        self.config.api.endpoint(path)
    }

    /// Start a request with the bearer token attached when present.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and deserialize a JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> AppResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Network, format!("Request failed: {e}"), e))?;
        let response = Self::check_status(response).await?;
        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Failed to decode response: {e}"),
                e,
            )
        })
    }

    /// `GET` a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send_json(self.request(Method::GET, path)).await
    }

    /// `GET` a JSON body with query parameters.
    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        self.send_json(self.request(Method::GET, path).query(query))
            .await
    }

    /// `POST` a JSON body, decode a JSON response.
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send_json(self.request(Method::POST, path).json(body))
            .await
    }

    /// `PUT` a JSON body, decode a JSON response.
    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        self.send_json(self.request(Method::PUT, path).json(body))
            .await
    }

    /// `DELETE`, decode a JSON response.
    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.send_json(self.request(Method::DELETE, path)).await
    }

    /// `DELETE` where only the status matters; the body is ignored.
    pub(crate) async fn delete_ok(&self, path: &str) -> AppResult<()> {
        let response = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Network, format!("Request failed: {e}"), e))?;
        Self::check_status(response).await.map(|_| ())
    }

    /// `POST` a JSON body where the response is only the success envelope.
    pub(crate) async fn post_envelope<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        action: &str,
    ) -> AppResult<()> {
        let envelope: ApiEnvelope = self.post_json(path, body).await?;
        Self::ensure_success(envelope, action)
    }

    /// `PUT` a JSON body where the response is only the success envelope.
    pub(crate) async fn put_envelope<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        action: &str,
    ) -> AppResult<()> {
        let envelope: ApiEnvelope = self.put_json(path, body).await?;
        Self::ensure_success(envelope, action)
    }

    /// Turn `{ success: false }` into an error.
    pub(crate) fn ensure_success(envelope: ApiEnvelope, action: &str) -> AppResult<()> {
        if envelope.success {
            Ok(())
        } else {
            Err(AppError::api(
                envelope.message_or(&format!("Backend rejected: {action}")),
            ))
        }
    }

    async fn check_status(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .ok()
            .filter(|body| !body.is_empty())
            .and_then(|body| {
                serde_json::from_str::<ApiEnvelope>(&body)
                    .ok()
                    .and_then(|e| e.message)
                    .or(Some(body))
            })
            .unwrap_or_else(|| status.to_string());

        let kind = match status {
            StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
            StatusCode::FORBIDDEN => ErrorKind::Authorization,
            StatusCode::NOT_FOUND => ErrorKind::NotFound,
            StatusCode::CONFLICT => ErrorKind::Conflict,
            s if s.is_client_error() => ErrorKind::Validation,
            _ => ErrorKind::Api,
        };
        Err(AppError::new(kind, message))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.api.base_url)
            .field("session", &self.session)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    fn client() -> ApiClient {
        let config = AppConfig::default();
        let session = Session::new(Box::new(MemoryTokenStore::default())).unwrap();
        ApiClient::with_session(config, session).unwrap()
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let client = client();
        assert_eq!(
            client.url("/api/fm/tree"),
            "http://localhost:5000/api/fm/tree"
        );
    }

    #[test]
    fn test_ensure_success_maps_failure_message() {
        let envelope: ApiEnvelope =
            serde_json::from_str(r#"{"success":false,"message":"no such course"}"#).unwrap();
        let err = ApiClient::ensure_success(envelope, "save").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Api);
        assert_eq!(err.message, "no such course");
    }
}
