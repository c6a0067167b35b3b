//! Admin login and platform-user administration.

use serde::{Deserialize, Serialize};

use eduhub_core::types::{PageRequest, Paginated, UserId};
use eduhub_core::{AppError, AppResult};
use eduhub_entity::user::{PlatformUser, ToggleBan};

use crate::client::ApiClient;

/// `/api/auth` surface.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Auth and user-administration endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct UsersResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    users: Vec<PlatformUser>,
    #[serde(default, rename = "totalPages")]
    total_pages: Option<u64>,
}

impl AuthApi<'_> {
    /// Log in and adopt the issued token into the session.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<()> {
        let response: LoginResponse = self
            .client
            .post_json("/api/auth/login", &LoginRequest { email, password })
            .await
            .map_err(|e| {
                if e.is_authentication() {
                    AppError::authentication("Invalid credentials")
                } else {
                    e
                }
            })?;
        self.client.session().set_token(&response.token)?;
        tracing::info!("Logged in as {email}");
        Ok(())
    }

    /// Drop the saved session.
    pub fn logout(&self) -> AppResult<()> {
        self.client.session().clear()
    }

    /// One page of platform users.
    pub async fn users(&self, page: &PageRequest) -> AppResult<Paginated<PlatformUser>> {
        let response: UsersResponse = self
            .client
            .get_json_query(
                "/api/auth/get-users",
                &[
                    ("page", page.page.to_string()),
                    ("limit", page.limit.to_string()),
                ],
            )
            .await?;
        if !response.success {
            return Err(AppError::api(
                response
                    .message
                    .unwrap_or_else(|| "Failed to fetch users".to_string()),
            ));
        }
        Ok(Paginated::new(
            response.users,
            page.page,
            response.total_pages.unwrap_or(1),
        ))
    }

    /// Ban or unban a platform user.
    pub async fn toggle_ban(&self, user_id: UserId, banned: bool) -> AppResult<()> {
        self.client
            .post_envelope(
                "/api/auth/toggle-ban",
                &ToggleBan { user_id, banned },
                "toggle ban",
            )
            .await
    }
}
