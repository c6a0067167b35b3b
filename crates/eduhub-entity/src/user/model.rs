//! Platform user entity model.
//!
//! These are the learning platform's end users as the admin backend
//! reports them. Boolean-ish columns arrive as `0`/`1` integers; they are
//! kept verbatim and exposed through predicate helpers.

use serde::{Deserialize, Serialize};

use eduhub_core::types::UserId;

/// A platform user row from `GET /api/auth/get-users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformUser {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub image: Option<String>,
    /// 1 when the account was created through Google sign-in.
    #[serde(default)]
    pub is_google: i64,
    /// 1 when the account is banned.
    #[serde(default)]
    pub is_banned: i64,
}

impl PlatformUser {
    /// Whether the account was created through Google sign-in.
    pub fn is_google_login(&self) -> bool {
        self.is_google == 1
    }

    /// Whether the account is currently banned.
    pub fn is_banned(&self) -> bool {
        self.is_banned == 1
    }

    /// Display name with a fallback.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// Body of `POST /api/auth/toggle-ban`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleBan {
    /// The user being banned or unbanned.
    #[serde(rename = "userId")]
    pub user_id: UserId,
    /// The desired banned state.
    pub banned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_flags() {
        let raw = r#"{"id": 9, "name": "Asha", "is_google": 1, "is_banned": 0}"#;
        let user: PlatformUser = serde_json::from_str(raw).unwrap();
        assert!(user.is_google_login());
        assert!(!user.is_banned());
        assert_eq!(user.display_name(), "Asha");
    }

    #[test]
    fn test_toggle_ban_wire_names() {
        let body = ToggleBan {
            user_id: UserId::new(9),
            banned: true,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"userId":9,"banned":true}"#
        );
    }
}
