//! Session/token configuration.

use serde::{Deserialize, Serialize};

/// Settings for the persisted admin session.
///
/// The console keeps the bearer token in a file between runs — the analog
/// of the browser console's persistent token storage, except that the
/// token is loaded once into an explicit session object instead of being
/// read ad hoc by every component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the JSON file holding the saved session token.
    #[serde(default = "default_token_file")]
    pub token_file: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_file: default_token_file(),
        }
    }
}

fn default_token_file() -> String {
    ".eduhub/session.json".to_string()
}
