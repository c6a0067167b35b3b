//! Chat socket configuration.

use serde::{Deserialize, Serialize};

/// Settings for the admin chat websocket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Websocket URL of the chat gateway. Empty means "derive from the
    /// API base URL by swapping the scheme to ws(s)".
    #[serde(default)]
    pub socket_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            socket_url: String::new(),
        }
    }
}

impl ChatConfig {
    /// Resolve the socket URL, deriving it from the API base URL when not
    /// configured explicitly.
    pub fn resolve_socket_url(&self, api_base_url: &str) -> String {
        if !self.socket_url.is_empty() {
            return self.socket_url.clone();
        }
        let derived = api_base_url
            .replacen("https://", "wss://", 1)
            .replacen("http://", "ws://", 1);
        format!("{}/ws/chat", derived.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_ws_url_from_api_base() {
        let config = ChatConfig::default();
        assert_eq!(
            config.resolve_socket_url("https://api.example.com"),
            "wss://api.example.com/ws/chat"
        );
    }

    #[test]
    fn test_explicit_url_wins() {
        let config = ChatConfig {
            socket_url: "wss://chat.example.com".to_string(),
        };
        assert_eq!(
            config.resolve_socket_url("http://localhost:5000"),
            "wss://chat.example.com"
        );
    }
}
