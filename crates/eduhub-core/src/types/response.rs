//! Response envelope used by most backend endpoints.

use serde::{Deserialize, Serialize};

/// The `{ success, message, ... }` envelope most mutation endpoints return.
///
/// Extra payload fields are endpoint-specific; callers deserialize those
/// separately when they need them. The envelope alone is enough to decide
/// whether the operation took effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope {
    /// Whether the backend applied the operation.
    #[serde(default)]
    pub success: bool,
    /// Optional human-readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiEnvelope {
    /// Return the backend message or a fallback.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message.clone().unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_failure_when_fields_missing() {
        let envelope: ApiEnvelope = serde_json::from_str("{}").unwrap();
        assert!(!envelope.success);
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_message_fallback() {
        let envelope: ApiEnvelope = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(envelope.message_or("done"), "done");
    }
}
