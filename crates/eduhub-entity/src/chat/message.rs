//! Chat message entity and the socket event payloads.

use serde::{Deserialize, Serialize};

use eduhub_core::types::{GroupId, MessageId, UserId};

/// A file attached to a chat message, produced by the presigned upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Durable content URL.
    pub file_url: String,
    /// Content type of the upload.
    #[serde(default)]
    pub file_type: Option<String>,
    /// Original file name.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// A chat message row / live event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier.
    pub id: MessageId,
    /// The group the message belongs to.
    pub group_id: GroupId,
    /// The author.
    #[serde(default)]
    pub sender_id: Option<UserId>,
    /// Message text; `None` for attachment-only messages.
    #[serde(default)]
    pub message: Option<String>,
    /// Optional attachment.
    #[serde(default)]
    pub attachment: Option<Attachment>,
    /// 1 once the message has been deleted for everyone.
    #[serde(default)]
    pub deleted_for_all: i64,
    /// Creation timestamp, when the backend includes it.
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ChatMessage {
    /// Whether the message has been deleted for everyone.
    pub fn is_deleted(&self) -> bool {
        self.deleted_for_all == 1
    }
}

/// Events the console sends over the chat socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Subscribe to a group's events.
    JoinGroup {
        /// The group to join.
        group_id: GroupId,
    },
    /// Send a message into the current group.
    SendMessage {
        /// Target group.
        group_id: GroupId,
        /// Message text; `None` for attachment-only messages.
        message: Option<String>,
        /// Optional attachment.
        attachment: Option<Attachment>,
    },
    /// Broadcast a message deletion.
    DeleteMessage {
        /// The deleted message.
        #[serde(rename = "messageId")]
        message_id: MessageId,
        /// The group it belonged to.
        #[serde(rename = "groupId")]
        group_id: GroupId,
    },
}

/// Events the backend pushes over the chat socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// A new message in a joined group.
    NewMessage(ChatMessage),
    /// A message was deleted for everyone.
    MessageDeleted {
        /// The deleted message.
        #[serde(rename = "messageId")]
        message_id: MessageId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_event_wire_shape() {
        let event = ClientEvent::JoinGroup {
            group_id: GroupId::new(5),
        };
        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"event":"join-group","data":{"group_id":5}}"#
        );
    }

    #[test]
    fn test_server_event_round_trip() {
        let raw = r#"{"event":"message-deleted","data":{"messageId":12}}"#;
        let event: ServerEvent = serde_json::from_str(raw).unwrap();
        match event {
            ServerEvent::MessageDeleted { message_id } => {
                assert_eq!(message_id, MessageId::new(12));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_deleted_flag() {
        let raw = r#"{"id":1,"group_id":2,"deleted_for_all":1}"#;
        let msg: ChatMessage = serde_json::from_str(raw).unwrap();
        assert!(msg.is_deleted());
    }
}
