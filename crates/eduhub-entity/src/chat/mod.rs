//! Admin chat entities and socket event payloads.

pub mod group;
pub mod message;

pub use group::{ChatGroup, CreateGroup, GroupMember, UpdateGroup};
pub use message::{Attachment, ChatMessage, ClientEvent, ServerEvent};
