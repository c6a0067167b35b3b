//! Admin chat REST endpoints. Live events go through
//! [`ChatSocket`](crate::ChatSocket).

use eduhub_core::types::{GroupId, MessageId};
use eduhub_core::AppResult;
use eduhub_entity::chat::{ChatGroup, ChatMessage, CreateGroup, GroupMember, UpdateGroup};
use eduhub_entity::course::Course;
use eduhub_entity::user::PlatformUser;

use crate::client::ApiClient;
use crate::socket::ChatSocket;

/// `/api/chat` surface.
pub struct ChatApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Chat endpoints.
    pub fn chat(&self) -> ChatApi<'_> {
        ChatApi { client: self }
    }
}

impl ChatApi<'_> {
    /// Groups the admin can see.
    pub async fn groups(&self) -> AppResult<Vec<ChatGroup>> {
        self.client.get_json("/api/chat/groups").await
    }

    /// Message history of a group.
    pub async fn messages(&self, group_id: GroupId) -> AppResult<Vec<ChatMessage>> {
        self.client
            .get_json(&format!("/api/chat/groups/{group_id}/messages"))
            .await
    }

    /// Members of a group.
    pub async fn members(&self, group_id: GroupId) -> AppResult<Vec<GroupMember>> {
        self.client
            .get_json(&format!("/api/chat/groups/{group_id}/members"))
            .await
    }

    /// Create a group.
    pub async fn create_group(&self, group: &CreateGroup) -> AppResult<()> {
        self.client
            .post_envelope("/api/chat/group", group, "create group")
            .await
    }

    /// Update a group's name or avatar.
    pub async fn update_group(&self, group_id: GroupId, group: &UpdateGroup) -> AppResult<()> {
        self.client
            .put_envelope(&format!("/api/chat/group/{group_id}"), group, "update group")
            .await
    }

    /// Delete a message for everyone. The caller broadcasts the deletion
    /// over the socket afterwards, matching the backend's contract.
    pub async fn delete_message(&self, message_id: MessageId) -> AppResult<()> {
        self.client
            .delete_ok(&format!("/api/chat/messages/{message_id}"))
            .await
    }

    /// Every platform user, for the member picker.
    pub async fn all_users(&self) -> AppResult<Vec<PlatformUser>> {
        self.client.get_json("/api/users/all").await
    }

    /// Courses with enrolled users, for course-wide group membership.
    pub async fn courses_with_users(&self) -> AppResult<Vec<Course>> {
        self.client.get_json("/api/courses/with-users").await
    }

    /// Open the live event socket, authenticated with the session token.
    pub async fn connect_socket(&self) -> AppResult<ChatSocket> {
        let url = self
            .client
            .config()
            .chat
            .resolve_socket_url(&self.client.config().api.base_url);
        ChatSocket::connect(&url, self.client.session().token().as_deref()).await
    }
}
