//! Chat group entity models.

use serde::{Deserialize, Serialize};

use eduhub_core::types::{CourseId, GroupId, UserId};

/// A chat group row from `GET /api/chat/groups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatGroup {
    /// Unique group identifier.
    pub id: GroupId,
    /// Group name.
    pub name: String,
    /// Group avatar URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Number of members, when the backend includes it.
    #[serde(default)]
    pub member_count: Option<u64>,
}

/// A member row from `GET /api/chat/groups/:id/members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMember {
    /// The member's user id.
    pub id: UserId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Body of `POST /api/chat/group`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    /// Group name.
    pub name: String,
    /// Group avatar URL from the presigned upload.
    #[serde(default)]
    pub image: Option<String>,
    /// Enroll every user of these courses.
    #[serde(default, rename = "courseIds")]
    pub course_ids: Vec<CourseId>,
    /// Additional individual members.
    #[serde(default, rename = "userIds")]
    pub user_ids: Vec<UserId>,
}

/// Body of `PUT /api/chat/group/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroup {
    /// New group name.
    #[serde(default)]
    pub name: Option<String>,
    /// New avatar URL.
    #[serde(default)]
    pub image: Option<String>,
}
