//! File-manager tree endpoints.

use async_trait::async_trait;
use serde::Serialize;

use eduhub_core::types::{NodeId, SortUpdate};
use eduhub_core::AppResult;
use eduhub_entity::node::Node;

use crate::client::ApiClient;
use crate::tree_store::TreeStore;

/// `/api/fm` surface.
pub struct FileManagerApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// File-manager endpoints.
    pub fn files(&self) -> FileManagerApi<'_> {
        FileManagerApi { client: self }
    }
}

#[derive(Serialize)]
struct CreateFolderRequest<'a> {
    #[serde(rename = "parentId")]
    parent_id: Option<NodeId>,
    name: &'a str,
}

#[derive(Serialize)]
struct CreateFileRequest<'a> {
    #[serde(rename = "parentId")]
    parent_id: Option<NodeId>,
    name: &'a str,
    #[serde(rename = "fileType")]
    file_type: &'a str,
    #[serde(rename = "fileUrl")]
    file_url: &'a str,
    #[serde(rename = "thumbnailUrl")]
    thumbnail_url: Option<&'a str>,
}

#[derive(Serialize)]
struct MoveRequest {
    id: NodeId,
    #[serde(rename = "newParentId")]
    new_parent_id: Option<NodeId>,
}

#[derive(Serialize)]
struct LockRequest {
    id: NodeId,
}

#[derive(Serialize)]
struct RenameRequest<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct SortRequest<'a> {
    updates: &'a [SortUpdate],
}

impl FileManagerApi<'_> {
    /// Fetch the full file-manager tree.
    pub async fn tree(&self) -> AppResult<Vec<Node>> {
        self.client.get_json("/api/fm/tree").await
    }

    /// Create a folder under `parent_id` (root when `None`).
    pub async fn create_folder(&self, parent_id: Option<NodeId>, name: &str) -> AppResult<()> {
        self.client
            .post_envelope(
                "/api/fm/folder",
                &CreateFolderRequest { parent_id, name },
                "create folder",
            )
            .await
    }

    /// Register an uploaded file under `parent_id`.
    pub async fn create_file(
        &self,
        parent_id: Option<NodeId>,
        name: &str,
        file_type: &str,
        file_url: &str,
        thumbnail_url: Option<&str>,
    ) -> AppResult<()> {
        self.client
            .post_envelope(
                "/api/fm/file",
                &CreateFileRequest {
                    parent_id,
                    name,
                    file_type,
                    file_url,
                    thumbnail_url,
                },
                "create file",
            )
            .await
    }

    /// Re-parent a node. `new_parent_id = None` moves it to the root.
    pub async fn move_node(&self, id: NodeId, new_parent_id: Option<NodeId>) -> AppResult<()> {
        self.client
            .post_envelope("/api/fm/move", &MoveRequest { id, new_parent_id }, "move")
            .await
    }

    /// Flip a node's lock flag.
    pub async fn toggle_lock(&self, id: NodeId) -> AppResult<()> {
        self.client
            .post_envelope("/api/fm/lock", &LockRequest { id }, "toggle lock")
            .await
    }

    /// Delete a node and its subtree.
    pub async fn delete(&self, id: NodeId) -> AppResult<()> {
        self.client.delete_ok(&format!("/api/fm/{id}")).await
    }

    /// Rename a node through the generic node update.
    pub async fn rename(&self, id: NodeId, name: &str) -> AppResult<()> {
        self.client
            .put_envelope(
                &format!("/api/fm/node/{id}"),
                &RenameRequest { name },
                "rename",
            )
            .await
    }

    /// Persist the post-reorder sort batch. Fire-and-forget at call sites:
    /// the tree editor logs failures and moves on.
    pub async fn persist_sort(&self, updates: &[SortUpdate]) -> AppResult<()> {
        self.client
            .put_envelope("/api/fm/sort", &SortRequest { updates }, "persist sort")
            .await
    }
}

#[async_trait]
impl TreeStore for FileManagerApi<'_> {
    async fn fetch(&self) -> AppResult<Vec<Node>> {
        self.tree().await
    }

    async fn create_folder(&self, parent_id: Option<NodeId>, name: &str) -> AppResult<()> {
        FileManagerApi::create_folder(self, parent_id, name).await
    }

    async fn remove(&self, id: NodeId) -> AppResult<()> {
        self.delete(id).await
    }

    async fn toggle_lock(&self, id: NodeId) -> AppResult<()> {
        FileManagerApi::toggle_lock(self, id).await
    }

    async fn persist_sort(&self, updates: &[SortUpdate]) -> AppResult<()> {
        FileManagerApi::persist_sort(self, updates).await
    }
}
