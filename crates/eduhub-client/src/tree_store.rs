//! The seam between the tree editor and its two remote backends.

use async_trait::async_trait;

use eduhub_core::types::{NodeId, SortUpdate};
use eduhub_core::AppResult;
use eduhub_entity::node::Node;

/// Remote persistence for a content tree.
///
/// Implemented by the file-manager backend and by each course-structure
/// section. The contract mirrors the sync model everywhere in this
/// console: mutate remotely, then [`fetch`](Self::fetch) the whole
/// authoritative tree again — implementations never patch incrementally,
/// and callers must expect the reload to be the only reconciliation step.
/// Operations specific to one backend (drag-and-drop moves, library
/// imports, thumbnail swaps) live on the concrete API surfaces.
#[async_trait]
pub trait TreeStore: Send + Sync {
    /// Fetch the full authoritative tree.
    async fn fetch(&self) -> AppResult<Vec<Node>>;

    /// Create a folder under `parent_id` (root when `None`).
    async fn create_folder(&self, parent_id: Option<NodeId>, name: &str) -> AppResult<()>;

    /// Delete a node and its subtree.
    async fn remove(&self, id: NodeId) -> AppResult<()>;

    /// Flip a node's lock flag.
    async fn toggle_lock(&self, id: NodeId) -> AppResult<()>;

    /// Persist the post-reorder `(id, sort_order)` batch for the whole
    /// tree.
    async fn persist_sort(&self, updates: &[SortUpdate]) -> AppResult<()>;
}
