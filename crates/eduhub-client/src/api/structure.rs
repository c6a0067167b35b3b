//! Course-structure endpoints: the three per-course section forests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use eduhub_core::types::{CourseId, NodeId, SortUpdate};
use eduhub_core::{AppError, AppResult};
use eduhub_entity::node::{Node, SectionKind, SectionSet};
use eduhub_entity::upload::VideoChapter;

use crate::client::ApiClient;
use crate::tree_store::TreeStore;

/// `/api/course-structure` surface.
pub struct CourseStructureApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Course-structure endpoints.
    pub fn structure(&self) -> CourseStructureApi<'_> {
        CourseStructureApi { client: self }
    }
}

#[derive(Deserialize)]
struct SectionsResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    sections: SectionSet,
}

#[derive(Serialize)]
struct SaveAllRequest<'a> {
    sections: &'a SectionSet,
}

#[derive(Serialize)]
struct CreateFolderRequest<'a> {
    #[serde(rename = "courseId")]
    course_id: CourseId,
    #[serde(rename = "sectionType")]
    section_type: SectionKind,
    name: &'a str,
    #[serde(rename = "parentId")]
    parent_id: Option<NodeId>,
}

#[derive(Serialize)]
struct UploadFileRequest<'a> {
    #[serde(rename = "courseId")]
    course_id: CourseId,
    #[serde(rename = "sectionType")]
    section_type: SectionKind,
    #[serde(rename = "parentId")]
    parent_id: Option<NodeId>,
    name: &'a str,
    file_url: Option<&'a str>,
    file_type: &'a str,
    thumbnail_url: Option<&'a str>,
    chapters: Option<&'a [VideoChapter]>,
}

#[derive(Serialize)]
struct AddFromLibraryRequest {
    #[serde(rename = "courseId")]
    course_id: CourseId,
    #[serde(rename = "sectionType")]
    section_type: SectionKind,
    #[serde(rename = "fmNodeId")]
    fm_node_id: NodeId,
    #[serde(rename = "parentId")]
    parent_id: Option<NodeId>,
}

#[derive(Serialize)]
struct LockRequest {
    id: NodeId,
}

#[derive(Serialize)]
struct ThumbnailRequest<'a> {
    thumbnail_url: &'a str,
}

#[derive(Serialize)]
struct ReplaceFileRequest<'a> {
    file_url: &'a str,
    file_type: &'a str,
}

#[derive(Serialize)]
struct SortRequest<'a> {
    updates: &'a [SortUpdate],
}

impl CourseStructureApi<'_> {
    /// Fetch all three section forests of a course.
    pub async fn sections(&self, course_id: CourseId) -> AppResult<SectionSet> {
        let response: SectionsResponse = self
            .client
            .get_json(&format!("/api/course-structure/course/{course_id}"))
            .await?;
        if !response.success {
            return Err(AppError::api(
                response
                    .message
                    .unwrap_or_else(|| "Failed to load course structure".to_string()),
            ));
        }
        Ok(response.sections)
    }

    /// Push the whole section set back (Save All). This is the only place
    /// locally staged renames reach the backend.
    pub async fn save_all(&self, course_id: CourseId, sections: &SectionSet) -> AppResult<()> {
        self.client
            .put_envelope(
                &format!("/api/course-structure/course/{course_id}"),
                &SaveAllRequest { sections },
                "save course structure",
            )
            .await
    }

    /// Create a folder in one section.
    pub async fn create_folder(
        &self,
        course_id: CourseId,
        section: SectionKind,
        name: &str,
        parent_id: Option<NodeId>,
    ) -> AppResult<()> {
        self.client
            .post_envelope(
                "/api/course-structure/create-folder",
                &CreateFolderRequest {
                    course_id,
                    section_type: section,
                    name,
                    parent_id,
                },
                "create folder",
            )
            .await
    }

    /// Register an uploaded file in one section.
    #[allow(clippy::too_many_arguments)]
    pub async fn upload_file(
        &self,
        course_id: CourseId,
        section: SectionKind,
        parent_id: Option<NodeId>,
        name: &str,
        file_url: Option<&str>,
        file_type: &str,
        thumbnail_url: Option<&str>,
        chapters: Option<&[VideoChapter]>,
    ) -> AppResult<()> {
        self.client
            .post_envelope(
                "/api/course-structure/upload-file",
                &UploadFileRequest {
                    course_id,
                    section_type: section,
                    parent_id,
                    name,
                    file_url,
                    file_type,
                    thumbnail_url,
                    chapters,
                },
                "upload file",
            )
            .await
    }

    /// Import a file-manager node into one section.
    ///
    /// Bulk imports loop over this; a mid-loop failure abandons the rest
    /// of the batch with no rollback of what already landed.
    pub async fn add_from_library(
        &self,
        course_id: CourseId,
        section: SectionKind,
        fm_node_id: NodeId,
        parent_id: Option<NodeId>,
    ) -> AppResult<()> {
        self.client
            .post_envelope(
                "/api/course-structure/add-from-fm",
                &AddFromLibraryRequest {
                    course_id,
                    section_type: section,
                    fm_node_id,
                    parent_id,
                },
                "add from file manager",
            )
            .await
    }

    /// Flip a node's lock flag.
    pub async fn toggle_lock(&self, id: NodeId) -> AppResult<()> {
        self.client
            .post_envelope("/api/course-structure/lock", &LockRequest { id }, "toggle lock")
            .await
    }

    /// Delete a node and its subtree.
    pub async fn delete_node(&self, id: NodeId) -> AppResult<()> {
        self.client
            .delete_ok(&format!("/api/course-structure/node/{id}"))
            .await
    }

    /// Point a file node at a new thumbnail.
    pub async fn set_thumbnail(&self, id: NodeId, thumbnail_url: &str) -> AppResult<()> {
        self.client
            .put_envelope(
                &format!("/api/course-structure/thumbnail/{id}"),
                &ThumbnailRequest { thumbnail_url },
                "set thumbnail",
            )
            .await
    }

    /// Swap a file node's content for a fresh upload.
    pub async fn replace_file(
        &self,
        id: NodeId,
        file_url: &str,
        file_type: &str,
    ) -> AppResult<()> {
        self.client
            .put_envelope(
                &format!("/api/course-structure/file/{id}"),
                &ReplaceFileRequest { file_url, file_type },
                "replace file",
            )
            .await
    }

    /// Persist the post-reorder sort batch.
    pub async fn persist_sort(&self, updates: &[SortUpdate]) -> AppResult<()> {
        self.client
            .put_envelope(
                "/api/course-structure/sort",
                &SortRequest { updates },
                "persist sort",
            )
            .await
    }
}

/// One course section viewed as a [`TreeStore`].
pub struct SectionTreeStore<'a> {
    client: &'a ApiClient,
    course_id: CourseId,
    section: SectionKind,
}

impl<'a> SectionTreeStore<'a> {
    /// Bind a course section to the tree-store seam.
    pub fn new(client: &'a ApiClient, course_id: CourseId, section: SectionKind) -> Self {
        Self {
            client,
            course_id,
            section,
        }
    }

    /// The section this store is bound to.
    pub fn section(&self) -> SectionKind {
        self.section
    }
}

#[async_trait]
impl TreeStore for SectionTreeStore<'_> {
    async fn fetch(&self) -> AppResult<Vec<Node>> {
        let sections = self.client.structure().sections(self.course_id).await?;
        Ok(sections.get(self.section).clone())
    }

    async fn create_folder(&self, parent_id: Option<NodeId>, name: &str) -> AppResult<()> {
        self.client
            .structure()
            .create_folder(self.course_id, self.section, name, parent_id)
            .await
    }

    async fn remove(&self, id: NodeId) -> AppResult<()> {
        self.client.structure().delete_node(id).await
    }

    async fn toggle_lock(&self, id: NodeId) -> AppResult<()> {
        self.client.structure().toggle_lock(id).await
    }

    async fn persist_sort(&self, updates: &[SortUpdate]) -> AppResult<()> {
        self.client.structure().persist_sort(updates).await
    }
}
