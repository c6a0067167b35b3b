//! The content-tree node shared by the file manager, the picker, and the
//! course-structure editor.

use serde::{Deserialize, Serialize};

use eduhub_core::types::NodeId;

/// Node kind discriminant. Files never carry children; folders never carry
/// file metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A folder grouping other nodes.
    Folder,
    /// A leaf file (pdf, video, audio, image).
    File,
}

impl NodeKind {
    /// Return the kind as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

/// Derived tri-state checkbox state of a node in the picker.
///
/// A folder is `Full` iff all descendant leaves are selected, `None` iff
/// none are, `Partial` otherwise. Recomputed from scratch after every
/// selection toggle; never trusted across mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectState {
    /// No descendant leaf selected.
    #[default]
    None,
    /// Some but not all descendant leaves selected.
    Partial,
    /// Every descendant leaf selected.
    Full,
}

/// A folder or file entry in a content hierarchy.
///
/// Mirrors the backend tree payload (`GET /api/fm/tree` and the
/// course-structure section forests). The `selected`/`state`/`is_open`
/// fields are client-only bookkeeping for the tree editor and never cross
/// the wire in either direction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Server-assigned identifier, unique within a loaded forest.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// Folder or file.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Durable content URL (file variant only).
    #[serde(default)]
    pub file_url: Option<String>,
    /// Content kind tag, e.g. `pdf`, `video`, `audio` (file variant only).
    #[serde(default)]
    pub file_type: Option<String>,
    /// Thumbnail URL (file variant only).
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    /// Ordered children; always empty for files.
    #[serde(default)]
    pub children: Vec<Node>,
    /// Locked nodes reject move and reorder operations.
    #[serde(default)]
    pub is_locked: bool,
    /// Persisted sibling position.
    #[serde(default)]
    pub sort_order: i32,

    /// Client-only: whether the node is checked in a picker.
    #[serde(skip)]
    pub selected: bool,
    /// Client-only: derived tri-state checkbox state.
    #[serde(skip)]
    pub state: SelectState,
    /// Client-only: expand/collapse state in the tree view.
    #[serde(skip)]
    pub is_open: bool,
}

impl Node {
    /// Construct a folder node. Intended for tests and local scaffolding;
    /// real nodes come from the backend.
    pub fn folder(id: impl Into<NodeId>, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::Folder,
            file_url: None,
            file_type: None,
            thumbnail_url: None,
            children,
            is_locked: false,
            sort_order: 0,
            selected: false,
            state: SelectState::None,
            is_open: false,
        }
    }

    /// Construct a file node.
    pub fn file(id: impl Into<NodeId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: NodeKind::File,
            file_url: None,
            file_type: None,
            thumbnail_url: None,
            children: Vec::new(),
            is_locked: false,
            sort_order: 0,
            selected: false,
            state: SelectState::None,
            is_open: false,
        }
    }

    /// Mark the node locked (builder style, for tests).
    pub fn locked(mut self) -> Self {
        self.is_locked = true;
        self
    }

    /// Whether the node is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Whether the node is a file.
    pub fn is_file(&self) -> bool {
        self.kind == NodeKind::File
    }

    /// A copy of this subtree with all client-only bookkeeping cleared.
    ///
    /// Picker results hand these to callers so that a selected folder's
    /// internal `selected=true` descendants don't leak out of the picker.
    pub fn cleaned(&self) -> Node {
        Node {
            id: self.id,
            name: self.name.clone(),
            kind: self.kind,
            file_url: self.file_url.clone(),
            file_type: self.file_type.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            children: self.children.iter().map(Node::cleaned).collect(),
            is_locked: self.is_locked,
            sort_order: self.sort_order,
            selected: false,
            state: SelectState::None,
            is_open: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_round_trip() {
        let raw = r#"{
            "id": 10,
            "name": "Unit 1",
            "type": "folder",
            "is_locked": true,
            "sort_order": 2,
            "children": [
                {"id": 11, "name": "intro.pdf", "type": "file",
                 "file_url": "https://cdn.example.com/intro.pdf",
                 "file_type": "pdf", "thumbnail_url": null}
            ]
        }"#;
        let node: Node = serde_json::from_str(raw).unwrap();
        assert!(node.is_folder());
        assert!(node.is_locked);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].file_type.as_deref(), Some("pdf"));
        // Client-only fields default and never deserialize.
        assert!(!node.selected);
        assert_eq!(node.state, SelectState::None);
    }

    #[test]
    fn test_transient_fields_never_serialize() {
        let mut node = Node::file(1, "a.pdf");
        node.selected = true;
        node.is_open = true;
        let json = serde_json::to_string(&node).unwrap();
        assert!(!json.contains("selected"));
        assert!(!json.contains("is_open"));
        assert!(!json.contains("state"));
    }

    #[test]
    fn test_cleaned_resets_whole_subtree() {
        let mut child = Node::file(2, "b.pdf");
        child.selected = true;
        let mut root = Node::folder(1, "docs", vec![child]);
        root.selected = true;
        root.state = SelectState::Full;

        let clean = root.cleaned();
        assert!(!clean.selected);
        assert!(!clean.children[0].selected);
        assert_eq!(clean.state, SelectState::None);
    }
}
