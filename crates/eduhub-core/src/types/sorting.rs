//! Sibling-ordering types for the content-tree reorder flow.

use serde::{Deserialize, Serialize};

use crate::types::id::NodeId;

/// Direction of a manual reorder step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Swap with the previous sibling.
    Up,
    /// Swap with the next sibling.
    Down,
}

impl SortDirection {
    /// Return the wire name for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A single `(id, sort_order)` pair from the post-reorder flatten.
///
/// After any successful reorder the whole tree is flattened pre-order and
/// every node's flattened position becomes its new sort order; the full
/// list is persisted in one batch call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortUpdate {
    /// The node being repositioned.
    pub id: NodeId,
    /// The node's new sort order.
    pub sort_order: i32,
}

impl SortUpdate {
    /// Create a new sort update.
    pub fn new(id: NodeId, sort_order: i32) -> Self {
        Self { id, sort_order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_wire_names() {
        assert_eq!(SortDirection::Up.as_str(), "up");
        assert_eq!(
            serde_json::to_string(&SortDirection::Down).unwrap(),
            "\"down\""
        );
    }

    #[test]
    fn test_sort_update_wire_shape() {
        let update = SortUpdate::new(NodeId::new(3), 1);
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"id":3,"sort_order":1}"#
        );
    }
}
