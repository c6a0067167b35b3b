//! Expand/collapse view state and flattened rendering rows.

use eduhub_core::types::NodeId;
use eduhub_entity::node::Node;

/// A renderable row: one visible node and its depth. Indentation in the
/// tree view is proportional to `depth`.
#[derive(Debug, Clone, Copy)]
pub struct TreeRow<'a> {
    /// Depth below the forest root (0 for top-level nodes).
    pub depth: usize,
    /// The node to render.
    pub node: &'a Node,
}

/// Toggle a folder's disclosure state without affecting selection.
pub fn toggle_open(forest: &[Node], id: NodeId) -> Vec<Node> {
    forest
        .iter()
        .map(|node| {
            let mut copy = node.clone();
            if copy.id == id {
                copy.is_open = !copy.is_open;
            } else {
                copy.children = toggle_open(&copy.children, id);
            }
            copy
        })
        .collect()
}

/// Flatten the forest into visible rows: children appear only under open
/// folders.
pub fn visible_rows(forest: &[Node]) -> Vec<TreeRow<'_>> {
    let mut rows = Vec::new();
    collect_rows(forest, 0, &mut rows);
    rows
}

fn collect_rows<'a>(forest: &'a [Node], depth: usize, rows: &mut Vec<TreeRow<'a>>) {
    for node in forest {
        rows.push(TreeRow { depth, node });
        if node.is_folder() && node.is_open {
            collect_rows(&node.children, depth + 1, rows);
        }
    }
}
