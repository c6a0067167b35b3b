//! Structural mutators. Each returns a new forest; the input is never
//! modified.

use eduhub_core::types::{NodeId, SortDirection, SortUpdate};
use eduhub_core::{AppError, AppResult};
use eduhub_entity::node::{Node, NodeKind};

/// Rename the node with the given id, wherever it sits in the forest.
///
/// Sibling order and every other node are untouched. A missing id is a
/// user-facing rejection, not a silent no-op.
pub fn rename(forest: &[Node], id: NodeId, new_name: &str) -> AppResult<Vec<Node>> {
    let mut renamed = false;
    let out = rename_in(forest, id, new_name, &mut renamed);
    if renamed {
        Ok(out)
    } else {
        Err(AppError::not_found(format!("No node with id {id}")))
    }
}

fn rename_in(forest: &[Node], id: NodeId, new_name: &str, renamed: &mut bool) -> Vec<Node> {
    forest
        .iter()
        .map(|node| {
            let mut copy = node.clone();
            if copy.id == id {
                copy.name = new_name.to_string();
                *renamed = true;
            } else {
                copy.children = rename_in(&copy.children, id, new_name, renamed);
            }
            copy
        })
        .collect()
}

/// Remove the node with the given id at any depth, pruning its whole
/// subtree. Sibling order is preserved; a missing id leaves the forest
/// unchanged.
pub fn remove(forest: &[Node], id: NodeId) -> Vec<Node> {
    forest
        .iter()
        .filter(|node| node.id != id)
        .map(|node| {
            let mut copy = node.clone();
            copy.children = remove(&copy.children, id);
            copy
        })
        .collect()
}

/// Resolve the new parent for a drag-and-drop move.
///
/// Dropping onto a folder re-parents under it; dropping onto a file moves
/// the node to the root. The client never splices the moved node locally —
/// it requests the move and reloads, so this resolution is the whole of
/// the local computation.
pub fn resolve_move_parent(drop_id: NodeId, drop_kind: NodeKind) -> Option<NodeId> {
    match drop_kind {
        NodeKind::Folder => Some(drop_id),
        NodeKind::File => None,
    }
}

/// Swap the node with its previous or next sibling.
///
/// The first sibling list (depth-first) containing the id is the one
/// reordered. A swap against the boundary (already first/last) succeeds
/// without changing anything. Locked nodes reject with no state change.
pub fn reorder(forest: &[Node], id: NodeId, direction: SortDirection) -> AppResult<Vec<Node>> {
    match crate::query::find(forest, id) {
        None => return Err(AppError::not_found(format!("No node with id {id}"))),
        Some(node) if node.is_locked => {
            return Err(AppError::locked(format!(
                "'{}' is locked and cannot be moved",
                node.name
            )));
        }
        Some(_) => {}
    }

    let mut out = forest.to_vec();
    reorder_in(&mut out, id, direction);
    Ok(out)
}

fn reorder_in(list: &mut [Node], id: NodeId, direction: SortDirection) -> bool {
    if let Some(idx) = list.iter().position(|n| n.id == id) {
        match direction {
            SortDirection::Up if idx > 0 => list.swap(idx, idx - 1),
            SortDirection::Down if idx + 1 < list.len() => list.swap(idx, idx + 1),
            _ => {}
        }
        return true;
    }
    for node in list {
        if reorder_in(&mut node.children, id, direction) {
            return true;
        }
    }
    false
}

/// Flatten the whole forest pre-order (parents before children) into
/// `(id, sort_order)` pairs, the flattened position being the new sort
/// order. Persisted in one batch call after every successful reorder —
/// all of it, not just the affected siblings.
pub fn flatten_sort_updates(forest: &[Node]) -> Vec<SortUpdate> {
    let mut updates = Vec::new();
    let mut position = 0i32;
    flatten_in(forest, &mut updates, &mut position);
    updates
}

fn flatten_in(forest: &[Node], updates: &mut Vec<SortUpdate>, position: &mut i32) {
    for node in forest {
        updates.push(SortUpdate::new(node.id, *position));
        *position += 1;
        flatten_in(&node.children, updates, position);
    }
}
