//! Tri-state selection engine for the picker tree.

use eduhub_core::types::NodeId;
use eduhub_entity::node::{Node, SelectState};

/// Toggle the selection of a node, then recompute every node's tri-state.
///
/// Toggling a folder forces the new boolean onto every descendant (deep
/// unconditional overwrite). Toggling a leaf flips only its own flag;
/// ancestors get their `state` recomputed but their own `selected` flag is
/// left alone. Callers depend on that asymmetry — do not "fix" it here.
pub fn toggle_select(forest: &[Node], id: NodeId) -> Vec<Node> {
    let toggled = toggle_in(forest, id);
    apply_states(&toggled)
}

fn toggle_in(forest: &[Node], id: NodeId) -> Vec<Node> {
    forest
        .iter()
        .map(|node| {
            let mut copy = node.clone();
            if copy.id == id {
                let new_value = !copy.selected;
                copy.selected = new_value;
                if copy.is_folder() {
                    copy.children = copy
                        .children
                        .iter()
                        .map(|child| overwrite_selection(child, new_value))
                        .collect();
                }
            } else {
                copy.children = toggle_in(&copy.children, id);
            }
            copy
        })
        .collect()
}

fn overwrite_selection(node: &Node, selected: bool) -> Node {
    let mut copy = node.clone();
    copy.selected = selected;
    copy.children = copy
        .children
        .iter()
        .map(|child| overwrite_selection(child, selected))
        .collect();
    copy
}

/// Recompute `state` for every node, bottom-up.
pub fn apply_states(forest: &[Node]) -> Vec<Node> {
    forest
        .iter()
        .map(|node| {
            let mut copy = node.clone();
            copy.children = apply_states(&copy.children);
            copy.state = compute_state(&copy);
            copy
        })
        .collect()
}

/// Derive a node's tri-state from its subtree.
///
/// Childless nodes (leaves and empty folders) report their own flag; a
/// node with children reports `Full`/`None` when every child agrees, and
/// `Partial` otherwise. The node's own `selected` flag plays no part once
/// it has children.
pub fn compute_state(node: &Node) -> SelectState {
    if node.children.is_empty() {
        return if node.selected {
            SelectState::Full
        } else {
            SelectState::None
        };
    }

    let states: Vec<SelectState> = node.children.iter().map(compute_state).collect();

    if states.iter().all(|s| *s == SelectState::Full) {
        SelectState::Full
    } else if states.iter().all(|s| *s == SelectState::None) {
        SelectState::None
    } else {
        SelectState::Partial
    }
}

/// Collect the minimal covering set of selected nodes.
///
/// A selected node is emitted (cleaned of client-only bookkeeping) and its
/// subtree is skipped, so a folder chosen whole contributes itself rather
/// than its contents. An unselected folder with selected descendants is
/// descended but never itself emitted.
pub fn collect_selected(forest: &[Node]) -> Vec<Node> {
    let mut out = Vec::new();
    for node in forest {
        if node.selected {
            out.push(node.cleaned());
            continue;
        }
        if !node.children.is_empty() {
            out.extend(collect_selected(&node.children));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::find;

    /// The worked example from the picker: one folder with two files.
    fn picker_tree() -> Vec<Node> {
        vec![Node::folder(
            1,
            "docs",
            vec![Node::file(2, "a.pdf"), Node::file(3, "b.pdf")],
        )]
    }

    fn deep_tree() -> Vec<Node> {
        vec![Node::folder(
            1,
            "root",
            vec![
                Node::folder(2, "sub", vec![Node::file(3, "x.pdf"), Node::file(4, "y.pdf")]),
                Node::file(5, "z.pdf"),
            ],
        )]
    }

    #[test]
    fn test_select_folder_marks_whole_subtree_full() {
        let out = toggle_select(&picker_tree(), NodeId::new(1));
        let root = find(&out, NodeId::new(1)).unwrap();
        assert!(root.selected);
        assert_eq!(root.state, SelectState::Full);
        assert!(find(&out, NodeId::new(2)).unwrap().selected);
        assert!(find(&out, NodeId::new(3)).unwrap().selected);
    }

    #[test]
    fn test_single_leaf_makes_folder_partial() {
        let out = toggle_select(&picker_tree(), NodeId::new(2));
        let root = find(&out, NodeId::new(1)).unwrap();
        assert_eq!(root.state, SelectState::Partial);
        // the asymmetry: the folder's own flag is untouched
        assert!(!root.selected);
    }

    #[test]
    fn test_all_leaves_selected_makes_folder_full_but_unselected() {
        let mut out = toggle_select(&picker_tree(), NodeId::new(2));
        out = toggle_select(&out, NodeId::new(3));
        let root = find(&out, NodeId::new(1)).unwrap();
        assert_eq!(root.state, SelectState::Full);
        assert!(!root.selected);
    }

    #[test]
    fn test_double_toggle_restores_flags() {
        let original = deep_tree();
        let once = toggle_select(&original, NodeId::new(3));
        let twice = toggle_select(&once, NodeId::new(3));

        fn flags(forest: &[Node], out: &mut Vec<bool>) {
            for n in forest {
                out.push(n.selected);
                flags(&n.children, out);
            }
        }
        let mut before = Vec::new();
        let mut after = Vec::new();
        flags(&original, &mut before);
        flags(&twice, &mut after);
        assert_eq!(before, after);
    }

    #[test]
    fn test_deselect_folder_clears_descendants() {
        let selected = toggle_select(&deep_tree(), NodeId::new(1));
        let cleared = toggle_select(&selected, NodeId::new(1));
        assert!(!find(&cleared, NodeId::new(3)).unwrap().selected);
        assert_eq!(
            find(&cleared, NodeId::new(1)).unwrap().state,
            SelectState::None
        );
    }

    #[test]
    fn test_collect_selected_folder_covers_children() {
        let out = toggle_select(&picker_tree(), NodeId::new(1));
        let picked = collect_selected(&out);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, NodeId::new(1));
        // emitted nodes are cleaned
        assert!(!picked[0].selected);
        assert!(!picked[0].children[0].selected);
    }

    #[test]
    fn test_collect_selected_partial_folder_emits_only_leaves() {
        let out = toggle_select(&picker_tree(), NodeId::new(2));
        let picked = collect_selected(&out);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].id, NodeId::new(2));
    }

    #[test]
    fn test_collect_never_pairs_folder_with_descendant() {
        // select the subfolder whole, plus a loose leaf outside it
        let mut out = toggle_select(&deep_tree(), NodeId::new(2));
        out = toggle_select(&out, NodeId::new(5));
        let picked = collect_selected(&out);
        let ids: Vec<i64> = picked.iter().map(|n| n.id.into_inner()).collect();
        assert_eq!(ids, vec![2, 5]);
        // 3 and 4 are covered by 2, never listed alongside it
        assert!(!ids.contains(&3));
        assert!(!ids.contains(&4));
    }

    #[test]
    fn test_empty_folder_behaves_like_leaf() {
        let forest = vec![Node::folder(1, "empty", vec![])];
        let out = toggle_select(&forest, NodeId::new(1));
        assert_eq!(find(&out, NodeId::new(1)).unwrap().state, SelectState::Full);
    }

    #[test]
    fn test_states_recomputed_for_every_node() {
        let out = toggle_select(&deep_tree(), NodeId::new(3));
        // leaf itself carries a state too, not just folders
        assert_eq!(find(&out, NodeId::new(3)).unwrap().state, SelectState::Full);
        assert_eq!(
            find(&out, NodeId::new(2)).unwrap().state,
            SelectState::Partial
        );
        assert_eq!(
            find(&out, NodeId::new(1)).unwrap().state,
            SelectState::Partial
        );
    }
}
