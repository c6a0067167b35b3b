//! Read-only lookups over a node forest.

use eduhub_core::types::NodeId;
use eduhub_entity::node::Node;

/// Find a node by id anywhere in the forest, depth-first.
pub fn find(forest: &[Node], id: NodeId) -> Option<&Node> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(&node.children, id) {
            return Some(found);
        }
    }
    None
}

/// Whether any node in the forest has the given id.
pub fn contains(forest: &[Node], id: NodeId) -> bool {
    find(forest, id).is_some()
}

/// Total number of nodes in the forest.
pub fn node_count(forest: &[Node]) -> usize {
    forest
        .iter()
        .map(|n| 1 + node_count(&n.children))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Node> {
        vec![Node::folder(
            1,
            "root",
            vec![Node::file(2, "a.pdf"), Node::folder(3, "sub", vec![Node::file(4, "b.pdf")])],
        )]
    }

    #[test]
    fn test_find_at_depth() {
        let forest = sample();
        assert_eq!(find(&forest, NodeId::new(4)).unwrap().name, "b.pdf");
        assert!(find(&forest, NodeId::new(99)).is_none());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(node_count(&sample()), 4);
        assert_eq!(node_count(&[]), 0);
    }
}
