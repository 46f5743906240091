use crate::tree::{MctsTree, NodeId};

/// Backup from `node_id` towards the root.
///
/// Each step folds the current node's mean into its parent's running mean
/// (only if the node is evaluated) and then bumps the parent's visit count.
/// The walk stops once the root has been updated.
///
/// Values stay in the global player-two-positive frame; they are NOT negated
/// between plies.
pub fn backup(tree: &mut MctsTree, node_id: NodeId) {
    let root_id = tree.root_id;
    let mut current_id = node_id;

    while current_id != root_id {
        let node = &tree.nodes[current_id];
        let Some(parent_id) = node.parent else {
            break;
        };
        let contribution = node.is_evaluated.then_some(node.mean_value);

        let parent = &mut tree.nodes[parent_id];
        if let Some(value) = contribution {
            let visits = parent.visit_count as f64;
            parent.mean_value = (parent.mean_value * visits + value) / (visits + 1.0);
        }
        parent.visit_count += 1;

        current_id = parent_id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MctsNode;
    use approx::assert_relative_eq;
    use connect4_core::{Board, Player};

    fn chain(depth: usize) -> MctsTree {
        let mut tree = MctsTree::new();
        tree.initialize_root(Board::new(), Player::Two);
        let mut mover = Player::Two;
        for parent in 0..depth {
            mover = mover.opponent();
            let id = tree.add_node(MctsNode::new_child(Board::new(), mover, Some(parent)));
            tree.nodes[parent].children = Some(vec![id]);
        }
        tree
    }

    #[test]
    fn test_backup_from_root_is_noop() {
        let mut tree = chain(0);
        backup(&mut tree, 0);
        assert_eq!(tree.nodes[0].visit_count, 0);
        assert_eq!(tree.nodes[0].mean_value, 0.0);
    }

    #[test]
    fn test_backup_does_not_negate() {
        let mut tree = chain(1);
        tree.nodes[1].settle(1.0);

        backup(&mut tree, 1);

        // Child untouched, root gets the same sign
        assert_eq!(tree.nodes[1].visit_count, 1);
        assert_eq!(tree.nodes[1].mean_value, 1.0);
        assert_eq!(tree.nodes[0].visit_count, 1);
        assert_eq!(tree.nodes[0].mean_value, 1.0);
    }

    #[test]
    fn test_backup_running_mean() {
        let mut tree = chain(1);
        tree.nodes[1].settle(-1.0);
        backup(&mut tree, 1);

        tree.nodes[1].mean_value = 1.0;
        backup(&mut tree, 1);
        backup(&mut tree, 1);

        // (-1 + 1 + 1) / 3
        assert_eq!(tree.nodes[0].visit_count, 3);
        assert_relative_eq!(tree.nodes[0].mean_value, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_backup_deep_tree() {
        let mut tree = chain(3);
        // Interior nodes were rolled out once (value 0) before being expanded
        for id in 1..3 {
            tree.nodes[id].is_evaluated = true;
            tree.nodes[id].visit_count = 1;
        }
        tree.nodes[3].settle(-1.0);

        backup(&mut tree, 3);

        // Each ancestor folds in its child's updated mean, not the leaf value
        assert_relative_eq!(tree.nodes[2].mean_value, -0.5);
        assert_relative_eq!(tree.nodes[1].mean_value, -0.25);
        assert_relative_eq!(tree.nodes[0].mean_value, -0.25);
        assert_eq!(tree.nodes[2].visit_count, 2);
        assert_eq!(tree.nodes[1].visit_count, 2);
        assert_eq!(tree.nodes[0].visit_count, 1);
        assert_eq!(tree.nodes[3].visit_count, 1);
    }

    #[test]
    fn test_backup_unevaluated_node_still_counts_visit() {
        let mut tree = chain(2);
        tree.nodes[1].mean_value = 0.5;
        tree.nodes[1].is_evaluated = true;
        tree.nodes[1].visit_count = 1;

        // Node 2 was never evaluated: node 1 only gains a visit
        backup(&mut tree, 2);

        assert_eq!(tree.nodes[1].visit_count, 2);
        assert_eq!(tree.nodes[1].mean_value, 0.5);
        // Node 1 is evaluated, so the root folds in 0.5
        assert_eq!(tree.nodes[0].visit_count, 1);
        assert_eq!(tree.nodes[0].mean_value, 0.5);
    }
}
