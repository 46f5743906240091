use crate::tree::{MctsNode, MctsTree, NodeId};

/// Select a leaf node using the UCB1 score
///
/// Descends from `root_id`, always taking the highest-scoring child, until it
/// reaches a node without children. Ties go to the earliest generated child.
pub fn select(tree: &MctsTree, root_id: NodeId, exploration_constant: f64) -> NodeId {
    let mut current_id = root_id;

    while let Some(children) = tree.nodes[current_id].children.as_deref() {
        let mut best: Option<(NodeId, f64)> = None;
        for &child_id in children {
            let score = ucb1_score(&tree.nodes[child_id], tree.total_sims, exploration_constant);
            // Strict comparison keeps the first maximum
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((child_id, score));
            }
        }

        match best {
            Some((child_id, _)) => current_id = child_id,
            None => break,
        }
    }

    current_id
}

/// Calculate the UCB1 score for a node
///
/// score = Q + w * sqrt(ln(T) / N),  w = c / sqrt(N + 1)
///
/// Where:
/// - Q is the node's mean value
/// - N is the node's visit count
/// - T is the number of completed evaluations in the whole tree
/// - c is the exploration constant
///
/// Unvisited nodes score +inf so they are always tried first.
pub fn ucb1_score(node: &MctsNode, total_sims: u32, exploration_constant: f64) -> f64 {
    if node.visit_count == 0 {
        return f64::INFINITY;
    }

    let visits = node.visit_count as f64;
    let spread = if total_sims > 0 {
        ((total_sims as f64).ln() / visits).sqrt()
    } else {
        0.0
    };
    let weight = exploration_constant / (visits + 1.0).sqrt();

    node.mean_value + weight * spread
}
