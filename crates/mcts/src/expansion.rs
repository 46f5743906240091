use connect4_core::{legal_moves, outcome};
use tracing::trace;

use crate::backup::backup;
use crate::error::{MctsError, Result};
use crate::tree::{MctsNode, MctsTree, NodeId};

/// Generate every child of `node_id`, one ply deep.
///
/// Children are created in column order with the opponent as their mover.
/// A child that is already decided (a winner, or a full grid) is settled on
/// the spot with one visit and its fixed value, and backed up immediately.
/// Undecided children stay unvisited until selection reaches them.
///
/// Returns the number of children created.
pub fn expand(tree: &mut MctsTree, node_id: NodeId) -> Result<usize> {
    let node = tree
        .nodes
        .get(node_id)
        .ok_or(MctsError::InvalidNodeId(node_id))?;
    if node.is_expanded() {
        return Err(MctsError::NodeAlreadyExpanded(node_id));
    }

    let state = node.state;
    let mover = node.mover;
    let child_mover = mover.opponent();

    let moves = legal_moves(&state, mover);
    let mut children = Vec::with_capacity(moves.len());
    let mut settled = 0;

    for child_state in moves {
        let child_id = tree.add_node(MctsNode::new_child(
            child_state,
            child_mover,
            Some(node_id),
        ));
        children.push(child_id);

        if let Some(result) = outcome(&child_state) {
            tree.nodes[child_id].settle(result.value());
            backup(tree, child_id);
            settled += 1;
        }
    }

    let count = children.len();
    tree.nodes[node_id].children = Some(children);

    trace!(node = node_id, children = count, settled, "expanded node");
    Ok(count)
}
