use connect4_core::{Board, Player};

/// Node ID in the arena-style tree
pub type NodeId = usize;

/// A single node in the MCTS tree
#[derive(Debug, Clone)]
pub struct MctsNode {
    /// Board state at this node
    pub state: Board,

    /// Player to move from this state
    pub mover: Player,

    /// Parent node ID, used only to walk back to the root
    pub parent: Option<NodeId>,

    /// Child node IDs in move generation order; `None` until expanded
    pub children: Option<Vec<NodeId>>,

    /// Number of times this node has been visited
    pub visit_count: u32,

    /// Running mean of backed-up outcome values (player two positive)
    pub mean_value: f64,

    /// Whether the state has a winner or a full grid
    pub is_terminal: bool,

    /// Whether `mean_value` holds at least one result
    pub is_evaluated: bool,
}

impl MctsNode {
    /// Create a new root node.
    ///
    /// The root never passes a value upward, so it starts out evaluated.
    pub fn new_root(state: Board, mover: Player) -> Self {
        Self {
            is_evaluated: true,
            ..Self::new_child(state, mover, None)
        }
    }

    /// Create a new child node
    pub fn new_child(state: Board, mover: Player, parent: Option<NodeId>) -> Self {
        Self {
            state,
            mover,
            parent,
            children: None,
            visit_count: 0,
            mean_value: 0.0,
            is_terminal: false,
            is_evaluated: false,
        }
    }

    /// Whether children have been generated
    #[inline]
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Child IDs, empty when the node has not been expanded
    #[inline]
    pub fn child_ids(&self) -> &[NodeId] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Mark as a decided position with a fixed value and one visit
    pub fn settle(&mut self, value: f64) {
        self.is_terminal = true;
        self.is_evaluated = true;
        self.mean_value = value;
        self.visit_count = 1;
    }
}

/// MCTS tree using arena allocation
#[derive(Debug)]
pub struct MctsTree {
    /// Arena of all nodes
    pub nodes: Vec<MctsNode>,

    /// Root node ID (usually 0)
    pub root_id: NodeId,

    /// Completed evaluations across the whole tree (rollouts and terminal revisits)
    pub total_sims: u32,
}

impl MctsTree {
    /// Create a new empty tree
    pub fn new() -> Self {
        Self {
            nodes: Vec::with_capacity(10000),
            root_id: 0,
            total_sims: 0,
        }
    }

    /// Initialize the tree with a root node, discarding anything left over
    pub fn initialize_root(&mut self, board: Board, mover: Player) -> NodeId {
        self.clear();
        let root = MctsNode::new_root(board, mover);
        self.nodes.push(root);
        self.root_id = 0;
        self.root_id
    }

    /// Add a new node and return its ID
    pub fn add_node(&mut self, node: MctsNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Get the number of nodes in the tree
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Clear the tree
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root_id = 0;
        self.total_sims = 0;
    }
}

impl Default for MctsTree {
    fn default() -> Self {
        Self::new()
    }
}
