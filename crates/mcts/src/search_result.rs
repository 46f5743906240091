use connect4_core::Board;

/// Result of MCTS search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Board after the chosen drop
    pub board: Board,

    /// Column the chip was dropped into (0-6)
    pub column: usize,

    /// Visit counts of the root's children in generation order: (column, visit_count)
    pub root_visit_counts: Vec<(usize, u32)>,

    /// Mean value at the root (player two positive)
    pub root_value: f64,

    /// Number of iterations actually run
    pub iterations: u32,

    /// Completed evaluations (rollouts and terminal revisits)
    pub total_sims: u32,

    /// Number of nodes in the tree when the search stopped
    pub tree_size: usize,
}

impl SearchResult {
    /// Get the visit count for a specific column
    pub fn visit_count_for_column(&self, column: usize) -> u32 {
        self.root_visit_counts
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| *v)
            .unwrap_or(0)
    }

    /// Get the total number of visits over the root's children
    pub fn total_visits(&self) -> u32 {
        self.root_visit_counts.iter().map(|(_, v)| v).sum()
    }
}
