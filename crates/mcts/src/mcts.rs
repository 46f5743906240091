use connect4_core::{check_winner, legal_columns, Board, Player};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::backup::backup;
use crate::config::MctsConfig;
use crate::error::{MctsError, Result};
use crate::expansion::expand;
use crate::rollout::rollout;
use crate::search_result::SearchResult;
use crate::selection::select;
use crate::tree::{MctsTree, NodeId};

/// Monte Carlo Tree Search for Connect-Four using UCB1 and random rollouts
pub struct Mcts {
    tree: MctsTree,
}

impl Mcts {
    /// Create a new MCTS instance
    pub fn new() -> Self {
        Self {
            tree: MctsTree::new(),
        }
    }

    /// Run MCTS search for the player who moves after `just_moved`.
    ///
    /// Randomness comes from `config.seed` when set, otherwise from OS entropy.
    pub fn search(
        &mut self,
        board: &Board,
        just_moved: Player,
        config: &MctsConfig,
    ) -> Result<SearchResult> {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        self.search_with_rng(board, just_moved, config, &mut rng)
    }

    /// Run MCTS search with a caller-supplied random source.
    ///
    /// The tree is rebuilt from scratch on every call. Values are scored with
    /// player two positive, so `just_moved` must be `Player::One`; anything
    /// else is rejected with `UnsupportedMover`.
    pub fn search_with_rng<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        just_moved: Player,
        config: &MctsConfig,
        rng: &mut R,
    ) -> Result<SearchResult> {
        config.validate()?;
        board.validate()?;

        let mover = just_moved.opponent();
        if mover != Player::Two {
            return Err(MctsError::UnsupportedMover(mover));
        }

        // Check if position is already decided
        if check_winner(board).is_some() {
            return Err(MctsError::TerminalPosition);
        }
        if legal_columns(board).is_empty() {
            return Err(MctsError::NoLegalMoves);
        }

        // 1. Initialize root node
        let root_id = self.tree.initialize_root(*board, mover);

        // 2. Run iterations
        for _ in 0..config.num_iterations {
            self.run_iteration(root_id, config, rng)?;
        }

        // A tiny budget can end before the root was ever expanded
        if !self.tree.nodes[root_id].is_expanded() {
            expand(&mut self.tree, root_id)?;
        }

        // 3. Extract results
        let result = self.create_search_result(root_id, config)?;
        debug!(
            iterations = result.iterations,
            total_sims = result.total_sims,
            tree_size = result.tree_size,
            column = result.column,
            root_value = result.root_value,
            "search finished"
        );
        Ok(result)
    }

    /// One selection / (expansion | rollout) / backup cycle
    fn run_iteration<R: Rng + ?Sized>(
        &mut self,
        root_id: NodeId,
        config: &MctsConfig,
        rng: &mut R,
    ) -> Result<()> {
        // Selection: descend by UCB1
        let leaf_id = select(&self.tree, root_id, config.exploration_constant);
        let leaf = &mut self.tree.nodes[leaf_id];

        if leaf.is_terminal {
            // Revisit: the value is fixed, only the counts move
            leaf.visit_count += 1;
            let evaluated = leaf.is_evaluated;
            self.tree.total_sims += 1;
            if evaluated {
                backup(&mut self.tree, leaf_id);
            }
        } else if leaf.visit_count > 0 {
            // Expansion: second visit to a rolled-out leaf
            expand(&mut self.tree, leaf_id)?;
        } else {
            // Rollout: first visit
            let value = rollout(&leaf.state, leaf.mover, config.rollout_policy, rng);
            leaf.mean_value = value;
            leaf.visit_count = 1;
            leaf.is_evaluated = true;
            self.tree.total_sims += 1;
            backup(&mut self.tree, leaf_id);
        }

        Ok(())
    }

    /// Create search result from root node statistics
    fn create_search_result(&self, root_id: NodeId, config: &MctsConfig) -> Result<SearchResult> {
        let root = &self.tree.nodes[root_id];

        // Root children were generated in the same order as the open columns
        let root_visit_counts: Vec<(usize, u32)> = legal_columns(&root.state)
            .into_iter()
            .zip(root.child_ids())
            .map(|(col, &child_id)| (col, self.tree.nodes[child_id].visit_count))
            .collect();

        let best = Self::select_most_visited(&root_visit_counts).ok_or(MctsError::NoLegalMoves)?;
        let (column, _) = root_visit_counts[best];
        let board = self.tree.nodes[root.child_ids()[best]].state;

        Ok(SearchResult {
            board,
            column,
            root_visit_counts,
            root_value: root.mean_value,
            iterations: config.num_iterations,
            total_sims: self.tree.total_sims,
            tree_size: self.tree.size(),
        })
    }

    /// Index of the most visited entry; the earliest wins ties
    fn select_most_visited(move_visits: &[(usize, u32)]) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, &(_, visits)) in move_visits.iter().enumerate() {
            if best.map_or(true, |(_, most)| visits > most) {
                best = Some((i, visits));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Reset the tree (clear all nodes)
    pub fn reset(&mut self) {
        self.tree.clear();
    }

    /// Get the number of nodes in the tree
    pub fn tree_size(&self) -> usize {
        self.tree.size()
    }

    /// Read access to the tree left by the last search
    pub fn tree(&self) -> &MctsTree {
        &self.tree
    }
}

impl Default for Mcts {
    fn default() -> Self {
        Self::new()
    }
}

/// Search `board` once and return the board after the chosen drop.
///
/// `just_moved` is the player whose chip was placed last and must be
/// `Player::One`; the search moves for player two.
pub fn run_search(board: &Board, just_moved: Player, config: &MctsConfig) -> Result<Board> {
    Mcts::new()
        .search(board, just_moved, config)
        .map(|result| result.board)
}
