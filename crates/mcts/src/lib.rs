//! Monte Carlo Tree Search for Connect-Four.
//!
//! Each search grows a fresh tree from the current position by repeating
//!
//! 1. **Selection**: descend by a UCB1 score whose exploration weight shrinks
//!    with a node's own visit count
//! 2. **Expansion** of a leaf seen before, or a **rollout** of a leaf seen for
//!    the first time
//! 3. **Backpropagation** of running means up to the root
//!
//! and finally plays the most visited move at the root. Outcome values are
//! kept in a single frame where a player-two win is +1 and a player-one win
//! is -1, at every depth of the tree.
//!
//! ```no_run
//! use connect4_core::{Board, Player};
//! use connect4_mcts::{run_search, MctsConfig};
//!
//! # fn main() -> connect4_mcts::Result<()> {
//! let after_human = Board::new().drop_piece(3, Player::One)?;
//! let config = MctsConfig::default().with_iterations(2_000).with_seed(7);
//! let after_bot = run_search(&after_human, Player::One, &config)?;
//! println!("{after_bot}");
//! # Ok(())
//! # }
//! ```

// Module declarations
mod backup;
mod config;
mod error;
mod expansion;
mod mcts;
mod rollout;
mod search_result;
mod selection;
mod tree;

// Public exports
pub use config::{MctsConfig, RolloutPolicy};
pub use error::{MctsError, Result};
pub use mcts::{run_search, Mcts};
pub use search_result::SearchResult;
pub use selection::ucb1_score;
pub use tree::{MctsNode, MctsTree, NodeId};
