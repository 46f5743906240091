use connect4_core::{legal_columns, Board, Player};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The side of the board the search bot plays against
pub trait Opponent {
    /// Column to drop into, or `None` if the opponent has no move
    fn choose_column(&mut self, board: &Board, player: Player) -> Option<usize>;

    fn name(&self) -> &str;
}

/// Drops into a uniformly random open column
pub struct RandomOpponent<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOpponent<ChaCha8Rng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Opponent for RandomOpponent<R> {
    fn choose_column(&mut self, board: &Board, _player: Player) -> Option<usize> {
        legal_columns(board).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Plays a fixed list of columns.
///
/// Full columns in the script are skipped; once the script runs out it
/// falls back to the leftmost open column.
pub struct ScriptedOpponent {
    columns: Vec<usize>,
    cursor: usize,
}

impl ScriptedOpponent {
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns, cursor: 0 }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose_column(&mut self, board: &Board, _player: Player) -> Option<usize> {
        while let Some(&col) = self.columns.get(self.cursor) {
            self.cursor += 1;
            if board.has_room(col) {
                return Some(col);
            }
        }
        legal_columns(board).first().copied()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
