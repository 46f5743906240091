use crate::board::{Board, COLS, ROWS};
use crate::player::Player;

const LINE: usize = 4;

/// Final result of a finished position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome value in the fixed player-two-positive frame.
    ///
    /// A win maps to `2 * winner - 3` (player one -> -1, player two -> +1),
    /// a draw to 0. The value is never flipped by ply.
    pub fn value(self) -> f64 {
        match self {
            GameOutcome::Win(winner) => 2.0 * winner.as_u8() as f64 - 3.0,
            GameOutcome::Draw => 0.0,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(winner) => Some(winner),
            GameOutcome::Draw => None,
        }
    }
}

/// Every board reachable by one legal drop for `player`, in column order.
///
/// Chips land in the lowest empty cell of their column. Returns an empty
/// vector when no column has room.
pub fn legal_moves(state: &Board, player: Player) -> Vec<Board> {
    (0..COLS)
        .filter_map(|col| state.drop_piece(col, player).ok())
        .collect()
}

/// Columns that still have room, ascending
pub fn legal_columns(state: &Board) -> Vec<usize> {
    (0..COLS).filter(|&col| state.has_room(col)).collect()
}

/// Find four in a row.
///
/// Scan order is horizontal (rows top to bottom), vertical, diagonal
/// down-right, diagonal down-left; the first line found decides.
pub fn check_winner(state: &Board) -> Option<Player> {
    // (row step, col step, first col, last col exclusive)
    const DIRECTIONS: [(usize, isize, usize, usize); 4] = [
        (0, 1, 0, COLS - LINE + 1),
        (1, 0, 0, COLS),
        (1, 1, 0, COLS - LINE + 1),
        (1, -1, LINE - 1, COLS),
    ];

    for (dr, dc, col_start, col_end) in DIRECTIONS {
        let row_end = ROWS - dr * (LINE - 1);
        for row in 0..row_end {
            for col in col_start..col_end {
                if let Some(player) = line_owner(state, row, col, dr, dc) {
                    return Some(player);
                }
            }
        }
    }
    None
}

#[inline]
fn line_owner(state: &Board, row: usize, col: usize, dr: usize, dc: isize) -> Option<Player> {
    let first = state.get(row, col)?;
    (1..LINE)
        .all(|step| {
            let c = (col as isize + dc * step as isize) as usize;
            state.get(row + dr * step, c) == Some(first)
        })
        .then_some(first)
}

/// Whether every cell of the grid is occupied
pub fn is_full(state: &Board) -> bool {
    (0..COLS).all(|col| !state.has_room(col))
}

/// A draw is a full grid while no winner has been recorded.
///
/// `winner_known` is supplied by the caller so that grid fullness and winner
/// detection stay independent predicates.
pub fn is_draw(state: &Board, winner_known: bool) -> bool {
    is_full(state) && !winner_known
}

/// Winner if there is one, otherwise a draw on a full grid, otherwise `None`
pub fn outcome(state: &Board) -> Option<GameOutcome> {
    match check_winner(state) {
        Some(winner) => Some(GameOutcome::Win(winner)),
        None if is_draw(state, false) => Some(GameOutcome::Draw),
        None => None,
    }
}

/// Whether the position is decided
#[inline]
pub fn is_terminal(state: &Board) -> bool {
    outcome(state).is_some()
}
