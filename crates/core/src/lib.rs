//! Connect-Four board and rules.
//!
//! The board is a 6x7 grid with gravity: a chip always lands in the lowest
//! empty cell of its column. The rule functions in this crate are pure and
//! carry no game state of their own.

mod board;
mod error;
mod player;
mod rules;

pub use board::{Board, BOTTOM_ROW, COLS, ROWS};
pub use error::{BoardError, Result};
pub use player::Player;
pub use rules::{
    check_winner, is_draw, is_full, is_terminal, legal_columns, legal_moves, outcome, GameOutcome,
};
