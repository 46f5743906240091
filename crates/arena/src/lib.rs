//! Referee for games between the MCTS bot and scripted or random opponents
//!
//! This crate provides functionality for:
//! - Playing complete games with gravity and win/draw checks after every move
//! - Recording every board, column and mover
//! - Running matches and tallying bot wins, losses and draws
//!
//! # Example
//!
//! ```no_run
//! use connect4_arena::{play_match, RandomOpponent};
//! use connect4_mcts::MctsConfig;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = MctsConfig::default().with_iterations(2_000);
//! let mut opponent = RandomOpponent::seeded(7);
//! let mut rng = ChaCha8Rng::seed_from_u64(8);
//!
//! let stats = play_match(20, &mut opponent, &config, &mut rng)?;
//! println!("bot won {:.0}% of games", stats.bot_win_rate() * 100.0);
//! # Ok(())
//! # }
//! ```

mod data;
mod game;
mod opponent;

// Re-export public API
pub use data::{GameRecord, GameResult, MatchStats};
pub use game::{play_game, play_match, play_match_with, BOT};
pub use opponent::{Opponent, RandomOpponent, ScriptedOpponent};
