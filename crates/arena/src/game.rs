use anyhow::{bail, Context, Result};
use connect4_core::{check_winner, is_draw, Board, GameOutcome, Player};
use connect4_mcts::{Mcts, MctsConfig};
use rand::Rng;
use tracing::info;

use crate::data::{GameRecord, GameResult, MatchStats};
use crate::opponent::Opponent;

/// Seat of the search bot. Values are scored with player two positive, so the
/// bot always answers player one.
pub const BOT: Player = Player::Two;

/// Play a single game between `opponent` (player one, moves first) and the
/// search bot (player two).
///
/// # Arguments
/// * `opponent` - Policy for player one
/// * `config` - MCTS configuration for every bot move
/// * `rng` - Random source for the bot's rollouts
///
/// # Returns
/// A complete game record with every board, the columns played and the result
pub fn play_game<O, R>(opponent: &mut O, config: &MctsConfig, rng: &mut R) -> Result<GameRecord>
where
    O: Opponent + ?Sized,
    R: Rng + ?Sized,
{
    let mut board = Board::new();
    let mut mcts = Mcts::new();
    let mut record = GameRecord::new();
    let mut current = Player::One;

    loop {
        let next = match current {
            Player::One => {
                let Some(col) = opponent.choose_column(&board, current) else {
                    bail!("{} opponent has no move on an open board", opponent.name());
                };
                board
                    .drop_piece(col, current)
                    .with_context(|| format!("{} opponent chose column {col}", opponent.name()))?
            }
            Player::Two => {
                let result = mcts
                    .search_with_rng(&board, current.opponent(), config, rng)
                    .context("bot search failed")?;
                // Tree is rebuilt from scratch for the next move
                mcts.reset();
                result.board
            }
        };

        let column = board
            .changed_column(&next)
            .context("move did not add exactly one chip")?;
        board = next;
        record.add_move(board, column, current);

        let winner = check_winner(&board);
        let decided = match winner {
            Some(player) => Some(GameOutcome::Win(player)),
            None if is_draw(&board, winner.is_some()) => Some(GameOutcome::Draw),
            None => None,
        };
        if let Some(result) = decided {
            record.set_result(GameResult::from(result));
            break;
        }

        current = current.opponent();
    }

    Ok(record)
}

/// Play `games` games against the same opponent and tally the results
pub fn play_match<O, R>(
    games: u32,
    opponent: &mut O,
    config: &MctsConfig,
    rng: &mut R,
) -> Result<MatchStats>
where
    O: Opponent + ?Sized,
    R: Rng + ?Sized,
{
    play_match_with(games, opponent, config, rng, |_, _| {})
}

/// Like [`play_match`], handing every finished game to `on_game` together
/// with its zero-based index
pub fn play_match_with<O, R, F>(
    games: u32,
    opponent: &mut O,
    config: &MctsConfig,
    rng: &mut R,
    mut on_game: F,
) -> Result<MatchStats>
where
    O: Opponent + ?Sized,
    R: Rng + ?Sized,
    F: FnMut(u32, &GameRecord),
{
    let mut stats = MatchStats::default();

    for index in 0..games {
        let record = play_game(opponent, config, rng)
            .with_context(|| format!("game {} of {games}", index + 1))?;
        info!(
            game = index + 1,
            moves = record.len(),
            result = ?record.result,
            "game finished"
        );
        stats.record(&record, BOT);
        on_game(index, &record);
    }

    info!(
        games = stats.games,
        bot_wins = stats.bot_wins,
        opponent_wins = stats.opponent_wins,
        draws = stats.draws,
        win_rate = stats.bot_win_rate(),
        "match finished"
    );

    Ok(stats)
}
