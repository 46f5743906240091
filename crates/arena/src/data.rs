use connect4_core::{Board, GameOutcome, Player};
use serde::{Deserialize, Serialize};

/// Result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::PlayerOneWin => Some(Player::One),
            GameResult::PlayerTwoWin => Some(Player::Two),
            GameResult::Draw => None,
        }
    }
}

impl From<GameOutcome> for GameResult {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::Win(Player::One) => GameResult::PlayerOneWin,
            GameOutcome::Win(Player::Two) => GameResult::PlayerTwoWin,
            GameOutcome::Draw => GameResult::Draw,
        }
    }
}

/// Record of a single game
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// Board after each move
    pub boards: Vec<Board>,
    /// Column played at each move
    pub columns: Vec<usize>,
    /// Player who made each move
    pub movers: Vec<Player>,
    /// Final result of the game, `None` while it is still running
    pub result: Option<GameResult>,
}

impl GameRecord {
    /// Create a new empty game record
    pub fn new() -> Self {
        Self {
            boards: Vec::new(),
            columns: Vec::new(),
            movers: Vec::new(),
            result: None,
        }
    }

    /// Set the result
    pub fn set_result(&mut self, result: GameResult) {
        self.result = Some(result);
    }

    /// Add a move to the record
    pub fn add_move(&mut self, board: Board, column: usize, mover: Player) {
        self.boards.push(board);
        self.columns.push(column);
        self.movers.push(mover);
    }

    /// Board after the last move, or the empty board
    pub fn final_board(&self) -> Board {
        self.boards.last().copied().unwrap_or_default()
    }

    /// Get the number of moves in this game
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Check if the record is empty
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Tally of a series of games between the bot and an opponent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub games: u32,
    pub bot_wins: u32,
    pub opponent_wins: u32,
    pub draws: u32,
    /// Moves played over all games
    pub total_moves: u64,
}

impl MatchStats {
    /// Fold one finished game into the tally
    pub fn record(&mut self, game: &GameRecord, bot: Player) {
        self.games += 1;
        self.total_moves += game.len() as u64;
        match game.result.and_then(GameResult::winner) {
            Some(winner) if winner == bot => self.bot_wins += 1,
            Some(_) => self.opponent_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn bot_win_rate(&self) -> f32 {
        if self.games == 0 {
            0.0
        } else {
            self.bot_wins as f32 / self.games as f32
        }
    }

    pub fn average_length(&self) -> f32 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f32 / self.games as f32
        }
    }
}
