use connect4_core::{BoardError, Player};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MctsError {
    #[error("Invalid board state: {0}")]
    InvalidState(#[from] BoardError),

    #[error("Terminal position cannot be searched")]
    TerminalPosition,

    #[error("Search only plays for player 2, but {0} is to move")]
    UnsupportedMover(Player),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Invalid node ID: {0}")]
    InvalidNodeId(usize),

    #[error("Node {0} has already been expanded")]
    NodeAlreadyExpanded(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MctsError>;
