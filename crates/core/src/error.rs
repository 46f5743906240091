use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Column {0} is out of range")]
    ColumnOutOfRange(usize),

    #[error("Column {0} is full")]
    ColumnFull(usize),

    #[error("Invalid cell value {value} at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("Floating chip at row {row}, column {col}: cell below is empty")]
    FloatingChip { row: usize, col: usize },

    #[error("Expected {expected} rows of {cols} cells, got {found}")]
    BadShape {
        expected: usize,
        cols: usize,
        found: String,
    },

    #[error("Unexpected character {0:?} in board text")]
    BadSymbol(char),
}

pub type Result<T> = std::result::Result<T, BoardError>;
