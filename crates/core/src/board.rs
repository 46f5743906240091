use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, Result};
use crate::player::Player;

/// Number of rows on the board
pub const ROWS: usize = 6;

/// Number of columns on the board
pub const COLS: usize = 7;

/// Index of the bottom row
pub const BOTTOM_ROW: usize = ROWS - 1;

const EMPTY_SYMBOL: char = '.';

/// A 6x7 Connect-Four grid.
///
/// Row 0 is the top of the board and row 5 the bottom, so chips fall towards
/// larger row indices:
/// ```text
/// row 0: . . . . . . .   <- top
/// row 1: . . . . . . .
/// row 2: . . . . . . .
/// row 3: . . . . . . .
/// row 4: . . . . . . .
/// row 5: . . . X . . .   <- bottom
///        0 1 2 3 4 5 6
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Player>; COLS]; ROWS],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw cell values (0 = empty, 1 = player one, 2 = player two).
    ///
    /// The result is checked for out-of-range values and floating chips.
    pub fn from_rows(rows: [[u8; COLS]; ROWS]) -> Result<Self> {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.cells[row][col] = match value {
                    0 => None,
                    v => Some(
                        Player::from_u8(v).ok_or(BoardError::InvalidCell { row, col, value: v })?,
                    ),
                };
            }
        }
        board.validate()?;
        Ok(board)
    }

    /// Raw cell values, inverse of [`Board::from_rows`]
    pub fn to_rows(&self) -> [[u8; COLS]; ROWS] {
        let mut rows = [[0u8; COLS]; ROWS];
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                rows[row][col] = cell.map_or(0, Player::as_u8);
            }
        }
        rows
    }

    /// Occupant of a cell. Panics if the coordinates are off the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    /// Row a chip dropped into `col` would come to rest in, or `None` if the
    /// column is full or does not exist
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col].is_none())
    }

    /// Whether `col` can still take a chip
    #[inline]
    pub fn has_room(&self, col: usize) -> bool {
        col < COLS && self.cells[0][col].is_none()
    }

    /// Drop a chip for `player` into `col` and return the resulting board
    pub fn drop_piece(&self, col: usize, player: Player) -> Result<Board> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        let row = self.landing_row(col).ok_or(BoardError::ColumnFull(col))?;

        let mut next = *self;
        next.cells[row][col] = Some(player);
        Ok(next)
    }

    /// Number of chips owned by `player`
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Some(player))
            .count()
    }

    /// Total number of chips on the board
    pub fn chip_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Check the gravity invariant: every occupied cell above the bottom row
    /// rests on an occupied cell.
    pub fn validate(&self) -> Result<()> {
        for row in 0..BOTTOM_ROW {
            for col in 0..COLS {
                if self.cells[row][col].is_some() && self.cells[row + 1][col].is_none() {
                    return Err(BoardError::FloatingChip { row, col });
                }
            }
        }
        Ok(())
    }

    /// Column in which `next` has exactly one more chip than `self`.
    ///
    /// Returns `None` when the two boards differ in any other way.
    pub fn changed_column(&self, next: &Board) -> Option<usize> {
        let mut changed = None;
        for row in 0..ROWS {
            for col in 0..COLS {
                match (self.cells[row][col], next.cells[row][col]) {
                    (a, b) if a == b => {}
                    (None, Some(_)) if changed.is_none() => changed = Some(col),
                    _ => return None,
                }
            }
        }
        changed
    }

    /// Mirror the board left to right
    pub fn mirrored(&self) -> Board {
        let mut out = *self;
        for row in 0..ROWS {
            for col in 0..COLS {
                out.cells[row][col] = self.cells[row][COLS - 1 - col];
            }
        }
        out
    }

    /// Swap the owners of every chip
    pub fn swapped(&self) -> Board {
        let mut out = *self;
        for cell in out.cells.iter_mut().flatten() {
            *cell = cell.map(Player::opponent);
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for cell in cells {
                let symbol = cell.map_or(EMPTY_SYMBOL, Player::symbol);
                write!(f, "{symbol}")?;
            }
            if row + 1 < ROWS {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse six lines of seven characters: `.` empty, `X` player one, `O` player two.
    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != ROWS {
            return Err(BoardError::BadShape {
                expected: ROWS,
                cols: COLS,
                found: format!("{} rows", lines.len()),
            });
        }

        let mut rows = [[0u8; COLS]; ROWS];
        for (row, line) in lines.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != COLS {
                return Err(BoardError::BadShape {
                    expected: ROWS,
                    cols: COLS,
                    found: format!("row {} with {} cells", row, symbols.len()),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                rows[row][col] = match symbol {
                    EMPTY_SYMBOL => 0,
                    'X' | 'x' => Player::One.as_u8(),
                    'O' | 'o' => Player::Two.as_u8(),
                    other => return Err(BoardError::BadSymbol(other)),
                };
            }
        }

        Board::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.chip_count(), 0);
        assert_eq!(board.to_rows(), [[0; COLS]; ROWS]);
        for col in 0..COLS {
            assert_eq!(board.landing_row(col), Some(BOTTOM_ROW));
        }
    }

    #[test]
    fn test_drop_piece_stacks_upwards() {
        let board = Board::new()
            .drop_piece(3, Player::One)
            .unwrap()
            .drop_piece(3, Player::Two)
            .unwrap();

        assert_eq!(board.get(5, 3), Some(Player::One));
        assert_eq!(board.get(4, 3), Some(Player::Two));
        assert_eq!(board.landing_row(3), Some(3));
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_drop_piece_full_column() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::One } else { Player::Two };
            board = board.drop_piece(0, player).unwrap();
        }

        assert!(!board.has_room(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(
            board.drop_piece(0, Player::One),
            Err(BoardError::ColumnFull(0))
        );
    }

    #[test]
    fn test_drop_piece_out_of_range() {
        assert_eq!(
            Board::new().drop_piece(COLS, Player::One),
            Err(BoardError::ColumnOutOfRange(COLS))
        );
    }

    #[test]
    fn test_from_rows_rejects_floating_chip() {
        let mut rows = [[0u8; COLS]; ROWS];
        rows[3][2] = 1;
        assert_eq!(
            Board::from_rows(rows),
            Err(BoardError::FloatingChip { row: 3, col: 2 })
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_value() {
        let mut rows = [[0u8; COLS]; ROWS];
        rows[5][6] = 7;
        assert_eq!(
            Board::from_rows(rows),
            Err(BoardError::InvalidCell {
                row: 5,
                col: 6,
                value: 7
            })
        );
    }

    #[test]
    fn test_parse_and_display() {
        let text = "
            .......
            .......
            .......
            .......
            ...O...
            ..XXO..
        ";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.get(5, 2), Some(Player::One));
        assert_eq!(board.get(5, 3), Some(Player::One));
        assert_eq!(board.get(5, 4), Some(Player::Two));
        assert_eq!(board.get(4, 3), Some(Player::Two));
        assert_eq!(board.count(Player::One), 2);
        assert_eq!(board.count(Player::Two), 2);

        let printed = board.to_string();
        assert_eq!(printed.lines().count(), ROWS);
        assert_eq!(printed.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(matches!(
            ".......\n.......".parse::<Board>(),
            Err(BoardError::BadShape { .. })
        ));
        assert!(matches!(
            "......\n.......\n.......\n.......\n.......\n.......".parse::<Board>(),
            Err(BoardError::BadShape { .. })
        ));
        assert_eq!(
            ".......\n.......\n.......\n.......\n.......\n...Z...".parse::<Board>(),
            Err(BoardError::BadSymbol('Z'))
        );
    }

    #[test]
    fn test_changed_column() {
        let before = Board::new().drop_piece(2, Player::One).unwrap();
        let after = before.drop_piece(2, Player::Two).unwrap();
        assert_eq!(before.changed_column(&after), Some(2));

        // Two chips added
        let twice = after.drop_piece(4, Player::One).unwrap();
        assert_eq!(before.changed_column(&twice), None);

        // Identical boards
        assert_eq!(before.changed_column(&before), None);
    }

    #[test]
    fn test_mirror_and_swap() {
        let board = Board::new().drop_piece(0, Player::One).unwrap();
        let mirrored = board.mirrored();
        assert_eq!(mirrored.get(5, 6), Some(Player::One));
        assert_eq!(mirrored.get(5, 0), None);

        let swapped = board.swapped();
        assert_eq!(swapped.get(5, 0), Some(Player::Two));
    }
}
