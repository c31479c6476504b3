use std::fmt;

use super::{Board, Cell, Player};
use crate::error::GameError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// +1 if Player One won, -1 if Player Two won, 0 for a draw.
    pub fn value(self) -> i32 {
        match self {
            GameOutcome::Winner(player) => player.sign(),
            GameOutcome::Draw => 0,
        }
    }
}

/// A single position of the game.
///
/// States are values: `apply_move` and `successors` always return fresh
/// copies and never touch the parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    win_length: usize,
}

impl GameState {
    /// Create an empty board of the given shape.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 || win_length == 0 || win_length > rows.max(cols) {
            return Err(GameError::InvalidDimensions {
                rows,
                cols,
                win_length,
            });
        }
        Ok(GameState {
            board: Board::new(rows, cols),
            win_length,
        })
    }

    /// Create the standard 6x7, four-in-a-row starting position.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(DEFAULT_ROWS, DEFAULT_COLS),
            win_length: DEFAULT_WIN_LENGTH,
        }
    }

    /// Build a position from text rows, listed top row first as they are
    /// rendered. `X` is Player One, `O` is Player Two, `.` or `-` is empty.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], win_length: usize) -> Result<Self, GameError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        let mut state = GameState::new(height, width, win_length)?;

        for (i, line) in rows.iter().enumerate() {
            let row = height - 1 - i;
            let line = line.as_ref();
            let got = line.chars().count();
            if got != width {
                return Err(GameError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            for (col, character) in line.chars().enumerate() {
                let cell = match character {
                    'X' | 'x' => Cell::One,
                    'O' | 'o' => Cell::Two,
                    '.' | '-' => Cell::Empty,
                    _ => {
                        return Err(GameError::InvalidCellCharacter {
                            character,
                            row,
                            col,
                        })
                    }
                };
                state.board.set(row, col, cell);
            }
        }

        for col in 0..width {
            let height = state.board.column_height(col);
            if let Some(row) =
                (height..state.rows()).find(|&row| state.board.get(row, col) != Cell::Empty)
            {
                return Err(GameError::FloatingPiece { row, col });
            }
        }

        let one = state.board.count(Cell::One);
        let two = state.board.count(Cell::Two);
        if one < two || one - two > 1 {
            return Err(GameError::InvalidPieceCounts { one, two });
        }

        Ok(state)
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn piece_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Player One moves when the piece count is even.
    pub fn next_player(&self) -> Player {
        if self.piece_count() % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Columns that are not full, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// One `(column, child)` pair per non-full column, in ascending column
    /// order. Search engines rely on this order.
    pub fn successors(&self) -> Vec<(usize, GameState)> {
        (0..self.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .map(|col| (col, self.place(col)))
            .collect()
    }

    /// Drop the next player's piece into `column` and return the new state.
    pub fn apply_move(&self, column: usize) -> Result<GameState, GameError> {
        let mut child = self.clone();
        child
            .board
            .drop_piece(column, self.next_player().to_cell())?;
        Ok(child)
    }

    fn place(&self, column: usize) -> GameState {
        let mut child = self.clone();
        let row = child.board.column_height(column);
        child.board.set(row, column, self.next_player().to_cell());
        child
    }

    /// The winner if any player owns a run of `win_length`, a draw if the
    /// board is full, otherwise `None` while the game is in progress.
    pub fn winner(&self) -> Option<GameOutcome> {
        match self.board.find_run(self.win_length) {
            Some(Cell::One) => Some(GameOutcome::Winner(Player::One)),
            Some(Cell::Two) => Some(GameOutcome::Winner(Player::Two)),
            _ if self.is_full() => Some(GameOutcome::Draw),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows()).rev() {
            for col in 0..self.cols() {
                write!(f, "  {}", self.board.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  {}", ".".repeat(self.cols() * 3 - 2))?;
        for col in 0..self.cols() {
            write!(f, "  {col}")?;
        }
        writeln!(f)
    }
}
