use crate::error::GameError;

/// Line directions as (row step, column step): horizontal, vertical and
/// both diagonals.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// Symbol used when rendering and parsing boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::One => 'X',
            Cell::Two => 'O',
        }
    }
}

/// A gravity grid of `rows` x `cols` cells.
///
/// Row 0 is the bottom row: pieces dropped into a column land in the lowest
/// empty row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Dimensions are checked by `GameState::new`.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Get the cell at a signed offset, or `None` when off the board.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(self.get(row as usize, col as usize))
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.rows == 0 || self.get(self.rows - 1, col) != Cell::Empty
    }

    /// Number of pieces stacked in a column.
    pub fn column_height(&self, col: usize) -> usize {
        (0..self.rows)
            .take_while(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        if col >= self.cols {
            return Err(GameError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }

        if self.is_column_full(col) {
            return Err(GameError::ColumnFull(col));
        }

        let row = self.column_height(col);
        self.set(row, col, cell);
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.len() - self.count(Cell::Empty)
    }

    /// Length of the run of cells equal to the one at (row, col), walking
    /// forward in direction (dr, dc) and counting the start cell.
    pub fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let cell = self.get(row, col);
        let mut len = 1;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while self.get_signed(r, c) == Some(cell) {
            len += 1;
            r += dr;
            c += dc;
        }
        len
    }

    /// True if (row, col) starts a run in direction (dr, dc), i.e. the cell
    /// behind it is off the board or holds something different.
    pub fn is_run_start(&self, row: usize, col: usize, dr: isize, dc: isize) -> bool {
        let cell = self.get(row, col);
        self.get_signed(row as isize - dr, col as isize - dc) != Some(cell)
    }

    /// Find a piece owning a run of at least `length` cells in any direction.
    ///
    /// Only run starts are expanded, so every run is walked once.
    pub fn find_run(&self, length: usize) -> Option<Cell> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = self.get(row, col);
                if cell == Cell::Empty {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    if self.is_run_start(row, col, dr, dc)
                        && self.run_length(row, col, dr, dc) >= length
                    {
                        return Some(cell);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(6, 7);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(6, 7);

        let row = board.drop_piece(3, Cell::One).unwrap();
        assert_eq!(row, 0); // Bottom row
        assert_eq!(board.get(0, 3), Cell::One);

        let row = board.drop_piece(3, Cell::Two).unwrap();
        assert_eq!(row, 1); // Stacks on top
        assert_eq!(board.get(1, 3), Cell::Two);
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(6, 7);
        for _ in 0..6 {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Cell::Two), Err(GameError::ColumnFull(0)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(6, 7);
        assert_eq!(
            board.drop_piece(7, Cell::One),
            Err(GameError::InvalidColumn { column: 7, cols: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_zero_height_board_has_no_room() {
        let mut board = Board::new(0, 3);
        assert!(board.is_column_full(0));
        assert!(board.is_full());
        assert_eq!(board.drop_piece(0, Cell::One), Err(GameError::ColumnFull(0)));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3, 4);
        for col in 0..4 {
            for _ in 0..3 {
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), 12);
    }

    #[test]
    fn test_find_run_horizontal() {
        let mut board = Board::new(6, 7);
        for col in 2..6 {
            board.drop_piece(col, Cell::Two).unwrap();
        }
        assert_eq!(board.find_run(4), Some(Cell::Two));
        assert_eq!(board.find_run(5), None);
    }

    #[test]
    fn test_find_run_vertical() {
        let mut board = Board::new(6, 7);
        for _ in 0..4 {
            board.drop_piece(6, Cell::One).unwrap();
        }
        assert_eq!(board.find_run(4), Some(Cell::One));
    }

    #[test]
    fn test_find_run_diagonal_up() {
        let mut board = Board::new(6, 7);
        for (i, col) in (0..4).enumerate() {
            for _ in 0..i {
                board.drop_piece(col, Cell::Two).unwrap();
            }
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert_eq!(board.find_run(4), Some(Cell::One));
    }

    #[test]
    fn test_find_run_diagonal_down() {
        let mut board = Board::new(6, 7);
        for (i, col) in (3..7).rev().enumerate() {
            for _ in 0..i {
                board.drop_piece(col, Cell::One).unwrap();
            }
            board.drop_piece(col, Cell::Two).unwrap();
        }
        assert_eq!(board.find_run(4), Some(Cell::Two));
    }

    #[test]
    fn test_no_run_with_three() {
        let mut board = Board::new(6, 7);
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert_eq!(board.find_run(4), None);
        assert_eq!(board.find_run(3), Some(Cell::One));
    }

    #[test]
    fn test_run_start() {
        let mut board = Board::new(6, 7);
        for col in 1..4 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert!(board.is_run_start(0, 1, 0, 1));
        assert!(!board.is_run_start(0, 2, 0, 1));
        assert_eq!(board.run_length(0, 1, 0, 1), 3);
    }
}
