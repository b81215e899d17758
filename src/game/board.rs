use std::ops::Index;

use super::Player;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player whose marker occupies this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A board coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropError {
    ColumnFull,
    InvalidColumn,
}

/// A `rows × cols` grid stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
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

    /// Get the cell at a specific position.
    ///
    /// Panics if `(row, col)` lies outside the board; use [`Board::cell`] for a
    /// checked lookup.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside a {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Checked lookup
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[pos.row * self.cols + pos.col])
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// One step from `pos` along `(d_row, d_col)`, or `None` if that leaves the board.
    pub fn step(&self, pos: Position, (d_row, d_col): (isize, isize)) -> Option<Position> {
        let next = Position {
            row: pos.row.checked_add_signed(d_row)?,
            col: pos.col.checked_add_signed(d_col)?,
        };
        self.contains(next).then_some(next)
    }

    /// The cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.landing_row(col).is_none()
    }

    /// The row a piece dropped into `col` would settle in
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col].is_empty())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, DropError> {
        if col >= self.cols {
            return Err(DropError::InvalidColumn);
        }

        let row = self.landing_row(col).ok_or(DropError::ColumnFull)?;
        self.cells[row * self.cols + col] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        assert!(self.contains(pos), "{pos:?} is outside the board");
        &self.cells[pos.row * self.cols + pos.col]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Player::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_piece(3, Player::Yellow).unwrap();
        assert_eq!(row, 4); // On top of the first piece
        assert_eq!(board[Position::new(4, 3)], Cell::Yellow);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();
        for _ in 0..DEFAULT_ROWS {
            board.drop_piece(0, Player::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(board.drop_piece(0, Player::Yellow), Err(DropError::ColumnFull));
        assert_eq!(board.occupied(), DEFAULT_ROWS);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert_eq!(board.drop_piece(7, Player::Red), Err(DropError::InvalidColumn));
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 3);
        for col in 0..3 {
            assert!(!board.is_full());
            for _ in 0..2 {
                board.drop_piece(col, Player::Yellow).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), 6);
    }

    #[test]
    fn test_custom_dimensions() {
        let mut board = Board::new(4, 5);
        assert_eq!((board.rows(), board.cols()), (4, 5));
        assert_eq!(board.drop_piece(4, Player::Red), Ok(3));
        assert_eq!(board.row(3), &[Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty, Cell::Red]);
    }

    #[test]
    fn test_step_stays_in_bounds() {
        let board = Board::default();
        let corner = Position::new(0, 0);
        assert_eq!(board.step(corner, (-1, 0)), None);
        assert_eq!(board.step(corner, (0, -1)), None);
        assert_eq!(board.step(corner, (1, 1)), Some(Position::new(1, 1)));

        let far = Position::new(5, 6);
        assert_eq!(board.step(far, (1, 0)), None);
        assert_eq!(board.step(far, (0, 1)), None);
        assert_eq!(board.step(far, (-1, -1)), Some(Position::new(4, 5)));
    }

    #[test]
    fn test_checked_cell_lookup() {
        let board = Board::default();
        assert_eq!(board.cell(Position::new(5, 6)), Some(Cell::Empty));
        assert_eq!(board.cell(Position::new(6, 0)), None);
        assert_eq!(board.cell(Position::new(0, 7)), None);
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Red.player(), Some(Player::Red));
        assert_eq!(Cell::Yellow.player(), Some(Player::Yellow));
    }
}
