use log::trace;

use crate::{BoardError, Cell, Move, MoveError, Player};

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// A vertical-stacking grid. Row 0 is the bottom row; tokens in a column
/// always form a contiguous run starting at row 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,     // row-major, row 0 first
    heights: Vec<usize>,  // number of tokens per column
}

impl Board {
    pub fn new() -> Self {
        Self::empty(DEFAULT_ROWS, DEFAULT_COLS)
    }

    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Self::empty(rows, cols))
    }

    fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
            heights: vec![0; cols],
        }
    }

    /// Rebuilds a board from a row-major grid (row 0 = bottom), as produced by
    /// `snapshot`. Rejects ragged grids and tokens without support beneath them.
    pub fn from_snapshot(grid: &[Vec<Cell>]) -> Result<Self, BoardError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        let mut board = Self::with_size(rows, cols)?;

        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != cols {
                return Err(BoardError::RaggedSnapshot {
                    row,
                    expected: cols,
                    found: cells.len(),
                });
            }
            for (col, &cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                // Every token must sit directly on top of the column's stack
                if board.heights[col] != row {
                    return Err(BoardError::FloatingToken { row, col });
                }
                board.cells[row * cols + col] = cell;
                board.heights[col] += 1;
            }
        }

        Ok(board)
    }

    /// Copies the grid out row by row, bottom row first.
    pub fn snapshot(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(<[Cell]>::to_vec).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the cell at `(row, col)`, or `None` when off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Same as `cell` for coordinates already known to be on the board.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn column_height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    pub fn token_count(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn is_valid_move(&self, col: usize) -> bool {
        col < self.cols && self.heights[col] < self.rows
    }

    /// Playable columns in ascending order.
    pub fn valid_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.cols).filter(move |&col| self.is_valid_move(col))
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.rows)
    }

    /// Drops `player`'s token into `col`, reporting where it landed.
    pub fn play(&mut self, col: usize, player: Player) -> Result<Move, MoveError> {
        if col >= self.cols {
            return Err(MoveError::ColumnOutOfRange { col, cols: self.cols });
        }
        let row = self.heights[col];
        if row == self.rows {
            return Err(MoveError::ColumnFull(col));
        }

        self.cells[row * self.cols + col] = Cell::Token(player);
        self.heights[col] += 1;
        Ok(Move::new(col, row, player))
    }

    /// Places a token if the column accepts one. A full or out-of-range
    /// column leaves the board untouched and returns `false`.
    pub fn drop_token(&mut self, col: usize, player: Player) -> bool {
        self.play(col, player).is_ok()
    }

    /// Removes the topmost token of `col`.
    ///
    /// Must only be called on a non-empty column, paired with an earlier drop.
    pub fn undo_move(&mut self, col: usize) {
        debug_assert!(
            self.column_height(col) > 0,
            "undo_move on empty column {col}"
        );
        let Some(height) = self.heights.get_mut(col) else {
            return;
        };
        if *height == 0 {
            trace!("ignoring undo on empty column {}", col);
            return;
        }
        *height -= 1;
        let row = *height;
        self.cells[row * self.cols + col] = Cell::Empty;
    }

    /// Clears every token, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.heights.fill(0);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
