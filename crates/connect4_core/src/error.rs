use thiserror::Error;

/// Reasons a token cannot be placed in a column.
///
/// `Board::drop_token` folds both into a plain `false`; `Board::play` reports
/// which one happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Problems building a board from dimensions or a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("snapshot row {row} has {found} cells, expected {expected}")]
    RaggedSnapshot {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("floating token at row {row}, column {col}")]
    FloatingToken { row: usize, col: usize },
}
