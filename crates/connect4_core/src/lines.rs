//! Line geometry shared by win detection and position scoring.
//!
//! Every line of four is described by an anchor cell and one of four
//! directions. Win detection walks the lines anchored at a player's tokens;
//! the evaluator walks every in-bounds line as a scoring window.

use crate::{Board, Cell, Player};

/// Number of aligned tokens needed to win, and the length of a scoring window.
pub const WINDOW_LEN: usize = 4;

pub type Window = [Cell; WINDOW_LEN];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Up and to the right (`/`).
    Diagonal,
    /// Up and to the left (`\`).
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// (row step, column step)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Outcome of a position as seen by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl Board {
    /// Cells of the line of four starting at `(row, col)` heading in `dir`,
    /// or `None` when the line leaves the board.
    pub fn window(&self, row: usize, col: usize, dir: Direction) -> Option<Window> {
        let (dr, dc) = dir.delta();
        let span = (WINDOW_LEN - 1) as isize;
        let end_row = row as isize + dr * span;
        let end_col = col as isize + dc * span;
        if row >= self.rows()
            || col >= self.cols()
            || end_row < 0
            || end_col < 0
            || end_row >= self.rows() as isize
            || end_col >= self.cols() as isize
        {
            return None;
        }

        let mut window = [Cell::Empty; WINDOW_LEN];
        for (i, slot) in window.iter_mut().enumerate() {
            let r = (row as isize + dr * i as isize) as usize;
            let c = (col as isize + dc * i as isize) as usize;
            *slot = self.at(r, c);
        }
        Some(window)
    }

    /// Every in-bounds window in every direction.
    pub fn windows(&self) -> impl Iterator<Item = Window> + '_ {
        let (rows, cols) = (self.rows(), self.cols());
        Direction::ALL.into_iter().flat_map(move |dir| {
            (0..rows).flat_map(move |row| {
                (0..cols).filter_map(move |col| self.window(row, col, dir))
            })
        })
    }

    /// True if `player` has four tokens in a row anywhere on the board.
    pub fn check_winner(&self, player: Player) -> bool {
        let token = Cell::Token(player);
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.at(row, col) != token {
                    continue;
                }
                let won = Direction::ALL.into_iter().any(|dir| {
                    self.window(row, col, dir)
                        .is_some_and(|w| w.iter().all(|&cell| cell == token))
                });
                if won {
                    return true;
                }
            }
        }
        false
    }

    pub fn winner(&self) -> Option<Player> {
        [Player::One, Player::Two]
            .into_iter()
            .find(|&player| self.check_winner(player))
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if self.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

/// A position is terminal once either side has won or no column is playable.
pub fn is_terminal(board: &Board) -> bool {
    board.check_winner(Player::One) || board.check_winner(Player::Two) || board.is_full()
}
