use connect4_core::{Board, Cell, Player, Window};

// Window weights, scored from the AI's point of view.
// Offense is weighted above defense: an open three of ours is worth more
// than an open three of theirs costs.
const FOUR_IN_WINDOW: i32 = 100;
const OPEN_THREE: i32 = 5;
const OPEN_TWO: i32 = 2;
const OPPONENT_OPEN_THREE: i32 = -4;

// Bonus per AI token in the middle column, which takes part in the most lines
const CENTER_TOKEN: i32 = 3;

/// Tunable weights for the window heuristic. `Default` gives the
/// standard values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalWeights {
    pub four: i32,
    pub open_three: i32,
    pub open_two: i32,
    pub opponent_open_three: i32,
    pub center_token: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            four: FOUR_IN_WINDOW,
            open_three: OPEN_THREE,
            open_two: OPEN_TWO,
            opponent_open_three: OPPONENT_OPEN_THREE,
            center_token: CENTER_TOKEN,
        }
    }
}

impl EvalWeights {
    /// Scores one line of four cells for `me`.
    pub fn score_window(&self, window: &Window, me: Player) -> i32 {
        let mut mine = 0;
        let mut theirs = 0;
        let mut empty = 0;
        for &cell in window {
            match cell.owner() {
                Some(owner) if owner == me => mine += 1,
                Some(_) => theirs += 1,
                None => empty += 1,
            }
        }

        let mut score = 0;
        if mine == 4 {
            score += self.four;
        } else if mine == 3 && empty == 1 {
            score += self.open_three;
        } else if mine == 2 && empty == 2 {
            score += self.open_two;
        }

        // Scored independently of our own pattern
        if theirs == 3 && empty == 1 {
            score += self.opponent_open_three;
        }

        score
    }

    /// Heuristic value of `board` for `me`. Does not look at whether the
    /// game is over; terminal positions are scored by the search.
    pub fn evaluate(&self, board: &Board, me: Player) -> i32 {
        let center = board.cols() / 2;
        let center_tokens = (0..board.column_height(center))
            .filter(|&row| board.cell(row, center) == Some(Cell::Token(me)))
            .count() as i32;

        let windows: i32 = board
            .windows()
            .map(|window| self.score_window(&window, me))
            .sum();

        center_tokens * self.center_token + windows
    }
}

/// Scores a window for the AI with the default weights.
pub fn evaluate_window(window: &Window) -> i32 {
    EvalWeights::default().score_window(window, Player::AI)
}

/// Evaluates a position from the AI's perspective with the default weights.
/// Positive scores favor the AI, negative scores favor the human.
pub fn evaluate_position(board: &Board) -> i32 {
    EvalWeights::default().evaluate(board, Player::AI)
}
