// Depth-limited minimax with alpha-beta pruning.
//
// The search explores by mutating a single board in place: drop a token,
// recurse, undo. No node tree is ever allocated. The AI (player two) is the
// maximizing side and the human (player one) the minimizing side.
use std::time::{Duration, Instant};

use connect4_core::{is_terminal, Board, Player};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

use crate::config::{SearchConfig, TieBreak, MIN_DEPTH};
use crate::evaluation::EvalWeights;

/// Value of a position the AI has won. Larger than any heuristic sum, so a
/// forced result always outranks positional play.
pub const WIN_SCORE: i32 = 100_000_000;
pub const LOSS_SCORE: i32 = -WIN_SCORE;
pub const DRAW_SCORE: i32 = 0;

// Bounds of the initial search window
const INFINITY: i32 = i32::MAX;
const NEG_INFINITY: i32 = -i32::MAX;

/// The column chosen at a node and its minimax value.
///
/// `column` is `None` at leaves, including the root when the board is already
/// terminal; callers must check it before applying the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i32,
}

impl SearchResult {
    fn leaf(value: i32) -> Self {
        Self { column: None, value }
    }

    pub fn is_no_move(&self) -> bool {
        self.column.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    fn absorb(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

struct Searcher {
    weights: EvalWeights,
    stats: SearchStats,
}

impl Searcher {
    fn new(weights: EvalWeights) -> Self {
        Self {
            weights,
            stats: SearchStats::default(),
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if is_terminal(board) {
            return SearchResult::leaf(terminal_value(board));
        }
        if depth == 0 {
            return SearchResult::leaf(self.weights.evaluate(board, Player::AI));
        }

        let player = side_to_move(maximizing);
        let mut best = SearchResult {
            column: board.valid_moves().next(),
            value: if maximizing { NEG_INFINITY } else { INFINITY },
        };

        for col in 0..board.cols() {
            if !board.drop_token(col, player) {
                continue;
            }
            let value = self.minimax(board, depth - 1, alpha, beta, !maximizing).value;
            board.undo_move(col);

            if maximizing {
                if value > best.value {
                    best = SearchResult { column: Some(col), value };
                }
                alpha = alpha.max(best.value);
            } else {
                if value < best.value {
                    best = SearchResult { column: Some(col), value };
                }
                beta = beta.min(best.value);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Scores every root column. With `margin` 1 the running bound trails the
    /// best value by one, so any column tying the best comes back exact.
    fn score_root(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        margin: i32,
    ) -> Vec<(usize, i32)> {
        self.stats.nodes += 1;

        let player = side_to_move(maximizing);
        let mut best = if maximizing { NEG_INFINITY } else { INFINITY };
        let mut scored = Vec::with_capacity(board.cols());

        for col in 0..board.cols() {
            if !board.drop_token(col, player) {
                continue;
            }
            let (alpha, beta) = if maximizing {
                (best.saturating_sub(margin), INFINITY)
            } else {
                (NEG_INFINITY, best.saturating_add(margin))
            };
            let value = self.minimax(board, depth - 1, alpha, beta, !maximizing).value;
            board.undo_move(col);

            best = if maximizing { best.max(value) } else { best.min(value) };
            scored.push((col, value));
        }

        scored
    }
}

fn side_to_move(maximizing: bool) -> Player {
    if maximizing {
        Player::AI
    } else {
        Player::HUMAN
    }
}

fn terminal_value(board: &Board) -> i32 {
    if board.check_winner(Player::AI) {
        WIN_SCORE
    } else if board.check_winner(Player::HUMAN) {
        LOSS_SCORE
    } else {
        DRAW_SCORE
    }
}

/// Plain alpha-beta search with the standard weights.
///
/// `maximizing` is true when the AI is to move. The board is mutated during
/// the search and restored before returning. Ties go to the lowest column.
pub fn search(board: &mut Board, depth: u8, maximizing: bool) -> SearchResult {
    Searcher::new(EvalWeights::default()).minimax(board, depth, NEG_INFINITY, INFINITY, maximizing)
}

/// Configurable entry point used by the AI player.
///
/// Applies the configured weights, tie-break rule and root parallelism. Both
/// the sequential and the parallel path return the same column and value
/// for the leftmost tie rule.
pub fn search_best_move<R: Rng + ?Sized>(
    board: &Board,
    config: &SearchConfig,
    maximizing: bool,
    rng: &mut R,
) -> (SearchResult, SearchStats) {
    let start = Instant::now();
    let depth = config.depth.max(MIN_DEPTH);
    debug!(
        "searching depth {} for player {} ({} tokens on board, parallel: {})",
        depth,
        side_to_move(maximizing).id(),
        board.token_count(),
        config.parallel
    );

    let mut stats = SearchStats::default();
    let result = if is_terminal(board) {
        stats.nodes = 1;
        SearchResult::leaf(terminal_value(board))
    } else {
        let scored = if config.parallel {
            score_root_parallel(board, depth, maximizing, config.weights, &mut stats)
        } else {
            let margin = match config.tie_break {
                TieBreak::Leftmost => 0,
                TieBreak::Random => 1,
            };
            let mut searcher = Searcher::new(config.weights);
            let mut scratch = board.clone();
            let scored = searcher.score_root(&mut scratch, depth, maximizing, margin);
            stats.absorb(searcher.stats);
            scored
        };
        pick_column(&scored, maximizing, config.tie_break, rng)
    };

    stats.elapsed = start.elapsed();
    debug!(
        "search finished in {:?}: column {:?}, value {} ({} nodes, {} cutoffs)",
        stats.elapsed, result.column, result.value, stats.nodes, stats.cutoffs
    );

    (result, stats)
}

// Each root column gets its own board copy and a full window, so every
// value is exact.
fn score_root_parallel(
    board: &Board,
    depth: u8,
    maximizing: bool,
    weights: EvalWeights,
    stats: &mut SearchStats,
) -> Vec<(usize, i32)> {
    let player = side_to_move(maximizing);
    let columns: Vec<usize> = board.valid_moves().collect();

    let results: Vec<(usize, i32, SearchStats)> = columns
        .into_par_iter()
        .map(|col| {
            let mut child = board.clone();
            child.drop_token(col, player);
            let mut searcher = Searcher::new(weights);
            let value = searcher
                .minimax(&mut child, depth - 1, NEG_INFINITY, INFINITY, !maximizing)
                .value;
            (col, value, searcher.stats)
        })
        .collect();

    stats.nodes += 1;
    results
        .into_iter()
        .map(|(col, value, child_stats)| {
            stats.absorb(child_stats);
            (col, value)
        })
        .collect()
}

fn pick_column<R: Rng + ?Sized>(
    scored: &[(usize, i32)],
    maximizing: bool,
    tie_break: TieBreak,
    rng: &mut R,
) -> SearchResult {
    let best = if maximizing {
        scored.iter().map(|&(_, value)| value).max()
    } else {
        scored.iter().map(|&(_, value)| value).min()
    };
    let Some(best) = best else {
        return SearchResult::leaf(DRAW_SCORE);
    };

    let tied: Vec<usize> = scored
        .iter()
        .filter(|&&(_, value)| value == best)
        .map(|&(col, _)| col)
        .collect();
    let column = match tie_break {
        TieBreak::Leftmost => tied.first().copied(),
        TieBreak::Random => tied.choose(rng).copied(),
    };

    SearchResult { column, value: best }
}
