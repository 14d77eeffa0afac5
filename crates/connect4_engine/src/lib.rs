pub mod ai;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod search;

pub use ai::ConnectFourAI;
pub use config::{SearchConfig, TieBreak, DEFAULT_DEPTH, MAX_DEPTH, MIN_DEPTH};
pub use error::{ConfigError, EngineError};
pub use evaluation::{evaluate_position, evaluate_window, EvalWeights};
pub use search::{search, search_best_move, SearchResult, SearchStats, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
