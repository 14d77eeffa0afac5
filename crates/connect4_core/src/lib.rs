// Core Connect-Four game logic modules
pub mod board;
pub mod error;
pub mod lines;
pub mod moves;
pub mod player;

// Re-export main types for convenience
pub use board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
pub use error::{BoardError, MoveError};
pub use lines::{is_terminal, Direction, GameStatus, Window, WINDOW_LEN};
pub use moves::Move;
pub use player::{Cell, Player};
