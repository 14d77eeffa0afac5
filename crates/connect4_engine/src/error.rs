use connect4_core::MoveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no move available: the game is already over")]
    NoMoveAvailable,

    #[error("engine chose an unplayable column: {0}")]
    Move(#[from] MoveError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("search depth {depth} is outside {min}..={max}")]
    DepthOutOfRange { depth: u8, min: u8, max: u8 },
}
