use crate::Player;

/// A token placement: the column chosen and the row gravity resolved it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub col: usize,
    pub row: usize,
    pub player: Player,
}

impl Move {
    pub fn new(col: usize, row: usize, player: Player) -> Self {
        Self { col, row, player }
    }
}
