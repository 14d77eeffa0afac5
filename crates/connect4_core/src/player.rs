/// One of the two sides of a game.
///
/// `One` moves first and is the human in a human-vs-AI game; `Two` is the AI
/// token the evaluator scores in favour of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const HUMAN: Player = Player::One;
    pub const AI: Player = Player::Two;

    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric id used in snapshots and logs (1 or 2).
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Token(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Token(player) => Some(player),
        }
    }

    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Token(player)
    }

    /// 0 for an empty cell, otherwise the owner's id.
    pub fn id(self) -> u8 {
        self.owner().map_or(0, Player::id)
    }

    pub fn from_id(id: u8) -> Option<Cell> {
        match id {
            0 => Some(Cell::Empty),
            _ => Player::from_id(id).map(Cell::Token),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        Cell::Token(player)
    }
}
