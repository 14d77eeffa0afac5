use connect4_core::{Board, Move, Player};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{SearchConfig, MAX_DEPTH, MIN_DEPTH};
use crate::error::{ConfigError, EngineError};
use crate::search::{search_best_move, SearchResult, SearchStats};

/// Computer opponent: a search configuration plus the RNG used for
/// random tie-breaking.
pub struct ConnectFourAI {
    config: SearchConfig,
    rng: StdRng,
    last_stats: Option<SearchStats>,
}

impl ConnectFourAI {
    /// Creates an AI searching `depth` plies, clamped to the supported range.
    pub fn new(depth: u8) -> Self {
        let config = SearchConfig::default().with_depth(depth.clamp(MIN_DEPTH, MAX_DEPTH));
        Self::build(config)
    }

    pub fn with_config(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            last_stats: None,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn depth(&self) -> u8 {
        self.config.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth.clamp(MIN_DEPTH, MAX_DEPTH);
    }

    /// Statistics of the most recent search, if any.
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_stats
    }

    /// Searches for `player`'s best column without touching `board`.
    ///
    /// The evaluation always favours the AI token, so `player` only decides
    /// whether the search maximizes or minimizes.
    pub fn choose_move(&mut self, board: &Board, player: Player) -> SearchResult {
        let maximizing = player == Player::AI;
        let (result, stats) = search_best_move(board, &self.config, maximizing, &mut self.rng);
        self.last_stats = Some(stats);
        result
    }

    /// Searches and applies the chosen move for `player`.
    pub fn play_turn(&mut self, board: &mut Board, player: Player) -> Result<Move, EngineError> {
        let result = self.choose_move(board, player);
        let Some(col) = result.column else {
            warn!("asked to move for player {} on a finished board", player.id());
            return Err(EngineError::NoMoveAvailable);
        };

        let mv = board.play(col, player)?;
        info!(
            "player {} plays column {} (row {}), value {}",
            player.id(),
            mv.col,
            mv.row,
            result.value
        );
        Ok(mv)
    }
}

impl Default for ConnectFourAI {
    fn default() -> Self {
        Self::build(SearchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TieBreak;
    use crate::search::WIN_SCORE;
    use connect4_core::{Cell, GameStatus};

    #[test]
    fn depth_is_clamped() {
        assert_eq!(ConnectFourAI::new(0).depth(), MIN_DEPTH);
        assert_eq!(ConnectFourAI::new(200).depth(), MAX_DEPTH);
        let mut ai = ConnectFourAI::default();
        assert_eq!(ai.depth(), 4);
        ai.set_depth(6);
        assert_eq!(ai.depth(), 6);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SearchConfig::default().with_depth(0);
        assert!(matches!(
            ConnectFourAI::with_config(config),
            Err(ConfigError::DepthOutOfRange { .. })
        ));
    }

    #[test]
    fn choose_move_does_not_mutate() {
        let mut board = Board::new();
        board.drop_token(3, Player::HUMAN);
        let before = board.clone();
        let mut ai = ConnectFourAI::new(4);
        let result = ai.choose_move(&board, Player::AI);
        assert!(result.column.is_some());
        assert_eq!(board, before);
        assert!(ai.last_stats().is_some_and(|stats| stats.nodes > 1));
    }

    #[test]
    fn play_turn_takes_the_win() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_token(col, Player::AI);
            board.drop_token(col, Player::HUMAN);
        }
        let mut ai = ConnectFourAI::new(3);
        let mv = ai.play_turn(&mut board, Player::AI).unwrap();
        assert_eq!(mv, Move::new(3, 0, Player::AI));
        assert_eq!(board.status(), GameStatus::Won(Player::AI));
    }

    #[test]
    fn play_turn_on_finished_game_fails() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_token(0, Player::HUMAN);
        }
        let mut ai = ConnectFourAI::new(2);
        assert_eq!(ai.play_turn(&mut board, Player::AI), Err(EngineError::NoMoveAvailable));
        assert_eq!(board.cell(4, 0), Some(Cell::Empty));
    }

    #[test]
    fn seeded_random_ties_are_reproducible() {
        let config = SearchConfig::default()
            .with_depth(2)
            .with_tie_break(TieBreak::Random)
            .with_seed(17);
        let mut a = ConnectFourAI::with_config(config.clone()).unwrap();
        let mut b = ConnectFourAI::with_config(config).unwrap();

        let mut board_a = Board::new();
        let mut board_b = Board::new();
        let mut player = Player::HUMAN;
        for _ in 0..10 {
            let ma = a.play_turn(&mut board_a, player).unwrap();
            let mb = b.play_turn(&mut board_b, player).unwrap();
            assert_eq!(ma, mb);
            if board_a.status() != GameStatus::InProgress {
                break;
            }
            player = player.opponent();
        }
    }

    #[test]
    fn human_side_search_minimizes() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_token(col, Player::HUMAN);
            board.drop_token(col, Player::AI);
        }
        board.drop_token(6, Player::AI);
        let mut ai = ConnectFourAI::new(2);
        // Human to move completes the bottom row; AI to move must block it
        let human = ai.choose_move(&board, Player::HUMAN);
        assert_eq!(human.column, Some(3));
        assert_eq!(human.value, -WIN_SCORE);
        let reply = ai.choose_move(&board, Player::AI);
        assert_eq!(reply.column, Some(3));
    }
}
