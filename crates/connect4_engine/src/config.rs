use crate::error::ConfigError;
use crate::evaluation::EvalWeights;

pub const MIN_DEPTH: u8 = 1;
pub const MAX_DEPTH: u8 = 12; // 7^12 leaves before pruning; deeper is impractical
pub const DEFAULT_DEPTH: u8 = 4;

/// How to choose between root moves with the same minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Lowest column index wins. Fully deterministic.
    #[default]
    Leftmost,
    /// Uniform choice among the tied columns.
    Random,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub tie_break: TieBreak,
    /// Search root columns on the rayon pool, one board copy each.
    pub parallel: bool,
    /// Seed for random tie-breaking; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            tie_break: TieBreak::Leftmost,
            parallel: false,
            seed: None,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.depth) {
            return Err(ConfigError::DepthOutOfRange {
                depth: self.depth,
                min: MIN_DEPTH,
                max: MAX_DEPTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 4);
        assert_eq!(config.tie_break, TieBreak::Leftmost);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn depth_bounds_are_checked() {
        assert_eq!(
            SearchConfig::default().with_depth(0).validate(),
            Err(ConfigError::DepthOutOfRange { depth: 0, min: MIN_DEPTH, max: MAX_DEPTH })
        );
        assert!(SearchConfig::default().with_depth(MAX_DEPTH + 1).validate().is_err());
        assert!(SearchConfig::default().with_depth(MAX_DEPTH).validate().is_ok());
    }

    #[test]
    fn builder_setters() {
        let config = SearchConfig::default()
            .with_depth(6)
            .with_tie_break(TieBreak::Random)
            .with_parallel(true)
            .with_seed(42);
        assert_eq!(config.depth, 6);
        assert_eq!(config.tie_break, TieBreak::Random);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }
}
