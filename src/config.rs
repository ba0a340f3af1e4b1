//! Runtime engine configuration.

use crate::constants::{DEFAULT_DEPTH, EXPLORATION_PARAM, N_ITERATIONS};
use crate::error::ConfigError;

/// Knobs shared by the computer strategies.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Plies searched below each root move by the alpha-beta strategies.
    pub depth: u32,
    /// MCTS rounds per decision.
    pub iterations: usize,
    /// UCT exploration constant.
    pub exploration: f64,
    /// Seed for the MCTS random source; `None` seeds from the environment.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            iterations: N_ITERATIONS,
            exploration: EXPLORATION_PARAM,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Reject settings no strategy can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "depth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.exploration.is_finite() || self.exploration <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "exploration",
                reason: format!("must be a positive number (got {})", self.exploration),
            });
        }
        Ok(())
    }
}
