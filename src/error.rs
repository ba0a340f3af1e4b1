//! Error types.
//!
//! Having no legal move is not an error anywhere in the engine; it shows up
//! as an empty move set or a `None` decision. The errors here cover direct
//! requests that would corrupt a game and bad configuration.

use thiserror::Error;

use crate::board::Color;

/// Reasons a requested move is rejected by [`crate::game::Game::play`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move: ({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },
    #[error("illegal move: ({x}, {y}) is not empty")]
    Occupied { x: usize, y: usize },
    #[error("illegal move: ({x}, {y}) flips nothing for {color}")]
    NotLegal { x: usize, y: usize, color: Color },
    #[error("illegal move: the game is over")]
    GameOver,
}

/// Configuration problems, reported before any game starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown strategy '{0}' (expected one of: minimax, heuristic, mcts, human)")]
    UnknownStrategy(String),
    #[error("both players were given the color {0}")]
    SameColor(Color),
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}
