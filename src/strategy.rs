//! Strategy dispatch.
//!
//! A seat in the game is driven by an [`Agent`]: a human, whose moves come
//! from outside, or one of the search strategies. The set is closed; it is
//! chosen by name through [`StrategyKind`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::heuristic::HeuristicStrategy;
use crate::mcts::MctsStrategy;
use crate::minimax::MinimaxStrategy;
use crate::player::Player;
use crate::rules::Move;

/// Something that can pick a move for `player`.
pub trait Strategy {
    /// Choose a move from `player`'s legal moves on `board`, or `None` when
    /// there is none. `board` is never modified.
    fn select_move(&mut self, board: &Board, player: &Player, opponent: &Player) -> Option<Move>;
}

/// Strategy identifiers accepted on the command line and by [`Agent::from_name`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Minimax,
    Heuristic,
    Mcts,
    Human,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::Minimax,
        StrategyKind::Heuristic,
        StrategyKind::Mcts,
        StrategyKind::Human,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Mcts => "mcts",
            StrategyKind::Human => "human",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// The controller of one seat.
#[derive(Clone, Debug)]
pub enum Agent {
    Human,
    Minimax(MinimaxStrategy),
    Heuristic(HeuristicStrategy),
    Mcts(MctsStrategy),
}

impl Agent {
    /// Build the agent for `kind` from `config`.
    pub fn new(kind: StrategyKind, config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(match kind {
            StrategyKind::Human => Agent::Human,
            StrategyKind::Minimax => Agent::Minimax(MinimaxStrategy::new(config.depth)),
            StrategyKind::Heuristic => Agent::Heuristic(HeuristicStrategy::new(config.depth)),
            StrategyKind::Mcts => Agent::Mcts(MctsStrategy::new(
                config.iterations,
                config.exploration,
                config.seed,
            )),
        })
    }

    /// Parse `name` and build the agent; unknown names are rejected here.
    pub fn from_name(name: &str, config: &EngineConfig) -> Result<Self, ConfigError> {
        Self::new(name.parse()?, config)
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Agent::Human => StrategyKind::Human,
            Agent::Minimax(_) => StrategyKind::Minimax,
            Agent::Heuristic(_) => StrategyKind::Heuristic,
            Agent::Mcts(_) => StrategyKind::Mcts,
        }
    }

    /// Humans supply their own destinations.
    pub fn is_human(&self) -> bool {
        matches!(self, Agent::Human)
    }
}

impl Strategy for Agent {
    /// Delegates to the wrapped strategy. A human agent never searches and
    /// always answers `None`; check [`Agent::is_human`] first.
    fn select_move(&mut self, board: &Board, player: &Player, opponent: &Player) -> Option<Move> {
        match self {
            Agent::Human => None,
            Agent::Minimax(s) => s.select_move(board, player, opponent),
            Agent::Heuristic(s) => s.select_move(board, player, opponent),
            Agent::Mcts(s) => s.select_move(board, player, opponent),
        }
    }
}
