//! A faster alpha-beta player.
//!
//! Uses the same evaluator and recursion as [`crate::minimax`], but prunes
//! much harder: candidate moves are tried best-weighted first, the root
//! shares its alpha bound across moves, and the search stops
//! [`HEURISTIC_DEPTH_REDUCTION`] plies earlier than the configured depth.
//! A forced move is played without searching, and a root move that leaves
//! the opponent no reply is scored on the spot, so even positions where
//! minimax only pays for leaf calls come out cheaper. At the same nominal
//! depth it visits fewer nodes than [`MinimaxStrategy`].
//!
//! [`MinimaxStrategy`]: crate::minimax::MinimaxStrategy

use tracing::debug;

use crate::board::{Board, str_coord};
use crate::constants::{DEFAULT_DEPTH, HEURISTIC_DEPTH_REDUCTION};
use crate::minimax::AlphaBeta;
use crate::player::Player;
use crate::rules::Move;
use crate::strategy::Strategy;

#[derive(Debug, Clone)]
pub struct HeuristicStrategy {
    depth: u32,
    nodes_evaluated: u64,
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl HeuristicStrategy {
    /// `depth` is the nominal depth, the same number a [`crate::minimax::MinimaxStrategy`]
    /// would be built with.
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            nodes_evaluated: 0,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Plies actually searched below each root move.
    pub fn effective_depth(&self) -> u32 {
        self.depth.saturating_sub(HEURISTIC_DEPTH_REDUCTION)
    }

    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes_evaluated
    }

    pub fn reset_nodes_evaluated(&mut self) {
        self.nodes_evaluated = 0;
    }
}

impl Strategy for HeuristicStrategy {
    fn select_move(&mut self, board: &Board, player: &Player, opponent: &Player) -> Option<Move> {
        self.reset_nodes_evaluated();
        let mut search = AlphaBeta::ordered(player.color(), opponent.color());
        let best = search.search_root(board, self.effective_depth());
        self.nodes_evaluated = search.nodes;

        if let Some((mv, score)) = &best {
            debug!(
                color = %player.color(),
                dest = %str_coord(mv.dest),
                score,
                nodes = self.nodes_evaluated,
                "heuristic decision"
            );
        }
        best.map(|(mv, _)| mv)
    }
}
