//! Constants for board dimensions, evaluation weights and search parameters.
//!
//! Everything the engine treats as fixed lives here. Runtime knobs that a
//! caller may want to change (depth, iterations, seed) are collected in
//! [`crate::config::EngineConfig`], whose defaults come from this module.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Othello is always played on 8x8.
pub const N: usize = 8;

/// Total number of cells on the board.
pub const CELLS: usize = N * N;

/// `(dx, dy)` steps for the eight scan directions: the four orthogonal
/// directions first, then the four diagonals.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

// =============================================================================
// Static Evaluation
// =============================================================================

/// Positional weight of each cell, indexed `[x][y]`.
///
/// Corners are worth the most, the cells diagonally next to a corner are
/// the most dangerous to own, and edges are mildly favourable.
pub const BOARD_WEIGHTS: [[i32; N]; N] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

// =============================================================================
// Alpha-Beta Search Parameters
// =============================================================================

/// Default number of plies searched below each root move.
pub const DEFAULT_DEPTH: u32 = 2;

/// Plies the heuristic strategy removes from the configured depth.
pub const HEURISTIC_DEPTH_REDUCTION: u32 = 1;

/// Bound used as +/- infinity for the alpha-beta window.
pub const SCORE_INF: i32 = i32::MAX;

// =============================================================================
// MCTS (Monte Carlo Tree Search) Parameters
// =============================================================================

/// Default number of select/expand/simulate/backpropagate rounds per move.
pub const N_ITERATIONS: usize = 100;

/// UCT exploration constant.
pub const EXPLORATION_PARAM: f64 = std::f64::consts::SQRT_2;
