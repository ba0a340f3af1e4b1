//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search is written once in [`AlphaBeta`] and shared by
//! [`MinimaxStrategy`] and [`crate::heuristic::HeuristicStrategy`]; the two
//! differ only in how the root window is handled, whether candidate moves
//! are ordered, which root moves are settled without a search, and how deep
//! they look.
//!
//! Every recursion level works on its own copy of the board, so the board
//! handed in by the caller is never touched.

use tracing::debug;

use crate::board::{Board, Color, Point, str_coord};
use crate::constants::{BOARD_WEIGHTS, DEFAULT_DEPTH, SCORE_INF};
use crate::eval::score_board;
use crate::player::Player;
use crate::rules::{LegalMoves, Move, has_legal_move, legal_moves, play_on_board};
use crate::strategy::Strategy;

/// Alpha-beta search state for one decision.
pub(crate) struct AlphaBeta {
    me: Color,
    opp: Color,
    order_moves: bool,
    share_window: bool,
    shortcuts: bool,
    /// Number of calls to [`AlphaBeta::search`], leaves included.
    pub nodes: u64,
}

impl AlphaBeta {
    /// Full-width search: row-major move order and an exact value for
    /// every root move.
    pub(crate) fn exact(me: Color, opp: Color) -> Self {
        Self {
            me,
            opp,
            order_moves: false,
            share_window: false,
            shortcuts: false,
            nodes: 0,
        }
    }

    /// Weight-ordered search whose root moves share one alpha bound.
    ///
    /// A forced move is returned without searching, and a root move that
    /// leaves the opponent without a reply (or sits at depth 0) is scored
    /// statically instead of costing a [`AlphaBeta::search`] call.
    pub(crate) fn ordered(me: Color, opp: Color) -> Self {
        Self {
            me,
            opp,
            order_moves: true,
            share_window: true,
            shortcuts: true,
            nodes: 0,
        }
    }

    /// Candidate moves in the order they are searched.
    ///
    /// Unordered search keeps the row-major order of [`LegalMoves`];
    /// ordered search tries the highest-weighted destinations first, ties
    /// keeping row-major order.
    fn candidates(&self, moves: LegalMoves) -> Vec<(Point, Vec<Point>)> {
        let mut list: Vec<(Point, Vec<Point>)> = moves.into_iter().collect();
        if self.order_moves {
            list.sort_by_key(|&((x, y), _)| std::cmp::Reverse(BOARD_WEIGHTS[x][y]));
        }
        list
    }

    /// Pick the best root move. Each move is applied to a copy of `board`
    /// and the opponent's reply layer is searched `depth` plies deep.
    pub(crate) fn search_root(&mut self, board: &Board, depth: u32) -> Option<(Move, i32)> {
        let moves = legal_moves(board, self.me);

        if self.shortcuts && moves.len() == 1 {
            return moves.into_iter().next().map(|(dest, origins)| {
                let mut child = board.clone();
                play_on_board(&mut child, self.me, dest, &origins);
                (Move::new(dest, origins), score_board(&child, self.me))
            });
        }

        let mut best: Option<(Move, i32)> = None;
        let mut alpha = -SCORE_INF;

        for (dest, origins) in self.candidates(moves) {
            let mut child = board.clone();
            play_on_board(&mut child, self.me, dest, &origins);

            let score = if self.shortcuts && (depth == 0 || !has_legal_move(&child, self.opp)) {
                score_board(&child, self.me)
            } else {
                let window = if self.share_window { alpha } else { -SCORE_INF };
                self.search(&child, depth, false, window, SCORE_INF)
            };

            if best.as_ref().is_none_or(|&(_, s)| score > s) {
                best = Some((Move::new(dest, origins), score));
            }
            alpha = alpha.max(score);
        }
        best
    }

    /// Minimax value of `board` with `depth` plies left.
    ///
    /// A side with no legal move is scored statically, like a depth-0 node.
    pub(crate) fn search(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return score_board(board, self.me);
        }

        let mover = if maximizing { self.me } else { self.opp };
        let moves = legal_moves(board, mover);
        if moves.is_empty() {
            return score_board(board, self.me);
        }

        if maximizing {
            let mut max_score = -SCORE_INF;
            for (dest, origins) in self.candidates(moves) {
                let mut child = board.clone();
                play_on_board(&mut child, mover, dest, &origins);
                let score = self.search(&child, depth - 1, false, alpha, beta);
                max_score = max_score.max(score);
                alpha = alpha.max(max_score);
                if beta <= alpha {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = SCORE_INF;
            for (dest, origins) in self.candidates(moves) {
                let mut child = board.clone();
                play_on_board(&mut child, mover, dest, &origins);
                let score = self.search(&child, depth - 1, true, alpha, beta);
                min_score = min_score.min(score);
                beta = beta.min(min_score);
                if beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }
}

/// Plain minimax: row-major move order and an exact value for every root move.
#[derive(Debug, Clone)]
pub struct MinimaxStrategy {
    depth: u32,
    nodes_evaluated: u64,
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl MinimaxStrategy {
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            nodes_evaluated: 0,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes visited by the most recent [`Strategy::select_move`] call.
    pub fn nodes_evaluated(&self) -> u64 {
        self.nodes_evaluated
    }

    pub fn reset_nodes_evaluated(&mut self) {
        self.nodes_evaluated = 0;
    }
}

impl Strategy for MinimaxStrategy {
    fn select_move(&mut self, board: &Board, player: &Player, opponent: &Player) -> Option<Move> {
        self.reset_nodes_evaluated();
        let mut search = AlphaBeta::exact(player.color(), opponent.color());
        let best = search.search_root(board, self.depth);
        self.nodes_evaluated = search.nodes;

        if let Some((mv, score)) = &best {
            debug!(
                color = %player.color(),
                dest = %str_coord(mv.dest),
                score,
                nodes = self.nodes_evaluated,
                "minimax decision"
            );
        }
        best.map(|(mv, _)| mv)
    }
}
