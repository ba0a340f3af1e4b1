//! Static evaluation based on the positional weight table.

use crate::board::{Board, Color, Square};
use crate::constants::BOARD_WEIGHTS;

/// Weighted score from `color`'s point of view: the weights of its cells
/// minus the weights of every other occupied cell.
pub fn score_board(board: &Board, color: Color) -> i32 {
    board
        .cells()
        .map(|((x, y), sq)| match sq {
            Square::Empty => 0,
            Square::Owned(c) if c == color => BOARD_WEIGHTS[x][y],
            Square::Owned(_) => -BOARD_WEIGHTS[x][y],
        })
        .sum()
}

/// Sum of the weights of the cells owned by `color`.
pub fn weighted_total(board: &Board, color: Color) -> i32 {
    board
        .cells()
        .filter(|&(_, sq)| sq.is_owned_by(color))
        .map(|((x, y), _)| BOARD_WEIGHTS[x][y])
        .sum()
}

/// True if `color`'s weighted total beats its opponent's.
pub fn is_winning(board: &Board, color: Color) -> bool {
    weighted_total(board, color) > weighted_total(board, color.opponent())
}
