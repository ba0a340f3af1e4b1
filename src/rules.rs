//! Othello move rules: legal-move discovery and move execution.
//!
//! A destination is legal for a color when at least one of the eight
//! straight lines leaving it starts with a run of opposing discs that is
//! closed off by a disc of the acting color. The closing disc is the
//! line's *origin*; a [`LegalMoves`] map records every origin for each
//! destination. Applying a move claims the destination and flips every
//! disc strictly between it and each origin.
//!
//! Two flavours of application exist. [`take_space`], [`take_spaces`] and
//! [`apply_move`] keep both players' ownership indexes in sync with the
//! board; [`play_on_board`] only touches the board and is what the search
//! code uses on its private copies.

use std::collections::BTreeMap;

use crate::board::{Board, Color, Point, Square, on_board};
use crate::constants::DIRECTIONS;
use crate::player::Player;

/// Destination -> origins that justify it. Ordered row-major so that every
/// consumer iterates destinations in the same stable order.
pub type LegalMoves = BTreeMap<Point, Vec<Point>>;

/// A chosen destination together with the origins that anchor it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub dest: Point,
    pub origins: Vec<Point>,
}

impl Move {
    pub fn new(dest: Point, origins: Vec<Point>) -> Self {
        Self { dest, origins }
    }
}

/// Compute every legal destination for `color` with its origins.
///
/// Must be recomputed whenever the board changes.
pub fn legal_moves(board: &Board, color: Color) -> LegalMoves {
    let mut moves = LegalMoves::new();
    for (pt, sq) in board.cells() {
        if !sq.is_empty() {
            continue;
        }
        let origins: Vec<Point> = DIRECTIONS
            .iter()
            .filter_map(|&dir| single_origin(board, pt, dir, color))
            .collect();
        if !origins.is_empty() {
            moves.insert(pt, origins);
        }
    }
    moves
}

/// Cheaper check than [`legal_moves`] when only existence matters.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board.cells().any(|(pt, sq)| {
        sq.is_empty()
            && DIRECTIONS
                .iter()
                .any(|&dir| single_origin(board, pt, dir, color).is_some())
    })
}

/// Scan from `pt` in direction `dir` and return the disc of `color` that
/// closes a run of one or more opposing discs, if there is one.
fn single_origin(board: &Board, pt: Point, dir: (isize, isize), color: Color) -> Option<Point> {
    let (dx, dy) = dir;
    let opp = Square::Owned(color.opponent());
    let mut x = pt.0 as isize + dx;
    let mut y = pt.1 as isize + dy;

    // The adjacent cell must belong to the opponent.
    if board.get_signed(x, y)? != opp {
        return None;
    }

    loop {
        x += dx;
        y += dy;
        match board.get_signed(x, y)? {
            Square::Empty => return None,
            Square::Owned(c) if c == color => return Some((x as usize, y as usize)),
            Square::Owned(_) => {}
        }
    }
}

/// The cells strictly between `origin` and `dest`, walking from the origin.
///
/// Points that do not share a row, column or diagonal yield nothing, and
/// the walk stops at the board edge, so malformed pairs never panic.
fn flip_path(origin: Point, dest: Point) -> Vec<Point> {
    let (ox, oy) = (origin.0 as isize, origin.1 as isize);
    let (tx, ty) = (dest.0 as isize, dest.1 as isize);
    let (ddx, ddy) = (tx - ox, ty - oy);
    if ddx != 0 && ddy != 0 && ddx.abs() != ddy.abs() {
        return Vec::new();
    }
    let (dx, dy) = (ddx.signum(), ddy.signum());

    let mut path = Vec::new();
    let (mut x, mut y) = (ox + dx, oy + dy);
    while (x, y) != (tx, ty) {
        if !on_board(x, y) {
            break;
        }
        path.push((x as usize, y as usize));
        x += dx;
        y += dy;
    }
    path
}

/// Claim a single cell for `acting`, keeping both ownership indexes in sync.
///
/// Off-board coordinates and cells already owned by `acting` are left alone.
pub fn take_space(board: &mut Board, acting: &mut Player, opponent: &mut Player, pt: Point) {
    let Some(previous) = board.get(pt) else {
        return;
    };
    if previous.is_owned_by(acting.color()) {
        return;
    }
    if previous.is_owned_by(opponent.color()) {
        opponent.lose(pt);
    }
    board.set(pt, Square::Owned(acting.color()));
    acting.gain(pt);
}

/// Execute `dest` using the origins recorded for it in `moves`.
///
/// A destination missing from `moves` is still claimed, but nothing is
/// flipped. [`crate::game::Game::play`] rejects such requests before they
/// get here.
pub fn take_spaces(
    board: &mut Board,
    acting: &mut Player,
    opponent: &mut Player,
    moves: &LegalMoves,
    dest: Point,
) {
    let origins = moves.get(&dest).map(Vec::as_slice).unwrap_or(&[]);
    apply_move(board, acting, opponent, dest, origins);
}

/// Place a disc for `acting` at `dest` and flip every run toward `origins`.
pub fn apply_move(
    board: &mut Board,
    acting: &mut Player,
    opponent: &mut Player,
    dest: Point,
    origins: &[Point],
) {
    match board.get(dest) {
        None => return,
        Some(sq) if sq.is_owned_by(acting.color()) => return,
        Some(_) => {}
    }
    take_space(board, acting, opponent, dest);
    for &origin in origins {
        for pt in flip_path(origin, dest) {
            take_space(board, acting, opponent, pt);
        }
    }
}

/// Board-only counterpart of [`apply_move`] used on search copies.
pub fn play_on_board(board: &mut Board, color: Color, dest: Point, origins: &[Point]) {
    match board.get(dest) {
        None => return,
        Some(sq) if sq.is_owned_by(color) => return,
        Some(_) => {}
    }
    board.set(dest, Square::Owned(color));
    for &origin in origins {
        for pt in flip_path(origin, dest) {
            board.set(pt, Square::Owned(color));
        }
    }
}

/// The game is over when the board is full or neither side can move.
pub fn is_terminal(board: &Board) -> bool {
    board.is_full()
        || (!has_legal_move(board, Color::Black) && !has_legal_move(board, Color::White))
}
