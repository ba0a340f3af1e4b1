//! Game state: the board, both players, and whose turn it is.
//!
//! This is the surface external callers use. Unlike the raw functions in
//! [`crate::rules`], [`Game::play`] validates its input and leaves the game
//! untouched when a request is not a legal move.

use std::fmt;

use tracing::debug;

use crate::board::{Board, Color, Point, Square, str_coord};
use crate::error::{ConfigError, MoveError};
use crate::player::Player;
use crate::rules::{LegalMoves, Move, apply_move, has_legal_move, is_terminal, legal_moves};
use crate::strategy::Strategy;

/// Result of a game so far.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Winner(Color),
    Draw,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Winner(c) => write!(f, "{c} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    black: Player,
    white: Player,
    turn: Color,
    moves_played: usize,
    passes: usize,
    last_move: Option<Move>,
    last_flipped: usize,
}

impl Game {
    /// Start a game from the opening position. The two players must have
    /// different colors; black moves first.
    pub fn new(color_a: Color, color_b: Color) -> Result<Self, ConfigError> {
        if color_a == color_b {
            return Err(ConfigError::SameColor(color_a));
        }
        Ok(Self::from_board(Board::new(), Color::Black))
    }

    /// Resume from an arbitrary position with `turn` to act. Ownership
    /// indexes are rebuilt from the board, and the turn passes straight to
    /// the other side if `turn` has no move.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut game = Self {
            black: Player::from_board(Color::Black, &board),
            white: Player::from_board(Color::White, &board),
            board,
            turn,
            moves_played: 0,
            passes: 0,
            last_move: None,
            last_flipped: 0,
        };
        if !has_legal_move(&game.board, turn) && has_legal_move(&game.board, turn.opponent()) {
            game.turn = turn.opponent();
            game.passes += 1;
        }
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to act.
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Turns skipped because the side to act had no legal move.
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// Discs turned over by the last move, not counting the placed one.
    pub fn last_flipped(&self) -> usize {
        self.last_flipped
    }

    /// Legal moves for the side to act.
    pub fn legal_moves(&self) -> LegalMoves {
        legal_moves(&self.board, self.turn)
    }

    pub fn legal_moves_for(&self, color: Color) -> LegalMoves {
        legal_moves(&self.board, color)
    }

    pub fn is_over(&self) -> bool {
        is_terminal(&self.board)
    }

    /// Disc counts `(black, white)`.
    pub fn score(&self) -> (usize, usize) {
        (self.black.owned_count(), self.white.owned_count())
    }

    /// Winner by disc count once the game is over.
    pub fn outcome(&self) -> Outcome {
        if !self.is_over() {
            return Outcome::InProgress;
        }
        let (black, white) = self.score();
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Check that `dest` is a legal move for the side to act and return it
    /// with its origins.
    pub fn validate(&self, dest: Point) -> Result<Move, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let (x, y) = dest;
        match self.board.get(dest) {
            None => return Err(MoveError::OutOfBounds { x, y }),
            Some(Square::Owned(_)) => return Err(MoveError::Occupied { x, y }),
            Some(Square::Empty) => {}
        }
        let mut moves = self.legal_moves();
        moves
            .remove(&dest)
            .map(|origins| Move::new(dest, origins))
            .ok_or(MoveError::NotLegal {
                x,
                y,
                color: self.turn,
            })
    }

    /// Play `dest` for the side to act, then hand the turn on.
    ///
    /// Invalid requests are rejected without changing anything.
    pub fn play(&mut self, dest: Point) -> Result<Move, MoveError> {
        let mv = self.validate(dest)?;
        let mover = self.turn;
        let (acting, opponent) = match mover {
            Color::Black => (&mut self.black, &mut self.white),
            Color::White => (&mut self.white, &mut self.black),
        };
        let before = acting.owned_count();
        apply_move(&mut self.board, acting, opponent, mv.dest, &mv.origins);
        self.last_flipped = acting.owned_count().saturating_sub(before + 1);
        self.moves_played += 1;
        self.last_move = Some(mv.clone());
        debug!(
            color = %mover,
            dest = %str_coord(mv.dest),
            flipped = self.last_flipped,
            "move played"
        );
        self.advance_turn();
        Ok(mv)
    }

    /// Turn-skip rule: the opponent acts if it can, otherwise the mover goes
    /// again. When neither can move the turn is left as is and the game is over.
    fn advance_turn(&mut self) {
        let opp = self.turn.opponent();
        if has_legal_move(&self.board, opp) {
            self.turn = opp;
        } else if has_legal_move(&self.board, self.turn) {
            self.passes += 1;
            debug!(color = %opp, "no legal move, turn passes");
        }
    }

    /// Ask `strategy` for a move for the side to act. Nothing is played.
    pub fn choose_move<S: Strategy + ?Sized>(&self, strategy: &mut S) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        let (player, opponent) = match self.turn {
            Color::Black => (&self.black, &self.white),
            Color::White => (&self.white, &self.black),
        };
        strategy.select_move(&self.board, player, opponent)
    }

    /// Let `strategy` choose for the side to act and play its move.
    /// `Ok(None)` means it offered no move.
    pub fn step<S: Strategy + ?Sized>(&mut self, strategy: &mut S) -> Result<Option<Move>, MoveError> {
        match self.choose_move(strategy) {
            Some(mv) => self.play(mv.dest).map(Some),
            None => Ok(None),
        }
    }
}
