//! A player's color and the index of cells it currently owns.

use crate::board::{Board, Color, Point};

/// A side in the game.
///
/// `owned` is a secondary index over the board: every cell whose occupancy
/// is this player's color appears in it exactly once. Only the rules engine
/// mutates it, in lockstep with the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    color: Color,
    owned: Vec<Point>,
}

impl Player {
    /// A player with an empty ownership index.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            owned: Vec::new(),
        }
    }

    /// A player whose ownership index is rebuilt from `board`.
    pub fn from_board(color: Color, board: &Board) -> Self {
        Self {
            color,
            owned: board.owned_by(color),
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Positions owned by this player, in the order they were claimed.
    pub fn owned(&self) -> &[Point] {
        &self.owned
    }

    pub fn owned_count(&self) -> usize {
        self.owned.len()
    }

    pub fn owns(&self, pt: Point) -> bool {
        self.owned.contains(&pt)
    }

    pub(crate) fn gain(&mut self, pt: Point) {
        if !self.owns(pt) {
            self.owned.push(pt);
        }
    }

    pub(crate) fn lose(&mut self, pt: Point) {
        self.owned.retain(|&p| p != pt);
    }

    /// True if the index lists exactly the cells `board` shows for this color.
    pub fn is_consistent_with(&self, board: &Board) -> bool {
        let mut indexed = self.owned.clone();
        indexed.sort_unstable();
        let before = indexed.len();
        indexed.dedup();
        before == indexed.len() && indexed == board.owned_by(self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_board_indexes_opening_discs() {
        let board = Board::new();
        let black = Player::from_board(Color::Black, &board);
        let white = Player::from_board(Color::White, &board);
        assert_eq!(black.owned(), &[(3, 4), (4, 3)]);
        assert_eq!(white.owned(), &[(3, 3), (4, 4)]);
        assert!(black.is_consistent_with(&board));
        assert!(white.is_consistent_with(&board));
    }

    #[test]
    fn test_gain_is_idempotent() {
        let mut p = Player::new(Color::Black);
        p.gain((0, 0));
        p.gain((0, 0));
        assert_eq!(p.owned_count(), 1);
        p.lose((0, 0));
        assert_eq!(p.owned_count(), 0);
    }

    #[test]
    fn test_inconsistent_index_detected() {
        let board = Board::new();
        let mut black = Player::from_board(Color::Black, &board);
        black.gain((0, 0));
        assert!(!black.is_consistent_with(&board));
    }
}
