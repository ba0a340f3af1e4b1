//! Board model: colors, squares and the fixed 8x8 grid.
//!
//! A [`Point`] is `(x, y)` where `x` is the row (0 = top) and `y` the column
//! (0 = left). In text form a point is written column letter first, row
//! number second, so `(2, 3)` is `"D3"`.

use std::fmt;

use crate::constants::N;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Occupancy of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Square {
    #[default]
    Empty,
    Owned(Color),
}

impl Square {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    #[inline]
    pub fn is_owned_by(self, color: Color) -> bool {
        self == Square::Owned(color)
    }
}

/// A cell position `(x, y)`, `0 <= x, y < N`.
pub type Point = (usize, usize);

/// True if signed coordinates fall on the board.
#[inline]
pub fn on_board(x: isize, y: isize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < N && (y as usize) < N
}

/// The N×N grid. Cloning produces an independent copy, which is what the
/// search code relies on when it explores hypothetical futures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Square; N]; N],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The canonical opening position: white on the main diagonal of the
    /// center 2x2 block, black on the anti-diagonal.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let c = N / 2;
        board.set((c - 1, c - 1), Square::Owned(Color::White));
        board.set((c - 1, c), Square::Owned(Color::Black));
        board.set((c, c - 1), Square::Owned(Color::Black));
        board.set((c, c), Square::Owned(Color::White));
        board
    }

    /// A board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Square::Empty; N]; N],
        }
    }

    /// Occupancy at `pt`, or `None` if the point is off the board.
    #[inline]
    pub fn get(&self, pt: Point) -> Option<Square> {
        let (x, y) = pt;
        if x >= N || y >= N {
            return None;
        }
        Some(self.cells[x][y])
    }

    /// Occupancy at signed coordinates; `None` off the board.
    #[inline]
    pub fn get_signed(&self, x: isize, y: isize) -> Option<Square> {
        if !on_board(x, y) {
            return None;
        }
        Some(self.cells[x as usize][y as usize])
    }

    /// Overwrite a cell. Returns the previous occupancy, or `None` (and
    /// leaves the board untouched) when `pt` is off the board.
    pub fn set(&mut self, pt: Point, square: Square) -> Option<Square> {
        let (x, y) = pt;
        if x >= N || y >= N {
            return None;
        }
        Some(std::mem::replace(&mut self.cells[x][y], square))
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, Square)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(x, row)| row.iter().enumerate().map(move |(y, &sq)| ((x, y), sq)))
    }

    /// Number of cells owned by `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells().filter(|&(_, sq)| sq.is_owned_by(color)).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells().filter(|&(_, sq)| sq.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Positions owned by `color`, row-major.
    pub fn owned_by(&self, color: Color) -> Vec<Point> {
        self.cells()
            .filter(|&(_, sq)| sq.is_owned_by(color))
            .map(|(pt, _)| pt)
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for y in 0..N {
            write!(f, "{} ", (b'A' + y as u8) as char)?;
        }
        writeln!(f)?;
        for x in 0..N {
            write!(f, "{} ", x + 1)?;
            for y in 0..N {
                let ch = match self.cells[x][y] {
                    Square::Owned(c) => c.symbol(),
                    Square::Empty => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate string like "D3" (case-insensitive) into a point.
pub fn parse_coord(s: &str) -> Option<Point> {
    let s = s.trim();
    let mut chars = s.chars();
    let col = chars.next()?.to_ascii_uppercase();
    if !col.is_ascii_uppercase() {
        return None;
    }
    let y = (col as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > N || y >= N {
        return None;
    }
    Some((row - 1, y))
}

/// Convert a point to its string form, e.g. `(2, 3)` -> "D3".
pub fn str_coord(pt: Point) -> String {
    let (x, y) = pt;
    format!("{}{}", (b'A' + y as u8) as char, x + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_setup() {
        let board = Board::new();
        assert_eq!(board.get((3, 3)), Some(Square::Owned(Color::White)));
        assert_eq!(board.get((3, 4)), Some(Square::Owned(Color::Black)));
        assert_eq!(board.get((4, 3)), Some(Square::Owned(Color::Black)));
        assert_eq!(board.get((4, 4)), Some(Square::Owned(Color::White)));
        assert_eq!(board.empty_count(), 60);
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get((N, 0)), None);
        assert_eq!(board.get((0, N)), None);
        assert_eq!(board.get_signed(-1, 0), None);
    }

    #[test]
    fn test_set_out_of_range_is_noop() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(board.set((N, N), Square::Owned(Color::Black)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = Board::new();
        let mut copy = board.clone();
        copy.set((0, 0), Square::Owned(Color::Black));
        assert_eq!(board.get((0, 0)), Some(Square::Empty));
        assert_eq!(copy.get((0, 0)), Some(Square::Owned(Color::Black)));
    }

    #[test]
    fn test_coord_roundtrip() {
        assert_eq!(parse_coord("D3"), Some((2, 3)));
        assert_eq!(parse_coord("a1"), Some((0, 0)));
        assert_eq!(parse_coord("H8"), Some((7, 7)));
        assert_eq!(str_coord((2, 3)), "D3");
        assert_eq!(parse_coord("I1"), None);
        assert_eq!(parse_coord("A9"), None);
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord(""), None);
    }

    #[test]
    fn test_display_marks_discs() {
        let text = Board::new().to_string();
        assert!(text.starts_with("  A B C D E F G H"));
        assert!(text.contains("4 . . . O X . . ."));
        assert!(text.contains("5 . . . X O . . ."));
    }
}
