//! Board coordinates and moves.
//!
//! Rows grow downward: White starts at the bottom (high rows) and advances
//! toward row 0. Positions are signed so that translations off the edge are
//! representable; the board decides whether a position is in range.

use serde::{Deserialize, Serialize};

/// A `(row, col)` square. Ordered by row, then column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// One row toward row 0.
    #[must_use]
    pub const fn up(self) -> Self {
        Self::new(self.row - 1, self.col)
    }

    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.row, self.col - 1)
    }

    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// Translate by a row/column delta.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// The eight surrounding squares, row-major, without bounds filtering.
    #[must_use]
    pub fn neighbors(self) -> [Position; 8] {
        [
            self.up().left(),
            self.up(),
            self.up().right(),
            self.left(),
            self.right(),
            self.down().left(),
            self.down(),
            self.down().right(),
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal unit steps, used by rook movement and threat scans.
pub const ORTHOGONAL: [fn(Position) -> Position; 4] =
    [Position::left, Position::right, Position::up, Position::down];

/// An origin/destination pair.
///
/// A move does not say which piece moves or what it captures; both are
/// resolved from the board when the move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translations() {
        let p = Position::new(2, 2);
        assert_eq!(p.up(), Position::new(1, 2));
        assert_eq!(p.down(), Position::new(3, 2));
        assert_eq!(p.left(), Position::new(2, 1));
        assert_eq!(p.right(), Position::new(2, 3));
        assert_eq!(p.up().left().down().right(), p);
    }

    #[test]
    fn test_neighbors_are_distinct_and_adjacent() {
        let p = Position::new(0, 0);
        let n = p.neighbors();
        for (i, a) in n.iter().enumerate() {
            assert!((a.row - p.row).abs() <= 1 && (a.col - p.col).abs() <= 1);
            assert_ne!(*a, p);
            for b in &n[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_ordering_row_then_col() {
        assert!(Position::new(0, 3) < Position::new(1, 0));
        assert!(Position::new(1, 0) < Position::new(1, 1));
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Position::new(3, 3), Position::new(2, 3));
        assert_eq!(mv.to_string(), "(3, 3) -> (2, 3)");
    }

    #[test]
    fn test_serialization() {
        let mv = Move::new(Position::new(3, 1), Position::new(0, 1));
        let json = serde_json::to_string(&mv).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, back);
    }
}
