//! Piece kinds, colors, and pieces placed on a board.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Side to move. `White` advances toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn advance for this color.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds, in canonical listing order.
///
/// Only `Pawn`, `Rook` and `King` have movement and attack rules. `Bishop`,
/// `Knight` and `Queen` can sit on a board but never move or attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Whether the rule engine generates moves and threats for this kind.
    #[must_use]
    pub const fn has_rules(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }

    /// Numeric code used by state encodings (1-based, 0 is "empty").
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Bishop => 2,
            PieceKind::Knight => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    /// Display glyph for a piece of this kind and color.
    #[must_use]
    pub const fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.write_str(name)
    }
}

/// A piece standing on a square.
///
/// The derived ordering (kind, color, row, column) is the canonical listing
/// order of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BoardPiece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Position,
}

impl BoardPiece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Self { kind, color, position }
    }

    #[must_use]
    pub fn is_a(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    /// Same piece relocated to `position`.
    #[must_use]
    pub const fn moved_to(self, position: Position) -> Self {
        Self { position, ..self }
    }

    /// Compact code of kind, color, row and column.
    ///
    /// Row and column keep all 32 bits, so the code is injective for every
    /// board size.
    #[must_use]
    pub fn encode(&self) -> u128 {
        let color: u128 = match self.color {
            Color::White => 0,
            Color::Black => 1,
        };
        u128::from(self.kind.code())
            | (color << 8)
            | (u128::from(self.position.row as u32) << 16)
            | (u128::from(self.position.col as u32) << 48)
    }
}

impl std::fmt::Display for BoardPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} at {}", self.color, self.kind, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Color::White.opposite(), Color::Black);
        assert_eq!(Color::Black.opposite(), Color::White);
        assert_eq!(Color::White.opposite().opposite(), Color::White);
    }

    #[test]
    fn test_forward_direction() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
    }

    #[test]
    fn test_only_pawn_rook_king_have_rules() {
        let with_rules: Vec<_> = PieceKind::ALL.iter().filter(|k| k.has_rules()).collect();
        assert_eq!(with_rules, vec![&PieceKind::Pawn, &PieceKind::Rook, &PieceKind::King]);
    }

    #[test]
    fn test_canonical_order() {
        let a = BoardPiece::new(PieceKind::Pawn, Color::Black, Position::new(0, 0));
        let b = BoardPiece::new(PieceKind::Rook, Color::White, Position::new(0, 0));
        let c = BoardPiece::new(PieceKind::Rook, Color::White, Position::new(0, 1));
        let d = BoardPiece::new(PieceKind::Rook, Color::Black, Position::new(0, 0));
        let mut pieces = vec![d, c, b, a];
        pieces.sort();
        assert_eq!(pieces, vec![a, b, c, d]);
    }

    #[test]
    fn test_encode_distinguishes_fields() {
        let base = BoardPiece::new(PieceKind::King, Color::Black, Position::new(0, 3));
        let others = [
            BoardPiece::new(PieceKind::Rook, Color::Black, Position::new(0, 3)),
            BoardPiece::new(PieceKind::King, Color::White, Position::new(0, 3)),
            BoardPiece::new(PieceKind::King, Color::Black, Position::new(3, 0)),
            BoardPiece::new(PieceKind::King, Color::Black, Position::new(0, 2)),
        ];
        for other in others {
            assert_ne!(base.encode(), other.encode());
        }
    }

    #[test]
    fn test_encode_wide_boards() {
        let near = BoardPiece::new(PieceKind::Rook, Color::White, Position::new(0, 0));
        let far_row = BoardPiece::new(PieceKind::Rook, Color::White, Position::new(256, 0));
        let far_col = BoardPiece::new(PieceKind::Rook, Color::White, Position::new(0, 256));
        assert_ne!(near.encode(), far_row.encode());
        assert_ne!(near.encode(), far_col.encode());
        assert_ne!(far_row.encode(), far_col.encode());
    }

    #[test]
    fn test_display() {
        let piece = BoardPiece::new(PieceKind::Pawn, Color::White, Position::new(3, 3));
        assert_eq!(piece.to_string(), "White Pawn at (3, 3)");
        assert_eq!(PieceKind::Rook.glyph(Color::Black), '♜');
    }
}
