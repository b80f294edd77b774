//! Threat detection.
//!
//! Pawns, rooks and kings attack. Bishops, knights and queens contribute no
//! threats, matching their lack of movement rules.

use crate::board::{Board, Color, PieceKind, Position, ORTHOGONAL};
use crate::core::BoardError;

impl Board {
    /// Whether any piece of color `by` attacks `square`.
    pub fn is_threatened(&self, square: Position, by: Color) -> Result<bool, BoardError> {
        self.piece_at(square)?;
        Ok(self.attacked(square, by))
    }

    /// Unchecked threat test; `square` must be on the board.
    pub(crate) fn attacked(&self, square: Position, by: Color) -> bool {
        self.pawn_attacks(square, by) || self.rook_attacks(square, by) || self.king_attacks(square, by)
    }

    fn pawn_attacks(&self, square: Position, by: Color) -> bool {
        // An attacking pawn stands one row behind the target, seen from its
        // direction of advance.
        let behind = square.offset(-by.forward(), 0);
        [behind.left(), behind.right()]
            .into_iter()
            .any(|p| self.is_piece(p, PieceKind::Pawn, by))
    }

    fn rook_attacks(&self, square: Position, by: Color) -> bool {
        ORTHOGONAL.into_iter().any(|step| {
            let mut current = step(square);
            while self.is_vacant(current) {
                current = step(current);
            }
            self.is_piece(current, PieceKind::Rook, by)
        })
    }

    fn king_attacks(&self, square: Position, by: Color) -> bool {
        square
            .neighbors()
            .into_iter()
            .any(|p| self.is_piece(p, PieceKind::King, by))
    }

    fn is_piece(&self, pos: Position, kind: PieceKind, color: Color) -> bool {
        self.occupant(pos).is_some_and(|p| p.is_a(kind, color))
    }
}
