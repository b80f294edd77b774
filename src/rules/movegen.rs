//! Pseudo-legal move generation per piece kind.
//!
//! Pawn and rook moves ignore whether the mover's own king ends up exposed;
//! `legal_moves_for` filters those. King moves already exclude attacked
//! squares.

use crate::board::{Board, BoardPiece, Move, PieceKind, Position, ORTHOGONAL};
use crate::core::BoardError;

impl Board {
    /// Squares the piece on `from` could move to.
    ///
    /// Empty squares produce no moves. Kings are never capturable, so no
    /// generated move lands on a king.
    pub fn possible_moves(&self, from: Position) -> Result<Vec<Move>, BoardError> {
        Ok(self
            .piece_at(from)?
            .map(|piece| self.pseudo_moves(&piece))
            .unwrap_or_default())
    }

    pub(crate) fn pseudo_moves(&self, piece: &BoardPiece) -> Vec<Move> {
        let targets = match piece.kind {
            PieceKind::Pawn => self.pawn_targets(piece),
            PieceKind::Rook => self.rook_targets(piece),
            PieceKind::King => self.king_targets(piece),
            // No movement rules for these kinds.
            PieceKind::Bishop | PieceKind::Knight | PieceKind::Queen => Vec::new(),
        };
        targets
            .into_iter()
            .map(|to| Move::new(piece.position, to))
            .collect()
    }

    /// Whether `mover` could capture whatever stands on `pos`.
    fn can_capture(&self, pos: Position, mover: &BoardPiece) -> bool {
        self.occupant(pos)
            .is_some_and(|p| p.color != mover.color && p.kind != PieceKind::King)
    }

    fn pawn_targets(&self, pawn: &BoardPiece) -> Vec<Position> {
        let mut targets = Vec::with_capacity(3);
        let advance = pawn.position.offset(pawn.color.forward(), 0);
        if self.is_vacant(advance) {
            targets.push(advance);
        }
        for diagonal in [advance.left(), advance.right()] {
            if self.can_capture(diagonal, pawn) {
                targets.push(diagonal);
            }
        }
        targets
    }

    fn rook_targets(&self, rook: &BoardPiece) -> Vec<Position> {
        let mut targets = Vec::new();
        for step in ORTHOGONAL {
            let mut current = step(rook.position);
            while self.is_vacant(current) {
                targets.push(current);
                current = step(current);
            }
            if self.can_capture(current, rook) {
                targets.push(current);
            }
        }
        targets
    }

    fn king_targets(&self, king: &BoardPiece) -> Vec<Position> {
        // Threats are evaluated with the king lifted off, so it cannot shield
        // the squares behind it from a slider.
        let lifted = self.without(king);
        let enemy = king.color.opposite();

        king.position
            .neighbors()
            .into_iter()
            .filter(|&c| self.contains(c))
            .filter(|&c| self.is_vacant(c) || self.can_capture(c, king))
            .filter(|&c| !lifted.attacked(c, enemy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardPiece, Color, Move, PieceKind, Position};
    use crate::core::BoardError;

    fn board_with(pieces: &[(PieceKind, Color, i32, i32)]) -> Board {
        let mut board = Board::new(4);
        for &(kind, color, row, col) in pieces {
            board
                .add_piece(BoardPiece::new(kind, color, Position::new(row, col)))
                .unwrap();
        }
        board
    }

    fn destinations(board: &Board, row: i32, col: i32) -> Vec<Position> {
        let mut dests: Vec<_> = board
            .possible_moves(Position::new(row, col))
            .unwrap()
            .into_iter()
            .map(|m| m.to)
            .collect();
        dests.sort();
        dests
    }

    #[test]
    fn test_lone_white_pawn_advances_one_square() {
        let board = board_with(&[(PieceKind::Pawn, Color::White, 3, 3)]);
        let moves = board.possible_moves(Position::new(3, 3)).unwrap();
        assert_eq!(moves, vec![Move::new(Position::new(3, 3), Position::new(2, 3))]);
    }

    #[test]
    fn test_black_pawn_advances_downward() {
        let board = board_with(&[(PieceKind::Pawn, Color::Black, 1, 3)]);
        assert_eq!(destinations(&board, 1, 3), vec![Position::new(2, 3)]);
    }

    #[test]
    fn test_pawn_blocked_and_captures_diagonally() {
        let board = board_with(&[
            (PieceKind::Pawn, Color::White, 2, 1),
            (PieceKind::Pawn, Color::Black, 1, 1),
            (PieceKind::Rook, Color::Black, 1, 0),
            (PieceKind::Rook, Color::White, 1, 2),
        ]);
        // Forward square blocked; only the enemy rook on the diagonal is capturable.
        assert_eq!(destinations(&board, 2, 1), vec![Position::new(1, 0)]);
    }

    #[test]
    fn test_pawn_cannot_capture_king() {
        let board = board_with(&[
            (PieceKind::Pawn, Color::White, 1, 2),
            (PieceKind::King, Color::Black, 0, 3),
        ]);
        assert_eq!(destinations(&board, 1, 2), vec![Position::new(0, 2)]);
    }

    #[test]
    fn test_pawn_on_last_row_has_no_moves() {
        let board = board_with(&[(PieceKind::Pawn, Color::White, 0, 1)]);
        assert!(destinations(&board, 0, 1).is_empty());
    }

    #[test]
    fn test_lone_rook_covers_row_and_column() {
        let board = board_with(&[(PieceKind::Rook, Color::White, 3, 1)]);
        let dests = destinations(&board, 3, 1);
        assert_eq!(dests.len(), 6);
        for d in &dests {
            assert!(d.row == 3 || d.col == 1);
            assert_ne!(*d, Position::new(3, 1));
        }
    }

    #[test]
    fn test_rook_ray_stops_at_first_piece() {
        let board = board_with(&[
            (PieceKind::Rook, Color::White, 3, 1),
            (PieceKind::Pawn, Color::Black, 1, 1),
            (PieceKind::Pawn, Color::White, 3, 3),
        ]);
        assert_eq!(
            destinations(&board, 3, 1),
            vec![
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 0),
                Position::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_rook_does_not_capture_king() {
        let board = board_with(&[
            (PieceKind::Rook, Color::White, 3, 3),
            (PieceKind::King, Color::Black, 0, 3),
        ]);
        let dests = destinations(&board, 3, 3);
        assert!(!dests.contains(&Position::new(0, 3)));
        assert!(dests.contains(&Position::new(1, 3)));
    }

    #[test]
    fn test_king_avoids_attacked_squares() {
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 3),
            (PieceKind::Rook, Color::White, 3, 2),
        ]);
        // Column 2 is covered by the rook.
        assert_eq!(destinations(&board, 0, 3), vec![Position::new(1, 3)]);
    }

    #[test]
    fn test_king_cannot_retreat_along_slider_ray() {
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 2),
            (PieceKind::Rook, Color::White, 0, 0),
        ]);
        // (0, 3) is behind the king on the rook's row: attacked once the king leaves.
        let dests = destinations(&board, 0, 2);
        assert!(!dests.contains(&Position::new(0, 3)));
        assert!(!dests.contains(&Position::new(0, 1)));
        assert!(dests.contains(&Position::new(1, 2)));
    }

    #[test]
    fn test_king_generation_leaves_board_untouched() {
        let board = board_with(&[
            (PieceKind::King, Color::White, 3, 0),
            (PieceKind::Rook, Color::Black, 0, 1),
        ]);
        let before = board.clone();
        let _ = board.possible_moves(Position::new(3, 0)).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_inert_kinds_generate_nothing() {
        for kind in [PieceKind::Bishop, PieceKind::Knight, PieceKind::Queen] {
            let board = board_with(&[(kind, Color::White, 2, 2)]);
            assert!(destinations(&board, 2, 2).is_empty(), "{kind} should not move");
        }
    }

    #[test]
    fn test_empty_square_has_no_moves() {
        let board = Board::new(4);
        assert_eq!(board.possible_moves(Position::new(1, 1)), Ok(vec![]));
    }

    #[test]
    fn test_out_of_bounds_origin() {
        let board = Board::new(4);
        assert_eq!(
            board.possible_moves(Position::new(0, 9)),
            Err(BoardError::OutOfBounds {
                position: Position::new(0, 9),
                size: 4
            })
        );
    }
}
