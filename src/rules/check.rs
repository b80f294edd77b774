//! Legality filtering and check/checkmate predicates.

use crate::board::{Board, Color, Move, PieceKind};

impl Board {
    /// Every legal move for `color`.
    ///
    /// Each pseudo-legal move is tried on a copy of the board and kept only
    /// if `color`'s king is not threatened afterwards.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.pieces_of(color)
            .flat_map(|piece| self.pseudo_moves(piece))
            .filter(|mv| self.keeps_king_safe(mv, color))
            .collect()
    }

    fn keeps_king_safe(&self, mv: &Move, color: Color) -> bool {
        self.with_move(mv)
            .map(|next| !next.is_checked(color))
            .unwrap_or(false)
    }

    /// Whether `color` has a king and it is attacked.
    #[must_use]
    pub fn is_checked(&self, color: Color) -> bool {
        self.king_of(color)
            .is_some_and(|king| self.attacked(king, color.opposite()))
    }

    /// Whether `color`'s king is attacked and has no king moves.
    ///
    /// Only the king's own escapes are considered; blocking or capturing the
    /// attacker with another piece does not lift the mate.
    #[must_use]
    pub fn is_check_mated(&self, color: Color) -> bool {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .is_some_and(|king| {
                self.attacked(king.position, color.opposite()) && self.pseudo_moves(king).is_empty()
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, BoardPiece, Color, Move, PieceKind, Position};

    fn board_with(pieces: &[(PieceKind, Color, i32, i32)]) -> Board {
        let mut board = Board::new(4);
        for &(kind, color, row, col) in pieces {
            board
                .add_piece(BoardPiece::new(kind, color, Position::new(row, col)))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_no_king_means_no_check() {
        let board = board_with(&[(PieceKind::Rook, Color::White, 0, 0)]);
        assert!(!board.is_checked(Color::Black));
        assert!(!board.is_check_mated(Color::Black));
    }

    #[test]
    fn test_is_checked() {
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 3),
            (PieceKind::Rook, Color::White, 0, 0),
        ]);
        assert!(board.is_checked(Color::Black));
        assert!(!board.is_checked(Color::White));
    }

    #[test]
    fn test_back_rank_mate() {
        // Rook on row 0 checks; the second rook covers row 1.
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 3),
            (PieceKind::Rook, Color::White, 0, 0),
            (PieceKind::Rook, Color::White, 1, 0),
        ]);
        assert!(board.is_check_mated(Color::Black));
    }

    #[test]
    fn test_check_with_escape_is_not_mate() {
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 3),
            (PieceKind::Rook, Color::White, 0, 0),
        ]);
        assert!(board.is_checked(Color::Black));
        assert!(!board.is_check_mated(Color::Black));
    }

    #[test]
    fn test_mate_ignores_blocking_pieces() {
        // Black could block on (0, 2) with its rook, but only king escapes count.
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 3),
            (PieceKind::Rook, Color::Black, 2, 2),
            (PieceKind::Rook, Color::White, 0, 0),
            (PieceKind::Rook, Color::White, 1, 0),
        ]);
        assert!(board.is_check_mated(Color::Black));
        assert!(board
            .legal_moves_for(Color::Black)
            .contains(&Move::new(Position::new(2, 2), Position::new(0, 2))));
    }

    #[test]
    fn test_pinned_piece_cannot_move_off_line() {
        // The black rook shields its king from the white rook on column 3.
        let board = board_with(&[
            (PieceKind::King, Color::Black, 0, 3),
            (PieceKind::Rook, Color::Black, 1, 3),
            (PieceKind::Rook, Color::White, 3, 3),
        ]);
        let pseudo = board.possible_moves(Position::new(1, 3)).unwrap();
        assert!(pseudo.contains(&Move::new(Position::new(1, 3), Position::new(1, 0))));

        let legal = board.legal_moves_for(Color::Black);
        let rook_moves: Vec<_> = legal
            .iter()
            .filter(|m| m.from == Position::new(1, 3))
            .map(|m| m.to)
            .collect();
        assert_eq!(rook_moves.len(), 2);
        assert!(rook_moves.contains(&Position::new(2, 3)));
        assert!(rook_moves.contains(&Position::new(3, 3)));
    }

    #[test]
    fn test_legal_moves_never_leave_king_in_check() {
        let board = board_with(&[
            (PieceKind::King, Color::White, 3, 0),
            (PieceKind::Pawn, Color::White, 2, 1),
            (PieceKind::Rook, Color::Black, 0, 0),
            (PieceKind::King, Color::Black, 0, 3),
        ]);
        for mv in board.legal_moves_for(Color::White) {
            let next = board.with_move(&mv).unwrap();
            assert!(!next.is_checked(Color::White), "{mv} exposes the king");
        }
    }

    #[test]
    fn test_legal_moves_follow_canonical_order() {
        let board = board_with(&[
            (PieceKind::Rook, Color::White, 3, 1),
            (PieceKind::Pawn, Color::White, 3, 3),
        ]);
        let legal = board.legal_moves_for(Color::White);
        assert_eq!(legal[0], Move::new(Position::new(3, 3), Position::new(2, 3)));
        assert_eq!(legal.len(), 1 + 5);
    }
}
