//! Table keys for the chess environment.

use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::board::{Board, Move};

/// Per-piece codes in canonical listing order.
///
/// Inline for up to eight pieces, which covers the small boards this
/// environment is trained on.
pub type BoardEncoding = SmallVec<[u128; 8]>;

/// Immutable snapshot of a board, keyed by its encoding.
///
/// Two states are equal iff their encodings are equal. The encoding lists
/// kind, color, row and column of every piece, so equal encodings mean equal
/// piece listings.
#[derive(Clone, Debug)]
pub struct BoardState {
    board: Board,
    encoding: BoardEncoding,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        let encoding = board.pieces().map(|p| p.encode()).collect();
        Self { board, encoding }
    }

    /// The board this state was taken from.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn encoding(&self) -> &[u128] {
        &self.encoding
    }
}

impl PartialEq for BoardState {
    fn eq(&self, other: &Self) -> bool {
        self.encoding == other.encoding
    }
}

impl Eq for BoardState {}

impl Hash for BoardState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.encoding.hash(state);
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// A move wrapped as a table sub-key.
///
/// Equal exactly when origin and destination both match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardAction {
    mv: Move,
    encoding: u128,
}

impl BoardAction {
    pub fn new(mv: Move) -> Self {
        let word = |v: i32| u128::from(v as u32);
        let encoding = word(mv.from.row)
            | (word(mv.from.col) << 32)
            | (word(mv.to.row) << 64)
            | (word(mv.to.col) << 96);
        Self { mv, encoding }
    }

    #[must_use]
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    #[must_use]
    pub fn encoding(&self) -> u128 {
        self.encoding
    }
}

impl From<Move> for BoardAction {
    fn from(mv: Move) -> Self {
        Self::new(mv)
    }
}

impl fmt::Display for BoardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardPiece, Color, PieceKind, Position};
    use rustc_hash::FxHashSet;

    fn piece(kind: PieceKind, color: Color, row: i32, col: i32) -> BoardPiece {
        BoardPiece::new(kind, color, Position::new(row, col))
    }

    #[test]
    fn test_state_equality_ignores_insertion_order() {
        let rook = piece(PieceKind::Rook, Color::White, 3, 1);
        let king = piece(PieceKind::King, Color::Black, 0, 3);

        let a = BoardState::new(Board::from_pieces(4, [rook, king]).unwrap());
        let b = BoardState::new(Board::from_pieces(4, [king, rook]).unwrap());

        assert_eq!(a, b);
        let set: FxHashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_state_differs_by_position() {
        let a = BoardState::new(
            Board::from_pieces(4, [piece(PieceKind::Pawn, Color::White, 3, 3)]).unwrap(),
        );
        let b = BoardState::new(
            Board::from_pieces(4, [piece(PieceKind::Pawn, Color::White, 2, 3)]).unwrap(),
        );
        assert_ne!(a, b);
        assert_eq!(a.encoding().len(), 1);
    }

    #[test]
    fn test_state_survives_board_mutation() {
        let mut board =
            Board::from_pieces(4, [piece(PieceKind::Rook, Color::White, 3, 1)]).unwrap();
        let snapshot = BoardState::new(board.clone());

        board
            .apply_move(&Move::new(Position::new(3, 1), Position::new(0, 1)))
            .unwrap();

        assert_ne!(snapshot, BoardState::new(board));
        assert_eq!(
            snapshot.board().piece_at(Position::new(3, 1)).unwrap(),
            Some(piece(PieceKind::Rook, Color::White, 3, 1))
        );
    }

    #[test]
    fn test_large_board_states_stay_distinct() {
        let near = BoardState::new(
            Board::from_pieces(300, [piece(PieceKind::Rook, Color::White, 0, 0)]).unwrap(),
        );
        let far = BoardState::new(
            Board::from_pieces(300, [piece(PieceKind::Rook, Color::White, 256, 0)]).unwrap(),
        );
        assert_ne!(near, far);

        let short = BoardAction::new(Move::new(Position::new(0, 0), Position::new(0, 1)));
        let long = BoardAction::new(Move::new(Position::new(0, 0), Position::new(0, 257)));
        assert_ne!(short.encoding(), long.encoding());
    }

    #[test]
    fn test_action_encoding() {
        let action = BoardAction::new(Move::new(Position::new(3, 1), Position::new(0, 2)));
        assert_eq!(action.encoding(), 3 | (1 << 32) | (2 << 96));
        assert_eq!(action.to_string(), "(3, 1) -> (0, 2)");

        let same: BoardAction = Move::new(Position::new(3, 1), Position::new(0, 2)).into();
        assert_eq!(action, same);
    }
}
