//! The square board: a grid lookup plus a canonical piece listing.
//!
//! Both views are persistent `im` collections, so cloning a board is O(1)
//! and every later mutation copies only the touched nodes. The rule engine
//! relies on this to try moves on throwaway copies.

use im::{OrdSet, Vector};

use super::piece::{BoardPiece, Color, PieceKind};
use super::position::{Move, Position};
use crate::core::BoardError;

/// An `N×N` board that exclusively owns its pieces.
///
/// ## Invariants
///
/// - Every piece in the listing sits on the grid square named by its
///   position, and every occupied grid square has exactly that piece in the
///   listing.
/// - At most one piece per square.
///
/// The listing iterates in canonical order (kind, color, row, column).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    grid: Vector<Option<BoardPiece>>,
    pieces: OrdSet<BoardPiece>,
}

impl Board {
    /// Create an empty `size × size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            grid: std::iter::repeat(None).take(size * size).collect(),
            pieces: OrdSet::new(),
        }
    }

    /// Create a board holding `pieces`, rejecting overlaps and off-board pieces.
    pub fn from_pieces(
        size: usize,
        pieces: impl IntoIterator<Item = BoardPiece>,
    ) -> Result<Self, BoardError> {
        let mut board = Self::new(size);
        for piece in pieces {
            board.add_piece(piece)?;
        }
        Ok(board)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        let n = self.size as i32;
        (0..n).contains(&pos.row) && (0..n).contains(&pos.col)
    }

    fn index(&self, pos: Position) -> Result<usize, BoardError> {
        if self.contains(pos) {
            Ok(pos.row as usize * self.size + pos.col as usize)
        } else {
            Err(BoardError::OutOfBounds {
                position: pos,
                size: self.size,
            })
        }
    }

    /// The piece on `pos`, if any.
    pub fn piece_at(&self, pos: Position) -> Result<Option<BoardPiece>, BoardError> {
        let idx = self.index(pos)?;
        Ok(self.grid[idx])
    }

    /// The piece on `pos`, treating off-board squares as empty.
    ///
    /// Used by ray scans, which walk until they leave the board.
    pub(crate) fn occupant(&self, pos: Position) -> Option<BoardPiece> {
        self.index(pos).ok().and_then(|idx| self.grid[idx])
    }

    /// Whether `pos` is on the board and empty.
    pub(crate) fn is_vacant(&self, pos: Position) -> bool {
        self.contains(pos) && self.occupant(pos).is_none()
    }

    /// Place a piece on its square.
    ///
    /// Rejects pieces already on the board and occupied squares.
    pub fn add_piece(&mut self, piece: BoardPiece) -> Result<(), BoardError> {
        let idx = self.index(piece.position)?;
        if self.pieces.contains(&piece) {
            return Err(BoardError::DuplicatePiece(piece));
        }
        if self.grid[idx].is_some() {
            return Err(BoardError::SquareOccupied(piece.position));
        }
        self.grid.set(idx, Some(piece));
        self.pieces.insert(piece);
        Ok(())
    }

    /// Take the piece off `pos`, returning it.
    pub fn remove_piece(&mut self, pos: Position) -> Result<Option<BoardPiece>, BoardError> {
        let idx = self.index(pos)?;
        let removed = self.grid.set(idx, None);
        if let Some(piece) = removed {
            self.pieces.remove(&piece);
        }
        Ok(removed)
    }

    /// Move the piece on `mv.from` to `mv.to`, capturing whatever stands there.
    ///
    /// No legality check happens here; that is the rule engine's job.
    /// Returns the captured piece.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Option<BoardPiece>, BoardError> {
        self.index(mv.to)?;
        let mover = self
            .piece_at(mv.from)?
            .ok_or(BoardError::EmptySquare(mv.from))?;
        if mv.from == mv.to {
            return Ok(None);
        }

        let captured = self.remove_piece(mv.to)?;
        self.remove_piece(mv.from)?;
        self.add_piece(mover.moved_to(mv.to))?;
        Ok(captured)
    }

    /// Independent copy of this board without `piece`.
    pub(crate) fn without(&self, piece: &BoardPiece) -> Board {
        let mut next = self.clone();
        if next.pieces.remove(piece).is_some() {
            if let Ok(idx) = next.index(piece.position) {
                next.grid.set(idx, None);
            }
        }
        next
    }

    /// Independent copy of this board with `mv` applied.
    pub fn with_move(&self, mv: &Move) -> Result<Board, BoardError> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// All pieces in canonical order.
    pub fn pieces(&self) -> impl Iterator<Item = &BoardPiece> + '_ {
        self.pieces.iter()
    }

    /// Pieces of one color, in canonical order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &BoardPiece> + '_ {
        self.pieces.iter().filter(move |p| p.color == color)
    }

    /// Square of `color`'s king, if it has one.
    #[must_use]
    pub fn king_of(&self, color: Color) -> Option<Position> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the board has no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
