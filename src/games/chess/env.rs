//! Chess environment: the learning agent plays White.

use crate::board::{Board, BoardPiece, Color, PieceKind, Position};
use crate::core::{BoardError, EnvError};
use crate::env::Environment;

use super::state::{BoardAction, BoardState};

/// Reward for checkmating Black.
pub const WIN_REWARD: f64 = 1.0;

/// Reward when White is left with no legal move.
pub const LOSS_REWARD: f64 = -1.0;

/// A board where White is to move against the rule engine.
///
/// ## Outcomes
///
/// - Win: Black is checkmated
/// - Loss: White has no legal move (checkmate and stalemate alike)
/// - Never a tie
#[derive(Clone, Debug)]
pub struct ChessEnvironment {
    board: Board,
}

impl ChessEnvironment {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Fully legal moves for `color`, wrapped as actions.
    pub fn legal_actions_for(&self, color: Color) -> Vec<BoardAction> {
        self.board
            .legal_moves_for(color)
            .into_iter()
            .map(BoardAction::new)
            .collect()
    }

    /// Apply a move for either side without computing a reward.
    ///
    /// Legality is not re-checked; callers pass moves from
    /// `legal_actions_for`.
    pub fn play(&mut self, action: &BoardAction) -> Result<Option<BoardPiece>, EnvError> {
        Ok(self.board.apply_move(action.mv())?)
    }

    fn reward(&self) -> f64 {
        if self.is_win_state() {
            WIN_REWARD
        } else if self.is_lose_state() {
            LOSS_REWARD
        } else {
            0.0
        }
    }
}

impl Environment for ChessEnvironment {
    type State = BoardState;
    type Action = BoardAction;

    fn state(&self) -> BoardState {
        BoardState::new(self.board.clone())
    }

    fn legal_actions(&self) -> Vec<BoardAction> {
        self.legal_actions_for(Color::White)
    }

    fn execute(&mut self, action: &BoardAction) -> Result<f64, EnvError> {
        self.play(action)?;
        Ok(self.reward())
    }

    fn is_win_state(&self) -> bool {
        self.board.is_check_mated(Color::Black)
    }

    fn is_lose_state(&self) -> bool {
        self.board.legal_moves_for(Color::White).is_empty()
    }
}

/// The 4×4 training position: White pawn and rook against Black pawn and
/// king.
///
/// ```text
/// +----+
/// |···♚|
/// |···♟|
/// |····|
/// |·♖·♙|
/// +----+
/// ```
pub fn example_board() -> Result<Board, BoardError> {
    Board::from_pieces(
        4,
        [
            BoardPiece::new(PieceKind::Pawn, Color::White, Position::new(3, 3)),
            BoardPiece::new(PieceKind::Rook, Color::White, Position::new(3, 1)),
            BoardPiece::new(PieceKind::Pawn, Color::Black, Position::new(1, 3)),
            BoardPiece::new(PieceKind::King, Color::Black, Position::new(0, 3)),
        ],
    )
}

/// Factory producing a fresh environment on `board` for every call.
pub fn factory(board: Board) -> impl Fn() -> ChessEnvironment + Send + Sync {
    move || ChessEnvironment::new(board.clone())
}
