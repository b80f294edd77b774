//! Board model: squares, pieces, moves, and the board itself.
//!
//! The board enforces only occupancy invariants. Which moves are allowed is
//! decided by the `rules` module.

pub mod board;
pub mod display;
pub mod piece;
pub mod position;

pub use board::Board;
pub use piece::{BoardPiece, Color, PieceKind};
pub use position::{Move, Position, ORTHOGONAL};
