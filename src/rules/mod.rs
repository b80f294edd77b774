//! Rule engine for the reduced chess variant.
//!
//! Implemented as `impl Board` blocks:
//! - `movegen`: pseudo-legal moves per piece kind (`possible_moves`)
//! - `attacks`: threat detection (`is_threatened`)
//! - `check`: legality filtering, check and checkmate
//!
//! Only pawns, rooks and kings have rules. Castling, en passant, promotion
//! and draw rules are not modelled.

pub mod attacks;
pub mod check;
pub mod movegen;
