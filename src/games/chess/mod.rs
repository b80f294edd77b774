//! Reduced chess as a learning environment.
//!
//! White is the learning agent; Black is played by a `StepHook`, usually
//! `RandomOpponent`.

mod env;
mod opponent;
mod state;

pub use env::{example_board, factory, ChessEnvironment, LOSS_REWARD, WIN_REWARD};
pub use opponent::RandomOpponent;
pub use state::{BoardAction, BoardEncoding, BoardState};
