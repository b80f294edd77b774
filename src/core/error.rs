//! Error taxonomy for the board model, environments, and configuration.
//!
//! Every error is raised synchronously by the call that caused it. Nothing
//! is retried: callers either fix their input or abort the rollout.

use thiserror::Error;

use crate::board::{BoardPiece, Position};

/// Errors raised by the board model and rule engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A position outside the `size × size` grid was read or written.
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: usize },

    /// A piece was inserted onto a square that already holds one.
    #[error("square {0} is already occupied")]
    SquareOccupied(Position),

    /// The exact same piece is already registered on the board.
    #[error("{0} is already on the board")]
    DuplicatePiece(BoardPiece),

    /// A move was applied from a square with no piece on it.
    #[error("no piece to move at {0}")]
    EmptySquare(Position),
}

/// Errors raised while executing actions on an environment.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The underlying board rejected the operation.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// The environment refused the action from its current state.
    #[error("invalid action {action} from state {state}")]
    InvalidAction { action: String, state: String },

    /// A maze layout that cannot be played.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
}

/// Configuration values outside their contract.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// Exploit rates are probabilities.
    #[error("exploit rate {0} is outside [0, 1]")]
    ExploitRateOutOfRange(f64),

    /// A learning or discount rate outside its allowed range.
    #[error("{name} = {value} is out of range")]
    InvalidRate { name: &'static str, value: f64 },

    /// Parallel training needs at least one worker.
    #[error("worker count must be at least 1")]
    ZeroWorkers,
}

/// Errors that abort a training run.
#[derive(Debug, Error)]
pub enum TrainError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A rollout failed; the batch it belonged to is abandoned.
    #[error("rollout failed: {0}")]
    Env(#[from] EnvError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
