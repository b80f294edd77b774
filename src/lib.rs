//! # board-rl
//!
//! A rule-constrained board engine coupled with a tabular Q-learning
//! trainer that learns policies by playing rollouts against a scripted or
//! random opponent.
//!
//! ## Design Principles
//!
//! 1. **Environment-Agnostic Learning**: The trainer only sees the
//!    `Environment` contract. Chess and the maze are two implementations.
//!
//! 2. **Cheap Speculation**: Boards are persistent `im` collections, so the
//!    rule engine tries every candidate move on an O(1) clone.
//!
//! 3. **Reproducible Runs**: Every rollout seed derives from one
//!    `RolloutRng`; parallel training merges traces in rollout order.
//!
//! ## Modules
//!
//! - `core`: Errors and deterministic RNG
//! - `board`: Positions, pieces, moves and the board itself
//! - `rules`: Move generation, threats, check and checkmate
//! - `env`: The environment contract
//! - `games`: Chess and maze environments
//! - `qlearning`: Q-table, policy and the learner seam
//! - `training`: Episodes, step hooks and the batched trainer
//!
//! ## Limitations
//!
//! Only pawns, rooks and kings move or attack. Bishops, knights and queens
//! may stand on the board but are inert. Checkmate looks only at the king's
//! own escapes.

pub mod board;
pub mod core;
pub mod env;
pub mod games;
pub mod qlearning;
pub mod rules;
pub mod training;

// Re-export commonly used types
pub use crate::core::{BoardError, ConfigError, EnvError, RolloutRng, TrainError};

pub use crate::board::{Board, BoardPiece, Color, Move, PieceKind, Position};

pub use crate::env::Environment;

pub use crate::qlearning::{
    ExploitRate, Learner, Policy, QLearningConfig, QTable, TraceRecorder, Transition,
};

pub use crate::training::{
    BatchMetrics, Episode, NoHook, StepHook, Trainer, TrainerConfig, TrainingHistory,
};
