//! Core types: errors and deterministic RNG.
//!
//! These are shared by the board model, the environments, and the trainer.

pub mod error;
pub mod rng;

pub use error::{BoardError, ConfigError, EnvError, TrainError};
pub use rng::RolloutRng;
