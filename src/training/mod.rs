//! Rollouts and batched training.
//!
//! ## Overview
//!
//! - **Episode**: one bounded rollout that learns as it goes
//! - **StepHook**: callbacks between agent steps, e.g. an opponent reply
//! - **Trainer**: batches of training and test rollouts with metrics
//!
//! ## Usage
//!
//! ```
//! use board_rl::games::chess::{example_board, factory, RandomOpponent};
//! use board_rl::training::{Trainer, TrainerConfig};
//!
//! let config = TrainerConfig::default()
//!     .with_num_batches(2)
//!     .with_train_episodes(5)
//!     .with_test_episodes(5);
//!
//! let mut trainer = Trainer::new(config, factory(example_board()?))?;
//! let history = trainer.train(&RandomOpponent::default())?;
//! assert_eq!(history.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod episode;
pub mod trainer;

pub use config::TrainerConfig;
pub use episode::{Episode, NoHook, StepHook};
pub use trainer::{BatchMetrics, Trainer, TrainingHistory};
