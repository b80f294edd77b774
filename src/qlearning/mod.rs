//! Tabular Q-learning.
//!
//! ## Overview
//!
//! - **QTable**: state → per-action expected reward, with a cached best action
//! - **Policy**: exploit/explore action selection over a `QTable`
//! - **Learner**: the seam the episode runner learns through
//! - **TraceRecorder**: a `Learner` that records transitions instead of
//!   applying them, for parallel rollouts
//!
//! ## Usage
//!
//! ```
//! use board_rl::qlearning::{QLearningConfig, QTable};
//!
//! let mut table: QTable<&str, u8> = QTable::new(QLearningConfig::default());
//! let q = table.update(&"s0", &1, &"s1", 1.0);
//! assert!((q - 0.9).abs() < 1e-12);
//! assert_eq!(table.best_action(&"s0"), Some(&1));
//! ```

pub mod config;
pub mod learner;
pub mod policy;
pub mod table;

pub use config::QLearningConfig;
pub use learner::{Learner, TraceRecorder, Transition};
pub use policy::{random_action, select_action, ExploitRate, Policy};
pub use table::{ActionValues, QTable};
