//! Trainer configuration.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;
use crate::qlearning::{ExploitRate, QLearningConfig};

/// Configuration for batched training.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Number of train-then-test batches.
    pub num_batches: usize,

    /// Training rollouts per batch.
    pub num_train_episodes: usize,

    /// Test rollouts per batch.
    pub num_test_episodes: usize,

    /// Step budget of every rollout.
    pub max_steps: usize,

    /// Fixed exploit rate of the test phase.
    pub test_exploit_rate: f64,

    /// Worker threads for training rollouts. 1 runs them in place.
    pub workers: usize,

    /// Seed of the run; every rollout seed is derived from it.
    pub seed: u64,

    /// Draw a progress bar on stderr.
    pub show_progress: bool,

    /// Rates of the underlying Q-table.
    pub learning: QLearningConfig,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            num_batches: 100,
            num_train_episodes: 50,
            num_test_episodes: 100,
            max_steps: 20,
            test_exploit_rate: 0.75,
            workers: 1,
            seed: 42,
            show_progress: false,
            learning: QLearningConfig::default().with_discount_rate(1.0),
        }
    }
}

impl TrainerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_num_batches(mut self, n: usize) -> Self {
        self.num_batches = n;
        self
    }

    pub fn with_train_episodes(mut self, n: usize) -> Self {
        self.num_train_episodes = n;
        self
    }

    pub fn with_test_episodes(mut self, n: usize) -> Self {
        self.num_test_episodes = n;
        self
    }

    pub fn with_max_steps(mut self, steps: usize) -> Self {
        self.max_steps = steps;
        self
    }

    pub fn with_test_exploit_rate(mut self, rate: f64) -> Self {
        self.test_exploit_rate = rate;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_learning(mut self, learning: QLearningConfig) -> Self {
        self.learning = learning;
        self
    }

    /// Check every field; returns the validated test exploit rate.
    pub fn validate(&self) -> Result<ExploitRate, ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        self.learning.validate()?;
        ExploitRate::new(self.test_exploit_rate)
    }
}
