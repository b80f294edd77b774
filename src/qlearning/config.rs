//! Q-learning hyperparameters.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Learning and discount rates for the one-step Q-learning update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QLearningConfig {
    /// Step size α in (0, 1]. Higher values overwrite old estimates faster.
    pub learning_rate: f64,

    /// Discount γ in [0, 1] applied to the best next-state value.
    pub discount_rate: f64,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.9,
            discount_rate: 0.5,
        }
    }
}

impl QLearningConfig {
    /// Set the learning rate.
    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    /// Set the discount rate.
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Reject rates outside their ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.learning_rate > 0.0 && self.learning_rate <= 1.0) {
            return Err(ConfigError::InvalidRate {
                name: "learning_rate",
                value: self.learning_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.discount_rate) {
            return Err(ConfigError::InvalidRate {
                name: "discount_rate",
                value: self.discount_rate,
            });
        }
        Ok(())
    }
}
