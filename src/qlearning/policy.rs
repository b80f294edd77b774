//! Action selection and the learning policy.
//!
//! Selection is epsilon-greedy with the probability inverted: the
//! `ExploitRate` is the chance of following the cached best action.

use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, RolloutRng};
use crate::env::Environment;

use super::config::QLearningConfig;
use super::learner::Learner;
use super::table::QTable;

// =============================================================================
// Exploit Rate
// =============================================================================

/// Probability in `[0, 1]` of exploiting the best known action.
///
/// Deserialization goes through [`ExploitRate::new`], so stored configs
/// cannot smuggle in an out-of-range rate.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ExploitRate(f64);

impl ExploitRate {
    /// Always explore.
    pub const EXPLORE: Self = Self(0.0);

    /// Always exploit when a best action is known.
    pub const GREEDY: Self = Self(1.0);

    /// Reject probabilities outside `[0, 1]` (including NaN).
    pub fn new(rate: f64) -> Result<Self, ConfigError> {
        if (0.0..=1.0).contains(&rate) {
            Ok(Self(rate))
        } else {
            Err(ConfigError::ExploitRateOutOfRange(rate))
        }
    }

    /// Training schedule: `0.5 + batch / (2 · num_batches)`.
    ///
    /// Starts at 0.5 and approaches 1.0 on the last batch. Clamped so batch
    /// indices past the end stay valid.
    #[must_use]
    pub fn ramp(batch: usize, num_batches: usize) -> Self {
        if num_batches == 0 {
            return Self::GREEDY;
        }
        let rate = 0.5 + batch as f64 / (2.0 * num_batches as f64);
        Self(rate.min(1.0))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for ExploitRate {
    type Error = ConfigError;

    fn try_from(rate: f64) -> Result<Self, Self::Error> {
        Self::new(rate)
    }
}

impl From<ExploitRate> for f64 {
    fn from(rate: ExploitRate) -> Self {
        rate.0
    }
}

// =============================================================================
// Selection
// =============================================================================

/// Pick the learner's best action with probability `rate`, otherwise a
/// uniformly random legal one.
///
/// Falls back to a random action when exploiting finds nothing recorded.
/// Returns `None` only when no action is legal.
pub fn select_action<E, L>(
    learner: &L,
    env: &E,
    rate: ExploitRate,
    rng: &mut RolloutRng,
) -> Option<E::Action>
where
    E: Environment,
    L: Learner<E::State, E::Action> + ?Sized,
{
    if rng.gen_bool(rate.value()) {
        if let Some(best) = learner.best_action(&env.state()) {
            return Some(best.clone());
        }
    }
    random_action(env, rng)
}

/// Uniformly random legal action, `None` if there is none.
pub fn random_action<E: Environment>(env: &E, rng: &mut RolloutRng) -> Option<E::Action> {
    rng.choose(&env.legal_actions()).cloned()
}

// =============================================================================
// Policy
// =============================================================================

/// A Q-table plus the selection rule that reads it.
#[derive(Clone, Debug)]
pub struct Policy<S, A> {
    table: QTable<S, A>,
}

impl<S, A> Policy<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    pub fn new(config: QLearningConfig) -> Self {
        Self {
            table: QTable::new(config),
        }
    }

    /// Choose an action for the environment's current state.
    pub fn pick_action<E>(&self, env: &E, rate: ExploitRate, rng: &mut RolloutRng) -> Option<A>
    where
        E: Environment<State = S, Action = A>,
    {
        select_action(&self.table, env, rate, rng)
    }

    /// Uniformly random legal action.
    pub fn random_action<E>(&self, env: &E, rng: &mut RolloutRng) -> Option<A>
    where
        E: Environment<State = S, Action = A>,
    {
        random_action(env, rng)
    }

    /// Apply the Q-learning update; returns the new `Q(old, action)`.
    pub fn update(&mut self, old: &S, action: &A, new: &S, reward: f64) -> f64 {
        self.table.update(old, action, new, reward)
    }

    #[must_use]
    pub fn max_reward(&self, state: &S) -> f64 {
        self.table.max_reward(state)
    }

    #[must_use]
    pub fn num_known_states(&self) -> usize {
        self.table.num_known_states()
    }

    pub fn table(&self) -> &QTable<S, A> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut QTable<S, A> {
        &mut self.table
    }

    pub fn into_table(self) -> QTable<S, A> {
        self.table
    }
}

impl<S, A> Learner<S, A> for Policy<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    fn best_action(&self, state: &S) -> Option<&A> {
        self.table.best_action(state)
    }

    fn learn(&mut self, old: &S, action: &A, new: &S, reward: f64) {
        self.update(old, action, new, reward);
    }
}
