//! Tabular state/action value store.
//!
//! Each discovered state owns a small action table plus a cached best
//! action. Entries are created lazily and never removed during a run.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::config::QLearningConfig;
use super::learner::Transition;

/// Expected rewards of the actions tried from one state.
#[derive(Clone, Debug)]
pub struct ActionValues<A> {
    values: FxHashMap<A, f64>,
    best: Option<A>,
}

impl<A> Default for ActionValues<A> {
    fn default() -> Self {
        Self {
            values: FxHashMap::default(),
            best: None,
        }
    }
}

impl<A: Clone + Eq + Hash> ActionValues<A> {
    /// Create an empty action table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored value of `action`, 0 if never recorded.
    #[must_use]
    pub fn expected_reward(&self, action: &A) -> f64 {
        self.values.get(action).copied().unwrap_or(0.0)
    }

    /// Value of the cached best action, 0 if nothing is recorded.
    #[must_use]
    pub fn max_reward(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(0.0, |best| self.expected_reward(best))
    }

    /// The cached best action.
    ///
    /// Maintained incrementally: if the best action's value later drops,
    /// the cache is not recomputed.
    #[must_use]
    pub fn best_action(&self) -> Option<&A> {
        self.best.as_ref()
    }

    /// Record `value` for `action`, promoting it to best if it is the first
    /// entry or beats the cached best.
    pub fn set_expected_reward(&mut self, action: A, value: f64) {
        let promote = match &self.best {
            None => true,
            Some(best) => value > self.expected_reward(best),
        };
        self.values.insert(action.clone(), value);
        if promote {
            self.best = Some(action);
        }
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no action has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(action, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&A, f64)> {
        self.values.iter().map(|(a, v)| (a, *v))
    }
}

/// The Q-table: state → action values.
#[derive(Clone, Debug)]
pub struct QTable<S, A> {
    config: QLearningConfig,
    entries: FxHashMap<S, ActionValues<A>>,
}

impl<S, A> QTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    /// Create an empty table with the given rates.
    pub fn new(config: QLearningConfig) -> Self {
        Self {
            config,
            entries: FxHashMap::default(),
        }
    }

    /// The learning configuration.
    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    /// Action table for `state`, created empty on first visit.
    pub fn get_or_create(&mut self, state: &S) -> &mut ActionValues<A> {
        self.entries.entry(state.clone()).or_default()
    }

    /// Action table for `state`, if it has been visited.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<&ActionValues<A>> {
        self.entries.get(state)
    }

    /// One-step Q-learning update; returns the new `Q(old, action)`.
    ///
    /// `Q(s,a) ← Q(s,a) + α·(r + γ·max Q(s',·) − Q(s,a))`, where the max is
    /// the cached best value of `new` (0 when `new` has no actions yet).
    pub fn update(&mut self, old: &S, action: &A, new: &S, reward: f64) -> f64 {
        let max_next = self.get_or_create(new).max_reward();
        let QLearningConfig {
            learning_rate,
            discount_rate,
        } = self.config;

        let values = self.get_or_create(old);
        let current = values.expected_reward(action);
        let updated = current + learning_rate * (reward + discount_rate * max_next - current);
        values.set_expected_reward(action.clone(), updated);
        updated
    }

    /// Apply a recorded trace in order.
    pub fn merge_trace(&mut self, trace: impl IntoIterator<Item = Transition<S, A>>) {
        for t in trace {
            self.update(&t.old, &t.action, &t.new, t.reward);
        }
    }

    /// Cached best action for `state`.
    #[must_use]
    pub fn best_action(&self, state: &S) -> Option<&A> {
        self.get(state).and_then(ActionValues::best_action)
    }

    /// Value of the cached best action for `state`, 0 if unknown.
    #[must_use]
    pub fn max_reward(&self, state: &S) -> f64 {
        self.get(state).map_or(0.0, ActionValues::max_reward)
    }

    /// Stored `Q(state, action)`, 0 if unknown.
    #[must_use]
    pub fn expected_reward(&self, state: &S, action: &A) -> f64 {
        self.get(state).map_or(0.0, |v| v.expected_reward(action))
    }

    /// Number of states seen so far.
    #[must_use]
    pub fn num_known_states(&self) -> usize {
        self.entries.len()
    }
}
