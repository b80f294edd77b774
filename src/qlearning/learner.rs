//! The seam between the episode runner and whatever stores values.
//!
//! `Learner` lets one rollout loop serve two modes:
//! - in place: a `QTable` (or `Policy`) applies every update immediately
//! - recorded: a `TraceRecorder` reads a frozen table and keeps the
//!   transitions for a single owner to apply later

use std::hash::Hash;

use super::table::QTable;

/// A table the episode runner can query and teach.
pub trait Learner<S, A> {
    /// Best known action from `state`.
    fn best_action(&self, state: &S) -> Option<&A>;

    /// Learn from one observed transition.
    fn learn(&mut self, old: &S, action: &A, new: &S, reward: f64);
}

/// One `(s, a, s', r)` step of a rollout.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition<S, A> {
    pub old: S,
    pub action: A,
    pub new: S,
    pub reward: f64,
}

impl<S, A> Transition<S, A> {
    pub fn new(old: S, action: A, new: S, reward: f64) -> Self {
        Self {
            old,
            action,
            new,
            reward,
        }
    }
}

impl<S, A> Learner<S, A> for QTable<S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    fn best_action(&self, state: &S) -> Option<&A> {
        QTable::best_action(self, state)
    }

    fn learn(&mut self, old: &S, action: &A, new: &S, reward: f64) {
        self.update(old, action, new, reward);
    }
}

/// Reads a shared, frozen table and records transitions instead of
/// writing them.
///
/// Used by parallel workers: the table is never mutated while they run, so
/// no update can be lost.
pub struct TraceRecorder<'t, S, A> {
    table: &'t QTable<S, A>,
    trace: Vec<Transition<S, A>>,
}

impl<'t, S, A> TraceRecorder<'t, S, A> {
    pub fn new(table: &'t QTable<S, A>) -> Self {
        Self {
            table,
            trace: Vec::new(),
        }
    }

    /// Transitions recorded so far.
    pub fn trace(&self) -> &[Transition<S, A>] {
        &self.trace
    }

    /// Consume the recorder, returning its trace.
    pub fn into_trace(self) -> Vec<Transition<S, A>> {
        self.trace
    }
}

impl<S, A> Learner<S, A> for TraceRecorder<'_, S, A>
where
    S: Clone + Eq + Hash,
    A: Clone + Eq + Hash,
{
    fn best_action(&self, state: &S) -> Option<&A> {
        self.table.best_action(state)
    }

    fn learn(&mut self, old: &S, action: &A, new: &S, reward: f64) {
        self.trace
            .push(Transition::new(old.clone(), action.clone(), new.clone(), reward));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qlearning::QLearningConfig;

    #[test]
    fn test_recorder_does_not_touch_table() {
        let mut table: QTable<u32, u8> = QTable::new(QLearningConfig::default());
        table.update(&0, &1, &1, 1.0);

        let mut recorder = TraceRecorder::new(&table);
        assert_eq!(recorder.best_action(&0), Some(&1));

        recorder.learn(&0, &2, &5, 3.0);
        recorder.learn(&5, &1, &6, -1.0);
        assert_eq!(recorder.trace().len(), 2);

        let trace = recorder.into_trace();
        assert_eq!(trace[0], Transition::new(0, 2, 5, 3.0));
        assert_eq!(table.num_known_states(), 2);
        assert_eq!(table.expected_reward(&0, &2), 0.0);
    }

    #[test]
    fn test_table_learns_in_place() {
        let mut table: QTable<u32, u8> = QTable::new(QLearningConfig::default());
        Learner::learn(&mut table, &0, &1, &1, 1.0);
        assert!((table.expected_reward(&0, &1) - 0.9).abs() < 1e-12);
        assert_eq!(Learner::best_action(&table, &0), Some(&1));
    }
}
